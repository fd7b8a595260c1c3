use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::value::check_array_len;
use crate::Tag;

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let bytes = cesu8::to_java_cesu8(s);
        let len: u16 = bytes.len().try_into().map_err(|_| {
            Error::overflow(format!(
                "string of {} bytes exceeds maximum of {}",
                bytes.len(),
                u16::MAX
            ))
        })?;

        self.write_u16::<BigEndian>(len)?;
        self.write_all(&bytes)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize, tag: Tag) -> Result<()> {
        self.write_i32::<BigEndian>(check_array_len(len, tag)?)?;
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}
