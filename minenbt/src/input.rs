use std::ops::Range;

use byteorder::{BigEndian, ReadBytesExt};

use crate::{
    error::{Error, Result},
    Tag,
};

/// Number of bytes taken by `size` elements of `width` bytes each. Negative
/// sizes count as zero.
fn try_size(size: i32, width: usize) -> Result<usize> {
    let size = usize::try_from(size.max(0)).unwrap_or_default();

    size.checked_mul(width)
        .ok_or_else(|| Error::overflow(format!("size too large: {} * {}", size, width)))
}

/// Bounds checked view over the bytes still to be decoded. Every read
/// advances the view, so the decoder always makes progress.
pub(crate) struct Slice<'de> {
    data: &'de [u8],
    consumed: usize,
}

impl<'de> Slice<'de> {
    pub(crate) fn new(data: &'de [u8]) -> Self {
        Self { data, consumed: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.consumed
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len()
    }

    fn consume(&mut self, r: Range<usize>) -> Result<&'de [u8]> {
        if r.end <= self.data.len() {
            let ret = &self.data[r.start..r.end];
            self.data = &self.data[r.end..];
            self.consumed += r.end;
            Ok(ret)
        } else {
            Err(Error::UnexpectedEof)
        }
    }

    pub(crate) fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.consume(0..1)?[0])
    }

    pub(crate) fn consume_tag(&mut self) -> Result<Tag> {
        let tag = self.consume_byte()?;
        Tag::try_from(tag).map_err(|_| Error::InvalidTagId(tag))
    }

    pub(crate) fn consume_str(&mut self) -> Result<String> {
        let len = self.consume(0..2)?.read_u16::<BigEndian>()? as usize;
        let str = self.consume(0..len)?;
        // Modified UTF-8 writes U+0000 as two bytes and has no 4-byte sequences.
        if str.iter().any(|&b| b == 0 || b >= 0xf0) {
            return Err(Error::InvalidString(str.to_vec()));
        }
        let str = cesu8::from_java_cesu8(str).map_err(|_| Error::InvalidString(str.to_vec()))?;

        Ok(str.into_owned())
    }

    pub(crate) fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_byte()? as i8)
    }

    pub(crate) fn consume_i16(&mut self) -> Result<i16> {
        let mut bs = self.consume(0..std::mem::size_of::<i16>())?;
        Ok(bs.read_i16::<BigEndian>()?)
    }

    pub(crate) fn consume_i32(&mut self) -> Result<i32> {
        let mut bs = self.consume(0..std::mem::size_of::<i32>())?;
        Ok(bs.read_i32::<BigEndian>()?)
    }

    pub(crate) fn consume_i64(&mut self) -> Result<i64> {
        let mut bs = self.consume(0..std::mem::size_of::<i64>())?;
        Ok(bs.read_i64::<BigEndian>()?)
    }

    pub(crate) fn consume_f32(&mut self) -> Result<f32> {
        let mut bs = self.consume(0..std::mem::size_of::<f32>())?;
        Ok(bs.read_f32::<BigEndian>()?)
    }

    pub(crate) fn consume_f64(&mut self) -> Result<f64> {
        let mut bs = self.consume(0..std::mem::size_of::<f64>())?;
        Ok(bs.read_f64::<BigEndian>()?)
    }

    /// Take the bytes of `size` elements of `width` bytes. The whole run is
    /// bounds checked up front, so a bogus size fails before allocating.
    pub(crate) fn consume_elements(&mut self, size: i32, width: usize) -> Result<&'de [u8]> {
        let len = try_size(size, width)?;
        self.consume(0..len)
    }

    pub(crate) fn consume_byte_array(&mut self, size: i32) -> Result<Vec<i8>> {
        let bs = self.consume_elements(size, 1)?;
        Ok(bs.iter().map(|b| *b as i8).collect())
    }

    pub(crate) fn consume_int_array(&mut self, size: i32) -> Result<Vec<i32>> {
        let mut bs = self.consume_elements(size, std::mem::size_of::<i32>())?;
        let mut v = vec![0; bs.len() / std::mem::size_of::<i32>()];
        bs.read_i32_into::<BigEndian>(&mut v)?;
        Ok(v)
    }

    pub(crate) fn consume_long_array(&mut self, size: i32) -> Result<Vec<i64>> {
        let mut bs = self.consume_elements(size, std::mem::size_of::<i64>())?;
        let mut v = vec![0; bs.len() / std::mem::size_of::<i64>()];
        bs.read_i64_into::<BigEndian>(&mut v)?;
        Ok(v)
    }
}
