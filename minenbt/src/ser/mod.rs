//! This module contains the NBT encoder. Use [`to_bytes`] or [`to_writer`]
//! for the common case, or an [`Encoder`] with [`SerOpts`] to write the
//! network variant or change the depth limit.
//!
//! Encoding is the mirror of decoding: values are written in the order they
//! are stored, so decoding then encoding canonical input reproduces it byte
//! for byte.
//!
//! Payloads that do not fit the format are an error rather than being
//! truncated: strings longer than 65535 bytes of modified UTF-8, and arrays or
//! lists with more than `i32::MAX` elements, fail with
//! [`Error::Overflow`][`crate::error::Error::Overflow`].
mod write_nbt;

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::{
    error::{Error, Result},
    Compound, List, Mode, Nbt, Tag, Value, DEFAULT_MAX_DEPTH,
};

use write_nbt::WriteNbt;

/// Options for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerOpts {
    pub(crate) mode: Mode,
    pub(crate) max_depth: usize,
}

impl SerOpts {
    /// File mode with the default depth limit.
    pub fn new() -> Self {
        Self {
            mode: Mode::File,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set whether the root name is written.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Maximum number of nested lists and compounds to write.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for SerOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode to a vector in file mode.
pub fn to_bytes(nbt: &Nbt) -> Result<Vec<u8>> {
    to_bytes_with_opts(nbt, SerOpts::new())
}

/// Encode to a vector with the given options.
pub fn to_bytes_with_opts(nbt: &Nbt, opts: SerOpts) -> Result<Vec<u8>> {
    let mut enc = Encoder::new(vec![], opts);
    enc.encode(nbt)?;
    Ok(enc.into_inner())
}

/// Encode to a writer in file mode. If this fails part of the data may already
/// have been written.
pub fn to_writer<W: Write>(writer: W, nbt: &Nbt) -> Result<()> {
    Encoder::new(writer, SerOpts::new()).encode(nbt)
}

pub struct Encoder<W: Write> {
    writer: W,
    opts: SerOpts,
    depth: usize,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W, opts: SerOpts) -> Self {
        Self {
            writer,
            opts,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a root tag. In file mode a root without a name is written with
    /// the empty name.
    pub fn encode(&mut self, nbt: &Nbt) -> Result<()> {
        self.writer.write_tag(nbt.value.tag())?;

        if self.opts.mode == Mode::File {
            self.writer
                .write_size_prefixed_str(nbt.name.as_deref().unwrap_or_default())?;
        }

        self.value(&nbt.value)
    }

    fn value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Byte(v) => self.writer.write_i8(*v)?,
            Value::Short(v) => self.writer.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.writer.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.writer.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.writer.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.writer.write_f64::<BigEndian>(*v)?,
            Value::String(v) => self.writer.write_size_prefixed_str(v)?,
            Value::ByteArray(v) => {
                self.writer.write_len(v.len(), Tag::ByteArray)?;
                let bs: Vec<u8> = v.iter().map(|b| *b as u8).collect();
                self.writer.write_all(&bs)?;
            }
            Value::IntArray(v) => {
                self.writer.write_len(v.len(), Tag::IntArray)?;
                for i in v {
                    self.writer.write_i32::<BigEndian>(*i)?;
                }
            }
            Value::LongArray(v) => {
                self.writer.write_len(v.len(), Tag::LongArray)?;
                for i in v {
                    self.writer.write_i64::<BigEndian>(*i)?;
                }
            }
            Value::List(v) => self.nested(|enc| enc.list(v))?,
            Value::Compound(v) => self.nested(|enc| enc.compound(v))?,
        }

        Ok(())
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::DepthExceeded(self.opts.max_depth));
        }

        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn list(&mut self, list: &List) -> Result<()> {
        self.writer.write_tag(list.element_tag())?;
        self.writer.write_len(list.len(), Tag::List)?;

        for v in list {
            self.value(v)?;
        }

        Ok(())
    }

    fn compound(&mut self, compound: &Compound) -> Result<()> {
        for (name, v) in compound {
            self.writer.write_tag(v.tag())?;
            self.writer.write_size_prefixed_str(name)?;
            self.value(v)?;
        }

        self.writer.write_tag(Tag::End)
    }
}
