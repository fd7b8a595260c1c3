//! Decoding of binary NBT into an [`Nbt`] tree.
//!
//! The decoder works on a byte slice that holds the whole document, and
//! produces a fully owned tree. Decompression is not done here, see
//! [`compression`][`crate::compression`] or [`Nbt::from_bytes`] for a
//! function that does both.
//!
//! ```
//! use minenbt::{de::from_bytes_with_opts, DeOpts, Mode};
//!
//! // An empty compound with no root name, as sent over the network.
//! let bytes = [10, 0];
//! let nbt = from_bytes_with_opts(&bytes, DeOpts::new().mode(Mode::Network)).unwrap();
//! assert_eq!(nbt.name, None);
//! ```
//!
//! # Leniency
//!
//! A negative length for a list or array is read as an empty list or array
//! rather than being rejected. Some writers produce these, and they carry no
//! data, so nothing is lost. Re-encoding writes a length of zero.
//!
//! # Limits
//!
//! Lengths are checked against the input that remains before anything is
//! allocated, so a short input cannot claim a huge array. Nesting of lists and
//! compounds is limited by [`DeOpts::max_depth`], which defaults to
//! [`DEFAULT_MAX_DEPTH`].

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    input::Slice,
    Compound, List, Mode, Nbt, Tag, Value, DEFAULT_MAX_DEPTH,
};

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeOpts {
    pub(crate) mode: Mode,
    pub(crate) max_depth: usize,
}

impl DeOpts {
    /// File mode with the default depth limit.
    pub fn new() -> Self {
        Self {
            mode: Mode::File,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set whether the root tag has a name on the wire.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Maximum number of nested lists and compounds. The root compound counts
    /// as one level. Deeper input fails with [`Error::DepthExceeded`].
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a single root tag in file mode. Bytes after the root are ignored.
pub fn from_bytes(input: &[u8]) -> Result<Nbt> {
    from_bytes_with_opts(input, DeOpts::new())
}

/// Decode a single root tag with the given options. Bytes after the root are
/// ignored, use a [`Decoder`] to find out how much was consumed.
pub fn from_bytes_with_opts(input: &[u8], opts: DeOpts) -> Result<Nbt> {
    Decoder::new(input, opts).decode()
}

/// Recursive descent decoder over a byte slice.
///
/// A failed decode returns no part of the tree. The position of the decoder
/// after an error is unspecified.
pub struct Decoder<'de> {
    input: Slice<'de>,
    opts: DeOpts,
    depth: usize,
}

impl<'de> Decoder<'de> {
    pub fn new(input: &'de [u8], opts: DeOpts) -> Self {
        Self {
            input: Slice::new(input),
            opts,
            depth: 0,
        }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.input.position()
    }

    /// Whether all input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Decode the next root tag.
    pub fn decode(&mut self) -> Result<Nbt> {
        let tag = self.input.consume_tag()?;
        if tag == Tag::End {
            return Err(Error::shape("unexpected End tag at root"));
        }

        let name = match self.opts.mode {
            Mode::File => Some(self.input.consume_str()?),
            Mode::Network => None,
        };

        let value = self.value(tag)?;
        trace!("decoded root {} {:?} ending at {}", tag, name, self.position());

        Ok(Nbt { name, value })
    }

    /// Decode root tags one after another until the input runs out. Some
    /// files hold more than one root.
    pub fn decode_all(&mut self) -> Result<Vec<Nbt>> {
        let mut roots = vec![];
        while !self.is_empty() {
            roots.push(self.decode()?);
        }
        Ok(roots)
    }

    fn value(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => return Err(Error::shape("End tag has no value")),
            Tag::Byte => Value::Byte(self.input.consume_i8()?),
            Tag::Short => Value::Short(self.input.consume_i16()?),
            Tag::Int => Value::Int(self.input.consume_i32()?),
            Tag::Long => Value::Long(self.input.consume_i64()?),
            Tag::Float => Value::Float(self.input.consume_f32()?),
            Tag::Double => Value::Double(self.input.consume_f64()?),
            Tag::String => Value::String(self.input.consume_str()?),
            Tag::ByteArray => {
                let size = self.consume_len(tag)?;
                Value::ByteArray(self.input.consume_byte_array(size)?)
            }
            Tag::IntArray => {
                let size = self.consume_len(tag)?;
                Value::IntArray(self.input.consume_int_array(size)?)
            }
            Tag::LongArray => {
                let size = self.consume_len(tag)?;
                Value::LongArray(self.input.consume_long_array(size)?)
            }
            Tag::List => Value::List(self.nested(Self::list)?),
            Tag::Compound => Value::Compound(self.nested(Self::compound)?),
        })
    }

    fn consume_len(&mut self, tag: Tag) -> Result<i32> {
        let size = self.input.consume_i32()?;
        if size < 0 {
            debug!("negative length {} for {} read as empty", size, tag);
            return Ok(0);
        }
        Ok(size)
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::DepthExceeded(self.opts.max_depth));
        }

        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn list(&mut self) -> Result<List> {
        let element = self.input.consume_tag()?;
        let size = self.consume_len(Tag::List)?;

        // End values have no payload, so a list of them would let a tiny
        // input describe a huge list. Empty lists of End are common though.
        if element == Tag::End && size != 0 {
            return Err(Error::shape(format!(
                "list of End tags with {} elements",
                size
            )));
        }

        // Every element takes at least one byte.
        let mut values = Vec::with_capacity((size as usize).min(self.input.remaining()));
        for _ in 0..size {
            values.push(self.value(element)?);
        }

        Ok(List::from_parts(element, values))
    }

    fn compound(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();

        loop {
            let tag = self.input.consume_tag()?;
            if tag == Tag::End {
                break;
            }

            let name = self.input.consume_str()?;
            let value = self.value(tag)?;
            compound.insert(name, value);
        }

        Ok(compound)
    }
}
