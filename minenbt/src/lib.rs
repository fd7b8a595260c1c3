//! minenbt reads and writes Minecraft's Named Binary Tag (NBT) format. This
//! format is used by the game to store various things, such as the world
//! data and player inventories, and by the network protocol to send
//! structured data.
//!
//! * For the tree of tags see [`Value`], [`List`] and [`Compound`].
//! * For a named root tag, and loading/saving files, see [`Nbt`].
//! * For decoding options (root name mode, depth limit) see [`de`].
//! * For encoding see [`ser`].
//! * For gzip and zlib handling see [`compression`].
//! * For human readable output see [`render`] and [`json`].
//!
//! # Quick example
//!
//! ```
//! use minenbt::{Compound, Nbt, Value};
//! # fn main() -> minenbt::error::Result<()> {
//! let mut root = Compound::new();
//! root.insert("key", Value::string("value")?);
//! root.insert("intTest", 1);
//!
//! let nbt = Nbt::new("compoundTest", root);
//! let bytes = minenbt::to_bytes(&nbt)?;
//!
//! let back = minenbt::from_bytes(&bytes)?;
//! assert_eq!(nbt, back);
//! println!("{}", back);
//! # Ok(())
//! # }
//! ```
//!
//! # Network mode
//!
//! Since Minecraft 1.20.2 (protocol 764) NBT sent over the network omits the
//! name of the root compound entirely. Use [`Mode::Network`] through
//! [`DeOpts`] and [`SerOpts`] to read and write that variant.

pub mod compression;
pub mod de;
pub mod error;
pub mod json;
pub mod render;
pub mod ser;

mod input;
mod nbt;
mod value;

pub use compression::Compression;
pub use de::{from_bytes, from_bytes_with_opts, DeOpts};
pub use nbt::*;
pub use ser::{to_bytes, to_bytes_with_opts, to_writer, SerOpts};
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other values, all elements have the same tag.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl Tag {
    /// The conventional name of the tag, as used in text and JSON output, eg
    /// `TAG_Compound`.
    pub fn name(self) -> &'static str {
        match self {
            Tag::End => "TAG_End",
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_ByteArray",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
            Tag::IntArray => "TAG_IntArray",
            Tag::LongArray => "TAG_LongArray",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually. The tags will very rarely
// change.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

/// Whether the root tag carries a name on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The root tag is followed by its name, like any other named tag. This is
    /// what files on disk use.
    #[default]
    File,
    /// The root tag has no name at all. Used by the network protocol since
    /// Minecraft 1.20.2.
    Network,
}

/// The nesting limit used by default when decoding and encoding. Matches the
/// limit the game itself enforces.
pub const DEFAULT_MAX_DEPTH: usize = 512;
