use std::path::Path;

use log::debug;

use crate::{
    compression::{self, Compression},
    de::{self, DeOpts},
    error::Result,
    json, render,
    ser::{self, SerOpts},
    Tag, Value,
};

/// A root tag together with its name. This is what a whole NBT file or
/// network payload holds.
///
/// The name is `None` when there is no name at all, which is the case for
/// data read in [`Mode::Network`][`crate::Mode::Network`]. Files always have a
/// name on the wire, usually the empty string, which reads as `Some("")`.
///
/// ```no_run
/// use minenbt::{Compression, DeOpts, Nbt, SerOpts, Value};
/// # fn main() -> minenbt::error::Result<()> {
/// // Compression is detected when given None.
/// let mut level = Nbt::load("level.dat", None, DeOpts::new())?;
///
/// if let Some(data) = level
///     .value
///     .as_compound_mut()
///     .and_then(|c| c.get_mut("Data"))
///     .and_then(Value::as_compound_mut)
/// {
///     data.insert("SpawnX", 250);
/// }
///
/// level.save("level.dat", Compression::Gzip, SerOpts::new())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
pub struct Nbt {
    pub name: Option<String>,
    pub value: Value,
}

impl Nbt {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    /// A root without a name, as used by the network protocol.
    pub fn unnamed(value: impl Into<Value>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn tag(&self) -> Tag {
        self.value.tag()
    }

    /// Decode possibly compressed NBT. With `compression` of `None` the
    /// framing is detected from the data, otherwise the given framing is
    /// used.
    pub fn from_bytes(
        data: &[u8],
        compression: Option<Compression>,
        opts: DeOpts,
    ) -> Result<Nbt> {
        let raw = match compression {
            Some(c) => compression::decompress_with(data, c)?,
            None => compression::decompress(data)?,
        };

        de::from_bytes_with_opts(&raw, opts)
    }

    /// Read and decode a file. See [`Nbt::from_bytes`].
    pub fn load(
        path: impl AsRef<Path>,
        compression: Option<Compression>,
        opts: DeOpts,
    ) -> Result<Nbt> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        debug!("read {} bytes from {}", data.len(), path.display());

        Self::from_bytes(&data, compression, opts)
    }

    /// Encode to raw, uncompressed NBT.
    pub fn build(&self, opts: SerOpts) -> Result<Vec<u8>> {
        ser::to_bytes_with_opts(self, opts)
    }

    /// Encode and frame with the given compression.
    pub fn to_compressed_bytes(
        &self,
        compression: Compression,
        opts: SerOpts,
    ) -> Result<Vec<u8>> {
        compression::compress(&self.build(opts)?, compression)
    }

    /// Encode, compress and write to a file. Nothing is written if encoding
    /// fails.
    pub fn save(
        &self,
        path: impl AsRef<Path>,
        compression: Compression,
        opts: SerOpts,
    ) -> Result<()> {
        let path = path.as_ref();
        let data = self.to_compressed_bytes(compression, opts)?;
        std::fs::write(path, &data)?;
        debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    /// The JSON view of this tree, see [`json`][`crate::json`].
    pub fn json(&self) -> serde_json::Value {
        json::to_json(self)
    }

    /// The indented text view of this tree, see [`render`][`crate::render`].
    pub fn render(&self) -> String {
        render::render(self)
    }
}

impl std::fmt::Display for Nbt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render::write_tree(f, self.name(), &self.value)
    }
}
