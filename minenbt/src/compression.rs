//! Gzip and zlib framing around raw NBT.
//!
//! Files on disk such as `level.dat` and player data are gzip compressed,
//! chunks inside region files are usually zlib compressed, and the network
//! protocol sends raw NBT. When reading, the framing is detected from the
//! first bytes of the data. When writing, the framing is always chosen by the
//! caller.
//!
//! ```
//! use minenbt::compression::{compress, decompress};
//! use minenbt::Compression;
//!
//! let raw = [10, 0, 0, 0];
//! let gz = compress(&raw, Compression::Gzip).unwrap();
//! assert_eq!(Compression::detect(&gz), Compression::Gzip);
//! assert_eq!(&*decompress(&gz).unwrap(), &raw[..]);
//! ```

use std::borrow::Cow;
use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::{GzEncoder, ZlibEncoder};
use log::debug;

use crate::error::{Error, Result};
use crate::Tag;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// How NBT data is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Raw NBT.
    #[default]
    None,
    /// Gzip, as used by most NBT files.
    Gzip,
    /// Zlib, as used by chunks in region files.
    Zlib,
}

impl Compression {
    /// Work out the framing of `data` from its first bytes.
    pub fn detect(data: &[u8]) -> Compression {
        match data {
            [a, b, ..] if [*a, *b] == GZIP_MAGIC => Compression::Gzip,
            [cmf, flg, ..] if is_zlib_header(*cmf, *flg) => Compression::Zlib,
            _ => Compression::None,
        }
    }
}

// RFC 1950: deflate method, a window of at most 32K, no preset dictionary, and
// a header checksum that is a multiple of 31. A CMF of 0x08 (256 byte window)
// is also the String tag id, so it is read as raw NBT.
fn is_zlib_header(cmf: u8, flg: u8) -> bool {
    Tag::try_from(cmf).is_err()
        && cmf & 0x0f == 8
        && cmf >> 4 <= 7
        && flg & 0x20 == 0
        && ((cmf as u16) << 8 | flg as u16) % 31 == 0
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Compression::None => "none",
            Compression::Gzip => "gzip",
            Compression::Zlib => "zlib",
        })
    }
}

/// Returned when parsing a [`Compression`] from an unknown name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown compression '{0}', expected one of none, gzip, zlib")]
pub struct ParseCompressionError(String);

impl std::str::FromStr for Compression {
    type Err = ParseCompressionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "none" | "raw" => Ok(Compression::None),
            "gzip" | "gz" => Ok(Compression::Gzip),
            "zlib" => Ok(Compression::Zlib),
            _ => Err(ParseCompressionError(s.to_owned())),
        }
    }
}

/// Inflate `data` if it looks gzip or zlib compressed, otherwise hand it back
/// as is.
pub fn decompress(data: &[u8]) -> Result<Cow<'_, [u8]>> {
    let compression = Compression::detect(data);
    debug!("detected {} framing for {} bytes", compression, data.len());
    decompress_with(data, compression)
}

/// Inflate `data` that is known to use the given framing. A corrupt or
/// truncated stream is an error, never a partial result.
pub fn decompress_with(data: &[u8], compression: Compression) -> Result<Cow<'_, [u8]>> {
    match compression {
        Compression::None => Ok(Cow::Borrowed(data)),
        Compression::Gzip => {
            let mut buf = vec![];
            GzDecoder::new(data)
                .read_to_end(&mut buf)
                .map_err(Error::compression)?;
            Ok(Cow::Owned(buf))
        }
        Compression::Zlib => inflate_zlib(data).map(Cow::Owned),
    }
}

// The zlib reader in flate2 treats input that ends early as a clean end of
// stream, so drive the inflater directly and insist on reaching the end.
fn inflate_zlib(data: &[u8]) -> Result<Vec<u8>> {
    let mut inflater = flate2::Decompress::new(true);
    let mut out = Vec::with_capacity(data.len().saturating_mul(4).max(64));

    loop {
        let consumed = inflater.total_in() as usize;
        let status = inflater
            .decompress_vec(&data[consumed..], &mut out, flate2::FlushDecompress::Finish)
            .map_err(|e| Error::Compression(e.to_string()))?;

        match status {
            flate2::Status::StreamEnd => return Ok(out),
            // Room left in the output but no end of stream means the input ran out.
            _ if out.len() < out.capacity() => {
                return Err(Error::Compression("truncated zlib stream".to_owned()))
            }
            _ => out.reserve(out.capacity()),
        }
    }
}

/// Frame raw NBT with the given compression at the default level.
pub fn compress(data: &[u8], compression: Compression) -> Result<Vec<u8>> {
    compress_with_level(data, compression, flate2::Compression::default())
}

/// Frame raw NBT with the given compression and level.
pub fn compress_with_level(
    data: &[u8],
    compression: Compression,
    level: flate2::Compression,
) -> Result<Vec<u8>> {
    match compression {
        Compression::None => Ok(data.to_vec()),
        Compression::Gzip => {
            let mut enc = GzEncoder::new(vec![], level);
            enc.write_all(data).map_err(Error::compression)?;
            enc.finish().map_err(Error::compression)
        }
        Compression::Zlib => {
            let mut enc = ZlibEncoder::new(vec![], level);
            enc.write_all(data).map_err(Error::compression)?;
            enc.finish().map_err(Error::compression)
        }
    }
}
