use std::io::Write;

use flate2::write::{GzEncoder, ZlibEncoder};

use crate::{
    compression::{compress, compress_with_level, decompress, decompress_with},
    error::{ErrorKind, Result},
    test::builder::Builder,
    Compound, Compression, DeOpts, Mode, Nbt, SerOpts, Value,
};

fn sample() -> Nbt {
    Nbt::new(
        "hello world",
        Compound::new()
            .with("name", Value::String("Bananrama".to_owned()))
            .with("ticks", 1_000_000i64),
    )
}

#[test]
fn detect_raw_nbt() {
    let raw = Builder::new().start_compound("").end_compound().build();

    assert_eq!(Compression::detect(&raw), Compression::None);
    assert_eq!(Compression::detect(&[]), Compression::None);
    assert_eq!(Compression::detect(&[0x1f]), Compression::None);
}

#[test]
fn string_root_that_looks_like_zlib_is_raw() -> Result<()> {
    // Tag 0x08 then a name length of 0x1D00. 0x081D passes the zlib header
    // checksum.
    let name = "n".repeat(0x1d00);
    let raw = Nbt::new(name.clone(), Value::string("x")?).build(SerOpts::new())?;
    assert_eq!(&raw[..2], &[0x08, 0x1d]);

    assert_eq!(Compression::detect(&raw), Compression::None);
    let nbt = Nbt::from_bytes(&raw, None, DeOpts::new())?;
    assert_eq!(nbt.name(), Some(name.as_str()));
    assert_eq!(nbt.value.as_str(), Some("x"));
    Ok(())
}

#[test]
fn detect_compressed() -> Result<()> {
    let raw = Builder::new().start_compound("").end_compound().build();

    assert_eq!(
        Compression::detect(&compress(&raw, Compression::Gzip)?),
        Compression::Gzip
    );
    assert_eq!(
        Compression::detect(&compress(&raw, Compression::Zlib)?),
        Compression::Zlib
    );

    // Common zlib headers for each compression level.
    for header in [[0x78, 0x01], [0x78, 0x5e], [0x78, 0x9c], [0x78, 0xda]] {
        assert_eq!(Compression::detect(&header), Compression::Zlib);
    }
    Ok(())
}

#[test]
fn gzip_from_another_writer() -> Result<()> {
    let raw = sample().build(SerOpts::new())?;
    let mut enc = GzEncoder::new(vec![], flate2::Compression::best());
    enc.write_all(&raw)?;
    let gz = enc.finish()?;

    assert_eq!(Nbt::from_bytes(&gz, None, DeOpts::new())?, sample());
    Ok(())
}

#[test]
fn zlib_from_another_writer() -> Result<()> {
    let raw = sample().build(SerOpts::new())?;
    let mut enc = ZlibEncoder::new(vec![], flate2::Compression::fast());
    enc.write_all(&raw)?;
    let z = enc.finish()?;

    assert_eq!(Nbt::from_bytes(&z, None, DeOpts::new())?, sample());
    Ok(())
}

#[test]
fn each_framing_reads_back() -> Result<()> {
    for c in [Compression::None, Compression::Gzip, Compression::Zlib] {
        let bytes = sample().to_compressed_bytes(c, SerOpts::new())?;

        assert_eq!(Compression::detect(&bytes), c);
        assert_eq!(Nbt::from_bytes(&bytes, None, DeOpts::new())?, sample());
        assert_eq!(Nbt::from_bytes(&bytes, Some(c), DeOpts::new())?, sample());
    }
    Ok(())
}

#[test]
fn compression_levels() -> Result<()> {
    let raw = sample().build(SerOpts::new())?;

    for level in [flate2::Compression::none(), flate2::Compression::best()] {
        let gz = compress_with_level(&raw, Compression::Gzip, level)?;
        assert_eq!(&*decompress(&gz)?, &raw[..]);
    }
    Ok(())
}

#[test]
fn raw_is_borrowed() -> Result<()> {
    let raw = sample().build(SerOpts::new())?;
    let out = decompress(&raw)?;

    assert!(matches!(out, std::borrow::Cow::Borrowed(_)));
    Ok(())
}

#[test]
fn network_payload_through_zlib() -> Result<()> {
    let nbt = Nbt::unnamed(Compound::new().with("x", 1));
    let opts = SerOpts::new().mode(Mode::Network);
    let bytes = nbt.to_compressed_bytes(Compression::Zlib, opts)?;

    let back = Nbt::from_bytes(&bytes, None, DeOpts::new().mode(Mode::Network))?;
    assert_eq!(back, nbt);
    Ok(())
}

#[test]
fn truncated_gzip_is_error() -> Result<()> {
    let gz = compress(&sample().build(SerOpts::new())?, Compression::Gzip)?;
    let cut = &gz[..gz.len() / 2];

    let err = decompress(cut).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Compression);
    Ok(())
}

#[test]
fn truncated_zlib_is_error() -> Result<()> {
    let z = compress(&sample().build(SerOpts::new())?, Compression::Zlib)?;

    for len in [2, z.len() / 2, z.len() - 1] {
        let err = decompress(&z[..len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Compression, "cut at {}", len);
    }
    Ok(())
}

#[test]
fn corrupt_stream_is_error() {
    let mut gz = vec![0x1f, 0x8b];
    gz.extend_from_slice(&[0xff; 32]);
    assert_eq!(decompress(&gz).unwrap_err().kind(), ErrorKind::Compression);

    let mut z = vec![0x78, 0x9c];
    z.extend_from_slice(&[0xff; 32]);
    assert_eq!(decompress(&z).unwrap_err().kind(), ErrorKind::Compression);
}

#[test]
fn forced_framing_on_wrong_data() -> Result<()> {
    let raw = sample().build(SerOpts::new())?;

    assert_eq!(
        decompress_with(&raw, Compression::Gzip).unwrap_err().kind(),
        ErrorKind::Compression
    );
    Ok(())
}

#[test]
fn parse_names() {
    assert_eq!("gzip".parse(), Ok(Compression::Gzip));
    assert_eq!("gz".parse(), Ok(Compression::Gzip));
    assert_eq!("zlib".parse(), Ok(Compression::Zlib));
    assert_eq!("none".parse(), Ok(Compression::None));
    assert_eq!("raw".parse(), Ok(Compression::None));
    assert!("lz4".parse::<Compression>().is_err());

    for c in [Compression::None, Compression::Gzip, Compression::Zlib] {
        assert_eq!(c.to_string().parse(), Ok(c));
    }
}

#[test]
fn save_and_load() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("level.dat");

    sample().save(&path, Compression::Gzip, SerOpts::new())?;

    let on_disk = std::fs::read(&path)?;
    assert_eq!(Compression::detect(&on_disk), Compression::Gzip);
    assert_eq!(Nbt::load(&path, None, DeOpts::new())?, sample());
    Ok(())
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Nbt::load(dir.path().join("nope.dat"), None, DeOpts::new()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn failed_save_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.dat");
    let nbt = Nbt::new("", Value::String("x".repeat(70_000)));

    assert!(nbt.save(&path, Compression::Gzip, SerOpts::new()).is_err());
    assert!(!path.exists());
}
