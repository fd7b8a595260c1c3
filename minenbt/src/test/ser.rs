use crate::{
    error::{Error, ErrorKind, Result},
    from_bytes, from_bytes_with_opts,
    ser::Encoder,
    test::builder::Builder,
    to_bytes, to_bytes_with_opts, to_writer, Compound, DeOpts, List, Mode, Nbt, SerOpts, Tag,
    Value,
};

#[test]
fn simple_compound_byte_exact() -> Result<()> {
    let nbt = Nbt::new(
        "hello",
        Compound::new()
            .with("b", 1i8)
            .with("s", 2i16)
            .with("i", 3i32)
            .with("l", 4i64)
            .with("f", 1.5f32)
            .with("d", 2.5f64)
            .with("str", Value::string("text")?),
    );

    let expected = Builder::new()
        .start_compound("hello")
        .byte("b", 1)
        .short("s", 2)
        .int("i", 3)
        .long("l", 4)
        .float("f", 1.5)
        .double("d", 2.5)
        .string("str", "text")
        .end_compound()
        .build();

    assert_eq!(to_bytes(&nbt)?, expected);
    Ok(())
}

#[test]
fn arrays_byte_exact() -> Result<()> {
    let nbt = Nbt::new(
        "",
        Compound::new()
            .with("b", Value::byte_array(vec![-1, 0, 1])?)
            .with("i", Value::int_array(vec![1, 2])?)
            .with("l", Value::long_array(vec![i64::MAX])?),
    );

    let expected = Builder::new()
        .start_compound("")
        .byte_array("b", &[-1, 0, 1])
        .int_array("i", &[1, 2])
        .long_array("l", &[i64::MAX])
        .end_compound()
        .build();

    assert_eq!(to_bytes(&nbt)?, expected);
    Ok(())
}

#[test]
fn lists_byte_exact() -> Result<()> {
    let mut ints = List::new(Tag::Int);
    ints.push(1)?;
    ints.push(2)?;

    let mut compounds = List::default();
    compounds.push(Compound::new().with("x", 1i8))?;

    let nbt = Nbt::new(
        "",
        Compound::new()
            .with("ints", ints)
            .with("empty", List::default())
            .with("compounds", compounds),
    );

    let expected = Builder::new()
        .start_compound("")
        .start_list("ints", Tag::Int, 2)
        .int_payload(1)
        .int_payload(2)
        .start_list("empty", Tag::End, 0)
        .start_list("compounds", Tag::Compound, 1)
        .byte("x", 1)
        .end_compound()
        .end_compound()
        .build();

    assert_eq!(to_bytes(&nbt)?, expected);
    Ok(())
}

#[test]
fn empty_typed_list_keeps_element_tag() -> Result<()> {
    let nbt = Nbt::new("", Compound::new().with("l", List::new(Tag::Double)));

    let expected = Builder::new()
        .start_compound("")
        .start_list("l", Tag::Double, 0)
        .end_compound()
        .build();

    assert_eq!(to_bytes(&nbt)?, expected);
    Ok(())
}

#[test]
fn network_mode_omits_root_name() -> Result<()> {
    let nbt = Nbt::unnamed(Compound::new().with("i", 7));
    let opts = SerOpts::new().mode(Mode::Network);

    let expected = Builder::new()
        .start_unnamed_compound()
        .int("i", 7)
        .end_compound()
        .build();

    let bytes = to_bytes_with_opts(&nbt, opts)?;
    assert_eq!(bytes, expected);

    let back = from_bytes_with_opts(&bytes, DeOpts::new().mode(Mode::Network))?;
    assert_eq!(back, nbt);
    Ok(())
}

#[test]
fn network_mode_ignores_a_given_name() -> Result<()> {
    let nbt = Nbt::new("ignored", Compound::new());
    let bytes = to_bytes_with_opts(&nbt, SerOpts::new().mode(Mode::Network))?;

    assert_eq!(bytes, [10, 0]);
    Ok(())
}

#[test]
fn unnamed_root_in_file_mode_gets_empty_name() -> Result<()> {
    let nbt = Nbt::unnamed(Compound::new());

    assert_eq!(to_bytes(&nbt)?, [10, 0, 0, 0]);
    assert_eq!(from_bytes(&to_bytes(&nbt)?)?.name(), Some(""));
    Ok(())
}

#[test]
fn modified_utf8_on_the_wire() -> Result<()> {
    let nbt = Nbt::new("", Value::string("a\0\u{1F600}")?);
    let bytes = to_bytes(&nbt)?;

    let expected = Builder::new()
        .tag(Tag::String)
        .name("")
        .raw_str_len(1 + 2 + 6)
        .raw_bytes(b"a")
        .raw_bytes(&[0xc0, 0x80])
        .raw_bytes(&[0xed, 0xa0, 0xbd, 0xed, 0xb8, 0x80])
        .build();

    assert_eq!(bytes, expected);
    assert_eq!(from_bytes(&bytes)?, nbt);
    Ok(())
}

#[test]
fn string_too_long() {
    let long = "a".repeat(u16::MAX as usize + 1);

    assert_eq!(
        Value::string(long.clone()).unwrap_err().kind(),
        ErrorKind::Overflow
    );

    // Bypassing the checked constructor is still caught when encoding.
    let nbt = Nbt::new("", Compound::new().with("s", Value::String(long)));
    assert!(matches!(to_bytes(&nbt), Err(Error::Overflow(_))));
}

#[test]
fn string_at_limit() -> Result<()> {
    let s = "a".repeat(u16::MAX as usize);
    let nbt = Nbt::new("", Value::string(s)?);

    assert_eq!(from_bytes(&to_bytes(&nbt)?)?, nbt);
    Ok(())
}

#[test]
fn string_limit_counts_encoded_bytes() {
    // Each null takes two bytes once encoded.
    let s = "\0".repeat(u16::MAX as usize / 2 + 1);

    assert_eq!(Value::string(s).unwrap_err().kind(), ErrorKind::Overflow);
}

#[test]
fn name_too_long() {
    let name = "n".repeat(u16::MAX as usize + 1);
    let nbt = Nbt::new("", Compound::new().with(name, 1));

    assert!(matches!(to_bytes(&nbt), Err(Error::Overflow(_))));
}

#[test]
fn depth_limit_when_encoding() -> Result<()> {
    let mut value = Value::Compound(Compound::new());
    for _ in 0..5 {
        value = Value::Compound(Compound::new().with("inner", value));
    }
    let nbt = Nbt::new("", value);

    assert!(to_bytes_with_opts(&nbt, SerOpts::new().max_depth(6)).is_ok());
    assert!(matches!(
        to_bytes_with_opts(&nbt, SerOpts::new().max_depth(5)),
        Err(Error::DepthExceeded(5))
    ));
    Ok(())
}

#[test]
fn to_writer_matches_to_bytes() -> Result<()> {
    let nbt = Nbt::new("w", Compound::new().with("x", 1.0f64));
    let mut out = vec![];
    to_writer(&mut out, &nbt)?;

    assert_eq!(out, to_bytes(&nbt)?);
    Ok(())
}

#[test]
fn encoder_writes_consecutive_roots() -> Result<()> {
    let mut enc = Encoder::new(vec![], SerOpts::new());
    enc.encode(&Nbt::new("first", Compound::new()))?;
    enc.encode(&Nbt::new("second", Compound::new()))?;

    let expected = Builder::new()
        .start_compound("first")
        .end_compound()
        .start_compound("second")
        .end_compound()
        .build();

    assert_eq!(enc.into_inner(), expected);
    Ok(())
}

#[test]
fn decode_then_encode_is_identity() -> Result<()> {
    let payload = Builder::new()
        .start_compound("Level")
        .long("LastUpdate", 1234)
        .start_list("Sections", Tag::Compound, 2)
        .byte("Y", 0)
        .long_array("BlockStates", &[1, 2, 3])
        .end_compound()
        .byte("Y", 1)
        .byte_array("SkyLight", &[0, 1, 2, 3])
        .end_compound()
        .start_list("Entities", Tag::End, 0)
        .int_array("Heightmap", &[64, 65, 66])
        .float("f", 0.1)
        .end_compound()
        .build();

    let nbt = from_bytes(&payload)?;
    assert_eq!(to_bytes(&nbt)?, payload);
    Ok(())
}

#[test]
fn negative_length_reencodes_as_zero() -> Result<()> {
    let payload = Builder::new()
        .start_compound("")
        .tag(Tag::IntArray)
        .name("i")
        .int_payload(-3)
        .end_compound()
        .build();

    let expected = Builder::new()
        .start_compound("")
        .int_array("i", &[])
        .end_compound()
        .build();

    assert_eq!(to_bytes(&from_bytes(&payload)?)?, expected);
    Ok(())
}
