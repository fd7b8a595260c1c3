use std::error::Error;
use std::io::{self, Read, Write};

use clap::{App, Arg};
use env_logger::Env;
use log::{debug, info};
use minenbt::{de::Decoder, Compression, DeOpts, Mode, Nbt, DEFAULT_MAX_DEPTH};

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn read_input(path: &str) -> Result<Vec<u8>> {
    let mut data = vec![];
    if path == "-" {
        io::stdin().read_to_end(&mut data)?;
    } else {
        data = std::fs::read(path)?;
    }
    Ok(data)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt-dump")
        .about("print NBT files as an indented tree or as JSON")
        .arg(
            Arg::with_name("file")
                .required(true)
                .help("NBT file to read, or - for stdin"),
        )
        .arg(
            Arg::with_name("compression")
                .long("compression")
                .short("c")
                .takes_value(true)
                .possible_values(&["auto", "none", "gzip", "zlib"])
                .default_value("auto")
                .help("framing of the input"),
        )
        .arg(
            Arg::with_name("network")
                .long("network")
                .short("n")
                .help("the root tag has no name, as sent over the network"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .short("j")
                .help("print JSON rather than a tree"),
        )
        .arg(
            Arg::with_name("plain")
                .long("plain")
                .short("p")
                .conflicts_with("json")
                .help("print the values as plain JSON, without tags or names"),
        )
        .arg(
            Arg::with_name("all")
                .long("all")
                .short("a")
                .help("print every root tag in the input rather than just the first"),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .help("maximum nesting of lists and compounds"),
        )
        .get_matches();

    let path = matches.value_of("file").unwrap();
    let compression = match matches.value_of("compression").unwrap() {
        "auto" => None,
        name => Some(name.parse::<Compression>()?),
    };
    let mode = if matches.is_present("network") {
        Mode::Network
    } else {
        Mode::File
    };
    let max_depth = match matches.value_of("max-depth") {
        Some(depth) => depth.parse()?,
        None => DEFAULT_MAX_DEPTH,
    };
    let opts = DeOpts::new().mode(mode).max_depth(max_depth);

    let data = read_input(path)?;
    debug!("read {} bytes from {}", data.len(), path);

    let roots = if matches.is_present("all") {
        let raw = match compression {
            Some(c) => minenbt::compression::decompress_with(&data, c)?,
            None => minenbt::compression::decompress(&data)?,
        };
        Decoder::new(&raw, opts).decode_all()?
    } else {
        vec![Nbt::from_bytes(&data, compression, opts)?]
    };
    info!("decoded {} root tag(s)", roots.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for nbt in &roots {
        if matches.is_present("json") {
            serde_json::to_writer_pretty(&mut out, &nbt.json())?;
            writeln!(out)?;
        } else if matches.is_present("plain") {
            serde_json::to_writer_pretty(&mut out, &nbt.value)?;
            writeln!(out)?;
        } else {
            write!(out, "{}", nbt)?;
        }
    }

    Ok(())
}
