use std::error::Error;

use clap::{App, Arg};
use env_logger::Env;
use log::info;
use minenbt::{Compression, DeOpts, Mode, Nbt, SerOpts};

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn mode(network: bool) -> Mode {
    if network {
        Mode::Network
    } else {
        Mode::File
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt-convert")
        .about("re-encode an NBT file with different compression or root naming")
        .arg(Arg::with_name("input").required(true))
        .arg(Arg::with_name("output").required(true))
        .arg(
            Arg::with_name("compression")
                .long("compression")
                .short("c")
                .takes_value(true)
                .possible_values(&["none", "gzip", "zlib"])
                .default_value("gzip")
                .help("framing of the output"),
        )
        .arg(
            Arg::with_name("from-network")
                .long("from-network")
                .help("the input root tag has no name"),
        )
        .arg(
            Arg::with_name("to-network")
                .long("to-network")
                .help("write the root tag without a name"),
        )
        .arg(
            Arg::with_name("name")
                .long("name")
                .takes_value(true)
                .help("replace the name of the root tag"),
        )
        .get_matches();

    let input = matches.value_of_os("input").unwrap();
    let output = matches.value_of_os("output").unwrap();
    let compression: Compression = matches.value_of("compression").unwrap().parse()?;

    let de_opts = DeOpts::new().mode(mode(matches.is_present("from-network")));
    let ser_opts = SerOpts::new().mode(mode(matches.is_present("to-network")));

    let mut nbt = Nbt::load(input, None, de_opts)?;
    if let Some(name) = matches.value_of("name") {
        nbt.name = Some(name.to_owned());
    }

    nbt.save(output, compression, ser_opts)?;
    info!(
        "wrote {} root {:?} to {} with {} compression",
        nbt.tag(),
        nbt.name().unwrap_or_default(),
        output.to_string_lossy(),
        compression
    );

    Ok(())
}
