//! This executable takes a path to a level.dat file for a world, and spits out
//! a new level.dat file in the current directory. The data is changed so that
//! the world spawn is set to 0,0.

use minenbt::{Compression, DeOpts, Nbt, SerOpts, Value};

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    let mut leveldat = Nbt::load(&args[1], None, DeOpts::new()).unwrap();

    let data = leveldat
        .value
        .as_compound_mut()
        .and_then(|level| level.get_mut("Data"))
        .and_then(Value::as_compound_mut)
        .expect("level.dat has no Data compound");

    data.insert("SpawnX", 0);
    data.insert("SpawnY", 100);
    data.insert("SpawnZ", 0);

    leveldat
        .save("level.dat", Compression::Gzip, SerOpts::new())
        .unwrap();
}
