//! Builds a small tree by hand, then prints it as text and as JSON along with
//! the raw bytes for both root conventions.

use minenbt::{Compound, List, Mode, Nbt, SerOpts, Tag, Value};

fn main() -> minenbt::error::Result<()> {
    let mut scores = List::new(Tag::Int);
    scores.push(10)?;
    scores.push(20)?;

    let root = Compound::new()
        .with("name", Value::string("Bananrama")?)
        .with("scores", scores)
        .with("health", 20.0f32);

    let nbt = Nbt::new("hello world", root);
    print!("{}", nbt);
    println!("{}", nbt.json());

    println!("file:    {:02x?}", nbt.build(SerOpts::new())?);
    println!(
        "network: {:02x?}",
        nbt.build(SerOpts::new().mode(Mode::Network))?
    );
    Ok(())
}
