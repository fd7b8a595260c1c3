//! Indented text view of a tree, one line per value.
//!
//! ```text
//! TAG_Compound("hello world"): 2 entries
//! {
//!     TAG_String("name"): "Bananrama"
//!     TAG_List("scores"): 2 entries of TAG_Int
//!     [
//!         TAG_Int(None): 1
//!         TAG_Int(None): 2
//!     ]
//! }
//! ```
//!
//! Arrays are written on one line after their length, byte arrays in hex.
//! Names are quoted, and list elements (which have no name) show `None`.

use std::fmt::{self, Display, Formatter};

use crate::{Nbt, Value};

const INDENT: usize = 4;

/// Render a whole tree. Every line, including the last, ends in a newline.
///
/// Rendering recurses once per level of nesting. Decoded trees are bounded by
/// [`DeOpts::max_depth`](crate::DeOpts::max_depth), but a tree built in code
/// with far deeper nesting can exhaust the stack.
pub fn render(nbt: &Nbt) -> String {
    nbt.to_string()
}

/// Render a value with an optional name. The same nesting caveat as
/// [`render`] applies.
pub fn render_value(name: Option<&str>, value: &Value) -> String {
    Tree { name, value }.to_string()
}

struct Tree<'a> {
    name: Option<&'a str>,
    value: &'a Value,
}

impl Display for Tree<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_tree(f, self.name, self.value)
    }
}

pub(crate) fn write_tree(
    f: &mut Formatter<'_>,
    name: Option<&str>,
    value: &Value,
) -> fmt::Result {
    write_node(f, name, value, 0)
}

struct Name<'a>(Option<&'a str>);

impl Display for Name<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(name) => write!(f, "{:?}", name),
            None => f.write_str("None"),
        }
    }
}

fn entries(n: usize) -> &'static str {
    if n == 1 {
        "entry"
    } else {
        "entries"
    }
}

fn write_array<T>(
    f: &mut Formatter<'_>,
    values: &[T],
    item: impl Fn(&mut Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    write!(f, ": {} {} [", values.len(), entries(values.len()))?;
    for (i, v) in values.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        item(f, v)?;
    }
    writeln!(f, "]")
}

fn write_node(
    f: &mut Formatter<'_>,
    name: Option<&str>,
    value: &Value,
    depth: usize,
) -> fmt::Result {
    let pad = depth * INDENT;
    write!(f, "{:pad$}{}({})", "", value.tag(), Name(name), pad = pad)?;

    match value {
        Value::Byte(v) => writeln!(f, ": {}", v),
        Value::Short(v) => writeln!(f, ": {}", v),
        Value::Int(v) => writeln!(f, ": {}", v),
        Value::Long(v) => writeln!(f, ": {}", v),
        Value::Float(v) => writeln!(f, ": {:?}", v),
        Value::Double(v) => writeln!(f, ": {:?}", v),
        Value::String(v) => writeln!(f, ": {:?}", v),
        Value::ByteArray(v) => write_array(f, v, |f, b| write!(f, "{:#04x}", b)),
        Value::IntArray(v) => write_array(f, v, |f, i| write!(f, "{}", i)),
        Value::LongArray(v) => write_array(f, v, |f, l| write!(f, "{}", l)),
        Value::List(list) => {
            writeln!(
                f,
                ": {} {} of {}",
                list.len(),
                entries(list.len()),
                list.element_tag()
            )?;
            writeln!(f, "{:pad$}[", "", pad = pad)?;
            for v in list {
                write_node(f, None, v, depth + 1)?;
            }
            writeln!(f, "{:pad$}]", "", pad = pad)
        }
        Value::Compound(compound) => {
            writeln!(f, ": {} {}", compound.len(), entries(compound.len()))?;
            writeln!(f, "{:pad$}{{", "", pad = pad)?;
            for (name, v) in compound {
                write_node(f, Some(name), v, depth + 1)?;
            }
            writeln!(f, "{:pad$}}}", "", pad = pad)
        }
    }
}
