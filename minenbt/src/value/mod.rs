mod compound;
mod list;
mod ser;

use std::convert::TryFrom;

pub use compound::Compound;
pub use list::List;

use crate::{
    error::{Error, Result},
    Tag,
};

/// The largest number of bytes a string can occupy once encoded as modified
/// UTF-8, set by its unsigned 16 bit length prefix.
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

/// The largest number of elements of an array or list, set by the signed 32
/// bit length prefix.
pub const MAX_ARRAY_LEN: usize = i32::MAX as usize;

/// Value is a complete NBT value. It owns its data. Compounds and Lists are
/// recursively owned, so a tree of values has no sharing and no cycles.
///
/// Names are not part of a value: entries of a [`Compound`] are keyed by their
/// name, elements of a [`List`] have no name, and the root's name is kept by
/// [`Nbt`][`crate::Nbt`].
///
/// The variants can be built directly, but the checked constructors such as
/// [`Value::string`] catch payloads the binary format cannot represent as
/// early as possible. The encoder checks again regardless.
///
/// ```
/// # use minenbt::{Value, Tag};
/// # fn main() -> minenbt::error::Result<()> {
/// let v = Value::byte_array(vec![0, 1, 2, 3])?;
/// assert_eq!(v.tag(), Tag::ByteArray);
///
/// let v: Value = 42i32.into();
/// assert_eq!(v.as_i64(), Some(42));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// Length of `s` once encoded as modified UTF-8, checked against the u16
/// prefix.
pub(crate) fn check_str_len(s: &str) -> Result<u16> {
    let len = cesu8::to_java_cesu8(s).len();
    u16::try_from(len).map_err(|_| {
        Error::overflow(format!(
            "string of {} bytes exceeds maximum of {}",
            len, MAX_STRING_LEN
        ))
    })
}

/// Checks `len` elements fit in the i32 prefix of arrays and lists.
pub(crate) fn check_array_len(len: usize, tag: Tag) -> Result<i32> {
    i32::try_from(len).map_err(|_| {
        Error::overflow(format!(
            "{} of {} elements exceeds maximum of {}",
            tag, len, MAX_ARRAY_LEN
        ))
    })
}

impl Value {
    /// Create a string value, failing if it would be longer than 65535 bytes
    /// once encoded.
    pub fn string(s: impl Into<String>) -> Result<Value> {
        let s = s.into();
        check_str_len(&s)?;
        Ok(Value::String(s))
    }

    /// Create a byte array value, failing if it has more than `i32::MAX`
    /// elements.
    pub fn byte_array(data: Vec<i8>) -> Result<Value> {
        check_array_len(data.len(), Tag::ByteArray)?;
        Ok(Value::ByteArray(data))
    }

    pub fn int_array(data: Vec<i32>) -> Result<Value> {
        check_array_len(data.len(), Tag::IntArray)?;
        Ok(Value::IntArray(data))
    }

    pub fn long_array(data: Vec<i64>) -> Result<Value> {
        check_array_len(data.len(), Tag::LongArray)?;
        Ok(Value::LongArray(data))
    }

    /// The tag this value is written with.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    /// Integer value of Byte, Short, Int and Long tags.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Value::LongArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------
//
// Only for payloads that can never be too long for the format. Strings and
// arrays go through the checked constructors.

macro_rules! from {
    ($type:ty, $variant:ident) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val)
            }
        }
    };
}
from!(i8, Byte);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

#[cfg(feature = "arbitrary1")]
fn hom_list<'a, T, F>(u: &mut arbitrary::Unstructured<'a>, f: F) -> arbitrary::Result<Vec<Value>>
where
    F: FnMut(T) -> Value,
    T: arbitrary::Arbitrary<'a>,
{
    Ok(u.arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect())
}

#[cfg(feature = "arbitrary1")]
pub(crate) fn arb_list(u: &mut arbitrary::Unstructured) -> arbitrary::Result<List> {
    let element = u.arbitrary::<Tag>()?;
    let values = match element {
        Tag::End => vec![],
        Tag::Byte => hom_list(u, Value::Byte)?,
        Tag::Short => hom_list(u, Value::Short)?,
        Tag::Int => hom_list(u, Value::Int)?,
        Tag::Long => hom_list(u, Value::Long)?,
        Tag::Float => hom_list(u, Value::Float)?,
        Tag::Double => hom_list(u, Value::Double)?,
        Tag::ByteArray => hom_list(u, Value::ByteArray)?,
        Tag::String => hom_list(u, Value::String)?,
        Tag::List => {
            // make a list of lists, each inner list may have its own tag.
            let len = u.arbitrary_len::<Value>()?;
            let mut v = vec![];
            for _ in 0..len {
                v.push(Value::List(arb_list(u)?));
            }
            v
        }
        Tag::Compound => hom_list(u, Value::Compound)?,
        Tag::IntArray => hom_list(u, Value::IntArray)?,
        Tag::LongArray => hom_list(u, Value::LongArray)?,
    };

    Ok(List::from_parts(element, values))
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(match u.arbitrary::<Tag>()? {
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Value::Byte(u.arbitrary()?),
            Tag::Short => Value::Short(u.arbitrary()?),
            Tag::Int => Value::Int(u.arbitrary()?),
            Tag::Long => Value::Long(u.arbitrary()?),
            Tag::Float => Value::Float(u.arbitrary()?),
            Tag::Double => Value::Double(u.arbitrary()?),
            Tag::ByteArray => Value::ByteArray(u.arbitrary()?),
            Tag::String => Value::String(u.arbitrary()?),
            Tag::Compound => Value::Compound(u.arbitrary()?),
            Tag::IntArray => Value::IntArray(u.arbitrary()?),
            Tag::LongArray => Value::LongArray(u.arbitrary()?),

            // Lists need to all be the same type.
            Tag::List => Value::List(arb_list(u)?),
        })
    }
}
