use crate::{
    error::{Error, Result},
    Tag,
};

use super::Value;

/// A list of nameless values which all share one tag.
///
/// The element tag is part of the list even when it is empty, since it is
/// written out in the binary format. An empty list whose element tag is not
/// known uses [`Tag::End`], and adopts the tag of the first value pushed.
///
/// ```
/// # use minenbt::{List, Tag, Value};
/// # fn main() -> minenbt::error::Result<()> {
/// let mut list = List::new(Tag::Int);
/// list.push(1)?;
/// list.push(2)?;
/// assert!(list.push(Value::Long(3)).is_err());
/// assert_eq!(list.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: Tag,
    values: Vec<Value>,
}

impl Default for List {
    fn default() -> Self {
        List::new(Tag::End)
    }
}

impl List {
    /// Create an empty list of the given element tag.
    pub fn new(element: Tag) -> Self {
        Self {
            element,
            values: Vec::new(),
        }
    }

    /// Create a list from values, taking the element tag from the first
    /// value. Fails if the values do not all have the same tag.
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let element = values.first().map(Value::tag).unwrap_or(Tag::End);
        Self::with_element(element, values)
    }

    /// Create a list with an explicit element tag. Fails if any value has a
    /// different tag.
    pub fn with_element(element: Tag, values: Vec<Value>) -> Result<Self> {
        if element == Tag::End && !values.is_empty() {
            return Err(Error::shape("non-empty list cannot have End elements"));
        }
        if let Some(v) = values.iter().find(|v| v.tag() != element) {
            return Err(mismatch(element, v.tag()));
        }
        super::check_array_len(values.len(), Tag::List)?;

        Ok(Self { element, values })
    }

    /// Used where the values are known to match already.
    pub(crate) fn from_parts(element: Tag, values: Vec<Value>) -> Self {
        Self { element, values }
    }

    /// The tag every element of this list has.
    pub fn element_tag(&self) -> Tag {
        self.element
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Append a value. An empty list of End elements takes on the tag of the
    /// value, otherwise the tag must match.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let tag = value.tag();

        if self.element == Tag::End && self.values.is_empty() {
            self.element = tag;
        } else if tag != self.element {
            return Err(mismatch(self.element, tag));
        }

        self.values.push(value);
        Ok(())
    }

    /// Replace the value at `index`, returning the old one. The new value must
    /// have the list's element tag.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        if value.tag() != self.element {
            return Err(mismatch(self.element, value.tag()));
        }

        let len = self.values.len();
        let slot = self.values.get_mut(index).ok_or_else(|| {
            Error::shape(format!("index {} out of bounds for list of {}", index, len))
        })?;

        Ok(std::mem::replace(slot, value))
    }

    /// Remove the last value. The element tag is kept even if the list
    /// becomes empty.
    pub fn pop(&mut self) -> Option<Value> {
        self.values.pop()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

fn mismatch(expected: Tag, found: Tag) -> Error {
    Error::shape(format!("list of {} cannot contain {}", expected, found))
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
