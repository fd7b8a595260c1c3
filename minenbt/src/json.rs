//! JSON view of a tree that keeps every tag and name.
//!
//! Each value becomes an object with its tag name under `type`, its name
//! under `name` (left out when the value has no name) and its contents under
//! `payload`:
//!
//! * scalars and strings map to JSON numbers and strings,
//! * arrays map to arrays of numbers,
//! * a compound's payload is an array of the objects for its entries,
//! * a list's payload is an array of its elements' payloads, and the list
//!   object gets an extra `data_type` holding the element tag name.
//!
//! Floats that JSON cannot hold (NaN and the infinities) become `null`.
//!
//! ```
//! use minenbt::{Compound, Nbt};
//! use serde_json::json;
//!
//! let nbt = Nbt::new("root", Compound::new().with("intTest", 1));
//! assert_eq!(
//!     nbt.json(),
//!     json!({
//!         "type": "TAG_Compound",
//!         "name": "root",
//!         "payload": [{"type": "TAG_Int", "name": "intTest", "payload": 1}]
//!     })
//! );
//! ```

use serde_json::{Map, Number, Value as Json};

use crate::{Nbt, Value};

/// The JSON view of a whole tree.
///
/// Like encoding, this recurses once per level of nesting with no limit of
/// its own. Trees nested deeper than [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH)
/// levels are not something the decoder produces by default, and very deep
/// ones built in code can exhaust the stack.
pub fn to_json(nbt: &Nbt) -> Json {
    value_to_json(nbt.name(), &nbt.value)
}

/// The JSON view of a value with an optional name.
pub fn value_to_json(name: Option<&str>, value: &Value) -> Json {
    let mut obj = Map::new();
    obj.insert("type".to_owned(), Json::from(value.tag().name()));
    if let Some(name) = name {
        obj.insert("name".to_owned(), Json::from(name));
    }
    if let Value::List(list) = value {
        obj.insert(
            "data_type".to_owned(),
            Json::from(list.element_tag().name()),
        );
    }
    obj.insert("payload".to_owned(), payload(value));

    Json::Object(obj)
}

fn payload(value: &Value) -> Json {
    match value {
        Value::Byte(v) => Json::from(*v),
        Value::Short(v) => Json::from(*v),
        Value::Int(v) => Json::from(*v),
        Value::Long(v) => Json::from(*v),
        Value::Float(v) => float(*v),
        Value::Double(v) => double(*v),
        Value::String(v) => Json::from(v.as_str()),
        Value::ByteArray(v) => Json::from(v.clone()),
        Value::IntArray(v) => Json::from(v.clone()),
        Value::LongArray(v) => Json::from(v.clone()),
        Value::List(list) => Json::Array(list.iter().map(payload).collect()),
        Value::Compound(compound) => Json::Array(
            compound
                .iter()
                .map(|(name, v)| value_to_json(Some(name), v))
                .collect(),
        ),
    }
}

fn double(v: f64) -> Json {
    Number::from_f64(v).map_or(Json::Null, Json::Number)
}

// Going through the shortest text form keeps 0.1f32 as 0.1 rather than
// 0.10000000149011612.
fn float(v: f32) -> Json {
    v.to_string()
        .parse::<f64>()
        .map_or(Json::Null, double)
}
