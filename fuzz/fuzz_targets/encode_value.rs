#![no_main]
use libfuzzer_sys::fuzz_target;

use minenbt::{from_bytes, json, render, to_bytes, Compound, Nbt, Value};

fuzz_target!(|v: Value| {
    let nbt = Nbt::new("", Compound::new().with("", v));

    let _ = json::to_json(&nbt);
    let _ = render::render(&nbt);

    // Strings and arrays that are too long fail to encode, everything else
    // must come back unchanged.
    if let Ok(bs) = to_bytes(&nbt) {
        let back = from_bytes(&bs).unwrap();
        assert_eq!(to_bytes(&back).unwrap(), bs);
    }
});
