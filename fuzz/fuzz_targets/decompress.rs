#![no_main]
use libfuzzer_sys::fuzz_target;

use minenbt::{DeOpts, Nbt};

fuzz_target!(|data: &[u8]| {
    let _ = Nbt::from_bytes(data, None, DeOpts::new());
});
