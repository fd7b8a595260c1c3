#![no_main]
use libfuzzer_sys::fuzz_target;

use minenbt::{from_bytes_with_opts, to_bytes_with_opts, DeOpts, Mode, SerOpts};

fuzz_target!(|data: &[u8]| {
    for mode in [Mode::File, Mode::Network] {
        if let Ok(nbt) = from_bytes_with_opts(data, DeOpts::new().mode(mode)) {
            // Anything that decodes must encode, and read back the same.
            let bs = to_bytes_with_opts(&nbt, SerOpts::new().mode(mode)).unwrap();
            let back = from_bytes_with_opts(&bs, DeOpts::new().mode(mode)).unwrap();
            assert_eq!(bs, to_bytes_with_opts(&back, SerOpts::new().mode(mode)).unwrap());
        }
    }
});
