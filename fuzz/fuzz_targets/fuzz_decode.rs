#![no_main]

use hufflen::codec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary containers may be rejected - we're looking for panics,
    // runaway allocation and hangs, not errors
    let _ = codec::payload_bits(data);
    let _ = codec::decode(data);
});
