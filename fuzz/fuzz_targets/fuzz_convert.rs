#![no_main]

use libfuzzer_sys::fuzz_target;

// Accepts arbitrary bytes, decodes them as UTF-8 (lossily) and feeds the text
// through the analyzer and generator. Goal: no panics, even on malformed input.
fuzz_target!(|data: &[u8]| {
    let ddl = String::from_utf8_lossy(data);
    let model = ddl_camelcase_core::analyze(&ddl);
    let _ = ddl_camelcase_core::generate(&model, &Default::default());
});
