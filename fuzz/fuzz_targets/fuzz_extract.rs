#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Extraction must reject arbitrary input with a typed error, never panic.
    if let Ok(xml) = std::str::from_utf8(data) {
        let _ = esocial_irpf::extract::extract(xml);
    }
});
