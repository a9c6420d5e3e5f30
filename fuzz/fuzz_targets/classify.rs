#![no_main]

use libfuzzer_sys::fuzz_target;
use stylesniffer::StyleRegistry;
use stylesniffer_core::BuiltinStyle;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Classification is total: every style answers without panicking.
    for builtin in BuiltinStyle::ALL {
        let _ = builtin.style().classify(s);
    }

    if let Ok(registry) = StyleRegistry::with_defaults() {
        let _ = registry.find_by_classification(s);
        let _ = registry.find_by_name_or_variant(s);
    }
});
