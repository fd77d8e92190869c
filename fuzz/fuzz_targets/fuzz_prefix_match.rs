#![no_main]

use libfuzzer_sys::fuzz_target;

use cinder_chainparams::{networks, PrefixFamily};

// Arbitrary bytes must never panic the prefix matchers, and any exact
// match must map back to the same prefix bytes.
fuzz_target!(|data: &[u8]| {
    let Ok(params) = networks::main_params() else {
        return;
    };

    if let Some((ty, family)) = params.match_prefix(data) {
        assert_eq!(params.prefix_table(family).prefix_for(ty), data);
    }

    if let Some(ty) = params.match_bech32_leading(data) {
        let prefix = params.prefix_table(PrefixFamily::Bech32).prefix_for(ty);
        assert!(data.len() > prefix.len());
        assert!(data.starts_with(prefix));
    }

    let _ = params.is_bech32_prefix(data);
});
