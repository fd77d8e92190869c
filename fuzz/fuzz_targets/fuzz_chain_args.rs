#![no_main]

use libfuzzer_sys::fuzz_target;

use cinder_chainparams::{create_chain_params, ChainArgs};

// Arbitrary TOML must be rejected cleanly, never panic.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(args) = ChainArgs::from_toml_str(text) else {
        return;
    };
    let name = args.chain.clone();
    let _ = create_chain_params(&args, &name);
});
