#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use cinder_chainparams::{networks, BlockMeta, ChainArgs, RegtestParams};

#[derive(Debug, Arbitrary)]
struct Input {
    block_reward: i64,
    coin_year_reward: i64,
    height: u32,
    time: i64,
    fees: i64,
    prev_fee_rate: i64,
}

// Reward arithmetic must not panic for any override or block position.
fuzz_target!(|input: Input| {
    let Ok(mut regtest) = RegtestParams::new(&ChainArgs::default()) else {
        return;
    };
    regtest
        .set_block_reward(input.block_reward)
        .set_coin_year_reward(input.coin_year_reward);

    let prev = BlockMeta {
        height: input.height,
        time: input.time,
    };
    let split = regtest.pos_reward_split(&prev, input.fees);
    let _ = split.net();
    let _ = regtest.coin_year_reward(input.time);
    let _ = regtest.max_smsg_fee_rate_delta(input.prev_fee_rate, input.time);

    if let Ok(main) = networks::main_params() {
        let reward = main.pos_reward_split(&prev, 0);
        assert!(reward.treasury <= reward.gross);
        let _ = main.coin_year_reward(input.time);
    }
});
