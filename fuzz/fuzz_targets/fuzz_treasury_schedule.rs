#![no_main]

use libfuzzer_sys::fuzz_target;

use cinder_chainparams::{TreasuryFundSchedule, TreasuryFundSettings};

// Build a schedule from arbitrary (time, percent, period) records and check
// that lookups stay consistent with the accepted entries.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    let query_time = i64::from_le_bytes([
        data[0], data[1], data[2], data[3],
        data[4], data[5], data[6], data[7],
    ]);

    let mut schedule = TreasuryFundSchedule::new();
    let remaining = &data[8..];
    let mut offset = 0;
    while offset + 16 <= remaining.len() {
        let chunk = &remaining[offset..offset + 16];
        let time = i64::from_le_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3],
            chunk[4], chunk[5], chunk[6], chunk[7],
        ]);
        let percent = u32::from_le_bytes([chunk[8], chunk[9], chunk[10], chunk[11]]) % 128;
        let period = u32::from_le_bytes([chunk[12], chunk[13], chunk[14], chunk[15]]);

        if let Ok(settings) = TreasuryFundSettings::new("fuzz", percent, period) {
            let before = schedule.len();
            if schedule.push(time, settings).is_err() {
                assert_eq!(schedule.len(), before);
            }
        }
        offset += 16;
    }

    let times: Vec<i64> = schedule.entries().iter().map(|(t, _)| *t).collect();
    assert!(times.windows(2).all(|w| w[0] < w[1]));

    match schedule.activation_time_at(query_time) {
        Some(active) => assert!(active <= query_time),
        None => assert!(times.first().map_or(true, |first| query_time < *first)),
    }
});
