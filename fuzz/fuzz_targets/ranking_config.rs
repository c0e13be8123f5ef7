#![no_main]

use libfuzzer_sys::fuzz_target;
use rankwise_methods::{RankingConfig, rank_alternatives};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = RankingConfig::from_json(text) else {
        return;
    };
    if config.matrix.alternatives() > 64 || config.matrix.criteria() > 16 {
        return;
    }
    if let Ok(ranking) = rank_alternatives(&config) {
        assert_eq!(ranking.len(), config.matrix.alternatives());
        let mut seen = ranking.order_of_alternatives();
        seen.sort_unstable();
        assert!(seen.iter().copied().eq(0..config.matrix.alternatives()));
    }
});
