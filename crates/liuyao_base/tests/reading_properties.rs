use liuyao_base::{
    ALL_RELATIVES, CoinConvention, DayPillar, Hexagram, ReadingConfig, Trigram, cast_reading,
    coins_from_counts, najia_branches, resolve_palace,
};
use proptest::prelude::*;

fn config(old_yin_at_zero: bool) -> ReadingConfig {
    let convention = if old_yin_at_zero {
        CoinConvention::OldYinAtZero
    } else {
        CoinConvention::OldYangAtZero
    };
    ReadingConfig::default().with_coin_convention(convention)
}

proptest! {
    #[test]
    fn moving_iff_old_count(
        counts in prop::array::uniform6(0u8..4),
        cycle in 0u8..60,
        old_yin_at_zero in any::<bool>()
    ) {
        let coins = coins_from_counts(&counts).expect("valid counts");
        let day = DayPillar::from_cycle_index(cycle);
        let r = cast_reading(coins, day, &config(old_yin_at_zero));
        for (line, count) in r.lines.iter().zip(counts) {
            prop_assert_eq!(line.is_moving, count == 0 || count == 3);
            prop_assert_eq!(line.variant.is_some(), line.is_moving);
        }
        prop_assert_eq!(r.transformed.is_some(), counts.iter().any(|&c| c == 0 || c == 3));
    }

    #[test]
    fn casting_is_idempotent(
        counts in prop::array::uniform6(0u8..4),
        cycle in 0u8..60,
        old_yin_at_zero in any::<bool>()
    ) {
        let coins = coins_from_counts(&counts).expect("valid counts");
        let day = DayPillar::from_cycle_index(cycle);
        let c = config(old_yin_at_zero);
        prop_assert_eq!(cast_reading(coins, day, &c), cast_reading(coins, day, &c));
    }

    #[test]
    fn one_world_one_response_three_apart(
        counts in prop::array::uniform6(0u8..4),
        cycle in 0u8..60
    ) {
        let coins = coins_from_counts(&counts).expect("valid counts");
        let r = cast_reading(coins, DayPillar::from_cycle_index(cycle), &ReadingConfig::default());
        prop_assert_eq!(r.lines.iter().filter(|l| l.is_world).count(), 1);
        prop_assert_eq!(r.lines.iter().filter(|l| l.is_response).count(), 1);
        prop_assert_eq!(r.world_line.abs_diff(r.response_line), 3);
        prop_assert!(r.world().is_world);
    }

    #[test]
    fn hidden_spirits_carry_missing_relatives_only(
        counts in prop::array::uniform6(0u8..4),
        cycle in 0u8..60
    ) {
        let coins = coins_from_counts(&counts).expect("valid counts");
        let r = cast_reading(coins, DayPillar::from_cycle_index(cycle), &ReadingConfig::default());
        let missing: Vec<_> = ALL_RELATIVES
            .iter()
            .copied()
            .filter(|k| r.lines.iter().all(|l| l.relative != *k))
            .collect();
        for (_, h) in r.hidden_spirits() {
            prop_assert!(missing.contains(&h.relative));
        }
        prop_assert_eq!(r.hidden_spirits().count(), missing.len());
    }

    #[test]
    fn moved_lines_flip_polarity(
        counts in prop::array::uniform6(0u8..4),
        old_yin_at_zero in any::<bool>()
    ) {
        let coins = coins_from_counts(&counts).expect("valid counts");
        let day = DayPillar::from_cycle_index(0);
        let r = cast_reading(coins, day, &config(old_yin_at_zero));
        if let Some(t) = r.transformed {
            let changed = t.hexagram.lines();
            for line in &r.lines {
                let i = (line.position - 1) as usize;
                prop_assert_eq!(changed[i] != line.is_yang, line.is_moving);
            }
            prop_assert_eq!(resolve_palace(t.hexagram).palace, t.palace);
        }
    }

    #[test]
    fn same_trigram_same_slot_same_branches(
        lower in 0u8..8,
        upper in 0u8..8,
        other in 0u8..8
    ) {
        let a = Hexagram::new(Trigram::from_bits(lower), Trigram::from_bits(upper));
        let b = Hexagram::new(Trigram::from_bits(lower), Trigram::from_bits(other));
        let c = Hexagram::new(Trigram::from_bits(other), Trigram::from_bits(upper));
        let (na, nb, nc) = (najia_branches(&a), najia_branches(&b), najia_branches(&c));
        prop_assert_eq!(&na[..3], &nb[..3]);
        prop_assert_eq!(&na[3..], &nc[3..]);
    }

    #[test]
    fn void_branches_are_consecutive(cycle in 0u8..60) {
        let day = DayPillar::from_cycle_index(cycle);
        let [first, second] = day.void_branches();
        prop_assert_eq!(first.offset(1), second);
        prop_assert!(!day.is_void(day.branch()));
    }
}
