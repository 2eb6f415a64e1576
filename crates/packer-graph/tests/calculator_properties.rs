//! Property tests for the graph pack calculator.

use proptest::prelude::*;

use packer_core::types::{PackSize, Quantity, RequiredPacks};
use packer_graph::{calculate, GraphPackCalculator};

const STANDARD: [PackSize; 5] = [250, 500, 1000, 2000, 5000];

/// Exhaustive optimum: (minimum overshoot, minimum pack count at that overshoot).
fn brute_force(quantity: Quantity, sizes: &[PackSize]) -> (i64, u64) {
    let largest = i64::from(*sizes.iter().max().unwrap());
    let limit = (quantity + largest) as usize;
    let mut fewest = vec![u64::MAX; limit + 1];
    fewest[0] = 0;
    for total in 1..=limit {
        for &s in sizes {
            let s = s as usize;
            if s <= total && fewest[total - s] != u64::MAX {
                fewest[total] = fewest[total].min(fewest[total - s] + 1);
            }
        }
    }
    (quantity as usize..=limit)
        .find(|&t| fewest[t] != u64::MAX)
        .map(|t| (t as i64 - quantity, fewest[t]))
        .unwrap()
}

fn overshoot(packs: &RequiredPacks, quantity: Quantity) -> i64 {
    packs.shipped_quantity() as i64 - quantity
}

fn pack_sizes_strategy() -> impl Strategy<Value = Vec<PackSize>> {
    prop::collection::vec(1_u32..120, 1..5)
}

proptest! {
    #[test]
    fn never_ships_less_than_requested(
        sizes in pack_sizes_strategy(),
        quantity in 1_i64..20_000,
    ) {
        let packs = calculate(quantity, &sizes).unwrap();
        prop_assert!(packs.shipped_quantity() >= quantity as u128);
        for (size, count) in packs.iter() {
            prop_assert!(sizes.contains(&size));
            prop_assert!(count > 0);
        }
    }

    #[test]
    fn non_positive_quantity_is_empty(
        sizes in prop::collection::vec(0_u32..10_000, 0..6),
        quantity in i64::MIN..=0,
    ) {
        prop_assert!(calculate(quantity, &sizes).unwrap().is_empty());
    }

    #[test]
    fn repeated_calls_are_identical(
        sizes in pack_sizes_strategy(),
        quantity in 1_i64..50_000,
    ) {
        let calc = GraphPackCalculator::new(sizes);
        prop_assert_eq!(calc.calculate(quantity).unwrap(), calc.calculate(quantity).unwrap());
    }

    #[test]
    fn standard_catalog_is_optimal(quantity in 1_i64..25_000) {
        let packs = calculate(quantity, &STANDARD).unwrap();
        let (best_overshoot, best_count) = brute_force(quantity, &STANDARD);
        prop_assert_eq!(overshoot(&packs, quantity), best_overshoot);
        prop_assert_eq!(packs.total_packs(), best_count);
    }

    #[test]
    fn clamped_quantities_keep_the_preallocated_packs(quantity in 437_501_i64..5_000_000) {
        let threshold = 437_500;
        let preallocated = ((quantity - threshold) / 5000) as u64;
        let packs = calculate(quantity, &STANDARD).unwrap();
        prop_assert!(packs.get(5000) >= preallocated);
        prop_assert!(packs.shipped_quantity() >= quantity as u128);
        prop_assert!(overshoot(&packs, quantity) < 250);
    }
}

#[test]
fn small_catalogs_are_optimal_exhaustively() {
    for sizes in [vec![23, 31, 53], vec![6, 9, 20], vec![3, 5]] {
        let calc = GraphPackCalculator::new(sizes.clone());
        for quantity in 1..400 {
            let packs = calc.calculate(quantity).unwrap();
            let (best_overshoot, best_count) = brute_force(quantity, &sizes);
            assert_eq!(
                overshoot(&packs, quantity),
                best_overshoot,
                "sizes {sizes:?}, quantity {quantity}"
            );
            assert_eq!(
                packs.total_packs(),
                best_count,
                "sizes {sizes:?}, quantity {quantity}: {packs}"
            );
        }
    }
}
