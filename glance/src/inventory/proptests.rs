//! Property-based tests for stack compaction.

use super::compact;
use crate::item::ItemStack;
use proptest::prelude::*;
use serde_json::json;

// Small id and data alphabets so duplicates are common
fn stack_strategy() -> impl Strategy<Value = ItemStack> {
    (
        prop::sample::select(vec!["apple", "bread", "stone", "air"]),
        0u32..=64,
        prop::option::of(0i64..3),
    )
        .prop_map(|(id, count, tag)| {
            let stack = ItemStack::new(id, count);
            match tag {
                Some(tag) => stack.with_data(json!({ "variant": tag })),
                None => stack,
            }
        })
}

fn total_count(slots: &[ItemStack]) -> u64 {
    slots
        .iter()
        .filter(|slot| !slot.is_empty())
        .map(|slot| u64::from(slot.count))
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Compacting twice changes nothing
    #[test]
    fn compact_is_idempotent(slots in prop::collection::vec(stack_strategy(), 0..40)) {
        let once = compact(&slots);
        prop_assert_eq!(compact(&once), once);
    }

    // No items appear or vanish
    #[test]
    fn compact_preserves_total_count(slots in prop::collection::vec(stack_strategy(), 0..40)) {
        prop_assert_eq!(total_count(&compact(&slots)), total_count(&slots));
    }

    // Output holds no empties and no two combinable entries
    #[test]
    fn compact_output_is_distinct(slots in prop::collection::vec(stack_strategy(), 0..40)) {
        let compacted = compact(&slots);
        for (i, a) in compacted.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for b in &compacted[i + 1..] {
                prop_assert!(!a.can_combine(b));
            }
        }
    }

    // Entries appear in the order their first occurrence did
    #[test]
    fn compact_keeps_first_seen_order(slots in prop::collection::vec(stack_strategy(), 0..40)) {
        let compacted = compact(&slots);
        let first_seen: Vec<usize> = compacted
            .iter()
            .map(|entry| {
                slots
                    .iter()
                    .position(|slot| !slot.is_empty() && slot.can_combine(entry))
                    .unwrap()
            })
            .collect();
        prop_assert!(first_seen.windows(2).all(|w| w[0] < w[1]));
    }
}
