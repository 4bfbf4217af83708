//! Property-based tests for tooltip composition.

use super::{TooltipLeaf, TooltipNode, TooltipPayload, TooltipRenderer};
use proptest::prelude::*;

fn leaf_strategy() -> impl Strategy<Value = TooltipNode> {
    (0u32..500, 0u32..500)
        .prop_map(|(width, height)| TooltipNode::leaf(width, height, TooltipPayload::Armor { protection: 0 }))
}

// Leaves and compounds up to three levels deep
fn node_strategy() -> impl Strategy<Value = TooltipNode> {
    leaf_strategy().prop_recursive(3, 32, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(TooltipNode::compound)
    })
}

/// Records the vertical span of each drawn leaf.
#[derive(Default)]
struct Spans(Vec<(i32, u32)>);

impl TooltipRenderer for Spans {
    fn draw_leaf(&mut self, leaf: &TooltipLeaf, _x: i32, y: i32) {
        self.0.push((y, leaf.height()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Compound height is the sum of the children's, width the max
    #[test]
    fn compound_measures_children(children in prop::collection::vec(node_strategy(), 0..8)) {
        let height: u32 = children.iter().map(TooltipNode::height).sum();
        let width = children.iter().map(TooltipNode::width).max().unwrap_or(0);
        let node = TooltipNode::compound(children);
        prop_assert_eq!(node.height(), height);
        prop_assert_eq!(node.width(), width);
    }

    // Leaves are drawn back to back with no gaps or overlap
    #[test]
    fn render_stacks_without_gaps(node in node_strategy()) {
        let mut spans = Spans::default();
        node.render(&mut spans, 0, 0);

        let mut expected_y = 0i64;
        for (y, height) in &spans.0 {
            prop_assert_eq!(i64::from(*y), expected_y);
            expected_y += i64::from(*height);
        }
        prop_assert_eq!(expected_y, i64::from(node.height()));
    }
}
