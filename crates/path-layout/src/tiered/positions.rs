use super::{TieredLayout, Tiers};
use crate::{NodeSeeds, Position};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

/// Assign coordinates to nodes based on their tier structure and seeds
pub(crate) fn assign_coordinates<N, S>(
    layout: &TieredLayout,
    tiers: &Tiers<N>,
    seeds: &S,
) -> HashMap<N, Position>
where
    N: Copy + Eq + Hash,
    S: NodeSeeds<N>,
{
    let mut positions = HashMap::with_capacity(tiers.node_count());
    let tier_count = tiers.len();

    for (tier_index, tier) in tiers.iter().enumerate() {
        let base_x = layout.tier_x(tier_index, tier_count);
        let count = tier.nodes.len();
        trace!("tier {} holds {count} nodes at x={base_x}", tier.rank);

        for (index, &node) in tier.nodes.iter().enumerate() {
            let seed = seeds.seed(node);
            positions.insert(
                node,
                Position::new(
                    horizontal_position(layout, base_x, seed),
                    vertical_position(layout, index, count, seed),
                ),
            );
        }
    }

    positions
}

fn horizontal_position(layout: &TieredLayout, base_x: f64, seed: Option<f64>) -> f64 {
    layout.x_bounds.clamp(base_x + layout.x_jitter.cos(seed))
}

/// A lone node sits in the middle of the band, others are spread and jittered
fn vertical_position(layout: &TieredLayout, index: usize, count: usize, seed: Option<f64>) -> f64 {
    let base_y = layout.slot_y(index, count);
    if count <= 1 {
        return base_y;
    }
    layout.y_bounds.clamp(base_y + layout.y_jitter.sin(seed))
}
