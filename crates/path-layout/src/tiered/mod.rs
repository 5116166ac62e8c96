mod positions;
mod tiers;

use crate::{Band, Jitter, LayoutEngine, NodeSeeds, Position};
use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

use positions::assign_coordinates;
use tiers::{assign_depths, group_by_tier};

/// Errors that can occur during tiered layout computation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError<N>
where
    N: fmt::Debug,
{
    /// Dependency depth is undefined because the graph has a cycle at the given node
    #[error("graph contains a cycle at node {0:?}")]
    Cycle(N),
}

/// Configuration for the tiered layout
///
/// Tiers become columns spread across `x_band`. Nodes of a tier are spread
/// across `y_band`, then jittered and clamped to the `*_bounds` bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TieredLayout {
    /// Horizontal range used by tier columns
    pub x_band: Band,

    /// Vertical range used by the nodes of a tier
    pub y_band: Band,

    /// Final horizontal range after jitter
    pub x_bounds: Band,

    /// Final vertical range after jitter
    pub y_bounds: Band,

    /// Horizontal jitter, applied as a cosine of the seed
    pub x_jitter: Jitter,

    /// Vertical jitter, applied as a sine of the seed to tiers of two nodes or more
    pub y_jitter: Jitter,
}

impl Default for TieredLayout {
    fn default() -> Self {
        Self {
            x_band: Band::new(10.0, 90.0),
            y_band: Band::new(20.0, 80.0),
            x_bounds: Band::new(5.0, 95.0),
            y_bounds: Band::new(15.0, 85.0),
            x_jitter: Jitter::new(8.0, 7.3),
            y_jitter: Jitter::new(10.0, 13.7),
        }
    }
}

/// A group of nodes sharing a tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier<N> {
    /// Tier number, not necessarily contiguous with its neighbours
    pub rank: u32,

    /// Nodes in insertion order
    pub nodes: Vec<N>,
}

/// Tiers in ascending rank order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tiers<N> {
    pub tiers: Vec<Tier<N>>,
}

impl<N> Tiers<N> {
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tier<N>> {
        self.tiers.iter()
    }

    /// Total number of nodes across all tiers
    pub fn node_count(&self) -> usize {
        self.tiers.iter().map(|tier| tier.nodes.len()).sum()
    }
}

impl<N: PartialEq> Tiers<N> {
    /// Rank of the tier holding the given node
    pub fn rank_of(&self, node: &N) -> Option<u32> {
        self.tiers
            .iter()
            .find(|tier| tier.nodes.contains(node))
            .map(|tier| tier.rank)
    }
}

impl TieredLayout {
    /// Group nodes by their declared tier
    ///
    /// Ranks are sorted ascending and each tier keeps the order in which
    /// its nodes were given. Nothing is checked against the graph.
    pub fn compute_tiers<N, I>(&self, nodes: I) -> Tiers<N>
    where
        I: IntoIterator<Item = (N, u32)>,
    {
        group_by_tier(nodes)
    }

    /// Derive tiers from dependency depth
    ///
    /// Roots are in tier 0 and every other node sits one tier past its
    /// deepest predecessor. Nodes keep the graph's identifier order inside
    /// a tier.
    ///
    /// # Errors
    /// Returns an error if the graph contains cycles
    pub fn compute_depth_tiers<G>(&self, graph: G) -> Result<Tiers<G::NodeId>, LayoutError<G::NodeId>>
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected,
        G::NodeId: Copy + Ord + Hash + fmt::Debug,
    {
        let depths = assign_depths(graph)?;
        Ok(group_by_tier(depths))
    }

    /// Compute positions from tiers
    ///
    /// Returns a fresh map, the tiers are left untouched and can be reused
    /// when only seeds change.
    pub fn compute_positions<N, S>(&self, tiers: &Tiers<N>, seeds: &S) -> HashMap<N, Position>
    where
        N: Copy + Eq + Hash,
        S: NodeSeeds<N>,
    {
        assign_coordinates(self, tiers, seeds)
    }

    /// Unjittered horizontal position of the tier at `tier_index` out of `tier_count`
    pub fn tier_x(&self, tier_index: usize, tier_count: usize) -> f64 {
        let span = tier_count.saturating_sub(1).max(1);
        self.x_band.lerp(tier_index as f64 / span as f64)
    }

    /// Unjittered vertical position of the node at `index` out of `count` in a tier
    pub fn slot_y(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            self.y_band.center()
        } else {
            self.y_band.lerp(index as f64 / (count - 1) as f64)
        }
    }
}

// Implement LayoutEngine for any graph with the required capabilities
impl<G> LayoutEngine<G> for TieredLayout
where
    G: IntoNodeIdentifiers + IntoNeighborsDirected,
    G::NodeId: Copy + Ord + Hash + fmt::Debug,
{
    type NodeId = G::NodeId;
    type Error = LayoutError<G::NodeId>;

    fn layout<S>(&self, graph: G, seeds: &S) -> Result<HashMap<Self::NodeId, Position>, Self::Error>
    where
        S: NodeSeeds<Self::NodeId>,
    {
        let tiers = self.compute_depth_tiers(graph)?;
        Ok(self.compute_positions(&tiers, seeds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graphmap::DiGraphMap;
    use test_log::test;

    #[test]
    fn tier_x_spans_band() {
        let layout = TieredLayout::default();
        assert_eq!(layout.tier_x(0, 1), 10.0);
        assert_eq!(layout.tier_x(0, 3), 10.0);
        assert_eq!(layout.tier_x(1, 3), 50.0);
        assert_eq!(layout.tier_x(2, 3), 90.0);
    }

    #[test]
    fn slot_y_spreads_tier() {
        let layout = TieredLayout::default();
        assert_eq!(layout.slot_y(0, 1), 50.0);
        assert_eq!(layout.slot_y(0, 3), 20.0);
        assert_eq!(layout.slot_y(1, 3), 50.0);
        assert_eq!(layout.slot_y(2, 3), 80.0);
    }

    #[test]
    fn rank_of_node() {
        let layout = TieredLayout::default();
        let tiers = layout.compute_tiers([(1, 4), (2, 0), (3, 4)]);
        assert_eq!(tiers.rank_of(&3), Some(4));
        assert_eq!(tiers.rank_of(&2), Some(0));
        assert_eq!(tiers.rank_of(&9), None);
        assert_eq!(tiers.node_count(), 3);
    }

    #[test]
    fn engine_rejects_cycles() {
        let mut graph = DiGraphMap::<u32, ()>::new();
        graph.add_edge(1, 2, ());
        graph.add_edge(2, 1, ());

        let seeds = |_: u32| None::<f64>;
        let result = TieredLayout::default().layout(&graph, &seeds);
        assert!(matches!(result, Err(LayoutError::Cycle(_))));
    }

    #[test]
    fn engine_lays_out_chain_left_to_right() {
        let mut graph = DiGraphMap::<u32, ()>::new();
        graph.add_edge(1, 2, ());
        graph.add_edge(2, 3, ());

        let seeds = |_: u32| None::<f64>;
        let positions = TieredLayout::default().layout(&graph, &seeds).unwrap();
        assert_eq!(positions[&1], Position::new(10.0, 50.0));
        assert_eq!(positions[&2], Position::new(50.0, 50.0));
        assert_eq!(positions[&3], Position::new(90.0, 50.0));
    }
}
