use crate::{NodeSeeds, Position};
use std::collections::HashMap;
use std::hash::Hash;

/// A layout engine that can compute positions for graph nodes
///
/// The trait is generic over the graph type `G` so that engines can state
/// their own graph requirements. [`TieredLayout`](crate::TieredLayout)
/// implements it for any directed graph exposing petgraph's visitor traits.
pub trait LayoutEngine<G> {
    /// The type used to identify nodes in the graph
    type NodeId: Copy + Ord + Hash;

    /// The error returned when the graph can't be laid out
    type Error;

    /// Compute node positions for the given graph
    ///
    /// # Errors
    /// Returns an error if the graph violates a constraint of the engine,
    /// e.g. a cycle when tiers are derived from dependency depth
    fn layout<S>(&self, graph: G, seeds: &S) -> Result<HashMap<Self::NodeId, Position>, Self::Error>
    where
        S: NodeSeeds<Self::NodeId>;
}
