use std::collections::HashMap;
use std::hash::Hash;

/// Trait for providing the jitter seed of a node during layout computation
///
/// A node without a seed is placed without jitter.
pub trait NodeSeeds<N> {
    /// Get the seed of a node
    fn seed(&self, node: N) -> Option<f64>;
}

// Blanket implementation for closures
impl<N, F> NodeSeeds<N> for F
where
    F: Fn(N) -> Option<f64>,
{
    fn seed(&self, node: N) -> Option<f64> {
        self(node)
    }
}

// Implementation for HashMap
impl<N: Eq + Hash + Copy> NodeSeeds<N> for HashMap<N, f64> {
    fn seed(&self, node: N) -> Option<f64> {
        self.get(&node).copied()
    }
}
