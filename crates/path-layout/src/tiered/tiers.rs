use super::{LayoutError, Tier, Tiers};
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};
use petgraph::Direction;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use tracing::trace;

/// Group nodes by tier rank
///
/// Ranks come out ascending, nodes keep their input order within a rank.
pub(crate) fn group_by_tier<N, I>(nodes: I) -> Tiers<N>
where
    I: IntoIterator<Item = (N, u32)>,
{
    let mut groups: BTreeMap<u32, Vec<N>> = BTreeMap::new();
    for (node, rank) in nodes {
        groups.entry(rank).or_default().push(node);
    }

    Tiers {
        tiers: groups
            .into_iter()
            .map(|(rank, nodes)| Tier { rank, nodes })
            .collect(),
    }
}

/// Assign each node a depth one past its deepest predecessor
///
/// Depths are returned in the graph's node identifier order.
pub(crate) fn assign_depths<G>(graph: G) -> Result<Vec<(G::NodeId, u32)>, LayoutError<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighborsDirected,
    G::NodeId: Copy + Ord + Hash + std::fmt::Debug,
{
    // Convert to DiGraphMap for toposort
    let mut petgraph = DiGraphMap::new();
    for node in graph.node_identifiers() {
        petgraph.add_node(node);
    }
    for node in graph.node_identifiers() {
        for succ in graph.neighbors_directed(node, Direction::Outgoing) {
            petgraph.add_edge(node, succ, ());
        }
    }

    let topo_order =
        toposort(&petgraph, None).map_err(|cycle| LayoutError::Cycle(cycle.node_id()))?;

    let mut depths: HashMap<_, u32> = HashMap::with_capacity(topo_order.len());
    for &node in &topo_order {
        let depth = petgraph
            .neighbors_directed(node, Direction::Incoming)
            .map(|pred| depths.get(&pred).copied().unwrap_or(0) + 1)
            .max()
            .unwrap_or(0);
        trace!("node {node:?} at depth {depth}");
        depths.insert(node, depth);
    }

    Ok(graph
        .node_identifiers()
        .map(|node| (node, depths.get(&node).copied().unwrap_or(0)))
        .collect())
}
