//! Tiered graph layout in percentage coordinates
//!
//! This crate places the nodes of a prerequisite graph on a 0-100 canvas.
//! Nodes are grouped into ordered tiers which become columns, and each
//! column is spread vertically with a small seeded jitter so the result
//! looks organic while staying reproducible.
//!
//! # Tiering
//!
//! - [`TieredLayout::compute_tiers`]: trusts a tier number supplied per node
//! - [`TieredLayout::compute_depth_tiers`]: derives tiers from the graph,
//!   one past the deepest predecessor
//!
//! # Example
//!
//! ```
//! use path_layout::{LayoutEngine, TieredLayout};
//! use petgraph::graphmap::DiGraphMap;
//!
//! let mut graph = DiGraphMap::<u32, ()>::new();
//! graph.add_edge(1, 2, ());
//! graph.add_edge(1, 3, ());
//!
//! let engine = TieredLayout::default();
//!
//! // Jitter seeds, usually derived from node ids
//! let seeds = |node: u32| Some(f64::from(node));
//!
//! // Single call, tiers derived from the graph:
//! let positions = engine.layout(&graph, &seeds).unwrap();
//! assert_eq!(positions.len(), 3);
//!
//! // Or with author-declared tiers:
//! let tiers = engine.compute_tiers([(1, 0), (2, 1), (3, 1)]);
//! let positions = engine.compute_positions(&tiers, &seeds);
//! assert!(positions[&1].x < positions[&2].x);
//! ```

mod engine;
mod geometry;
mod seeds;

pub mod tiered;

pub use engine::LayoutEngine;
pub use geometry::{Band, Jitter, Position};
pub use seeds::NodeSeeds;

pub use petgraph::visit::{GraphBase, IntoNeighborsDirected, IntoNodeIdentifiers};
pub use petgraph::Direction;

pub use tiered::{LayoutError, Tier, TieredLayout, Tiers};
