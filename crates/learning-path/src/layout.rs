use crate::{MapConfig, TierStrategy};
use path_data::{Module, ModuleId};
use path_layout::{LayoutError, Position, TieredLayout, Tiers};
use petgraph::graphmap::DiGraphMap;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Positions and tiers of a module set
///
/// Modules are referred to by their index in the input slice.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleLayout {
    pub tiers: Tiers<usize>,
    pub positions: HashMap<usize, Position>,
}

impl ModuleLayout {
    /// Rank of the tier holding every module, indexed like the input
    pub fn ranks(&self, module_count: usize) -> Vec<u32> {
        let mut ranks = vec![0; module_count];
        for tier in self.tiers.iter() {
            for &index in &tier.nodes {
                ranks[index] = tier.rank;
            }
        }
        ranks
    }
}

/// Lays modules out according to a [`MapConfig`]
#[derive(Debug, Clone, Default)]
pub struct PathLayout {
    engine: TieredLayout,
    strategy: TierStrategy,
}

impl PathLayout {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            engine: config.layout.clone(),
            strategy: config.tier_strategy,
        }
    }

    /// Group modules into tiers
    ///
    /// # Errors
    /// Only the depth strategy can fail, when prerequisites form a cycle
    pub fn tiers(&self, modules: &[Module]) -> Result<Tiers<usize>, LayoutError<ModuleId>> {
        match self.strategy {
            TierStrategy::Declared => Ok(self
                .engine
                .compute_tiers(modules.iter().map(Module::tier_or_default).enumerate())),
            TierStrategy::Depth => {
                let graph = prerequisite_graph(modules);
                debug!("Prerequisite graph: {graph:?}");
                self.engine
                    .compute_depth_tiers(&graph)
                    .map_err(|LayoutError::Cycle(index)| LayoutError::Cycle(modules[index].id.clone()))
            }
        }
    }

    /// Compute tiers and positions in one go
    pub fn layout(&self, modules: &[Module]) -> Result<ModuleLayout, LayoutError<ModuleId>> {
        let tiers = self.tiers(modules)?;

        let seeds = |index: usize| {
            let id = &modules[index].id;
            let seed = id.seed();
            if seed.is_none() {
                trace!("Module {id} has no numeric id, placing it without jitter");
            }
            seed
        };
        let positions = self.engine.compute_positions(&tiers, &seeds);

        Ok(ModuleLayout { tiers, positions })
    }
}

/// Graph of module indices with an edge from each prerequisite to its dependent
///
/// Every module is a node, in input order. Unknown prerequisites are skipped.
pub fn prerequisite_graph(modules: &[Module]) -> DiGraphMap<usize, ()> {
    let index: HashMap<&ModuleId, usize> = modules
        .iter()
        .enumerate()
        .map(|(i, m)| (&m.id, i))
        .collect();

    let mut graph = DiGraphMap::with_capacity(modules.len(), modules.len());
    for i in 0..modules.len() {
        graph.add_node(i);
    }
    for (i, module) in modules.iter().enumerate() {
        for prereq in &module.prerequisites {
            if let Some(&from) = index.get(prereq) {
                graph.add_edge(from, i, ());
            }
        }
    }
    graph
}
