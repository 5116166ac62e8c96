use crate::Progression;
use path_data::{Module, ModuleId};
use serde::{Deserialize, Serialize};

/// Directed edge from a prerequisite to the module requiring it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub from: ModuleId,
    pub to: ModuleId,
    /// The prerequisite is completed, the path is drawn solid instead of dashed
    pub completed: bool,
}

/// Connections between modules, in module then prerequisite order
///
/// Prerequisites missing from `modules` yield no connection.
pub fn derive_connections(modules: &[Module]) -> Vec<Connection> {
    let progression = Progression::new(modules);
    let progression = &progression;

    modules
        .iter()
        .flat_map(move |module| {
            module.prerequisites.iter().filter_map(move |prereq| {
                Some(Connection {
                    from: prereq.clone(),
                    to: module.id.clone(),
                    completed: progression.is_completed(prereq)?,
                })
            })
        })
        .collect()
}
