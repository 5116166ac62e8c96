use path_data::{Module, ModuleId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Progression state of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Some prerequisite is not completed yet
    Locked,
    /// Not completed and every prerequisite is
    Available,
    Completed,
}

impl Status {
    pub fn is_locked(self) -> bool {
        self == Status::Locked
    }
}

/// Completion flags of a module set, indexed by id
#[derive(Debug, Clone)]
pub struct Progression<'a> {
    completed: HashMap<&'a ModuleId, bool>,
}

impl<'a> Progression<'a> {
    pub fn new(modules: &'a [Module]) -> Self {
        Self {
            completed: modules.iter().map(|m| (&m.id, m.completed)).collect(),
        }
    }

    /// Whether `id` is in the set and completed, `None` for unknown ids
    pub fn is_completed(&self, id: &ModuleId) -> Option<bool> {
        self.completed.get(id).copied()
    }

    /// Status of a module from the current completion flags
    ///
    /// Prerequisites missing from the set are treated as satisfied.
    pub fn status(&self, module: &Module) -> Status {
        if module.completed {
            return Status::Completed;
        }

        let satisfied = module
            .prerequisites
            .iter()
            .all(|prereq| match self.is_completed(prereq) {
                Some(done) => done,
                None => {
                    debug!("Ignoring unknown prerequisite {prereq} of {}", module.id);
                    true
                }
            });

        if satisfied {
            Status::Available
        } else {
            Status::Locked
        }
    }
}

/// Status of every module, in input order
pub fn resolve_statuses(modules: &[Module]) -> Vec<Status> {
    let progression = Progression::new(modules);
    modules.iter().map(|m| progression.status(m)).collect()
}
