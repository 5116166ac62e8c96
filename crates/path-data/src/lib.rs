mod error;
mod ser;

pub use error::*;
pub use ser::*;

use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;

/// Identifier of a module, unique within its course
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, From, Display)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, used to seed the layout jitter
    ///
    /// Ids that don't parse as an integer have no seed.
    pub fn seed(&self) -> Option<f64> {
        self.0.trim().parse::<i64>().ok().map(|n| n as f64)
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Kind of content behind a module, only relevant for rendering
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize, Default, Display)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    #[default]
    #[display("lesson")]
    Lesson,
    #[display("quiz")]
    Quiz,
    #[display("project")]
    Project,
    #[display("achievement")]
    Achievement,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: ModuleKind,
    #[serde(default)]
    pub completed: bool,
    // Accepted from upstream data but never trusted, the lock state is
    // always derived from prerequisites
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub prerequisites: Vec<ModuleId>,
    #[serde(default)]
    pub tier: Option<u32>,
}

impl Module {
    pub fn new(id: impl Into<ModuleId>, title: impl Into<String>, kind: ModuleKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            completed: false,
            locked: false,
            prerequisites: Vec::new(),
            tier: None,
        }
    }

    pub fn with_tier(mut self, tier: u32) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn with_prerequisites<I>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ModuleId>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Declared tier, modules without one belong to tier 0
    pub fn tier_or_default(&self) -> u32 {
        self.tier.unwrap_or(0)
    }

    pub fn is_root(&self) -> bool {
        self.prerequisites.is_empty()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    #[serde(default)]
    pub last_accessed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Course {
    pub fn new(title: impl Into<String>, modules: Vec<Module>) -> Self {
        Self {
            title: title.into(),
            last_accessed: None,
            modules,
        }
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id.as_str() == id)
    }

    /// Check that module ids are unique
    ///
    /// Prerequisites pointing outside the course are allowed.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::with_capacity(self.modules.len());
        for module in &self.modules {
            if !seen.insert(&module.id) {
                return Err(DataError::DuplicateModule(module.id.clone()));
            }
        }
        Ok(())
    }
}
