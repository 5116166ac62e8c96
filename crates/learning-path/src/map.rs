use crate::{derive_connections, resolve_statuses, Connection, MapConfig, PathLayout, Status};
use path_data::{Course, DataError, ModuleId, ModuleKind};
use path_layout::{LayoutError, Position};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("invalid course")]
    Data(#[from] DataError),

    #[error("failed to lay out course")]
    Layout(#[from] LayoutError<ModuleId>),
}

/// A module placed on the map with its resolved state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapNode {
    pub id: ModuleId,
    pub title: String,
    pub kind: ModuleKind,
    pub tier: u32,
    pub position: Position,
    pub status: Status,
}

impl MapNode {
    pub fn is_locked(&self) -> bool {
        self.status.is_locked()
    }
}

/// Completed modules out of the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Share of completed modules in percent, 0 for an empty course
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub fn rounded_percent(&self) -> u32 {
        self.percent().round() as u32
    }
}

/// Outcome of trying to enter a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The navigator was told to open the module
    Navigated,
    /// The module is locked, nothing happened
    Locked,
    /// No module has this id, nothing happened
    Unknown,
}

/// Receives the modules a learner enters
pub trait Navigator {
    fn navigate(&mut self, id: &ModuleId);
}

impl<F> Navigator for F
where
    F: FnMut(&ModuleId),
{
    fn navigate(&mut self, id: &ModuleId) {
        self(id)
    }
}

/// Fully resolved view of a course: positions, statuses and connections
#[derive(Debug, Clone, Serialize)]
pub struct LearningMap {
    pub title: String,
    pub nodes: Vec<MapNode>,
    pub connections: Vec<Connection>,
    pub progress: Progress,
    #[serde(skip)]
    index: HashMap<ModuleId, usize>,
}

impl LearningMap {
    /// Resolve a course into a map
    ///
    /// Nothing is cached: every call recomputes everything from the course's
    /// current completion flags.
    ///
    /// # Errors
    /// Fails on duplicate module ids, or on prerequisite cycles with
    /// [`TierStrategy::Depth`](crate::TierStrategy::Depth)
    pub fn resolve(course: &Course, config: &MapConfig) -> Result<Self, MapError> {
        course.validate()?;
        let modules = &course.modules;
        debug!("Resolving {:?} with {} modules", course.title, modules.len());

        let layout = PathLayout::new(config).layout(modules)?;
        let ranks = layout.ranks(modules.len());
        let statuses = resolve_statuses(modules);
        let connections = derive_connections(modules);

        let nodes: Vec<MapNode> = modules
            .iter()
            .zip(statuses)
            .enumerate()
            .map(|(i, (module, status))| MapNode {
                id: module.id.clone(),
                title: module.title.clone(),
                kind: module.kind,
                tier: ranks[i],
                position: layout.positions[&i],
                status,
            })
            .collect();

        let progress = Progress {
            completed: nodes
                .iter()
                .filter(|n| n.status == Status::Completed)
                .count(),
            total: nodes.len(),
        };
        debug!(
            "Resolved {} nodes, {} connections, {}% complete",
            nodes.len(),
            connections.len(),
            progress.rounded_percent()
        );

        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();

        Ok(Self {
            title: course.title.clone(),
            nodes,
            connections,
            progress,
            index,
        })
    }

    pub fn node(&self, id: &str) -> Option<&MapNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Module to highlight as the learner's current one
    ///
    /// An explicit id wins when it exists on the map, otherwise the first
    /// available module in course order.
    pub fn current(&self, explicit: Option<&str>) -> Option<&MapNode> {
        explicit
            .and_then(|id| self.node(id))
            .or_else(|| self.nodes.iter().find(|n| n.status == Status::Available))
    }

    /// Try to enter a module, locked and unknown modules are ignored
    pub fn activate<N: Navigator>(&self, id: &str, navigator: &mut N) -> Activation {
        let Some(node) = self.node(id) else {
            debug!("Ignoring activation of unknown module {id}");
            return Activation::Unknown;
        };

        if node.is_locked() {
            debug!("Ignoring activation of locked module {id}");
            return Activation::Locked;
        }

        navigator.navigate(&node.id);
        Activation::Navigated
    }

    /// Endpoints of a connection, `None` if either end isn't on the map
    pub fn endpoints(&self, connection: &Connection) -> Option<(Position, Position)> {
        let from = self.node(connection.from.as_str())?;
        let to = self.node(connection.to.as_str())?;
        Some((from.position, to.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TierStrategy;
    use path_data::Module;
    use test_log::test;

    fn lesson(id: &str) -> Module {
        Module::new(id, format!("Lesson {id}"), ModuleKind::Lesson)
    }

    fn resolve(modules: Vec<Module>) -> LearningMap {
        LearningMap::resolve(&Course::new("Course", modules), &MapConfig::default()).unwrap()
    }

    #[test]
    fn empty_course() {
        let map = resolve(vec![]);
        assert!(map.nodes.is_empty());
        assert!(map.connections.is_empty());
        assert_eq!(map.progress.percent(), 0.0);
        assert!(map.current(None).is_none());
    }

    #[test]
    fn single_root_module() {
        let map = resolve(vec![lesson("1")]);
        let node = &map.nodes[0];
        assert_eq!(node.tier, 0);
        assert_eq!(node.status, Status::Available);
        assert_eq!(node.position, Position::new(10.0 + 8.0 * 7.3f64.cos(), 50.0));
    }

    #[test]
    fn locked_until_prerequisite_completed() {
        let first = lesson("1").with_tier(0);
        let second = lesson("2").with_tier(1).with_prerequisites(["1"]);

        let map = resolve(vec![first.clone(), second.clone()]);
        assert_eq!(map.nodes[1].status, Status::Locked);
        assert_eq!(map.connections.len(), 1);
        assert!(!map.connections[0].completed);

        let map = resolve(vec![first.completed(true), second]);
        assert_eq!(map.nodes[1].status, Status::Available);
        assert!(map.connections[0].completed);
    }

    #[test]
    fn three_in_a_tier_spread_around_center() {
        let map = resolve(vec![lesson("1"), lesson("2"), lesson("3")]);
        let expected = (50.0 + 10.0 * (2.0f64 * 13.7).sin()).clamp(15.0, 85.0);
        assert_eq!(map.nodes[1].position.y, expected);
    }

    #[test]
    fn dangling_prerequisite() {
        let map = resolve(vec![lesson("1").with_prerequisites(["99"])]);
        assert_eq!(map.nodes[0].status, Status::Available);
        assert!(map.connections.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let course = Course::new("Course", vec![lesson("1"), lesson("1")]);
        let result = LearningMap::resolve(&course, &MapConfig::default());
        assert!(matches!(result, Err(MapError::Data(DataError::DuplicateModule(_)))));
    }

    #[test]
    fn depth_strategy_cycle_fails() {
        let course = Course::new(
            "Course",
            vec![
                lesson("1").with_prerequisites(["2"]),
                lesson("2").with_prerequisites(["1"]),
            ],
        );
        let config = MapConfig::default().with_strategy(TierStrategy::Depth);
        assert!(matches!(
            LearningMap::resolve(&course, &config),
            Err(MapError::Layout(LayoutError::Cycle(_)))
        ));
    }

    #[test]
    fn progress_counts_completed() {
        let map = resolve(vec![
            lesson("1").completed(true),
            lesson("2").completed(true),
            lesson("3"),
        ]);
        assert_eq!(map.progress, Progress { completed: 2, total: 3 });
        assert_eq!(map.progress.rounded_percent(), 67);
    }

    #[test]
    fn current_prefers_explicit_then_first_available() {
        let map = resolve(vec![
            lesson("1").completed(true),
            lesson("2").with_prerequisites(["3"]),
            lesson("3"),
            lesson("4"),
        ]);
        assert_eq!(map.current(Some("4")).unwrap().id.as_str(), "4");
        assert_eq!(map.current(Some("nope")).unwrap().id.as_str(), "3");
        assert_eq!(map.current(None).unwrap().id.as_str(), "3");
    }

    #[test]
    fn nothing_available_means_no_current() {
        let map = resolve(vec![lesson("1").completed(true)]);
        assert!(map.current(None).is_none());
    }

    #[test]
    fn activation_skips_locked_and_unknown() {
        let map = resolve(vec![
            lesson("1").completed(true),
            lesson("2"),
            lesson("3").with_prerequisites(["2"]),
        ]);

        let mut visited = Vec::new();
        let mut navigator = |id: &ModuleId| visited.push(id.clone());

        assert_eq!(map.activate("3", &mut navigator), Activation::Locked);
        assert_eq!(map.activate("42", &mut navigator), Activation::Unknown);
        assert_eq!(map.activate("1", &mut navigator), Activation::Navigated);
        assert_eq!(map.activate("2", &mut navigator), Activation::Navigated);

        assert_eq!(visited, [ModuleId::from("1"), ModuleId::from("2")]);
    }

    #[test]
    fn endpoints_follow_positions() {
        let map = resolve(vec![
            lesson("1").with_tier(0),
            lesson("2").with_tier(1).with_prerequisites(["1"]),
        ]);
        let (from, to) = map.endpoints(&map.connections[0]).unwrap();
        assert_eq!(from, map.nodes[0].position);
        assert_eq!(to, map.nodes[1].position);
    }

    #[test]
    fn resolve_is_idempotent() {
        let course = Course::new(
            "Course",
            vec![
                lesson("1"),
                lesson("2").with_tier(1).with_prerequisites(["1"]),
                lesson("3").with_tier(1),
            ],
        );
        let a = LearningMap::resolve(&course, &MapConfig::default()).unwrap();
        let b = LearningMap::resolve(&course, &MapConfig::default()).unwrap();
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.connections, b.connections);
    }
}
