use crate::{Course, DataError};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Anything able to resolve a course identifier into its modules
pub trait CourseSource {
    /// Load the course with the given identifier
    ///
    /// # Errors
    /// Returns [`DataError::NotFound`] for unknown identifiers, other variants
    /// when the course exists but can't be read or is inconsistent
    fn course(&self, id: &str) -> Result<Course, DataError>;
}

// In-memory courses, mostly for tests and embedding
impl CourseSource for HashMap<String, Course> {
    fn course(&self, id: &str) -> Result<Course, DataError> {
        let course = self
            .get(id)
            .cloned()
            .ok_or_else(|| DataError::NotFound(id.to_string()))?;
        course.validate()?;
        Ok(course)
    }
}

/// Parse a course from its RON representation
///
/// `origin` only appears in error messages.
pub fn course_from_ron(text: &str, origin: &str) -> Result<Course, DataError> {
    ron::from_str(text).map_err(|source| DataError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// Serialize a value to pretty-printed RON
pub fn to_ron<T: serde::Serialize>(value: &T) -> Result<String, ron::Error> {
    ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
}

/// Courses stored as `<id>.ron` files in a directory
#[derive(Debug, Clone)]
pub struct RonCourseDir {
    root: PathBuf,
}

impl RonCourseDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing the given course, `None` if the id can't name a file in the directory
    pub fn path_of(&self, id: &str) -> Option<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));
        valid.then(|| self.root.join(format!("{id}.ron")))
    }

    /// Identifiers of every course in the directory, sorted
    pub fn list(&self) -> Result<Vec<String>, DataError> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| DataError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut ids: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "ron"))
            .filter_map(|path| Some(path.file_stem()?.to_str()?.to_string()))
            .collect();
        ids.sort();
        Ok(ids)
    }
}

impl CourseSource for RonCourseDir {
    fn course(&self, id: &str) -> Result<Course, DataError> {
        let path = self
            .path_of(id)
            .ok_or_else(|| DataError::NotFound(id.to_string()))?;
        debug!("Loading course {id} from {path:?}");

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DataError::NotFound(id.to_string()))
            }
            Err(source) => return Err(DataError::Io { path, source }),
        };

        let course = course_from_ron(&text, &path.display().to_string())?;
        course.validate()?;
        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ModuleId, ModuleKind};
    use test_log::test;

    const INTRO: &str = r#"(
        title: "Intro to Programming",
        last_accessed: Some("2024-03-01T09:30:00Z"),
        modules: [
            (id: "1", title: "Variables", type: lesson, completed: true),
            (id: "2", title: "Loops", type: quiz, prerequisites: ["1"], tier: Some(1)),
            (id: "3", title: "Final Project", type: project, locked: true, prerequisites: ["2", "99"], tier: Some(2)),
        ],
    )"#;

    #[test]
    fn parse_course_with_defaults() {
        let course = course_from_ron(INTRO, "inline").unwrap();
        assert_eq!(course.title, "Intro to Programming");
        assert!(course.last_accessed.is_some());
        assert_eq!(course.modules.len(), 3);

        let first = &course.modules[0];
        assert!(first.completed);
        assert!(first.prerequisites.is_empty());
        assert_eq!(first.tier, None);

        let last = &course.modules[2];
        assert_eq!(last.kind, ModuleKind::Project);
        assert!(last.locked);
        assert_eq!(last.prerequisites, [ModuleId::from("2"), ModuleId::from("99")]);
    }

    #[test]
    fn parse_error_names_origin() {
        let err = course_from_ron("(title: 3)", "broken.ron").unwrap_err();
        assert!(matches!(&err, DataError::Parse { origin, .. } if origin == "broken.ron"));
    }

    #[test]
    fn course_round_trips_through_ron() {
        let course = course_from_ron(INTRO, "inline").unwrap();
        let text = to_ron(&course).unwrap();
        assert_eq!(course_from_ron(&text, "inline").unwrap(), course);
    }

    #[test]
    fn directory_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("intro.ron"), INTRO).unwrap();
        std::fs::write(
            dir.path().join("dupes.ron"),
            r#"(title: "Dupes", modules: [(id: "1", title: "a"), (id: "1", title: "b")])"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let source = RonCourseDir::new(dir.path());
        assert_eq!(source.list().unwrap(), ["dupes", "intro"]);

        let course = source.course("intro").unwrap();
        assert_eq!(course.modules.len(), 3);

        assert!(matches!(
            source.course("missing"),
            Err(DataError::NotFound(id)) if id == "missing"
        ));
        assert!(matches!(
            source.course("../intro"),
            Err(DataError::NotFound(_))
        ));
        assert!(matches!(
            source.course("dupes"),
            Err(DataError::DuplicateModule(_))
        ));
    }

    #[test]
    fn map_source() {
        let course = course_from_ron(INTRO, "inline").unwrap();
        let source = HashMap::from([("intro".to_string(), course.clone())]);
        assert_eq!(source.course("intro").unwrap(), course);
        assert!(matches!(source.course("other"), Err(DataError::NotFound(_))));
    }
}
