//! Key-value JSON files inside a capability-scoped state directory.

use crate::board::Theme;
use crate::project::domain::{Project, ProjectId};
use crate::task::domain::Task;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Key holding the project list.
pub const PROJECTS_KEY: &str = "projects";
/// Key holding the task list.
pub const TASKS_KEY: &str = "tasks";
/// Key holding the selected project identifier.
pub const SELECTED_PROJECT_KEY: &str = "selectedProjectId";
/// Key holding the colour theme.
pub const THEME_KEY: &str = "theme";

/// Errors raised while reading or writing local state.
#[derive(Debug, Error)]
pub enum LocalStateError {
    /// Filesystem failure.
    #[error("local state I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// A state file did not hold the expected JSON.
    #[error("local state file `{key}.json` is malformed: {source}")]
    Malformed {
        /// Key of the offending file.
        key: String,
        /// Decoder error.
        source: serde_json::Error,
    },
    /// A value could not be encoded.
    #[error("failed to encode local state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Everything persisted locally, as loaded on start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalSnapshot {
    /// Stored projects, oldest first.
    pub projects: Vec<Project>,
    /// Stored tasks, oldest first.
    pub tasks: Vec<Task>,
    /// Last selected project, if any.
    pub selected_project_id: Option<ProjectId>,
    /// Saved theme; light when none was saved.
    pub theme: Theme,
}

/// One JSON file per fixed key inside a state directory.
#[derive(Debug)]
pub struct LocalStateStore {
    dir: Dir,
}

impl LocalStateStore {
    /// Opens the state directory at `path`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStateError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(path: &str) -> Result<Self, LocalStateError> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { dir })
    }

    /// Reads the value stored under `key`. A missing file yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStateError::Malformed`] when the file is not valid JSON
    /// for `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, LocalStateError> {
        let contents = match self.dir.read_to_string(file_name(key)) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| LocalStateError::Malformed {
                key: key.to_owned(),
                source,
            })
    }

    /// Replaces the value stored under `key`.
    ///
    /// The new contents are written to a sibling file first and renamed over
    /// the old one, so readers never observe a half-written file.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStateError`] when encoding or writing fails.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), LocalStateError> {
        let encoded = serde_json::to_vec_pretty(value)?;
        let staging = format!("{key}.json.tmp");
        self.dir.write(&staging, encoded)?;
        self.dir.rename(&staging, &self.dir, file_name(key))?;
        Ok(())
    }

    /// Loads every key at once.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStateError`] when any file cannot be read or decoded.
    pub fn load_snapshot(&self) -> Result<LocalSnapshot, LocalStateError> {
        Ok(LocalSnapshot {
            projects: self.load(PROJECTS_KEY)?.unwrap_or_default(),
            tasks: self.load(TASKS_KEY)?.unwrap_or_default(),
            selected_project_id: self.load::<Option<ProjectId>>(SELECTED_PROJECT_KEY)?.flatten(),
            theme: self.load(THEME_KEY)?.unwrap_or_default(),
        })
    }

    /// Saves the selected project.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStateError`] when writing fails.
    pub fn save_selected_project(&self, project_id: Option<ProjectId>) -> Result<(), LocalStateError> {
        self.save(SELECTED_PROJECT_KEY, &project_id)
    }

    /// Saves the colour theme.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStateError`] when writing fails.
    pub fn save_theme(&self, theme: Theme) -> Result<(), LocalStateError> {
        self.save(THEME_KEY, &theme)
    }
}

fn file_name(key: &str) -> String {
    format!("{key}.json")
}
