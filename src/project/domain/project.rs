//! Project aggregate and its input structures.

use super::{ProjectColor, ProjectDomainError, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A named container of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: ProjectId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    color: ProjectColor,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted palette colour.
    pub color: ProjectColor,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when adding a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    name: String,
    description: String,
    color: ProjectColor,
}

impl ProjectDraft {
    /// Creates a draft with an empty description and the default colour.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            color: ProjectColor::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the colour.
    #[must_use]
    pub const fn with_color(mut self, color: ProjectColor) -> Self {
        self.color = color;
        self
    }
}

/// Field-level changes applied by a project update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    name: Option<String>,
    description: Option<String>,
    color: Option<ProjectColor>,
}

impl ProjectPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the colour.
    #[must_use]
    pub const fn with_color(mut self, color: ProjectColor) -> Self {
        self.color = Some(color);
        self
    }
}

impl Project {
    /// Creates a new project from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] when the name is blank.
    pub fn create(draft: ProjectDraft, clock: &impl Clock) -> Result<Self, ProjectDomainError> {
        let ProjectDraft {
            name,
            description,
            color,
        } = draft;
        Ok(Self {
            id: ProjectId::new(),
            name: validate_name(&name)?,
            description: description.trim().to_owned(),
            color,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            color: data.color,
            created_at: data.created_at,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the palette colour.
    #[must_use]
    pub const fn color(&self) -> ProjectColor {
        self.color
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when the name contains `query`, ignoring case.
    ///
    /// A blank query matches every project.
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty() || self.name.to_lowercase().contains(&needle)
    }

    /// Applies a field-level update.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] when the patch blanks the
    /// name. The project is left unchanged on error.
    pub fn apply(&mut self, patch: ProjectPatch) -> Result<(), ProjectDomainError> {
        let ProjectPatch {
            name,
            description,
            color,
        } = patch;
        let validated_name = name.as_deref().map(validate_name).transpose()?;

        if let Some(value) = validated_name {
            self.name = value;
        }
        if let Some(value) = description {
            self.description = value.trim().to_owned();
        }
        if let Some(value) = color {
            self.color = value;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<String, ProjectDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ProjectDomainError::EmptyName);
    }
    Ok(trimmed.to_owned())
}
