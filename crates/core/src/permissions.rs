//! Resource/level permission scopes.
//!
//! Access tokens carry a map of resource name to granted level, e.g.
//! `{"profile": "edit", "miniatures": "delete"}`. Levels are ordered
//! `none < read < edit < delete`; holding a level grants every level below it.
//! Grants never cross resources.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// A protected resource group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Profile,
    Experience,
    Certifications,
    /// Skills and skill types.
    Skills,
    /// Portfolio projects.
    Projects,
    /// Miniature themes, projects, paints, techniques and their images.
    Miniatures,
    Files,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Profile,
        Resource::Experience,
        Resource::Certifications,
        Resource::Skills,
        Resource::Projects,
        Resource::Miniatures,
        Resource::Files,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Profile => "profile",
            Resource::Experience => "experience",
            Resource::Certifications => "certifications",
            Resource::Skills => "skills",
            Resource::Projects => "projects",
            Resource::Miniatures => "miniatures",
            Resource::Files => "files",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// Access level. Variant order defines the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    None,
    Read,
    Edit,
    Delete,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Read => "read",
            Level::Edit => "edit",
            Level::Delete => "delete",
        }
    }

    /// Whether holding `self` satisfies a requirement of `required`.
    pub fn satisfies(self, required: Level) -> bool {
        self >= required
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown permission level '{0}'")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Level::None),
            "read" => Ok(Level::Read),
            "edit" => Ok(Level::Edit),
            "delete" => Ok(Level::Delete),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// The level granted for `resource` by a raw scope map.
///
/// Absent resources and unparseable level strings both yield [`Level::None`].
pub fn granted_level(scopes: &HashMap<String, String>, resource: Resource) -> Level {
    scopes
        .get(resource.as_str())
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(Level::None)
}

/// Whether `scopes` grant at least `required` on `resource`.
pub fn has_permission(
    scopes: &HashMap<String, String>,
    resource: Resource,
    required: Level,
) -> bool {
    granted_level(scopes, resource).satisfies(required)
}
