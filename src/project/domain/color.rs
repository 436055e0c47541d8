//! Fixed pastel palette for project colours.

use super::ProjectDomainError;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use std::fmt;
use std::str::FromStr;

/// A palette colour with light and dark theme variants.
///
/// Values only ever come from [`ProjectColor::PALETTE`]. Projects persist
/// the light variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ProjectColor {
    light: &'static str,
    dark: &'static str,
}

const fn entry(light: &'static str, dark: &'static str) -> ProjectColor {
    ProjectColor { light, dark }
}

impl ProjectColor {
    /// Every colour a project may use, in picker order.
    pub const PALETTE: [Self; 20] = [
        entry("#FFB3BA", "#FF8A95"),
        entry("#BAFFC9", "#8AFFA3"),
        entry("#BAE1FF", "#8AC8FF"),
        entry("#FFFFBA", "#FFFF8A"),
        entry("#FFB3F7", "#FF8AEF"),
        entry("#B3FFE6", "#8AFFD4"),
        entry("#FFD4B3", "#FFB88A"),
        entry("#E6B3FF", "#D48AFF"),
        entry("#B3D9FF", "#8AC8FF"),
        entry("#B3FFB3", "#8AFF8A"),
        entry("#FFE6B3", "#FFD48A"),
        entry("#D4B3FF", "#C18AFF"),
        entry("#B3FFF0", "#8AFFE6"),
        entry("#FFB3D9", "#FF8AC8"),
        entry("#B3E6FF", "#8AD4FF"),
        entry("#D9FFB3", "#C8FF8A"),
        entry("#FFB3A3", "#FF8A8A"),
        entry("#B3B3FF", "#8A8AFF"),
        entry("#B3FFCC", "#8AFFB3"),
        entry("#FFCCB3", "#FFB38A"),
    ];

    /// Returns the light-theme hex value, which is also the stored value.
    #[must_use]
    pub const fn light(self) -> &'static str {
        self.light
    }

    /// Returns the dark-theme hex value.
    #[must_use]
    pub const fn dark(self) -> &'static str {
        self.dark
    }
}

impl Default for ProjectColor {
    fn default() -> Self {
        entry("#FFB3BA", "#FF8A95")
    }
}

impl FromStr for ProjectColor {
    type Err = ProjectDomainError;

    /// Accepts the light value of a palette entry, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::PALETTE
            .iter()
            .find(|color| color.light.eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| ProjectDomainError::UnknownColor(value.to_owned()))
    }
}

impl<'de> Deserialize<'de> for ProjectColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

impl From<ProjectColor> for String {
    fn from(value: ProjectColor) -> Self {
        value.light.to_owned()
    }
}

impl fmt::Display for ProjectColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.light)
    }
}
