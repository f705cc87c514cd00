//! Generation settings read from the `[generate]` table.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Where the `__manifest__.py` metadata values come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestValues {
    /// Fixed placeholders: version "1.0", category "Category", summary
    /// "Summary", depends `base` and `contacts`
    #[default]
    Placeholder,
    /// The module description's own values, falling back to the
    /// placeholder for anything left unset
    Description,
}

impl ManifestValues {
    /// Returns the setting as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestValues::Placeholder => "placeholder",
            ManifestValues::Description => "description",
        }
    }
}

impl fmt::Display for ManifestValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ManifestValues {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "placeholder" => Ok(ManifestValues::Placeholder),
            "description" => Ok(ManifestValues::Description),
            _ => Err(format!(
                "unknown manifest values '{}', expected 'placeholder' or 'description'",
                s
            )),
        }
    }
}

/// The `[generate]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    #[serde(default)]
    pub manifest: ManifestValues,
}
