//! Label definitions
//!
//! Holds the label data model together with the built-in catalog of
//! predefined labels and the palette used to color everything else.

use crate::utils::error::{AppError, AppResult};
use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{6}$").expect("color pattern is valid"));

/// The "default colors" offered when creating a label via GitHub's web UI
/// (as of 2023-09-24).
pub const COLORS: [&str; 16] = [
    "0052cc", "006b75", "0e8a16", "1d76db", "5319e7", "b60205", "bfd4f2", "bfdadc", "c2e0c6",
    "c5def5", "d4c5f9", "d93f0b", "e99695", "f9d0c4", "fbca04", "fef2c0",
];

/// Built-in labels: name, color, description
const PREDEFINED: [(&str, &str, &str); 4] = [
    (
        "dependencies",
        "8732bc",
        "Update one or more dependencies' versions",
    ),
    ("d:cargo", "dea584", "Update a Cargo (Rust) dependency"),
    (
        "d:github-actions",
        "74fa75",
        "Update a GitHub Actions action dependency",
    ),
    ("d:python", "3572a5", "Update a Python dependency"),
];

/// A six-digit lowercase hex color without a leading `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LabelColor(String);

impl LabelColor {
    /// Parse a color, accepting uppercase hex digits from the server
    pub fn parse(value: &str) -> AppResult<Self> {
        let lowered = value.to_ascii_lowercase();
        if COLOR_RE.is_match(&lowered) {
            Ok(Self(lowered))
        } else {
            Err(AppError::Remote(format!("Invalid label color: {:?}", value)))
        }
    }

    // Only for the constant tables above.
    fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for LabelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LabelColor {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        Self::parse(&value)
    }
}

impl From<LabelColor> for String {
    fn from(color: LabelColor) -> Self {
        color.0
    }
}

/// Color and description of a label, either desired or observed on GitHub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDetails {
    pub color: LabelColor,
    pub description: Option<String>,
    pub predefined: bool,
}

impl LabelDetails {
    /// Details as observed on the server
    pub fn observed(color: LabelColor, description: Option<String>) -> Self {
        Self {
            color,
            description,
            predefined: false,
        }
    }

    /// An undocumented label with a color drawn from [`COLORS`]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let color = COLORS.choose(rng).copied().unwrap_or(COLORS[0]);
        Self::observed(LabelColor::from_static(color), None)
    }

    /// Look up a label in the built-in catalog
    pub fn predefined(name: &str) -> Option<Self> {
        PREDEFINED
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, color, description)| Self {
                color: LabelColor::from_static(color),
                description: Some(description.to_string()),
                predefined: true,
            })
    }

    /// Description with a missing value treated as empty
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// What a label should look like, plus whether existing labels may be
/// overwritten to match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredLabel {
    pub details: LabelDetails,
    pub force: bool,
}

impl DesiredLabel {
    /// Resolve a configured label name.
    ///
    /// Names outside the catalog get a fresh random color every run, so they
    /// are never forced: recoloring them would just churn.
    pub fn resolve<R: Rng + ?Sized>(name: &str, force: bool, rng: &mut R) -> Self {
        match LabelDetails::predefined(name) {
            Some(details) => Self { details, force },
            None => Self {
                details: LabelDetails::random(rng),
                force: false,
            },
        }
    }
}
