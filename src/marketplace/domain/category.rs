//! Service categories and urgency levels offered when posting a task.

use super::{ParseCategoryError, ParseUrgencyError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of repair work a task asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Pipes, drains, and fixtures.
    Plumbing,
    /// Wiring, outlets, and lighting.
    Electrical,
    /// Woodwork and fitting.
    Carpentry,
    /// Interior and exterior painting.
    Painting,
    /// Household appliance repair.
    Appliance,
    /// General maintenance.
    General,
}

impl Category {
    /// Every category, in the order they are offered.
    pub const ALL: [Self; 6] = [
        Self::Plumbing,
        Self::Electrical,
        Self::Carpentry,
        Self::Painting,
        Self::Appliance,
        Self::General,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plumbing => "plumbing",
            Self::Electrical => "electrical",
            Self::Carpentry => "carpentry",
            Self::Painting => "painting",
            Self::Appliance => "appliance",
            Self::General => "general",
        }
    }

    /// Returns the human-readable category name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Plumbing => "Plumbing",
            Self::Electrical => "Electrical",
            Self::Carpentry => "Carpentry",
            Self::Painting => "Painting",
            Self::Appliance => "Appliance Repair",
            Self::General => "General Maintenance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseCategoryError(value.to_owned()))
    }
}

/// How soon the customer needs the work done.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Urgency {
    /// Within two hours.
    Immediate,
    /// Within 24 hours.
    Today,
    /// Within seven days.
    ThisWeek,
    /// No rush.
    #[default]
    Flexible,
}

impl Urgency {
    /// Every urgency level, most urgent first.
    pub const ALL: [Self; 4] = [Self::Immediate, Self::Today, Self::ThisWeek, Self::Flexible];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Today => "today",
            Self::ThisWeek => "thisWeek",
            Self::Flexible => "flexible",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Urgency {
    type Error = ParseUrgencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "");
        Self::ALL
            .into_iter()
            .find(|urgency| urgency.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ParseUrgencyError(value.to_owned()))
    }
}
