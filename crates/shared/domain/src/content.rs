//! The static content record rendered by the page.
//!
//! Everything here is immutable for the lifetime of the process: it is parsed
//! once at startup and handed to components by reference.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Root of the content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioContent {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub hero: HeroCopy,
    pub profile: ProfileCopy,
    pub contact: ContactInfo,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
}

/// Text shown over the hero scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub eyebrow: String,
    pub tagline: String,
}

/// Narrative and metrics for the executive profile section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCopy {
    pub headline: String,
    pub biography: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

/// An animated counter on the profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: u32,
    pub suffix: String,
    /// Render a fill bar under the number.
    #[serde(default)]
    pub bar: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
}

/// Fixed set of skill categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SkillCategory {
    Core,
    Tech,
    Tool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub year: Option<String>,
}

impl PortfolioContent {
    /// Skills in the given category, in record order.
    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.category == category)
    }

    /// Owner name, upper-cased, for the nav brand.
    #[must_use]
    pub fn brand(&self) -> String {
        self.name.to_uppercase()
    }
}
