use folio_domain::content::{Skill, SkillCategory};
use std::time::Duration;
use strum::{EnumIter, IntoEnumIterator};

/// How long the grid stays in its "animating" state after a tab change.
pub const ANIMATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SkillTab {
    #[default]
    All,
    Core,
    Tech,
    Tool,
}

impl SkillTab {
    /// HUD label shown on the tab button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "SYSTEM_ALL",
            Self::Core => "STRAT_CORE",
            Self::Tech => "SEC_STACK",
            Self::Tool => "OPS_TOOLS",
        }
    }

    #[must_use]
    pub const fn category(self) -> Option<SkillCategory> {
        match self {
            Self::All => None,
            Self::Core => Some(SkillCategory::Core),
            Self::Tech => Some(SkillCategory::Tech),
            Self::Tool => Some(SkillCategory::Tool),
        }
    }

    #[must_use]
    pub fn matches(self, skill: &Skill) -> bool {
        self.category().is_none_or(|c| c == skill.category)
    }

    /// Skills shown under this tab, in content order.
    #[must_use]
    pub fn filter(self, skills: &[Skill]) -> Vec<&Skill> {
        skills.iter().filter(|s| self.matches(s)).collect()
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Proficiency shown on a card, from category and position in the filtered list.
#[must_use]
pub const fn load_level(category: SkillCategory, index: usize) -> usize {
    match category {
        SkillCategory::Core => 90 + index % 10,
        SkillCategory::Tech => 80 + index % 15,
        SkillCategory::Tool => 70 + index % 20,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The tab changed; settle the animation with this epoch after [`ANIMATION`].
    Changed { epoch: u64 },
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillGrid {
    tab: SkillTab,
    animating: bool,
    epoch: u64,
}

impl SkillGrid {
    pub fn select(&mut self, tab: SkillTab) -> Selection {
        if tab == self.tab {
            return Selection::Unchanged;
        }
        self.tab = tab;
        self.animating = true;
        self.epoch += 1;
        Selection::Changed { epoch: self.epoch }
    }

    /// Ends the animation window opened by the selection with `epoch`.
    ///
    /// A stale epoch (a newer selection happened since) is ignored.
    pub fn settle(&mut self, epoch: u64) {
        if epoch == self.epoch {
            self.animating = false;
        }
    }

    #[must_use]
    pub const fn tab(&self) -> SkillTab {
        self.tab
    }

    #[must_use]
    pub const fn animating(&self) -> bool {
        self.animating
    }
}
