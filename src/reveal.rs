//! Scroll-triggered section reveal.
//!
//! Each section starts hidden and becomes visible the first time an
//! intersection report for it reaches the section's threshold. The transition
//! is one-way for the lifetime of the coordinator.

use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Delay between consecutive skill bars.
pub const SKILL_STAGGER: Duration = Duration::from_millis(100);

/// Delay between consecutive project cards.
pub const PROJECT_STAGGER: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// Page order.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Anchor id the navigation links target.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor.trim_start_matches('#'))
    }

    /// Visible fraction needed to reveal; `None` reveals on mount.
    pub fn threshold(&self) -> Option<f64> {
        match self {
            Section::Hero => None,
            Section::About => Some(0.3),
            Section::Projects | Section::Experience | Section::Contact => Some(0.2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// Per-section visibility flags.
#[derive(Debug, Clone, Default)]
pub struct RevealCoordinator {
    states: HashMap<Section, RevealState>,
}

impl RevealCoordinator {
    /// Every section hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal the sections that show as soon as the page mounts.
    pub fn mount(&mut self) {
        for section in Section::ALL {
            if section.threshold().is_none() {
                self.reveal(section);
            }
        }
    }

    /// Feed one intersection report. Returns `true` if this report revealed
    /// the section.
    pub fn observe(&mut self, section: Section, ratio: f64) -> bool {
        if self.is_visible(section) || ratio.is_nan() || ratio <= 0.0 {
            return false;
        }

        let crosses = section.threshold().map_or(true, |threshold| ratio >= threshold);
        if crosses {
            self.reveal(section);
        }
        crosses
    }

    pub fn state(&self, section: Section) -> RevealState {
        self.states.get(&section).copied().unwrap_or_default()
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.state(section) == RevealState::Visible
    }

    fn reveal(&mut self, section: Section) {
        debug!("Revealing section '{}'", section.anchor());
        self.states.insert(section, RevealState::Visible);
    }
}

/// Animation delay for the `index`-th item of a staggered list.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}
