//! Content registry: the page's static, language-keyed content tables.
//!
//! Everything here is defined at compile time and read-only. Tables that
//! differ per language are stored as `Localized<&'static [T]>` and resolved by
//! the renderer for the active language.

mod experience;
mod profile;
mod projects;
mod skills;

use serde::Serialize;

use crate::i18n::{Language, LocalizedText};

pub use experience::EXPERIENCES;
pub use profile::{
    BIOGRAPHY, CONTACT_INFO, FOOTER_TECHNOLOGIES, OWNER_NAME, SOCIAL_LINKS, SOFT_SKILLS,
};
pub use projects::PROJECTS;
pub use skills::{SKILLS, TECH_BADGES};

// ==================== Skills ====================

/// Skill and tech-badge grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Mobile,
}

impl SkillCategory {
    /// Categories with proficiency bars, in display order.
    pub const PROFICIENCY: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Devops,
    ];

    /// Tabs of the tech badge panel, in display order.
    pub const BADGE_TABS: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Devops,
        SkillCategory::Mobile,
    ];

    pub fn title(&self) -> LocalizedText {
        match self {
            SkillCategory::Frontend => LocalizedText::new("Frontend", "Frontend"),
            SkillCategory::Backend => LocalizedText::new("Backend", "Backend"),
            SkillCategory::Database => LocalizedText::new("Banco de Dados", "Database"),
            SkillCategory::Devops => LocalizedText::new("DevOps", "DevOps"),
            SkillCategory::Mobile => LocalizedText::new("Mobile", "Mobile"),
        }
    }
}

/// A skill with a proficiency percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub name: &'static str,
    /// 0..=100
    pub proficiency: u8,
    pub category: SkillCategory,
}

/// A technology badge with its brand colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechBadge {
    pub name: &'static str,
    pub color: &'static str,
    pub category: SkillCategory,
}

/// Proficiency skills in `category`, in table order.
pub fn skills_in(category: SkillCategory) -> Vec<&'static SkillEntry> {
    SKILLS.iter().filter(|skill| skill.category == category).collect()
}

/// Tech badges in `category`, in table order.
pub fn badges_in(category: SkillCategory) -> Vec<&'static TechBadge> {
    TECH_BADGES
        .iter()
        .filter(|badge| badge.category == category)
        .collect()
}

/// A soft skill card.
#[derive(Debug, Clone, Copy)]
pub struct SoftSkill {
    pub icon: &'static str,
    pub title: LocalizedText,
    pub description: LocalizedText,
}

// ==================== Experience ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Work,
    Education,
    Certification,
}

impl ExperienceKind {
    /// Tabs of the experience section, in display order.
    pub const TABS: [ExperienceKind; 3] = [
        ExperienceKind::Work,
        ExperienceKind::Education,
        ExperienceKind::Certification,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            ExperienceKind::Work => "briefcase",
            ExperienceKind::Education => "graduation-cap",
            ExperienceKind::Certification => "award",
        }
    }
}

/// One work, education or certification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub id: &'static str,
    pub kind: ExperienceKind,
    pub title: &'static str,
    pub org: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub achievements: Option<&'static [&'static str]>,
}

/// Experience records of `kind` in `language`.
///
/// An empty result is valid and renders as an empty list.
pub fn experiences_of(language: Language, kind: ExperienceKind) -> Vec<&'static ExperienceEntry> {
    EXPERIENCES
        .resolve(language)
        .iter()
        .filter(|entry| entry.kind == kind)
        .collect()
}

// ==================== Projects ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Frontend,
    Fullstack,
    Backend,
}

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub results: &'static [&'static str],
    /// Card image, also the overlay fallback when there is no sequence
    pub image: &'static str,
    /// Carousel images for the detail overlay
    pub images: Option<&'static [&'static str]>,
    pub repository_url: &'static str,
    pub live_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
    pub category: ProjectCategory,
    pub icon: &'static str,
}

impl ProjectEntry {
    /// The carousel sequence, empty when the project has none.
    pub fn image_sequence(&self) -> &'static [&'static str] {
        self.images.unwrap_or(&[])
    }
}

/// Projects in `language`, optionally restricted to one category.
///
/// An empty result is valid and renders as an empty grid.
pub fn projects_in(
    language: Language,
    category: Option<ProjectCategory>,
) -> Vec<&'static ProjectEntry> {
    PROJECTS
        .resolve(language)
        .iter()
        .filter(|project| category.map_or(true, |wanted| project.category == wanted))
        .collect()
}

/// Look up a project by id in `language`.
pub fn find_project(language: Language, id: &str) -> Option<&'static ProjectEntry> {
    PROJECTS.resolve(language).iter().find(|project| project.id == id)
}

// ==================== Profile ====================

/// Tabs of the about section's biography panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AboutTab {
    #[default]
    WhoIAm,
    MyJourney,
    DevelopmentPhilosophy,
}

impl AboutTab {
    pub const TABS: [AboutTab; 3] = [
        AboutTab::WhoIAm,
        AboutTab::MyJourney,
        AboutTab::DevelopmentPhilosophy,
    ];
}

/// Biography paragraphs shown in the about tabs.
#[derive(Debug, Clone, Copy)]
pub struct Biography {
    pub who_i_am: &'static [&'static str],
    pub my_journey: &'static [&'static str],
    pub development_philosophy: &'static [&'static str],
}

impl Biography {
    pub fn paragraphs(&self, tab: AboutTab) -> &'static [&'static str] {
        match tab {
            AboutTab::WhoIAm => self.who_i_am,
            AboutTab::MyJourney => self.my_journey,
            AboutTab::DevelopmentPhilosophy => self.development_philosophy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactInfoKind {
    Email,
    Phone,
    Location,
}

/// A row of the contact card.
#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub kind: ContactInfoKind,
    pub value: &'static str,
    /// `mailto:`/`tel:` link; `None` renders plain text
    pub href: Option<&'static str>,
}

/// An external profile link, opened in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==================== Skill Tests ====================

    #[test]
    fn test_proficiency_within_bounds() {
        for skill in SKILLS {
            assert!(skill.proficiency <= 100, "{} is over 100%", skill.name);
        }
    }

    #[test]
    fn test_every_proficiency_category_has_skills() {
        for category in SkillCategory::PROFICIENCY {
            assert!(!skills_in(category).is_empty(), "{:?} is empty", category);
        }
        assert!(skills_in(SkillCategory::Mobile).is_empty());
    }

    #[test]
    fn test_every_badge_tab_has_badges() {
        for category in SkillCategory::BADGE_TABS {
            assert!(!badges_in(category).is_empty(), "{:?} is empty", category);
        }
    }

    #[test]
    fn test_badge_colors_are_hex() {
        for badge in TECH_BADGES {
            assert!(badge.color.starts_with('#') && badge.color.len() == 7, "{}", badge.name);
        }
    }

    #[test]
    fn test_database_title_is_localized() {
        let title = SkillCategory::Database.title();
        assert_eq!(title.resolve(Language::PORTUGUESE), "Banco de Dados");
        assert_eq!(title.resolve(Language::ENGLISH), "Database");
    }

    // ==================== Experience Tests ====================

    #[test]
    fn test_experience_tables_line_up_across_languages() {
        let pt: Vec<_> = EXPERIENCES.pt.iter().map(|e| (e.id, e.kind)).collect();
        let en: Vec<_> = EXPERIENCES.en.iter().map(|e| (e.id, e.kind)).collect();
        assert_eq!(pt, en);
    }

    #[test]
    fn test_experiences_of_filters_by_kind() {
        for kind in ExperienceKind::TABS {
            for entry in experiences_of(Language::ENGLISH, kind) {
                assert_eq!(entry.kind, kind);
            }
        }
        assert!(!experiences_of(Language::PORTUGUESE, ExperienceKind::Work).is_empty());
    }

    #[test]
    fn test_certifications_have_no_achievements() {
        for entry in experiences_of(Language::ENGLISH, ExperienceKind::Certification) {
            assert!(entry.achievements.is_none(), "{}", entry.id);
        }
    }

    // ==================== Project Tests ====================

    #[test]
    fn test_project_tables_line_up_across_languages() {
        assert_eq!(PROJECTS.pt.len(), PROJECTS.en.len());
        for (pt, en) in PROJECTS.pt.iter().zip(PROJECTS.en.iter()) {
            assert_eq!(pt.id, en.id);
            assert_eq!(pt.image, en.image);
            assert_eq!(pt.images, en.images);
            assert_eq!(pt.repository_url, en.repository_url);
            assert_eq!(pt.repository_url, format!("https://github.com/example/{}", pt.id));
            assert_ne!(pt.description, en.description);
        }
    }

    #[test]
    fn test_project_ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.en.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.en.len());
    }

    #[test]
    fn test_projects_in_without_filter_returns_all() {
        assert_eq!(projects_in(Language::ENGLISH, None).len(), PROJECTS.en.len());
    }

    #[test]
    fn test_projects_in_empty_category_is_empty() {
        assert!(projects_in(Language::ENGLISH, Some(ProjectCategory::Backend)).is_empty());
    }

    #[test]
    fn test_find_project() {
        let project = find_project(Language::PORTUGUESE, "ecommerce").expect("ecommerce exists");
        assert_eq!(project.id, "ecommerce");
        assert!(find_project(Language::ENGLISH, "missing").is_none());
    }

    #[test]
    fn test_some_project_has_image_sequence() {
        assert!(PROJECTS.en.iter().any(|p| p.image_sequence().len() > 1));
        assert!(PROJECTS.en.iter().any(|p| p.images.is_none()));
    }

    // ==================== Profile Tests ====================

    #[test]
    fn test_biography_has_paragraphs_in_both_languages() {
        for bio in [BIOGRAPHY.pt, BIOGRAPHY.en] {
            assert_eq!(bio.who_i_am.len(), 2);
            assert_eq!(bio.my_journey.len(), 2);
            assert_eq!(bio.development_philosophy.len(), 1);
        }
    }

    #[test]
    fn test_biography_paragraphs_by_tab() {
        let bio = BIOGRAPHY.en;
        assert_eq!(AboutTab::default(), AboutTab::WhoIAm);
        assert_eq!(bio.paragraphs(AboutTab::WhoIAm), bio.who_i_am);
        assert_eq!(bio.paragraphs(AboutTab::MyJourney), bio.my_journey);
        assert_eq!(
            bio.paragraphs(AboutTab::DevelopmentPhilosophy),
            bio.development_philosophy
        );
    }

    #[test]
    fn test_social_links_are_https() {
        for link in SOCIAL_LINKS {
            assert!(link.url.starts_with("https://"), "{}", link.label);
        }
    }

    #[test]
    fn test_location_row_has_no_href() {
        let location = CONTACT_INFO
            .iter()
            .find(|info| info.kind == ContactInfoKind::Location)
            .expect("location row");
        assert!(location.href.is_none());
    }
}
