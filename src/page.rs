//! The page root: all mutable view state plus the rendered view model.
//!
//! [`Portfolio`] is the one context object every interaction goes through.
//! [`Portfolio::render`] resolves every label and content table in the active
//! language into a [`PageView`], so a language switch is visible on the next
//! render with no other bookkeeping.

use crate::config::Config;
use crate::contact::{ContactField, ContactForm, ContactSubmitter, SubmitOutcome};
use crate::content::{
    self, AboutTab, ContactInfoKind, ExperienceEntry, ExperienceKind, ProjectCategory, ProjectEntry,
    SkillCategory, SocialLink, TechBadge, BIOGRAPHY, CONTACT_INFO, FOOTER_TECHNOLOGIES,
    OWNER_NAME, SOCIAL_LINKS, SOFT_SKILLS,
};
use crate::dispatch::EmailDispatch;
use crate::i18n::{keys, Language, LanguageRegistry, LanguageSelector};
use crate::projects::ProjectViewer;
use crate::resume;
use crate::reveal::{stagger_delay, RevealCoordinator, Section, PROJECT_STAGGER, SKILL_STAGGER};
use crate::toast::Toast;
use anyhow::Result;
use chrono::{Datelike, Local};
use serde::Serialize;
use std::cell::{Ref, RefCell};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Technologies shown on a project card before the "+N more" badge.
const CARD_TECHNOLOGIES: usize = 3;

/// Root page state.
pub struct Portfolio<D> {
    selector: LanguageSelector,
    reveal: RevealCoordinator,
    viewer: ProjectViewer,
    about_tab: AboutTab,
    skill_tab: SkillCategory,
    experience_tab: ExperienceKind,
    project_filter: Option<ProjectCategory>,
    contact: ContactSubmitter<D>,
    toasts: RefCell<Vec<Toast>>,
    resume_dir: PathBuf,
}

impl<D: EmailDispatch> Portfolio<D> {
    /// A freshly mounted page in the configured default language.
    pub fn new(config: &Config, dispatcher: D) -> Self {
        let mut reveal = RevealCoordinator::new();
        reveal.mount();

        Self {
            selector: LanguageSelector::with_language(config.default_language),
            reveal,
            viewer: ProjectViewer::new(),
            about_tab: AboutTab::default(),
            skill_tab: SkillCategory::Frontend,
            experience_tab: ExperienceKind::Work,
            project_filter: None,
            contact: ContactSubmitter::with_credentials(config.emailjs.clone(), dispatcher),
            toasts: RefCell::new(Vec::new()),
            resume_dir: config.resume_dir.clone(),
        }
    }

    // ==================== Language ====================

    pub fn language(&self) -> Language {
        self.selector.language()
    }

    pub fn set_language(&mut self, language: Language) {
        self.selector.set_language(language);
    }

    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.selector.translate(key)
    }

    // ==================== Sections ====================

    /// Feed an intersection report for `section`.
    pub fn observe_section(&mut self, section: Section, ratio: f64) -> bool {
        self.reveal.observe(section, ratio)
    }

    pub fn is_section_visible(&self, section: Section) -> bool {
        self.reveal.is_visible(section)
    }

    // ==================== Projects ====================

    /// Open the detail overlay. Unknown ids leave the viewer unchanged.
    pub fn select_project(&mut self, id: &str) -> bool {
        match content::find_project(self.language(), id) {
            Some(project) => {
                self.viewer.select(project);
                true
            }
            None => {
                debug!("No project with id '{}'", id);
                false
            }
        }
    }

    pub fn close_project(&mut self) {
        self.viewer.close();
    }

    pub fn next_image(&mut self) {
        self.viewer.next();
    }

    pub fn prev_image(&mut self) {
        self.viewer.prev();
    }

    pub fn go_to_image(&mut self, index: usize) {
        self.viewer.go_to(index);
    }

    pub fn viewer(&self) -> &ProjectViewer {
        &self.viewer
    }

    pub fn set_project_filter(&mut self, category: Option<ProjectCategory>) {
        self.project_filter = category;
    }

    // ==================== About ====================

    pub fn set_about_tab(&mut self, tab: AboutTab) {
        self.about_tab = tab;
    }

    /// Select the tech badge tab. Categories without a badge tab are ignored.
    pub fn set_skill_tab(&mut self, category: SkillCategory) {
        if SkillCategory::BADGE_TABS.contains(&category) {
            self.skill_tab = category;
        }
    }

    // ==================== Experience ====================

    pub fn set_experience_tab(&mut self, kind: ExperienceKind) {
        self.experience_tab = kind;
    }

    // ==================== Contact ====================

    pub fn update_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact.update(field, value);
    }

    pub fn contact_form(&self) -> Ref<'_, ContactForm> {
        self.contact.form()
    }

    pub fn contact(&self) -> &ContactSubmitter<D> {
        &self.contact
    }

    /// Submit the contact form and queue the resulting notification.
    ///
    /// Takes `&self` so the page can still be rendered (and edited through
    /// the submitter) while the dispatch is pending.
    pub async fn submit_contact(&self) -> SubmitOutcome {
        let outcome = self.contact.submit().await;
        // Toast in the language active when the result arrives
        if let Some(toast) = outcome.toast(self.language()) {
            self.toasts.borrow_mut().push(toast);
        }
        outcome
    }

    /// Drain queued notifications.
    pub fn take_toasts(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.borrow_mut())
    }

    // ==================== Résumé ====================

    /// Copy the résumé for the active language into `dest_dir`.
    pub fn download_resume(&self, dest_dir: &Path) -> Result<PathBuf> {
        resume::download_resume(&self.resume_dir, dest_dir, self.language())
    }

    // ==================== Rendering ====================

    pub fn render(&self) -> PageView {
        let language = self.language();
        debug!("Rendering page in {}", language.name());

        PageView {
            language,
            nav: self.render_nav(),
            hero: self.render_hero(),
            about: self.render_about(),
            projects: self.render_projects(),
            experience: self.render_experience(),
            contact: self.render_contact(),
            footer: self.render_footer(),
            detail: self.render_detail(),
            toasts: self.toasts.borrow().clone(),
        }
    }

    fn nav_links(&self) -> Vec<Link> {
        Section::ALL
            .into_iter()
            .map(|section| Link::anchor(self.translate(section_key(section)), section))
            .collect()
    }

    fn render_nav(&self) -> NavView {
        let active = self.language();
        let languages = LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| LanguageOption {
                code: config.code,
                native_name: config.native_name,
                flag: config.flag_asset,
                aria_label: config.switch_label,
                active: config.code == active.code(),
            })
            .collect();

        NavView {
            brand: OWNER_NAME,
            links: self.nav_links(),
            hire_me: Link::anchor(self.translate(keys::HIRE_ME), Section::Contact),
            languages,
        }
    }

    fn render_hero(&self) -> HeroView {
        HeroView {
            visible: self.is_section_visible(Section::Hero),
            name: OWNER_NAME,
            role: self.translate(keys::FULLSTACK_DEVELOPER),
            subtitle: self.translate(keys::HERO_SUBTITLE),
            view_my_work: Link::anchor(self.translate(keys::VIEW_MY_WORK), Section::Projects),
            download_cv: self.translate(keys::DOWNLOAD_CV),
            resume_file: resume::resume_file_name(self.language()),
            scroll_hint: self.translate(keys::SCROLL_TO_EXPLORE),
            social: social_links(),
        }
    }

    fn render_about(&self) -> AboutView {
        let language = self.language();
        let biography = BIOGRAPHY.get(language);

        let skill_groups = SkillCategory::PROFICIENCY
            .into_iter()
            .map(|category| SkillGroupView {
                title: category.title().resolve(language),
                skills: content::skills_in(category)
                    .into_iter()
                    .enumerate()
                    .map(|(index, skill)| SkillBarView {
                        name: skill.name,
                        proficiency: skill.proficiency,
                        delay_ms: millis(stagger_delay(index, SKILL_STAGGER)),
                    })
                    .collect(),
            })
            .collect();

        let badge_tabs = SkillCategory::BADGE_TABS
            .into_iter()
            .map(|category| BadgeTabView {
                category,
                title: category.title().resolve(language),
                badges: content::badges_in(category),
                active: category == self.skill_tab,
            })
            .collect();

        let soft_skills = SOFT_SKILLS
            .iter()
            .map(|skill| SoftSkillView {
                icon: skill.icon,
                title: skill.title.resolve(language),
                description: skill.description.resolve(language),
            })
            .collect();

        AboutView {
            visible: self.is_section_visible(Section::About),
            heading: self.translate(keys::ABOUT_ME),
            subtitle: self.translate(keys::ABOUT_SUBTITLE),
            biography: AboutTab::TABS
                .into_iter()
                .map(|tab| BiographyTab {
                    tab,
                    title: self.translate(about_key(tab)),
                    paragraphs: biography.paragraphs(tab),
                    active: tab == self.about_tab,
                })
                .collect(),
            technical_skills: self.translate(keys::TECHNICAL_SKILLS),
            skill_groups,
            badge_tabs,
            soft_skills_heading: self.translate(keys::SOFT_SKILLS),
            soft_skills,
        }
    }

    fn render_projects(&self) -> ProjectsView {
        let cards = content::projects_in(self.language(), self.project_filter)
            .into_iter()
            .enumerate()
            .map(|(index, project)| self.project_card(index, project))
            .collect();

        ProjectsView {
            visible: self.is_section_visible(Section::Projects),
            heading: self.translate(keys::FEATURED_PROJECTS),
            subtitle: self.translate(keys::PROJECTS_SUBTITLE),
            all_projects: self.translate(keys::ALL_PROJECTS),
            filter: self.project_filter,
            cards,
        }
    }

    fn project_card(&self, index: usize, project: &'static ProjectEntry) -> ProjectCard {
        let hidden = project.technologies.len().saturating_sub(CARD_TECHNOLOGIES);

        ProjectCard {
            id: project.id,
            title: project.title,
            description: project.description,
            image: project.image,
            icon: project.icon,
            technologies: project.technologies.iter().take(CARD_TECHNOLOGIES).copied().collect(),
            more: (hidden > 0).then(|| format!("+{} {}", hidden, self.translate(keys::MORE))),
            view_details: self.translate(keys::VIEW_DETAILS),
            source: Link::external(self.translate(keys::VIEW_SOURCE_CODE), project.repository_url),
            live: project
                .live_url
                .map(|url| Link::external(self.translate(keys::LIVE_DEMO), url)),
            delay_ms: millis(stagger_delay(index, PROJECT_STAGGER)),
        }
    }

    fn render_detail(&self) -> Option<ProjectDetailView> {
        let project = self.viewer.active_project(self.language())?;

        let mut links = vec![Link::external(
            self.translate(keys::VIEW_SOURCE_CODE),
            project.repository_url,
        )];
        if let Some(url) = project.live_url {
            links.push(Link::external(self.translate(keys::LIVE_DEMO), url));
        }
        if let Some(url) = project.demo_url {
            links.push(Link::external(self.translate(keys::WATCH_DEMO), url));
        }

        Some(ProjectDetailView {
            id: project.id,
            title: project.title,
            long_description: project.long_description,
            image: self.viewer.current_image().unwrap_or(project.image),
            carousel: self.viewer.has_carousel().then(|| CarouselView {
                index: self.viewer.index(),
                count: self.viewer.image_count(),
                previous: self.translate(keys::PREVIOUS_IMAGE),
                next: self.translate(keys::NEXT_IMAGE),
            }),
            features: Titled::new(self.translate(keys::KEY_FEATURES), project.features),
            challenges: Titled::new(self.translate(keys::CHALLENGES), project.challenges),
            results: Titled::new(self.translate(keys::RESULTS), project.results),
            technologies: Titled::new(
                self.translate(keys::TECHNOLOGIES_USED),
                project.technologies,
            ),
            links,
            close: self.translate(keys::CLOSE),
        })
    }

    fn render_experience(&self) -> ExperienceView {
        let tabs = ExperienceKind::TABS
            .into_iter()
            .map(|kind| ExperienceTab {
                kind,
                label: self.translate(experience_key(kind)),
                icon: kind.icon(),
                active: kind == self.experience_tab,
            })
            .collect();

        ExperienceView {
            visible: self.is_section_visible(Section::Experience),
            heading: self.translate(keys::PROFESSIONAL_JOURNEY),
            subtitle: self.translate(keys::EXPERIENCE_SUBTITLE),
            tabs,
            responsibilities: self.translate(keys::RESPONSIBILITIES),
            key_achievements: self.translate(keys::KEY_ACHIEVEMENTS),
            entries: content::experiences_of(self.language(), self.experience_tab),
        }
    }

    fn render_contact(&self) -> ContactView {
        let info = CONTACT_INFO
            .iter()
            .map(|info| ContactInfoRow {
                label: self.translate(match info.kind {
                    ContactInfoKind::Email => keys::EMAIL_LABEL,
                    ContactInfoKind::Phone => keys::PHONE_LABEL,
                    ContactInfoKind::Location => keys::LOCATION_LABEL,
                }),
                value: info.value,
                href: info.href,
            })
            .collect();

        let form = self.contact.form();
        let fields = ContactField::ALL
            .into_iter()
            .map(|field| {
                let (label, placeholder) = field_keys(field);
                FormFieldView {
                    name: field.name(),
                    label: self.translate(label),
                    placeholder: self.translate(placeholder),
                    value: form.get(field).to_string(),
                }
            })
            .collect();

        let submitting = self.contact.is_submitting();
        ContactView {
            visible: self.is_section_visible(Section::Contact),
            heading: self.translate(keys::GET_IN_TOUCH),
            subtitle: self.translate(keys::CONTACT_SUBTITLE),
            lets_connect: self.translate(keys::LETS_CONNECT),
            info,
            follow_me: self.translate(keys::FOLLOW_ME),
            social: social_links(),
            availability: self.translate(keys::AVAILABLE_FOR_FREELANCE),
            form: ContactFormView {
                title: self.translate(keys::SEND_MESSAGE),
                fields,
                submit: self.translate(if submitting { keys::SENDING } else { keys::SEND }),
                submitting,
                response_time: self.translate(keys::RESPONSE_TIME),
            },
        }
    }

    fn render_footer(&self) -> FooterView {
        FooterView {
            brand: OWNER_NAME,
            description: self.translate(keys::FOOTER_DESCRIPTION),
            quick_links: Titled::new(self.translate(keys::QUICK_LINKS), self.nav_links()),
            technologies: Titled::new(self.translate(keys::TECHNOLOGIES), FOOTER_TECHNOLOGIES),
            social: social_links(),
            copyright: format!(
                "© {} {}. {}.",
                Local::now().year(),
                OWNER_NAME,
                self.translate(keys::ALL_RIGHTS_RESERVED)
            ),
            built_with: self.translate(keys::BUILT_WITH),
        }
    }
}

fn section_key(section: Section) -> &'static str {
    match section {
        Section::Hero => keys::HOME,
        Section::About => keys::ABOUT,
        Section::Projects => keys::PROJECTS,
        Section::Experience => keys::EXPERIENCE,
        Section::Contact => keys::CONTACT,
    }
}

fn about_key(tab: AboutTab) -> &'static str {
    match tab {
        AboutTab::WhoIAm => keys::WHO_I_AM,
        AboutTab::MyJourney => keys::MY_JOURNEY,
        AboutTab::DevelopmentPhilosophy => keys::DEVELOPMENT_PHILOSOPHY,
    }
}

fn experience_key(kind: ExperienceKind) -> &'static str {
    match kind {
        ExperienceKind::Work => keys::WORK_EXPERIENCE,
        ExperienceKind::Education => keys::EDUCATION,
        ExperienceKind::Certification => keys::CERTIFICATIONS,
    }
}

fn field_keys(field: ContactField) -> (&'static str, &'static str) {
    match field {
        ContactField::Name => (keys::YOUR_NAME, keys::NAME_PLACEHOLDER),
        ContactField::Email => (keys::YOUR_EMAIL, keys::EMAIL_PLACEHOLDER),
        ContactField::Subject => (keys::SUBJECT, keys::SUBJECT_PLACEHOLDER),
        ContactField::Message => (keys::MESSAGE, keys::MESSAGE_PLACEHOLDER),
    }
}

fn social_links() -> Vec<Link> {
    SOCIAL_LINKS
        .iter()
        .map(|link: &SocialLink| Link::external(link.label, link.url))
        .collect()
}

fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

// ==================== View Model ====================

/// Everything on screen, resolved in one language.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub language: Language,
    pub nav: NavView,
    pub hero: HeroView,
    pub about: AboutView,
    pub projects: ProjectsView,
    pub experience: ExperienceView,
    pub contact: ContactView,
    pub footer: FooterView,
    /// Open project overlay
    pub detail: Option<ProjectDetailView>,
    pub toasts: Vec<Toast>,
}

/// A link to an on-page anchor or an external page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    /// External links open in a new browsing context
    pub opens_new_context: bool,
}

impl Link {
    fn anchor(label: &str, section: Section) -> Self {
        Self {
            label: label.to_string(),
            href: format!("#{}", section.anchor()),
            opens_new_context: false,
        }
    }

    fn external(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            href: url.to_string(),
            opens_new_context: true,
        }
    }
}

/// A heading over a list.
#[derive(Debug, Clone, Serialize)]
pub struct Titled<T> {
    pub title: &'static str,
    pub items: T,
}

impl<T> Titled<T> {
    fn new(title: &'static str, items: T) -> Self {
        Self { title, items }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavView {
    pub brand: &'static str,
    pub links: Vec<Link>,
    pub hire_me: Link,
    pub languages: Vec<LanguageOption>,
}

/// One entry of the language switcher.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
    pub aria_label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroView {
    pub visible: bool,
    pub name: &'static str,
    pub role: &'static str,
    pub subtitle: &'static str,
    pub view_my_work: Link,
    pub download_cv: &'static str,
    pub resume_file: &'static str,
    pub scroll_hint: &'static str,
    pub social: Vec<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutView {
    pub visible: bool,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub biography: Vec<BiographyTab>,
    pub technical_skills: &'static str,
    pub skill_groups: Vec<SkillGroupView>,
    pub badge_tabs: Vec<BadgeTabView>,
    pub soft_skills_heading: &'static str,
    pub soft_skills: Vec<SoftSkillView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BiographyTab {
    pub tab: AboutTab,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroupView {
    pub title: &'static str,
    pub skills: Vec<SkillBarView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillBarView {
    pub name: &'static str,
    pub proficiency: u8,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BadgeTabView {
    pub category: SkillCategory,
    pub title: &'static str,
    pub badges: Vec<&'static TechBadge>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SoftSkillView {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectsView {
    pub visible: bool,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub all_projects: &'static str,
    pub filter: Option<ProjectCategory>,
    /// Empty when the filter matches nothing
    pub cards: Vec<ProjectCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub icon: &'static str,
    pub technologies: Vec<&'static str>,
    /// "+N more" when technologies were cut
    pub more: Option<String>,
    pub view_details: &'static str,
    pub source: Link,
    /// Live demo, when the project has one
    pub live: Option<Link>,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetailView {
    pub id: &'static str,
    pub title: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    /// `None` hides the carousel controls
    pub carousel: Option<CarouselView>,
    pub features: Titled<&'static [&'static str]>,
    pub challenges: Titled<&'static [&'static str]>,
    pub results: Titled<&'static [&'static str]>,
    pub technologies: Titled<&'static [&'static str]>,
    pub links: Vec<Link>,
    pub close: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CarouselView {
    pub index: usize,
    pub count: usize,
    pub previous: &'static str,
    pub next: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    pub visible: bool,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub tabs: Vec<ExperienceTab>,
    pub responsibilities: &'static str,
    pub key_achievements: &'static str,
    pub entries: Vec<&'static ExperienceEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceTab {
    pub kind: ExperienceKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactView {
    pub visible: bool,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub lets_connect: &'static str,
    pub info: Vec<ContactInfoRow>,
    pub follow_me: &'static str,
    pub social: Vec<Link>,
    pub availability: &'static str,
    pub form: ContactFormView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfoRow {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactFormView {
    pub title: &'static str,
    pub fields: Vec<FormFieldView>,
    pub submit: &'static str,
    /// Disables the send control
    pub submitting: bool,
    pub response_time: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormFieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterView {
    pub brand: &'static str,
    pub description: &'static str,
    pub quick_links: Titled<Vec<Link>>,
    pub technologies: Titled<&'static [&'static str]>,
    pub social: Vec<Link>,
    pub copyright: String,
    pub built_with: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailJsConfig;
    use crate::dispatch::{DispatchError, DispatchRequest};
    use async_trait::async_trait;
    use tokio::sync::Notify;

    struct NoopDispatcher;

    #[async_trait]
    impl EmailDispatch for NoopDispatcher {
        async fn send(&self, _request: &DispatchRequest) -> Result<(), DispatchError> {
            Ok(())
        }
    }

    /// Holds every send until released, then rejects it.
    #[derive(Default)]
    struct GatedRejectingDispatcher {
        release: Notify,
    }

    #[async_trait]
    impl EmailDispatch for GatedRejectingDispatcher {
        async fn send(&self, _request: &DispatchRequest) -> Result<(), DispatchError> {
            self.release.notified().await;
            Err(DispatchError::Rejected {
                status: 500,
                body: "boom".to_string(),
            })
        }
    }

    fn create_test_config() -> Config {
        Config {
            emailjs: Some(EmailJsConfig {
                service_id: "service_test".to_string(),
                template_id: "template_test".to_string(),
                public_key: "public_test".to_string(),
                private_key: None,
                api_url: "http://unused".to_string(),
            }),
            default_language: Language::PORTUGUESE,
            resume_dir: PathBuf::from("assets"),
        }
    }

    fn create_page() -> Portfolio<NoopDispatcher> {
        Portfolio::new(&create_test_config(), NoopDispatcher)
    }

    // ==================== Language Tests ====================

    #[test]
    fn test_starts_in_configured_language() {
        let mut config = create_test_config();
        config.default_language = Language::ENGLISH;
        let page = Portfolio::new(&config, NoopDispatcher);
        assert_eq!(page.render().nav.links[0].label, "Home");
    }

    #[test]
    fn test_language_switch_relocalizes_everything() {
        let mut page = create_page();
        let pt = page.render();
        assert_eq!(pt.nav.links[0].label, "Início");
        assert_eq!(pt.about.skill_groups[2].title, "Banco de Dados");

        page.set_language(Language::ENGLISH);
        let en = page.render();
        assert_eq!(en.nav.links[0].label, "Home");
        assert_eq!(en.about.skill_groups[2].title, "Database");
        assert_ne!(pt.projects.cards[0].title, en.projects.cards[0].title);
        assert_eq!(en.hero.resume_file, "CV - Alexsander Augusto Ingles.pdf");
    }

    #[test]
    fn test_language_switcher_marks_active() {
        let mut page = create_page();
        page.set_language(Language::ENGLISH);
        let languages = page.render().nav.languages;

        let active: Vec<_> = languages.iter().filter(|l| l.active).map(|l| l.code).collect();
        assert_eq!(active, vec!["en"]);
        assert_eq!(languages.len(), 2);
    }

    // ==================== Section Tests ====================

    #[test]
    fn test_hero_visible_after_mount() {
        let view = create_page().render();
        assert!(view.hero.visible);
        assert!(!view.about.visible);
        assert!(!view.contact.visible);
    }

    #[test]
    fn test_observed_section_renders_visible() {
        let mut page = create_page();
        assert!(page.observe_section(Section::About, 0.4));
        assert!(page.render().about.visible);
    }

    // ==================== Project Tests ====================

    #[test]
    fn test_project_cards_truncate_technologies() {
        let mut page = create_page();
        page.set_language(Language::ENGLISH);
        let card = &page.render().projects.cards[0];

        assert_eq!(card.technologies.len(), CARD_TECHNOLOGIES);
        assert_eq!(card.more.as_deref(), Some("+4 more"));
        assert!(card.source.opens_new_context);
    }

    #[test]
    fn test_project_cards_link_live_demo() {
        let mut page = create_page();
        page.set_language(Language::ENGLISH);
        let card = &page.render().projects.cards[0];

        let live = card.live.as_ref().expect("ecommerce has a live demo");
        assert_eq!(live.label, "Live Demo");
        assert_eq!(live.href, "https://ecommerce-demo.com");
        assert!(live.opens_new_context);
        assert_eq!(card.source.href, "https://github.com/example/ecommerce");
    }

    #[test]
    fn test_project_card_delays_stagger() {
        let cards = create_page().render().projects.cards;
        let delays: Vec<_> = cards.iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![0, 200, 400]);
    }

    #[test]
    fn test_empty_filter_renders_empty_grid() {
        let mut page = create_page();
        page.set_project_filter(Some(ProjectCategory::Backend));
        assert!(page.render().projects.cards.is_empty());
    }

    #[test]
    fn test_detail_overlay_lifecycle() {
        let mut page = create_page();
        assert!(page.render().detail.is_none());

        assert!(page.select_project("analytics"));
        let detail = page.render().detail.expect("overlay open");
        let carousel = detail.carousel.expect("analytics has a carousel");
        assert_eq!(carousel.index, 0);
        assert_eq!(carousel.count, 4);

        page.prev_image();
        assert_eq!(page.render().detail.and_then(|d| d.carousel).map(|c| c.index), Some(3));

        page.close_project();
        assert!(page.render().detail.is_none());
    }

    #[test]
    fn test_detail_without_sequence_has_no_carousel() {
        let mut page = create_page();
        assert!(page.select_project("ecommerce"));
        let detail = page.render().detail.expect("overlay open");
        assert!(detail.carousel.is_none());
        assert_eq!(detail.image, "assets/project-ecommerce.jpg");
    }

    #[test]
    fn test_detail_relocalizes_while_open() {
        let mut page = create_page();
        page.select_project("taskmanager");
        let pt = page.render().detail.expect("open");

        page.set_language(Language::ENGLISH);
        let en = page.render().detail.expect("still open");
        assert_eq!(pt.id, en.id);
        assert_eq!(en.title, "Task Management System");
        assert_eq!(en.links.len(), 3);
    }

    #[test]
    fn test_unknown_project_is_ignored() {
        let mut page = create_page();
        assert!(!page.select_project("nope"));
        assert!(page.render().detail.is_none());
    }

    // ==================== About Tests ====================

    #[test]
    fn test_about_tabs_default_to_first() {
        let about = create_page().render().about;

        let active: Vec<_> = about.biography.iter().filter(|t| t.active).map(|t| t.tab).collect();
        assert_eq!(active, vec![AboutTab::WhoIAm]);
        assert_eq!(about.biography[0].title, "Quem Sou");

        let active: Vec<_> = about
            .badge_tabs
            .iter()
            .filter(|t| t.active)
            .map(|t| t.category)
            .collect();
        assert_eq!(active, vec![SkillCategory::Frontend]);
    }

    #[test]
    fn test_about_and_skill_tab_switch() {
        let mut page = create_page();
        page.set_about_tab(AboutTab::DevelopmentPhilosophy);
        page.set_skill_tab(SkillCategory::Mobile);
        let about = page.render().about;

        let active: Vec<_> = about.biography.iter().filter(|t| t.active).map(|t| t.tab).collect();
        assert_eq!(active, vec![AboutTab::DevelopmentPhilosophy]);
        let active: Vec<_> = about
            .badge_tabs
            .iter()
            .filter(|t| t.active)
            .map(|t| t.category)
            .collect();
        assert_eq!(active, vec![SkillCategory::Mobile]);

        page.set_language(Language::ENGLISH);
        let about = page.render().about;
        assert!(about.biography[2].active);
        assert!(about.badge_tabs[4].active);
    }

    // ==================== Experience Tests ====================

    #[test]
    fn test_experience_tab_switch() {
        let mut page = create_page();
        page.set_experience_tab(ExperienceKind::Certification);
        let view = page.render().experience;

        assert!(view.entries.iter().all(|e| e.kind == ExperienceKind::Certification));
        let active: Vec<_> = view.tabs.iter().filter(|t| t.active).map(|t| t.kind).collect();
        assert_eq!(active, vec![ExperienceKind::Certification]);
    }

    // ==================== Contact Tests ====================

    #[test]
    fn test_contact_form_reflects_field_values() {
        let mut page = create_page();
        page.update_contact_field(ContactField::Subject, "Freela");
        let form = page.render().contact.form;

        let subject = form.fields.iter().find(|f| f.name == "subject").expect("field");
        assert_eq!(subject.value, "Freela");
        assert_eq!(form.submit, "Enviar");
        assert!(!form.submitting);
    }

    #[tokio::test]
    async fn test_page_renders_while_submission_is_pending() {
        let page = Portfolio::new(&create_test_config(), GatedRejectingDispatcher::default());
        page.contact().update(ContactField::Name, "Maria Silva");
        page.contact().update(ContactField::Email, "maria@example.com");
        page.contact().update(ContactField::Subject, "Proposta");
        page.contact().update(ContactField::Message, "Olá!");

        let pending = async {
            let form = page.render().contact.form;
            assert!(form.submitting);
            assert_eq!(form.submit, "Enviando...");
            assert!(page.render().toasts.is_empty());
            page.contact().dispatcher().release.notify_one();
        };
        let (outcome, ()) = tokio::join!(page.submit_contact(), pending);

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        let form = page.render().contact.form;
        assert!(!form.submitting);
        assert_eq!(form.submit, "Enviar");

        let toasts = page.take_toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0], Toast::message_failed(Language::PORTUGUESE));
        assert!(page.take_toasts().is_empty());
    }

    #[tokio::test]
    async fn test_submit_without_credentials_queues_error_toast() {
        let mut config = create_test_config();
        config.emailjs = None;
        let mut page = Portfolio::new(&config, NoopDispatcher);
        page.update_contact_field(ContactField::Name, "Maria Silva");
        page.update_contact_field(ContactField::Email, "maria@example.com");
        page.update_contact_field(ContactField::Subject, "Proposta");
        page.update_contact_field(ContactField::Message, "Olá!");

        let outcome = page.submit_contact().await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(DispatchError::NotConfigured)
        ));
        assert_eq!(page.contact_form().name, "Maria Silva");
        assert_eq!(page.take_toasts(), vec![Toast::message_failed(Language::PORTUGUESE)]);
    }

    #[test]
    fn test_contact_info_location_is_plain_text() {
        let info = create_page().render().contact.info;
        assert_eq!(info.len(), 3);
        assert!(info[0].href.is_some());
        assert!(info[2].href.is_none());
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_page_view_serializes() {
        let mut page = create_page();
        page.select_project("taskmanager");
        let json = serde_json::to_value(page.render()).expect("Should serialize");

        assert_eq!(json["language"], "pt");
        assert_eq!(json["detail"]["id"], "taskmanager");
        assert_eq!(json["experience"]["tabs"][0]["kind"], "work");
        assert!(json["footer"]["copyright"]
            .as_str()
            .expect("string")
            .contains(OWNER_NAME));
    }
}
