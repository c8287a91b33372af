//! Project detail overlay: the selected project and its image carousel.

use crate::content::{self, ProjectEntry};
use crate::i18n::Language;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Selection {
    id: &'static str,
    primary: &'static str,
    images: &'static [&'static str],
    index: usize,
}

/// Selection and carousel state for the detail overlay.
///
/// Only the id is stored; the record itself is resolved in the active
/// language when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectViewer {
    selection: Option<Selection>,
}

impl ProjectViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay for `project`, starting at its first image.
    pub fn select(&mut self, project: &ProjectEntry) {
        debug!("Opening project '{}'", project.id);
        self.selection = Some(Selection {
            id: project.id,
            primary: project.image,
            images: project.image_sequence(),
            index: 0,
        });
    }

    pub fn close(&mut self) {
        self.selection = None;
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    pub fn active_id(&self) -> Option<&'static str> {
        self.selection.as_ref().map(|selection| selection.id)
    }

    /// The open project in `language`.
    pub fn active_project(&self, language: Language) -> Option<&'static ProjectEntry> {
        self.active_id()
            .and_then(|id| content::find_project(language, id))
    }

    /// Carousel position; 0 when closed or without a sequence.
    pub fn index(&self) -> usize {
        self.selection.as_ref().map_or(0, |selection| selection.index)
    }

    pub fn image_count(&self) -> usize {
        self.selection
            .as_ref()
            .map_or(0, |selection| selection.images.len())
    }

    /// Whether carousel controls are shown.
    pub fn has_carousel(&self) -> bool {
        self.image_count() > 1
    }

    /// The image on display; the primary image when there is no sequence.
    pub fn current_image(&self) -> Option<&'static str> {
        self.selection.as_ref().map(|selection| {
            selection
                .images
                .get(selection.index)
                .copied()
                .unwrap_or(selection.primary)
        })
    }

    pub fn next(&mut self) {
        self.step(|index, len| (index + 1) % len);
    }

    pub fn prev(&mut self) {
        self.step(|index, len| (index + len - 1) % len);
    }

    /// Jump to `index`; out-of-range positions are ignored.
    pub fn go_to(&mut self, index: usize) {
        if let Some(selection) = self.selection.as_mut() {
            if index < selection.images.len() {
                selection.index = index;
            }
        }
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) {
        if let Some(selection) = self.selection.as_mut() {
            let len = selection.images.len();
            if len == 0 {
                return;
            }
            selection.index = advance(selection.index, len);
            debug!("Project '{}' image {}/{}", selection.id, selection.index + 1, len);
        }
    }
}
