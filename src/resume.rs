//! Résumé download, one PDF per language.

use crate::i18n::{Language, LocalizedText};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

const RESUME_FILES: LocalizedText = LocalizedText::new(
    "CV - Alexsander Augusto Portugues.pdf",
    "CV - Alexsander Augusto Ingles.pdf",
);

/// File name of the résumé offered in `language`.
pub fn resume_file_name(language: Language) -> &'static str {
    RESUME_FILES.resolve(language)
}

/// Copy the résumé for `language` from `source_dir` into `dest_dir`.
///
/// Returns the path of the written file.
pub fn download_resume(source_dir: &Path, dest_dir: &Path, language: Language) -> Result<PathBuf> {
    let file_name = resume_file_name(language);
    let source = source_dir.join(file_name);
    let dest = dest_dir.join(file_name);

    std::fs::create_dir_all(dest_dir)
        .with_context(|| format!("Failed to create {}", dest_dir.display()))?;
    let bytes = std::fs::copy(&source, &dest)
        .with_context(|| format!("Failed to copy résumé from {}", source.display()))?;

    info!("Downloaded {} résumé to {} ({} bytes)", language, dest.display(), bytes);
    Ok(dest)
}
