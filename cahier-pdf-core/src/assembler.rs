//! Builds a complete brief per language and writes it out
//!
//! Both languages share the resolved font, the logo and the image fetcher.
//! Everything else, from content to pages, belongs to a single build, so a
//! failure in one language leaves the other untouched.

use crate::assets::{
    load_logo_or_skip, FontOutcome, FontResolver, HttpImageFetcher, ImageFetcher, OfflineFetcher,
};
use crate::compose::{chrome::BRAND, standard_pages};
use crate::config::BriefConfig;
use crate::content::{BriefContent, Language, PageContext, TOTAL_PAGES};
use crate::document::Document;
use crate::error::{PdfError, Result};
use crate::layout::RenderContext;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Turns content into documents with one render context
pub struct Assembler<'a> {
    ctx: RenderContext<'a>,
}

impl<'a> Assembler<'a> {
    pub fn new(ctx: RenderContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &RenderContext<'a> {
        &self.ctx
    }

    /// Compose the four pages for `language`.
    ///
    /// # Errors
    ///
    /// Content that does not match the field catalogue, or a field name
    /// placed twice, aborts the build.
    pub fn build(&self, content: &BriefContent, language: Language) -> Result<Document> {
        let mut document = Document::new(self.ctx.font.clone());
        document.set_title(language.document_title());
        document.set_author(BRAND);
        document.set_subject(content.page1.subtitle.as_str());

        for (index, composer) in standard_pages().into_iter().enumerate() {
            let page = PageContext::new(index + 1, language);
            let mut surface = self.ctx.new_surface();
            composer.compose(&mut surface, &self.ctx, &page, content)?;
            debug!(
                %language,
                page = page.page_number,
                cards = surface.cards().len(),
                widgets = surface.page().widgets().len(),
                "composed page"
            );
            document.add_page(surface.finish())?;
        }

        if document.page_count() != TOTAL_PAGES {
            return Err(PdfError::PageCount {
                expected: TOTAL_PAGES,
                actual: document.page_count(),
            });
        }
        Ok(document)
    }

    /// Build the brief and write it to `path`, creating parent directories.
    pub fn build_to_file(
        &self,
        content: &BriefContent,
        language: Language,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let path = path.as_ref();
        let document = self.build(content, language)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        document.save(path)?;
        info!(
            %language,
            path = %path.display(),
            fields = document.field_names().len(),
            font = document.body_font().name(),
            "wrote brief"
        );
        Ok(path.to_path_buf())
    }
}

/// Outcome of building one language
#[derive(Debug)]
pub struct LanguageOutcome {
    pub language: Language,
    pub result: Result<PathBuf>,
}

/// Outcome of a whole run
#[derive(Debug)]
pub struct GenerationReport {
    pub font: FontOutcome,
    pub outcomes: Vec<LanguageOutcome>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &LanguageOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Build every language described by `config`, fetching remote images over
/// HTTP unless the configuration is offline.
pub fn generate_all(config: &BriefConfig) -> GenerationReport {
    if config.offline {
        generate_all_with(config, &OfflineFetcher)
    } else {
        generate_all_with(config, &HttpImageFetcher::new(config.fetch_timeout))
    }
}

/// [`generate_all`] with an injected image source
pub fn generate_all_with(config: &BriefConfig, fetcher: &dyn ImageFetcher) -> GenerationReport {
    let font = FontResolver::new().resolve(&config.font_path);
    let ctx = RenderContext::new(font.font(), fetcher).with_logo(load_logo_or_skip(&config.logo_path));
    let assembler = Assembler::new(ctx);

    let outcomes = Language::ALL
        .into_iter()
        .map(|language| {
            let result = BriefContent::load(language, config.content_dir.as_deref()).and_then(|content| {
                assembler.build_to_file(&content, language, config.output_path(language))
            });
            if let Err(err) = &result {
                error!(%language, error = %err, "brief not generated");
            }
            LanguageOutcome { language, result }
        })
        .collect();

    GenerationReport { font, outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::catalogue;
    use crate::text::Font;
    use std::collections::HashSet;

    #[test]
    fn test_build_has_four_pages_and_full_catalogue() {
        let ctx = RenderContext::new(Font::Helvetica, &OfflineFetcher);
        let assembler = Assembler::new(ctx);
        let content = BriefContent::builtin(Language::French).unwrap();

        let document = assembler.build(&content, Language::French).unwrap();
        assert_eq!(document.page_count(), 4);
        assert_eq!(document.field_names().len(), catalogue::FIELD_COUNT);
        let names: HashSet<&str> = document.field_names().iter().map(String::as_str).collect();
        let expected: HashSet<&str> = catalogue::all_fields().collect();
        assert_eq!(names, expected);
        assert_eq!(document.metadata().author.as_deref(), Some("Kah-Digital"));
        assert_eq!(document.metadata().title.as_deref(), Some("Cahier des charges premium"));
    }

    #[test]
    fn test_bad_content_aborts_build() {
        let ctx = RenderContext::new(Font::Helvetica, &OfflineFetcher);
        let assembler = Assembler::new(ctx);
        let mut content = BriefContent::builtin(Language::English).unwrap();
        content.page2.integrations_right.pop();

        let err = assembler.build(&content, Language::English).unwrap_err();
        assert!(matches!(err, PdfError::InvalidContent { ref key, .. } if key == "page2.integrations_right"));
    }

    #[test]
    fn test_generate_all_offline() {
        let dir = tempfile::tempdir().unwrap();
        let config = BriefConfig::from_base_dir(dir.path()).with_offline(true);

        let report = generate_all(&config);
        assert!(report.is_success());
        assert!(report.font.is_fallback());
        for language in Language::ALL {
            let bytes = std::fs::read(config.output_path(language)).unwrap();
            assert!(bytes.starts_with(b"%PDF-1.7"));
        }
    }

    #[test]
    fn test_one_language_failing_keeps_the_other() {
        let dir = tempfile::tempdir().unwrap();
        let content_dir = dir.path().join("content");
        std::fs::create_dir_all(&content_dir).unwrap();
        std::fs::write(content_dir.join("fr.json"), "{ \"header_page\": ").unwrap();

        let config = BriefConfig::from_base_dir(dir.path())
            .with_offline(true)
            .with_content_dir(&content_dir);
        let report = generate_all(&config);

        assert!(!report.is_success());
        let failed: Vec<Language> = report.failures().map(|o| o.language).collect();
        assert_eq!(failed, vec![Language::French]);
        assert!(!config.output_path(Language::French).exists());
        assert!(config.output_path(Language::English).exists());
    }
}
