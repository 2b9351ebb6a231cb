//! Build configuration: where assets are read from and documents written to

use crate::assets::DEFAULT_TIMEOUT;
use crate::content::Language;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Font shipped with the site's dependencies
pub const FONT_RELATIVE_PATH: &str =
    "node_modules/next/dist/compiled/@vercel/og/noto-sans-v27-latin-regular.ttf";

/// Brand logo
pub const LOGO_RELATIVE_PATH: &str = "public/apple-touch-icon.png";

/// Directory the documents are written to
pub const OUTPUT_RELATIVE_DIR: &str = "public";

/// Options for one generation run
#[derive(Debug, Clone)]
pub struct BriefConfig {
    /// Project root every other path is resolved against
    pub base_dir: PathBuf,
    /// TrueType body font
    pub font_path: PathBuf,
    /// Logo drawn in the header band
    pub logo_path: PathBuf,
    /// Output directory for the generated PDFs
    pub output_dir: PathBuf,
    /// Directory holding `fr.json` / `en.json` overrides
    pub content_dir: Option<PathBuf>,
    /// Bound on each remote image request
    pub fetch_timeout: Duration,
    /// Skip remote images and draw placeholders
    pub offline: bool,
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self::from_base_dir(".")
    }
}

impl BriefConfig {
    /// Standard layout under `base_dir`
    pub fn from_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        Self {
            font_path: base_dir.join(FONT_RELATIVE_PATH),
            logo_path: base_dir.join(LOGO_RELATIVE_PATH),
            output_dir: base_dir.join(OUTPUT_RELATIVE_DIR),
            content_dir: None,
            fetch_timeout: DEFAULT_TIMEOUT,
            offline: false,
            base_dir,
        }
    }

    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = Some(dir.into());
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Where the document for `language` is written
    pub fn output_path(&self, language: Language) -> PathBuf {
        self.output_dir.join(language.output_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = BriefConfig::from_base_dir("/srv/site");
        assert_eq!(
            config.font_path,
            Path::new("/srv/site/node_modules/next/dist/compiled/@vercel/og/noto-sans-v27-latin-regular.ttf")
        );
        assert_eq!(config.logo_path, Path::new("/srv/site/public/apple-touch-icon.png"));
        assert_eq!(
            config.output_path(Language::French),
            Path::new("/srv/site/public/cahier-des-charges.pdf")
        );
        assert_eq!(
            config.output_path(Language::English),
            Path::new("/srv/site/public/cahier-des-charges.en.pdf")
        );
        assert_eq!(config.fetch_timeout, Duration::from_secs(6));
        assert!(!config.offline);
        assert!(config.content_dir.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = BriefConfig::default()
            .with_offline(true)
            .with_content_dir("copy")
            .with_fetch_timeout(Duration::from_secs(1))
            .with_output_dir("out");

        assert!(config.offline);
        assert_eq!(config.content_dir.as_deref(), Some(Path::new("copy")));
        assert_eq!(config.fetch_timeout, Duration::from_secs(1));
        assert_eq!(config.output_path(Language::French), Path::new("out/cahier-des-charges.pdf"));
    }
}
