use super::BriefContent;
use std::fmt;
use std::str::FromStr;

/// Number of pages in every brief
pub const TOTAL_PAGES: usize = 4;

/// Supported brief languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    French,
    English,
}

impl Language {
    /// Every language, in build order
    pub const ALL: [Language; 2] = [Language::French, Language::English];

    /// ISO 639-1 code, also the content file stem
    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
        }
    }

    /// Name of the generated PDF
    pub fn output_file_name(&self) -> &'static str {
        match self {
            Language::French => "cahier-des-charges.pdf",
            Language::English => "cahier-des-charges.en.pdf",
        }
    }

    /// Document title written to the metadata
    pub fn document_title(&self) -> &'static str {
        match self {
            Language::French => "Cahier des charges premium",
            Language::English => "Project brief premium",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" | "french" => Ok(Language::French),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// Position of one page in its document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext {
    pub page_number: usize,
    pub total_pages: usize,
    pub language: Language,
}

impl PageContext {
    /// Context for 1-based `page_number` out of [`TOTAL_PAGES`]
    pub fn new(page_number: usize, language: Language) -> Self {
        Self {
            page_number,
            total_pages: TOTAL_PAGES,
            language,
        }
    }

    /// Header counter, e.g. `Project brief premium - Page 3/4`
    pub fn header_text(&self, content: &BriefContent) -> String {
        content
            .header_page
            .replace("{page}", &self.page_number.to_string())
            .replace("{total}", &self.total_pages.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::French.code(), "fr");
        assert_eq!(Language::English.to_string(), "en");
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_output_file_names() {
        assert_eq!(Language::French.output_file_name(), "cahier-des-charges.pdf");
        assert_eq!(Language::English.output_file_name(), "cahier-des-charges.en.pdf");
    }

    #[test]
    fn test_header_text() {
        let content = BriefContent::builtin(Language::English).unwrap();
        let context = PageContext::new(3, Language::English);
        assert_eq!(context.total_pages, 4);
        assert_eq!(
            context.header_text(&content),
            "Project brief premium - Page 3/4"
        );

        let content = BriefContent::builtin(Language::French).unwrap();
        assert_eq!(
            PageContext::new(1, Language::French).header_text(&content),
            "Cahier des charges premium - Page 1/4"
        );
    }
}
