//! Localized copy for the brief
//!
//! One [`BriefContent`] per language. Missing keys are rejected by
//! deserialization; [`BriefContent::validate`] then checks that every
//! string is filled in and that every label list matches the field
//! catalogue it is paired with.

mod language;
mod model;

pub use language::{Language, PageContext, TOTAL_PAGES};
pub use model::{
    MediaItem, ModulesCopy, PlanningCards, PlanningCopy, ProjectCards, ProjectCopy, ProjectFields,
    SignatureFields, TechnicalCards, TechnicalCopy, TechnicalFields,
};

use crate::compose::catalogue;
use crate::error::{PdfError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

const FR_JSON: &str = include_str!("../../content/fr.json");
const EN_JSON: &str = include_str!("../../content/en.json");

/// Number of media rows on the modules page
pub const MEDIA_ITEM_COUNT: usize = 5;

/// All copy of one brief
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BriefContent {
    /// Header counter template with `{page}` and `{total}` placeholders
    pub header_page: String,
    pub footer_note: String,
    pub page1: ProjectCopy,
    pub page2: TechnicalCopy,
    pub page3: PlanningCopy,
    pub page4: ModulesCopy,
}

impl BriefContent {
    /// Copy shipped with the crate
    pub fn builtin(language: Language) -> Result<Self> {
        let json = match language {
            Language::French => FR_JSON,
            Language::English => EN_JSON,
        };
        Self::from_json_str(json)
    }

    /// Parse and validate copy from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let content: BriefContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// `<dir>/<code>.json` when `content_dir` holds one, the built-in copy
    /// otherwise.
    pub fn load(language: Language, content_dir: Option<&Path>) -> Result<Self> {
        if let Some(dir) = content_dir {
            let path = dir.join(format!("{}.json", language.code()));
            if path.is_file() {
                info!(%language, path = %path.display(), "loading content file");
                return Self::from_file(&path);
            }
            debug!(%language, path = %path.display(), "no content file, using built-in copy");
        }
        Self::builtin(language)
    }

    /// Check required strings and list lengths, naming the first
    /// offending key.
    pub fn validate(&self) -> Result<()> {
        require("header_page", &self.header_page)?;
        for placeholder in ["{page}", "{total}"] {
            if !self.header_page.contains(placeholder) {
                return Err(PdfError::invalid_content(
                    "header_page",
                    format!("missing {placeholder} placeholder"),
                ));
            }
        }
        require("footer_note", &self.footer_note)?;

        let p1 = &self.page1;
        require("page1.title", &p1.title)?;
        require("page1.subtitle", &p1.subtitle)?;
        require("page1.cards.project", &p1.cards.project)?;
        require("page1.cards.impact", &p1.cards.impact)?;
        require("page1.cards.contact", &p1.cards.contact)?;
        require("page1.cards.audience", &p1.cards.audience)?;
        require("page1.cards.features", &p1.cards.features)?;
        let f = &p1.fields;
        for (key, value) in [
            ("project_name", &f.project_name),
            ("project_type", &f.project_type),
            ("project_goal", &f.project_goal),
            ("project_budget", &f.project_budget),
            ("project_date", &f.project_date),
            ("impact_detail", &f.impact_detail),
            ("contact_name_role", &f.contact_name_role),
            ("contact_email", &f.contact_email),
            ("contact_phone", &f.contact_phone),
            ("contact_company", &f.contact_company),
            ("contact_location", &f.contact_location),
        ] {
            require(&format!("page1.fields.{key}"), value)?;
        }
        require("page1.impact_hint", &p1.impact_hint)?;
        require_list("page1.audience_labels", &p1.audience_labels, catalogue::AUDIENCE.len())?;
        require_list("page1.features_left", &p1.features_left, catalogue::FEATURES_LEFT.len())?;
        require_list("page1.features_right", &p1.features_right, catalogue::FEATURES_RIGHT.len())?;

        let p2 = &self.page2;
        require("page2.title", &p2.title)?;
        require("page2.subtitle", &p2.subtitle)?;
        require("page2.cards.design", &p2.cards.design)?;
        require("page2.cards.integrations", &p2.cards.integrations)?;
        require("page2.cards.pages", &p2.cards.pages)?;
        require("page2.design_hint", &p2.design_hint)?;
        require("page2.fields.design_references", &p2.fields.design_references)?;
        require("page2.fields.design_content", &p2.fields.design_content)?;
        require("page2.fields.pages_primary", &p2.fields.pages_primary)?;
        require("page2.fields.pages_secondary", &p2.fields.pages_secondary)?;
        require_list(
            "page2.integrations_left",
            &p2.integrations_left,
            catalogue::INTEGRATIONS_LEFT.len(),
        )?;
        require_list(
            "page2.integrations_right",
            &p2.integrations_right,
            catalogue::INTEGRATIONS_RIGHT.len(),
        )?;

        let p3 = &self.page3;
        require("page3.title", &p3.title)?;
        require("page3.subtitle", &p3.subtitle)?;
        require("page3.cards.planning", &p3.cards.planning)?;
        require("page3.cards.signature", &p3.cards.signature)?;
        require("page3.planning_target", &p3.planning_target)?;
        require_list("page3.planning_rows", &p3.planning_rows, catalogue::PLANNING.len())?;
        require("page3.fields.sign_client_name", &p3.fields.sign_client_name)?;
        require("page3.fields.sign_client", &p3.fields.sign_client)?;
        require("page3.fields.sign_kd_name", &p3.fields.sign_kd_name)?;
        require("page3.fields.sign_kd", &p3.fields.sign_kd)?;
        require("page3.terms_note", &p3.terms_note)?;

        let p4 = &self.page4;
        require("page4.title", &p4.title)?;
        require("page4.subtitle", &p4.subtitle)?;
        if p4.items.len() != MEDIA_ITEM_COUNT {
            return Err(PdfError::invalid_content(
                "page4.items",
                format!("expected {MEDIA_ITEM_COUNT} entries, found {}", p4.items.len()),
            ));
        }
        for (i, item) in p4.items.iter().enumerate() {
            require(&format!("page4.items[{i}].title"), &item.title)?;
            require(&format!("page4.items[{i}].summary"), &item.summary)?;
            require(&format!("page4.items[{i}].pricing"), &item.pricing)?;
            require(&format!("page4.items[{i}].timeline"), &item.timeline)?;
            require(&format!("page4.items[{i}].image"), &item.image)?;
        }

        Ok(())
    }
}

fn require(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PdfError::invalid_content(key, "must not be empty"));
    }
    Ok(())
}

fn require_list(key: &str, values: &[String], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(PdfError::invalid_content(
            key,
            format!("expected {expected} entries, found {}", values.len()),
        ));
    }
    for (i, value) in values.iter().enumerate() {
        require(&format!("{key}[{i}]"), value)?;
    }
    Ok(())
}
