//! # cahier-pdf
//!
//! Layout engine and PDF writer for the Kah-Digital project brief: a four page,
//! dark themed A4 document with fillable AcroForm fields, produced in French
//! and English.
//!
//! ## Features
//!
//! - **Fixed layout**: cards, fields and checkboxes placed at computed positions
//! - **AcroForm fields**: text fields and checkboxes with appearance streams
//! - **Localized copy**: JSON content per language, validated against the field catalogue
//! - **Embedded font**: TrueType body font with a Helvetica fallback
//! - **Remote images**: module illustrations fetched over HTTP with placeholders on failure
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cahier_pdf::{generate_all, BriefConfig};
//!
//! let config = BriefConfig::from_base_dir(".").with_offline(true);
//! let report = generate_all(&config);
//! for outcome in &report.outcomes {
//!     match &outcome.result {
//!         Ok(path) => println!("{}: {}", outcome.language, path.display()),
//!         Err(err) => eprintln!("{}: {}", outcome.language, err),
//!     }
//! }
//! ```
//!
//! Building a single document without touching the filesystem:
//!
//! ```rust
//! use cahier_pdf::{Assembler, BriefContent, Font, Language, OfflineFetcher, RenderContext};
//!
//! # fn main() -> cahier_pdf::Result<()> {
//! let ctx = RenderContext::new(Font::Helvetica, &OfflineFetcher);
//! let content = BriefContent::builtin(Language::English)?;
//! let document = Assembler::new(ctx).build(&content, Language::English)?;
//!
//! let mut bytes = Vec::new();
//! document.write(&mut bytes)?;
//! assert!(bytes.starts_with(b"%PDF-1.7"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! ### Brief Modules
//! - [`assembler`] - Per-language document builds
//! - [`compose`] - The four page layouts and the field catalogue
//! - [`layout`] - Cards, fields, paragraphs and rows
//! - [`content`] - Localized copy
//! - [`assets`] - Font, logo and remote image loading
//!
//! ### Generation Modules
//! - [`document`] - PDF document creation and management
//! - [`page`] - Pages and their content streams
//! - [`surface`] - Style tracking drawing surface
//! - [`forms`] - AcroForm widgets and appearances
//! - [`writer`] - Low-level PDF writing

pub mod assembler;
pub mod assets;
pub mod compose;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod fonts;
pub mod forms;
pub mod geometry;
pub mod graphics;
pub mod layout;
pub mod objects;
pub mod page;
pub mod surface;
pub mod text;
pub mod writer;

// Re-export generation types
pub use document::{Document, DocumentMetadata};
pub use error::{PdfError, Result};
pub use graphics::{Color, GraphicsContext, Image};
pub use page::Page;
pub use surface::DrawingSurface;
pub use text::Font;

// Re-export brief types
pub use assembler::{generate_all, generate_all_with, Assembler, GenerationReport, LanguageOutcome};
pub use assets::{AssetError, FontOutcome, FontResolver, HttpImageFetcher, ImageFetcher, OfflineFetcher};
pub use config::BriefConfig;
pub use content::{BriefContent, Language, PageContext};
pub use layout::{RenderContext, Theme};

/// Current version of cahier-pdf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
