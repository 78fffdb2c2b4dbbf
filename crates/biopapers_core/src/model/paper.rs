//! Research paper record.
//!
//! # Responsibility
//! - Define the typed record every spreadsheet row maps to.
//! - Provide the small text projections paper cards display.
//!
//! # Invariants
//! - `id` is the 1-based load position and unique within one collection.
//! - Text fields are never absent; a missing cell is an empty string.
//! - `year == 0` means unknown, never a real publication year.

use crate::model::organism::Organism;
use serde::{Deserialize, Serialize};

/// Position-derived identifier, stable only within one load.
pub type PaperId = u32;

/// Sentinel year for missing or unparseable year cells.
pub const UNKNOWN_YEAR: i32 = 0;

/// One spreadsheet row mapped to a typed structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    pub id: PaperId,
    pub title: String,
    /// Comma-separated author list, as written in the source.
    pub authors: String,
    pub year: i32,
    /// Comma-separated keyword list, as written in the source.
    pub keywords: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub research_focus: String,
    pub limitations: String,
    pub summary: String,
    pub organism: Organism,
}

impl PaperRecord {
    /// Returns whether the publication year is known.
    pub fn has_year(&self) -> bool {
        self.year > UNKNOWN_YEAR
    }

    /// Iterates trimmed, non-empty keyword tokens in source order.
    pub fn keyword_tokens(&self) -> impl Iterator<Item = &str> {
        split_list(&self.keywords)
    }

    /// Iterates trimmed, non-empty author names in source order.
    pub fn author_names(&self) -> impl Iterator<Item = &str> {
        split_list(&self.authors)
    }

    /// First author, suffixed with `et al.` when the paper lists more.
    pub fn lead_author_label(&self) -> String {
        let mut names = self.authors.split(',');
        let lead = names.next().unwrap_or_default().trim();
        if names.next().is_some() {
            format!("{lead} et al.")
        } else {
            lead.to_string()
        }
    }

    /// First `limit` keyword tokens, for compact card display.
    pub fn keyword_chips(&self, limit: usize) -> Vec<&str> {
        self.keyword_tokens().take(limit).collect()
    }

    /// First `max_chars` characters of the summary followed by an ellipsis.
    pub fn summary_excerpt(&self, max_chars: usize) -> String {
        let mut excerpt = self.summary.chars().take(max_chars).collect::<String>();
        excerpt.push_str("...");
        excerpt
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
