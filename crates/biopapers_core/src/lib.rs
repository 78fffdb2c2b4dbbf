//! Core engine for the space-biology research portal.
//! Loads paper metadata from a spreadsheet and answers search, facet,
//! insight and assistant queries over it.

pub mod assistant;
pub mod config;
pub mod facet;
pub mod library;
pub mod logging;
pub mod model;
pub mod search;
pub mod source;

pub use assistant::rules::{matching_topic, respond, ResponseRule, Topic, RESPONSE_RULES};
pub use assistant::session::{ChatMessage, ChatRole, ChatSession, THINKING_DELAY};
pub use config::{FailurePolicy, LibraryConfig};
pub use facet::organism::{derive_organism, OrganismRule, ORGANISM_RULES};
pub use library::{PaperLibrary, Papers};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::organism::{parse_organism_filter, Organism, UnknownOrganism};
pub use model::paper::{PaperId, PaperRecord, UNKNOWN_YEAR};
pub use search::facets::{
    top_keywords, unique_organisms, unique_years, KeywordCount, DEFAULT_KEYWORD_LIMIT,
};
pub use search::insights::{
    insight_keywords, organism_distribution, year_distribution, year_span, Insights,
    OrganismCount, YearCount, YearSpan, INSIGHT_KEYWORD_LIMIT,
};
pub use search::query::{filter_papers, search_papers, PaperFilter, PaperQuery};
pub use source::{PaperSource, SheetFile, SheetTable, SourceError, SourceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
