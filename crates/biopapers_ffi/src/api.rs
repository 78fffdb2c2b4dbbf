//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the paper engine to Dart via FRB as plain records and strings.
//! - Own the one process-wide paper library.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Data-unavailable failures surface as empty results, never errors.
//! - The library is configured at most once; later configuration is rejected.

use biopapers_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    parse_organism_filter, ping as ping_inner, respond, top_keywords as top_keywords_inner,
    unique_organisms, unique_years, FailurePolicy, Insights, LibraryConfig, PaperFilter,
    PaperLibrary, PaperQuery, PaperRecord, SheetFile, DEFAULT_KEYWORD_LIMIT,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

const CARD_KEYWORD_CHIPS: usize = 3;
const KEYWORD_LIMIT_MAX: u32 = 100;

static LIBRARY: OnceLock<PaperLibrary<SheetFile>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Points the process-wide library at a spreadsheet.
///
/// Input semantics:
/// - `data_path`: spreadsheet path; blank falls back to environment/defaults.
/// - `cache_failures`: pin an empty collection when the first load fails.
///
/// # FFI contract
/// - Sync call; reads nothing until the first load.
/// - Returns empty string on success, error message when a library is
///   already configured.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_library(data_path: String, cache_failures: bool) -> String {
    let mut config = LibraryConfig::from_env();
    let trimmed = data_path.trim();
    if !trimmed.is_empty() {
        config.data_path = PathBuf::from(trimmed);
    }
    if cache_failures {
        config.failure_policy = FailurePolicy::CacheEmpty;
    }

    let requested = config.data_path.clone();
    if LIBRARY.set(PaperLibrary::from_config(&config)).is_err() {
        let active = shared_library().source().path().display().to_string();
        warn!(
            "event=library_configure module=ffi status=rejected active={} requested={}",
            active,
            requested.display()
        );
        return format!("library already configured at `{active}`");
    }
    String::new()
}

/// Paper card projection for list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperCardItem {
    pub id: u32,
    pub title: String,
    /// First author plus `et al.` when there are more.
    pub author_label: String,
    pub authors: String,
    pub year: i32,
    pub organism: String,
    pub keyword_chips: Vec<String>,
    pub keywords: String,
    pub abstract_text: String,
    pub research_focus: String,
    pub limitations: String,
    pub summary: String,
}

/// Result envelope for explore queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreResponse {
    pub items: Vec<PaperCardItem>,
    /// Total papers in the library, before filtering.
    pub total: u32,
    pub active_filters: u32,
    /// Human-readable count line or input error.
    pub message: String,
}

/// Chart-ready insights envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsResponse {
    pub total_papers: u32,
    pub organism_count: u32,
    /// `earliest-latest`, or `-` when no paper is dated.
    pub year_range_label: String,
    pub years: Vec<LabelCount>,
    pub organisms: Vec<LabelCount>,
    pub keywords: Vec<LabelCount>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: u32,
}

/// Loads (or returns the cached) paper collection.
///
/// # FFI contract
/// - Async call on the FRB worker pool; may read the spreadsheet.
/// - Never panics; an unavailable spreadsheet yields an empty list.
pub fn load_papers() -> Vec<PaperCardItem> {
    shared_library().load().iter().map(to_card_item).collect()
}

/// Searches and filters the loaded collection.
///
/// Input semantics:
/// - `text`: free-text search; blank matches everything.
/// - `organism`: organism label or `All`.
/// - `year`: exact year; `None`/`0` means any year.
/// - `keyword`: keyword substring; blank means any keyword.
#[flutter_rust_bridge::frb(sync)]
pub fn explore_papers(
    text: String,
    organism: String,
    year: Option<i32>,
    keyword: String,
) -> ExploreResponse {
    let papers = shared_library().load();
    let organism = match parse_organism_filter(&organism) {
        Ok(organism) => organism,
        Err(err) => {
            return ExploreResponse {
                items: Vec::new(),
                total: count_u32(papers.len()),
                active_filters: 0,
                message: format!("explore_papers failed: {err}"),
            };
        }
    };

    let keyword = keyword.trim();
    let query = PaperQuery {
        text,
        filter: PaperFilter {
            organism,
            year,
            keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
        },
    };
    let items = query
        .apply(papers.iter())
        .into_iter()
        .map(to_card_item)
        .collect::<Vec<_>>();
    let message = match items.len() {
        1 => "1 paper found".to_string(),
        count => format!("{count} papers found"),
    };

    ExploreResponse {
        items,
        total: count_u32(papers.len()),
        active_filters: count_u32(query.active_filter_count()),
        message,
    }
}

/// Known publication years, most recent first.
#[flutter_rust_bridge::frb(sync)]
pub fn facet_years() -> Vec<i32> {
    unique_years(shared_library().load().iter())
}

/// Organism labels present in the collection, alphabetical.
#[flutter_rust_bridge::frb(sync)]
pub fn facet_organisms() -> Vec<String> {
    unique_organisms(shared_library().load().iter())
        .into_iter()
        .map(|organism| organism.label().to_string())
        .collect()
}

/// Most frequent keywords; `None`/`0` uses the default listing size.
#[flutter_rust_bridge::frb(sync)]
pub fn top_keywords(limit: Option<u32>) -> Vec<String> {
    top_keywords_inner(shared_library().load().iter(), normalize_keyword_limit(limit))
}

/// Distributions and totals for the insights view.
#[flutter_rust_bridge::frb(sync)]
pub fn insights() -> InsightsResponse {
    to_insights_response(&Insights::compute(&shared_library().load()))
}

/// Rule-table assistant answer for one chat turn.
///
/// The thinking delay is a UI concern and is not applied here.
#[flutter_rust_bridge::frb(sync)]
pub fn assistant_reply(query: String) -> String {
    respond(&query, &shared_library().load())
}

fn shared_library() -> &'static PaperLibrary<SheetFile> {
    LIBRARY.get_or_init(|| PaperLibrary::from_config(&LibraryConfig::from_env()))
}

fn normalize_keyword_limit(limit: Option<u32>) -> usize {
    match limit {
        None | Some(0) => DEFAULT_KEYWORD_LIMIT,
        Some(value) => value.min(KEYWORD_LIMIT_MAX) as usize,
    }
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn to_card_item(paper: &PaperRecord) -> PaperCardItem {
    PaperCardItem {
        id: paper.id,
        title: paper.title.clone(),
        author_label: paper.lead_author_label(),
        authors: paper.authors.clone(),
        year: paper.year,
        organism: paper.organism.label().to_string(),
        keyword_chips: paper
            .keyword_chips(CARD_KEYWORD_CHIPS)
            .into_iter()
            .map(str::to_string)
            .collect(),
        keywords: paper.keywords.clone(),
        abstract_text: paper.abstract_text.clone(),
        research_focus: paper.research_focus.clone(),
        limitations: paper.limitations.clone(),
        summary: paper.summary.clone(),
    }
}

fn to_insights_response(insights: &Insights) -> InsightsResponse {
    InsightsResponse {
        total_papers: count_u32(insights.total_papers),
        organism_count: count_u32(insights.organism_count()),
        year_range_label: insights
            .year_span
            .map(|span| format!("{}-{}", span.earliest, span.latest))
            .unwrap_or_else(|| "-".to_string()),
        years: insights
            .years
            .iter()
            .map(|entry| LabelCount {
                label: entry.year.to_string(),
                count: count_u32(entry.count),
            })
            .collect(),
        organisms: insights
            .organisms
            .iter()
            .map(|entry| LabelCount {
                label: entry.organism.label().to_string(),
                count: count_u32(entry.count),
            })
            .collect(),
        keywords: insights
            .keywords
            .iter()
            .map(|entry| LabelCount {
                label: entry.keyword.clone(),
                count: count_u32(entry.count),
            })
            .collect(),
    }
}
