//! Search and filter operations.
//!
//! # Responsibility
//! - Select papers by free-text containment across descriptive fields.
//! - Apply independent optional filters combined with logical AND.
//!
//! # Invariants
//! - Output is always a subsequence of the input (no reorder, no duplicates).
//! - A blank search text selects everything.
//! - Absent filter fields are skipped; `year == 0` and empty keyword count as
//!   absent.

use crate::model::organism::Organism;
use crate::model::paper::{PaperRecord, UNKNOWN_YEAR};
use serde::{Deserialize, Serialize};

/// Returns papers whose title, keywords, abstract, authors, summary or
/// research focus contains `query`, ignoring case.
///
/// Whitespace-only queries return every input paper unchanged.
pub fn search_papers<'a, I>(papers: I, query: &str) -> Vec<&'a PaperRecord>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    if query.trim().is_empty() {
        return papers.into_iter().collect();
    }

    let needle = query.to_lowercase();
    papers
        .into_iter()
        .filter(|paper| matches_text(paper, &needle))
        .collect()
}

fn matches_text(paper: &PaperRecord, needle: &str) -> bool {
    [
        &paper.title,
        &paper.keywords,
        &paper.abstract_text,
        &paper.authors,
        &paper.summary,
        &paper.research_focus,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Optional filters; each `None` field is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperFilter {
    /// Exact organism tag match.
    pub organism: Option<Organism>,
    /// Exact year match; `Some(0)` is treated as absent.
    pub year: Option<i32>,
    /// Case-insensitive substring of the keywords field; empty is absent.
    pub keyword: Option<String>,
}

impl PaperFilter {
    /// Returns whether no field restricts the result.
    pub fn is_empty(&self) -> bool {
        self.organism.is_none() && self.active_year().is_none() && self.active_keyword().is_none()
    }

    /// Returns whether `paper` passes every active predicate.
    pub fn matches(&self, paper: &PaperRecord) -> bool {
        if let Some(organism) = self.organism {
            if paper.organism != organism {
                return false;
            }
        }
        if let Some(year) = self.active_year() {
            if paper.year != year {
                return false;
            }
        }
        if let Some(keyword) = self.active_keyword() {
            if !paper
                .keywords
                .to_lowercase()
                .contains(&keyword.to_lowercase())
            {
                return false;
            }
        }
        true
    }

    fn active_year(&self) -> Option<i32> {
        self.year.filter(|year| *year != UNKNOWN_YEAR)
    }

    fn active_keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|keyword| !keyword.is_empty())
    }
}

/// Returns papers passing every active predicate of `filter`.
pub fn filter_papers<'a, I>(papers: I, filter: &PaperFilter) -> Vec<&'a PaperRecord>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    papers
        .into_iter()
        .filter(|paper| filter.matches(paper))
        .collect()
}

/// Explore-page query: free text narrowed by filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperQuery {
    pub text: String,
    pub filter: PaperFilter,
}

impl PaperQuery {
    /// Searches by `text`, then applies `filter`.
    pub fn apply<'a, I>(&self, papers: I) -> Vec<&'a PaperRecord>
    where
        I: IntoIterator<Item = &'a PaperRecord>,
    {
        filter_papers(search_papers(papers, &self.text), &self.filter)
    }

    /// Number of user-facing restrictions in effect: text, organism and year.
    /// The keyword filter narrows results but is not counted.
    pub fn active_filter_count(&self) -> usize {
        [
            !self.text.trim().is_empty(),
            self.filter.organism.is_some(),
            self.filter.active_year().is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_papers, search_papers, PaperFilter, PaperQuery};
    use crate::model::organism::Organism;
    use crate::model::paper::PaperRecord;

    fn papers() -> Vec<PaperRecord> {
        vec![
            PaperRecord {
                id: 1,
                title: "Bone loss in mice".to_string(),
                keywords: "Microgravity, bone".to_string(),
                year: 2020,
                organism: Organism::Mice,
                ..PaperRecord::default()
            },
            PaperRecord {
                id: 2,
                title: "Root growth".to_string(),
                research_focus: "Gravitropism in Arabidopsis".to_string(),
                keywords: "plants".to_string(),
                year: 2021,
                organism: Organism::Plants,
                ..PaperRecord::default()
            },
        ]
    }

    #[test]
    fn search_covers_research_focus_case_insensitively() {
        let papers = papers();
        let hits = search_papers(&papers, "GRAVITROPISM");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn zero_year_and_empty_keyword_are_skipped() {
        let papers = papers();
        let filter = PaperFilter {
            organism: None,
            year: Some(0),
            keyword: Some(String::new()),
        };
        assert!(filter.is_empty());
        assert_eq!(filter_papers(&papers, &filter).len(), 2);
    }

    #[test]
    fn query_combines_text_and_filters() {
        let papers = papers();
        let query = PaperQuery {
            text: "bone".to_string(),
            filter: PaperFilter {
                organism: Some(Organism::Mice),
                year: Some(2020),
                keyword: Some("MICRO".to_string()),
            },
        };
        let hits = query.apply(&papers);
        assert_eq!(hits.iter().map(|paper| paper.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(query.active_filter_count(), 3);
        assert_eq!(PaperQuery::default().active_filter_count(), 0);
    }

    #[test]
    fn keyword_filter_is_not_counted_as_active() {
        let papers = papers();
        let query = PaperQuery {
            text: "  ".to_string(),
            filter: PaperFilter {
                keyword: Some("plants".to_string()),
                ..PaperFilter::default()
            },
        };
        assert_eq!(query.apply(&papers).len(), 1);
        assert_eq!(query.active_filter_count(), 0);
    }
}
