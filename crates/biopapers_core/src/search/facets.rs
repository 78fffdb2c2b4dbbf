//! Facet aggregation for filter pickers and keyword listings.
//!
//! # Invariants
//! - `unique_years` excludes the unknown-year sentinel and sorts descending.
//! - `unique_organisms` sorts by display label, ascending.
//! - Keyword ranking is by count descending, ties by first appearance.

use crate::model::organism::Organism;
use crate::model::paper::PaperRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Keyword listing size used by the general keyword index.
pub const DEFAULT_KEYWORD_LIMIT: usize = 20;

/// One keyword token and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Distinct known years, most recent first.
pub fn unique_years<'a, I>(papers: I) -> Vec<i32>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    papers
        .into_iter()
        .filter(|paper| paper.has_year())
        .map(|paper| paper.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// Distinct organism tags, ordered by label.
pub fn unique_organisms<'a, I>(papers: I) -> Vec<Organism>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    let mut organisms = Vec::new();
    for paper in papers {
        if !organisms.contains(&paper.organism) {
            organisms.push(paper.organism);
        }
    }
    organisms.sort_by_key(|organism| organism.label());
    organisms
}

/// The `limit` most frequent keyword tokens, verbatim as written.
pub fn top_keywords<'a, I>(papers: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    let tokens = papers
        .into_iter()
        .flat_map(|paper| paper.keyword_tokens().map(str::to_string));
    rank_tokens(tokens, limit)
        .into_iter()
        .map(|entry| entry.keyword)
        .collect()
}

/// Counts tokens and returns the `limit` most frequent.
///
/// Sorting is stable over first-appearance order, so equal counts keep the
/// order in which tokens were first seen.
pub(crate) fn rank_tokens(
    tokens: impl IntoIterator<Item = String>,
    limit: usize,
) -> Vec<KeywordCount> {
    let mut counts: Vec<KeywordCount> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for token in tokens {
        match slots.get(&token) {
            Some(slot) => counts[*slot].count += 1,
            None => {
                slots.insert(token.clone(), counts.len());
                counts.push(KeywordCount {
                    keyword: token,
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|left, right| right.count.cmp(&left.count));
    counts.truncate(limit);
    counts
}
