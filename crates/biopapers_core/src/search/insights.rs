//! Chart-ready distributions over a paper collection.
//!
//! # Responsibility
//! - Year, organism and keyword distributions for the insights view.
//! - Headline totals shown above the charts.
//!
//! # Invariants
//! - Unknown years never appear in year outputs.
//! - An empty collection yields empty distributions and no year span.

use super::facets::{rank_tokens, KeywordCount};
use crate::model::organism::Organism;
use crate::model::paper::PaperRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keyword chart size.
pub const INSIGHT_KEYWORD_LIMIT: usize = 10;
/// Tokens this short or shorter are too generic to chart.
const MIN_INSIGHT_KEYWORD_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganismCount {
    pub organism: Organism,
    pub count: usize,
}

/// Inclusive range of known publication years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSpan {
    pub earliest: i32,
    pub latest: i32,
}

/// Papers per known year, oldest first.
pub fn year_distribution<'a, I>(papers: I) -> Vec<YearCount>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    let mut counts = BTreeMap::<i32, usize>::new();
    for paper in papers.into_iter().filter(|paper| paper.has_year()) {
        *counts.entry(paper.year).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Papers per organism, most common first; ties keep first appearance.
pub fn organism_distribution<'a, I>(papers: I) -> Vec<OrganismCount>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    let mut counts: Vec<OrganismCount> = Vec::new();
    for paper in papers {
        match counts
            .iter_mut()
            .find(|entry| entry.organism == paper.organism)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(OrganismCount {
                organism: paper.organism,
                count: 1,
            }),
        }
    }
    counts.sort_by(|left, right| right.count.cmp(&left.count));
    counts
}

/// Most frequent lowercased keywords longer than three characters.
pub fn insight_keywords<'a, I>(papers: I, limit: usize) -> Vec<KeywordCount>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    let tokens = papers.into_iter().flat_map(|paper| {
        paper
            .keyword_tokens()
            .map(str::to_lowercase)
            .filter(|token| token.chars().count() > MIN_INSIGHT_KEYWORD_CHARS)
    });
    rank_tokens(tokens, limit)
}

/// Earliest and latest known year; `None` when no paper has a year.
pub fn year_span<'a, I>(papers: I) -> Option<YearSpan>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    papers
        .into_iter()
        .filter(|paper| paper.has_year())
        .fold(None, |span: Option<YearSpan>, paper| {
            Some(match span {
                None => YearSpan {
                    earliest: paper.year,
                    latest: paper.year,
                },
                Some(span) => YearSpan {
                    earliest: span.earliest.min(paper.year),
                    latest: span.latest.max(paper.year),
                },
            })
        })
}

/// Headline numbers and distributions for the insights view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub total_papers: usize,
    pub year_span: Option<YearSpan>,
    pub years: Vec<YearCount>,
    pub organisms: Vec<OrganismCount>,
    pub keywords: Vec<KeywordCount>,
}

impl Insights {
    pub fn compute(papers: &[PaperRecord]) -> Self {
        Self {
            total_papers: papers.len(),
            year_span: year_span(papers),
            years: year_distribution(papers),
            organisms: organism_distribution(papers),
            keywords: insight_keywords(papers, INSIGHT_KEYWORD_LIMIT),
        }
    }

    /// Number of distinct organisms studied.
    pub fn organism_count(&self) -> usize {
        self.organisms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{insight_keywords, year_span, YearSpan};
    use crate::model::paper::PaperRecord;

    fn paper(year: i32, keywords: &str) -> PaperRecord {
        PaperRecord {
            year,
            keywords: keywords.to_string(),
            ..PaperRecord::default()
        }
    }

    #[test]
    fn year_span_ignores_unknown_years() {
        let papers = vec![paper(0, ""), paper(2014, ""), paper(2022, ""), paper(2017, "")];
        assert_eq!(
            year_span(&papers),
            Some(YearSpan {
                earliest: 2014,
                latest: 2022
            })
        );
        assert_eq!(year_span(&[paper(0, "")]), None);
    }

    #[test]
    fn insight_keywords_fold_case_and_drop_short_tokens() {
        let papers = vec![paper(2020, "Bone, ISS, bone"), paper(2021, "BONE, dna, Muscle")];
        let ranked = insight_keywords(&papers, 10);
        assert_eq!(ranked[0].keyword, "bone");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].keyword, "muscle");
    }
}
