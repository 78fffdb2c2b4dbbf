//! Ordered response rules.
//!
//! # Responsibility
//! - Map lowercase query keywords to canned or templated answers.
//! - Fall back to search-result summaries when no topic rule answers.
//!
//! # Invariants
//! - Rules are evaluated in table order; the first one that answers wins.
//! - A rule whose trigger matches may decline (return `None`) and let later
//!   rules run.
//! - Empty collections produce explicit "no data" wording, never sentinels.

use crate::model::paper::PaperRecord;
use crate::search::insights::year_span;
use crate::search::query::search_papers;
use std::collections::HashSet;

const MICROGRAVITY_PREVIEW_COUNT: usize = 3;
const MICROGRAVITY_SUMMARY_CHARS: usize = 150;
const AUTHORS_PER_PAPER: usize = 2;
const FEATURED_AUTHOR_COUNT: usize = 5;
const RECENT_WINDOW_YEARS: i32 = 2;
const RECENT_PREVIEW_COUNT: usize = 3;

const MUSCLE_ANSWER: &str = "Muscle atrophy in space is a critical concern. Research shows that microgravity causes significant muscle mass loss due to reduced mechanical loading. Studies indicate that astronauts can lose up to 20% of muscle mass during long-duration missions. Countermeasures include resistance exercise and pharmaceutical interventions being actively researched.";

const PLANT_ANSWER: &str = "Plant growth in space environments presents unique challenges and opportunities. Research has shown that plants can adapt to microgravity, though their growth patterns differ from Earth. Key findings include altered root orientation (gravitropism), changes in cell wall structure, and modified gene expression. This research is crucial for long-duration space missions and potential extraterrestrial agriculture.";

const RADIATION_ANSWER: &str = "Space radiation is one of the most significant health risks for astronauts. Cosmic radiation and solar particle events can cause DNA damage, increase cancer risk, and affect the central nervous system. Current research focuses on radiation shielding, biological countermeasures, and understanding cellular repair mechanisms in space environments.";

const GREETING_ANSWER: &str = "Hello! I'm here to help you explore space biology research. Our database contains studies on microgravity effects, cellular adaptations, physiological changes, and much more. What specific topic interests you?";

const HELP_ANSWER: &str = "I can help you with:\n• Finding research papers on specific topics (microgravity, radiation, muscle atrophy, etc.)\n• Summarizing key findings from studies\n• Comparing research across different years\n• Identifying top researchers in the field\n• Explaining space biology concepts\n\nJust ask me anything about space biology!";

const NO_RESEARCHERS_ANSWER: &str =
    "Our database does not list any researchers yet. Once papers are loaded, I can name key contributors.";

const NO_DATED_PAPERS_ANSWER: &str =
    "Our database does not contain any dated publications yet, so I cannot compare research across years.";

/// Topic bucket a rule answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Microgravity,
    Muscle,
    Plants,
    Radiation,
    Researchers,
    Recency,
    Greeting,
    Help,
}

/// One row of the response table.
pub struct ResponseRule {
    pub topic: Topic,
    /// Lowercase substrings; any one of them triggers the rule.
    pub triggers: &'static [&'static str],
    answer: fn(&[PaperRecord]) -> Option<String>,
}

impl ResponseRule {
    /// Returns whether `normalized_query` (already lowercase) triggers this rule.
    pub fn is_triggered_by(&self, normalized_query: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| normalized_query.contains(trigger))
    }

    /// Produces this rule's answer, or `None` when it declines.
    pub fn answer(&self, papers: &[PaperRecord]) -> Option<String> {
        (self.answer)(papers)
    }
}

/// Topic rules in evaluation order.
///
/// Rules overlap on purpose: "latest microgravity papers" is answered by the
/// microgravity rule and never reaches the recency rule.
pub static RESPONSE_RULES: [ResponseRule; 8] = [
    ResponseRule {
        topic: Topic::Microgravity,
        triggers: &["microgravity", "weightless"],
        answer: microgravity_answer,
    },
    ResponseRule {
        topic: Topic::Muscle,
        triggers: &["muscle", "atrophy"],
        answer: muscle_answer,
    },
    ResponseRule {
        topic: Topic::Plants,
        triggers: &["plant", "growth"],
        answer: plant_answer,
    },
    ResponseRule {
        topic: Topic::Radiation,
        triggers: &["radiation"],
        answer: radiation_answer,
    },
    ResponseRule {
        topic: Topic::Researchers,
        triggers: &["author", "researcher"],
        answer: researchers_answer,
    },
    ResponseRule {
        topic: Topic::Recency,
        triggers: &["year", "recent", "latest"],
        answer: recency_answer,
    },
    ResponseRule {
        topic: Topic::Greeting,
        triggers: &["hello", "hi"],
        answer: greeting_answer,
    },
    ResponseRule {
        topic: Topic::Help,
        triggers: &["help", "what can you"],
        answer: help_answer,
    },
];

/// Which topic rule answers `query`, if any.
pub fn matching_topic(query: &str, papers: &[PaperRecord]) -> Option<Topic> {
    let normalized = query.to_lowercase();
    RESPONSE_RULES
        .iter()
        .filter(|rule| rule.is_triggered_by(&normalized))
        .find(|rule| rule.answer(papers).is_some())
        .map(|rule| rule.topic)
}

/// Answers a free-text question about the collection.
pub fn respond(query: &str, papers: &[PaperRecord]) -> String {
    let normalized = query.to_lowercase();
    RESPONSE_RULES
        .iter()
        .filter(|rule| rule.is_triggered_by(&normalized))
        .find_map(|rule| rule.answer(papers))
        .unwrap_or_else(|| fallback_answer(&normalized, papers))
}

fn muscle_answer(_: &[PaperRecord]) -> Option<String> {
    Some(MUSCLE_ANSWER.to_string())
}

fn plant_answer(_: &[PaperRecord]) -> Option<String> {
    Some(PLANT_ANSWER.to_string())
}

fn radiation_answer(_: &[PaperRecord]) -> Option<String> {
    Some(RADIATION_ANSWER.to_string())
}

fn greeting_answer(_: &[PaperRecord]) -> Option<String> {
    Some(GREETING_ANSWER.to_string())
}

fn help_answer(_: &[PaperRecord]) -> Option<String> {
    Some(HELP_ANSWER.to_string())
}

fn microgravity_answer(papers: &[PaperRecord]) -> Option<String> {
    let matches = papers
        .iter()
        .filter(|paper| paper.keywords.to_lowercase().contains("microgravity"))
        .collect::<Vec<_>>();
    if matches.is_empty() {
        return None;
    }

    let previews = matches
        .iter()
        .take(MICROGRAVITY_PREVIEW_COUNT)
        .map(|paper| {
            format!(
                "• \"{}\" ({}) - {}",
                paper.title,
                paper.year,
                paper.summary_excerpt(MICROGRAVITY_SUMMARY_CHARS)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Some(format!(
        "I found {} studies related to microgravity:\n\n{}\n\nMicrogravity significantly impacts various biological systems including muscle atrophy, bone density loss, and cellular adaptations.",
        matches.len(),
        previews
    ))
}

fn researchers_answer(papers: &[PaperRecord]) -> Option<String> {
    let mut seen = HashSet::new();
    let mut researchers = Vec::new();
    for name in papers
        .iter()
        .flat_map(|paper| paper.author_names().take(AUTHORS_PER_PAPER))
    {
        if seen.insert(name) {
            researchers.push(name);
        }
    }

    if researchers.is_empty() {
        return Some(NO_RESEARCHERS_ANSWER.to_string());
    }

    let featured = researchers
        .iter()
        .take(FEATURED_AUTHOR_COUNT)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!(
        "Our database includes work from {}+ researchers. Some key contributors include: {}, and many others advancing our understanding of space biology.",
        researchers.len(),
        featured
    ))
}

fn recency_answer(papers: &[PaperRecord]) -> Option<String> {
    let Some(span) = year_span(papers) else {
        return Some(NO_DATED_PAPERS_ANSWER.to_string());
    };

    let window_start = span.latest - RECENT_WINDOW_YEARS;
    let recent = papers
        .iter()
        .filter(|paper| paper.has_year() && paper.year >= window_start)
        .take(RECENT_PREVIEW_COUNT)
        .map(|paper| format!("\"{}\"", paper.title))
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!(
        "Our database includes research from {} to {}. Recent publications ({}-{}) focus on: {}.",
        span.earliest, span.latest, window_start, span.latest, recent
    ))
}

fn fallback_answer(normalized_query: &str, papers: &[PaperRecord]) -> String {
    let hits = if normalized_query.trim().is_empty() {
        Vec::new()
    } else {
        search_papers(papers, normalized_query)
    };
    let Some(top) = hits.first() else {
        return format!(
            "I found {} research papers in our database covering topics like microgravity effects, cellular adaptation, muscle atrophy, radiation impacts, and physiological changes in space. Could you be more specific about what aspect of space biology you'd like to explore? For example, you could ask about specific organisms, research topics, or time periods.",
            papers.len()
        );
    };

    let noun = if hits.len() == 1 { "paper" } else { "papers" };
    let mut answer = format!(
        "I found {} relevant {}:\n\n\"{}\" ({})\n\n{}",
        hits.len(),
        noun,
        top.title,
        top.year,
        top.summary
    );
    if hits.len() > 1 {
        answer.push_str(&format!(
            "\n\nThere are {} more related papers in our database.",
            hits.len() - 1
        ));
    }
    answer
}
