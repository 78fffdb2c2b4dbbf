//! Organism tag derivation.
//!
//! # Responsibility
//! - Classify a paper's study subject from its keywords and title.
//!
//! # Invariants
//! - Rules are evaluated top to bottom; the first matching rule wins.
//! - Matching is lowercase substring containment; no rule match yields `Other`.

use crate::model::organism::Organism;

/// One first-match-wins classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrganismRule {
    /// Lowercase needles; any one of them triggers the rule.
    pub needles: &'static [&'static str],
    pub organism: Organism,
}

/// Ordered classification table.
///
/// Order is the tie-break: a paper mentioning both mice and cells is `Mice`.
pub const ORGANISM_RULES: &[OrganismRule] = &[
    OrganismRule {
        needles: &["mice", "mouse"],
        organism: Organism::Mice,
    },
    OrganismRule {
        needles: &["rat"],
        organism: Organism::Rats,
    },
    OrganismRule {
        needles: &["human"],
        organism: Organism::Humans,
    },
    OrganismRule {
        needles: &["cell"],
        organism: Organism::CellCulture,
    },
    OrganismRule {
        needles: &["plant"],
        organism: Organism::Plants,
    },
    OrganismRule {
        needles: &["bacteria"],
        organism: Organism::Bacteria,
    },
    OrganismRule {
        needles: &["yeast"],
        organism: Organism::Yeast,
    },
    OrganismRule {
        needles: &["worm"],
        organism: Organism::Worms,
    },
    OrganismRule {
        needles: &["fly", "drosophila"],
        organism: Organism::FruitFlies,
    },
];

/// Derives the organism tag for one paper.
///
/// Keywords and title are joined with a space before matching, so a needle
/// never spans the boundary between the two fields.
pub fn derive_organism(keywords: &str, title: &str) -> Organism {
    let text = format!("{keywords} {title}").to_lowercase();
    ORGANISM_RULES
        .iter()
        .find(|rule| rule.needles.iter().any(|needle| text.contains(needle)))
        .map_or(Organism::Other, |rule| rule.organism)
}

#[cfg(test)]
mod tests {
    use super::{derive_organism, ORGANISM_RULES};
    use crate::model::organism::Organism;

    #[test]
    fn first_rule_wins_over_later_matches() {
        assert_eq!(derive_organism("mice, cell culture", "Study"), Organism::Mice);
    }

    #[test]
    fn substring_rules_match_inside_longer_words() {
        // "rat" is a plain substring rule, so "migration" is tagged Rats.
        assert_eq!(derive_organism("cell migration", ""), Organism::Rats);
        assert_eq!(derive_organism("", "Drosophila in orbit"), Organism::FruitFlies);
    }

    #[test]
    fn no_match_falls_back_to_other() {
        assert_eq!(derive_organism("", ""), Organism::Other);
        assert_eq!(derive_organism("microgravity", "Orbital physics"), Organism::Other);
    }

    #[test]
    fn rule_table_covers_every_tag_except_catch_all() {
        assert_eq!(ORGANISM_RULES.len(), Organism::ALL.len() - 1);
        assert!(ORGANISM_RULES
            .iter()
            .all(|rule| rule.organism != Organism::Other));
    }
}
