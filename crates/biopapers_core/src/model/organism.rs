//! Organism facet model.
//!
//! # Responsibility
//! - Define the closed set of study-subject tags a paper can carry.
//! - Map tags to and from their display labels.
//!
//! # Invariants
//! - Every paper carries exactly one tag; `Other` is the catch-all.
//! - Labels are the wire form used by serialization and filter input.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Label accepted by filter inputs to mean "no organism restriction".
pub const ALL_ORGANISMS_LABEL: &str = "All";

/// Primary study subject derived from a paper's keywords and title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Organism {
    Mice,
    Rats,
    Humans,
    #[serde(rename = "Cell Culture")]
    CellCulture,
    Plants,
    Bacteria,
    Yeast,
    Worms,
    #[serde(rename = "Fruit Flies")]
    FruitFlies,
    #[default]
    Other,
}

impl Organism {
    /// Every tag, in facet-rule order with the catch-all last.
    pub const ALL: [Organism; 10] = [
        Organism::Mice,
        Organism::Rats,
        Organism::Humans,
        Organism::CellCulture,
        Organism::Plants,
        Organism::Bacteria,
        Organism::Yeast,
        Organism::Worms,
        Organism::FruitFlies,
        Organism::Other,
    ];

    /// Human-readable label, also used as the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mice => "Mice",
            Self::Rats => "Rats",
            Self::Humans => "Humans",
            Self::CellCulture => "Cell Culture",
            Self::Plants => "Plants",
            Self::Bacteria => "Bacteria",
            Self::Yeast => "Yeast",
            Self::Worms => "Worms",
            Self::FruitFlies => "Fruit Flies",
            Self::Other => "Other",
        }
    }
}

impl Display for Organism {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Label did not name any known organism tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrganism(pub String);

impl Display for UnknownOrganism {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown organism `{}`", self.0)
    }
}

impl Error for UnknownOrganism {}

impl FromStr for Organism {
    type Err = UnknownOrganism;

    /// Parses a display label, ignoring case and surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|organism| organism.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownOrganism(trimmed.to_string()))
    }
}

/// Parses organism filter input.
///
/// Blank input and the `All` sentinel mean "no restriction" and yield `None`.
pub fn parse_organism_filter(value: &str) -> Result<Option<Organism>, UnknownOrganism> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_ORGANISMS_LABEL) {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::{parse_organism_filter, Organism};

    #[test]
    fn labels_round_trip_through_from_str() {
        for organism in Organism::ALL {
            assert_eq!(organism.label().parse::<Organism>(), Ok(organism));
        }
    }

    #[test]
    fn filter_sentinel_means_no_restriction() {
        assert_eq!(parse_organism_filter("All"), Ok(None));
        assert_eq!(parse_organism_filter("  "), Ok(None));
        assert_eq!(
            parse_organism_filter("fruit flies"),
            Ok(Some(Organism::FruitFlies))
        );
        assert!(parse_organism_filter("Tardigrades").is_err());
    }
}
