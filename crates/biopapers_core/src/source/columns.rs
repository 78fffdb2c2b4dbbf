//! Named-column mapping from sheet rows to paper records.
//!
//! # Responsibility
//! - Resolve header names (with aliases) to column positions once per table.
//! - Build one `PaperRecord` per non-blank row, deriving facets on the way.
//!
//! # Invariants
//! - Missing columns and short rows yield empty strings, never errors.
//! - Unparseable years yield `UNKNOWN_YEAR`.
//! - Ids are contiguous from 1 in row order over non-blank rows.

use super::SheetTable;
use crate::facet::organism::derive_organism;
use crate::model::paper::{PaperId, PaperRecord, UNKNOWN_YEAR};
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid year regex"));

/// Semantic paper field backed by one or more sheet columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperColumn {
    Title,
    Authors,
    Year,
    Keywords,
    Abstract,
    ResearchFocus,
    Limitations,
    Summary,
}

/// Header spellings per field, in lookup priority order.
///
/// Headers are compared after trimming, ignoring ASCII case.
pub const COLUMN_ALIASES: &[(PaperColumn, &[&str])] = &[
    (PaperColumn::Title, &["TITLE"]),
    (PaperColumn::Authors, &["AUTHORS"]),
    (PaperColumn::Year, &["YEAR", "PUBLICATION YEAR"]),
    (PaperColumn::Keywords, &["KEYWORDS"]),
    (PaperColumn::Abstract, &["ABSTRACT"]),
    (PaperColumn::ResearchFocus, &["RESEARCH FOCUS"]),
    (PaperColumn::Limitations, &["LIMITATIONS"]),
    // The source workbook ships with the misspelled header.
    (PaperColumn::Summary, &["SUMARY", "SUMMARY"]),
];

/// Column positions per field, resolved from one header row.
struct ColumnMap {
    positions: Vec<(PaperColumn, Vec<usize>)>,
}

impl ColumnMap {
    fn resolve(headers: &[String]) -> Self {
        let positions = COLUMN_ALIASES
            .iter()
            .map(|(column, aliases)| {
                let indexes = aliases
                    .iter()
                    .filter_map(|alias| {
                        headers
                            .iter()
                            .position(|header| header.trim().eq_ignore_ascii_case(alias))
                    })
                    .collect::<Vec<_>>();
                (*column, indexes)
            })
            .collect();
        Self { positions }
    }

    /// First non-empty aliased cell for `column`, or `""`.
    fn cell<'row>(&self, row: &'row [String], column: PaperColumn) -> &'row str {
        self.positions
            .iter()
            .find(|(candidate, _)| *candidate == column)
            .into_iter()
            .flat_map(|(_, indexes)| indexes.iter())
            .filter_map(|index| row.get(*index))
            .map(String::as_str)
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }
}

/// Maps every non-blank table row onto a paper record.
pub fn records_from_table(table: &SheetTable) -> Vec<PaperRecord> {
    let columns = ColumnMap::resolve(&table.headers);
    table
        .rows
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .zip(1..)
        .map(|(row, id)| build_record(&columns, row, id))
        .collect()
}

fn build_record(columns: &ColumnMap, row: &[String], id: PaperId) -> PaperRecord {
    let text = |column| columns.cell(row, column).to_string();
    let title = text(PaperColumn::Title);
    let keywords = text(PaperColumn::Keywords);
    let organism = derive_organism(&keywords, &title);

    PaperRecord {
        id,
        title,
        authors: text(PaperColumn::Authors),
        year: parse_year(columns.cell(row, PaperColumn::Year)),
        keywords,
        abstract_text: text(PaperColumn::Abstract),
        research_focus: text(PaperColumn::ResearchFocus),
        limitations: text(PaperColumn::Limitations),
        summary: text(PaperColumn::Summary),
        organism,
    }
}

/// Parses the integer prefix of a year cell.
///
/// Leading whitespace and an optional sign are accepted, then the leading run
/// of digits; anything else (including overflow) is `UNKNOWN_YEAR`.
pub fn parse_year(raw: &str) -> i32 {
    YEAR_PREFIX_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<i32>().ok())
        .unwrap_or(UNKNOWN_YEAR)
}

#[cfg(test)]
mod tests {
    use super::{parse_year, records_from_table};
    use crate::model::organism::Organism;
    use crate::source::SheetTable;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_year_uses_integer_prefix() {
        assert_eq!(parse_year("2019"), 2019);
        assert_eq!(parse_year(" 2021.0"), 2021);
        assert_eq!(parse_year("2018 (online)"), 2018);
        assert_eq!(parse_year("n/a"), 0);
        assert_eq!(parse_year(""), 0);
        assert_eq!(parse_year("99999999999"), 0);
    }

    #[test]
    fn summary_alias_prefers_first_non_empty_spelling() {
        let table = SheetTable::new(
            strings(&["TITLE", "SUMMARY", "SUMARY"]),
            vec![
                strings(&["A", "from summary", "from sumary"]),
                strings(&["B", "from summary", ""]),
            ],
        );
        let records = records_from_table(&table);
        assert_eq!(records[0].summary, "from sumary");
        assert_eq!(records[1].summary, "from summary");
    }

    #[test]
    fn headers_match_case_insensitively_and_short_rows_default() {
        let table = SheetTable::new(
            strings(&[" title ", "Keywords", "year"]),
            vec![strings(&["Mouse bone study"])],
        );
        let records = records_from_table(&table);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Mouse bone study");
        assert_eq!(records[0].keywords, "");
        assert_eq!(records[0].year, 0);
        assert_eq!(records[0].organism, Organism::Mice);
    }

    #[test]
    fn blank_rows_are_skipped_without_consuming_ids() {
        let table = SheetTable::new(
            strings(&["TITLE"]),
            vec![strings(&["first"]), strings(&["", " "]), strings(&["second"])],
        );
        let ids = records_from_table(&table)
            .into_iter()
            .map(|record| record.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2]);
    }
}
