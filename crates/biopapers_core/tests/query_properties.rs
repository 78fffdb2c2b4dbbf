use biopapers_core::{
    filter_papers, search_papers, unique_years, Organism, PaperFilter, PaperRecord,
};
use proptest::prelude::*;

fn organism_strategy() -> impl Strategy<Value = Organism> {
    prop::sample::select(Organism::ALL.to_vec())
}

fn paper_strategy() -> impl Strategy<Value = PaperRecord> {
    (
        "[a-zA-Z ]{0,24}",
        "[a-z]{0,8}(, [a-z]{0,8}){0,3}",
        0i32..2030,
        organism_strategy(),
    )
        .prop_map(|(title, keywords, year, organism)| PaperRecord {
            title,
            keywords,
            year,
            organism,
            ..PaperRecord::default()
        })
}

fn papers_strategy() -> impl Strategy<Value = Vec<PaperRecord>> {
    prop::collection::vec(paper_strategy(), 0..24).prop_map(|mut papers| {
        for (index, paper) in papers.iter_mut().enumerate() {
            paper.id = index as u32 + 1;
        }
        papers
    })
}

fn ids(papers: &[&PaperRecord]) -> Vec<u32> {
    papers.iter().map(|paper| paper.id).collect()
}

proptest! {
    #[test]
    fn search_returns_subsequence(papers in papers_strategy(), query in "[a-zA-Z ]{0,4}") {
        let hit_ids = ids(&search_papers(&papers, &query));
        let mut cursor = papers.iter().map(|paper| paper.id);
        for id in hit_ids {
            prop_assert!(cursor.any(|candidate| candidate == id));
        }
    }

    #[test]
    fn filter_predicates_commute(
        papers in papers_strategy(),
        organism in prop::option::of(organism_strategy()),
        year in prop::option::of(2000i32..2030),
        keyword in prop::option::of("[a-z]{1,2}"),
    ) {
        let combined = PaperFilter { organism, year, keyword: keyword.clone() };
        let only_organism = PaperFilter { organism, ..PaperFilter::default() };
        let only_year = PaperFilter { year, ..PaperFilter::default() };
        let only_keyword = PaperFilter { keyword, ..PaperFilter::default() };

        let forward = filter_papers(
            filter_papers(filter_papers(&papers, &only_organism), &only_year),
            &only_keyword,
        );
        let backward = filter_papers(
            filter_papers(filter_papers(&papers, &only_keyword), &only_year),
            &only_organism,
        );
        let together = filter_papers(&papers, &combined);

        prop_assert_eq!(ids(&forward), ids(&together));
        prop_assert_eq!(ids(&backward), ids(&together));
    }

    #[test]
    fn unique_years_strictly_descending_and_known(papers in papers_strategy()) {
        let years = unique_years(&papers);
        prop_assert!(years.iter().all(|year| *year > 0));
        prop_assert!(years.windows(2).all(|pair| pair[0] > pair[1]));
    }
}
