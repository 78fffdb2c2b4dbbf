use biopapers_core::{matching_topic, respond, ChatSession, Organism, PaperRecord, Topic};

fn paper(id: u32, title: &str, authors: &str, keywords: &str, year: i32) -> PaperRecord {
    PaperRecord {
        id,
        title: title.to_string(),
        authors: authors.to_string(),
        keywords: keywords.to_string(),
        year,
        summary: format!("Summary of {title}."),
        organism: Organism::Other,
        ..PaperRecord::default()
    }
}

fn library() -> Vec<PaperRecord> {
    vec![
        paper(1, "Bone density in orbit", "Smith J, Doe A, Roe B", "microgravity, bone", 2016),
        paper(2, "Spaceflight cardiology", "Garcia M", "cardiovascular", 2020),
        paper(3, "Seedlings on the ISS", "Smith J, Lee K", "Microgravity, seedlings", 2022),
        paper(4, "Neural effects of cosmic rays", "Ito H", "cosmic rays", 2023),
        paper(5, "Undated archive entry", "", "microgravity", 0),
        paper(6, "Long-term cardiovascular monitoring", "Ngata T", "cardiovascular", 2021),
    ]
}

#[test]
fn microgravity_answer_counts_and_previews_three_papers() {
    let papers = library();
    let answer = respond("Tell me about MICROGRAVITY", &papers);

    assert!(answer.starts_with("I found 3 studies related to microgravity:"));
    assert!(answer.contains("• \"Bone density in orbit\" (2016) - Summary of Bone density in orbit...."));
    assert!(answer.contains("\"Seedlings on the ISS\" (2022)"));
    assert!(answer.contains("\"Undated archive entry\" (0)"));
    assert_eq!(answer.matches('•').count(), 3);
    assert!(answer.ends_with("and cellular adaptations."));
}

#[test]
fn earlier_rule_shadows_later_overlapping_rule() {
    let papers = library();
    assert_eq!(
        matching_topic("latest microgravity papers", &papers),
        Some(Topic::Microgravity)
    );
    assert_eq!(matching_topic("latest papers", &papers), Some(Topic::Recency));
}

#[test]
fn declining_rule_lets_later_rules_answer() {
    let papers = vec![paper(1, "Spaceflight cardiology", "Garcia M", "cardiovascular", 2020)];
    assert_eq!(
        matching_topic("weightless muscle", &papers),
        Some(Topic::Muscle)
    );
    assert!(respond("weightless muscle", &papers).starts_with("Muscle atrophy in space"));
}

#[test]
fn canned_topics_answer_regardless_of_data() {
    assert!(respond("plant growth?", &[]).starts_with("Plant growth in space"));
    assert!(respond("radiation risk", &[]).starts_with("Space radiation is"));
    assert!(respond("HELLO there", &[]).starts_with("Hello! I'm here to help"));
    assert!(respond("Can you help?", &[]).starts_with("I can help you with:"));
}

#[test]
fn researcher_answer_lists_first_two_authors_per_paper() {
    let papers = library();
    let answer = respond("who are the authors", &papers);
    assert!(answer.starts_with("Our database includes work from 6+ researchers."));
    assert!(answer.contains("Smith J, Doe A, Garcia M, Lee K, Ito H, and many others"));
    assert!(!answer.contains("Roe B"));
}

#[test]
fn recency_answer_reports_span_and_window() {
    let papers = library();
    let answer = respond("What's recent?", &papers);
    assert_eq!(
        answer,
        "Our database includes research from 2016 to 2023. Recent publications (2021-2023) focus on: \"Seedlings on the ISS\", \"Neural effects of cosmic rays\", \"Long-term cardiovascular monitoring\"."
    );
}

#[test]
fn fallback_summarizes_top_search_hit() {
    let papers = library();
    let answer = respond("cardiovascular", &papers);
    assert_eq!(matching_topic("cardiovascular", &papers), None);
    assert!(answer.starts_with("I found 2 relevant papers:\n\n\"Spaceflight cardiology\" (2020)"));
    assert!(answer.ends_with("There are 1 more related papers in our database."));

    let single = respond("seedlings", &papers);
    assert!(single.starts_with("I found 1 relevant paper:"));
    assert!(single.ends_with("Summary of Seedlings on the ISS."));
}

#[test]
fn unmatched_query_reports_collection_size() {
    let papers = library();
    let answer = respond("tardigrades", &papers);
    assert!(answer.starts_with("I found 6 research papers in our database"));
}

#[test]
fn empty_collection_never_leaks_sentinels() {
    let answer = respond("which year is covered", &[]);
    assert!(!answer.contains("inf"));
    assert!(answer.contains("does not contain any dated publications"));

    let researchers = respond("top researchers", &[]);
    assert!(researchers.contains("does not list any researchers"));
}

#[test]
fn session_transcript_uses_rule_answers() {
    let papers = library();
    let mut session = ChatSession::new();
    let reply = session
        .ask("radiation", &papers)
        .expect("non-blank input is answered")
        .content
        .clone();
    assert!(reply.starts_with("Space radiation"));
    assert_eq!(session.messages().len(), 3);
}

#[test]
fn blank_question_gets_collection_overview() {
    let papers = library();
    for question in ["", "   ", "\t\n"] {
        let answer = respond(question, &papers);
        assert!(answer.starts_with("I found 6 research papers in our database"));
        assert!(!answer.contains("relevant"));
    }
    assert_eq!(matching_topic("   ", &papers), None);
}
