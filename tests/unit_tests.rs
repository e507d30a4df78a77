// Unit tests for the LaunchCircle matching core

use launchcircle_api::core::{
    overlap_score, score_candidate, scoring::TagSets, tags::split_csv, Matcher, ScoringWeights,
    Tags,
};
use launchcircle_api::models::UserRecord;

fn profile(id: i32, skills: &str, looking_for: &str) -> UserRecord {
    UserRecord {
        id,
        name: format!("User {}", id),
        skills: Some(skills.to_string()),
        looking_for: Some(looking_for.to_string()),
        ..UserRecord::default()
    }
}

#[test]
fn test_string_and_list_tags_score_identically() {
    let joined = Tags::Joined("Python, APIs".to_string());
    let split = Tags::List(vec!["Python".to_string(), "APIs".to_string()]);

    assert_eq!(joined.tokens(), split.tokens());
    assert_eq!(joined.join(), "Python,APIs");
    assert_eq!(split.join(), "Python,APIs");
}

#[test]
fn test_split_csv_handles_messy_input() {
    assert_eq!(split_csv("  Rust ,, sql,  "), vec!["Rust", "sql"]);
    assert!(split_csv("").is_empty());
}

#[test]
fn test_overlap_scenario_from_product_docs() {
    // Subject: {Python, APIs}. Candidate: {python, apis, Go}.
    // Overlap 2 of max(2, 3) = 2/3, so skills score is trunc(2/3 * 60) = 40.
    let subject = profile(1, "Python,APIs", "");
    let candidate = profile(2, "python,apis,Go", "");

    let score = score_candidate(
        &TagSets::of(&subject),
        &TagSets::of(&candidate),
        &ScoringWeights::default(),
    );
    assert_eq!(score, 40);
}

#[test]
fn test_empty_candidate_scores_zero() {
    let subject = profile(1, "Python,APIs", "");
    let candidate = profile(2, "", "");

    let score = score_candidate(
        &TagSets::of(&subject),
        &TagSets::of(&candidate),
        &ScoringWeights::default(),
    );
    assert_eq!(score, 0);
}

#[test]
fn test_identical_skills_score_sixty() {
    let subject = profile(1, "rust,sql", "");
    let candidate = profile(2, "rust,sql", "");

    let score = score_candidate(
        &TagSets::of(&subject),
        &TagSets::of(&candidate),
        &ScoringWeights::default(),
    );
    assert_eq!(score, 60);
}

#[test]
fn test_full_overlap_scores_one_hundred() {
    let subject = profile(1, "rust,sql", "design,gtm");
    let candidate = profile(2, "SQL, Rust", "GTM, Design");

    let score = score_candidate(
        &TagSets::of(&subject),
        &TagSets::of(&candidate),
        &ScoringWeights::default(),
    );
    assert_eq!(score, 100);
}

#[test]
fn test_overlap_score_denominator_is_larger_set() {
    let a = Tags::Joined("rust".to_string()).tokens();
    let b = Tags::Joined("rust,sql,go,apis".to_string()).tokens();

    // 1 of max(1, 4): trunc(1/4 * 60) = 15, regardless of argument order.
    assert_eq!(overlap_score(&a, &b, 60), 15);
    assert_eq!(overlap_score(&b, &a, 60), 15);
}

#[test]
fn test_duplicates_and_casing_do_not_change_scores() {
    let subject = profile(1, "rust,RUST, Rust ", "");
    let candidate = profile(2, "rust", "");

    let score = score_candidate(
        &TagSets::of(&subject),
        &TagSets::of(&candidate),
        &ScoringWeights::default(),
    );
    assert_eq!(score, 60);
}

#[test]
fn test_scores_stay_in_bounds() {
    let matcher = Matcher::with_defaults();
    let subject = profile(1, "rust,sql,go", "design,gtm,sales");

    let candidates = vec![
        profile(2, "rust", "design"),
        profile(3, "rust,sql,go", "design,gtm,sales"),
        profile(4, "python", ""),
        profile(5, "go,sql", "sales"),
    ];

    let result = matcher.find_matches(&subject, candidates, 10);

    for suggestion in &result.matches {
        assert!(suggestion.match_score <= 100);
        assert!(suggestion.match_score > 0);
    }
}

#[test]
fn test_empty_subject_yields_no_matches() {
    let matcher = Matcher::with_defaults();
    let subject = profile(1, "", "");

    let candidates = vec![profile(2, "rust", "design"), profile(3, "sql", "gtm")];

    let result = matcher.find_matches(&subject, candidates, 10);
    assert!(result.matches.is_empty());
}

#[test]
fn test_match_suggestions_carry_candidate_tags() {
    let matcher = Matcher::with_defaults();
    let subject = profile(1, "rust", "");
    let candidates = vec![profile(2, "Rust, SQL", "Design systems")];

    let result = matcher.find_matches(&subject, candidates, 10);

    assert_eq!(result.matches.len(), 1);
    let suggestion = &result.matches[0];
    assert_eq!(suggestion.skills, vec!["Rust", "SQL"]);
    assert_eq!(suggestion.looking_for, vec!["Design systems"]);
}
