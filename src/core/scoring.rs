use crate::core::tags::token_set;
use crate::models::UserRecord;
use std::collections::HashSet;

/// Weights applied to skill and interest overlap.
///
/// Scoring formula:
/// score = trunc(skills_overlap * 60) + trunc(interests_overlap * 40)
/// where each overlap is |A ∩ B| / max(|A|, |B|) and the sum is capped
/// at 100.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skills: u32,
    pub interests: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 60,
            interests: 40,
        }
    }
}

/// A profile's tag collections normalized into token sets.
#[derive(Debug, Clone)]
pub struct TagSets {
    pub skills: HashSet<String>,
    pub interests: HashSet<String>,
}

impl TagSets {
    pub fn of(user: &UserRecord) -> Self {
        Self {
            skills: token_set(user.skills.as_deref().unwrap_or("")),
            interests: token_set(user.looking_for.as_deref().unwrap_or("")),
        }
    }
}

/// Weighted overlap of two normalized tag sets, truncated to an integer.
///
/// The denominator is the larger set's size, not the union size, and the
/// score is 0 whenever either side is empty.
#[inline]
pub fn overlap_score(a: &HashSet<String>, b: &HashSet<String>, weight: u32) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let overlap = a.intersection(b).count() as f64;
    let denominator = a.len().max(b.len()) as f64;

    ((overlap / denominator) * f64::from(weight)) as u8
}

/// Compatibility score (0-100) of a candidate against a subject.
pub fn score_candidate(subject: &TagSets, candidate: &TagSets, weights: &ScoringWeights) -> u8 {
    let skills_score = u32::from(overlap_score(&subject.skills, &candidate.skills, weights.skills));
    let interests_score = u32::from(overlap_score(
        &subject.interests,
        &candidate.interests,
        weights.interests,
    ));

    (skills_score + interests_score).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tags::Tags;
    use crate::models::UserRecord;

    fn set(items: &[&str]) -> HashSet<String> {
        Tags::List(items.iter().map(ToString::to_string).collect()).tokens()
    }

    fn user(skills: &str, looking_for: &str) -> UserRecord {
        UserRecord {
            skills: Some(skills.to_string()),
            looking_for: Some(looking_for.to_string()),
            ..UserRecord::default()
        }
    }

    #[test]
    fn test_overlap_score_empty_sides() {
        let full = set(&["rust", "sql"]);
        let empty = set(&[]);

        assert_eq!(overlap_score(&empty, &full, 60), 0);
        assert_eq!(overlap_score(&full, &empty, 60), 0);
        assert_eq!(overlap_score(&empty, &empty, 60), 0);
    }

    #[test]
    fn test_overlap_score_identical_sets() {
        let a = set(&["rust", "sql", "apis"]);
        assert_eq!(overlap_score(&a, &a, 60), 60);
        assert_eq!(overlap_score(&a, &a, 40), 40);
    }

    #[test]
    fn test_overlap_score_truncates() {
        // 2 of 3 shared, larger set has 3 entries: 2/3 * 60 = 40.
        let subject = set(&["Python", "APIs"]);
        let candidate = set(&["python", "apis", "Go"]);
        assert_eq!(overlap_score(&subject, &candidate, 60), 40);

        // 1 of 2 shared: 1/2 * 60 = 30.
        let half = set(&["python", "go"]);
        assert_eq!(overlap_score(&subject, &half, 60), 30);
    }

    #[test]
    fn test_larger_set_is_the_denominator() {
        // Same intersection, asymmetric sizes: the fraction shrinks as the
        // larger side grows regardless of which side it is.
        let small = set(&["rust"]);
        let large = set(&["rust", "sql", "apis", "go"]);

        assert_eq!(overlap_score(&small, &large, 60), 15);
        assert_eq!(overlap_score(&large, &small, 60), 15);
    }

    #[test]
    fn test_score_candidate_caps_at_100() {
        let subject = TagSets::of(&user("rust,sql", "design,gtm"));
        let twin = TagSets::of(&user("rust,sql", "design,gtm"));

        let score = score_candidate(&subject, &twin, &ScoringWeights::default());
        assert_eq!(score, 100);
    }

    #[test]
    fn test_score_candidate_skills_only() {
        let score = score_candidate(
            &TagSets::of(&user("rust,sql", "")),
            &TagSets::of(&user("Rust, SQL", "")),
            &ScoringWeights::default(),
        );
        assert_eq!(score, 60);
    }

    #[test]
    fn test_score_candidate_mismatched_tags() {
        let score = score_candidate(
            &TagSets::of(&user("rust", "design")),
            &TagSets::of(&user("python", "sales")),
            &ScoringWeights::default(),
        );
        assert_eq!(score, 0);
    }
}
