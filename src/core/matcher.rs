use crate::core::scoring::{score_candidate, ScoringWeights, TagSets};
use crate::models::{MatchSuggestion, UserRecord};

/// Result of one ranking pass.
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<MatchSuggestion>,
    pub total_candidates: usize,
}

impl MatchOutcome {
    pub fn empty() -> Self {
        Self {
            matches: Vec::new(),
            total_candidates: 0,
        }
    }
}

/// Read access to stored profiles, injected into the matching entry point.
#[allow(async_fn_in_trait)]
pub trait ProfileStore {
    type Error;

    async fn get_profile(&self, user_id: i32) -> Result<Option<UserRecord>, Self::Error>;

    /// All profiles except the given one, in stable iteration order.
    async fn list_profiles(&self, exclude_id: i32) -> Result<Vec<UserRecord>, Self::Error>;
}

/// Ranks a candidate pool against a subject by weighted tag overlap.
///
/// Pure over its inputs: no side effects, no mutation of either profile.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    default_limit: u16,
    max_limit: u16,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, default_limit: u16, max_limit: u16) -> Self {
        Self {
            weights,
            default_limit,
            max_limit,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default(), 10, 100)
    }

    /// Resolve a requested limit against the configured default and cap.
    pub fn clamp_limit(&self, requested: Option<u16>) -> usize {
        usize::from(requested.unwrap_or(self.default_limit).min(self.max_limit))
    }

    /// Rank `candidates` against `subject` and keep the top `limit`.
    ///
    /// Candidates sharing the subject's id are skipped, zero scores are
    /// discarded, and equal scores keep pool iteration order (the sort is
    /// stable).
    pub fn find_matches(
        &self,
        subject: &UserRecord,
        candidates: Vec<UserRecord>,
        limit: usize,
    ) -> MatchOutcome {
        let total_candidates = candidates.len();
        let subject_tags = TagSets::of(subject);

        let mut scored: Vec<(u8, UserRecord)> = candidates
            .into_iter()
            .filter(|candidate| candidate.id != subject.id)
            .filter_map(|candidate| {
                let score = score_candidate(&subject_tags, &TagSets::of(&candidate), &self.weights);
                (score > 0).then_some((score, candidate))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(limit);

        MatchOutcome {
            matches: scored
                .into_iter()
                .map(|(score, user)| MatchSuggestion::new(user, score))
                .collect(),
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Request-level entry point: resolve the subject, gather the pool, rank.
///
/// An unknown subject yields an empty outcome rather than an error.
pub async fn find_matches_for<S: ProfileStore>(
    store: &S,
    matcher: &Matcher,
    user_id: i32,
    limit: usize,
) -> Result<MatchOutcome, S::Error> {
    let Some(subject) = store.get_profile(user_id).await? else {
        return Ok(MatchOutcome::empty());
    };

    let candidates = store.list_profiles(user_id).await?;
    Ok(matcher.find_matches(&subject, candidates, limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: i32, skills: &str, looking_for: &str) -> UserRecord {
        UserRecord {
            id,
            name: format!("User {}", id),
            skills: Some(skills.to_string()),
            looking_for: Some(looking_for.to_string()),
            ..UserRecord::default()
        }
    }

    #[test]
    fn test_find_matches_basic() {
        let matcher = Matcher::with_defaults();
        let subject = candidate(1, "Python,APIs", "");

        let candidates = vec![
            candidate(2, "python,apis,Go", ""), // 2/3 overlap
            candidate(3, "", ""),               // nothing shared
        ];

        let result = matcher.find_matches(&subject, candidates, 10);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].user_id, 2);
        assert_eq!(result.matches[0].match_score, 40);
        assert_eq!(result.total_candidates, 2);
    }

    #[test]
    fn test_subject_excluded_from_pool() {
        let matcher = Matcher::with_defaults();
        let subject = candidate(1, "rust", "");

        let candidates = vec![candidate(1, "rust", ""), candidate(2, "rust", "")];

        let result = matcher.find_matches(&subject, candidates, 10);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].user_id, 2);
    }

    #[test]
    fn test_matches_sorted_by_score_descending() {
        let matcher = Matcher::with_defaults();
        let subject = candidate(1, "rust,sql,apis", "design");

        let candidates = vec![
            candidate(2, "rust", ""),
            candidate(3, "rust,sql,apis", "design"),
            candidate(4, "rust,sql", ""),
        ];

        let result = matcher.find_matches(&subject, candidates, 10);

        assert_eq!(result.matches.len(), 3);
        for pair in result.matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        assert_eq!(result.matches[0].user_id, 3);
        assert_eq!(result.matches[0].match_score, 100);
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let matcher = Matcher::with_defaults();
        let subject = candidate(1, "rust", "");

        let candidates = vec![
            candidate(5, "rust", ""),
            candidate(2, "rust", ""),
            candidate(9, "rust", ""),
        ];

        let result = matcher.find_matches(&subject, candidates, 10);

        let ids: Vec<i32> = result.matches.iter().map(|m| m.user_id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_defaults();
        let subject = candidate(1, "rust", "");

        let candidates: Vec<UserRecord> =
            (2..22).map(|id| candidate(id, "rust", "")).collect();

        let result = matcher.find_matches(&subject, candidates, 5);
        assert_eq!(result.matches.len(), 5);

        let result = matcher.find_matches(
            &subject,
            (2..5).map(|id| candidate(id, "rust", "")).collect(),
            0,
        );
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_empty_subject_tags_match_nothing() {
        let matcher = Matcher::with_defaults();
        let subject = candidate(1, "", "");

        let candidates = vec![candidate(2, "rust,sql", "design"), candidate(3, "rust", "")];

        let result = matcher.find_matches(&subject, candidates, 10);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_clamp_limit() {
        let matcher = Matcher::new(ScoringWeights::default(), 10, 100);

        assert_eq!(matcher.clamp_limit(None), 10);
        assert_eq!(matcher.clamp_limit(Some(0)), 0);
        assert_eq!(matcher.clamp_limit(Some(25)), 25);
        assert_eq!(matcher.clamp_limit(Some(500)), 100);
    }
}
