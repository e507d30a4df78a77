//! LaunchCircle API - marketplace backend for the LaunchCircle
//! founder/talent network.
//!
//! This library provides profile, job post, and application CRUD services
//! together with the tag-overlap matching engine used to suggest candidate
//! cofounders and hires.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{find_matches_for, MatchOutcome, Matcher, ProfileStore, ScoringWeights, Tags};
pub use self::models::{MatchSuggestion, Role, UserRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let tags = Tags::Joined("Python, APIs".to_string());
        assert!(tags.tokens().contains("python"));
        assert_eq!(Matcher::with_defaults().clamp_limit(None), 10);
    }
}
