// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod tags;

pub use matcher::{find_matches_for, MatchOutcome, Matcher, ProfileStore};
pub use scoring::{overlap_score, score_candidate, ScoringWeights, TagSets};
pub use tags::{join_csv, split_csv, token_set, Tags};
