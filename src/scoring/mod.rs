pub mod engine;
pub mod filter;
pub mod signals;

pub use engine::RankingEngine;
pub use filter::{CandidateFilter, FilterConfig};
pub use signals::{
    activity_level, content_similarity, engagement_overlap, mutual_connections, shared_interests,
    SignalWeights,
};
