pub mod cache;
pub mod config;
pub mod reputation;
pub mod scoring;
pub mod snapshot;
pub mod synthetic;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

pub use snapshot::Snapshot;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

const MAX_KEYWORDS: usize = 20;
const MIN_KEYWORD_LEN: usize = 4;
const STOP_WORDS: [&str; 14] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub address: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowEdge {
    pub follower: String,
    pub following: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub content: String,
    pub timestamp: i64,
    #[serde(default)]
    pub likes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalBreakdown {
    pub mutual: f64,
    pub shared_interests: f64,
    pub engagement: f64,
    pub content: f64,
    pub activity: f64,
    pub reputation_bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub address: String,
    pub display_name: String,
    pub bio: String,
    pub score: f64,
    pub mutual_follower_count: usize,
    pub post_count: usize,
    pub signals: SignalBreakdown,
}

pub fn normalize_identity(address: &str) -> String {
    address.trim().to_lowercase()
}

pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '#' || ch.is_whitespace() {
                ch
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN)
        .filter(|token| !STOP_WORDS.contains(token))
        .take(MAX_KEYWORDS)
        .map(|token| token.to_string())
        .collect()
}

pub fn outbound_map(edges: &[FollowEdge]) -> HashMap<String, HashSet<String>> {
    let mut map: HashMap<String, HashSet<String>> = HashMap::new();
    for edge in edges {
        map.entry(normalize_identity(&edge.follower))
            .or_default()
            .insert(normalize_identity(&edge.following));
    }
    map
}

pub fn inbound_map(edges: &[FollowEdge]) -> HashMap<String, HashSet<String>> {
    let mut map: HashMap<String, HashSet<String>> = HashMap::new();
    for edge in edges {
        map.entry(normalize_identity(&edge.following))
            .or_default()
            .insert(normalize_identity(&edge.follower));
    }
    map
}

pub fn mutual_followers(a: &str, b: &str, edges: &[FollowEdge]) -> Vec<String> {
    let inbound = inbound_map(edges);
    let empty = HashSet::new();
    let followers_a = inbound.get(&normalize_identity(a)).unwrap_or(&empty);
    let followers_b = inbound.get(&normalize_identity(b)).unwrap_or(&empty);

    let mut shared: Vec<String> = followers_a.intersection(followers_b).cloned().collect();
    shared.sort();
    shared
}

pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0).min(1.0)
}

pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or(0)
}

pub fn format_score(value: f64) -> String {
    format!("{:.3}", value)
}
