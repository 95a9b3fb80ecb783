use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{clamp01, extract_keywords, jaccard, normalize_identity, Post};

const MUTUAL_SATURATION: f64 = 10.0;
const ACTIVITY_SATURATION: f64 = 20.0;
const ACTIVITY_WINDOW_SECS: i64 = 30 * 24 * 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalWeights {
    pub mutual: f64,
    pub shared_interests: f64,
    pub engagement: f64,
    pub content: f64,
    pub activity: f64,
    pub reputation: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            mutual: 0.25,
            shared_interests: 0.30,
            engagement: 0.20,
            content: 0.15,
            activity: 0.10,
            reputation: 0.10,
        }
    }
}

impl SignalWeights {
    pub fn composite(&self, signals: &crate::SignalBreakdown) -> f64 {
        let base = self.mutual * signals.mutual
            + self.shared_interests * signals.shared_interests
            + self.engagement * signals.engagement
            + self.content * signals.content
            + self.activity * signals.activity;
        clamp01(base + self.reputation * signals.reputation_bonus)
    }
}

pub fn mutual_connections(
    viewer_follows: &HashSet<String>,
    candidate_follows: &HashSet<String>,
) -> f64 {
    let mutual = viewer_follows.intersection(candidate_follows).count();
    (mutual as f64 / MUTUAL_SATURATION).min(1.0)
}

pub fn shared_interests(viewer_bio: &str, candidate_bio: &str) -> f64 {
    if viewer_bio.trim().is_empty() || candidate_bio.trim().is_empty() {
        return 0.0;
    }
    let viewer_keywords: HashSet<String> = extract_keywords(viewer_bio).into_iter().collect();
    let candidate_keywords: HashSet<String> = extract_keywords(candidate_bio).into_iter().collect();
    jaccard(&viewer_keywords, &candidate_keywords)
}

pub fn engagement_overlap(viewer: &str, candidate: &str, posts: &[Post]) -> f64 {
    let viewer_likes = liked_post_ids(viewer, posts);
    let candidate_likes = liked_post_ids(candidate, posts);

    let denominator = viewer_likes.len().max(candidate_likes.len());
    if denominator == 0 {
        return 0.0;
    }
    let overlap = viewer_likes.intersection(&candidate_likes).count();
    overlap as f64 / denominator as f64
}

pub fn content_similarity(viewer_posts: &[&Post], candidate_posts: &[&Post]) -> f64 {
    if viewer_posts.is_empty() || candidate_posts.is_empty() {
        return 0.0;
    }
    jaccard(
        &post_keywords(viewer_posts),
        &post_keywords(candidate_posts),
    )
}

pub fn activity_level(candidate_posts: &[&Post], now: i64) -> f64 {
    let cutoff = now - ACTIVITY_WINDOW_SECS;
    let recent = candidate_posts
        .iter()
        .filter(|post| post.timestamp >= cutoff)
        .count();
    (recent as f64 / ACTIVITY_SATURATION).min(1.0)
}

fn liked_post_ids(identity: &str, posts: &[Post]) -> HashSet<String> {
    let identity = normalize_identity(identity);
    let mut liked = HashSet::new();
    for post in posts {
        if post
            .likes
            .iter()
            .any(|liker| normalize_identity(liker) == identity)
        {
            liked.insert(post.id.clone());
        }
    }
    liked
}

fn post_keywords(posts: &[&Post]) -> HashSet<String> {
    let mut keywords = HashSet::new();
    for post in posts {
        keywords.extend(extract_keywords(&post.content));
    }
    keywords
}
