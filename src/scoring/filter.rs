use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{Post, UserRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub burst_window_secs: i64,
    pub burst_max_posts: usize,
    pub min_unique_content_ratio: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            burst_window_secs: 3600,
            burst_max_posts: 20,
            min_unique_content_ratio: 0.5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    config: FilterConfig,
}

impl CandidateFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn accepts(&self, user: &UserRecord, posts: &[&Post], now: i64) -> bool {
        if user.display_name.trim().is_empty() {
            return false;
        }

        if self.burst_posting(posts, now) {
            return false;
        }

        if !posts.is_empty() && self.duplicate_ratio(posts) {
            return false;
        }

        if user.bio.trim().is_empty() && posts.is_empty() {
            return false;
        }

        true
    }

    fn burst_posting(&self, posts: &[&Post], now: i64) -> bool {
        let cutoff = now - self.config.burst_window_secs;
        let recent = posts.iter().filter(|post| post.timestamp >= cutoff).count();
        recent > self.config.burst_max_posts
    }

    fn duplicate_ratio(&self, posts: &[&Post]) -> bool {
        let unique: HashSet<&str> = posts.iter().map(|post| post.content.as_str()).collect();
        let ratio = unique.len() as f64 / posts.len() as f64;
        ratio < self.config.min_unique_content_ratio
    }
}
