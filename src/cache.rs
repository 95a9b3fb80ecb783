use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::Suggestion;

pub const DEFAULT_TTL_SECS: u64 = 300;

struct CacheEntry {
    suggestions: Vec<Suggestion>,
    created_at: Instant,
}

pub struct SuggestionCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl SuggestionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, viewer: &str) -> Option<Vec<Suggestion>> {
        let guard = self.entries.read().await;
        let entry = guard.get(viewer)?;
        if entry.created_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.suggestions.clone())
    }

    pub async fn put(&self, viewer: &str, suggestions: Vec<Suggestion>) {
        let mut guard = self.entries.write().await;
        guard.retain(|_, entry| entry.created_at.elapsed() < self.ttl);
        guard.insert(
            viewer.to_string(),
            CacheEntry {
                suggestions,
                created_at: Instant::now(),
            },
        );
    }

    pub async fn remove(&self, viewer: &str) {
        let mut guard = self.entries.write().await;
        guard.remove(viewer);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TTL_SECS))
    }
}
