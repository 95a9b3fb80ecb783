use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::cache::SuggestionCache;
use crate::config::EngineConfig;
use crate::reputation::{reputation_bonus, ReputationProbe};
use crate::scoring::{
    activity_level, content_similarity, engagement_overlap, mutual_connections, shared_interests,
    CandidateFilter, SignalWeights,
};
use crate::{
    current_timestamp, normalize_identity, Post, SignalBreakdown, Snapshot, Suggestion,
    DEFAULT_SUGGESTION_LIMIT,
};

pub struct RankingEngine {
    weights: SignalWeights,
    filter: CandidateFilter,
    cache: SuggestionCache,
    config: EngineConfig,
    probe: Option<Arc<dyn ReputationProbe>>,
}

impl RankingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            weights: config.weights.clone(),
            filter: CandidateFilter::new(config.filter.clone()),
            cache: SuggestionCache::new(config.cache.ttl()),
            probe: None,
            config,
        }
    }

    pub fn with_probe(mut self, probe: Arc<dyn ReputationProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    pub async fn rank(&self, viewer: &str, snapshot: &Snapshot, limit: usize) -> Vec<Suggestion> {
        let viewer = normalize_identity(viewer);
        if viewer.is_empty() {
            return Vec::new();
        }

        if let Some(cached) = self.cache.get(&viewer).await {
            return truncated(cached, limit);
        }

        let now = current_timestamp();
        let outbound = crate::outbound_map(&snapshot.edges);
        let inbound = crate::inbound_map(&snapshot.edges);
        let posts_by_author = group_posts_by_author(&snapshot.posts);

        let empty = HashSet::new();
        let viewer_follows = outbound.get(&viewer).unwrap_or(&empty);
        let viewer_followers = inbound.get(&viewer).unwrap_or(&empty);
        let viewer_bio = snapshot
            .users
            .iter()
            .find(|user| normalize_identity(&user.address) == viewer)
            .map(|user| user.bio.clone())
            .unwrap_or_default();
        let no_posts = Vec::new();
        let viewer_posts = posts_by_author.get(&viewer).unwrap_or(&no_posts);

        let mut suggestions = Vec::new();
        for user in &snapshot.users {
            let address = normalize_identity(&user.address);
            if address.is_empty() || address == viewer || viewer_follows.contains(&address) {
                continue;
            }

            let candidate_posts = posts_by_author.get(&address).unwrap_or(&no_posts);
            if !self.filter.accepts(user, candidate_posts, now) {
                continue;
            }

            let candidate_follows = outbound.get(&address).unwrap_or(&empty);
            let candidate_followers = inbound.get(&address).unwrap_or(&empty);

            let bonus = match &self.probe {
                Some(probe) => match probe.sample(&address).await {
                    Ok(sample) => reputation_bonus(&sample, &self.config.reputation),
                    Err(err) => {
                        tracing::warn!(address = %address, error = %err, "reputation probe failed");
                        0.0
                    }
                },
                None => 0.0,
            };

            let signals = SignalBreakdown {
                mutual: mutual_connections(viewer_follows, candidate_follows),
                shared_interests: shared_interests(&viewer_bio, &user.bio),
                engagement: engagement_overlap(&viewer, &address, &snapshot.posts),
                content: content_similarity(viewer_posts, candidate_posts),
                activity: activity_level(candidate_posts, now),
                reputation_bonus: bonus,
            };

            let score = self.weights.composite(&signals);
            let mutual_follower_count = viewer_followers.intersection(candidate_followers).count();

            suggestions.push(Suggestion {
                address,
                display_name: user.display_name.clone(),
                bio: user.bio.clone(),
                score,
                mutual_follower_count,
                post_count: candidate_posts.len(),
                signals,
            });
        }

        // Deterministic tie-break: equal scores order by address.
        suggestions.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.address.cmp(&b.address))
        });
        suggestions.truncate(limit);

        self.cache.put(&viewer, suggestions.clone()).await;
        suggestions
    }

    pub async fn rank_default(&self, viewer: &str, snapshot: &Snapshot) -> Vec<Suggestion> {
        self.rank(viewer, snapshot, DEFAULT_SUGGESTION_LIMIT).await
    }

    pub async fn invalidate(&self, viewer: &str) {
        self.cache.remove(&normalize_identity(viewer)).await;
    }
}

fn group_posts_by_author(posts: &[Post]) -> HashMap<String, Vec<&Post>> {
    let mut map: HashMap<String, Vec<&Post>> = HashMap::new();
    for post in posts {
        map.entry(normalize_identity(&post.author))
            .or_default()
            .push(post);
    }
    map
}

fn truncated(mut suggestions: Vec<Suggestion>, limit: usize) -> Vec<Suggestion> {
    suggestions.truncate(limit);
    suggestions
}
