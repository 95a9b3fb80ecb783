use serde::{Deserialize, Serialize};

use follow_suggest::{
    FollowEdge, Post, Snapshot, Suggestion, UserRecord, DEFAULT_SUGGESTION_LIMIT,
};

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub viewer: Option<String>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub edges: Vec<FollowEdge>,
    #[serde(default)]
    pub posts: Vec<Post>,
    pub limit: Option<usize>,
}

impl SuggestRequest {
    pub fn into_parts(self) -> Result<(String, Snapshot, usize), String> {
        let viewer = self.viewer.unwrap_or_default().trim().to_string();
        if viewer.is_empty() {
            return Err("viewer is required".to_string());
        }

        let limit = self.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
        if limit == 0 {
            return Err("limit must be at least 1".to_string());
        }

        let snapshot = Snapshot::new(self.users, self.edges, self.posts);
        Ok((viewer, snapshot, limit))
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub viewer: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
pub struct MutualsRequest {
    pub a: Option<String>,
    pub b: Option<String>,
    #[serde(default)]
    pub edges: Vec<FollowEdge>,
}

impl MutualsRequest {
    pub fn into_parts(self) -> Result<(String, String, Vec<FollowEdge>), String> {
        let a = self.a.unwrap_or_default().trim().to_string();
        let b = self.b.unwrap_or_default().trim().to_string();
        if a.is_empty() || b.is_empty() {
            return Err("both identities are required".to_string());
        }
        Ok((a, b, self.edges))
    }
}

#[derive(Debug, Serialize)]
pub struct MutualsResponse {
    pub mutual_followers: Vec<String>,
}
