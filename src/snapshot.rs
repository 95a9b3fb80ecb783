use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{FollowEdge, Post, UserRecord};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub edges: Vec<FollowEdge>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Snapshot {
    pub fn new(users: Vec<UserRecord>, edges: Vec<FollowEdge>, posts: Vec<Post>) -> Self {
        Self {
            users,
            edges,
            posts,
        }
    }

    pub async fn load(path: &Path) -> Result<Self, String> {
        let data = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| format!("failed to read snapshot: {}", err))?;
        if data.trim().is_empty() {
            return Ok(Snapshot::default());
        }
        serde_json::from_str(&data).map_err(|err| format!("failed to parse snapshot: {}", err))
    }

    pub async fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent).await?;
        }
        let payload = serde_json::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize snapshot: {}", err))?;
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, payload)
            .await
            .map_err(|err| format!("failed to write snapshot: {}", err))?;
        tokio::fs::rename(&tmp_path, path)
            .await
            .map_err(|err| format!("failed to finalize snapshot: {}", err))?;
        Ok(())
    }
}

async fn ensure_dir(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|err| format!("failed to create snapshot dir: {}", err))
}
