use std::path::PathBuf;
use std::sync::Mutex;

use follow_suggest::config::EngineConfig;
use follow_suggest::{synthetic, Snapshot};

// EngineConfig::load reads process env; tests that touch it take this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("follow_suggest_{}_{}", std::process::id(), name))
}

#[test]
fn config_round_trips_through_toml() {
    let _guard = ENV_LOCK.lock().unwrap();
    let path = scratch_path("config.toml");
    let mut config = EngineConfig::default();
    config.cache.ttl_secs = 42;
    config.filter.burst_max_posts = 7;

    config.write(&path).unwrap();
    let (loaded, _) = EngineConfig::load(Some(path.clone())).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.cache.ttl_secs, 42);
    assert_eq!(loaded.filter.burst_max_posts, 7);
    assert!((loaded.weights.shared_interests - 0.30).abs() < 1e-6);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    let path = scratch_path("missing.toml");
    let (config, _) = EngineConfig::load(Some(path)).unwrap();

    assert_eq!(config.cache.ttl_secs, 300);
    assert!((config.weights.mutual - 0.25).abs() < 1e-6);
    assert!(!config.reputation.enabled);
}

#[test]
fn env_overrides_win_over_file_values() {
    let _guard = ENV_LOCK.lock().unwrap();
    let path = scratch_path("env_config.toml");
    let mut config = EngineConfig::default();
    config.cache.ttl_secs = 42;
    config.write(&path).unwrap();

    std::env::set_var("SUGGEST_CACHE_TTL_SECS", "900");
    std::env::set_var("REPUTATION_ENDPOINT", "http://ledger.example:8545");
    let result = EngineConfig::load(Some(path.clone()));
    std::env::remove_var("SUGGEST_CACHE_TTL_SECS");
    std::env::remove_var("REPUTATION_ENDPOINT");
    let _ = std::fs::remove_file(&path);

    let (loaded, _) = result.unwrap();
    assert_eq!(loaded.cache.ttl_secs, 900);
    assert_eq!(loaded.reputation.endpoint, "http://ledger.example:8545");
    assert!(loaded.reputation.enabled);
}

#[tokio::test]
async fn snapshot_round_trips_through_json() {
    let path = scratch_path("snapshot.json");
    let snapshot = synthetic::generate_snapshot(10, 7);

    snapshot.write(&path).await.unwrap();
    let loaded = Snapshot::load(&path).await.unwrap();
    let _ = tokio::fs::remove_file(&path).await;

    assert_eq!(loaded.users.len(), snapshot.users.len());
    assert_eq!(loaded.edges.len(), snapshot.edges.len());
    assert_eq!(loaded.posts.len(), snapshot.posts.len());
}

#[test]
fn synthetic_generation_is_reproducible() {
    let first = synthetic::generate_snapshot(20, 99);
    let second = synthetic::generate_snapshot(20, 99);

    assert_eq!(
        serde_json::to_string(&first.users).unwrap(),
        serde_json::to_string(&second.users).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&first.edges).unwrap(),
        serde_json::to_string(&second.edges).unwrap()
    );
    assert_eq!(first.posts.len(), second.posts.len());
    for (a, b) in first.posts.iter().zip(second.posts.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.content, b.content);
        assert_eq!(a.likes, b.likes);
    }
}
