use std::time::Duration;

use follow_suggest::cache::SuggestionCache;
use follow_suggest::{SignalBreakdown, Suggestion};

fn suggestion(address: &str, score: f64) -> Suggestion {
    Suggestion {
        address: address.to_string(),
        display_name: address.to_string(),
        bio: String::new(),
        score,
        mutual_follower_count: 0,
        post_count: 0,
        signals: SignalBreakdown {
            mutual: 0.0,
            shared_interests: 0.0,
            engagement: 0.0,
            content: 0.0,
            activity: 0.0,
            reputation_bonus: 0.0,
        },
    }
}

#[tokio::test]
async fn fresh_entry_round_trips() {
    let cache = SuggestionCache::new(Duration::from_secs(60));
    let entries = vec![suggestion("0xaaa", 0.5)];

    cache.put("0xviewer", entries.clone()).await;
    let cached = cache.get("0xviewer").await;

    assert_eq!(cached, Some(entries));
}

#[tokio::test]
async fn stale_entry_reads_as_miss() {
    let cache = SuggestionCache::new(Duration::from_millis(10));
    cache.put("0xviewer", vec![suggestion("0xaaa", 0.5)]).await;

    tokio::time::sleep(Duration::from_millis(25)).await;

    assert!(cache.get("0xviewer").await.is_none());
}

#[tokio::test]
async fn put_overwrites_existing_entry() {
    let cache = SuggestionCache::new(Duration::from_secs(60));
    cache.put("0xviewer", vec![suggestion("0xaaa", 0.5)]).await;
    cache.put("0xviewer", vec![suggestion("0xbbb", 0.9)]).await;

    let cached = cache.get("0xviewer").await.unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].address, "0xbbb");
}

#[tokio::test]
async fn write_sweeps_stale_entries_across_keys() {
    let cache = SuggestionCache::new(Duration::from_millis(10));
    cache.put("0xold", vec![suggestion("0xaaa", 0.5)]).await;

    tokio::time::sleep(Duration::from_millis(25)).await;
    cache.put("0xnew", vec![suggestion("0xbbb", 0.9)]).await;

    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn remove_drops_only_that_viewer() {
    let cache = SuggestionCache::new(Duration::from_secs(60));
    cache.put("0xone", vec![suggestion("0xaaa", 0.5)]).await;
    cache.put("0xtwo", vec![suggestion("0xbbb", 0.9)]).await;

    cache.remove("0xone").await;

    assert!(cache.get("0xone").await.is_none());
    assert!(cache.get("0xtwo").await.is_some());
    assert!(!cache.is_empty().await);
}
