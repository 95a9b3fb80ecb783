use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{current_timestamp, FollowEdge, Post, Snapshot, UserRecord};

const TOPICS: [&str; 10] = [
    "defi", "governance", "privacy", "rollups", "zkproofs", "wallets", "staking", "oracles",
    "gaming", "artwork",
];

const PHRASES: [&str; 8] = [
    "shipping something small every week",
    "notes from building onchain",
    "exploring protocol design tradeoffs",
    "what are people reading lately",
    "benchmarks from the latest release",
    "community call highlights today",
    "field report from testnet",
    "unpopular opinion about tokenomics",
];

pub fn generate_snapshot(user_count: usize, seed: u64) -> Snapshot {
    let mut rng = StdRng::seed_from_u64(seed);
    let now = current_timestamp();

    let mut users = Vec::with_capacity(user_count);
    for idx in 0..user_count {
        let first = TOPICS[rng.gen_range(0..TOPICS.len())];
        let second = TOPICS[rng.gen_range(0..TOPICS.len())];
        users.push(UserRecord {
            address: format!("0x{:040x}", idx + 1),
            display_name: format!("user{}", idx),
            bio: format!("building around {} and {} fulltime", first, second),
        });
    }

    let mut edges = Vec::new();
    for user in &users {
        let follows = rng.gen_range(0..user_count.min(12));
        for _ in 0..follows {
            let target = &users[rng.gen_range(0..user_count)];
            if target.address != user.address {
                edges.push(FollowEdge {
                    follower: user.address.clone(),
                    following: target.address.clone(),
                });
            }
        }
    }

    let mut posts = Vec::new();
    for (user_idx, user) in users.iter().enumerate() {
        let post_count = rng.gen_range(0..8);
        for post_idx in 0..post_count {
            let phrase = PHRASES[rng.gen_range(0..PHRASES.len())];
            let topic = TOPICS[rng.gen_range(0..TOPICS.len())];
            let age_secs = rng.gen_range(0..60 * 24 * 3600);

            let mut likes = Vec::new();
            let like_count = rng.gen_range(0..user_count.min(6));
            for _ in 0..like_count {
                let liker = &users[rng.gen_range(0..user_count)];
                if liker.address != user.address && !likes.contains(&liker.address) {
                    likes.push(liker.address.clone());
                }
            }

            posts.push(Post {
                id: format!("post_{}_{}", user_idx, post_idx),
                author: user.address.clone(),
                content: format!("{} #{}", phrase, topic),
                timestamp: now - age_secs,
                likes,
            });
        }
    }

    Snapshot::new(users, edges, posts)
}
