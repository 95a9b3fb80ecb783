mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use follow_suggest::config::EngineConfig;
use follow_suggest::reputation::HttpReputationProbe;
use follow_suggest::scoring::RankingEngine;
use follow_suggest::{format_score, synthetic, Snapshot, DEFAULT_SUGGESTION_LIMIT};

#[derive(Parser)]
#[command(name = "follow-suggest", about = "Who-to-follow suggestion engine")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Suggest(SuggestArgs),
    Gen(GenArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct SuggestArgs {
    #[arg(long)]
    snapshot: PathBuf,
    #[arg(long)]
    viewer: String,
    #[arg(long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    limit: usize,
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
struct GenArgs {
    #[arg(long, default_value_t = 50)]
    users: usize,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8788)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = EngineConfig::load(cli.config.clone())?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        tracing::debug!(path = %path.display(), "loaded engine config");
    }

    match cli.command {
        Command::Suggest(args) => run_suggest(args, config).await,
        Command::Gen(args) => run_gen(args).await,
        Command::Serve(args) => server::serve(args, config).await,
    }
}

async fn run_suggest(args: SuggestArgs, config: EngineConfig) -> Result<(), String> {
    if args.limit == 0 {
        return Err("limit must be at least 1".to_string());
    }

    let snapshot = Snapshot::load(&args.snapshot).await?;

    let mut engine = RankingEngine::new(config.clone());
    if config.reputation.enabled {
        let probe = HttpReputationProbe::from_config(&config.reputation)?;
        engine = engine.with_probe(Arc::new(probe));
    }

    let suggestions = engine.rank(&args.viewer, &snapshot, args.limit).await;

    if suggestions.is_empty() {
        println!("No suggestions for {}", args.viewer);
        return Ok(());
    }

    println!("Suggestions for {}:", args.viewer);
    for (rank, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{}. {} ({}) score {} | {} mutual followers | {} posts",
            rank + 1,
            suggestion.display_name,
            suggestion.address,
            format_score(suggestion.score),
            suggestion.mutual_follower_count,
            suggestion.post_count
        );
        if args.details {
            let signals = &suggestion.signals;
            println!(
                "   mutual {} | interests {} | engagement {} | content {} | activity {} | reputation {}",
                format_score(signals.mutual),
                format_score(signals.shared_interests),
                format_score(signals.engagement),
                format_score(signals.content),
                format_score(signals.activity),
                format_score(signals.reputation_bonus)
            );
        }
    }

    Ok(())
}

async fn run_gen(args: GenArgs) -> Result<(), String> {
    if args.users == 0 {
        return Err("users must be at least 1".to_string());
    }

    let snapshot = synthetic::generate_snapshot(args.users, args.seed);
    snapshot.write(&args.out).await?;
    println!(
        "Wrote snapshot with {} users, {} edges, {} posts to {}",
        snapshot.users.len(),
        snapshot.edges.len(),
        snapshot.posts.len(),
        args.out.display()
    );
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
