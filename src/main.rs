use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scorebook::api::{build_router, AppState};
use scorebook::config::AppConfig;
use scorebook::models::EntityId;
use scorebook::stats;
use scorebook::storage::{ClubStore, StorageConfig};

#[derive(Parser)]
#[command(name = "scorebook")]
#[command(about = "Cricket club management and statistics service")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error; overrides config file)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print a member's statistics
    Stats {
        /// Member ID
        member: String,

        /// Restrict to one season
        #[arg(long)]
        season: Option<String>,
    },

    /// Print a leaderboard
    Leaderboard {
        /// Discipline: "batting" or "bowling"
        #[arg(default_value = "batting")]
        discipline: String,

        /// Restrict to one season
        #[arg(long)]
        season: Option<String>,

        /// Number of entries
        #[arg(long)]
        top: Option<i64>,
    },

    /// Print club-wide record counts
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = PathBuf::from(&cli.config);
    let mut config = if config_path.exists() {
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };
    if let Some(ref data_dir) = cli.data_dir {
        config.data_dir = PathBuf::from(data_dir);
    }
    if let Some(ref log_level) = cli.log_level {
        config.log_level = log_level.clone();
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting scorebook v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(ClubStore::new(StorageConfig::new(config.data_dir.clone())));

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(store, config.server.cors_origin.clone());
            let app = build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Stats { member, season } => {
            let member_id = EntityId::from(member.as_str());
            let Some(record) = store.member_by_id(&member_id)?.filter(|m| m.is_active) else {
                eprintln!("Unknown member: {}", member);
                std::process::exit(1);
            };

            let season = resolve_season(&store, season.as_deref())?;
            let season_id = season.as_ref().map(|s| s.id.clone());

            let innings = store.batting_innings_for_stats(season_id.as_ref())?;
            let spells = store.bowling_spells_for_stats(season_id.as_ref())?;

            let batting = stats::batting_stats(&innings, &member_id, &record.name, season.clone());
            let bowling = stats::bowling_stats(&spells, &member_id, &record.name, season.clone());

            let scope = season
                .map(|s| s.name)
                .unwrap_or_else(|| "all seasons".to_string());
            println!("=== {} ({}) ===\n", record.name, scope);
            println!("Batting:");
            println!("  Matches:      {}", batting.matches);
            println!(
                "  Innings:      {} ({} not out)",
                batting.innings, batting.not_outs
            );
            println!("  Runs:         {}", batting.runs);
            println!("  High score:   {}", batting.high_score);
            println!("  Average:      {}", fmt_ratio(batting.average));
            println!("  Strike rate:  {}", fmt_ratio(batting.strike_rate));
            println!("  50s / 100s:   {} / {}", batting.fifties, batting.hundreds);
            println!("\nBowling:");
            println!("  Matches:      {}", bowling.matches);
            println!("  Overs:        {}", bowling.overs);
            println!(
                "  Wickets:      {} (best {})",
                bowling.wickets,
                bowling.best_figures.as_deref().unwrap_or("-")
            );
            println!("  Runs against: {}", bowling.runs_conceded);
            println!("  Average:      {}", fmt_ratio(bowling.average));
            println!("  Economy:      {}", fmt_ratio(bowling.economy));
            println!("  Strike rate:  {}", fmt_ratio(bowling.strike_rate));
        }
        Commands::Leaderboard {
            discipline,
            season,
            top,
        } => {
            let season = resolve_season(&store, season.as_deref())?;
            let season_id = season.as_ref().map(|s| s.id.clone());

            let names: std::collections::HashMap<_, _> = store
                .members()?
                .into_iter()
                .filter(|m| m.is_active)
                .map(|m| (m.id, m.name))
                .collect();

            let scope = season
                .as_ref()
                .map(|s| s.name.as_str())
                .unwrap_or("all seasons");

            match discipline.as_str() {
                "batting" => {
                    let innings = store.batting_innings_for_stats(season_id.as_ref())?;
                    let rows = stats::batting_leaderboard_rows(&innings);
                    let entries = stats::batting_leaderboard(rows, &names, season.clone(), top);

                    println!("=== Batting Leaderboard ({}) ===\n", scope);
                    for e in &entries {
                        println!(
                            "{:>3}. {:<24} {:>5} runs  avg {:>7}  sr {:>7}",
                            e.rank,
                            e.stats.member_name,
                            e.stats.runs,
                            fmt_ratio(e.stats.average),
                            fmt_ratio(e.stats.strike_rate),
                        );
                    }
                }
                "bowling" => {
                    let spells = store.bowling_spells_for_stats(season_id.as_ref())?;
                    let rows = stats::bowling_leaderboard_rows(&spells);
                    let entries = stats::bowling_leaderboard(rows, &names, season.clone(), top);

                    println!("=== Bowling Leaderboard ({}) ===\n", scope);
                    for e in &entries {
                        println!(
                            "{:>3}. {:<24} {:>3} wkts  avg {:>7}  econ {:>6}  best {}",
                            e.rank,
                            e.stats.member_name,
                            e.stats.wickets,
                            fmt_ratio(e.stats.average),
                            fmt_ratio(e.stats.economy),
                            e.stats.best_figures.as_deref().unwrap_or("-"),
                        );
                    }
                }
                other => {
                    eprintln!("Unknown discipline: {}. Use 'batting' or 'bowling'.", other);
                    std::process::exit(1);
                }
            }
        }
        Commands::Summary => {
            let members = store.members()?;
            let fixtures = store.fixtures()?;
            let summary = stats::club_summary(&members, &fixtures);

            println!("=== Club Summary ===");
            println!(
                "Members:  {} ({} active, {} inactive)",
                summary.total_members, summary.active_members, summary.inactive_members
            );
            println!(
                "Fixtures: {} ({} scheduled, {} completed)",
                summary.total_fixtures, summary.scheduled_fixtures, summary.completed_fixtures
            );
            for count in stats::season_fixture_counts(&fixtures) {
                println!("  season {}: {} fixtures", count.season_id, count.fixtures);
            }
        }
    }

    Ok(())
}

fn resolve_season(
    store: &ClubStore,
    season: Option<&str>,
) -> Result<Option<scorebook::models::SeasonRef>> {
    match season {
        Some(id) => {
            let Some(season) = store.season_by_id(&EntityId::from(id))? else {
                eprintln!("Unknown season: {}", id);
                std::process::exit(1);
            };
            Ok(Some(scorebook::models::SeasonRef::from(&season)))
        }
        None => Ok(None),
    }
}

/// Render an optional ratio, showing "-" where the value is undefined.
fn fmt_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}
