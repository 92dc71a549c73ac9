use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pairing_desk::api::{build_router, cors_layer, state::AppState};
use pairing_desk::config::AppConfig;
use pairing_desk::engine::TournamentEngine;
use pairing_desk::models::{GameResult, Pairing, PlayerId};
use pairing_desk::render;
use pairing_desk::storage::{StorageConfig, TournamentStore};

#[derive(Parser)]
#[command(name = "pairing-desk")]
#[command(about = "Chess tournament desk: roster, random pairings, results and standings")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./pairing-desk.toml")]
    config: PathBuf,

    /// Data directory path (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Fixed shuffle seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a player to the roster
    Add {
        /// Player name
        name: String,
    },

    /// Remove a player by id or name
    Remove {
        /// Player id or name
        player: String,
    },

    /// List the roster
    Players,

    /// Start the tournament and pair round 1
    Start,

    /// Enter the result of a board in the current round
    Result {
        /// Board number
        board: u32,

        /// 1-0, 0-1, 1/2-1/2 (or white/black/draw), or "clear"
        result: String,
    },

    /// Score the current round and archive it
    Complete,

    /// Pair the next round
    Next,

    /// Clear all players, rounds, and results
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show the current round's pairings
    Pairings,

    /// Show the standings table
    Standings,

    /// Show completed rounds
    History,

    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn load_engine(store: &TournamentStore, config: &AppConfig) -> Result<TournamentEngine> {
    let state = store
        .load_state()
        .context("Failed to load tournament snapshot")?;
    let engine = match config.tournament.seed {
        Some(seed) => TournamentEngine::resume_seeded(state, seed),
        None => TournamentEngine::from_state(state, StdRng::from_entropy()),
    };
    Ok(engine.with_min_players(config.tournament.min_players))
}

/// Index of the active pairing holding `board`.
fn board_index(engine: &TournamentEngine, board: u32) -> Option<usize> {
    engine
        .state()
        .active_pairings
        .iter()
        .position(|p| matches!(p, Pairing::Board { board: b, .. } if *b == board))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.seed.is_some() {
        config.tournament.seed = cli.seed;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Starting pairing-desk v{}", env!("CARGO_PKG_VERSION"));

    let store = TournamentStore::new(StorageConfig::new(config.data_dir.clone()));
    let mut engine = load_engine(&store, &config)?;

    match cli.command {
        Commands::Add { name } => {
            match engine.add_player(&name)? {
                Some(id) => println!("Added {} ({})", name.trim(), id),
                None => println!("Empty name, nothing added."),
            }
            store.save_state(engine.state())?;
        }
        Commands::Remove { player } => {
            let id = engine
                .player(&PlayerId::from(player.as_str()))
                .or_else(|| engine.player_by_name(&player))
                .map(|p| p.id.clone());

            match id {
                Some(id) => {
                    if let Some(removed) = engine.remove_player(&id)? {
                        println!("Removed {}", removed.name);
                    }
                    store.save_state(engine.state())?;
                }
                None => println!("No player matches {:?}.", player),
            }
        }
        Commands::Players => {
            print!("{}", render::render_players(engine.state()));
        }
        Commands::Start => {
            engine.start()?;
            store.save_state(engine.state())?;
            print!("{}", render::render_pairings(engine.state()));
        }
        Commands::Result { board, result } => {
            let result = if result.eq_ignore_ascii_case("clear") {
                None
            } else {
                Some(result.parse::<GameResult>()?)
            };
            let Some(index) = board_index(&engine, board) else {
                bail!("Board {} is not in the current round.", board);
            };

            engine.set_pairing_result(index, result)?;
            store.save_state(engine.state())?;
            print!("{}", render::render_pairings(engine.state()));
        }
        Commands::Complete => {
            let record = engine.complete_round()?;
            store.save_state(engine.state())?;
            println!("Round {} completed.\n", record.round);
            print!("{}", render::render_standings(engine.state()));
        }
        Commands::Next => {
            engine.next_round()?;
            store.save_state(engine.state())?;
            print!("{}", render::render_pairings(engine.state()));
        }
        Commands::Reset { yes } => {
            if !yes {
                bail!("Reset all players, rounds, and results? Re-run with --yes to confirm.");
            }
            engine.reset();
            store.save_state(engine.state())?;
            println!("Tournament reset.");
        }
        Commands::Pairings => {
            print!("{}", render::render_pairings(engine.state()));
        }
        Commands::Standings => {
            print!("{}", render::render_standings(engine.state()));
        }
        Commands::History => {
            print!("{}", render::render_history(engine.state()));
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(engine, store);
            let app = build_router(state).layer(cors_layer(&config.server.cors_origin));
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
