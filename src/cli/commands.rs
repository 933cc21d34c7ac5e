//! CLI command implementations
//!
//! The CLI doubles as the bundled presentation layer: draw commands
//! subscribe to the orchestrator's event stream and render spin ticks and
//! winner announcements as lines of text.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::AppConfig;
use crate::gate::{digest_b64_of, OperatorGate};
use crate::observability::{LogEvent, Logger};
use crate::orchestrator::{DrawEvent, Orchestrator};
use crate::pool::Roster;
use crate::store::{FileStore, Winner, WinnerStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    match Cli::parse_args().command {
        Command::Init { config } => init(&config),
        Command::Status { config } => status(&config),
        Command::Draw { category, config } => draw(&config, &category, false),
        Command::DrawAll { category, config } => draw(&config, &category, true),
        Command::Winners { category, config } => winners(&config, category.as_deref()),
        Command::Delete { id, secret, config } => delete(&config, id, &secret),
        Command::HashSecret { secret } => {
            println!("{}", digest_b64_of(&secret));
            Ok(())
        }
    }
}

const SAMPLE_ROSTER: &str = r#"[
  { "name": "Asha Rao", "supervisor": "Priya Nair", "category": "International Messaging" },
  { "name": "Ben Okafor", "supervisor": "Priya Nair", "category": "International Messaging" },
  { "name": "Mei Lin", "supervisor": "Daniel Wong", "category": "APAC" },
  { "name": "Tomás Rivera", "supervisor": "Daniel Wong", "category": "APAC" },
  { "name": "Kavya Iyer", "supervisor": "Rohit Shah", "category": "India Messaging" },
  { "name": "Arjun Mehta", "supervisor": "Rohit Shah", "category": "India Messaging" }
]
"#;

/// Write a default config and sample roster, and create the data
/// directory. Existing files are left untouched.
fn init(config_path: &Path) -> CliResult<()> {
    let config = AppConfig::default();

    if config_path.exists() {
        println!("config exists: {}", config_path.display());
    } else {
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| CliError::invalid(format!("failed to render config: {}", e)))?;
        fs::write(config_path, json).map_err(|e| CliError::io("write config", e))?;
        println!("wrote {}", config_path.display());
    }

    if config.roster_file.exists() {
        println!("roster exists: {}", config.roster_file.display());
    } else {
        fs::write(&config.roster_file, SAMPLE_ROSTER)
            .map_err(|e| CliError::io("write sample roster", e))?;
        println!("wrote {}", config.roster_file.display());
    }

    fs::create_dir_all(&config.data_dir).map_err(|e| CliError::io("create data directory", e))?;
    println!("data directory: {}", config.data_dir.display());
    Ok(())
}

/// Load config, roster, store, and gate into a ready orchestrator.
fn boot(config_path: &Path) -> CliResult<(AppConfig, Arc<Orchestrator>)> {
    let config = AppConfig::load(config_path)?;
    Logger::info(
        LogEvent::ConfigLoaded,
        &[("path", &config_path.display().to_string())],
    );

    let roster = Roster::load(&config.roster_file)?;
    Logger::info(
        LogEvent::RosterLoaded,
        &[
            ("candidates", &roster.len().to_string()),
            ("categories", &roster.categories().len().to_string()),
        ],
    );

    let store: Arc<dyn WinnerStore> = Arc::new(FileStore::open(&config.data_dir)?);
    let gate = match &config.operator_secret_digest {
        Some(digest) => OperatorGate::from_digest_b64(digest).map_err(CliError::Invalid)?,
        None => OperatorGate::default(),
    };

    let orchestrator = Arc::new(Orchestrator::new(
        roster,
        store,
        gate,
        config.draw_settings(),
    ));
    Ok((config, orchestrator))
}

fn status(config_path: &Path) -> CliResult<()> {
    let (config, orchestrator) = boot(config_path)?;
    let tally = orchestrator.tally();

    println!("spindraw standings");
    for category in orchestrator.categories() {
        let count = tally.count(category);
        let left = config.caps.remaining(count, tally.total);
        println!(
            "  {:<28} {}/{} winners, {} draw(s) left{}",
            category,
            count,
            config.caps.per_category,
            left,
            if orchestrator.can_draw(category) {
                ""
            } else {
                "  (closed)"
            }
        );
    }
    println!(
        "  total: {}/{} winners, prize pool remaining: {}",
        tally.total,
        config.caps.global,
        orchestrator.remaining_prize_pool()
    );
    if !orchestrator.settings().caps.global_open(tally.total) {
        println!("  contest complete: all winners have been selected");
    }
    Ok(())
}

fn draw(config_path: &Path, category: &str, all: bool) -> CliResult<()> {
    let (_, orchestrator) = boot(config_path)?;

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::io("start runtime", e))?;
    rt.block_on(async {
        let mut rx = orchestrator.subscribe();
        let renderer = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                match event {
                    DrawEvent::SpinTick { name, .. } => println!("  ~ {}", name),
                    DrawEvent::WinnerCommitted { winner } => {
                        println!(
                            "* winner: {} ({}), prize {}",
                            winner.name, winner.category, winner.prize_amount
                        );
                    }
                    DrawEvent::DrawCancelled { category } => {
                        println!("  draw cancelled for {}", category);
                    }
                    DrawEvent::BatchComplete { committed, .. } => {
                        println!("batch complete: {} winner(s)", committed);
                    }
                }
            }
        });

        let result: CliResult<()> = if all {
            orchestrator.draw_all(category).await.map(|_| ()).map_err(Into::into)
        } else {
            match orchestrator.draw_one(category).await {
                Ok(Some(_)) => Ok(()),
                Ok(None) => {
                    println!("no remaining candidates in {}", category);
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        };

        renderer.abort();
        result
    })
}

fn winners(config_path: &Path, category: Option<&str>) -> CliResult<()> {
    let config = AppConfig::load(config_path)?;
    let store = FileStore::open(&config.data_dir)?;
    let rows = match category {
        Some(category) => store.list_by_category(category)?,
        None => store.list()?,
    };

    if rows.is_empty() {
        println!("no winners yet");
        return Ok(());
    }
    for winner in &rows {
        print_winner(winner);
    }
    let distributed: u64 = rows.iter().map(|w| w.prize_amount).sum();
    println!("{} winner(s), {} distributed", rows.len(), distributed);
    Ok(())
}

fn print_winner(winner: &Winner) {
    println!(
        "{}  {:<20} {:<24} supervisor: {:<20} prize: {:<6} {}",
        winner.id,
        winner.name,
        winner.category,
        winner.supervisor,
        winner.prize_amount,
        winner.created_at.format("%Y-%m-%d %H:%M:%S")
    );
}

fn delete(config_path: &Path, id: Uuid, secret: &str) -> CliResult<()> {
    let (_, orchestrator) = boot(config_path)?;
    let removed = orchestrator.delete_winner(id, secret)?;
    println!("deleted winner {} ({})", removed.name, removed.id);
    Ok(())
}
