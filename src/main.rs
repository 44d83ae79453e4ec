use clap::{Parser, Subcommand};
use std::io::Write;
use std::sync::Arc;
use tokio::sync::RwLock;

use shadowlog::app_state::AppState;
use shadowlog::commands;
use shadowlog::logging;
use shadowlog::repl::readline;
use shadowlog_core::AnalysisSignal;

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();
    let state = Arc::new(RwLock::new(AppState::new()));

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, Arc::clone(&state)).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "spell and buff rule lookup")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a spell with the current settings
    Spell {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        /// Haste fraction (defaults to the configured haste rating)
        #[arg(long)]
        haste: Option<f64>,
    },
    /// Show the rank of a spell id
    Rank {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Find the spell a damage id belongs to
    Damage {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// List known spells
    Spells,
    /// Resolve a buff with the current settings
    Buff {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(long)]
        stack: Option<u32>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Infer buffs from the next analysis signal
    Infer {
        #[arg(long)]
        wrath_of_air: bool,
        /// Haste fraction not explained by logged buffs
        #[arg(long)]
        unexplained_haste: Option<f64>,
        /// Forget buffs inferred from earlier signals
        #[arg(long)]
        reset: bool,
    },
    /// Load gear bonuses from a TOML file
    Gear {
        #[arg(short, long, required_unless_present = "clear")]
        path: Option<String>,
        /// Drop the loaded gear bonuses
        #[arg(long, conflicts_with = "path")]
        clear: bool,
    },
    /// Show the current settings
    Settings,
    /// Load settings from a TOML file
    LoadSettings {
        #[arg(short, long)]
        path: String,
    },
    /// Use the stored settings for a player
    Player { name: String },
    Exit,
}

async fn respond(line: &str, state: Arc<RwLock<AppState>>) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "shadowlog".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        Some(Commands::Spell { id, haste }) => commands::spell(id, haste, state).await?,
        Some(Commands::Rank { id }) => commands::rank(id)?,
        Some(Commands::Damage { id }) => commands::damage(id)?,
        Some(Commands::Spells) => commands::list_spells(),
        Some(Commands::Buff { id, stack, name }) => commands::buff(id, stack, name, state).await?,
        Some(Commands::Infer {
            wrath_of_air,
            unexplained_haste,
            reset,
        }) => {
            let signal = AnalysisSignal {
                apply_wrath_of_air: wrath_of_air,
                unexplained_haste,
            };
            commands::infer(signal, reset, state).await;
        }
        Some(Commands::Gear { path, clear }) => match path {
            Some(path) if !clear => commands::load_gear(&path, state).await?,
            _ => commands::clear_gear(state).await,
        },
        Some(Commands::Settings) => commands::show_settings(state).await,
        Some(Commands::LoadSettings { path }) => commands::load_settings(&path, state).await?,
        Some(Commands::Player { name }) => commands::select_player(&name, state).await?,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
