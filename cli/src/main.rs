use clap::{Parser, Subcommand, ValueEnum};
use rouser_cli::AppState;
use rouser_cli::commands;
use rouser_cli::logging;
use rouser_cli::readline;
use rouser_core::monitor::ActivityKind;
use std::io::Write;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();
    let state = Arc::new(AppState::new());

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
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "cli")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a wake packet to the configured server
    Wake {
        #[arg(short, long, default_value = "manual request")]
        reason: String,
    },
    /// Show engine and configuration status
    Status,
    /// Reset the wake attempt counter
    Reset,
    /// Feed an observed item path through the activity classifier
    Observe {
        #[arg(short, long)]
        path: String,
        #[arg(short, long, value_enum, default_value = "playback")]
        kind: ObserveKind,
    },
    /// Print the loaded configuration
    Config,
    SetMac {
        #[arg(short, long)]
        mac: String,
    },
    SetBroadcast {
        #[arg(short, long)]
        address: String,
    },
    SetPort {
        #[arg(short, long)]
        port: u16,
    },
    Exit,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ObserveKind {
    Playback,
    Request,
}

impl From<ObserveKind> for ActivityKind {
    fn from(kind: ObserveKind) -> Self {
        match kind {
            ObserveKind::Playback => Self::PlaybackStart,
            ObserveKind::Request => Self::ItemRequest,
        }
    }
}

async fn respond(line: &str, state: Arc<AppState>) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "rouser".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Wake { reason }) => commands::wake(Arc::clone(&state), reason).await,
        Some(Commands::Status) => commands::status(Arc::clone(&state)).await,
        Some(Commands::Reset) => commands::reset(Arc::clone(&state)).await,
        Some(Commands::Observe { path, kind }) => {
            commands::observe(Arc::clone(&state), (*kind).into(), path).await
        }
        Some(Commands::Config) => commands::show_config(Arc::clone(&state)).await,
        Some(Commands::SetMac { mac }) => commands::set_mac(Arc::clone(&state), mac).await,
        Some(Commands::SetBroadcast { address }) => {
            commands::set_broadcast(Arc::clone(&state), address).await
        }
        Some(Commands::SetPort { port }) => commands::set_port(Arc::clone(&state), *port).await,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
