use bosswatch_cli::CliContext;
use bosswatch_cli::commands;
use bosswatch_cli::logging;
use bosswatch_cli::readline;
use clap::{Parser, Subcommand};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();
    let ctx = CliContext::new();

    // Start the live refresh loop
    let handle = tokio::spawn(ctx.board.clone().run());
    ctx.tasks.lock().await.refresh = Some(handle);

    println!("bosswatch ready. Type `help` for commands, `exit` to quit.");

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
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

    ctx.tasks.lock().await.abort_all().await;
    Ok(())
}

#[derive(Parser)]
#[command(version, about = "boss respawn tracker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show details for one boss
    Boss {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Print the countdown table once
    List,
    /// Mark a boss as dead right now
    Dead {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Mark a boss as dead at HH:MM today
    DiedAt { name: String, time: String },
    /// Set a manual respawn timer this many hours out
    SetTimer { name: String, hours: i64 },
    /// Show recent kill reports for one boss
    History {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Start the live-updating table in this terminal
    Live,
    /// Stop the live-updating table
    StopLive,
    /// Show the current time in the configured offset
    Time,
    /// Set the display offset, e.g. +08:00
    SetOffset {
        #[arg(allow_hyphen_values = true)]
        offset: String,
    },
    /// Show the current configuration
    Config,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "bosswatch".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Boss { name }) => commands::boss_info(&name.join(" "), ctx).await,
        Some(Commands::List) => commands::list(ctx).await,
        Some(Commands::Dead { name }) => commands::dead(&name.join(" "), ctx).await,
        Some(Commands::DiedAt { name, time }) => commands::died_at(name, time, ctx).await,
        Some(Commands::SetTimer { name, hours }) => commands::set_timer(name, *hours, ctx).await,
        Some(Commands::History { name }) => commands::history(&name.join(" "), ctx).await,
        Some(Commands::Live) => commands::start_live(ctx).await,
        Some(Commands::StopLive) => commands::stop_live(ctx).await,
        Some(Commands::Time) => commands::show_time(ctx).await,
        Some(Commands::SetOffset { offset }) => commands::set_offset(offset, ctx).await,
        Some(Commands::Config) => commands::show_config(ctx).await,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
