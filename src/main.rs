// Tue Feb 10 2026 - Alex

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use colored::Colorize;
use firered_ui_observer::utils::logging::{self, LoggingUtils};
use firered_ui_observer::{Config, SessionContext, UiState};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "UI state observer for a FireRed instance behind an mGBA bridge", long_about = None)]
struct Args {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    /// Use the HTTP shim instead of the socket bridge.
    #[arg(long)]
    http: bool,

    #[arg(long)]
    http_port: Option<u16>,

    /// Report lingering dialog boxes even when no printer is active.
    #[arg(long)]
    slow: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query the current UI state once and print it as JSON.
    State {
        #[arg(long)]
        pretty: bool,
    },
    /// Poll the UI state and print every change.
    Watch {
        #[arg(long)]
        pretty: bool,
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Hex dump a memory range.
    Read {
        addr: String,
        #[arg(default_value = "16")]
        len: usize,
    },
    /// Print the currently visible game text, or one window's text.
    Text {
        #[arg(long)]
        window: Option<u8>,
    },
    /// Press a button for a number of frames.
    Press {
        button: String,
        #[arg(long, default_value = "5")]
        frames: u32,
    },
    /// Reset the game.
    Reset,
}

fn parse_addr(s: &str) -> anyhow::Result<u32> {
    let trimmed = s.trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(trimmed, 16).with_context(|| format!("Invalid address: {s}"))
}

fn build_config(args: &Args) -> Config {
    let mut config = Config::default().apply_env();
    if let Some(host) = &args.host {
        config = config.with_host(host.clone());
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if args.http || args.http_port.is_some() {
        let http_port = args.http_port.unwrap_or(config.http_port);
        config = config.with_http(http_port);
    }
    config.with_slow_mode(args.slow)
}

fn render_state(state: &UiState, pretty: bool) -> anyhow::Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(state)?
    } else {
        serde_json::to_string(state)?
    };
    Ok(out)
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = build_config(&args);
    let session = SessionContext::connect(config)
        .map_err(|e| anyhow!("Failed to reach the bridge: {e}"))?;

    match args.command {
        Command::State { pretty } => {
            let state = session.query_state()?;
            println!("{}", render_state(&state, pretty)?);
        }
        Command::Watch { pretty, interval_ms } => {
            let interval = interval_ms
                .map(std::time::Duration::from_millis)
                .unwrap_or_else(|| session.config().watch_interval());
            let mut last: Option<UiState> = None;
            loop {
                match session.query_state() {
                    Ok(state) => {
                        if last.as_ref() != Some(&state) {
                            println!("{}", render_state(&state, pretty)?);
                            last = Some(state);
                        }
                    }
                    Err(e) => return Err(e.into()),
                }
                std::thread::sleep(interval);
            }
        }
        Command::Read { addr, len } => {
            let addr = parse_addr(&addr)?;
            let bytes = session.client().read_range(addr, len)?;
            for (i, chunk) in bytes.chunks(16).enumerate() {
                let hex = chunk
                    .iter()
                    .map(|b| format!("{b:02X}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{} {}", format!("0x{:08X}", addr + i as u32 * 16).cyan(), hex);
            }
        }
        Command::Text { window } => match window {
            Some(id) => println!("{}", session.window_text(id)?.unwrap_or_default()),
            None => {
                let state = session.query_state()?;
                println!("{}", state.visible_text);
            }
        },
        Command::Press { button, frames } => {
            session.press_button(&button, frames)?;
            println!("{} Pressed {} for {} frames", "[+]".green(), button, frames);
        }
        Command::Reset => {
            session.reset()?;
            println!("{} Game reset", "[+]".green());
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    // -v wins; without it an explicit RUST_LOG picks the backend.
    if args.verbose == 0 && std::env::var_os("RUST_LOG").is_some() {
        logging::init_from_env();
    } else {
        LoggingUtils::init_logger(LoggingUtils::level_from_verbosity(args.verbose as usize));
    }

    if let Err(e) = run(args) {
        eprintln!("{} {}", "[!]".red(), e);
        std::process::exit(1);
    }
}
