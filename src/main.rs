use std::sync::Arc;

use anyhow::bail;
use bucal::analytics::TrendRange;
use bucal::commands;
use bucal::config;
use bucal::data_provider::LeagueDataProvider;
use bucal::session::{Role, SessionContext};
use bucal::store::InMemoryProvider;
use bucal::tui;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "bucal")]
#[command(
    about = "BUCAL league administration",
    long_about = "BUCAL league administration\n\nIf no command is specified, the program starts the dashboard."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Range {
    /// Last 7 days
    #[value(name = "7d")]
    Week,
    /// Last 14 days
    #[value(name = "14d")]
    Fortnight,
    /// Last 30 days
    #[value(name = "30d")]
    Month,
}

impl Range {
    fn to_trend_range(self) -> TrendRange {
        match self {
            Range::Week => TrendRange::SevenDays,
            Range::Fortnight => TrendRange::FourteenDays,
            Range::Month => TrendRange::ThirtyDays,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in (mock login: any non-empty password)
    Login {
        email: String,
        password: String,
        #[arg(short, long, value_enum, default_value = "admin")]
        role: Role,
    },
    /// Sign out and remove the session file
    Logout,
    /// Show the signed-in user and their menu
    Whoami,
    /// Registration status of every team, grouped by sport
    Teams {
        #[arg(short, long)]
        sport: Option<String>,
    },
    /// Player screening by sport, school and team
    Screening {
        #[arg(short, long)]
        sport: Option<String>,
    },
    /// Review timeline of one team registration
    Timeline {
        /// Team ID (e.g., b-ncf-001)
        team_id: String,
    },
    /// List seasons and the current one
    Seasons,
    /// Announcements visible to the signed-in role
    Announcements {
        /// Only pinned announcements
        #[arg(short, long)]
        pinned: bool,
    },
    /// Coach directory
    Coaches {
        /// Match against name or email
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short, long)]
        sport: Option<String>,
    },
    /// Event schedule
    Events {
        #[arg(short, long)]
        sport: Option<String>,
    },
    /// Sports registry and roster requirements
    Sports,
    /// Staff login accounts
    Staff,
    /// Support tickets, optionally with one ticket's messages
    Support {
        /// Ticket ID (e.g., T-1001)
        ticket_id: Option<String>,
    },
    /// Ticket sales summary and trend
    Analytics {
        /// Trend window: 7d, 14d or 30d (defaults to the config value)
        #[arg(short, long)]
        range: Option<Range>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("simulated_latency_ms: {}", cfg.simulated_latency_ms);
    println!("timestamp_format: {}", cfg.timestamp_format);
    println!("trend_range: {}", cfg.trend_range());
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("approved_fg: {:?}", cfg.theme.approved_fg);
    println!("rejected_fg: {:?}", cfg.theme.rejected_fg);
    println!("pending_fg: {:?}", cfg.theme.pending_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run the dashboard for the signed-in user
async fn run_tui_mode(config: config::Config, session: &SessionContext) -> anyhow::Result<()> {
    let Some(current) = session.current() else {
        bail!("Not logged in. Run `bucal login <email> <password> --role <role>` first");
    };
    let provider: Arc<dyn LeagueDataProvider> = Arc::new(InMemoryProvider::from_config(&config));
    tui::run(provider, config, current.role, current.email.clone()).await?;
    Ok(())
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    provider: &dyn LeagueDataProvider,
    session: &mut SessionContext,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Login { email, password, role } => commands::session::login(session, &email, &password, role),
        Commands::Logout => commands::session::logout(session),
        Commands::Whoami => commands::session::whoami(session),
        Commands::Teams { sport } => commands::teams::run(provider, session, sport, config).await,
        Commands::Screening { sport } => commands::screening::run(provider, session, sport, config).await,
        Commands::Timeline { team_id } => commands::timeline::run(provider, session, &team_id, config).await,
        Commands::Seasons => commands::seasons::run(provider, session, config).await,
        Commands::Announcements { pinned } => {
            commands::announcements::run(provider, session, pinned, config).await
        }
        Commands::Coaches { query, sport } => {
            commands::coaches::run(provider, session, query, sport, config).await
        }
        Commands::Events { sport } => commands::events::run(provider, session, sport, config).await,
        Commands::Sports => commands::sports::run(provider, session, config).await,
        Commands::Staff => commands::staff::run(provider, session, config).await,
        Commands::Support { ticket_id } => {
            commands::support::run(provider, session, ticket_id, config).await
        }
        Commands::Analytics { range } => {
            let range = range.map(Range::to_trend_range);
            commands::analytics::run(provider, session, range, config).await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let mut session = SessionContext::init();

    let Some(command) = cli.command else {
        if let Err(e) = run_tui_mode(config, &session).await {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return;
    };

    // Handle Config command separately (doesn't need the store)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    let provider = InMemoryProvider::from_config(&config);
    if let Err(e) = execute_command(&provider, &mut session, &config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
