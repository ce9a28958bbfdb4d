mod config;
mod sheet;
mod store;
mod tui;

use anyhow::Result;
use clap::{Command, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use sheet::models::Os;
use std::io;
use store::Store;
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "cheatsheet")]
#[command(about = "A TUI cheat sheet of keyboard shortcuts for creative apps")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "List the available applications")]
    Apps,
    #[command(about = "Print a plain-text sheet to stdout")]
    Print {
        #[arg(short, long, help = "Application id (defaults to the configured default_app)")]
        app: Option<String>,
        #[arg(long, help = "Key-label convention: mac or win")]
        os: Option<Os>,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (default_app or default_os)")]
        key: String,
        #[arg(help = "Configuration value", value_hint = ValueHint::Other)]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Config { action }) => handle_config_command(action).map_err(Into::into),
        Some(Commands::Apps) => list_apps(),
        Some(Commands::Print { app, os }) => print_sheet(app, os),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
            Ok(())
        }
        None => run_main_app(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default()?;
            match config.get(&key) {
                Some(value) => println!("{}", value),
                None => return Err(ConfigError::UnknownKey(key)),
            }
        }
        ConfigAction::List => {
            let config = Config::load_or_default()?;
            println!("default_app = {}", config.default_app);
            println!("default_os = {}", config.default_os.as_str());
        }
    }
    Ok(())
}

fn list_apps() -> Result<()> {
    let dataset = sheet::data::load()?;
    for app in &dataset.apps {
        println!("{:4} {} ({} shortcuts)", app.id, app.name, app.shortcuts.len());
    }
    Ok(())
}

fn print_sheet(app_id: Option<String>, os: Option<Os>) -> Result<()> {
    let config = Config::load_or_default().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    let dataset = sheet::data::load()?;

    let app_id = app_id.unwrap_or(config.default_app);
    let os = os.unwrap_or(config.default_os);

    let Some(app) = dataset.app(&app_id) else {
        let known: Vec<&str> = dataset.apps.iter().map(|a| a.id.as_str()).collect();
        anyhow::bail!("Unknown application '{}'. Available: {}", app_id, known.join(", "));
    };

    let shortcuts: Vec<&sheet::models::Shortcut> = app.shortcuts.iter().collect();
    print!("{}", sheet::export::render_sheet(app, os, &shortcuts));
    Ok(())
}

fn run_main_app() -> Result<()> {
    let config = Config::load_or_default()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    let dataset = sheet::data::load()?;
    let store = Store::open().map_err(|e| anyhow::anyhow!("Storage error: {}", e))?;
    let mut app = App::new(dataset, store, &config);

    run_tui(&mut app)?;

    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
