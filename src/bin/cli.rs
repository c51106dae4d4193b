//! Leadbook CLI
//!
//! Command-line client for the lead backend:
//! - Register, log in and out
//! - List, add, edit and delete leads
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use leadbook::config::{generate_default_config, Config};
use leadbook::dashboard::{Dashboard, DELETE_CONFIRMATION, EMPTY_PLACEHOLDER};
use leadbook::{
    routes, AuthContext, Credentials, FileStore, HttpLeadApi, LeadDraft, LeadId, LeadStatus,
    Registration,
};

#[derive(Parser)]
#[command(name = "leadbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage sales leads from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Lead backend URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/leadbook/config.toml, then ./leadbook.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and log in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Log in
    Login {
        #[arg(long)]
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Work with leads
    Leads {
        #[command(subcommand)]
        command: LeadCommands,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum LeadCommands {
    /// List all leads
    List,

    /// Add a lead
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        /// New, Contacted or Lost
        #[arg(long, default_value = "New")]
        status: String,
    },

    /// Edit a lead; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a lead
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config);

    let api = HttpLeadApi::new(config.api.base_url.clone());
    let store = FileStore::new(config.session_path());
    tracing::debug!(api = api.base_url(), session = ?store.path(), "Starting");

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => {
            let password = password_or_prompt(password)?;
            let registration = Registration {
                name,
                email,
                password,
            };

            let mut auth = AuthContext::restore(store);
            match auth.register(&api, &registration).await {
                Ok(session) => println!("Registered and logged in as {}", greeting(session)),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Login { email, password } => {
            let password = password_or_prompt(password)?;
            let credentials = Credentials { email, password };

            let mut auth = AuthContext::restore(store);
            match auth.login(&api, &credentials).await {
                Ok(session) => println!("Logged in as {}", greeting(session)),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Logout => {
            let mut auth = AuthContext::restore(store);
            auth.logout();
            println!("Logged out");
        }

        Commands::Whoami => {
            let auth = AuthContext::restore(store);
            match auth.session() {
                Some(session) => println!("{}", greeting(session)),
                None => {
                    println!("Not logged in");
                    std::process::exit(1);
                }
            }
        }

        Commands::Leads { command } => {
            let auth = AuthContext::restore(store);
            if let Some(target) = routes::guard(auth.is_authenticated()) {
                tracing::debug!(redirect = target, "Dashboard requires a session");
                eprintln!("Not logged in. Run `leadbook login` first.");
                std::process::exit(1);
            }

            let token = auth.token();
            let mut dashboard = Dashboard::new();

            match command {
                LeadCommands::List => {
                    let _ = dashboard.refresh(&api, token).await;
                    report(&dashboard);
                    print_leads(&dashboard);
                }

                LeadCommands::Add {
                    name,
                    email,
                    phone,
                    status,
                } => {
                    let draft = LeadDraft {
                        name,
                        email,
                        phone,
                        status: status.parse()?,
                    };
                    draft.validate()?;

                    dashboard.open_create();
                    if let Some(slot) = dashboard.draft_mut() {
                        *slot = draft;
                    }
                    let _ = dashboard.submit(&api, token).await;
                    report(&dashboard);
                    println!("{}", dashboard.heading());
                }

                LeadCommands::Edit {
                    id,
                    name,
                    email,
                    phone,
                    status,
                } => {
                    let _ = dashboard.refresh(&api, token).await;
                    report(&dashboard);

                    let id = LeadId::new(id);
                    if !dashboard.open_edit_by_id(&id) {
                        eprintln!("Lead {} not found", id);
                        std::process::exit(1);
                    }

                    let status: Option<LeadStatus> = status.map(|s| s.parse()).transpose()?;
                    if let Some(draft) = dashboard.draft_mut() {
                        if let Some(name) = name {
                            draft.name = name;
                        }
                        if let Some(email) = email {
                            draft.email = email;
                        }
                        if let Some(phone) = phone {
                            draft.phone = phone;
                        }
                        if let Some(status) = status {
                            draft.status = status;
                        }
                        draft.validate()?;
                    }

                    let _ = dashboard.submit(&api, token).await;
                    report(&dashboard);
                }

                LeadCommands::Delete { id, yes } => {
                    let confirmed = yes || confirm(DELETE_CONFIRMATION)?;
                    if !confirmed {
                        println!("Cancelled");
                        return Ok(());
                    }

                    let _ = dashboard
                        .delete(&api, token, &LeadId::new(id), confirmed)
                        .await;
                    report(&dashboard);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("leadbook={}", config.logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn greeting(session: &leadbook::Session) -> String {
    match &session.user {
        Some(user) => match &user.email {
            Some(email) if user.name.is_some() => format!("{} <{}>", user.display_name(), email),
            _ => user.display_name().to_string(),
        },
        None => "(unknown user)".to_string(),
    }
}

/// Print the dashboard banners. Exits with status 1 if an error banner is up.
fn report(dashboard: &Dashboard) {
    let banners = dashboard.banners();
    if let Some(message) = banners.success_message() {
        println!("{}", message);
    }
    if let Some(message) = banners.error_message() {
        eprintln!("{}", message);
        std::process::exit(1);
    }
}

fn print_leads(dashboard: &Dashboard) {
    if dashboard.is_empty() {
        println!("{}", EMPTY_PLACEHOLDER);
        return;
    }

    println!("{}", dashboard.heading());
    println!();
    println!(
        "{:<24} {:<28} {:<16} {:<10} {:<14} {}",
        "Name", "Email", "Phone", "Status", "Created", "ID"
    );
    println!("{}", "-".repeat(110));
    for lead in dashboard.leads() {
        println!(
            "{:<24} {:<28} {:<16} {:<10} {:<14} {}",
            lead.name,
            lead.email,
            lead.phone,
            lead.status.as_str(),
            lead.created_label(),
            lead.id
        );
    }
}

fn prompt(label: &str) -> anyhow::Result<String> {
    eprint!("{}", label);
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn password_or_prompt(password: Option<String>) -> anyhow::Result<String> {
    match password {
        Some(password) => Ok(password),
        None => read_password("Password: "),
    }
}

/// Prompt without echoing what is typed. Piped input is read as a plain line.
fn read_password(label: &str) -> anyhow::Result<String> {
    if !std::io::stdin().is_terminal() {
        return prompt(label);
    }

    eprint!("{}", label);
    std::io::stderr().flush()?;

    enable_raw_mode()?;
    let entered = read_hidden_line();
    disable_raw_mode()?;
    eprintln!();

    entered
}

fn read_hidden_line() -> anyhow::Result<String> {
    let mut password = String::new();
    loop {
        if let Event::Key(key) = event::read()? {
            match apply_keystroke(&mut password, key) {
                Keystroke::Continue => {}
                Keystroke::Submit => return Ok(password),
                Keystroke::Abort => anyhow::bail!("Password entry cancelled"),
            }
        }
    }
}

#[derive(Debug, PartialEq)]
enum Keystroke {
    Continue,
    Submit,
    Abort,
}

fn apply_keystroke(password: &mut String, key: KeyEvent) -> Keystroke {
    if key.kind == KeyEventKind::Release {
        return Keystroke::Continue;
    }

    match key.code {
        KeyCode::Enter => Keystroke::Submit,
        KeyCode::Esc => Keystroke::Abort,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Keystroke::Abort,
        KeyCode::Char(c) => {
            password.push(c);
            Keystroke::Continue
        }
        KeyCode::Backspace => {
            password.pop();
            Keystroke::Continue
        }
        _ => Keystroke::Continue,
    }
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    let answer = prompt(&format!("{} [y/N] ", question))?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
