//! Dialtone CLI - Place calls and manage the telephony integration
//!
//! Simple CLI for interacting with the Dialtone API from a terminal.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;

use api::DialtoneClient;
use config::Config;

#[derive(Parser)]
#[command(name = "dialtone")]
#[command(about = "Dialtone CLI - CRM telephony from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Place an outbound call
    Call {
        /// Number to call
        to: String,
        /// Provider to call through (plivo, websprix)
        #[arg(short, long)]
        medium: Option<String>,
        /// Agent (CRM user) placing the call
        #[arg(short, long)]
        agent: Option<String>,
        /// Source number (defaults to the agent's mobile number)
        #[arg(short, long)]
        from: Option<String>,
        /// Number shown to the callee
        #[arg(long)]
        caller_id: Option<String>,
    },

    /// Show one call log
    Log {
        /// Provider-assigned call id
        call_id: String,
    },

    /// Show integration status and settings
    Status {
        /// Provider (plivo, websprix)
        #[arg(short, long)]
        medium: Option<String>,
        /// Show full settings, not just the enabled flag
        #[arg(long)]
        settings: bool,
    },

    /// Resolve a phone number to CRM records
    Contact {
        /// Phone number to resolve
        phone: String,
    },

    /// Inbound call queue membership
    Queue {
        #[command(subcommand)]
        action: QueueAction,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum QueueAction {
    /// Join the inbound call queue
    Join {
        #[arg(short, long)]
        medium: Option<String>,
        #[arg(short, long)]
        agent: Option<String>,
    },
    /// Leave the inbound call queue
    Leave {
        #[arg(short, long)]
        medium: Option<String>,
        #[arg(short, long)]
        agent: Option<String>,
    },
    /// Show current membership
    Status {
        #[arg(short, long)]
        medium: Option<String>,
        #[arg(short, long)]
        agent: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key } => cmd_login(key).await,
        Commands::Call {
            to,
            medium,
            agent,
            from,
            caller_id,
        } => cmd_call(to, medium, agent, from, caller_id).await,
        Commands::Log { call_id } => cmd_log(call_id).await,
        Commands::Status { medium, settings } => cmd_status(medium, settings).await,
        Commands::Contact { phone } => cmd_contact(phone).await,
        Commands::Queue { action } => cmd_queue(action).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

fn client(config: &Config) -> Result<DialtoneClient> {
    let api_key = config
        .api_key
        .as_ref()
        .context("Not logged in. Run 'dialtone login' first.")?;
    Ok(DialtoneClient::new(&config.base_url, api_key))
}

fn required_agent(config: &Config, flag: Option<&str>) -> Result<String> {
    config
        .resolve_agent(flag)
        .context("No agent specified. Use --agent or set default_agent in the config.")
}

async fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = DialtoneClient::new(&config.base_url, &api_key);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Dialtone API. Check the base URL and your API key.");
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!(
        "{} API key saved to {:?}",
        "✓".green(),
        Config::config_path()?
    );

    Ok(())
}

async fn cmd_call(
    to: String,
    medium: Option<String>,
    agent: Option<String>,
    from: Option<String>,
    caller_id: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let client = client(&config)?;
    let medium = config.resolve_medium(medium.as_deref());
    let agent = required_agent(&config, agent.as_deref())?;

    let placed = client
        .make_call(
            &medium,
            &agent,
            &to,
            from.as_deref(),
            caller_id.as_deref(),
        )
        .await?;

    println!(
        "{} Call placed via {}: {}",
        "✓".green(),
        medium.cyan(),
        placed.call_id.bold()
    );
    println!("  dialtone log {}", placed.call_id.dimmed());

    Ok(())
}

async fn cmd_log(call_id: String) -> Result<()> {
    let config = Config::load()?;
    let client = client(&config)?;

    let log = client.get_call(&call_id).await?;

    println!("{}", log.id.bold());
    println!(
        "  {} {} -> {} ({})",
        log.direction.cyan(),
        log.from_number,
        log.to_number,
        log.medium.dimmed()
    );
    println!("  Status: {}  Duration: {}s", log.status.green(), log.duration);
    match (log.reference_entity, log.reference_id) {
        (Some(entity), Some(id)) => println!("  Linked: {} {}", entity.cyan(), id),
        _ => println!("  Linked: {}", "none".dimmed()),
    }

    Ok(())
}

async fn cmd_status(medium: Option<String>, settings: bool) -> Result<()> {
    let config = Config::load()?;
    let client = client(&config)?;
    let medium = config.resolve_medium(medium.as_deref());

    if settings {
        let s = client.get_settings(&medium).await?;
        println!("{} {}", s.medium.bold(), enabled_badge(s.enabled));
        println!("  Auth ID: {}", s.auth_id.as_deref().unwrap_or("-"));
        println!("  Base URL: {}", s.base_url.as_deref().unwrap_or("-"));
        println!("  Record calls: {}", s.record_calls);
        println!("  Queue: {}", s.queue_id.as_deref().unwrap_or("-"));
    } else {
        let status = client.get_status(&medium).await?;
        println!("{} {}", status.medium.bold(), enabled_badge(status.enabled));
    }

    Ok(())
}

async fn cmd_contact(phone: String) -> Result<()> {
    let config = Config::load()?;
    let client = client(&config)?;

    let matched = client.lookup_contact(&phone).await?;

    match matched.name {
        Some(name) => {
            println!("{} {}", phone.bold(), name.cyan());
            match (matched.reference_entity, matched.reference_id) {
                (Some(entity), Some(id)) => println!("  Links as: {} {}", entity.green(), id),
                _ => {}
            }
        }
        None => println!("No CRM record for {}", phone),
    }

    Ok(())
}

async fn cmd_queue(action: QueueAction) -> Result<()> {
    let config = Config::load()?;
    let client = client(&config)?;

    match action {
        QueueAction::Join { medium, agent } => {
            let medium = config.resolve_medium(medium.as_deref());
            let agent = required_agent(&config, agent.as_deref())?;
            let status = client.queue_join(&medium, &agent).await?;
            println!(
                "{} Joined queue {}",
                "✓".green(),
                status.queue_id.as_deref().unwrap_or("-").cyan()
            );
        }
        QueueAction::Leave { medium, agent } => {
            let medium = config.resolve_medium(medium.as_deref());
            let agent = required_agent(&config, agent.as_deref())?;
            client.queue_leave(&medium, &agent).await?;
            println!("{} Left the queue", "✓".green());
        }
        QueueAction::Status { medium, agent } => {
            let medium = config.resolve_medium(medium.as_deref());
            let agent = required_agent(&config, agent.as_deref())?;
            let status = client.queue_status(&medium, &agent).await?;
            if status.joined {
                println!(
                    "In queue {}",
                    status.queue_id.as_deref().unwrap_or("-").cyan()
                );
            } else {
                println!("Not in a queue");
            }
        }
    }

    Ok(())
}

fn enabled_badge(enabled: bool) -> colored::ColoredString {
    if enabled {
        "enabled".green()
    } else {
        "disabled".red()
    }
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    println!(
        "  Default Agent: {}",
        config.default_agent.as_deref().unwrap_or("None").cyan()
    );
    println!("  Default Medium: {}", config.default_medium.cyan());

    Ok(())
}
