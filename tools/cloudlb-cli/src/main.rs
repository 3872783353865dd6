//! cloudlb Command Line Tool
//!
//! Drives the session persistence operations against a live load balancer
//! API endpoint:
//! - enable: turn on session persistence for a load balancer
//! - get: show the current configuration
//! - disable: turn it off

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cloudlb_core::{EnableOpts, PersistenceType};
use cloudlb_http::{sessions, ServiceClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cloudlb")]
#[command(version)]
#[command(about = "Manage session persistence on a cloud load balancer")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Connection {
    /// Base API endpoint, e.g. https://lb.example.com/v1.0/1234
    #[arg(long, env = "CLOUDLB_ENDPOINT")]
    endpoint: String,

    /// Auth token, sent as X-Auth-Token
    #[arg(long, env = "CLOUDLB_TOKEN")]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enable session persistence for a load balancer
    Enable {
        #[command(flatten)]
        conn: Connection,

        /// Load balancer identifier
        #[arg(long)]
        lb_id: u64,

        /// Persistence type: HTTPCOOKIE or SOURCEIP
        #[arg(long, value_name = "TYPE")]
        persistence_type: String,
    },

    /// Show the session persistence configuration
    Get {
        #[command(flatten)]
        conn: Connection,

        /// Load balancer identifier
        #[arg(long)]
        lb_id: u64,
    },

    /// Disable session persistence for a load balancer
    Disable {
        #[command(flatten)]
        conn: Connection,

        /// Load balancer identifier
        #[arg(long)]
        lb_id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloudlb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Enable {
            conn,
            lb_id,
            persistence_type,
        } => handle_enable(&conn, lb_id, &persistence_type).await,
        Commands::Get { conn, lb_id } => handle_get(&conn, lb_id).await,
        Commands::Disable { conn, lb_id } => handle_disable(&conn, lb_id).await,
    }
}

fn build_client(conn: &Connection) -> Result<ServiceClient> {
    let client =
        ServiceClient::new(conn.endpoint.as_str()).context("Failed to build HTTP client")?;
    Ok(match &conn.token {
        Some(token) => client.with_token(token.as_str()),
        None => client,
    })
}

async fn handle_enable(conn: &Connection, lb_id: u64, persistence_type: &str) -> Result<()> {
    let client = build_client(conn)?;
    let opts = EnableOpts {
        persistence_type: Some(PersistenceType::from(persistence_type)),
    };

    let body = sessions::enable(&client, lb_id, &opts)
        .await
        .with_context(|| format!("Failed to enable session persistence on {}", lb_id))?;

    if body.is_null() {
        println!("Session persistence enabled");
    } else {
        println!("{}", serde_json::to_string_pretty(&body)?);
    }
    Ok(())
}

async fn handle_get(conn: &Connection, lb_id: u64) -> Result<()> {
    let client = build_client(conn)?;

    let config = sessions::get(&client, lb_id)
        .await
        .with_context(|| format!("Failed to fetch session persistence for {}", lb_id))?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

async fn handle_disable(conn: &Connection, lb_id: u64) -> Result<()> {
    let client = build_client(conn)?;

    sessions::disable(&client, lb_id)
        .await
        .with_context(|| format!("Failed to disable session persistence on {}", lb_id))?;

    println!("Session persistence disabled");
    Ok(())
}
