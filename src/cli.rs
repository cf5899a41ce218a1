use std::{net::IpAddr, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use afg_application::prelude as flows;
use afg_core::{
    entities::{EmailAddress, Role},
    repositories::UserRepo as _,
    usecases,
};
use afg_db_sqlite::Connections;
use afg_webserver as webserver;

use crate::config;

const DEFAULT_CONFIG_FILE: &str = "askforge.toml";

#[derive(Debug, Parser)]
#[command(name = "askforge", version, about = "A Q&A community web application")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// URL of the SQLite database (overrides the configuration file)
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Port to listen on (overrides the configuration file)
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create an administrator account or promote an existing user
    CreateAdmin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        /// Only required when the account does not exist yet
        #[arg(long)]
        password: Option<String>,
    },
}

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let mut cfg = config::load(&args.config)?;

    if let Ok(db_url) = std::env::var("DATABASE_URL") {
        cfg.database.url = db_url;
    }
    if let Some(db_url) = args.db_url {
        cfg.database.url = db_url;
    }
    if let Some(port) = args.port {
        cfg.web.port = port;
    }
    if args.enable_cors {
        cfg.web.enable_cors = true;
    }

    log::info!("Opening database {}", cfg.database.url);
    let connections = Connections::init(&cfg.database.url, cfg.database.pool_size)?;
    afg_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    match args.command {
        Some(Command::CreateAdmin {
            email,
            username,
            password,
        }) => create_admin(&connections, &email, &username, password),
        None => serve(connections, cfg).await,
    }
}

async fn serve(connections: Connections, cfg: config::Config) -> Result<()> {
    let address: IpAddr = cfg
        .web
        .address
        .parse()
        .with_context(|| format!("Invalid listen address: {}", cfg.web.address))?;
    let web_cfg = webserver::Cfg {
        instance_name: cfg.web.instance_name,
    };
    webserver::run(
        connections,
        (address, cfg.web.port).into(),
        cfg.web.enable_cors,
        web_cfg,
    )
    .await;
    Ok(())
}

fn create_admin(
    connections: &Connections,
    email: &str,
    username: &str,
    password: Option<String>,
) -> Result<()> {
    let email: EmailAddress = email
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid email address"))?;
    let existing = connections.shared()?.try_get_user_by_email(&email)?;
    let mut user = match existing {
        Some(user) => user,
        None => {
            let password =
                password.context("A password is required to create a new admin account")?;
            flows::register_user(
                connections,
                usecases::NewUser {
                    name: username.to_string(),
                    username: username.to_string(),
                    email,
                    password,
                },
            )
            .map_err(|err| anyhow::anyhow!("Unable to create the account: {err}"))?
        }
    };
    user.role = Role::Admin;
    connections.exclusive()?.update_user(&user)?;
    log::info!("User {} is now an administrator", user.username);
    Ok(())
}
