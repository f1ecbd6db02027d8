// Client Service — CLI Command Handlers
//
// Each function handles one CLI subcommand: open the database named by the
// configuration, run one operation, print the result as JSON. Only `add`
// builds a credential hasher; lookups go straight through `ClientReader`.

use std::io::Write;
use std::path::Path;

use uuid::Uuid;

use crate::config::Config;
use crate::credential::CredentialHasher;
use crate::error::{ClientServiceError, Result};
use crate::service::{ClientDto, ClientReader, ClientRequest, ClientService};
use crate::store::{Database, SqliteClientStore};

use super::{Cli, Commands};

/// Execute the parsed CLI, writing results to stdout.
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load();
    if let Some(db) = cli.db {
        config = config.with_database_path(db);
    }

    let stdout = std::io::stdout();
    run(cli.command, &config, &mut stdout.lock())
}

/// Run one command against the given configuration.
pub fn run(command: Commands, config: &Config, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Init => cmd_init(config, out),
        Commands::Add { username, password } => cmd_add(config, username, password, out),
        Commands::Get { id } => cmd_get(config, &id, out),
        Commands::Find { username } => cmd_find(config, &username, out),
        Commands::List => cmd_list(config, out),
    }
}

// ─── Init ────────────────────────────────────────────────────────────────────

fn cmd_init(config: &Config, out: &mut impl Write) -> Result<()> {
    let path = &config.database_path;
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    Database::open(path)?;

    writeln!(out, "✓ Client database initialized at {}", path.display())?;
    Ok(())
}

// ─── Add ─────────────────────────────────────────────────────────────────────

fn cmd_add(config: &Config, username: String, password: String, out: &mut impl Write) -> Result<()> {
    let db = open_db(&config.database_path)?;
    let service = ClientService::new(
        SqliteClientStore::new(&db),
        CredentialHasher::new(config.hashing)?,
    );

    let client = service.add_client(ClientRequest::new(username, password))?;
    print_json(out, &client)
}

// ─── Get / Find ──────────────────────────────────────────────────────────────

fn cmd_get(config: &Config, id: &str, out: &mut impl Write) -> Result<()> {
    let id = Uuid::parse_str(id)
        .map_err(|e| ClientServiceError::Other(format!("Invalid UUID: {}", e)))?;

    let db = open_db(&config.database_path)?;
    let store = SqliteClientStore::new(&db);
    let client = ClientReader::new(&store).get_by_id(&id)?;

    print_json(out, &ClientDto::from(client))
}

fn cmd_find(config: &Config, username: &str, out: &mut impl Write) -> Result<()> {
    let db = open_db(&config.database_path)?;
    let store = SqliteClientStore::new(&db);
    let client = ClientReader::new(&store).get_by_username(username)?;

    print_json(out, &ClientDto::from(client))
}

// ─── List ────────────────────────────────────────────────────────────────────

fn cmd_list(config: &Config, out: &mut impl Write) -> Result<()> {
    let db = open_db(&config.database_path)?;
    let store = SqliteClientStore::new(&db);
    let clients: Vec<ClientDto> = ClientReader::new(&store)
        .get_all()?
        .into_iter()
        .map(ClientDto::from)
        .collect();

    print_json(out, &clients)
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Open an existing client database.
fn open_db(path: &Path) -> Result<Database> {
    if !path.exists() {
        return Err(ClientServiceError::Other(format!(
            "Database not found at {}. Run `client-service init` first.",
            path.display()
        )));
    }
    Ok(Database::open(path)?)
}

fn print_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
