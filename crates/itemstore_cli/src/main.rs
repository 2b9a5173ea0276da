//! Item store server entry point.
//!
//! # Responsibility
//! - Parse flags/environment into server configuration.
//! - Initialize logging, then hand control to the HTTP server.

use clap::Parser;
use itemstore_core::{core_version, default_log_level, init_logging};
use itemstore_http::{HttpServer, HttpServerConfig};
use log::error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "itemstore", version, about = "Item record service over SQLite")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "ITEMSTORE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(long, env = "ITEMSTORE_PORT", default_value_t = 8000)]
    port: u16,

    /// SQLite database file, created on first start
    #[arg(long, env = "ITEMSTORE_DB_PATH", default_value = "items.sqlite3")]
    db_path: PathBuf,

    /// trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, env = "ITEMSTORE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long, env = "ITEMSTORE_LOG_DIR", default_value = "logs")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_dir = match absolute_dir(&cli.log_dir) {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("itemstore: cannot resolve log dir: {err}");
            return ExitCode::FAILURE;
        }
    };
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
        eprintln!("itemstore: {err}");
        return ExitCode::FAILURE;
    }

    let config = HttpServerConfig {
        host: cli.host,
        port: cli.port,
        db_path: cli.db_path,
    };
    println!(
        "itemstore {} listening on http://{}",
        core_version(),
        config.socket_addr()
    );

    match HttpServer::with_config(config).start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_start module=cli status=error error={err}");
            eprintln!("itemstore: {err}");
            ExitCode::FAILURE
        }
    }
}

fn absolute_dir(dir: &Path) -> std::io::Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(dir))
    }
}
