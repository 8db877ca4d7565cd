//! Reviews importer entry point
//!
//! Run with:
//! ```bash
//! cargo run -p reviews-importer
//! ```
//!
//! Reads `DATABASE_URL` and `IMPORT_SCRIPTS_DIR` from the environment (and `.env`).

use reviews_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use reviews_db::{create_pool, PoolConfig};
use reviews_importer::{ImportError, Importer, PgStatementExecutor};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Import aborted");
        eprintln!("Import aborted: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().map_err(ImportError::from)?;

    // Statement failures are diagnostics; keep them on stderr
    let tracing_config = TracingConfig::for_environment(config.app.env).with_stderr();
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        scripts_dir = %config.import.scripts_dir.display(),
        "Starting import"
    );

    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(ImportError::from)?;

    let importer = Importer::new(PgStatementExecutor::new(pool), config.import.scripts_dir);
    let report = importer.run().await;

    if report.has_failures() {
        warn!(
            scripts_unreadable = report.scripts_unreadable,
            statements_failed = report.statements_failed,
            "Import completed with failures"
        );
    }

    Ok(())
}
