//! Import runner
//!
//! Walks the script catalog in order and feeds every statement to the
//! executor, awaiting each before issuing the next.

use std::path::{Path, PathBuf};

use tracing::{error, info, instrument, warn};

use crate::catalog::ScriptCategory;
use crate::error::ImportError;
use crate::executor::StatementExecutor;
use crate::split::split_statements;

/// Longest statement prefix included in failure logs
const STATEMENT_PREVIEW_CHARS: usize = 80;

/// Outcome counters for one import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Scripts that were read and executed
    pub scripts_run: usize,
    /// Scripts that could not be read
    pub scripts_unreadable: usize,
    /// Statements the database accepted
    pub statements_ok: usize,
    /// Statements the database rejected
    pub statements_failed: usize,
}

impl ImportReport {
    /// Whether any script or statement failed
    pub fn has_failures(&self) -> bool {
        self.scripts_unreadable > 0 || self.statements_failed > 0
    }
}

/// Runs the fixed script lists against an executor
pub struct Importer<E> {
    executor: E,
    scripts_dir: PathBuf,
}

impl<E: StatementExecutor> Importer<E> {
    /// Create an importer reading scripts from `scripts_dir`
    pub fn new(executor: E, scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            executor,
            scripts_dir: scripts_dir.into(),
        }
    }

    /// Root directory the category folders are resolved against
    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    /// Run schema, data and constraint scripts in that order
    #[instrument(skip(self), fields(scripts_dir = %self.scripts_dir.display()))]
    pub async fn run(&self) -> ImportReport {
        let mut report = ImportReport::default();

        for category in ScriptCategory::ALL {
            self.run_category(category, &mut report).await;
        }

        info!(
            scripts_run = report.scripts_run,
            scripts_unreadable = report.scripts_unreadable,
            statements_ok = report.statements_ok,
            statements_failed = report.statements_failed,
            "Import finished"
        );

        report
    }

    /// Run every script of one category
    pub async fn run_category(&self, category: ScriptCategory, report: &mut ImportReport) {
        info!(category = %category, "Running scripts");

        for path in category.script_paths(&self.scripts_dir) {
            match read_script(&path).await {
                Ok(script) => {
                    self.run_script(&path, &script, report).await;
                    report.scripts_run += 1;
                }
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable script");
                    report.scripts_unreadable += 1;
                }
            }
        }
    }

    async fn run_script(&self, path: &Path, script: &str, report: &mut ImportReport) {
        info!(script = %path.display(), "Running script");

        for statement in split_statements(script) {
            match self.executor.execute(statement).await {
                Ok(_) => report.statements_ok += 1,
                Err(e) => {
                    error!(
                        script = %path.display(),
                        statement = %preview(statement),
                        error = %e,
                        "Statement failed"
                    );
                    report.statements_failed += 1;
                }
            }
        }
    }
}

async fn read_script(path: &Path) -> Result<String, ImportError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ImportError::read(path, e))
}

fn preview(statement: &str) -> String {
    let mut chars = statement.chars();
    let head: String = chars.by_ref().take(STATEMENT_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
