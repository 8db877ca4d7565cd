//! # reviews-importer
//!
//! Seeds the reviews schema by running fixed lists of SQL scripts: table
//! definitions, bulk data loads, then referential constraints.
//!
//! Statements are executed one at a time, in file order. A failing
//! statement or an unreadable script is logged and skipped; the run always
//! goes to the end and reports what happened.
//!
//! ```rust,ignore
//! use reviews_importer::{Importer, PgStatementExecutor};
//!
//! let report = Importer::new(PgStatementExecutor::new(pool), "scripts").run().await;
//! ```

pub mod catalog;
pub mod error;
pub mod executor;
pub mod runner;
pub mod split;

pub use catalog::ScriptCategory;
pub use error::ImportError;
pub use executor::{PgStatementExecutor, StatementExecutor};
pub use runner::{ImportReport, Importer};
pub use split::split_statements;
