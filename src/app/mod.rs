//! Application layer.
//!
//! # Structure
//!
//! - `generator` / `worksheet` - the worksheet data model
//! - `settings` - persisted page setup and app configuration
//! - `export` - PDF assembly over the `PageRasterizer` seam
//! - `state` - main application coordinator
//! - `messages` / `error` - channel messages and error types

pub mod error;
pub mod export;
pub mod generator;
pub mod messages;
pub mod settings;
pub mod state;
pub mod worksheet;

// Re-exports for convenient external access
pub use error::{AppError, Result};
pub use export::{ExportSummary, PageRasterizer, WORKSHEET_FILE_NAME};
pub use generator::{Operator, Problem};
pub use messages::Message;
pub use settings::{AppSettings, PageSettings, PageSize};
pub use worksheet::{Page, Worksheet};
