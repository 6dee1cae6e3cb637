//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider
//!                → FileExporter → toolshelf-otlp.json
//! ```
//!
//! Traces land in the data directory (see [`crate::infrastructure::data_dir`])
//! as one OTLP JSON document per line. The file rotates at 8 MB and keeps three
//! backups.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: provider and span exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE};
