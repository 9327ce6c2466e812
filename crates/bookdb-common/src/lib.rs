//! bookdb common library
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
//!
//! Ambient plumbing shared by the bookdb workspace members.
//!
//! - **Logging**: `tracing` subscriber setup driven by `LOG_*` environment variables
//!
//! # Example
//!
//! ```no_run
//! use bookdb_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&LogConfig::from_env()?)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod logging;

pub use logging::{init_logging, LogConfig};
