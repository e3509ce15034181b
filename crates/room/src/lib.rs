#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Command-line front end for the room utilities.

pub mod app;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod presenter;

pub use app::Application;
pub use error::CheckFailed;
pub use error::CliError;
pub use handlers::HandlerResult;
