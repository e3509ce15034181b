#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Color markup, formatting and validation helpers for room.
//!
//! The centerpiece is [`colorize`], which turns `[[NAME]]` markers into ANSI
//! control codes from the [`ColorRegistry`].

mod color;
mod colorize;
mod error;
mod format;
mod logo;
pub mod registry;
mod string_utils;
pub mod telemetry;
mod validate;

pub use color::Colors;
pub use color::init as color_init;
pub use color::is_disabled as color_is_disabled;
pub use colorize::colorize;
pub use colorize::colorize_with;
pub use error::RegistryError;
pub use format::optimal_info_unit;
pub use format::progress_bar;
pub use logo::LOGO_SHAPE;
pub use logo::logo;
pub use logo::logo_markup;
pub use registry::ColorRegistry;
pub use registry::ColorSource;
pub use string_utils::strip_ansi_codes;
pub use validate::WEAK_PASSWORDS;
pub use validate::is_password_too_weak;
pub use validate::is_valid_email_address;
