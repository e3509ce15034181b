#![expect(clippy::print_stdout, reason = "CLI output is emitted here")]

//! CLI application layer and composition root wiring.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use room_common::color_init;
use room_common::telemetry;
use tracing::debug;

use crate::commands::Cli;
use crate::commands::Commands;
use crate::error::CheckFailed;
use crate::error::CliError;
use crate::handlers;
use crate::handlers::HandlerContext;
use crate::presenter::create_presenter;

const PROGRAM_NAME: &str = "room";

/// Exit codes following sysexits.h conventions.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    /// A `check-*` command rejected its input.
    pub const CHECK_FAILED: i32 = 1;
    pub const USAGE: i32 = crate::handlers::EXIT_USAGE;
}

#[derive(Default)]
pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<i32> {
        let cli = Cli::parse();
        let _telemetry = telemetry::init_tracing(if cli.verbose { "debug" } else { "warn" });
        color_init(cli.no_color, cli.force_color);
        let format = cli.effective_format();
        debug!(command = ?cli.command, format = ?format, "CLI command parsed");

        let exit_code = match self.execute(&cli) {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => self.handle_error(e, &cli),
        };
        Ok(exit_code)
    }

    fn execute(&self, cli: &Cli) -> Result<()> {
        let ctx = HandlerContext::new(cli.effective_format());
        match &cli.command {
            Commands::Logo => handlers::handle_logo(&ctx),
            Commands::Colorize { text } => handlers::handle_colorize(&ctx, text),
            Commands::Progress { fraction } => handlers::handle_progress(&ctx, *fraction),
            Commands::Size { bytes } => handlers::handle_size(&ctx, *bytes),
            Commands::CheckEmail { address } => handlers::handle_check_email(&ctx, address),
            Commands::CheckPassword { password } => {
                handlers::handle_check_password(&ctx, password)
            }
            Commands::Creature(args) => handlers::handle_creature(&ctx, args),
            Commands::Completions { shell } => {
                let mut cmd = Cli::command();
                generate(*shell, &mut cmd, PROGRAM_NAME, &mut io::stdout());
                println!();
                Ok(())
            }
        }
    }

    fn handle_error(&self, e: anyhow::Error, cli: &Cli) -> i32 {
        if e.downcast_ref::<CheckFailed>().is_some() {
            return exit_codes::CHECK_FAILED;
        }

        if let Some(cli_error) = e.downcast_ref::<CliError>() {
            create_presenter(cli_error.format).present_error(&cli_error.message);
            return cli_error.exit_code;
        }

        create_presenter(cli.effective_format()).present_error(&format!("{e:#}"));
        exit_codes::GENERAL_ERROR
    }
}
