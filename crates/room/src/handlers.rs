//! One handler per subcommand. Handlers compute with the library crates and
//! leave all printing to the presenter.

use anyhow::Result;
use room_common::Colors;
use room_domain::Creature;
use tracing::debug;

use crate::commands::CreatureArgs;
use crate::error::CheckFailed;
use crate::error::CliError;
use crate::presenter::CheckReport;
use crate::presenter::OutputFormat;
use crate::presenter::Presenter;

pub type HandlerResult = Result<()>;

/// sysexits.h `EX_USAGE`
pub const EXIT_USAGE: i32 = 64;

pub struct HandlerContext {
    pub format: OutputFormat,
    presenter: Box<dyn Presenter>,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            presenter: crate::presenter::create_presenter(format),
        }
    }

    pub fn with_presenter(format: OutputFormat, presenter: Box<dyn Presenter>) -> Self {
        Self { format, presenter }
    }

    pub fn presenter(&self) -> &dyn Presenter {
        self.presenter.as_ref()
    }
}

pub fn handle_logo(ctx: &HandlerContext) -> HandlerResult {
    let markup = room_common::logo_markup();
    ctx.presenter().present_rendered(&markup, &Colors::markup(&markup));
    Ok(())
}

pub fn handle_colorize(ctx: &HandlerContext, words: &[String]) -> HandlerResult {
    let source = words.join(" ");
    let rendered = Colors::markup(&source);
    debug!(input_len = source.len(), output_len = rendered.len(), "colorized text");
    ctx.presenter().present_rendered(&source, &rendered);
    Ok(())
}

pub fn handle_progress(ctx: &HandlerContext, fraction: f32) -> HandlerResult {
    if !fraction.is_finite() {
        return Err(CliError::new(
            ctx.format,
            format!("Progress must be a finite number, got {fraction}"),
            EXIT_USAGE,
        )
        .into());
    }
    let bar = room_common::progress_bar(fraction);
    ctx.presenter().present_progress(fraction, &bar);
    Ok(())
}

pub fn handle_size(ctx: &HandlerContext, bytes: u64) -> HandlerResult {
    let human = room_common::optimal_info_unit(bytes);
    ctx.presenter().present_size(bytes, &human);
    Ok(())
}

pub fn handle_check_email(ctx: &HandlerContext, address: &str) -> HandlerResult {
    let passed = room_common::is_valid_email_address(address);
    let message = if passed {
        format!("{address} is a valid email address")
    } else {
        format!("{address} is not a valid email address")
    };
    report_check(
        ctx,
        CheckReport {
            check: "email",
            subject: Some(address.to_string()),
            passed,
            message,
        },
    )
}

pub fn handle_check_password(ctx: &HandlerContext, password: &str) -> HandlerResult {
    let passed = !room_common::is_password_too_weak(password);
    let message = if passed {
        "Password is not on the weak-password list".to_string()
    } else {
        "Password is too weak".to_string()
    };
    report_check(
        ctx,
        CheckReport {
            check: "password",
            subject: None,
            passed,
            message,
        },
    )
}

fn report_check(ctx: &HandlerContext, report: CheckReport) -> HandlerResult {
    ctx.presenter().present_check(&report);
    if report.passed {
        Ok(())
    } else {
        Err(CheckFailed.into())
    }
}

pub fn handle_creature(ctx: &HandlerContext, args: &CreatureArgs) -> HandlerResult {
    let creature = build_creature(ctx.format, args)?;
    debug!(coolness = creature.coolness(), "built creature");
    ctx.presenter().present_creature(&creature);
    Ok(())
}

fn build_creature(format: OutputFormat, args: &CreatureArgs) -> Result<Creature, CliError> {
    let mut creature = match (args.width, args.height) {
        (Some(width), Some(height)) => {
            if width < 0 || height < 0 {
                return Err(CliError::new(
                    format,
                    format!("Creature size must not be negative, got {width} x {height}"),
                    EXIT_USAGE,
                ));
            }
            Creature::sized(args.x, args.y, width, height)
        }
        _ => Creature::new(args.x, args.y),
    };
    if let Some(name) = &args.name {
        creature.set_name(name.as_str());
    }
    Ok(creature)
}
