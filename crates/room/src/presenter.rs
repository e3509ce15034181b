#![expect(clippy::print_stdout, reason = "CLI output is emitted here")]
#![expect(clippy::print_stderr, reason = "CLI output is emitted here")]

//! CLI output presenter.

use clap::ValueEnum;
use room_common::Colors;
use room_domain::Creature;
use serde::Serialize;

const PROGRAM_NAME: &str = "room";

/// Output format for CLI commands
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait Presenter {
    fn present_rendered(&self, source: &str, rendered: &str);

    fn present_progress(&self, fraction: f32, bar: &str);

    fn present_size(&self, bytes: u64, human: &str);

    fn present_check(&self, check: &CheckReport);

    fn present_creature(&self, creature: &Creature);

    fn present_error(&self, message: &str);
}

/// Outcome of a `check-*` command.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub check: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub passed: bool,
    pub message: String,
}

#[derive(Serialize)]
struct RenderedView<'a> {
    input: &'a str,
    output: &'a str,
}

#[derive(Serialize)]
struct ProgressView<'a> {
    fraction: f32,
    bar: &'a str,
}

#[derive(Serialize)]
struct SizeView<'a> {
    bytes: u64,
    human: &'a str,
}

#[derive(Serialize)]
struct CreatureView<'a> {
    #[serde(flatten)]
    creature: &'a Creature,
    coolness: i64,
    description: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn present_rendered(&self, _source: &str, rendered: &str) {
        println!("{rendered}");
    }

    fn present_progress(&self, _fraction: f32, bar: &str) {
        println!("{bar}");
    }

    fn present_size(&self, _bytes: u64, human: &str) {
        println!("{human}");
    }

    fn present_check(&self, check: &CheckReport) {
        if check.passed {
            println!("{} {}", Colors::success("✓"), check.message);
        } else {
            println!("{} {}", Colors::error("✗"), check.message);
        }
    }

    fn present_creature(&self, creature: &Creature) {
        println!("{creature}");
    }

    fn present_error(&self, message: &str) {
        eprintln!("{}: {} {}", PROGRAM_NAME, Colors::error("Error:"), message);
    }
}

pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn present_rendered(&self, source: &str, rendered: &str) {
        print_json(&RenderedView {
            input: source,
            output: rendered,
        });
    }

    fn present_progress(&self, fraction: f32, bar: &str) {
        print_json(&ProgressView { fraction, bar });
    }

    fn present_size(&self, bytes: u64, human: &str) {
        print_json(&SizeView { bytes, human });
    }

    fn present_check(&self, check: &CheckReport) {
        print_json(check);
    }

    fn present_creature(&self, creature: &Creature) {
        print_json(&CreatureView {
            creature,
            coolness: creature.coolness(),
            description: creature.to_string(),
        });
    }

    fn present_error(&self, message: &str) {
        let output = serde_json::json!({
            "success": false,
            "error": message
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
    }
}

pub fn create_presenter(format: OutputFormat) -> Box<dyn Presenter> {
    match format {
        OutputFormat::Json => Box::new(JsonPresenter),
        OutputFormat::Text => Box::new(TextPresenter),
    }
}
