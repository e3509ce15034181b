use clap::Args;
use clap::Parser;
use clap::Subcommand;
pub use clap_complete::Shell;

use crate::presenter::OutputFormat;

const AFTER_HELP: &str =
    "Use --help for full details and examples. Use --format json for machine-readable output.";

const AFTER_LONG_HELP: &str = r#"MARKUP:
    Text passed to 'colorize' may contain [[NAME]] markers, for example
    [[RED]], [[bright_blue]] or [[BG_WHITE]]. Names are case-insensitive.
    Unknown names are printed as-is. Output always ends with a reset code.

EXAMPLES:
    room logo
    room colorize "[[GREEN]]ok[[RESET]] and [[RED]]failed"
    room progress 0.42
    room size 134217728
    room check-email david@example.com
    room creature --x 3 --y 4 --name Barsik --format json"#;

#[derive(Parser)]
#[command(name = "room")]
#[command(author, version, propagate_version = true)]
#[command(about = "Colored console text and small helpers for the room simulation")]
#[command(after_help = AFTER_HELP)]
#[command(after_long_help = AFTER_LONG_HELP)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json)
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        value_name = "FORMAT",
        env = "ROOM_FORMAT",
        default_value_t = OutputFormat::Text,
        help_heading = "Output Options"
    )]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, global = true, help_heading = "Output Options")]
    pub json: bool,

    /// Disable colored output (also respects NO_COLOR)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help_heading = "Output Options"
    )]
    pub no_color: bool,

    /// Emit color codes even when stdout is not a terminal
    #[arg(
        long,
        global = true,
        conflicts_with = "no_color",
        help_heading = "Output Options"
    )]
    pub force_color: bool,

    /// Log debug events to stderr
    #[arg(short, long, global = true, help_heading = "Debug Options")]
    pub verbose: bool,
}

impl Cli {
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the colored banner
    Logo,

    /// Replace [[NAME]] markers with terminal color codes
    Colorize {
        /// Text to render; several arguments are joined with spaces
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Render a progress bar for a fraction between 0 and 1
    Progress {
        #[arg(value_name = "FRACTION", allow_negative_numbers = true)]
        fraction: f32,
    },

    /// Format a byte count with a binary unit
    Size {
        #[arg(value_name = "BYTES")]
        bytes: u64,
    },

    /// Check that an email address is well-formed (exit 1 if not)
    CheckEmail {
        #[arg(value_name = "ADDRESS")]
        address: String,
    },

    /// Check a password against the weak-password list (exit 1 if weak)
    CheckPassword {
        #[arg(value_name = "PASSWORD")]
        password: String,
    },

    /// Describe a creature
    Creature(CreatureArgs),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Args)]
pub struct CreatureArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub x: i32,

    #[arg(long, allow_negative_numbers = true)]
    pub y: i32,

    #[arg(long, requires = "height", allow_negative_numbers = true)]
    pub width: Option<i32>,

    #[arg(long, requires = "width", allow_negative_numbers = true)]
    pub height: Option<i32>,

    #[arg(long)]
    pub name: Option<String>,
}
