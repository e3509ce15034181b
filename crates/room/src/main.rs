//! CLI entrypoint for room.

use anyhow::Result;
use room::Application;

fn main() -> Result<()> {
    let app = Application::new();
    let exit_code = app.run()?;
    std::process::exit(exit_code);
}
