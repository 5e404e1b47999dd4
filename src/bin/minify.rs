//! Inline an HTML page into a C++ source file for the firmware build.
//!
//! `webui-minify` with no arguments turns `index.html` into `index.cpp` in
//! the current directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use webui_dev::minify::minify;
use webui_dev::observability::init_logging;

#[derive(Parser)]
#[command(name = "webui-minify")]
#[command(about = "Collapse an HTML page into an aWOT P(index) string literal", long_about = None)]
struct Cli {
    /// HTML page to read
    #[arg(default_value = "index.html")]
    source: PathBuf,

    /// C++ file to (over)write
    #[arg(default_value = "index.cpp")]
    target: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging("info");

    match minify(&cli.source, &cli.target) {
        Ok(()) => {
            tracing::info!(
                source = %cli.source.display(),
                target = %cli.target.display(),
                "Wrote embedded page"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Minify failed");
            ExitCode::FAILURE
        }
    }
}
