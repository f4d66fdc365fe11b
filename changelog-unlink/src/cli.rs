use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use changelog_unlink::{StripConfig, output, strip_fs, strip_fs_with};
use clap::{ArgAction, Parser, ValueEnum};

use crate::logging;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One status line per changelog, printed as each file is processed.
    #[default]
    Human,
    /// The full run report as pretty JSON, printed once the scan finishes.
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "changelog-unlink",
    version,
    about = "Strip hyperlinks from version headings in CHANGELOG.md files"
)]
pub struct Cli {
    /// Directory to scan recursively
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    execute(&cli, &mut std::io::stdout().lock())
}

/// Run a scan for `cli`, writing status output to `out`.
///
/// Per-file failures are part of the output, not an error: only a root that
/// cannot be scanned at all (or a broken output stream) fails the run.
pub fn execute(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = StripConfig::for_root(&cli.root);

    match cli.format {
        OutputFormat::Human => {
            let mut write_result = Ok(());
            strip_fs_with(&config, |outcome| {
                if write_result.is_ok() {
                    write_result = output::write_outcome(outcome, out);
                }
            })?;
            write_result
        }
        OutputFormat::Json => {
            let report = strip_fs(&config)?;
            output::write_json(&report, out)
        }
    }
}
