use anyhow::{Context, Result};
use caretsplit::cli::output::OutputFormat;
use caretsplit::{cli, logging, split, Config, SplitMode};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, Read};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "caretsplit")]
#[command(version, about = "Split a command line into words and find the word under the cursor", long_about = None)]
struct Cli {
    /// Text to split (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Cursor position (bytes for quoted mode, codepoints for non-ASCII plain mode)
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "cursor_end")]
    cursor: Option<isize>,

    /// Place the cursor at the end of the text (the default)
    #[arg(long)]
    cursor_end: bool,

    /// Splitting algorithm (quoted, plain)
    #[arg(short, long, env = "CARETSPLIT_MODE")]
    mode: Option<SplitMode>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "caretsplit", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.mode, cli.format, cli.no_color)?;
    debug!(?config, "configuration loaded");

    let text = match cli.text {
        Some(text) => text,
        None => read_stdin()?,
    };

    let cursor = match cli.cursor {
        Some(cursor) if !cli.cursor_end => cursor,
        _ => config.mode.end_offset(&text),
    };

    let result = split::split(config.mode, &text, cursor);
    debug!(mode = %config.mode, cursor, tokens = result.len(), "split complete");

    cli::output::print_split(&result, config.mode, cursor, config.color, &config.format)
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;

    // Drop the newline a shell pipe adds, nothing more.
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
