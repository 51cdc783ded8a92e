use crate::split::{Split, SplitMode};
use crate::Error;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    mode: SplitMode,
    cursor: isize,
    tokens: Vec<String>,
    selected: Option<usize>,
}

pub fn print_split(
    split: &Split,
    mode: SplitMode,
    cursor: isize,
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(split, colored_output),
        OutputFormat::Json => render_json(split, mode, cursor)?,
    };
    print!("{}", rendered);
    Ok(())
}

pub fn render_text(split: &Split, colored_output: bool) -> String {
    if split.is_empty() {
        return if colored_output {
            format!("{}\n", "(no tokens)".dimmed())
        } else {
            "(no tokens)\n".to_string()
        };
    }

    let mut out = String::new();
    for (index, token) in split.tokens.iter().enumerate() {
        let is_selected = split.selected == Some(index);
        let marker = if is_selected { ">" } else { " " };
        // Debug formatting keeps embedded whitespace visible.
        let shown = format!("{:?}", token);

        if colored_output && is_selected {
            let _ = writeln!(
                out,
                "{} {} {}",
                marker.green().bold(),
                index.to_string().blue().bold(),
                shown.green().bold()
            );
        } else if colored_output {
            let _ = writeln!(out, "{} {} {}", marker, index.to_string().blue(), shown);
        } else {
            let _ = writeln!(out, "{} {} {}", marker, index, shown);
        }
    }
    out
}

pub fn render_json(split: &Split, mode: SplitMode, cursor: isize) -> Result<String> {
    let output = JsonOutput {
        mode,
        cursor,
        tokens: split.tokens.clone(),
        selected: split.selected,
    };
    Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
}
