use std::path::PathBuf;

use clap::{ArgAction, Parser};

use auto_annotate::AnnotateOptions;

#[derive(Parser)]
#[command(name = "auto-annotate")]
#[command(about = "Wrap known terms in rendered HTML with links and notes", long_about = None)]
pub struct Cli {
    /// Rendered HTML to annotate
    pub input: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON object of term -> URL
    #[arg(long)]
    pub links: Option<PathBuf>,

    /// JSON object of term -> tooltip text
    #[arg(long)]
    pub notes: Option<PathBuf>,

    /// Directory holding optional auto_links.json and auto_notes.json
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Escape & " < > in payloads
    #[arg(long)]
    pub escape_payloads: bool,

    /// Also match text inside tags (plain textual matching)
    #[arg(long)]
    pub allow_inside_markup: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> AnnotateOptions {
        AnnotateOptions::default()
            .with_skip_inside_markup(!self.allow_inside_markup)
            .with_escape_payloads(self.escape_payloads)
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
