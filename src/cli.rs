use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ScrollerOverrides;

#[derive(Parser, Debug)]
#[command(name = "scroller")]
#[command(about = "A bidirectional infinite scroller for the terminal", long_about = None)]
pub struct Cli {
    /// Theme name or path to a TOML theme file
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Force dark mode (overrides auto-detection)
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Force light mode (overrides auto-detection)
    #[arg(long, conflicts_with = "dark")]
    pub light: bool,

    /// Custom config directory (default: ~/.config/scroller)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose logging (prints log path, sets DEBUG level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of rows mounted at once
    #[arg(long, value_name = "N")]
    pub total_items: Option<usize>,

    /// Rows added and removed per slide
    #[arg(long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Row height in pixels
    #[arg(long, value_name = "PX")]
    pub row_height: Option<u32>,

    /// Distance from either edge that triggers a slide, in pixels
    #[arg(long, value_name = "PX")]
    pub edge_threshold: Option<u32>,

    /// Pixels per terminal line
    #[arg(long, value_name = "PX")]
    pub line_height: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn overrides(&self) -> ScrollerOverrides {
        ScrollerOverrides {
            total_items: self.total_items,
            load_batch_size: self.batch_size,
            row_height: self.row_height,
            edge_threshold: self.edge_threshold,
            line_height: self.line_height,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage themes
    Theme(ThemeArgs),
    /// Inspect or create the settings file
    Config(ConfigArgs),
    /// Scroll to each offset headlessly and print the slides it causes
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommands,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// List available themes
    List {
        /// Show detailed information about each theme
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show a theme's configuration
    Show {
        /// Theme name to show
        name: String,

        /// Output format (toml or json)
        #[arg(short, long, default_value = "toml")]
        format: OutputFormat,
    },
    /// Show path where custom themes can be placed
    Path,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective scroller configuration
    Show {
        /// Output format (toml or json)
        #[arg(short, long, default_value = "toml")]
        format: OutputFormat,
    },
    /// Show the settings file path
    Path,
    /// Write the effective configuration to the settings file
    Init {
        /// Replace an existing settings file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Terminal lines given to the list
    #[arg(short, long, default_value_t = 20)]
    pub lines: u16,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    pub format: TraceFormat,

    /// Offsets to scroll to, in pixels, in order
    #[arg(required = true, value_name = "OFFSET")]
    pub offsets: Vec<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {s}. Use 'toml' or 'json'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraceFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for TraceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {s}. Use 'text' or 'json'")),
        }
    }
}
