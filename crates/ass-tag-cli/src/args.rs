//! Command-line argument definitions for the `ass-tags` tool.
//!
//! Every subcommand reads dialogue text, one line per dialogue, from a file
//! or from stdin when no file is given.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use log::LevelFilter;

/// Inspect and rewrite ASS override tags
#[derive(Parser, Debug)]
#[command(name = "ass-tags", author, version, about, long_about = None)]
pub struct Args {
    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Log level selected by the `-v` count; warnings are always shown
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the parsed items of each line
    Parse {
        /// Print JSON instead of the debug representation
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        input: Input,
    },
    /// Rewrite each line in canonical form
    Normalize {
        #[command(flatten)]
        input: Input,
    },
    /// Print each line with tags, comments and drawings removed
    Plain {
        #[command(flatten)]
        input: Input,
    },
    /// Report the font faces the lines select, as JSON
    Fonts {
        /// Font name in effect at the start of each line
        #[arg(long, default_value = "Arial")]
        font: String,

        /// Lines start out bold
        #[arg(long)]
        bold: bool,

        /// Lines start out italic
        #[arg(long)]
        italic: bool,

        #[command(flatten)]
        input: Input,
    },
}

impl Command {
    /// Input source shared by all subcommands
    #[must_use]
    pub const fn input(&self) -> &Input {
        match self {
            Self::Parse { input, .. }
            | Self::Normalize { input }
            | Self::Plain { input }
            | Self::Fonts { input, .. } => input,
        }
    }
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct Input {
    /// File with one dialogue text per line; stdin when omitted
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        let args = Args::parse_from(["ass-tags", "plain"]);
        assert_eq!(args.log_level(), LevelFilter::Warn);
        let args = Args::parse_from(["ass-tags", "-vv", "plain"]);
        assert_eq!(args.log_level(), LevelFilter::Debug);
        let args = Args::parse_from(["ass-tags", "plain", "-vvvv"]);
        assert_eq!(args.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn fonts_defaults() {
        let args = Args::parse_from(["ass-tags", "fonts", "lines.txt"]);
        let Command::Fonts {
            font,
            bold,
            italic,
            input,
        } = args.command
        else {
            panic!("expected fonts command");
        };
        assert_eq!(font, "Arial");
        assert!(!bold && !italic);
        assert_eq!(input.file, Some(PathBuf::from("lines.txt")));
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
