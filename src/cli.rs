//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Browse and select Art Institute of Chicago artworks", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Collection endpoint, overriding the config file
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Rows per page, overriding the config file
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive table (default)
    Tui,
    /// Print one page of artworks (0-based index)
    Page { index: u32 },
    /// Select the first COUNT artworks across pages and print their ids
    Select {
        #[arg(allow_hyphen_values = true)]
        count: String,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Write a config file with the default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("artable").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_overrides() {
        let cli = parse(&["--url", "http://localhost:9000/artworks", "page", "2", "--page-size", "5"]);
        assert_eq!(cli.url.as_deref(), Some("http://localhost:9000/artworks"));
        assert_eq!(cli.page_size, Some(5));
        assert_eq!(cli.command, Some(Command::Page { index: 2 }));
    }

    #[test]
    fn test_select_accepts_raw_text() {
        let cli = parse(&["select", "-3"]);
        assert_eq!(
            cli.command,
            Some(Command::Select {
                count: "-3".to_string()
            })
        );
    }

    #[test]
    fn test_config_subcommands() {
        let cli = parse(&["config", "init", "--force"]);
        assert_eq!(
            cli.command,
            Some(Command::Config {
                action: ConfigCommand::Init { force: true }
            })
        );

        let cli = parse(&["config", "path"]);
        assert_eq!(
            cli.command,
            Some(Command::Config {
                action: ConfigCommand::Path
            })
        );
    }

    #[test]
    fn test_invalid_page_index_rejected() {
        assert!(Cli::try_parse_from(["artable", "page", "abc"]).is_err());
    }
}
