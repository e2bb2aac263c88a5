use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "healbuddy", version, about = "Terminal symptom checker")]
pub struct Cli {
    #[arg(long, global = true, help = "Check endpoint URL (overrides the config file)")]
    pub endpoint: Option<String>,
    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Interactive checker (default)
    Tui,
    /// Submit symptoms once and print the answer
    Check {
        #[arg(required = true, num_args = 1..)]
        symptoms: Vec<String>,
    },
    /// Probe the backend
    Status,
    /// List checks the backend has recorded
    History {
        #[arg(long, help = "Show at most this many entries")]
        limit: Option<usize>,
    },
    /// Write a config file with the default settings
    InitConfig {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::parse_from(["healbuddy"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_check_collects_words() {
        let cli = Cli::parse_from(["healbuddy", "check", "sore", "throat", "-vv"]);
        assert_eq!(
            cli.command,
            Some(Commands::Check {
                symptoms: vec!["sore".to_string(), "throat".to_string()]
            })
        );
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_global_endpoint() {
        let cli = Cli::parse_from(["healbuddy", "status", "--endpoint", "http://h:1/check"]);
        assert_eq!(cli.endpoint.as_deref(), Some("http://h:1/check"));
        assert_eq!(cli.command, Some(Commands::Status));
    }

    #[test]
    fn test_check_requires_symptoms() {
        assert!(Cli::try_parse_from(["healbuddy", "check"]).is_err());
    }
}
