use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sport-events")]
#[command(author = "Sport Events Team")]
#[command(version = "0.1.0")]
#[command(about = "Sport event lifecycle service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding default.toml and per-environment overrides
    #[arg(short, long, default_value = "config", env = "SPORT_EVENTS_CONFIG_DIR")]
    pub config_dir: PathBuf,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Override the configured listen port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Apply database migrations and exit
    Migrate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["sport-events"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config_dir, PathBuf::from("config"));
    }

    #[test]
    fn test_serve_with_port_override() {
        let cli =
            Cli::try_parse_from(["sport-events", "--config-dir", "/etc/se", "serve", "--port", "9000"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Serve { port: Some(9000) }));
        assert_eq!(cli.config_dir, PathBuf::from("/etc/se"));
    }

    #[test]
    fn test_migrate_subcommand() {
        let cli = Cli::try_parse_from(["sport-events", "migrate"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Migrate));
    }
}
