#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "potential-jobs")]
#[command(about = "Keep a list of potential employers")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding the saved jobs (overrides storage.data_dir)
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Keep jobs in memory only; nothing is saved
    #[arg(long)]
    pub ephemeral: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List jobs in the order they were added
    List,
    /// Add a company to the end of the list
    Add {
        company: String,
    },
    /// Remove the job at a zero-based position
    Remove {
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },
    /// Show the details of the job at a zero-based position
    Show {
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },
}

#[cfg(feature = "cli")]
impl Command {
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Add { .. } | Command::Remove { .. })
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 讀取設定檔並套用命令列覆蓋
    pub fn resolve(&self) -> crate::Result<toml_config::AppConfig> {
        let mut config = match &self.config {
            Some(path) => toml_config::AppConfig::from_file(path)?,
            None => toml_config::AppConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = data_dir.clone();
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = CliConfig::parse_from(["potential-jobs", "add", "Acme Corp"]);
        assert_eq!(
            cli.command,
            Command::Add {
                company: "Acme Corp".to_string()
            }
        );
        assert!(cli.command.is_mutating());

        let cli = CliConfig::parse_from(["potential-jobs", "--ephemeral", "remove", "-1"]);
        assert!(cli.ephemeral);
        assert_eq!(cli.command, Command::Remove { position: -1 });

        let cli = CliConfig::parse_from(["potential-jobs", "list"]);
        assert!(!cli.command.is_mutating());
    }

    #[test]
    fn test_data_dir_flag_overrides_default() {
        let cli = CliConfig::parse_from(["potential-jobs", "--data-dir", "/tmp/jobs", "list"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.data_dir(), "/tmp/jobs");
        assert_eq!(config.entity(), "Job");
    }
}
