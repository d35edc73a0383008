//! Command line interface of doryctl
//!
//! - `def get`: show project definitions
//! - `completions`: generate shell completions

pub mod completions;
pub mod def_get;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use doryctl::infrastructure::{Config, init_logging};

/// CLI arguments for doryctl
#[derive(Parser, Debug)]
#[command(name = "doryctl")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every command; they override the config file
#[derive(clap::Args, Debug, Clone, Default)]
struct GlobalArgs {
    /// Config file (default: $HOME/.doryctl/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Platform server URL
    #[arg(long, global = true, value_name = "URL")]
    server_url: Option<String>,

    /// Access token
    #[arg(long, global = true)]
    token: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long, global = true)]
    insecure: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Print debug logs to stderr
    #[arg(long, global = true)]
    debug: bool,
}

impl GlobalArgs {
    /// Loads the config file, then applies environment and flag overrides
    fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())
            .context("Failed to load config")?
            .with_env_overrides()
            .context("Failed to apply environment overrides")?;

        if let Some(server_url) = &self.server_url {
            config.server_url.clone_from(server_url);
        }
        if let Some(token) = &self.token {
            config.access_token.clone_from(token);
        }
        if self.insecure {
            config.insecure = true;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if self.debug {
            config.log_level = "debug".to_string();
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage project definitions
    Def {
        #[command(subcommand)]
        command: DefCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: ShellArg,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum DefCommand {
    /// Get project definitions
    ///
    /// Without kinds a project summary is shown.
    Get(def_get::DefGetArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl From<ShellArg> for clap_complete::Shell {
    fn from(shell: ShellArg) -> Self {
        match shell {
            ShellArg::Bash => Self::Bash,
            ShellArg::Zsh => Self::Zsh,
            ShellArg::Fish => Self::Fish,
            ShellArg::PowerShell => Self::PowerShell,
        }
    }
}

/// Parse and execute CLI arguments
pub fn run() -> Result<()> {
    let args = Args::parse();
    if args.global.debug {
        init_logging("debug");
    }

    match &args.command {
        Command::Def {
            command: DefCommand::Get(get),
        } => {
            let config = args.global.load_config()?;
            if config.logging_enabled() {
                init_logging(&config.log_level);
            }
            def_get::run(get, &config)?;
        }
        Command::Completions { shell, output } => {
            let completions = completions::generate_completions((*shell).into())?;

            if let Some(output_path) = output {
                completions::save_completions(&completions, output_path)?;
            } else {
                println!("{completions}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_def_get() {
        let args = Args::try_parse_from([
            "doryctl",
            "def",
            "get",
            "test-project1",
            "build,deploy",
            "--module",
            "tp1-go-demo,tp1-gin-demo",
            "--env=test",
            "-o",
            "yaml",
            "--full",
        ])
        .unwrap();

        let Command::Def {
            command: DefCommand::Get(get),
        } = args.command
        else {
            panic!("expected def get");
        };
        assert_eq!(get.project_name.as_deref(), Some("test-project1"));
        assert_eq!(get.kinds.as_deref(), Some("build,deploy"));
        assert_eq!(get.modules, vec!["tp1-go-demo", "tp1-gin-demo"]);
        assert_eq!(get.envs, vec!["test"]);
        assert_eq!(get.output.as_deref(), Some("yaml"));
        assert!(get.full);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "doryctl",
            "def",
            "get",
            "test-project1",
            "--server-url",
            "http://localhost:9000",
            "--timeout",
            "10",
            "--insecure",
        ])
        .unwrap();
        assert_eq!(args.global.server_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(args.global.timeout, Some(10));
        assert!(args.global.insecure);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "server_url: http://from-file\ntimeout_secs: 3\n").unwrap();

        let global = GlobalArgs {
            config: Some(path),
            server_url: Some("http://from-flag".to_string()),
            debug: true,
            ..GlobalArgs::default()
        };
        let config = global.load_config().unwrap();
        assert_eq!(config.server_url, "http://from-flag");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_completions() {
        let args = Args::try_parse_from(["doryctl", "completions", "bash"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Completions {
                shell: ShellArg::Bash,
                output: None
            }
        ));
    }
}
