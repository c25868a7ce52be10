//! Command-line interface definition and argument parsing.
//!
//! This module defines all subcommands and their options using the
//! [clap](https://docs.rs/clap/) library. Helper methods accept a
//! [`FileConfig`] reference so that config-file values act as defaults that
//! CLI arguments can override (layered config).

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;

use leafutils::config::file::{FileConfig, expand_tilde};
use leafutils::config::SizeOptions;
use leafutils::shell::DEFAULT_SHELL;
use leafutils::size::Units;

/// Options shared by every command that prints a size.
#[derive(Args, Debug)]
pub struct SizeFormatArgs {
    /// Unit system for display: iec (KiB, MiB, ...) or si (KB, MB, ...)
    ///
    /// Defaults to the config file value, then to iec.
    #[arg(short = 'u', long, value_enum)]
    units: Option<Units>,

    /// Shorthand for --units si
    #[arg(long, conflicts_with = "units")]
    si: bool,

    /// Digits after the decimal point
    ///
    /// Plain byte counts are always printed without a fractional part.
    /// Defaults to the config file value, then to 1.
    #[arg(short = 'p', long)]
    precision: Option<usize>,
}

impl SizeFormatArgs {
    /// Resolve the formatting options: CLI > config file > default.
    #[must_use]
    pub fn size_options(&self, config: &FileConfig) -> SizeOptions {
        let units = if self.si { Some(Units::Si) } else { self.units };
        SizeOptions::resolve(units, self.precision, config)
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format byte counts or size strings ("4488998912", "1.5GiB") for humans
    Size {
        /// Byte counts or size strings to format
        #[arg(required = true, num_args = 1..)]
        sizes: Vec<String>,

        #[command(flatten)]
        format: SizeFormatArgs,
    },

    /// Print the total size of files below each path
    Du {
        /// Paths to measure (defaults to the config file `[du] dir`, then `.`)
        #[arg(num_args = 0..)]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        format: SizeFormatArgs,
    },

    /// Show a passwd entry (by name or uid; defaults to the current user)
    User {
        /// User name or numeric uid
        user: Option<String>,
    },

    /// Show a group entry (by name or gid; defaults to the current group)
    Group {
        /// Group name or numeric gid
        group: Option<String>,
    },

    /// Run a command through a shell and report its output and exit status
    Exec {
        /// Command line passed to `<shell> -c`
        command: String,

        /// Shell to use (defaults to the config file value, then bash)
        #[arg(long)]
        shell: Option<String>,

        /// Text written to the command's standard input
        #[arg(long)]
        input: Option<String>,
    },

    /// Print a random integer in MIN..=MAX
    #[command(allow_negative_numbers = true)]
    Rand {
        /// Lower bound (inclusive)
        min: i64,

        /// Upper bound (inclusive)
        max: i64,
    },

    /// Change permission bits of files
    Chmod {
        /// Octal mode, e.g. 644 or 0755
        mode: String,

        /// Files to change
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Test names against a shell wildcard pattern; exits 1 if any fails to match
    Match {
        /// Wildcard pattern (`*`, `?`, `[...]`)
        pattern: String,

        /// Names to test
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "leafutils")]
#[command(
    about = "Human-readable byte sizes, passwd/group lookups, permission changes and shell execution"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output results as JSON for scripting/piping
    #[arg(long, global = true)]
    json: bool,

    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Log level selected by the number of `-v` flags.
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

/// Resolve the paths for `du`: CLI > config file `[du] dir` > current directory.
///
/// Tilde expansion is applied to the path from the config file.
#[must_use]
pub fn du_paths(paths: &[PathBuf], config: &FileConfig) -> Vec<PathBuf> {
    if !paths.is_empty() {
        return paths.to_vec();
    }

    config
        .du
        .dir
        .as_ref()
        .map_or_else(|| vec![PathBuf::from(".")], |dir| vec![expand_tilde(dir)])
}

/// Resolve the shell for `exec`: CLI > config file > [`DEFAULT_SHELL`].
#[must_use]
pub fn exec_shell(shell: Option<&str>, config: &FileConfig) -> String {
    shell
        .or(config.exec.shell.as_deref())
        .unwrap_or(DEFAULT_SHELL)
        .to_string()
}

/// Parse an octal permission mode such as `644`, `0755` or `0o600`.
///
/// # Errors
///
/// Returns an error if the string is not octal or exceeds `0o7777`.
pub fn parse_mode(mode: &str) -> Result<u32> {
    let digits = mode.strip_prefix("0o").unwrap_or(mode);
    let Ok(value) = u32::from_str_radix(digits, 8) else {
        bail!("Invalid octal mode: {mode}");
    };
    if value > 0o7777 {
        bail!("Mode out of range: {mode}");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_command() {
        let cli = Cli::parse_from(["leafutils", "size", "4488998912", "--si", "-p", "2"]);
        let Commands::Size { sizes, format } = cli.command else {
            panic!("expected size command");
        };

        assert_eq!(sizes, vec!["4488998912".to_string()]);
        let options = format.size_options(&FileConfig::default());
        assert_eq!(options.units, Units::Si);
        assert_eq!(options.precision, 2);
    }

    #[test]
    fn test_si_conflicts_with_units() {
        let result = Cli::try_parse_from(["leafutils", "size", "1", "--si", "--units", "iec"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_size_requires_an_argument() {
        assert!(Cli::try_parse_from(["leafutils", "size"]).is_err());
    }

    #[test]
    fn test_rand_accepts_negative_bounds() {
        let cli = Cli::parse_from(["leafutils", "rand", "-10", "-1"]);
        assert!(matches!(cli.command, Commands::Rand { min: -10, max: -1 }));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["leafutils", "user", "--json", "-vv"]);
        assert!(cli.json());
        assert_eq!(cli.log_level(), LevelFilter::Debug);

        let quiet = Cli::parse_from(["leafutils", "user"]);
        assert!(!quiet.json());
        assert_eq!(quiet.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_du_paths_layering() {
        let config: FileConfig = toml::from_str("[du]\ndir = \"/srv/data\"\n").unwrap();

        assert_eq!(
            du_paths(&[PathBuf::from("/tmp")], &config),
            vec![PathBuf::from("/tmp")]
        );
        assert_eq!(du_paths(&[], &config), vec![PathBuf::from("/srv/data")]);
        assert_eq!(
            du_paths(&[], &FileConfig::default()),
            vec![PathBuf::from(".")]
        );
    }

    #[test]
    fn test_exec_shell_layering() {
        let config: FileConfig = toml::from_str("[exec]\nshell = \"zsh\"\n").unwrap();

        assert_eq!(exec_shell(Some("sh"), &config), "sh");
        assert_eq!(exec_shell(None, &config), "zsh");
        assert_eq!(exec_shell(None, &FileConfig::default()), "bash");
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("644").unwrap(), 0o644);
        assert_eq!(parse_mode("0755").unwrap(), 0o755);
        assert_eq!(parse_mode("0o600").unwrap(), 0o600);
        assert!(parse_mode("9").is_err());
        assert!(parse_mode("rwx").is_err());
        assert!(parse_mode("17777").is_err());
    }
}
