//! # leafutils
//!
//! Command-line front end for the leafutils library.
//!
//! ## Usage
//!
//! ```bash
//! # Human-readable sizes
//! leafutils size 4488998912            # 4.2 GiB
//! leafutils size 4488998912 --si       # 4.5 GB
//! leafutils size 1.5GiB -p 3 --json
//!
//! # Directory sizes
//! leafutils du ~/Downloads
//!
//! # Account lookups, permissions, commands
//! leafutils user root
//! leafutils chmod 644 notes.txt
//! leafutils exec 'uname -a'
//! ```

mod cli;

use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, SizeFormatArgs, du_paths, exec_shell, parse_mode};
use colored::Colorize;
use leafutils::config::FileConfig;
use leafutils::output::{JsonDiskUsage, JsonExec, JsonSizeEntry};
use leafutils::shell::Execute;
use leafutils::size::{Units, calculate_dir_size, parse_size};
use leafutils::sys::{Group, Passwd, chmod, fnmatch};
use leafutils::utils::irand;
use log::{LevelFilter, debug};
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// Entry point for the leafutils application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    match inner_main() {
        Ok(0) => {}
        Ok(code) => exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red());
            exit(1);
        }
    }
}

/// Main application logic that can return errors.
///
/// Returns the process exit code on success.
///
/// # Errors
///
/// Returns errors from logger setup, argument validation, lookups, file-system
/// operations, process spawning or JSON serialization.
fn inner_main() -> Result<i32> {
    let args = Cli::parse();
    init_logging(args.log_level())?;

    let json_mode = args.json();

    match &args.command {
        Commands::Config { command } => handle_config_command(command).map(|()| 0),
        Commands::Size { sizes, format } => print_sizes(sizes, format, json_mode).map(|()| 0),
        Commands::Du { paths, format } => print_disk_usage(paths, format, json_mode).map(|()| 0),
        Commands::User { user } => print_user(user.as_deref(), json_mode).map(|()| 0),
        Commands::Group { group } => print_group(group.as_deref(), json_mode).map(|()| 0),
        Commands::Exec {
            command,
            shell,
            input,
        } => run_exec(command, shell.as_deref(), input.as_deref(), json_mode),
        Commands::Rand { min, max } => {
            println!("{}", irand(*min, *max));
            Ok(0)
        }
        Commands::Chmod { mode, paths } => run_chmod(mode, paths).map(|()| 0),
        Commands::Match { pattern, names } => Ok(run_match(pattern, names)),
    }
}

/// log4rs pattern for stderr records: level, target, message.
#[allow(clippy::literal_string_with_formatting_args)]
const LOG_PATTERN: &str = "{h({l})} {t} - {m}{n}";

/// Install a stderr console logger at `level`.
fn init_logging(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("stderr", Box::new(stderr)),
        )
        .build(Root::builder().appender("stderr").build(level))
        .context("Failed to build logger configuration")?;
    log4rs::init_config(config).context("Failed to install logger")?;

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

/// Format each argument, which may be a raw byte count or a size string.
fn print_sizes(sizes: &[String], format: &SizeFormatArgs, json_mode: bool) -> Result<()> {
    let options = format.size_options(&load_config(json_mode));
    debug!("size options: {options:?}");

    let mut entries = Vec::with_capacity(sizes.len());
    for input in sizes {
        let bytes =
            parse_size(input).with_context(|| format!("Invalid size argument: {input}"))?;
        entries.push(JsonSizeEntry::new(input, bytes, &options));
    }

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            if entries.len() == 1 {
                println!("{}", entry.size.formatted);
            } else {
                println!("{:>12}  {}", entry.size.formatted.bold(), entry.input);
            }
        }
    }
    Ok(())
}

/// Measure and print the size of each path.
fn print_disk_usage(
    paths: &[PathBuf],
    format: &SizeFormatArgs,
    json_mode: bool,
) -> Result<()> {
    let config = load_config(json_mode);
    let options = format.size_options(&config);

    let mut usages = Vec::new();
    for path in du_paths(paths, &config) {
        if !path.exists() {
            bail!("No such file or directory: {}", path.display());
        }
        let bytes = calculate_dir_size(&path);
        usages.push(JsonDiskUsage::new(&path, bytes, &options));
    }

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&usages)?);
    } else {
        for usage in &usages {
            println!("{:>12}  {}", usage.size.formatted.bold(), usage.path);
        }
    }
    Ok(())
}

/// Print one passwd entry.
fn print_user(user: Option<&str>, json_mode: bool) -> Result<()> {
    let entry = match user {
        Some(spec) => Passwd::lookup(spec)?.with_context(|| format!("No such user: {spec}"))?,
        None => Passwd::current()?,
    };

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!("{}  {}", "name: ".bold(), entry.name);
        println!("{}  {}", "uid:  ".bold(), entry.uid);
        println!("{}  {}", "gid:  ".bold(), entry.gid);
        println!("{}  {}", "gecos:".bold(), entry.gecos);
        println!("{}  {}", "home: ".bold(), entry.dir.display());
        println!("{}  {}", "shell:".bold(), entry.shell.display());
    }
    Ok(())
}

/// Print one group entry.
fn print_group(group: Option<&str>, json_mode: bool) -> Result<()> {
    let entry = match group {
        Some(spec) => Group::lookup(spec)?.with_context(|| format!("No such group: {spec}"))?,
        None => Group::current()?,
    };

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!("{}  {}", "name:   ".bold(), entry.name);
        println!("{}  {}", "gid:    ".bold(), entry.gid);
        println!("{}  {}", "members:".bold(), entry.members.join(", "));
    }
    Ok(())
}

/// Run a shell command, echo its output and return its exit code.
///
/// A command killed by a signal maps to exit code 1.
fn run_exec(
    command: &str,
    shell: Option<&str>,
    input: Option<&str>,
    json_mode: bool,
) -> Result<i32> {
    let shell = exec_shell(shell, &load_config(json_mode));
    let result = Execute::with_shell(&shell, command, input.unwrap_or_default())?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&JsonExec::from(&result))?);
    } else {
        print!("{}", result.standard_output());
        eprint!("{}", result.standard_error());
    }

    Ok(result.exit_status().unwrap_or(1))
}

/// Apply an octal mode to every path, stopping at the first failure.
fn run_chmod(mode: &str, paths: &[PathBuf]) -> Result<()> {
    let mode = parse_mode(mode)?;
    for path in paths {
        chmod(path, mode)
            .with_context(|| format!("Failed to change mode of {}", path.display()))?;
    }
    Ok(())
}

/// Print the names that match; exit code 1 when any name does not.
fn run_match(pattern: &str, names: &[String]) -> i32 {
    let mut all_matched = true;
    for name in names {
        if fnmatch(pattern, name) {
            println!("{name}");
        } else {
            all_matched = false;
        }
    }
    i32::from(!all_matched)
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# leafutils configuration
# All values shown are their defaults. Uncomment and change as needed.

[size]
# Unit system: "iec" (KiB, MiB, ... base 1024) or "si" (KB, MB, ... base 1000)
# units = "iec"

# Digits after the decimal point (plain byte counts never show decimals)
# precision = 1

[du]
# Directory measured by `leafutils du` when no path is given
# dir = "."

[exec]
# Shell used by `leafutils exec`
# shell = "bash"
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }

    let precision = config.size.precision.map_or_else(
        || format!("{}  (default)", leafutils::size::DEFAULT_PRECISION),
        |v| v.to_string(),
    );
    let dir = config.du.dir.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
[size]
units     = {units}
precision = {precision}

[du]
dir       = {dir}

[exec]
shell     = {shell}",
        units = show_str(config.size.units.map(Units::name), "iec"),
        shell = show_str(
            config.exec.shell.as_deref(),
            leafutils::shell::DEFAULT_SHELL
        ),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    FileConfig::load().unwrap_or_else(|e| {
        if !json_mode {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
        }
        FileConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_template_parses_to_defaults() {
        let config: FileConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.size.units.is_none());
        assert!(config.size.precision.is_none());
        assert!(config.du.dir.is_none());
        assert!(config.exec.shell.is_none());
    }

    #[test]
    fn test_format_config_shows_defaults() {
        let text = format_config(&FileConfig::default());
        assert!(text.contains("units     = \"iec\"  (default)"));
        assert!(text.contains("precision = 1  (default)"));
        assert!(text.contains("shell     = \"bash\"  (default)"));
    }

    #[test]
    fn test_format_config_shows_file_values() {
        let config: FileConfig =
            toml::from_str("[size]\nunits = \"si\"\nprecision = 2\n[exec]\nshell = \"sh\"\n")
                .unwrap();
        let text = format_config(&config);
        assert!(text.contains("units     = \"si\""));
        assert!(text.contains("precision = 2"));
        assert!(text.contains("shell     = \"sh\""));
    }

    #[test]
    fn test_run_match_exit_code() {
        assert_eq!(run_match("*.rs", &["a.rs".to_string(), "b.rs".to_string()]), 0);
        assert_eq!(run_match("*.rs", &["a.rs".to_string(), "b.md".to_string()]), 1);
    }
}
