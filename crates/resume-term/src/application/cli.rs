#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::Shell;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Exec(String),
}

fn env_name(key: ConfigKey) -> String {
    return format!("RESUME_TERM_{}", key.to_string().to_uppercase().replace('-', "_"));
}

fn config_arg(key: ConfigKey, help: &str) -> Arg {
    let mut help = help.to_string();
    let default = Config::default(key);
    if !default.is_empty() {
        help = format!("{help} [default: {default}]");
    }

    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env_name(key))
        .num_args(1)
        .help(help);
}

fn arg_log_level() -> Arg {
    return config_arg(ConfigKey::LogLevel, "Verbosity of the log file.")
        .value_parser(["error", "warn", "info", "debug", "trace"]);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_manpages() -> Command {
    return Command::new("manpages").about("Generates manpages.");
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand_required(true)
        .subcommand(Command::new("default").about("Prints the default config.toml."));
}

pub fn build() -> Command {
    return Command::new("resume-term")
        .about("Browse a JSON Resume document from a terminal prompt.")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_manpages())
        .subcommand(subcommand_config())
        .arg(config_arg(
            ConfigKey::ConfigFile,
            "Path to the configuration file.",
        ))
        .arg(config_arg(
            ConfigKey::GithubUser,
            "GitHub user whose public gists hold resume.json.",
        ))
        .arg(config_arg(
            ConfigKey::GithubApiUrl,
            "Base URL of the GitHub API.",
        ))
        .arg(config_arg(
            ConfigKey::ResumeFile,
            "Local resume.json to load instead of a gist.",
        ))
        .arg(config_arg(
            ConfigKey::Greeting,
            "First line shown in the scrollback.",
        ))
        .arg(config_arg(
            ConfigKey::Username,
            "Name shown in the prompt. A random one is generated when unset.",
        ))
        .arg(arg_log_level())
        .arg(
            Arg::new("exec")
                .short('e')
                .long("exec")
                .num_args(1)
                .help("Runs a single command, prints its output and exits."),
        );
}

/// Handles the informational subcommands. Returns true when one ran.
fn run_subcommand(matches: &ArgMatches) -> Result<bool> {
    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(shell) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut cmd = build();
                let name = cmd.get_name().to_string();
                clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            }
        }
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
        }
        Some(("config", subcmd_matches)) => {
            if let Some(("default", _)) = subcmd_matches.subcommand() {
                println!("{}", Config::serialize_default(build()));
            }
        }
        _ => return Ok(false),
    }

    return Ok(true);
}

pub fn run_mode(matches: &ArgMatches) -> RunMode {
    if let Some(command) = matches.get_one::<String>("exec") {
        return RunMode::Exec(command.to_string());
    }

    return RunMode::Interactive;
}

/// Parses the command line and loads the configuration. `None` means a
/// subcommand already did all the work.
pub async fn parse() -> Result<Option<RunMode>> {
    let cmd = build();
    let matches = cmd.clone().get_matches();

    if run_subcommand(&matches)? {
        return Ok(None);
    }

    Config::load(cmd, vec![&matches]).await?;

    return Ok(Some(run_mode(&matches)));
}
