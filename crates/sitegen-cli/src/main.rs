use anyhow::{Context, Result, bail};
use sitegen_config::Config;
use std::{env, path::PathBuf, process};

mod build;

const USAGE: &str = "\
Usage:
  sitegen build [BASE_PATH] [--config PATH]
  sitegen init [--config PATH]

Commands:
  build   Render the content directory into the output directory
  init    Write a default sitegen.toml";

#[derive(Debug, PartialEq)]
enum Command {
    Build {
        base_path: Option<String>,
        config_path: PathBuf,
    },
    Init {
        config_path: PathBuf,
    },
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut config_path = Config::config_path();
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-c" | "--config" => {
                let Some(path) = iter.next() else {
                    bail!("{arg} needs a path");
                };
                config_path = PathBuf::from(path);
            }
            flag if flag.starts_with('-') => bail!("Unknown option: {flag}"),
            value => positional.push(value),
        }
    }

    match positional.as_slice() {
        [] | ["build"] => Ok(Command::Build {
            base_path: None,
            config_path,
        }),
        ["build", base_path] => Ok(Command::Build {
            base_path: Some(base_path.to_string()),
            config_path,
        }),
        ["init"] => Ok(Command::Init { config_path }),
        other => bail!("Unexpected arguments: {}", other.join(" ")),
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Help => {
            println!("{USAGE}");
        }
        Command::Init { config_path } => {
            if config_path.exists() {
                bail!("{} already exists", config_path.display());
            }
            Config::default()
                .save_to_path(&config_path)
                .with_context(|| format!("writing {}", config_path.display()))?;
            log::info!("Wrote default config to {}", config_path.display());
        }
        Command::Build {
            base_path,
            config_path,
        } => {
            let config = match Config::load_from_path(&config_path)? {
                Some(config) => {
                    log::info!("Using config {}", config_path.display());
                    config
                }
                None => {
                    log::info!(
                        "No config at {}, using defaults",
                        config_path.display()
                    );
                    Config::default()
                }
            };
            let config = match base_path {
                Some(base_path) => config.with_base_path(&base_path),
                None => config,
            };
            build::build_site(&config)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}\n\n{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(command) {
        log::error!("{e:#}");
        process::exit(1);
    }
}
