mod cli;

use anyhow::{Context, Result};
use chatmark_config::Config;
use chatmark_engine::{Renderer, SanitizeMode, Transcript, render_answer, render_transcript};
use clap::Parser;
use cli::{Cli, Commands, OutputArgs};
use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> Result<()> {
    let (html, output) = match command {
        Commands::Render { input, raw, output } => {
            let text = read_input(input.as_deref())?;
            let renderer = renderer_for(&output, config);
            let html = if raw {
                renderer.render(&text)
            } else {
                render_answer(&renderer, &text)
            };
            (html, output)
        }
        Commands::Transcript { input, output } => {
            let json = read_input(Some(&input))?;
            let transcript = Transcript::from_json(&json)
                .with_context(|| format!("Invalid transcript in {}", input.display()))?;
            let renderer = renderer_for(&output, config);
            (render_transcript(&renderer, &transcript), output)
        }
    };

    write_output(&html, resolve_output(&output, config).as_deref())
}

/// The command-line flag can only tighten the configured mode.
fn sanitize_mode(args: &OutputArgs, config: &Config) -> SanitizeMode {
    if args.sanitize {
        SanitizeMode::AllowList
    } else {
        config.sanitize
    }
}

fn renderer_for(args: &OutputArgs, config: &Config) -> Renderer {
    let mode = sanitize_mode(args, config);
    log::debug!("Rendering with sanitize mode {mode:?}");
    Renderer::for_mode(mode)
}

fn resolve_output(args: &OutputArgs, config: &Config) -> Option<PathBuf> {
    args.output.clone().or_else(|| config.output_path.clone())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn write_output(html: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} bytes to {}", html.len(), path.display());
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
            Ok(())
        }
    }
}
