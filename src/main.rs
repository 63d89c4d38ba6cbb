//! Grove - theme components and link tooling for a markdown digital garden.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use grove::cli::{self, Cli, Commands};
use grove::config::SiteConfig;
use grove::{debug, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let (config_name, explicit) = cli.config_path();
    let config = SiteConfig::load(&config_name, &cwd, explicit)?;
    debug!("config"; "root: {}", config.get_root().display());

    match &cli.command {
        Commands::Render {
            slugs,
            display_class,
        } => {
            let mut out = io::stdout().lock();
            cli::render::render_slugs(slugs, display_class.as_deref(), &config, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Commands::Css { minify } => {
            let mut out = io::stdout().lock();
            cli::css::print_css(*minify, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Commands::Check { args } => cli::check::run_check(args, &config),
    }
}
