//! sitemeta - site metadata configuration for content websites.

mod cli;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // init writes the file the other commands read
    if let Commands::Init { name, dry, force } = &cli.command {
        return cli::init::new_site(name.as_deref(), &cli.config, *dry, *force);
    }

    init_config(SiteConfig::load(&cli)?)?;
    let config = config::cfg();

    match &cli.command {
        Commands::Init { .. } => unreachable!("handled before loading"),
        Commands::Check { .. } => cli::check::check_config(&config),
        Commands::Show { args } => cli::show::show_config(&config, args),
        Commands::Get { field } => cli::query::get_field(&config, field),
        Commands::Url { paths } => cli::query::print_urls(&config, paths),
    }
}
