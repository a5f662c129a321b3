//! CLI for the lrm license resource resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use lrm_core::config;
use std::io;
use std::path::PathBuf;

use commands::{run_completions, run_loaders, run_locate, run_man, run_show};

/// Top-level CLI for lrm.
#[derive(Debug, Parser)]
#[command(name = "lrm")]
#[command(about = "lrm: resolve license header resources from ordered loaders", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/lrm/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level to stderr instead of the log file.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra search path for a configured loader, as ID=PATH. Repeatable; applied in order.
    #[arg(
        long = "search-path",
        global = true,
        value_name = "ID=PATH",
        value_parser = parse_search_path
    )]
    pub search_paths: Vec<SearchPath>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the content of a resource.
    Show {
        /// Resource name, e.g. config/maven-header.txt.
        name: String,
    },

    /// Print where a resource resolves to.
    Locate {
        /// Resource name, e.g. config/maven-header.txt.
        name: String,
    },

    /// List configured loaders in lookup order.
    Loaders,

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a roff man page.
    Man,
}

/// A `--search-path ID=PATH` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    pub loader: String,
    pub path: String,
}

fn parse_search_path(s: &str) -> Result<SearchPath, String> {
    match s.split_once('=') {
        Some((loader, path)) if !loader.is_empty() && !path.is_empty() => Ok(SearchPath {
            loader: loader.to_string(),
            path: path.to_string(),
        }),
        _ => Err(format!("expected ID=PATH, got '{}'", s)),
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match &self.command {
            CliCommand::Completions { shell } => return run_completions(*shell, &mut io::stdout()),
            CliCommand::Man => return run_man(&mut io::stdout()),
            _ => {}
        }

        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let mut manager = cfg.build_manager()?;
        for sp in &self.search_paths {
            manager.add_search_path(&sp.loader, &sp.path)?;
        }

        let mut out = io::stdout().lock();
        match &self.command {
            CliCommand::Show { name } => run_show(&manager, name, &mut out)?,
            CliCommand::Locate { name } => run_locate(&manager, name, &mut out)?,
            CliCommand::Loaders => run_loaders(&manager, &mut out)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
