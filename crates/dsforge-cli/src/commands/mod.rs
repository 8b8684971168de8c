//! CLI command definitions and handlers.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use dsforge_core::config::{self, DsConfig};
use dsforge_core::{persist, Session};

pub mod component;
pub mod export;
pub mod history;
pub mod init;
pub mod lookup;
pub mod select;
pub mod state;
pub mod style;
pub mod variant;

/// DSForge - design-system component editor
#[derive(Parser)]
#[command(name = "dsforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a DSForge project in the current directory
    Init(init::InitArgs),

    /// Create, list, inspect and delete components
    #[command(subcommand)]
    Component(component::ComponentCommands),

    /// Select a component, variant and state for editing
    Select(select::SelectArgs),

    /// Manage the variants of a component
    #[command(subcommand)]
    Variant(variant::VariantCommands),

    /// Manage the interaction states of a variant
    #[command(subcommand)]
    State(state::StateCommands),

    /// Inspect and edit the style of the selection
    #[command(subcommand)]
    Style(style::StyleCommands),

    /// Undo the last change
    Undo,

    /// Redo the last undone change
    Redo,

    /// Export the design system
    Export(export::ExportArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        match self.command {
            Commands::Init(args) => init::execute(args, &project_dir).await,
            Commands::Component(cmd) => component::execute(cmd, &project_dir).await,
            Commands::Select(args) => select::execute(args, &project_dir).await,
            Commands::Variant(cmd) => variant::execute(cmd, &project_dir).await,
            Commands::State(cmd) => state::execute(cmd, &project_dir).await,
            Commands::Style(cmd) => style::execute(cmd, &project_dir).await,
            Commands::Undo => history::undo(&project_dir).await,
            Commands::Redo => history::redo(&project_dir).await,
            Commands::Export(args) => export::execute(args, &project_dir).await,
        }
    }
}

/// An opened project: its configuration and the persisted session.
pub struct Project {
    pub config: DsConfig,
    pub session: Session,
    session_path: PathBuf,
}

impl Project {
    pub fn open(project_dir: &Path) -> Result<Self> {
        if !config::data_dir(project_dir).is_dir() {
            bail!("No DSForge project found. Run 'dsforge init' first.");
        }
        let config = DsConfig::load_for_project(project_dir)?;
        let session_path = config::session_path(project_dir);
        let session = persist::load_or_default(&session_path, config.history_limit)?;
        Ok(Self {
            config,
            session,
            session_path,
        })
    }

    pub fn save(&self) -> Result<()> {
        persist::save(&self.session_path, &self.session)?;
        Ok(())
    }
}
