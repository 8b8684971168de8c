//! Interaction state commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::Path;

use super::{lookup, Project};

#[derive(Subcommand)]
pub enum StateCommands {
    /// Add a state that inherits the variant's base style
    Add(AddStateArgs),

    /// Remove a state ("default" and the last state cannot be removed)
    Remove(StateRefArgs),

    /// Rename a state
    Rename(RenameStateArgs),

    /// Drop every override of a state
    Reset(StateRefArgs),
}

#[derive(Args)]
pub struct VariantTarget {
    /// Component id or name (defaults to the selection)
    #[arg(short, long)]
    pub component: Option<String>,

    /// Variant id or name (defaults to the selection)
    #[arg(long)]
    pub variant: Option<String>,
}

#[derive(Args)]
pub struct AddStateArgs {
    /// State name (e.g. hover, pressed)
    pub name: String,

    #[command(flatten)]
    pub target: VariantTarget,
}

#[derive(Args)]
pub struct StateRefArgs {
    /// State id or name (defaults to the selection)
    pub state: Option<String>,

    #[command(flatten)]
    pub target: VariantTarget,
}

#[derive(Args)]
pub struct RenameStateArgs {
    /// State id or name
    pub state: String,

    /// New name
    pub name: String,

    #[command(flatten)]
    pub target: VariantTarget,
}

pub async fn execute(cmd: StateCommands, project_dir: &Path) -> Result<()> {
    let mut project = Project::open(project_dir)?;

    let target = match &cmd {
        StateCommands::Add(args) => &args.target,
        StateCommands::Remove(args) | StateCommands::Reset(args) => &args.target,
        StateCommands::Rename(args) => &args.target,
    };
    let cid = lookup::component_id(&project.session, target.component.as_deref())?;
    let vid = lookup::variant_id(&project.session, &cid, target.variant.as_deref())?;

    match cmd {
        StateCommands::Add(args) => {
            let sid = project.session.add_state(&cid, &vid, &args.name)?;
            project.save()?;
            println!(
                "{} Added state {} ({})",
                "✓".green().bold(),
                args.name.trim().cyan(),
                sid.dimmed()
            );
        }

        StateCommands::Remove(args) => {
            let sid = lookup::state_id(&project.session, &cid, &vid, args.state.as_deref())?;
            project.session.remove_state(&cid, &vid, &sid)?;
            project.save()?;
            println!("{} Removed state {}", "✓".green().bold(), sid.dimmed());
        }

        StateCommands::Rename(args) => {
            let sid = lookup::state_id(&project.session, &cid, &vid, Some(&args.state))?;
            project.session.rename_state(&cid, &vid, &sid, &args.name)?;
            project.save()?;
            println!(
                "{} Renamed state to {}",
                "✓".green().bold(),
                args.name.trim().cyan()
            );
        }

        StateCommands::Reset(args) => {
            let sid = lookup::state_id(&project.session, &cid, &vid, args.state.as_deref())?;
            let removed = project.session.reset_state_overrides(&cid, &vid, &sid)?;
            project.save()?;
            if removed == 0 {
                println!("{}", "State had no overrides.".dimmed());
            } else {
                println!(
                    "{} Cleared {} override(s); the state now inherits the base style",
                    "✓".green().bold(),
                    removed
                );
            }
        }
    }

    Ok(())
}
