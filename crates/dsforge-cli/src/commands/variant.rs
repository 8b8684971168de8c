//! Variant management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::Path;

use super::{lookup, Project};

#[derive(Subcommand)]
pub enum VariantCommands {
    /// Add a variant with a single "default" state
    Add(AddVariantArgs),

    /// Remove a variant (the last one cannot be removed)
    Remove(VariantRefArgs),

    /// Copy a variant with all its states
    Duplicate(VariantRefArgs),

    /// Rename a variant
    Rename(RenameVariantArgs),
}

#[derive(Args)]
pub struct ComponentArg {
    /// Component id or name (defaults to the selection)
    #[arg(short, long)]
    pub component: Option<String>,
}

#[derive(Args)]
pub struct AddVariantArgs {
    /// Variant name
    pub name: String,

    /// Start from this variant's base style instead of the default style
    #[arg(long)]
    pub copy_from: Option<String>,

    #[command(flatten)]
    pub target: ComponentArg,
}

#[derive(Args)]
pub struct VariantRefArgs {
    /// Variant id or name (defaults to the selection)
    pub variant: Option<String>,

    #[command(flatten)]
    pub target: ComponentArg,
}

#[derive(Args)]
pub struct RenameVariantArgs {
    /// Variant id or name
    pub variant: String,

    /// New name
    pub name: String,

    #[command(flatten)]
    pub target: ComponentArg,
}

pub async fn execute(cmd: VariantCommands, project_dir: &Path) -> Result<()> {
    let mut project = Project::open(project_dir)?;

    match cmd {
        VariantCommands::Add(args) => {
            let cid = lookup::component_id(&project.session, args.target.component.as_deref())?;
            let copy_from = match args.copy_from.as_deref() {
                Some(key) => Some(lookup::variant_id(&project.session, &cid, Some(key))?),
                None => None,
            };
            let vid = project
                .session
                .add_variant(&cid, &args.name, copy_from.as_deref())?;
            project.save()?;
            println!(
                "{} Added variant {} ({})",
                "✓".green().bold(),
                args.name.trim().cyan(),
                vid.dimmed()
            );
        }

        VariantCommands::Remove(args) => {
            let cid = lookup::component_id(&project.session, args.target.component.as_deref())?;
            let vid = lookup::variant_id(&project.session, &cid, args.variant.as_deref())?;
            project.session.remove_variant(&cid, &vid)?;
            project.save()?;
            println!("{} Removed variant {}", "✓".green().bold(), vid.dimmed());
        }

        VariantCommands::Duplicate(args) => {
            let cid = lookup::component_id(&project.session, args.target.component.as_deref())?;
            let vid = lookup::variant_id(&project.session, &cid, args.variant.as_deref())?;
            let copy_id = project.session.duplicate_variant(&cid, &vid)?;
            project.save()?;

            let (_, copy) = project.session.store().get_variant(&cid, &copy_id)?;
            println!(
                "{} Duplicated as {} ({})",
                "✓".green().bold(),
                copy.name.cyan(),
                copy_id.dimmed()
            );
        }

        VariantCommands::Rename(args) => {
            let cid = lookup::component_id(&project.session, args.target.component.as_deref())?;
            let vid = lookup::variant_id(&project.session, &cid, Some(&args.variant))?;
            project.session.rename_variant(&cid, &vid, &args.name)?;
            project.save()?;
            println!(
                "{} Renamed variant to {}",
                "✓".green().bold(),
                args.name.trim().cyan()
            );
        }
    }

    Ok(())
}
