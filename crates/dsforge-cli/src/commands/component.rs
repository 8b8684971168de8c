//! Component management commands.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::Path;

use dsforge_core::{ComponentCategory, ComponentType, DsError};

use super::{lookup, Project};
use crate::output;

#[derive(Subcommand)]
pub enum ComponentCommands {
    /// Create a component from the type catalog
    New(NewComponentArgs),

    /// List components
    List(ListArgs),

    /// Show a component's variants and states
    Show(ShowArgs),

    /// Change a component's name or description
    Edit(EditArgs),

    /// Delete a component
    Delete(DeleteArgs),

    /// List the available component types
    Types(ListArgs),
}

#[derive(Args)]
pub struct NewComponentArgs {
    /// Component type (e.g. button, input, card)
    pub component_type: String,

    /// Display name
    pub name: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Component id or name
    pub component: String,

    /// New display name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only this category (actions, forms, data-display, feedback, navigation, overlay, layout)
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Component id or name (defaults to the selection)
    pub component: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Component id or name
    pub component: String,
}

fn parse_category(raw: Option<&str>) -> Result<Option<ComponentCategory>> {
    raw.map(|s| {
        ComponentCategory::from_str(s).ok_or_else(|| anyhow!("Unknown category: {}", s))
    })
    .transpose()
}

pub async fn execute(cmd: ComponentCommands, project_dir: &Path) -> Result<()> {
    match cmd {
        ComponentCommands::Types(args) => {
            output::print_types(parse_category(args.category.as_deref())?);
            println!();
            println!("{} type(s)", ComponentType::ALL.len());
        }
        ComponentCommands::New(args) => {
            let mut project = Project::open(project_dir)?;
            let component_type = ComponentType::from_str(&args.component_type)
                .ok_or_else(|| DsError::UnknownComponentType(args.component_type.clone()))?;

            let id = project.session.create_component(component_type, &args.name)?;
            project.save()?;

            let component = project.session.store().get_component(&id)?;
            println!(
                "{} Created {}: {} ({})",
                "✓".green().bold(),
                component_type.display_name(),
                component.name.cyan(),
                id.dimmed()
            );
            println!(
                "  {} variant(s), {} state(s)",
                component.variants.len(),
                component.state_count()
            );
            output::print_selection(project.session.store(), project.session.selection());
        }
        ComponentCommands::List(args) => {
            let project = Project::open(project_dir)?;
            let category = parse_category(args.category.as_deref())?;
            let components: Vec<_> = project
                .session
                .store()
                .components
                .iter()
                .filter(|c| category.map_or(true, |cat| c.category == cat))
                .collect();
            output::print_components_table(
                &components,
                project.session.selection().component_id.as_deref(),
            );
        }
        ComponentCommands::Show(args) => {
            let project = Project::open(project_dir)?;
            let id = lookup::component_id(&project.session, args.component.as_deref())?;
            let component = project.session.store().get_component(&id)?;
            output::print_component(component, project.session.selection());
        }
        ComponentCommands::Edit(args) => {
            let mut project = Project::open(project_dir)?;
            let id = lookup::component_id(&project.session, Some(&args.component))?;
            let name = match args.name {
                Some(name) => name,
                None => project.session.store().get_component(&id)?.name.clone(),
            };
            project
                .session
                .update_component_details(&id, &name, args.description.as_deref())?;
            project.save()?;
            println!("{} Updated component {}", "✓".green().bold(), name.cyan());
        }
        ComponentCommands::Delete(args) => {
            let mut project = Project::open(project_dir)?;
            let id = lookup::component_id(&project.session, Some(&args.component))?;
            project.session.delete_component(&id)?;
            project.save()?;
            println!("{} Deleted component {}", "✓".green().bold(), id.dimmed());
        }
    }

    Ok(())
}
