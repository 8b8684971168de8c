//! Selection command.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::{lookup, Project};
use crate::output;

#[derive(Args)]
pub struct SelectArgs {
    /// Component id or name
    pub component: Option<String>,

    /// Variant id or name (defaults to the first variant)
    #[arg(long)]
    pub variant: Option<String>,

    /// State id or name (defaults to the first state)
    #[arg(long)]
    pub state: Option<String>,

    /// Clear the selection
    #[arg(long, conflicts_with_all = ["component", "variant", "state"])]
    pub clear: bool,
}

pub async fn execute(args: SelectArgs, project_dir: &Path) -> Result<()> {
    let mut project = Project::open(project_dir)?;

    if args.clear {
        project.session.clear_selection();
    } else if args.component.is_some() || args.variant.is_some() || args.state.is_some() {
        let component_id = lookup::component_id(&project.session, args.component.as_deref())?;
        match (args.variant.as_deref(), args.state.as_deref()) {
            (None, None) => project.session.select_component(&component_id)?,
            (variant, state) => {
                let variant_id = lookup::variant_id(&project.session, &component_id, variant)?;
                match state {
                    Some(key) => {
                        let state_id =
                            lookup::state_id(&project.session, &component_id, &variant_id, Some(key))?;
                        project
                            .session
                            .select_state(&component_id, &variant_id, &state_id)?;
                    }
                    None => project.session.select_variant(&component_id, &variant_id)?,
                }
            }
        }
    }

    project.save()?;
    output::print_selection(project.session.store(), project.session.selection());
    Ok(())
}
