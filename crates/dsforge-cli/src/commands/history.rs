//! Undo / redo commands.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::Project;
use crate::output;

pub async fn undo(project_dir: &Path) -> Result<()> {
    let mut project = Project::open(project_dir)?;
    if !project.session.undo() {
        println!("{}", "Nothing to undo.".dimmed());
        return Ok(());
    }
    project.save()?;
    println!(
        "{} Undone ({} step(s) left)",
        "✓".green().bold(),
        project.session.history().undo_depth()
    );
    output::print_selection(project.session.store(), project.session.selection());
    Ok(())
}

pub async fn redo(project_dir: &Path) -> Result<()> {
    let mut project = Project::open(project_dir)?;
    if !project.session.redo() {
        println!("{}", "Nothing to redo.".dimmed());
        return Ok(());
    }
    project.save()?;
    println!("{} Redone", "✓".green().bold());
    output::print_selection(project.session.store(), project.session.selection());
    Ok(())
}
