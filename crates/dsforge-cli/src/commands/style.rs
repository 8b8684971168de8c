//! Style inspection and editing commands.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::Path;

use dsforge_core::{EditOutcome, StyleOverrides, StyleProperty, StyleValue};

use super::Project;
use crate::output;

#[derive(Subcommand)]
pub enum StyleCommands {
    /// Show the effective style of the selection
    Show(ShowStyleArgs),

    /// Edit properties of the selection (property=value ...)
    Set(SetStyleArgs),

    /// List the style properties and their value kinds
    Properties,
}

#[derive(Args)]
pub struct ShowStyleArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SetStyleArgs {
    /// Assignments such as backgroundColor=#112233 padding="8px 16px" glow=true
    #[arg(required = true)]
    pub assignments: Vec<String>,
}

/// Parse `property=value` pairs into a typed edit.
fn parse_assignments(assignments: &[String]) -> Result<StyleOverrides> {
    let mut changes = StyleOverrides::new();
    for assignment in assignments {
        let (key, raw) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected property=value, got '{}'", assignment))?;
        let property = StyleProperty::parse(key)?;
        changes.insert(property, StyleValue::parse_literal(property, raw)?)?;
    }
    Ok(changes)
}

pub async fn execute(cmd: StyleCommands, project_dir: &Path) -> Result<()> {
    match cmd {
        StyleCommands::Properties => {
            for property in StyleProperty::ALL {
                println!("  {:<18} {}", property.as_str(), property.kind().expected().dimmed());
            }
        }

        StyleCommands::Show(args) => {
            let project = Project::open(project_dir)?;
            let style = project.session.resolved_style();

            if args.json {
                println!("{}", serde_json::to_string_pretty(&style)?);
                return Ok(());
            }

            output::print_selection(project.session.store(), project.session.selection());
            let overrides = project
                .session
                .store()
                .resolve(project.session.selection())
                .map(|(_, _, state)| &state.styles);
            println!();
            output::print_style(&style, overrides);
        }

        StyleCommands::Set(args) => {
            let mut project = Project::open(project_dir)?;
            let changes = parse_assignments(&args.assignments)?;

            match project.session.apply_style_edit(&changes) {
                EditOutcome::NoSelection => {
                    println!(
                        "{} Nothing selected; no style was changed. Run 'dsforge select' first.",
                        "!".yellow().bold()
                    );
                }
                EditOutcome::VariantBase { changed } => {
                    project.save()?;
                    println!(
                        "{} Updated variant base style ({} propert{} changed)",
                        "✓".green().bold(),
                        changed,
                        if changed == 1 { "y" } else { "ies" }
                    );
                }
                EditOutcome::StateOverride { overridden } => {
                    project.save()?;
                    println!(
                        "{} Updated state; it now overrides {} propert{}",
                        "✓".green().bold(),
                        overridden,
                        if overridden == 1 { "y" } else { "ies" }
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsforge_core::style::Spacing;

    #[test]
    fn test_parse_assignments() {
        let changes = parse_assignments(&[
            "backgroundColor=#112233".to_string(),
            "padding=8px 16px".to_string(),
            "glow=true".to_string(),
            "font-weight=600".to_string(),
        ])
        .unwrap();

        assert_eq!(
            changes.get(StyleProperty::BackgroundColor),
            Some(&StyleValue::text("#112233"))
        );
        assert_eq!(
            changes.get(StyleProperty::Padding),
            Some(&StyleValue::Spacing(Spacing::new("16px", "8px")))
        );
        assert_eq!(changes.get(StyleProperty::Glow), Some(&StyleValue::Flag(true)));
        assert_eq!(changes.get(StyleProperty::FontWeight), Some(&StyleValue::Number(600.0)));
    }

    #[test]
    fn test_parse_assignments_rejects_bad_input() {
        assert!(parse_assignments(&["zIndex=3".to_string()]).is_err());
        assert!(parse_assignments(&["opacity=half".to_string()]).is_err());
        assert!(parse_assignments(&["opacity=NaN".to_string()]).is_err());
        assert!(parse_assignments(&["fontWeight=inf".to_string()]).is_err());
        assert!(parse_assignments(&["backgroundColor".to_string()]).is_err());
    }
}
