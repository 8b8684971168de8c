//! Project initialization command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use dsforge_core::config::{self, DsConfig};
use dsforge_core::{persist, Session};

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration and start an empty session
    #[arg(long)]
    pub force: bool,
}

pub async fn execute(args: InitArgs, project_dir: &Path) -> Result<()> {
    let data_dir = config::data_dir(project_dir);
    let config_path = config::config_path(project_dir);
    let session_path = config::session_path(project_dir);

    if config_path.exists() && !args.force {
        println!(
            "{} Project already initialized at {}",
            "!".yellow().bold(),
            data_dir.display()
        );
        println!("  Use --force to start over.");
        return Ok(());
    }

    println!(
        "{} Initializing DSForge in {}",
        "→".blue().bold(),
        project_dir.display().to_string().cyan()
    );

    std::fs::create_dir_all(&data_dir)?;
    let config = DsConfig::default();
    std::fs::write(&config_path, config.to_toml_string()?)?;
    persist::save(&session_path, &Session::from_config(&config))?;

    println!();
    println!("{} Project initialized", "✓".green().bold());
    println!("  Config:  {}", config_path.display());
    println!("  Session: {}", session_path.display());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  dsforge component types             # Browse component types");
    println!("  dsforge component new button CTA    # Create your first component");
    println!("  dsforge style show                  # Inspect the selected style");

    Ok(())
}
