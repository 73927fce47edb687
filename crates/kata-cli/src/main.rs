//! Kata CLI Application
//!
//! Command-line runner for Kata guided coding lessons.

mod args;
mod cli;
mod renderer;

use std::path::Path;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use kata_core::{Catalog, SessionBuilder};
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        catalog,
        command,
    } = Args::parse();

    let catalog = match catalog {
        Some(path) => load_catalog(&path)?,
        None => Catalog::builtin(),
    };
    let renderer = TerminalRenderer::new(!no_color);

    info!("Kata started");

    match command {
        Some(Commands::Run {
            lesson,
            fast,
            lives,
        }) => {
            let mut builder = SessionBuilder::new().with_catalog(catalog);
            if let Some(lesson_id) = lesson {
                builder = builder.with_lesson(lesson_id);
            }
            if let Some(lives) = lives {
                builder = builder.with_lives(lives);
            }
            let session = builder.build().context("Failed to start lesson")?;
            Cli::new(session, renderer, fast).run().await
        }
        Some(Commands::Lessons) | None => list_lessons(&catalog, &renderer),
    }
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    Catalog::from_json(&json).context("Failed to parse catalog")
}

fn list_lessons(catalog: &Catalog, renderer: &TerminalRenderer) -> Result<()> {
    if catalog.lessons.is_empty() {
        renderer.render("No lessons found.\n")?;
        return Ok(());
    }
    for lesson in &catalog.lessons {
        renderer.render(&lesson.to_string())?;
    }
    Ok(())
}
