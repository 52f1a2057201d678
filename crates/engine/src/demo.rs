//! The four factory demonstrations, run in order.
//!
//! Each step builds a fresh creator, assigns the configured factory from the
//! registry, and writes the result to `out`. Logs go through `tracing`; `out`
//! only ever receives the demo output.

use std::io::Write;

use anyhow::Context;
use forgeworks_domain::{CharacterCreator, Data, DataProcessorCreator, FurnitureCreator};
use serde::Serialize;

use crate::app::App;

/// Run all four demonstrations.
pub fn run(app: &App, out: &mut dyn Write) -> anyhow::Result<()> {
    character_creation(app, out)?;
    data_processing(app, out)?;
    furniture_catalog(app, out)?;
    game_character_creation(app, out)?;
    out.flush().context("Failed to flush demo output")?;
    Ok(())
}

/// Print a product as a single-line JSON field mapping (`null` when absent).
fn print_fields<T: Serialize>(out: &mut dyn Write, product: &Option<T>) -> anyhow::Result<()> {
    let line = serde_json::to_string(product)
        .context("Failed to serialize product")?;
    writeln!(out, "{line}")
        .context("Failed to write demo output")?;
    Ok(())
}

/// Exercise 1: character creation in a video game.
pub fn character_creation(app: &App, out: &mut dyn Write) -> anyhow::Result<()> {
    let class = app.config.character_class;
    let factory = app
        .registry
        .character_factory(&class.to_string())
        .with_context(|| format!("No character factory registered for {class}"))?;

    let mut creator = CharacterCreator::new();
    creator.set_shared_factory(factory);
    let character = creator.create_character(&app.config.character_name);

    tracing::info!(%class, name = %app.config.character_name, "Character created");
    print_fields(out, &character)
}

/// Exercise 2: real-time data processing.
pub fn data_processing(app: &App, out: &mut dyn Write) -> anyhow::Result<()> {
    let kind = app.config.data_kind;
    let processor = app
        .registry
        .data_processor(&kind.to_string())
        .with_context(|| format!("No data processor registered for {kind}"))?;

    let mut creator = DataProcessorCreator::new();
    creator.set_shared_processor(processor);
    let data = Data::new(kind.label(), app.config.data_content.as_str());
    creator
        .process_data(&data, out)
        .context("Failed to write processed data")?;

    tracing::info!(%kind, "Data processed");
    Ok(())
}

/// Exercise 3: online furniture marketplace.
pub fn furniture_catalog(app: &App, out: &mut dyn Write) -> anyhow::Result<()> {
    let line = app.config.furniture_line;
    let piece = app.config.furniture_piece;
    let factory = app
        .registry
        .furniture_factory(&line.to_string())
        .with_context(|| format!("No furniture factory registered for {line}"))?;

    let mut creator = FurnitureCreator::new();
    creator.set_shared_factory(factory);
    let furniture = creator.create(piece);

    tracing::info!(%line, %piece, "Furniture created");
    print_fields(out, &furniture)
}

/// Exercise 4: multiplayer online game.
pub fn game_character_creation(app: &App, out: &mut dyn Write) -> anyhow::Result<()> {
    let loadout = app.config.loadout;
    let factory = app
        .registry
        .loadout_factory(&loadout.to_string())
        .with_context(|| format!("No loadout factory registered for {loadout}"))?;

    let mut creator = CharacterCreator::new();
    creator.set_shared_factory(factory);
    let character = creator.create_character(&app.config.game_character_name);

    tracing::info!(%loadout, name = %app.config.game_character_name, "Game character created");
    print_fields(out, &character)
}
