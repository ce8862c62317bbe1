//! `lustre select` / `deselect` / `selection` -- curate the persisted
//! product selection.
//!
//! Every mutation is saved back immediately, so the selection survives
//! across invocations.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use lustre_core::catalog::CatalogStore;
use lustre_core::selection::SelectionStore;

use crate::state::AppState;

/// Add a product to the selection by catalog id.
pub async fn select_product(state: &AppState, id: u32, json: bool) -> Result<()> {
    let catalog = state.catalog.load().await?;
    let product = catalog
        .products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| anyhow::anyhow!("no product with id {id} in the catalog"))?
        .clone();

    let mut selection = state.selection_store.load().await?;
    let added = selection.add(product.clone());
    if added {
        state.selection_store.save(&selection).await?;
    }

    if json {
        println!(
            "{}",
            serde_json::json!({ "id": id, "selected": true, "changed": added })
        );
        return Ok(());
    }

    if added {
        println!(
            "  {} Selected {} ({})",
            style("✓").green().bold(),
            style(&product.name).cyan(),
            product.brand
        );
    } else {
        println!(
            "  {} {} is already selected",
            style("i").blue().bold(),
            style(&product.name).cyan()
        );
    }

    Ok(())
}

/// Remove a product from the selection by catalog id.
pub async fn deselect_product(state: &AppState, id: u32, json: bool) -> Result<()> {
    let mut selection = state.selection_store.load().await?;
    let removed = selection.remove(id);
    if removed.is_some() {
        state.selection_store.save(&selection).await?;
    }

    if json {
        println!(
            "{}",
            serde_json::json!({ "id": id, "selected": false, "changed": removed.is_some() })
        );
        return Ok(());
    }

    match removed {
        Some(product) => println!(
            "  {} Removed {} from the selection",
            style("✓").green().bold(),
            style(&product.name).cyan()
        ),
        None => println!(
            "  {} Product {} was not selected",
            style("i").blue().bold(),
            style(id).bold()
        ),
    }

    Ok(())
}

/// Show the current selection.
pub async fn show_selection(state: &AppState, json: bool) -> Result<()> {
    let selection = state.selection_store.load().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(selection.products())?);
        return Ok(());
    }

    if selection.is_empty() {
        println!();
        println!(
            "  {} No products selected. Add one with: {}",
            style("i").blue().bold(),
            style("lustre select <id>").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Brand").fg(Color::White),
        Cell::new("Category").fg(Color::White),
    ]);

    for product in selection.products() {
        table.add_row(vec![
            Cell::new(product.id).fg(Color::DarkGrey),
            Cell::new(&product.name).fg(Color::Cyan),
            Cell::new(&product.brand),
            Cell::new(&product.category).fg(Color::Magenta),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} product{} selected",
        style(selection.len()).bold(),
        if selection.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Remove every product from the selection.
pub async fn clear_selection(state: &AppState, json: bool) -> Result<()> {
    let mut selection = state.selection_store.load().await?;
    let count = selection.len();
    selection.clear();
    state.selection_store.save(&selection).await?;

    if json {
        println!("{}", serde_json::json!({ "cleared": count }));
        return Ok(());
    }

    println!(
        "  {} Cleared {} product{}",
        style("✓").green().bold(),
        style(count).bold(),
        if count == 1 { "" } else { "s" }
    );

    Ok(())
}
