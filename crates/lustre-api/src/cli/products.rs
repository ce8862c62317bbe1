//! `lustre products` -- list the catalog in a colored table.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use lustre_core::catalog::{CatalogStore, filter_products};
use lustre_core::selection::SelectionStore;

use crate::state::AppState;

/// List catalog products, applying the optional category and search filters.
///
/// Selected products are marked in the first column. The catalog file is
/// read fresh on every invocation.
pub async fn list_products(
    state: &AppState,
    category: Option<&str>,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let catalog = state.catalog.load().await?;
    let selection = state.selection_store.load().await?;
    let filtered = filter_products(&catalog.products, category, search);

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if filtered.is_empty() {
        println!();
        println!(
            "  {} No products match. Try another category or search term.",
            style("i").blue().bold()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new(""),
        Cell::new("Id").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Brand").fg(Color::White),
        Cell::new("Category").fg(Color::White),
        Cell::new("Description").fg(Color::White),
    ]);

    for product in &filtered {
        let mark = if selection.contains(product.id) {
            Cell::new("●").fg(Color::Green)
        } else {
            Cell::new("")
        };

        let desc = truncated(&product.description);

        table.add_row(vec![
            mark,
            Cell::new(product.id).fg(Color::DarkGrey),
            Cell::new(&product.name).fg(Color::Cyan),
            Cell::new(&product.brand),
            Cell::new(&product.category).fg(Color::Magenta),
            Cell::new(desc),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} product{}, {} selected",
        style(filtered.len()).bold(),
        if filtered.len() == 1 { "" } else { "s" },
        style(selection.len()).bold()
    );
    println!();

    Ok(())
}

/// Shorten long descriptions for the table. Counts characters, not bytes,
/// so accented catalog text never lands mid-codepoint.
fn truncated(description: &str) -> String {
    if description.chars().count() > 50 {
        let head: String = description.chars().take(47).collect();
        format!("{head}...")
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_description_is_untouched() {
        assert_eq!(truncated("Gentle micellar water"), "Gentle micellar water");
    }

    #[test]
    fn long_description_is_shortened_with_ellipsis() {
        let long = "a".repeat(60);
        let out = truncated(&long);
        assert_eq!(out, format!("{}...", "a".repeat(47)));
    }

    #[test]
    fn accented_description_truncates_on_char_boundary() {
        // 58 chars with an é straddling byte 47 when sliced by bytes.
        let desc = "Crème hydratante enrichie à l'huile d'argan, texture légère";
        let out = truncated(desc);
        assert_eq!(out.chars().count(), 50);
        assert!(out.ends_with("..."));
        assert!(desc.starts_with(out.trim_end_matches("...")));
    }
}
