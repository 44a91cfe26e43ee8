use std::fmt::Display;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::quote::Quote,
    quantity::price::{KilowattHourPrice, LiterPrice},
};

#[must_use]
pub fn build_price_table(
    fuel: &Quote<LiterPrice>,
    electricity: &Quote<KilowattHourPrice>,
) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Commodity", "Price", "Source", "Reason"]);
    table.add_row(build_row("Gasoline", fuel));
    table.add_row(build_row("Electricity", electricity));
    table
}

fn build_row<P: Copy + Display>(commodity: &str, quote: &Quote<P>) -> Vec<Cell> {
    let source = if quote.is_scraped() {
        Cell::new("scraped").fg(Color::Green)
    } else {
        Cell::new("default").fg(Color::Red)
    };
    let reason = match quote {
        Quote::Scraped(_) => Cell::new(""),
        Quote::Fallback { reason, .. } => Cell::new(reason).add_attribute(Attribute::Dim),
    };
    vec![
        Cell::new(commodity),
        Cell::new(quote.price()).set_alignment(CellAlignment::Right),
        source,
        reason,
    ]
}
