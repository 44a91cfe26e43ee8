//! Small helpers around [`scraper`] shared by the page extractors.

use scraper::{ElementRef, Selector};

use crate::prelude::*;

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|error| anyhow!("invalid selector `{css}`: {error}"))
}

/// Concatenated text of the element and all its descendants.
pub fn text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// The `index`-th (zero-based) `<td>` in the row.
pub fn cell(row: ElementRef<'_>, index: usize) -> Result<ElementRef<'_>> {
    let cells = selector("td")?;
    let cell = row.select(&cells).nth(index).with_context(|| format!("cell #{index} is missing"))?;
    Ok(cell)
}
