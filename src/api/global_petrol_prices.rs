//! [GlobalPetrolPrices](https://www.globalpetrolprices.com) gasoline price page.

use scraper::Html;
use ureq::Agent;

use crate::{
    api::{client, dom},
    prelude::*,
    quantity::price::{LiterPrice, ensure_positive},
};

pub const URL: &str = "https://www.globalpetrolprices.com/Sweden/gasoline_prices/";

pub struct Api {
    client: Agent,
    url: String,
}

impl Api {
    pub const fn new(client: Agent, url: String) -> Self {
        Self { client, url }
    }

    #[instrument(skip_all, fields(url = %self.url))]
    pub fn get_price(&self) -> Result<LiterPrice> {
        info!("fetching the gasoline price…");
        let html = client::get_text(&self.client, &self.url)?;
        let price = extract_price(&html)?;
        info!(%price, "fetched");
        Ok(price)
    }
}

/// Extract the current price from the first body row of the `#contentHolder` table.
///
/// Every body row must hold a price in its first cell, otherwise the page is rejected.
pub fn extract_price(html: &str) -> Result<LiterPrice> {
    let document = Html::parse_document(html);
    let container = document
        .select(&dom::selector("div#contentHolder")?)
        .next()
        .context("the page has no `#contentHolder` container")?;
    let table =
        container.select(&dom::selector("table")?).next().context("the container has no table")?;
    let body = table.select(&dom::selector("tbody")?).next().context("the table has no body")?;
    let prices = body
        .select(&dom::selector("tr")?)
        .map(|row| parse_price(&dom::text(dom::cell(row, 0)?)))
        .collect::<Result<Vec<f64>>>()?;
    let price = prices.first().copied().context("the table body has no rows")?;
    Ok(LiterPrice(ensure_positive(price)?))
}

fn parse_price(text: &str) -> Result<f64> {
    let text = text.trim();
    text.parse().with_context(|| format!("`{text}` is not a price"))
}
