//! [Vattenfall](https://www.vattenfall.se) electricity market price page.

use ordered_float::OrderedFloat;
use scraper::Html;
use ureq::Agent;

use crate::{
    api::{client, dom},
    prelude::*,
    quantity::price::{KilowattHourPrice, ensure_positive},
};

pub const URL: &str = "https://www.vattenfall.se/elavtal/elmarknaden/elmarknaden-just-nu/";

pub struct Api {
    client: Agent,
    url: String,
}

impl Api {
    pub const fn new(client: Agent, url: String) -> Self {
        Self { client, url }
    }

    /// Get the highest listed price.
    #[instrument(skip_all, fields(url = %self.url))]
    pub fn get_price(&self) -> Result<KilowattHourPrice> {
        info!("fetching the electricity prices…");
        let html = client::get_text(&self.client, &self.url)?;
        let price = extract_price(&html)?;
        info!(%price, "fetched");
        Ok(price)
    }
}

/// Extract the highest listed price in kronor.
pub fn extract_price(html: &str) -> Result<KilowattHourPrice> {
    let prices = extract_prices(html)?;
    debug!(?prices, "extracted");
    max_price(&prices)
}

/// Extract the raw prices (öre per kilowatt-hour) from the second column of the first table.
///
/// The first body row is a header and is skipped.
pub fn extract_prices(html: &str) -> Result<Vec<f64>> {
    let document = Html::parse_document(html);
    let table = document.select(&dom::selector("table")?).next().context("the page has no table")?;
    let body = table.select(&dom::selector("tbody")?).next().context("the table has no body")?;
    body.select(&dom::selector("tr")?)
        .skip(1)
        .map(|row| parse_ore(&dom::text(dom::cell(row, 1)?)))
        .collect()
}

/// Parse the leading decimal, such as `123,45` in `123,45 öre/kWh`.
fn parse_ore(text: &str) -> Result<f64> {
    let token = text.split_whitespace().next().context("the price cell is empty")?;
    token.replace(',', ".").parse().with_context(|| format!("`{token}` is not a decimal number"))
}

/// The highest price converted from öre into kronor.
pub fn max_price(prices: &[f64]) -> Result<KilowattHourPrice> {
    let OrderedFloat(max) =
        prices.iter().copied().map(OrderedFloat).max().context("the price table is empty")?;
    let price = KilowattHourPrice::from_ore(max);
    ensure_positive(price.0)?;
    Ok(price)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    // language=html
    const PAGE: &str = r#"
        <html>
        <body>
            <h2>Elpriser per elområde</h2>
            <table>
                <tbody>
                    <tr><td>Elområde</td><td>Pris</td></tr>
                    <tr><td>SE1 Luleå</td><td>10,5 öre/kWh</td></tr>
                    <tr><td>SE2 Sundsvall</td><td>20,0 öre/kWh</td></tr>
                    <tr><td>SE3 Stockholm</td><td>15,3 öre/kWh</td></tr>
                </tbody>
            </table>
            <table>
                <tbody><tr><td>Other</td><td>999,9</td></tr></tbody>
            </table>
        </body>
        </html>
    "#;

    #[test]
    fn extract_prices_ok() -> Result {
        assert_eq!(extract_prices(PAGE)?, [10.5, 20.0, 15.3]);
        Ok(())
    }

    #[test]
    fn max_price_ok() -> Result {
        let price = max_price(&extract_prices(PAGE)?)?;
        assert_abs_diff_eq!(price.0, 0.2);
        Ok(())
    }

    #[test]
    fn extract_price_ok() -> Result {
        assert_abs_diff_eq!(extract_price(PAGE)?.0, 0.2);
        Ok(())
    }

    #[test]
    fn dot_decimal_ok() -> Result {
        assert_abs_diff_eq!(parse_ore("  42.75\n")?, 42.75);
        Ok(())
    }

    #[test]
    fn header_only_err() -> Result {
        // language=html
        let html = "<table><tr><td>Elområde</td><td>Pris</td></tr></table>";
        assert!(extract_prices(html)?.is_empty());
        assert!(max_price(&[]).is_err());
        Ok(())
    }

    #[test]
    fn malformed_row_err() {
        // language=html
        let html = "<table><tr><th>Header</th></tr><tr><td>SE1</td></tr></table>";
        assert!(extract_prices(html).is_err());
    }

    #[test]
    fn non_numeric_price_err() {
        // language=html
        let html = "<table><tr><td>Header</td></tr><tr><td>SE1</td><td>okänt</td></tr></table>";
        assert!(extract_prices(html).is_err());
    }

    #[test]
    fn no_table_err() {
        assert!(extract_prices("<p>Underhåll pågår</p>").is_err());
    }

    #[test]
    #[ignore = "makes the HTTP request"]
    fn get_price_ok() -> Result {
        let price = Api::new(client::new(), URL.to_string()).get_price()?;
        assert!(price > KilowattHourPrice::ZERO);
        Ok(())
    }
}
