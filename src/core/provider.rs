use crate::{
    api::{client, global_petrol_prices, vattenfall},
    core::quote::Quote,
    prelude::*,
    quantity::price::{KilowattHourPrice, LiterPrice},
};

/// Looks up the current prices, never failing.
pub struct PriceFetcher {
    fuel: global_petrol_prices::Api,
    electricity: vattenfall::Api,
}

impl PriceFetcher {
    pub fn new(fuel_url: String, electricity_url: String) -> Self {
        let client = client::new();
        Self {
            fuel: global_petrol_prices::Api::new(client.clone(), fuel_url),
            electricity: vattenfall::Api::new(client, electricity_url),
        }
    }

    #[instrument(skip_all)]
    pub fn fetch_fuel_price(&self) -> Quote<LiterPrice> {
        fuel_quote(self.fuel.get_price())
    }

    #[instrument(skip_all)]
    pub fn fetch_electricity_price(&self) -> Quote<KilowattHourPrice> {
        electricity_quote(self.electricity.get_price())
    }
}

fn fuel_quote(price: Result<LiterPrice>) -> Quote<LiterPrice> {
    Quote::or_default("gasoline", price, LiterPrice::DEFAULT)
}

fn electricity_quote(price: Result<KilowattHourPrice>) -> Quote<KilowattHourPrice> {
    Quote::or_default("electricity", price, KilowattHourPrice::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_sources_fall_back() {
        let fetcher =
            PriceFetcher::new("http://127.0.0.1:9/fuel".to_string(), "not a url".to_string());

        let fuel = fetcher.fetch_fuel_price();
        assert!(!fuel.is_scraped());
        assert_eq!(fuel.price(), LiterPrice(20.0));

        let electricity = fetcher.fetch_electricity_price();
        assert!(!electricity.is_scraped());
        assert_eq!(electricity.price(), KilowattHourPrice(0.85));
    }

    #[test]
    fn unexpected_pages_fall_back() {
        // language=html
        let page = r"<html><body><p>Sidan kunde inte hittas</p></body></html>";

        let fuel = fuel_quote(global_petrol_prices::extract_price(page));
        assert!(!fuel.is_scraped());
        assert_eq!(fuel.price(), LiterPrice(20.0));

        let electricity = electricity_quote(vattenfall::extract_price(page));
        assert!(!electricity.is_scraped());
        assert_eq!(electricity.price(), KilowattHourPrice(0.85));
    }

    #[test]
    fn malformed_rows_fall_back() {
        // language=html
        let fuel_page = r#"
            <div id="contentHolder">
                <table><tbody><tr><td>18.74</td></tr><tr><td>n/a</td></tr></tbody></table>
            </div>
        "#;
        assert_eq!(
            fuel_quote(global_petrol_prices::extract_price(fuel_page)).price(),
            LiterPrice(20.0),
        );

        // language=html
        let electricity_page = "<table><tr><td>Elområde</td><td>Pris</td></tr></table>";
        assert_eq!(
            electricity_quote(vattenfall::extract_price(electricity_page)).price(),
            KilowattHourPrice(0.85),
        );
    }

    #[test]
    fn extracted_prices_are_scraped() {
        // language=html
        let page = r#"<div id="contentHolder"><table><tr><td>19.5</td></tr></table></div>"#;
        assert_eq!(
            fuel_quote(global_petrol_prices::extract_price(page)),
            Quote::Scraped(LiterPrice(19.5)),
        );
    }

    #[test]
    #[ignore = "makes the HTTP request"]
    fn live_sources_ok() {
        let fetcher = PriceFetcher::new(
            global_petrol_prices::URL.to_string(),
            vattenfall::URL.to_string(),
        );
        assert!(fetcher.fetch_fuel_price().is_scraped());
        assert!(fetcher.fetch_electricity_price().is_scraped());
    }
}
