use crate::prelude::*;

quantity!(
    /// Fuel price, SEK per liter.
    LiterPrice,
    suffix: "SEK/L",
    precision: 2
);

quantity!(
    /// Electricity price, SEK per kilowatt-hour.
    KilowattHourPrice,
    suffix: "SEK/kWh",
    precision: 4
);

impl LiterPrice {
    /// Used when the fuel price could not be retrieved.
    pub const DEFAULT: Self = Self(20.0);
}

impl KilowattHourPrice {
    /// Used when the electricity price could not be retrieved.
    pub const DEFAULT: Self = Self(0.85);

    /// Convert a price in öre into kronor.
    pub const fn from_ore(ore: f64) -> Self {
        Self(ore / 100.0)
    }
}

/// Reject scraped prices that cannot be real: zero, negative, or not finite.
pub fn ensure_positive(price: f64) -> Result<f64> {
    ensure!(price.is_finite() && price > 0.0, "`{price}` is not a positive price");
    Ok(price)
}
