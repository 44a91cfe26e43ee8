use std::fmt::Display;

use crate::prelude::*;

/// Outcome of a price lookup. Always carries a usable price.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub enum Quote<P> {
    /// Freshly scraped from the source page.
    Scraped(P),

    /// The lookup failed and the built-in default is used instead.
    Fallback { price: P, reason: String },
}

impl<P: Copy + Display> Quote<P> {
    /// Substitute the default for any lookup failure, logging a warning.
    pub fn or_default(commodity: &str, result: Result<P>, default: P) -> Self {
        match result {
            Ok(price) => Self::Scraped(price),
            Err(error) => {
                warn!("unable to retrieve the {commodity} price, falling back to {default}: {error:#}");
                Self::Fallback { price: default, reason: format!("{error:#}") }
            }
        }
    }

    pub fn price(&self) -> P {
        match self {
            Self::Scraped(price) | Self::Fallback { price, .. } => *price,
        }
    }

    pub const fn is_scraped(&self) -> bool {
        matches!(self, Self::Scraped(_))
    }
}
