pub mod client;
mod dom;
pub mod global_petrol_prices;
pub mod vattenfall;
