pub mod cost;
pub mod provider;
pub mod quote;
pub mod trip;
