//! Linear trip cost models.
//!
//! No validation: zero efficiency yields infinity or NaN, negative inputs yield negative costs.

use crate::quantity::{
    currency::Kronor,
    distance::Kilometers,
    efficiency::{KilometersPerKilowattHour, KilometersPerLiter},
    price::{KilowattHourPrice, LiterPrice},
};

/// Cost of driving the distance by car.
pub fn fuel_cost(
    distance: Kilometers,
    price: LiterPrice,
    efficiency: KilometersPerLiter,
) -> Kronor {
    Kronor(price.0 * distance.0 / efficiency.0)
}

/// Cost of riding the distance by e-bike.
pub fn electricity_cost(
    distance: Kilometers,
    price: KilowattHourPrice,
    efficiency: KilometersPerKilowattHour,
) -> Kronor {
    Kronor(price.0 * distance.0 / efficiency.0)
}
