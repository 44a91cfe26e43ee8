use crate::{
    core::cost::{electricity_cost, fuel_cost},
    quantity::{
        currency::Kronor,
        distance::Kilometers,
        efficiency::{KilometersPerKilowattHour, KilometersPerLiter},
        price::{KilowattHourPrice, LiterPrice},
    },
};

/// Commute parameters supplied by the user.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    /// Round-trip length.
    pub distance: Kilometers,

    /// Car fuel efficiency.
    pub fuel_efficiency: KilometersPerLiter,

    /// E-bike efficiency.
    pub electric_efficiency: KilometersPerKilowattHour,
}

impl Trip {
    pub fn fuel_cost(&self, price: LiterPrice) -> Kronor {
        fuel_cost(self.distance, price, self.fuel_efficiency)
    }

    pub fn electricity_cost(&self, price: KilowattHourPrice) -> Kronor {
        electricity_cost(self.distance, price, self.electric_efficiency)
    }
}
