quantity!(
    /// Fuel efficiency of a car.
    KilometersPerLiter,
    suffix: "km/L",
    precision: 1
);

quantity!(
    /// Electric efficiency of an e-bike.
    KilometersPerKilowattHour,
    suffix: "km/kWh",
    precision: 0
);

impl KilometersPerLiter {
    /// Average passenger car.
    pub const DEFAULT: Self = Self(9.4);
}

impl KilometersPerKilowattHour {
    /// Typical e-bike does 80-100 km per kilowatt-hour.
    pub const DEFAULT: Self = Self(100.0);
}
