quantity!(
    /// Swedish krona.
    Kronor,
    suffix: "SEK",
    precision: 2
);

impl Kronor {
    /// Radius of a disk whose area encodes this amount.
    #[must_use]
    pub fn area_radius(self) -> f64 {
        self.0.sqrt()
    }
}
