quantity!(Percent, suffix: "%", precision: 0);

impl Percent {
    pub const HUNDRED: Self = Self(100.0);

    /// Convert the percentage into `0.0..=1.0`.
    pub const fn to_proportion(self) -> f64 {
        self.0 / 100.0
    }
}
