quantity!(Megawatts, suffix: "MW", precision: 1);

impl Megawatts {
    /// Round to one decimal place, the precision of the published plan.
    pub fn round_to_tenth(self) -> Self {
        Self((self.0 * 10.0).round() / 10.0)
    }
}
