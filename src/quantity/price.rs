quantity!(
    /// Euro per megawatt-hour of fuel or of electrical output, depending on the context.
    MegawattHourPrice, suffix: "€/MWh", precision: 2
);

quantity!(
    /// Euro per ton of emitted CO₂.
    TonPrice, suffix: "€/t", precision: 2
);

quantity!(
    /// Tons of CO₂ emitted per megawatt-hour of fuel burnt.
    EmissionIntensity, suffix: "t/MWh", precision: 2
);

implement_mul!(TonPrice, EmissionIntensity, MegawattHourPrice);

impl MegawattHourPrice {
    pub const INFINITY: Self = Self(f64::INFINITY);
}
