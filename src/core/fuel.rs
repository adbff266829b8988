use std::collections::BTreeMap;

use crate::{
    core::{error::PlanError, request::FuelPrices},
    prelude::*,
    quantity::price::{EmissionIntensity, MegawattHourPrice, TonPrice},
};

/// Burning one megawatt-hour of gas emits this much CO₂.
pub const CO2_TONS_PER_GAS_MWH: EmissionIntensity = EmissionIntensity(0.3);

#[derive(Copy, Clone, Debug, Eq, Ord, PartialEq, PartialOrd, derive_more::Display)]
pub enum FuelKind {
    #[display("gas")]
    Gas,

    #[display("kerosine")]
    Kerosine,

    #[display("wind")]
    Wind,
}

impl FuelKind {
    /// Payload key under which the fuel price is quoted.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gas => "gas(euro/MWh)",
            Self::Kerosine => "kerosine(euro/MWh)",
            Self::Wind => "wind(%)",
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Fuel {
    pub kind: FuelKind,

    /// Marginal cost of one megawatt-hour of fuel, surcharges included.
    pub effective_price: MegawattHourPrice,

    pub emission_factor: EmissionIntensity,

    /// Share of the nominal capacity this fuel lets a plant deliver, `0..=1`.
    ///
    /// Only wind is ever below one.
    pub availability: f64,
}

impl Fuel {
    pub const fn wind(availability: f64) -> Self {
        Self {
            kind: FuelKind::Wind,
            effective_price: MegawattHourPrice::ZERO,
            emission_factor: EmissionIntensity::ZERO,
            availability,
        }
    }

    pub fn thermal(
        kind: FuelKind,
        price: MegawattHourPrice,
        emission_factor: EmissionIntensity,
        emission_price: TonPrice,
    ) -> Self {
        Self {
            kind,
            effective_price: price + emission_price * emission_factor,
            emission_factor,
            availability: 1.0,
        }
    }
}

/// Per-request fuel lookup.
#[derive(Clone, Debug)]
pub struct Fuels(BTreeMap<FuelKind, Fuel>);

impl Fuels {
    /// Turn the quoted prices into effective marginal costs.
    ///
    /// Fails when the CO₂ price is missing, regardless of whether any gas plant is present.
    #[instrument(skip_all)]
    pub fn try_from_prices(prices: &FuelPrices) -> Result<Self, PlanError> {
        let emission_price = prices.co2.ok_or_else(|| {
            PlanError::configuration(format!("missing `{}` price", FuelPrices::CO2_KEY))
        })?;

        let mut fuels = BTreeMap::new();
        if let Some(price) = prices.gas {
            fuels.insert(
                FuelKind::Gas,
                Fuel::thermal(FuelKind::Gas, price, CO2_TONS_PER_GAS_MWH, emission_price),
            );
        }
        if let Some(price) = prices.kerosine {
            fuels.insert(
                FuelKind::Kerosine,
                Fuel::thermal(FuelKind::Kerosine, price, EmissionIntensity::ZERO, emission_price),
            );
        }
        if let Some(availability) = prices.wind {
            fuels.insert(FuelKind::Wind, Fuel::wind(availability.to_proportion()));
        }

        for fuel in fuels.values() {
            debug!(
                %fuel.kind,
                %fuel.effective_price,
                %fuel.emission_factor,
                fuel.availability,
                "fuel",
            );
        }
        Ok(Self(fuels))
    }

    pub fn get(&self, kind: FuelKind) -> Result<&Fuel, PlanError> {
        self.0
            .get(&kind)
            .ok_or_else(|| PlanError::configuration(format!("missing `{}` price", kind.key())))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::proportions::Percent;

    fn prices() -> FuelPrices {
        FuelPrices {
            gas: Some(MegawattHourPrice(13.4)),
            kerosine: Some(MegawattHourPrice(50.8)),
            co2: Some(TonPrice(20.0)),
            wind: Some(Percent(60.0)),
        }
    }

    #[test]
    fn test_gas_includes_emission_surcharge() {
        let fuels = Fuels::try_from_prices(&prices()).unwrap();
        let gas = fuels.get(FuelKind::Gas).unwrap();
        assert_abs_diff_eq!(gas.effective_price.0, 13.4 + 20.0 * 0.3);
        assert_abs_diff_eq!(gas.availability, 1.0);
    }

    #[test]
    fn test_kerosine_is_unchanged() {
        let fuels = Fuels::try_from_prices(&prices()).unwrap();
        assert_eq!(fuels.get(FuelKind::Kerosine).unwrap().effective_price, MegawattHourPrice(50.8));
    }

    #[test]
    fn test_wind_is_free() {
        let fuels = Fuels::try_from_prices(&prices()).unwrap();
        let wind = fuels.get(FuelKind::Wind).unwrap();
        assert_eq!(wind.effective_price, MegawattHourPrice::ZERO);
        assert_abs_diff_eq!(wind.availability, 0.6);
    }

    #[test]
    fn test_missing_co2() {
        let prices = FuelPrices { co2: None, ..prices() };
        assert!(matches!(Fuels::try_from_prices(&prices), Err(PlanError::Configuration { .. })));
    }

    #[test]
    fn test_missing_fuel() {
        let prices = FuelPrices { kerosine: None, ..prices() };
        let fuels = Fuels::try_from_prices(&prices).unwrap();
        assert!(matches!(fuels.get(FuelKind::Kerosine), Err(PlanError::Configuration { .. })));
    }

    #[test]
    fn test_prices_are_left_intact() {
        let prices = prices();
        let _ = Fuels::try_from_prices(&prices).unwrap();
        let _ = Fuels::try_from_prices(&prices).unwrap();
        assert_eq!(prices.co2, Some(TonPrice(20.0)));
    }
}
