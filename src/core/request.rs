use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    core::{error::PlanError, fuel::FuelKind},
    quantity::{
        power::Megawatts,
        price::{MegawattHourPrice, TonPrice},
        proportions::Percent,
    },
};

/// Production plan job: the load to cover, the market prices, and the available fleet.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AllocationRequest {
    pub load: Megawatts,
    pub fuels: FuelPrices,
    pub powerplants: Vec<PlantDescriptor>,
}

/// Market prices as quoted in the payload.
///
/// The CO₂ price is not a fuel: it is the surcharge for burning gas.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FuelPrices {
    #[serde(rename = "gas(euro/MWh)", skip_serializing_if = "Option::is_none")]
    pub gas: Option<MegawattHourPrice>,

    #[serde(rename = "kerosine(euro/MWh)", skip_serializing_if = "Option::is_none")]
    pub kerosine: Option<MegawattHourPrice>,

    #[serde(rename = "co2(euro/ton)", skip_serializing_if = "Option::is_none")]
    pub co2: Option<TonPrice>,

    /// Wind availability in percent of the nominal capacity.
    #[serde(rename = "wind(%)", skip_serializing_if = "Option::is_none")]
    pub wind: Option<Percent>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlantDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: PlantKind,

    /// Required for thermal plants, ignored for wind turbines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,

    pub pmin: Megawatts,

    /// Nominal maximum output. For wind turbines, this is before the wind availability applies.
    pub pmax: Megawatts,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum PlantKind {
    #[display("gasfired")]
    GasFired,

    #[display("turbojet")]
    TurboJet,

    #[display("windturbine")]
    WindTurbine,
}

impl PlantKind {
    pub const fn fuel_kind(self) -> FuelKind {
        match self {
            Self::GasFired => FuelKind::Gas,
            Self::TurboJet => FuelKind::Kerosine,
            Self::WindTurbine => FuelKind::Wind,
        }
    }

    pub const fn is_thermal(self) -> bool {
        !matches!(self, Self::WindTurbine)
    }
}

impl AllocationRequest {
    /// Reject the requests the allocation cannot make sense of.
    pub fn validate(&self) -> Result<(), PlanError> {
        check_non_negative("load", self.load.0)?;
        self.fuels.validate()?;
        let mut names = HashSet::with_capacity(self.powerplants.len());
        for plant in &self.powerplants {
            plant.validate()?;
            if !names.insert(plant.name.as_str()) {
                return Err(PlanError::configuration(format!(
                    "duplicate power plant name `{}`",
                    plant.name,
                )));
            }
        }
        Ok(())
    }
}

impl FuelPrices {
    fn validate(&self) -> Result<(), PlanError> {
        if let Some(gas) = self.gas {
            check_non_negative(FuelKind::Gas.key(), gas.0)?;
        }
        if let Some(kerosine) = self.kerosine {
            check_non_negative(FuelKind::Kerosine.key(), kerosine.0)?;
        }
        if let Some(co2) = self.co2 {
            check_non_negative(Self::CO2_KEY, co2.0)?;
        }
        if let Some(wind) = self.wind
            && !(Percent::ZERO..=Percent::HUNDRED).contains(&wind)
        {
            return Err(PlanError::configuration(format!(
                "`{}` must be within 0..=100, got {}",
                FuelKind::Wind.key(),
                wind.0,
            )));
        }
        Ok(())
    }

    pub const CO2_KEY: &'static str = "co2(euro/ton)";
}

impl PlantDescriptor {
    fn validate(&self) -> Result<(), PlanError> {
        check_non_negative(&format!("`{}` pmin", self.name), self.pmin.0)?;
        check_non_negative(&format!("`{}` pmax", self.name), self.pmax.0)?;
        if self.pmin > self.pmax {
            return Err(PlanError::configuration(format!(
                "`{}` has pmin {} above pmax {}",
                self.name, self.pmin, self.pmax,
            )));
        }
        if self.kind.is_thermal() {
            match self.efficiency {
                Some(efficiency) if (0.0..=1.0).contains(&efficiency) => {}
                Some(efficiency) => {
                    return Err(PlanError::configuration(format!(
                        "`{}` efficiency must be within 0..=1, got {efficiency}",
                        self.name,
                    )));
                }
                None => {
                    return Err(PlanError::configuration(format!(
                        "{} `{}` lacks efficiency",
                        self.kind, self.name,
                    )));
                }
            }
        }
        Ok(())
    }
}

fn check_non_negative(what: &str, value: f64) -> Result<(), PlanError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlanError::configuration(format!("{what} must be a non-negative number, got {value}")))
    }
}
