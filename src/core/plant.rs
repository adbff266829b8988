use crate::{
    core::{
        error::PlanError,
        fuel::{Fuel, Fuels},
        request::{AllocationRequest, PlantDescriptor, PlantKind},
    },
    prelude::*,
    quantity::{power::Megawatts, price::MegawattHourPrice},
};

#[derive(Clone, Debug)]
pub struct PowerPlant {
    pub name: String,
    pub kind: PlantKind,

    /// Thermal plants: electrical output per unit of fuel energy.
    /// Wind turbines: the wind availability.
    pub efficiency: f64,

    pub pmin: Megawatts,

    /// Maximum output, already scaled by the wind availability for wind turbines.
    pub pmax: Megawatts,

    pub fuel: Fuel,
}

impl PowerPlant {
    pub const fn thermal(
        name: String,
        kind: PlantKind,
        efficiency: f64,
        pmin: Megawatts,
        pmax: Megawatts,
        fuel: Fuel,
    ) -> Self {
        Self { name, kind, efficiency, pmin, pmax, fuel }
    }

    /// Wind turbine can only deliver the available share of its nominal capacity.
    ///
    /// The minimum output is capped by that share as well, so that `pmin <= pmax` still holds.
    pub fn wind_turbine(
        name: String,
        pmin: Megawatts,
        nominal_pmax: Megawatts,
        fuel: Fuel,
    ) -> Self {
        let pmax = nominal_pmax * fuel.availability;
        Self {
            name,
            kind: PlantKind::WindTurbine,
            efficiency: fuel.availability,
            pmin: pmin.min(pmax),
            pmax,
            fuel,
        }
    }

    pub fn try_from_descriptor(
        descriptor: &PlantDescriptor,
        fuels: &Fuels,
    ) -> Result<Self, PlanError> {
        let fuel = *fuels.get(descriptor.kind.fuel_kind()).map_err(|_| {
            PlanError::configuration(format!(
                "{} `{}` needs the `{}` price",
                descriptor.kind,
                descriptor.name,
                descriptor.kind.fuel_kind().key(),
            ))
        })?;
        let name = descriptor.name.clone();
        if descriptor.kind.is_thermal() {
            let efficiency = descriptor.efficiency.ok_or_else(|| {
                PlanError::configuration(format!(
                    "{} `{}` lacks efficiency",
                    descriptor.kind, descriptor.name,
                ))
            })?;
            Ok(Self::thermal(
                name,
                descriptor.kind,
                efficiency,
                descriptor.pmin,
                descriptor.pmax,
                fuel,
            ))
        } else {
            Ok(Self::wind_turbine(name, descriptor.pmin, descriptor.pmax, fuel))
        }
    }

    /// Marginal cost of one megawatt-hour of electrical output.
    ///
    /// A plant with zero efficiency costs infinitely much, so it is always the last resort.
    pub fn cost_per_output(&self) -> MegawattHourPrice {
        if self.efficiency == 0.0 {
            MegawattHourPrice::INFINITY
        } else {
            self.fuel.effective_price / self.efficiency
        }
    }
}

/// Validate the request and build its plants in the input order.
#[instrument(skip_all, fields(n_plants = request.powerplants.len()))]
pub fn build_fleet(request: &AllocationRequest) -> Result<Vec<PowerPlant>, PlanError> {
    request.validate()?;
    let fuels = Fuels::try_from_prices(&request.fuels)?;
    request
        .powerplants
        .iter()
        .map(|descriptor| PowerPlant::try_from_descriptor(descriptor, &fuels))
        .collect()
}
