use bon::Builder;

use crate::{
    core::{error::PlanError, plant::PowerPlant},
    prelude::*,
    quantity::power::Megawatts,
};

/// Output assigned to a single required plant.
#[derive(Copy, Clone, Debug)]
pub struct Assignment<'a> {
    pub plant: &'a PowerPlant,
    pub power: Megawatts,
}

impl Assignment<'_> {
    pub fn has_headroom(&self) -> bool {
        self.power < self.plant.pmax
    }
}

/// Outputs of the required plants, in the order the plants were required.
#[derive(Clone, Debug)]
pub struct Allocation<'a> {
    assignments: Vec<Assignment<'a>>,

    /// Number of top-up rounds it took.
    n_rounds: usize,
}

impl<'a> Allocation<'a> {
    /// Every required plant starts at its minimum output.
    pub fn at_minimum(required: &[&'a PowerPlant]) -> Self {
        let assignments =
            required.iter().copied().map(|plant| Assignment { plant, power: plant.pmin }).collect();
        Self { assignments, n_rounds: 0 }
    }

    pub fn total(&self) -> Megawatts {
        self.assignments.iter().map(|assignment| assignment.power).sum()
    }

    pub fn has_headroom(&self) -> bool {
        self.assignments.iter().any(Assignment::has_headroom)
    }

    pub const fn n_rounds(&self) -> usize {
        self.n_rounds
    }

    /// Output of the named plant, zero if it was not required.
    pub fn power_of(&self, name: &str) -> Megawatts {
        self.assignments
            .iter()
            .find(|assignment| assignment.plant.name == name)
            .map_or(Megawatts::ZERO, |assignment| assignment.power)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment<'a>> {
        self.assignments.iter()
    }
}

/// Greedy top-up of the required plants.
#[derive(Builder)]
pub struct Allocator<'a> {
    load: Megawatts,

    /// Required plants, cheapest first.
    required: &'a [&'a PowerPlant],
}

impl<'a> Allocator<'a> {
    /// Start the required plants at their minimum and repeatedly raise the cheapest one
    /// that still has headroom, until the load is covered.
    ///
    /// Each round either covers the load or saturates a plant, so the number of rounds
    /// is capped by the number of required plants. An uncovered remainder after the last round
    /// is returned as is.
    #[instrument(skip_all, fields(load = %self.load, n_required = self.required.len()))]
    pub fn allocate(self) -> Result<Allocation<'a>, PlanError> {
        let mut allocation = Allocation::at_minimum(self.required);
        let mut total = allocation.total();

        while total < self.load
            && allocation.has_headroom()
            && allocation.n_rounds < self.required.len()
        {
            let (index, power) = self.best_addition(&allocation, total)?;
            let assignment = &mut allocation.assignments[index];
            trace!(%assignment.plant.name, from = %assignment.power, to = %power, "raising");
            assignment.power = power;
            total = allocation.total();
            allocation.n_rounds += 1;
        }

        if total < self.load {
            warn!(%total, shortfall = %(self.load - total), "the load is not fully covered");
        } else {
            debug!(%total, allocation.n_rounds, "allocated");
        }
        Ok(allocation)
    }

    /// Pick the cheapest plant with headroom, the first one wins a tie,
    /// and calculate the output that covers as much of the missing load as it can.
    ///
    /// # Returns
    ///
    /// Index of the plant in the allocation, and its new output.
    fn best_addition(
        &self,
        allocation: &Allocation<'_>,
        total: Megawatts,
    ) -> Result<(usize, Megawatts), PlanError> {
        let (index, assignment) = allocation
            .iter()
            .enumerate()
            .filter(|(_, assignment)| assignment.has_headroom())
            // `min_by_key` keeps the first minimum. A zero-efficiency plant costs +∞
            // and is still picked once it is the only one with headroom left:
            .min_by_key(|(_, assignment)| assignment.plant.cost_per_output())
            .ok_or(PlanError::Invariant { reason: "no required plant has headroom left" })?;
        let needed = self.load - total + assignment.power;
        Ok((index, needed.min(assignment.plant.pmax)))
    }
}
