pub mod allocator;
pub mod error;
pub mod fuel;
pub mod plan;
pub mod plant;
pub mod ranking;
pub mod request;
pub mod selector;

use crate::{
    core::{
        allocator::Allocator,
        error::PlanError,
        plan::Plan,
        plant::{PowerPlant, build_fleet},
        ranking::MeritOrder,
        request::AllocationRequest,
        selector::select_required,
    },
    prelude::*,
    quantity::power::Megawatts,
};

/// Compute the production plan for the request.
#[instrument(skip_all, fields(load = %request.load))]
pub fn plan(request: &AllocationRequest) -> Result<Plan, PlanError> {
    let plants = build_fleet(request)?;
    dispatch(&plants, request.load)
}

/// Cover the load with the plants in the merit order.
pub fn dispatch(plants: &[PowerPlant], load: Megawatts) -> Result<Plan, PlanError> {
    let merit_order = MeritOrder::rank(plants);
    let required = select_required(&merit_order, load)?;
    let allocation = Allocator::builder().load(load).required(&required).build().allocate()?;
    let plan = Plan::format(plants, &allocation);
    info!(
        total = %plan.total(),
        n_running = required.len(),
        n_rounds = allocation.n_rounds(),
        "planned",
    );
    Ok(plan)
}
