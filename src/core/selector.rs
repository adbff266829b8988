use crate::{
    core::{error::PlanError, plant::PowerPlant, ranking::MeritOrder},
    prelude::*,
    quantity::power::Megawatts,
};

/// Select the cheapest plants whose combined maximum output covers the load.
///
/// A candidate is admitted as long as its `pmin` does not exceed the **whole** load,
/// not the load that is still uncovered. This admits plants whose minimum output
/// overshoots the remaining demand, and is kept on purpose.
#[instrument(skip_all, fields(load = %load))]
pub fn select_required<'a>(
    merit_order: &MeritOrder<'a>,
    load: Megawatts,
) -> Result<Vec<&'a PowerPlant>, PlanError> {
    let mut required = Vec::new();
    let mut capacity = Megawatts::ZERO;

    for plant in merit_order.iter() {
        if capacity >= load {
            break;
        }
        if load - plant.pmin >= Megawatts::ZERO {
            capacity += plant.pmax;
            required.push(plant);
        } else {
            debug!(%plant.name, %plant.pmin, "skipping: minimum output exceeds the load");
        }
    }

    if capacity < load {
        return Err(PlanError::Infeasible { load, capacity });
    }
    debug!(n_required = required.len(), %capacity, "selected");
    Ok(required)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::core::plant::tests::{thermal, wind};

    fn names(plants: &[&PowerPlant]) -> Vec<String> {
        plants.iter().map(|plant| plant.name.clone()).collect_vec()
    }

    #[test]
    fn test_minimal_prefix() {
        let plants = [
            wind("windpark1", 0.6, 150.0),
            thermal("gasfiredbig1", 19.4, 0.53, 100.0, 460.0),
            thermal("tj1", 50.8, 0.3, 0.0, 100.0),
        ];
        let merit_order = MeritOrder::rank(&plants);
        let required = select_required(&merit_order, Megawatts(480.0)).unwrap();
        assert_eq!(names(&required), ["windpark1", "gasfiredbig1"]);
    }

    #[test]
    fn test_pmin_above_load_is_skipped() {
        let plants = [
            thermal("gasfiredbig1", 19.4, 0.53, 100.0, 460.0),
            thermal("tj1", 50.8, 0.3, 0.0, 60.0),
        ];
        let merit_order = MeritOrder::rank(&plants);
        let required = select_required(&merit_order, Megawatts(50.0)).unwrap();
        assert_eq!(names(&required), ["tj1"]);
    }

    #[test]
    fn test_admission_checks_the_whole_load() {
        // After the first plant, only 20 MW remain uncovered,
        // but the second one is still admitted with its 100 MW minimum:
        let plants = [
            thermal("cheap", 10.0, 0.5, 0.0, 100.0),
            thermal("bulky", 20.0, 0.5, 100.0, 200.0),
        ];
        let merit_order = MeritOrder::rank(&plants);
        let required = select_required(&merit_order, Megawatts(120.0)).unwrap();
        assert_eq!(names(&required), ["cheap", "bulky"]);
    }

    #[test]
    fn test_last_plant_completes_the_set() {
        let plants = [thermal("a", 10.0, 0.5, 0.0, 100.0), thermal("b", 20.0, 0.5, 0.0, 100.0)];
        let merit_order = MeritOrder::rank(&plants);
        let required = select_required(&merit_order, Megawatts(200.0)).unwrap();
        assert_eq!(names(&required), ["a", "b"]);
    }

    #[test]
    fn test_infeasible() {
        let plants = [thermal("a", 10.0, 0.5, 0.0, 100.0), wind("windpark1", 0.5, 100.0)];
        let merit_order = MeritOrder::rank(&plants);
        match select_required(&merit_order, Megawatts(151.0)) {
            Err(PlanError::Infeasible { load, capacity }) => {
                assert_eq!(load, Megawatts(151.0));
                assert_eq!(capacity, Megawatts(150.0));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_zero_load_needs_nothing() {
        let plants = [thermal("a", 10.0, 0.5, 0.0, 100.0)];
        let merit_order = MeritOrder::rank(&plants);
        assert!(select_required(&merit_order, Megawatts::ZERO).unwrap().is_empty());
    }
}
