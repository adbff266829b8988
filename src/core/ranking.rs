use itertools::Itertools;

use crate::core::plant::PowerPlant;

/// Plants sorted by their marginal cost of output, cheapest first.
///
/// Plants of equal cost keep their input order.
pub struct MeritOrder<'a>(Vec<&'a PowerPlant>);

impl<'a> MeritOrder<'a> {
    pub fn rank(plants: &'a [PowerPlant]) -> Self {
        Self(plants.iter().sorted_by_key(|plant| plant.cost_per_output()).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a PowerPlant> + '_ {
        self.0.iter().copied()
    }

    /// One-based rank of the plant, if it is a part of this order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|plant| plant.name == name).map(|index| index + 1)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::core::plant::tests::{thermal, wind};

    #[test]
    fn test_rank() {
        let plants = [
            thermal("expensive", 50.8, 0.3, 0.0, 16.0),
            thermal("cheap", 19.4, 0.53, 100.0, 460.0),
            wind("windpark1", 0.6, 150.0),
        ];
        let names = MeritOrder::rank(&plants).iter().map(|plant| plant.name.as_str()).collect_vec();
        assert_eq!(names, ["windpark1", "cheap", "expensive"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let plants = [
            thermal("gasfiredbig1", 19.4, 0.53, 100.0, 460.0),
            wind("windpark1", 0.6, 150.0),
            thermal("gasfiredbig2", 19.4, 0.53, 100.0, 460.0),
            wind("windpark2", 0.6, 36.0),
        ];
        let names = MeritOrder::rank(&plants).iter().map(|plant| plant.name.as_str()).collect_vec();
        assert_eq!(names, ["windpark1", "windpark2", "gasfiredbig1", "gasfiredbig2"]);
    }

    #[test]
    fn test_zero_efficiency_goes_last() {
        let plants = [
            thermal("broken", 0.0, 0.0, 0.0, 100.0),
            thermal("pricey", 1000.0, 0.1, 0.0, 100.0),
        ];
        let merit_order = MeritOrder::rank(&plants);
        assert_eq!(merit_order.position("pricey"), Some(1));
        assert_eq!(merit_order.position("broken"), Some(2));
        assert_eq!(merit_order.position("missing"), None);
    }
}
