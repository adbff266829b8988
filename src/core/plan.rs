use serde::{Deserialize, Serialize};

use crate::{
    core::{allocator::Allocation, plant::PowerPlant},
    quantity::power::Megawatts,
};

/// Output of a single plant as published in the response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlannedOutput {
    pub name: String,

    /// Power to deliver, rounded to one decimal place.
    pub p: Megawatts,
}

/// Production plan covering every plant of the request, in the input order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
#[must_use]
pub struct Plan(pub Vec<PlannedOutput>);

impl Plan {
    /// Plants that were not required get zero output.
    pub fn format(plants: &[PowerPlant], allocation: &Allocation<'_>) -> Self {
        Self(
            plants
                .iter()
                .map(|plant| PlannedOutput {
                    name: plant.name.clone(),
                    p: allocation.power_of(&plant.name).round_to_tenth(),
                })
                .collect(),
        )
    }

    pub fn total(&self) -> Megawatts {
        self.0.iter().map(|output| output.p).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlannedOutput> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::plant::tests::{thermal, wind};

    #[test]
    fn test_format_keeps_input_order_and_zeroes() {
        let plants = [
            thermal("gasfiredbig1", 19.4, 0.53, 100.0, 460.0),
            thermal("tj1", 50.8, 0.3, 0.0, 16.0),
            wind("windpark1", 0.6, 150.0),
        ];
        let required = [&plants[2], &plants[0]];
        let allocation = Allocation::at_minimum(&required);
        let plan = Plan::format(&plants, &allocation);
        assert_eq!(
            plan,
            Plan(vec![
                PlannedOutput { name: "gasfiredbig1".to_string(), p: Megawatts(100.0) },
                PlannedOutput { name: "tj1".to_string(), p: Megawatts::ZERO },
                PlannedOutput { name: "windpark1".to_string(), p: Megawatts::ZERO },
            ]),
        );
        assert_eq!(plan.total(), Megawatts(100.0));
    }

    #[test]
    fn test_serialize() {
        let plan = Plan(vec![PlannedOutput { name: "windpark1".to_string(), p: Megawatts(90.0) }]);
        assert_eq!(serde_json::to_value(&plan).unwrap(), json!([{"name": "windpark1", "p": 90.0}]));
    }
}
