use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{plan::Plan, plant::PowerPlant, ranking::MeritOrder},
    quantity::power::Megawatts,
};

pub fn build_plan_table(plants: &[PowerPlant], plan: &Plan) -> Table {
    let merit_order = MeritOrder::rank(plants);

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Plant", "Type", "Merit", "Cost", "Pmin", "Pmax", "P"]);
    for (plant, output) in plants.iter().zip(plan.iter()) {
        let cost = plant.cost_per_output();
        table.add_row(vec![
            Cell::new(&plant.name).add_attribute(Attribute::Bold),
            Cell::new(plant.kind).add_attribute(Attribute::Dim),
            Cell::new(merit_order.position(&plant.name).unwrap_or_default())
                .set_alignment(CellAlignment::Right),
            if cost.is_finite() {
                Cell::new(cost).set_alignment(CellAlignment::Right)
            } else {
                Cell::new("∞").set_alignment(CellAlignment::Right).fg(Color::Red)
            },
            Cell::new(plant.pmin).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(plant.pmax).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(output.p)
                .set_alignment(CellAlignment::Right)
                .fg(if output.p > Megawatts::ZERO { Color::Green } else { Color::Reset }),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(plan.total()).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        dispatch,
        plant::tests::{thermal, wind},
    };

    #[test]
    fn test_build_plan_table() {
        let plants = [thermal("gas", 19.4, 0.53, 100.0, 460.0), wind("windpark1", 0.6, 150.0)];
        let plan = dispatch(&plants, Megawatts(480.0)).unwrap();
        let table = build_plan_table(&plants, &plan).to_string();
        assert!(table.contains("windpark1"));
        assert!(table.contains("390.0 MW"));
        assert!(table.contains("480.0 MW"));
    }
}
