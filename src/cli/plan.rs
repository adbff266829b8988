use std::{fs, path::PathBuf};

use clap::Parser;

use crate::{
    core::{dispatch, plant::build_fleet, request::AllocationRequest},
    prelude::*,
    tables::build_plan_table,
};

#[derive(Parser)]
pub struct PlanArgs {
    /// JSON payload with the load, the fuel prices, and the power plants.
    #[clap(long, env = "PAYLOAD_PATH")]
    payload: PathBuf,

    /// Print the response JSON instead of the table.
    #[clap(long)]
    json: bool,
}

impl PlanArgs {
    #[instrument(skip_all, fields(payload = %self.payload.display()))]
    pub fn run(self) -> Result {
        let payload = fs::read_to_string(&self.payload).context("failed to read the payload")?;
        let request: AllocationRequest =
            serde_json::from_str(&payload).context("failed to parse the payload")?;
        let plants = build_fleet(&request)?;
        let plan = dispatch(&plants, request.load)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            println!("{}", build_plan_table(&plants, &plan));
        }
        Ok(())
    }
}
