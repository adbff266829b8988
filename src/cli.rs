mod plan;
mod serve;

use clap::{Parser, Subcommand};

use crate::cli::{plan::PlanArgs, serve::ServeArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the production plan API over HTTP.
    #[clap(name = "serve")]
    Serve(Box<ServeArgs>),

    /// Compute the production plan for a payload file and print it.
    #[clap(name = "plan")]
    Plan(Box<PlanArgs>),
}
