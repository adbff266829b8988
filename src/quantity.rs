#[macro_use]
mod macros;

pub mod power;
pub mod price;
pub mod proportions;
