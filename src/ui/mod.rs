/// UI module exports
pub mod components;

pub use components::{CategoryPanel, QuantityStepper};
