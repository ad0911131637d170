#![deny(missing_docs)]
//!# hwmon-temp - Reader for the Linux hwmon CPU temperature inputs
//! This crate reads the `temp*_input` files of a hwmon chip, converts the milli-degree
//! values to degrees and reports a single success/failure outcome for the whole set.
mod error;
mod reader;
mod subfeature;

pub use error::{ReadFailure, SensorError};
pub use reader::{HWMON0_SOURCES, SENSOR_COUNT, SensorReader, SensorReading};
pub use subfeature::Subfeature;
