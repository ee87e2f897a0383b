//! # gridchart-chart
//!
//! The series/ticks shape consumed by chart renderers.

mod axis;
mod result;
mod series;

pub use axis::{Axis, Tick, Ticks};
pub use result::ConversionResult;
pub use series::{DataPoint, Series};
