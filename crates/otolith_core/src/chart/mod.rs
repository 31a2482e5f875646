//! Count-per-category bar charts.
//!
//! # Responsibility
//! - Shape repository counts into a renderable chart description.
//! - Define the renderer seam and a terminal renderer.
//!
//! # Invariants
//! - One bar per distinct value, in the order counts were produced.
//! - The y axis is always labeled `Count`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub mod bar_chart;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug)]
pub enum ChartError {
    Io(io::Error),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to render chart: {err}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for ChartError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
