//! ZoomError - why a zoom frame was skipped

use std::fmt;

/// Which element lookup missed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Container,
    Image,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Container => "zoom container",
            Self::Image => "zoom image",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "width",
            Self::Y => "height",
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZoomError {
    #[error("{what} not found: {key}")]
    NotFound { what: Lookup, key: String },

    #[error("container {axis} is zero")]
    DivideByZero { axis: Axis },

    #[error("pointer position is not finite: ({x}, {y})")]
    NonFinitePointer { x: f64, y: f64 },

    #[error("host rejected transform style: {0}")]
    StyleRejected(String),
}
