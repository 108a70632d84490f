use std::error::Error;
use std::fmt::Display;

#[derive(Debug)]
pub enum PlotError {
    File(std::io::Error),
    Format(serde_json::Error),
    MissingObject { path: String, key: String },
    UnknownSpecies(String),
    BadHistogram { name: String, reason: String },
    BinMismatch { name: String, expected: usize, found: usize },
    EdgeMismatch { name: String },
    Render(String),
}

impl From<std::io::Error> for PlotError {
    fn from(err: std::io::Error) -> PlotError {
        PlotError::File(err)
    }
}

impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> PlotError {
        PlotError::Format(err)
    }
}

impl Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotError::File(x) => write!(f, "File I/O error: {}", x),
            PlotError::Format(x) => write!(f, "Results file is not valid JSON: {}", x),
            PlotError::MissingObject { path, key } => {
                write!(f, "Results file {} has no object named '{}'", path, key)
            }
            PlotError::UnknownSpecies(x) => {
                write!(f, "Unknown particle species '{}' (expected dzero or dplus)", x)
            }
            PlotError::BadHistogram { name, reason } => {
                write!(f, "Histogram '{}' is malformed: {}", name, reason)
            }
            PlotError::BinMismatch { name, expected, found } => {
                write!(
                    f,
                    "Histogram '{}' has {} bins, expected {} to match the data series",
                    name, found, expected
                )
            }
            PlotError::EdgeMismatch { name } => {
                write!(
                    f,
                    "Histogram '{}' has bin edges that do not match the data series",
                    name
                )
            }
            PlotError::Render(x) => write!(f, "Failed to render the canvas: {}", x),
        }
    }
}

impl Error for PlotError {}
