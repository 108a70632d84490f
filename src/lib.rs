#![warn(clippy::all, rust_2018_idioms)]

//! Draws the cut-variation fit summary for the D-meson feed-down analysis:
//! raw yield vs. ML selection with the prompt and non-prompt components
//! overlaid, exported as SVG and PNG.

pub mod error;
pub mod figure;
pub mod histogram;
pub mod render;
pub mod results;
pub mod species;
pub mod style;

pub use error::PlotError;
pub use figure::{Figure, Series, SeriesMode, compose};
pub use histogram::Histogram;
pub use render::export;
pub use results::{CutVarSet, ResultsFile, load_cutvar};
pub use species::Species;
pub use style::PlotStyle;
