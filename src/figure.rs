use crate::histogram::Histogram;
use crate::results::CutVarSet;
use crate::species::Species;
use crate::style::{PlotStyle, Rgb};

/// How a series is drawn on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMode {
    /// Point markers with vertical error bars.
    Markers,
    /// Step outline with a translucent fill underneath.
    Filled,
    /// Step outline only.
    Outline,
}

#[derive(Debug, Clone)]
pub struct Series {
    pub legend_label: String,
    pub mode: SeriesMode,
    pub color: Rgb,
    pub histogram: Histogram,
}

/// A text label anchored in canvas fractions, origin bottom-left (the
/// convention the upstream annotations were written in).
#[derive(Debug, Clone)]
pub struct Annotation {
    pub text: String,
    pub ndc: (f64, f64),
    pub size: u32,
}

/// A fully composed canvas, independent of any rendering backend. The
/// series order is the draw order; later entries occlude earlier ones.
#[derive(Debug, Clone)]
pub struct Figure {
    pub x_title: String,
    pub y_title: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
}

/// Compose the cut-variation figure: data markers first, then the prompt
/// and feed-down bands, then the re-summed total outline on top, plus the
/// experiment, collision-system, rapidity and pT-bin annotations.
pub fn compose(
    set: &CutVarSet,
    species: Species,
    style: &PlotStyle,
    preliminary: bool,
) -> Figure {
    let series = vec![
        Series {
            legend_label: "Data".to_string(),
            mode: SeriesMode::Markers,
            color: style.data_color,
            histogram: set.data.clone(),
        },
        Series {
            legend_label: species.prompt_label().to_string(),
            mode: SeriesMode::Filled,
            color: style.prompt_color,
            histogram: set.prompt.clone(),
        },
        Series {
            legend_label: species.feed_down_label().to_string(),
            mode: SeriesMode::Filled,
            color: style.feed_down_color,
            histogram: set.feed_down.clone(),
        },
        Series {
            legend_label: "Total".to_string(),
            mode: SeriesMode::Outline,
            color: style.sum_color,
            histogram: set.sum.clone(),
        },
    ];

    let experiment = if preliminary {
        "ALICE Preliminary"
    } else {
        "ALICE"
    };
    let annotations = vec![
        Annotation {
            text: experiment.to_string(),
            ndc: (0.20, 0.88),
            size: style.annotation_size,
        },
        Annotation {
            text: "pp, \u{221a}s = 13.6 TeV".to_string(),
            ndc: (0.20, 0.83),
            size: style.small_annotation_size,
        },
        Annotation {
            text: "-0.5 < y < 0.5".to_string(),
            ndc: (0.65, 0.88),
            size: style.small_annotation_size,
        },
        Annotation {
            text: species.pt_label().to_string(),
            ndc: (0.55, 0.72),
            size: style.annotation_size,
        },
    ];

    Figure {
        x_title: "ML based selection".to_string(),
        y_title: "Raw yield".to_string(),
        x_range: set.data.x_range(),
        y_range: (0.1, species.y_max()),
        series,
        annotations,
    }
}
