use plotters::style::RGBColor;

#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    pub fn to_rgbcolor(self) -> RGBColor {
        RGBColor(self.r, self.g, self.b)
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
/// The prompt component (dark red, kRed+1 in the upstream palette).
pub const PROMPT_RED: Rgb = Rgb::new(202, 36, 36);
/// The non-prompt (feed-down) component (kAzure+4).
pub const FEED_DOWN_AZURE: Rgb = Rgb::new(62, 103, 174);
/// The re-summed total (kGreen+2).
pub const SUM_GREEN: Rgb = Rgb::new(0, 140, 60);

/// Every cosmetic the figure uses, in one immutable bundle.
///
/// This replaces two things the upstream macro did with shared mutable
/// state: the process-wide style object and the per-histogram attribute
/// setters. Styling here never touches histogram data, only how it is
/// drawn.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlotStyle {
    /// Canvas size in pixels.
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    /// Pixel areas reserved for the axis labels + titles.
    pub x_label_area: u32,
    pub y_label_area: u32,
    pub axis_title_size: u32,
    pub axis_label_size: u32,
    pub data_color: Rgb,
    pub prompt_color: Rgb,
    pub feed_down_color: Rgb,
    pub sum_color: Rgb,
    /// Opacity of the filled component bands (stand-in for hatching).
    pub fill_opacity: f64,
    pub marker_size: u32,
    pub line_width: u32,
    /// Legend anchor in canvas fractions, origin bottom-left.
    pub legend_anchor: (f64, f64),
    pub legend_text_size: u32,
    pub annotation_size: u32,
    pub small_annotation_size: u32,
}

impl PlotStyle {
    /// The house style of the analysis: 750x750 canvas, wide left margin
    /// for the raw-yield axis, font sizes matching the published figures.
    pub fn alice() -> PlotStyle {
        PlotStyle {
            width: 750,
            height: 750,
            margin: 22,
            x_label_area: 70,
            y_label_area: 110,
            axis_title_size: 28,
            axis_label_size: 22,
            data_color: BLACK,
            prompt_color: PROMPT_RED,
            feed_down_color: FEED_DOWN_AZURE,
            sum_color: SUM_GREEN,
            fill_opacity: 0.35,
            marker_size: 4,
            line_width: 2,
            legend_anchor: (0.55, 0.70),
            legend_text_size: 24,
            annotation_size: 26,
            small_annotation_size: 22,
        }
    }
}

impl Default for PlotStyle {
    fn default() -> PlotStyle {
        PlotStyle::alice()
    }
}
