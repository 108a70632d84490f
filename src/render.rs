use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::PlotError;
use crate::figure::{Figure, SeriesMode};
use crate::style::PlotStyle;

fn to_render_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

/// Render `figure` onto two files under `out_dir`: `{stem}.svg` and
/// `{stem}.png`. Returns the written paths. Nothing is written unless the
/// whole figure renders.
pub fn export(
    figure: &Figure,
    style: &PlotStyle,
    stem: &str,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, PlotError> {
    std::fs::create_dir_all(out_dir)?;
    let svg_path = out_dir.join(format!("{}.svg", stem));
    let png_path = out_dir.join(format!("{}.png", stem));

    let svg = {
        let root = SVGBackend::new(&svg_path, (style.width, style.height)).into_drawing_area();
        draw(figure, style, &root)
    };
    if let Err(err) = svg {
        std::fs::remove_file(&svg_path).ok();
        return Err(err);
    }

    let png = {
        let root = BitMapBackend::new(&png_path, (style.width, style.height)).into_drawing_area();
        draw(figure, style, &root)
    };
    if let Err(err) = png {
        // A lone .svg would be partial output.
        std::fs::remove_file(&svg_path).ok();
        std::fs::remove_file(&png_path).ok();
        return Err(err);
    }

    log::info!("Wrote {}", svg_path.display());
    log::info!("Wrote {}", png_path.display());
    Ok(vec![svg_path, png_path])
}

/// Backend-generic rendering; the SVG and bitmap exports share this.
fn draw<DB: DrawingBackend>(
    figure: &Figure,
    style: &PlotStyle,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(to_render_err)?;

    let mut chart = ChartBuilder::on(root)
        .margin(style.margin)
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area)
        .build_cartesian_2d(
            figure.x_range.0..figure.x_range.1,
            figure.y_range.0..figure.y_range.1,
        )
        .map_err(to_render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(figure.x_title.clone())
        .y_desc(figure.y_title.clone())
        .axis_desc_style(("sans-serif", style.axis_title_size as i32))
        .label_style(("sans-serif", style.axis_label_size as i32))
        .draw()
        .map_err(to_render_err)?;

    // Draw in figure order; later series occlude earlier ones.
    for series in &figure.series {
        let color = series.color.to_rgbcolor();
        let h = &series.histogram;
        match series.mode {
            SeriesMode::Markers => {
                let points: Vec<(f64, f64, f64)> = (0..h.n_bins())
                    .map(|i| (h.bin_center(i), h.contents[i], h.errors[i]))
                    .collect();
                chart
                    .draw_series(points.iter().map(|&(x, y, e)| {
                        ErrorBar::new_vertical(x, y - e, y, y + e, color.filled(), style.marker_size)
                    }))
                    .map_err(to_render_err)?;
                chart
                    .draw_series(points.iter().map(|&(x, y, _)| {
                        Circle::new((x, y), style.marker_size as i32, color.filled())
                    }))
                    .map_err(to_render_err)?
                    .label(series.legend_label.clone())
                    .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
            }
            SeriesMode::Filled => {
                let fill_opacity = style.fill_opacity;
                let fill = color.mix(fill_opacity);
                let mut band = h.step_points();
                band.push((figure.x_range.1, figure.y_range.0));
                band.push((figure.x_range.0, figure.y_range.0));
                chart
                    .draw_series(std::iter::once(Polygon::new(band, fill.filled())))
                    .map_err(to_render_err)?;
                chart
                    .draw_series(LineSeries::new(
                        h.step_points(),
                        color.stroke_width(style.line_width),
                    ))
                    .map_err(to_render_err)?
                    .label(series.legend_label.clone())
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.mix(fill_opacity).filled())
                    });
            }
            SeriesMode::Outline => {
                chart
                    .draw_series(LineSeries::new(
                        h.step_points(),
                        color.stroke_width(style.line_width),
                    ))
                    .map_err(to_render_err)?
                    .label(series.legend_label.clone())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 14, y)], color.stroke_width(2))
                    });
            }
        }
    }

    let legend_x = (style.width as f64 * style.legend_anchor.0) as i32;
    let legend_y = (style.height as f64 * (1.0 - style.legend_anchor.1)) as i32;
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::Coordinate(legend_x, legend_y))
        .label_font(("sans-serif", style.legend_text_size as i32))
        .border_style(TRANSPARENT)
        .background_style(TRANSPARENT)
        .draw()
        .map_err(to_render_err)?;

    // Annotations are anchored in canvas fractions, origin bottom-left.
    for annotation in &figure.annotations {
        let px = (style.width as f64 * annotation.ndc.0) as i32;
        let py = (style.height as f64 * (1.0 - annotation.ndc.1)) as i32;
        root.draw(&Text::new(
            annotation.text.clone(),
            (px, py),
            ("sans-serif", annotation.size as i32).into_font(),
        ))
        .map_err(to_render_err)?;
    }

    root.present().map_err(to_render_err)?;
    Ok(())
}
