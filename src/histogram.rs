use crate::error::PlotError;

/// A 1D binned series: per-bin content and error over explicit bin edges.
///
/// This is the unit the results file stores under each object key. The
/// upstream extraction writes either single or double precision values;
/// serde reads both into `f64`, so there is one representation here.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Histogram {
    pub name: String,
    /// Bin edges, length `n_bins + 1`, strictly increasing.
    pub edges: Vec<f64>,
    pub contents: Vec<f64>,
    pub errors: Vec<f64>,
}

impl Histogram {
    pub fn new(
        name: &str,
        edges: Vec<f64>,
        contents: Vec<f64>,
        errors: Vec<f64>,
    ) -> Result<Histogram, PlotError> {
        let h = Histogram {
            name: name.to_string(),
            edges,
            contents,
            errors,
        };
        h.validate()?;
        Ok(h)
    }

    /// Convenience constructor for equal-width bins over `range`.
    pub fn with_uniform_bins(
        name: &str,
        range: (f64, f64),
        contents: Vec<f64>,
        errors: Vec<f64>,
    ) -> Result<Histogram, PlotError> {
        let n = contents.len();
        let width = (range.1 - range.0) / n as f64;
        let edges = (0..=n).map(|i| range.0 + i as f64 * width).collect();
        Histogram::new(name, edges, contents, errors)
    }

    /// Check the shape invariants. Deserialized histograms go through this
    /// before anything is drawn from them.
    pub fn validate(&self) -> Result<(), PlotError> {
        let bad = |reason: String| PlotError::BadHistogram {
            name: self.name.clone(),
            reason,
        };
        if self.contents.is_empty() {
            return Err(bad("histogram has no bins".to_string()));
        }
        if self.edges.len() != self.contents.len() + 1 {
            return Err(bad(format!(
                "{} edges for {} bins (need n_bins + 1)",
                self.edges.len(),
                self.contents.len()
            )));
        }
        if self.errors.len() != self.contents.len() {
            return Err(bad(format!(
                "{} errors for {} bins",
                self.errors.len(),
                self.contents.len()
            )));
        }
        if self.edges.windows(2).any(|w| w[1] <= w[0]) {
            return Err(bad("bin edges are not strictly increasing".to_string()));
        }
        Ok(())
    }

    pub fn n_bins(&self) -> usize {
        self.contents.len()
    }

    pub fn bin_width(&self, bin: usize) -> f64 {
        self.edges[bin + 1] - self.edges[bin]
    }

    pub fn bin_center(&self, bin: usize) -> f64 {
        0.5 * (self.edges[bin] + self.edges[bin + 1])
    }

    pub fn bin_centers(&self) -> Vec<f64> {
        (0..self.n_bins()).map(|i| self.bin_center(i)).collect()
    }

    /// Axis range covered by the bins.
    pub fn x_range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// Largest bin content plus its error, for choosing a y-axis ceiling.
    pub fn max_with_errors(&self) -> f64 {
        self.contents
            .iter()
            .zip(self.errors.iter())
            .map(|(c, e)| c + e)
            .fold(f64::MIN, f64::max)
    }

    // Points for the step outline: two points per bin, at the bin edges.
    pub fn step_points(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(2 * self.n_bins());
        for (i, &content) in self.contents.iter().enumerate() {
            points.push((self.edges[i], content));
            points.push((self.edges[i + 1], content));
        }
        points
    }

    /// Rescale to dN/dpt: divide each bin's content and error by that
    /// bin's width, in place. Calling this twice double-divides.
    pub fn normalise_by_bin_width(&mut self) {
        for i in 0..self.n_bins() {
            let width = self.bin_width(i);
            self.contents[i] /= width;
            self.errors[i] /= width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Histogram {
        Histogram::new(
            "h",
            vec![0.0, 1.0, 3.0, 7.0],
            vec![10.0, 20.0, 40.0],
            vec![1.0, 2.0, 4.0],
        )
        .expect("valid histogram")
    }

    #[test]
    fn bin_geometry() {
        let h = sample();
        assert_eq!(h.n_bins(), 3);
        assert_eq!(h.bin_width(0), 1.0);
        assert_eq!(h.bin_width(2), 4.0);
        assert_eq!(h.bin_centers(), vec![0.5, 2.0, 5.0]);
        assert_eq!(h.x_range(), (0.0, 7.0));
    }

    #[test]
    fn step_points_trace_every_bin_edge() {
        let h = sample();
        assert_eq!(
            h.step_points(),
            vec![
                (0.0, 10.0),
                (1.0, 10.0),
                (1.0, 20.0),
                (3.0, 20.0),
                (3.0, 40.0),
                (7.0, 40.0)
            ]
        );
    }

    #[test]
    fn normalise_divides_content_and_error_by_width() {
        let mut h = sample();
        h.normalise_by_bin_width();
        assert_eq!(h.contents, vec![10.0, 10.0, 10.0]);
        assert_eq!(h.errors, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn normalise_with_unit_widths_is_identity() {
        let mut h = Histogram::with_uniform_bins(
            "u",
            (0.0, 4.0),
            vec![3.0, 1.0, 4.0, 1.0],
            vec![0.3, 0.1, 0.4, 0.1],
        )
        .expect("valid histogram");
        let before = h.clone();
        h.normalise_by_bin_width();
        assert_eq!(h.contents, before.contents);
        assert_eq!(h.errors, before.errors);
    }

    #[test]
    fn rejects_mismatched_shapes() {
        assert!(Histogram::new("h", vec![0.0, 1.0], vec![1.0, 2.0], vec![0.1, 0.2]).is_err());
        assert!(Histogram::new("h", vec![0.0, 1.0, 2.0], vec![1.0, 2.0], vec![0.1]).is_err());
        assert!(Histogram::new("h", vec![0.0, 2.0, 1.0], vec![1.0, 2.0], vec![0.1, 0.2]).is_err());
        assert!(Histogram::new("h", vec![], vec![], vec![]).is_err());
    }

    #[test]
    fn max_accounts_for_errors() {
        let h = sample();
        assert_eq!(h.max_with_errors(), 44.0);
    }
}
