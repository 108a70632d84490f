use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::PlotError;
use crate::histogram::Histogram;
use crate::species::Species;

/// A keyed store of named histograms, produced by the upstream
/// yield-extraction step. Read-only; one JSON object mapping key to
/// histogram.
#[derive(Debug)]
pub struct ResultsFile {
    path: PathBuf,
    objects: HashMap<String, Histogram>,
}

impl ResultsFile {
    pub fn open(path: &Path) -> Result<ResultsFile, PlotError> {
        let file = File::open(path).map_err(|err| {
            log::error!("Could not open results file {}", path.display());
            PlotError::File(err)
        })?;
        let reader = BufReader::new(file);
        let objects: HashMap<String, Histogram> = serde_json::from_reader(reader)?;
        for h in objects.values() {
            h.validate()?;
        }
        Ok(ResultsFile {
            path: path.to_path_buf(),
            objects,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checked retrieval: an absent key is an error naming both the file
    /// and the key, never a blind dereference downstream. Every histogram
    /// handed out here passed `validate` when the file was opened.
    pub fn get(&self, key: &str) -> Result<&Histogram, PlotError> {
        self.objects.get(key).ok_or_else(|| PlotError::MissingObject {
            path: self.path.display().to_string(),
            key: key.to_string(),
        })
    }
}

/// The four series one cut-variation figure is made of.
#[derive(Debug, Clone)]
pub struct CutVarSet {
    pub data: Histogram,
    pub prompt: Histogram,
    pub feed_down: Histogram,
    pub sum: Histogram,
}

/// Load the four species-bound histograms from `path` (or the species
/// default). Everything is checked before returning: all four keys must be
/// present, each histogram well formed, and all binned like the data
/// series. The file handle is scoped to this call.
pub fn load_cutvar(species: Species, path: Option<&Path>) -> Result<CutVarSet, PlotError> {
    let default = PathBuf::from(species.input_file());
    let path = path.unwrap_or(&default);
    let keys = species.object_keys();

    let file = ResultsFile::open(path)?;
    log::info!(
        "Loaded {} for species {}",
        file.path().display(),
        species
    );

    let set = CutVarSet {
        data: file.get(keys.data)?.clone(),
        prompt: file.get(keys.prompt)?.clone(),
        feed_down: file.get(keys.feed_down)?.clone(),
        sum: file.get(keys.sum)?.clone(),
    };

    for h in [&set.prompt, &set.feed_down, &set.sum] {
        if h.n_bins() != set.data.n_bins() {
            return Err(PlotError::BinMismatch {
                name: h.name.clone(),
                expected: set.data.n_bins(),
                found: h.n_bins(),
            });
        }
        if !edges_match(&h.edges, &set.data.edges) {
            return Err(PlotError::EdgeMismatch {
                name: h.name.clone(),
            });
        }
    }

    Ok(set)
}

// Edge agreement up to rounding noise from the upstream writers.
fn edges_match(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(x, y)| (x - y).abs() <= 1e-9 * x.abs().max(y.abs()).max(1.0))
}
