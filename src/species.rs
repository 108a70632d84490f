use std::fmt::Display;
use std::str::FromStr;

use crate::error::PlotError;

/// Which particle hypothesis's results file, object keys and labels to use.
///
/// Each species binds exactly one input file, one set of four object keys,
/// one kinematic bin and one pair of output names. The pT bin is part of
/// the binding, not a free parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Dzero,
    Dplus,
}

/// The four object keys a cut-variation results file must provide.
#[derive(Debug, Clone, Copy)]
pub struct ObjectKeys {
    pub data: &'static str,
    pub prompt: &'static str,
    pub feed_down: &'static str,
    pub sum: &'static str,
}

impl Species {
    /// Default results file for this species.
    pub fn input_file(self) -> &'static str {
        match self {
            Species::Dzero => "CutVarD0_pp136TeV_full.json",
            Species::Dplus => "cutvar_output.json",
        }
    }

    /// The key naming convention differs between the two upstream
    /// extractions, so the full strings are spelled out per species.
    pub fn object_keys(self) -> ObjectKeys {
        match self {
            Species::Dzero => ObjectKeys {
                data: "hRawYieldVsCut_pt0_1",
                prompt: "hRawYieldPromptVsCut_pt0_1",
                feed_down: "hRawYieldNonPromptVsCut_pt0_1",
                sum: "hRawYieldSumVsCut_pt0_1",
            },
            Species::Dplus => ObjectKeys {
                data: "hRawYieldsVsCutPt_pT4_5",
                prompt: "hRawYieldPromptVsCut_pT4_5",
                feed_down: "hRawYieldFDVsCut_pT4_5",
                sum: "hRawYieldsVsCutReSum_pT4_5",
            },
        }
    }

    pub fn pt_label(self) -> &'static str {
        match self {
            Species::Dzero => "0 < pT < 1 GeV/c",
            Species::Dplus => "4 < pT < 5 GeV/c",
        }
    }

    /// Y-axis ceiling for the raw-yield axis.
    pub fn y_max(self) -> f64 {
        match self {
            Species::Dzero => 160000.0,
            Species::Dplus => 4000.0,
        }
    }

    /// Output file stem; the extension is appended per format. The stems
    /// differ per species so the two runs never overwrite each other.
    pub fn output_stem(self) -> &'static str {
        match self {
            Species::Dzero => "CutVarFitDzeroFD",
            Species::Dplus => "CutVarFitDplusFD",
        }
    }

    pub fn prompt_label(self) -> &'static str {
        match self {
            Species::Dzero => "Prompt D0",
            Species::Dplus => "Prompt D+",
        }
    }

    pub fn feed_down_label(self) -> &'static str {
        match self {
            Species::Dzero => "Non-prompt D0",
            Species::Dplus => "Non-prompt D+",
        }
    }
}

impl FromStr for Species {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Species, PlotError> {
        match s.to_ascii_lowercase().as_str() {
            "dzero" | "d0" => Ok(Species::Dzero),
            "dplus" | "d+" => Ok(Species::Dplus),
            _ => Err(PlotError::UnknownSpecies(s.to_string())),
        }
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Species::Dzero => write!(f, "D0"),
            Species::Dplus => write!(f, "D+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dzero_binds_the_pt0_1_keys() {
        let keys = Species::Dzero.object_keys();
        assert_eq!(keys.data, "hRawYieldVsCut_pt0_1");
        assert_eq!(keys.prompt, "hRawYieldPromptVsCut_pt0_1");
        assert_eq!(keys.feed_down, "hRawYieldNonPromptVsCut_pt0_1");
        assert_eq!(keys.sum, "hRawYieldSumVsCut_pt0_1");
        assert_eq!(Species::Dzero.input_file(), "CutVarD0_pp136TeV_full.json");
    }

    #[test]
    fn dplus_binds_the_pt4_5_keys() {
        let keys = Species::Dplus.object_keys();
        assert_eq!(keys.data, "hRawYieldsVsCutPt_pT4_5");
        assert_eq!(keys.prompt, "hRawYieldPromptVsCut_pT4_5");
        assert_eq!(keys.feed_down, "hRawYieldFDVsCut_pT4_5");
        assert_eq!(keys.sum, "hRawYieldsVsCutReSum_pT4_5");
        assert_eq!(Species::Dplus.input_file(), "cutvar_output.json");
    }

    #[test]
    fn output_stems_never_collide() {
        assert_ne!(Species::Dzero.output_stem(), Species::Dplus.output_stem());
    }

    #[test]
    fn parses_both_spellings() {
        assert_eq!("dzero".parse::<Species>().expect("parses"), Species::Dzero);
        assert_eq!("D0".parse::<Species>().expect("parses"), Species::Dzero);
        assert_eq!("dplus".parse::<Species>().expect("parses"), Species::Dplus);
        assert_eq!("D+".parse::<Species>().expect("parses"), Species::Dplus);
    }

    #[test]
    fn unknown_species_is_a_named_error() {
        let err = "lambdac".parse::<Species>().expect_err("must fail");
        match err {
            PlotError::UnknownSpecies(s) => assert_eq!(s, "lambdac"),
            other => panic!("wrong error: {}", other),
        }
    }
}
