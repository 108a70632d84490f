use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cutvarviz::{PlotError, PlotStyle, Species, compose, export, load_cutvar};

/// CLI for the cut-variation fit figure
#[derive(Parser, Debug)]
#[command(name = "cutvarviz")]
#[command(about = "Draw the raw-yield cut-variation figure for one D-meson species", long_about = None)]
struct Args {
    /// Particle species: "dzero" (pT 0-1 GeV/c) or "dplus" (pT 4-5 GeV/c)
    #[arg(short, long, default_value = "dzero")]
    species: String,

    /// Label the figure "ALICE Preliminary" instead of "ALICE"
    #[arg(long, default_value_t = false)]
    preliminary: bool,

    /// Results file to read; defaults to the species' fixed path
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory the figure files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn run(args: &Args) -> Result<(), PlotError> {
    let species: Species = args.species.parse()?;
    let set = load_cutvar(species, args.input.as_deref())?;

    let style = PlotStyle::alice();
    let figure = compose(&set, species, &style, args.preliminary);
    export(&figure, &style, species.output_stem(), &args.out_dir)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init(); // Log to stderr (run with `RUST_LOG=info`)

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
