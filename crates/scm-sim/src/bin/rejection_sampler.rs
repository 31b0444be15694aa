use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use scm_complex::{Complex, LabelMap};
use scm_core::errors::{ErrorInfo, ScmError};
use scm_core::rng::RngHandle;
use scm_sample::randomize;
use scm_sim::{
    load_facet_list, load_sequence, sample_write_error, seed_from_clock, write_facets,
};

/// Simplicial configuration model rejection sampler.
///
/// Runs in facet-list mode when given a path, or in sequence mode when given
/// a degree and a size sequence file.
#[derive(Parser, Debug)]
#[command(
    name = "rejection_sampler",
    about = "Simplicial configuration model rejection sampler"
)]
struct Cli {
    /// Number of samples to draw.
    #[arg(short = 'n', long = "num_samples", default_value_t = 1)]
    num_samples: usize,
    /// Seed of the pseudo random number generator. Seeded from the clock when
    /// absent.
    #[arg(short = 'd', long = "seed")]
    seed: Option<u64>,
    /// In facet-list mode, assume the input is already cleansed.
    #[arg(short = 'c', long = "cleansed_input")]
    cleansed_input: bool,
    /// Path to the degree sequence file (sequence mode).
    #[arg(short = 'k', long = "degree_seq_file", requires = "size_seq_file")]
    degree_seq_file: Option<PathBuf>,
    /// Path to the size sequence file (sequence mode).
    #[arg(short = 's', long = "size_seq_file", requires = "degree_seq_file")]
    size_seq_file: Option<PathBuf>,
    /// Separator line written after each sample.
    #[arg(long = "separator", default_value = "#######")]
    separator: String,
    /// Output log messages.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
    /// Path to the facet list (facet-list mode).
    facet_list_path: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ScmError> {
    let (mut complex, labels) = load_state(&cli)?;
    let seed = cli.seed.unwrap_or_else(seed_from_clock);
    let mut rng = RngHandle::from_seed(seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..cli.num_samples {
        if cli.verbose {
            let attempts = randomize(&mut complex, &mut rng, |tries| {
                eprint!("\rnum_tries: {tries}");
            });
            eprintln!();
            eprintln!("accepted after {attempts} tries");
        } else {
            randomize(&mut complex, &mut rng, |_| {});
        }
        write_facets(&mut out, &complex, labels.as_ref()).map_err(sample_write_error)?;
        writeln!(out, "{}", cli.separator).map_err(sample_write_error)?;
        out.flush().map_err(sample_write_error)?;
    }
    Ok(())
}

fn load_state(cli: &Cli) -> Result<(Complex, Option<LabelMap>), ScmError> {
    if let Some(path) = &cli.facet_list_path {
        if cli.verbose {
            eprintln!("Loading facet file.");
        }
        let input = load_facet_list(path, cli.cleansed_input)?;
        let complex = Complex::from_facets(&input.facets)?;
        return Ok((complex, input.labels));
    }
    match (&cli.degree_seq_file, &cli.size_seq_file) {
        (Some(degrees_path), Some(sizes_path)) => {
            if cli.verbose {
                eprintln!("Loading sequence files.");
            }
            let degrees = load_sequence(degrees_path)?;
            let sizes = load_sequence(sizes_path)?;
            let complex = Complex::from_sequences(&sizes, &degrees)?;
            Ok((complex, None))
        }
        _ => Err(ScmError::Input(ErrorInfo::new(
            "missing-input",
            "provide a facet list path or both sequence files",
        ))),
    }
}
