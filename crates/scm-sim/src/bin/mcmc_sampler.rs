use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use scm_complex::Complex;
use scm_core::errors::ScmError;
use scm_core::rng::RngHandle;
use scm_sample::{
    burn_in, default_cadence, default_l_max, sample, McmcConfig, ProposalKind, ProposalLengths,
};
use scm_sim::{load_facet_list, sample_write_error, seed_from_clock, write_facets};

/// Simplicial configuration model MCMC sampler.
#[derive(Parser, Debug)]
#[command(name = "mcmc_sampler", about = "Simplicial configuration model MCMC sampler")]
struct Cli {
    /// Burn-in, in accepted proposals. Defaults to M ln M, where M is the sum
    /// of degrees.
    #[arg(short = 'b', long = "burn_in")]
    burn_in: Option<usize>,
    /// Number of samples to emit.
    #[arg(short = 't', long = "sampling_steps")]
    sampling_steps: usize,
    /// Attempted proposals between samples. Defaults to M ln M.
    #[arg(short = 'f', long = "sampling_frequency")]
    sampling_frequency: Option<usize>,
    /// Seed of the pseudo random number generator. Seeded from the clock when
    /// absent.
    #[arg(short = 'd', long = "seed")]
    seed: Option<u64>,
    /// Manually set L_max. Correctness of the sampler is not guaranteed below
    /// twice the largest facet size.
    #[arg(short = 'l', long = "l_max")]
    l_max: Option<usize>,
    /// Use exponential proposal weights exp(alpha * l).
    #[arg(long = "exp_prop", conflicts_with_all = ["pl_prop", "unif_prop"])]
    exp_prop: bool,
    /// Use power-law proposal weights l^(-alpha).
    #[arg(long = "pl_prop", conflicts_with = "unif_prop")]
    pl_prop: bool,
    /// Use uniform proposal weights (default).
    #[arg(long = "unif_prop")]
    unif_prop: bool,
    /// Parameter alpha of the exponential and power-law weights.
    #[arg(long = "prop_param", default_value_t = 1.0)]
    prop_param: f64,
    /// Assume the input is already cleansed: dense 0-indexed integer ids and
    /// no facet included in another.
    #[arg(short = 'c', long = "cleansed_input")]
    cleansed_input: bool,
    /// Echo parameters and progress to stderr.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
    /// Path to the facet list.
    facet_list_path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ScmError> {
    if cli.verbose {
        eprintln!("Loading facet file.");
    }
    let input = load_facet_list(&cli.facet_list_path, cli.cleansed_input)?;
    let mut complex = Complex::from_facets(&input.facets)?;
    let num_edges = complex.num_edges();

    let l_max = match cli.l_max {
        Some(requested) => {
            if requested < 2 * input.largest_facet {
                eprintln!(
                    "Warning: manually set L_max does not guarantee connectivity. ({} < {})",
                    requested,
                    2 * input.largest_facet,
                );
            }
            requested.min(num_edges)
        }
        None => default_l_max(num_edges, input.largest_facet),
    };
    let kind = if cli.exp_prop {
        ProposalKind::Exponential {
            alpha: cli.prop_param,
        }
    } else if cli.pl_prop {
        ProposalKind::PowerLaw {
            alpha: cli.prop_param,
        }
    } else {
        ProposalKind::Uniform
    };
    let lengths = ProposalLengths::new(kind, l_max)?;

    let seed = cli.seed.unwrap_or_else(seed_from_clock);
    let config = McmcConfig {
        burn_in: cli.burn_in.unwrap_or_else(|| default_cadence(num_edges)),
        sampling_steps: cli.sampling_steps,
        sampling_frequency: cli
            .sampling_frequency
            .unwrap_or_else(|| default_cadence(num_edges)),
    };

    if cli.verbose {
        eprintln!("Parameters:");
        eprintln!("\tfacet_list_path: {}", cli.facet_list_path.display());
        eprintln!("\tburn_in: {}", config.burn_in);
        eprintln!("\tsampling_steps: {}", config.sampling_steps);
        eprintln!("\tsampling_frequency: {}", config.sampling_frequency);
        eprintln!("\tseed: {seed}");
        eprintln!("\tL_max: {l_max}");
        let distribution = match kind {
            ProposalKind::Uniform => "uniform",
            ProposalKind::Exponential { .. } => "exponential",
            ProposalKind::PowerLaw { .. } => "power law",
        };
        eprintln!("\tproposal_distribution: {distribution}");
        eprintln!("\tprop_param: {}", cli.prop_param);
        eprintln!(
            "\tcleansed_input: {}",
            if cli.cleansed_input { "yes" } else { "no" },
        );
    }

    let mut rng = RngHandle::from_seed(seed);
    if cli.verbose {
        eprintln!("Burn-in in progress");
    }
    burn_in(&mut complex, &lengths, config.burn_in, &mut rng);

    if cli.verbose {
        eprintln!("Starting sampling");
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let labels = input.labels.as_ref();
    let report = sample(&mut complex, &lengths, &config, &mut rng, |state| {
        writeln!(out, "# Sample:").map_err(sample_write_error)?;
        write_facets(&mut out, state, labels).map_err(sample_write_error)?;
        out.flush().map_err(sample_write_error)
    })?;

    if cli.verbose {
        eprintln!("# acceptance_ratio={}", report.acceptance_ratio());
        eprintln!("Done.");
    }
    Ok(())
}
