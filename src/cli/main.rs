use std::path::PathBuf;

use clap::Parser;

use ccg_assumptions::{
    config::{defaults, Config, EntryOrder, FailurePolicy},
    generator::Generator,
};

mod misc;

/// Writes a route of random assumptions beside each constraint-graph file of a directory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The directory of constraint-graph files.
    #[arg(default_value = defaults::DIRECTORY)]
    directory: PathBuf,

    /// The seed for the source of randomness.
    #[arg(long, default_value_t = defaults::RNG_SEED)]
    seed: u64,

    /// The probability of an assumption being positive.
    #[arg(long, default_value_t = defaults::POLARITY_LEAN)]
    polarity_lean: f64,

    /// Process files in order of name, rather than in the order listed by the filesystem.
    #[arg(long)]
    sorted: bool,

    /// Skip files which fail, rather than stopping.
    #[arg(long)]
    skip_failures: bool,
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args = Args::parse();

    let config = match config_from_args(args) {
        Ok(config) => config,
        Err(message) => {
            println!("c {message}");
            std::process::exit(1);
        }
    };

    println!("c Reading constraint-graph files from {:?}", config.directory);
    println!("c Seed:           {}", config.seed);
    println!("c Polarity lean:  {}", config.polarity_lean.value);
    println!("c Entry order:    {}", config.entry_order);
    println!("c Failure policy: {}", config.failure_policy);

    let mut generator = Generator::from_config(config);

    match generator.run() {
        Ok(report) => misc::examine_run_report(&report),

        Err(e) => {
            println!("c Generation error: {e}");
            std::process::exit(2);
        }
    }
}

fn config_from_args(args: Args) -> Result<Config, String> {
    let mut config = Config::default();

    config.directory = args.directory;
    config.seed = args.seed;

    if config.polarity_lean.set(args.polarity_lean).is_err() {
        let (min, max) = config.polarity_lean.min_max();
        return Err(format!(
            "{} requires a value between {min} and {max}",
            config.polarity_lean.name
        ));
    }

    if args.sorted {
        config.entry_order = EntryOrder::Sorted;
    }

    if args.skip_failures {
        config.failure_policy = FailurePolicy::Skip;
    }

    Ok(config)
}
