use anyhow::bail;
use log::{debug, info};
use std::str::FromStr;

use crate::generator::ArrayGenerator;
use crate::sorting::{time_hybrid_sort, time_merge_sort};

mod generator;
mod sorting;

#[derive(Clone, Copy, Debug)]
enum Distribution {
    Random,
    Reversed,
    NearlySorted,
}

impl FromStr for Distribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "reversed" => Ok(Self::Reversed),
            "nearly-sorted" => Ok(Self::NearlySorted),
            other => Err(format!(
                "unknown distribution '{other}' (expected random, reversed or nearly-sorted)"
            )),
        }
    }
}

#[derive(argh::FromArgs)]
/// Time merge sort against a hybrid merge/insertion sort over synthetic
/// integer arrays of increasing size.
struct SortLabArgs {
    /// largest array size to benchmark (default: 10000)
    #[argh(option, default = "10000")]
    max_size: usize,

    /// upper bound of the random value range, inclusive (default: 6000)
    #[argh(option, default = "6000")]
    range: i32,

    /// number of random transpositions for the nearly-sorted array
    /// (default: 10)
    #[argh(option, default = "10")]
    swaps: usize,

    /// first array size to benchmark (default: 500)
    #[argh(option, default = "500")]
    start: usize,

    /// increment between consecutive array sizes (default: 100)
    #[argh(option, default = "100")]
    step: usize,

    /// input distribution to time: random, reversed or nearly-sorted
    /// (default: random)
    #[argh(option, default = "Distribution::Random")]
    distribution: Distribution,

    /// seed for the random source; omit for a fresh seed from OS entropy
    #[argh(option)]
    seed: Option<u64>,

    /// print the whole run as a JSON array instead of one line per size
    #[argh(switch)]
    json: bool,
}

#[derive(serde::Serialize)]
struct SizeReport {
    size: usize,
    merge_sort_ms: u128,
    hybrid_sort_ms: u128,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args: SortLabArgs = argh::from_env();

    if args.step == 0 {
        bail!("--step must be nonzero");
    }
    if args.start > args.max_size {
        bail!(
            "--start ({}) must not exceed --max-size ({})",
            args.start,
            args.max_size
        );
    }

    let mut generator = match args.seed {
        Some(seed) => {
            info!("seeding the generator with {seed}");
            ArrayGenerator::with_seed(args.max_size, args.range, seed)
        }
        None => ArrayGenerator::new(args.max_size, args.range),
    };

    let random_array = generator.random();
    let reversed_array = generator.reversed();
    let nearly_sorted_array = generator.nearly_sorted(args.swaps);

    let full_array = match args.distribution {
        Distribution::Random => &random_array,
        Distribution::Reversed => &reversed_array,
        Distribution::NearlySorted => &nearly_sorted_array,
    };

    let mut reports = Vec::new();
    for size in (args.start..=args.max_size).step_by(args.step) {
        debug!("timing both sorts on a {size}-element prefix");

        let prefix = full_array[..size].to_vec();
        let merge_sort_ms = time_merge_sort(prefix.clone());
        let hybrid_sort_ms = time_hybrid_sort(prefix);

        if args.json {
            reports.push(SizeReport {
                size,
                merge_sort_ms,
                hybrid_sort_ms,
            });
        } else {
            println!("Size: {size}, MergeSort: {merge_sort_ms}ms, HybridSort: {hybrid_sort_ms}ms");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}
