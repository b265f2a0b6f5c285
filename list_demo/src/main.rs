use clap::Parser;
use collection_traits::is_sorted_by;
use growable_array::{GrowableArray, QuickSorter};
use miette::{bail, Context, IntoDiagnostic};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_panic::panic_hook;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Fills a list with random integers, prints it, sorts it and prints it again
#[derive(Debug, Parser)]
struct Args {
    /// Number of values to generate
    #[arg(short = 'n', long, env = "LIST_DEMO_COUNT", default_value_t = 100)]
    count: usize,
    /// Smallest value that may be generated
    #[arg(long, env = "LIST_DEMO_MIN", default_value_t = -100, allow_negative_numbers = true)]
    min: i64,
    /// Largest value that may be generated, inclusive
    #[arg(long, env = "LIST_DEMO_MAX", default_value_t = 100, allow_negative_numbers = true)]
    max: i64,
    /// Initial capacity of the list
    #[arg(
        short,
        long,
        env = "LIST_DEMO_CAPACITY",
        default_value_t = 10,
        allow_negative_numbers = true
    )]
    capacity: i64,
    /// Seed for both the value generator and the sorter
    #[arg(short, long, env = "LIST_DEMO_SEED")]
    seed: Option<u64>,
}

pub fn main() -> miette::Result<()> {
    let subscriber = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::Layer::default().pretty())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        );

    tracing::subscriber::set_global_default(subscriber)
        .into_diagnostic()
        .context("Failed to install tracing subscriber")?;

    color_backtrace::install();
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        panic_hook(panic_info);
        prev_hook(panic_info);
    }));

    run(Args::parse()).context("List demo failed")
}

fn run(args: Args) -> miette::Result<()> {
    let Args {
        count,
        min,
        max,
        capacity,
        seed,
    } = args;

    if min > max {
        bail!("Value range is empty: min {} is greater than max {}", min, max);
    }

    let (mut rng, sorter) = match seed {
        Some(seed) => (SmallRng::seed_from_u64(seed), QuickSorter::seeded(seed)),
        None => (SmallRng::from_entropy(), QuickSorter::new()),
    };

    let mut list = GrowableArray::try_with_capacity_and_sorter(capacity, sorter)
        .into_diagnostic()
        .context("Failed to create list")?;
    list.extend((0..count).map(|_| rng.gen_range(min..=max)));
    info!(len = list.len(), capacity = list.capacity(), "filled list");

    println!("{}", list);

    list.sort_by(i64::cmp);
    if !is_sorted_by(&list, |a, b| a <= b) {
        bail!("List is out of order after sorting: {}", list);
    }

    println!("{}", list);

    Ok(())
}
