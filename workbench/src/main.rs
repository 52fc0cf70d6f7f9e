use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jigsaw::GridSpec;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod fetch;
mod session;
mod todo_cmd;
mod weather_cmd;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    exercise: Exercise,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info", global = true)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Exercise {
    /// Cut an image into a jigsaw and solve it on the terminal
    Puzzle {
        /// Path to the board image
        image: PathBuf,

        /// Board height in pieces
        #[arg(long, default_value_t = 4)]
        rows: u32,

        /// Board width in pieces
        #[arg(long, default_value_t = 4)]
        columns: u32,

        /// RNG seed for the shuffle
        #[arg(long)]
        seed: Option<u64>,

        /// Record the session's placements as a JSON file
        #[arg(short, long)]
        record: Option<PathBuf>,
    },
    /// Manage the task list
    Todo {
        /// Path to the task file
        #[arg(long, default_value = "tasks.json")]
        file: PathBuf,

        #[command(subcommand)]
        action: todo_cmd::TodoAction,
    },
    /// Look up current conditions and the forecast for a city
    Weather {
        city: String,

        /// OpenWeatherMap API key
        #[arg(long)]
        api_key: String,

        /// Command that fetches a URL and prints the body to stdout
        #[arg(long, default_value = "curl -s")]
        fetcher: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    match args.exercise {
        Exercise::Puzzle {
            image,
            rows,
            columns,
            seed,
            record,
        } => {
            // Get a random seed
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed);
            let rng = StdRng::seed_from_u64(seed);
            session::run(&image, GridSpec::new(rows, columns), rng, record.as_deref())
        }
        Exercise::Todo { file, action } => todo_cmd::run(&file, action),
        Exercise::Weather {
            city,
            api_key,
            fetcher,
        } => weather_cmd::run(&city, &api_key, &fetcher),
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
