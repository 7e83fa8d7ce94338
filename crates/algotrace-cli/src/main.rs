//! algotrace command-line front-end.
//!
//! Provides the `algotrace` binary: generate a step trace for any cataloged
//! algorithm, list the catalog, produce random demo arrays, or play a trace
//! back one step per tick.
//!
//! Defaults come from the environment (see [`config`]); flags override them.
//! Logs go to stderr so stdout carries only the rendered output.
//!
//! Exit codes: 0 = success, 1 = invalid arguments, 2 = trace error.

mod config;
mod render;

use std::process;
use std::thread;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use rand::Rng;

use algotrace_core::catalog::{by_category, catalog};
use algotrace_core::input::{
    parse_delimited_numbers, random_array, random_graph, random_sorted_array, random_target,
};
use algotrace_core::{AlgorithmId, Category, GraphPreset, Playback, PivotStrategy};
use algotrace_trace::{generate_with_rng, Trace, TraceRequest};

use config::{Config, OutputFormat};

/// Default size and maximum of generated demo arrays.
const DEMO_SIZE: usize = 8;
const DEMO_MAX: i64 = 99;

/// Step-by-step traces of classic algorithms.
#[derive(Parser)]
#[command(name = "algotrace", about = "Step-by-step traces of classic algorithms")]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full trace and print it.
    Trace {
        #[command(flatten)]
        args: TraceArgs,

        /// Output format (default: $ALGOTRACE_FORMAT or json).
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the algorithm catalog.
    List {
        /// Only show one category: search, sort or graph.
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print a random demo array.
    RandomArray {
        #[arg(long, default_value_t = DEMO_SIZE)]
        size: usize,

        /// Largest value; values are drawn from 1..=max.
        #[arg(long, default_value_t = DEMO_MAX)]
        max: i64,

        /// Sort ascending (binary-search input).
        #[arg(long)]
        sorted: bool,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Play a trace back, printing one step description per tick.
    Play {
        #[command(flatten)]
        args: TraceArgs,

        /// Delay between steps in milliseconds (default: $ALGOTRACE_SPEED_MS or 500).
        #[arg(long)]
        speed_ms: Option<u64>,
    },
}

/// Arguments shared by `trace` and `play`.
#[derive(Args)]
struct TraceArgs {
    /// Algorithm id, e.g. bubble-sort, binary-search, bfs.
    algorithm: String,

    /// Comma-separated input values (default: a random demo array).
    #[arg(short, long, allow_hyphen_values = true)]
    array: Option<String>,

    /// Search target (default: a random element of the array).
    #[arg(short, long, allow_hyphen_values = true)]
    target: Option<i64>,

    /// Quick-sort pivot strategy: first, last, random or median.
    #[arg(short, long, default_value = "last")]
    pivot: String,

    /// Graph preset: tree, cycle, complex or random.
    #[arg(short, long, default_value = "tree")]
    graph: String,

    /// Traversal start node.
    #[arg(long, default_value = "A")]
    start: String,

    /// Traversal goal node.
    #[arg(long, default_value = "G")]
    goal: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            process::exit(1);
        }
    };

    let exit_code = match cli.command {
        Commands::Trace { args, format } => run_trace(&config, &args, format),
        Commands::List { category, format } => run_list(&config, category.as_deref(), format),
        Commands::RandomArray {
            size,
            max,
            sorted,
            format,
        } => run_random_array(&config, size, max, sorted, format),
        Commands::Play { args, speed_ms } => run_play(&config, &args, speed_ms),
    };
    process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the request `args` describe, filling omitted inputs with demo
/// values drawn from `rng`.
fn build_request<R: Rng + ?Sized>(args: &TraceArgs, rng: &mut R) -> Result<TraceRequest, String> {
    let algorithm: AlgorithmId = args.algorithm.parse().map_err(|e| format!("{}", e))?;
    let pivot: PivotStrategy = args.pivot.parse().map_err(|e| format!("{}", e))?;
    let mut request = TraceRequest::new(algorithm).with_pivot(pivot);

    match algorithm.category() {
        Category::Search | Category::Sort => {
            let array = match &args.array {
                Some(text) => parse_delimited_numbers(text),
                None if algorithm == AlgorithmId::BinarySearch => {
                    random_sorted_array(DEMO_SIZE, DEMO_MAX, rng)
                }
                None => random_array(DEMO_SIZE, DEMO_MAX, rng),
            };
            let target = match args.target {
                Some(target) => Some(target),
                None if algorithm.category() == Category::Search => random_target(&array, rng),
                None => None,
            };
            request = request.with_array(array);
            if let Some(target) = target {
                request = request.with_target(target);
            }
        }
        Category::Graph => {
            let kind = if args.graph.eq_ignore_ascii_case("random") {
                None
            } else {
                Some(args.graph.parse::<GraphPreset>().map_err(|e| format!("{}", e))?)
            };
            let (preset, graph) = random_graph(kind, rng);
            tracing::info!(preset = %preset, "using graph preset");
            request = request.with_graph(graph, args.start.as_str(), args.goal.as_str());
        }
    }
    Ok(request)
}

/// Parses arguments and generates the trace. Returns the exit code on failure.
fn trace_from_args(config: &Config, args: &TraceArgs) -> Result<Trace, i32> {
    let mut rng = config.rng();
    let request = build_request(args, &mut rng).map_err(|msg| {
        eprintln!("Error: {}", msg);
        1
    })?;
    let trace = generate_with_rng(&request, &mut rng).map_err(|e| {
        eprintln!("Trace error: {}", e);
        2
    })?;
    tracing::info!(algorithm = %trace.algorithm(), steps = trace.len(), "trace ready");
    Ok(trace)
}

/// Execute the trace subcommand.
fn run_trace(config: &Config, args: &TraceArgs, format: Option<OutputFormat>) -> i32 {
    let trace = match trace_from_args(config, args) {
        Ok(trace) => trace,
        Err(code) => return code,
    };
    print!("{}", ensure_newline(render::render_trace(&trace, format.unwrap_or(config.format))));
    0
}

/// Execute the list subcommand.
fn run_list(config: &Config, category: Option<&str>, format: Option<OutputFormat>) -> i32 {
    let format = format.unwrap_or(config.format);
    let output = match category {
        None => render::render_catalog(catalog(), format),
        Some(name) => match name.parse::<Category>() {
            Ok(category) => render::render_catalog(by_category(category), format),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
    };
    println!("{}", output);
    0
}

/// Execute the random-array subcommand.
fn run_random_array(
    config: &Config,
    size: usize,
    max: i64,
    sorted: bool,
    format: Option<OutputFormat>,
) -> i32 {
    let mut rng = config.rng();
    let values = if sorted {
        random_sorted_array(size, max, &mut rng)
    } else {
        random_array(size, max, &mut rng)
    };
    println!("{}", render::render_values(&values, format.unwrap_or(config.format)));
    0
}

/// Execute the play subcommand.
fn run_play(config: &Config, args: &TraceArgs, speed_ms: Option<u64>) -> i32 {
    let trace = match trace_from_args(config, args) {
        Ok(trace) => trace,
        Err(code) => return code,
    };
    let lines: Vec<String> = trace.descriptions().into_iter().map(String::from).collect();
    let total = lines.len();
    let mut playback = Playback::new(lines, speed_ms.unwrap_or(config.speed_ms));

    if let Some(first) = playback.current() {
        println!("{}", render::step_line(playback.index(), total, first));
    }
    playback.play();
    while playback.is_playing() {
        thread::sleep(Duration::from_millis(playback.speed_ms()));
        let index = playback.index() + 1;
        match playback.tick() {
            Some(line) => println!("{}", render::step_line(index, total, line)),
            None => break,
        }
    }
    0
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
