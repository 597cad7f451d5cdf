//! Teuvo CLI - Self-Organizing Map engine
//!
//! Command-line harness for training, inspecting and demoing maps.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use teuvo::{GridLayout, HeatMap, MapConfig, MapFormat, Result, SelfOrganizingMap, TeuvoError};

#[derive(Parser)]
#[command(name = "teuvo")]
#[command(version)]
#[command(about = "Self-Organizing Map engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a map on 2-d points and log nearness grids before and after
    Demo {
        /// Use a hexagonal 7x7 grid instead of the rectangular 7x8 one
        #[arg(long)]
        hex: bool,

        /// Number of training iterations
        #[arg(short = 'n', long, default_value = "1000")]
        iterations: usize,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Train a map from a file of input vectors (one per line)
    Train {
        /// Input vector file, comma or whitespace separated values per line
        #[arg(short, long)]
        input: PathBuf,

        /// Output map file
        #[arg(short, long)]
        output: PathBuf,

        /// Grid width
        #[arg(long, default_value = "10")]
        width: usize,

        /// Grid height
        #[arg(long, default_value = "10")]
        height: usize,

        /// Number of training iterations (the input is cycled as needed)
        #[arg(short = 'n', long, default_value = "1000")]
        iterations: usize,

        /// Use the hexagonal grid layout (width is the hex side)
        #[arg(long)]
        hex: bool,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON map configuration file; overrides the grid flags above
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the dimensions and iteration count of a stored map
    Info {
        /// Map file to inspect
        map: PathBuf,
    },

    /// Render a heat map of a stored map against a sample vector
    Heatmap {
        /// Map file to load
        #[arg(short, long)]
        map: PathBuf,

        /// Sample vector, comma separated
        #[arg(short, long)]
        sample: String,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let result = match cli.command {
        Commands::Demo {
            hex,
            iterations,
            seed,
        } => run_demo(hex, iterations, seed),

        Commands::Train {
            input,
            output,
            width,
            height,
            iterations,
            hex,
            seed,
            config,
        } => train_map(input, output, width, height, iterations, hex, seed, config),

        Commands::Info { map } => show_info(map),

        Commands::Heatmap {
            map,
            sample,
            output,
        } => render_heatmap(map, sample, output),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

/// Trains a small map on uniform random points in [0, 10)^2 and logs a
/// 10x10 grid of best-matching neurons before and after, plus a grid for
/// points jittered around the grid positions.
fn run_demo(hex: bool, iterations: usize, seed: Option<u64>) -> Result<()> {
    let config = MapConfig {
        width: 7,
        height: if hex { 7 } else { 8 },
        input_length: 2,
        iterations,
        layout: if hex {
            GridLayout::Hexagonal
        } else {
            GridLayout::Rectangular
        },
        seed,
        ..Default::default()
    };
    let mut map = SelfOrganizingMap::new(&config);
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    info!("Before training");
    log_mapping_grid(&map, |i, j| [i, j])?;

    for _ in 0..iterations {
        let input = [rng.gen::<f64>() * 10.0, rng.gen::<f64>() * 10.0];
        map.train_with(&input)?;
    }

    info!("After training");
    log_mapping_grid(&map, |i, j| [i, j])?;

    info!("Nearby points");
    let mut jitter = move |i: f64, j: f64| {
        [i + rng.gen::<f64>() - 0.5, j + rng.gen::<f64>() - 0.5]
    };
    log_mapping_grid(&map, &mut jitter)?;

    Ok(())
}

/// Logs a 10x10 grid of the neuron indices matching inputs derived from
/// each (i, j) grid position.
fn log_mapping_grid<F>(map: &SelfOrganizingMap, mut input_at: F) -> Result<()>
where
    F: FnMut(f64, f64) -> [f64; 2],
{
    let mut grid = String::from("\n  \t 1  2  3  4  5  6  7  8  9 10");
    for i in 1..=10 {
        grid.push_str(&format!("\n{i:2}\t"));
        for j in 1..=10 {
            let input = input_at(i as f64, j as f64);
            let neuron = map.best_matching_neuron(&input)?;
            grid.push_str(&format!("{neuron:2} "));
        }
    }
    info!("{grid}");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn train_map(
    input: PathBuf,
    output: PathBuf,
    width: usize,
    height: usize,
    iterations: usize,
    hex: bool,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let file = File::open(&input)?;
    let reader = BufReader::new(file);
    let vectors: Vec<Vec<f64>> = reader
        .lines()
        .map_while(|line| line.ok())
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_vector(&line))
        .collect::<Result<_>>()?;

    let Some(first) = vectors.first() else {
        return Err(TeuvoError::Config("input file has no vectors".to_string()));
    };
    let input_length = first.len();
    for (i, vector) in vectors.iter().enumerate() {
        if vector.len() != input_length {
            return Err(TeuvoError::Config(format!(
                "vector on line {} has {} values, expected {}",
                i + 1,
                vector.len(),
                input_length
            )));
        }
    }

    let config = match config_path {
        Some(path) => {
            let file = File::open(&path)?;
            let mut config: MapConfig = serde_json::from_reader(BufReader::new(file))
                .map_err(|e| TeuvoError::Config(format!("{}: {e}", path.display())))?;
            config.input_length = input_length;
            config
        }
        None => MapConfig {
            width,
            height,
            input_length,
            iterations,
            layout: if hex {
                GridLayout::Hexagonal
            } else {
                GridLayout::Rectangular
            },
            seed,
            ..Default::default()
        },
    };
    let iterations = config.iterations;

    info!(
        "Training a {}x{} map on {} vectors of length {}",
        config.width,
        config.height,
        vectors.len(),
        input_length
    );

    let mut map = SelfOrganizingMap::new(&config);

    let bar = ProgressBar::new(iterations as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("█▓▒░  "),
    );

    for step in 0..iterations {
        map.train_with(&vectors[step % vectors.len()])?;
        bar.inc(1);
    }
    bar.finish_and_clear();

    let file = File::create(&output)?;
    let mut writer = BufWriter::new(file);
    MapFormat::write(&map, &mut writer)?;
    info!("Wrote trained map to {}", output.display());
    Ok(())
}

fn show_info(map: PathBuf) -> Result<()> {
    let file = File::open(&map)?;
    let parsed = MapFormat::read(BufReader::new(file))?;

    println!("Grid dimensions: {}, {}", parsed.width, parsed.height);
    println!("Input length:    {}", parsed.input_length);
    println!("Iterations:      {}", parsed.iterations);
    println!("Neurons:         {}", parsed.weights.len());
    Ok(())
}

fn render_heatmap(map: PathBuf, sample: String, output: PathBuf) -> Result<()> {
    let file = File::open(&map)?;
    let map = MapFormat::read(BufReader::new(file))?.into_map()?;
    let sample = parse_vector(&sample)?;

    let mut heat = HeatMap::new(&map);
    heat.update(&map, &sample)?;
    heat.to_image()
        .save(&output)
        .map_err(|e| TeuvoError::Io(std::io::Error::other(e)))?;

    info!("Wrote heat map to {}", output.display());
    Ok(())
}

/// Parses a comma or whitespace separated list of reals.
fn parse_vector(text: &str) -> Result<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece
                .parse::<f64>()
                .map_err(|e| TeuvoError::Config(format!("bad value {piece:?}: {e}")))
        })
        .collect()
}
