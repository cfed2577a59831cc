use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use rustplot::prelude::*;

#[derive(Parser)]
#[command(name = "rustplot")]
#[command(about = "Render showcase charts to SVG")]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// A sine and cosine line chart, clipped to a window
    Lines {
        /// Output SVG path
        #[arg(short, long, default_value = "lines.svg")]
        out: String,
    },
    /// A histogram of a synthetic bimodal sample
    Hist {
        /// Output SVG path
        #[arg(short, long, default_value = "hist.svg")]
        out: String,
        /// Number of buckets
        #[arg(long, default_value_t = 20)]
        bins: usize,
    },
    /// A scatter plot with out-of-range points dropped
    Scatter {
        /// Output SVG path
        #[arg(short, long, default_value = "scatter.svg")]
        out: String,
    },
}

fn lines_figure() -> Figure {
    let xs: Vec<f64> = (0..=200).map(|i| i as f64 * 0.05).collect();
    let sine: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let cosine: Vec<f64> = xs.iter().map(|x| 1.5 * x.cos()).collect();

    let mut fig = Figure::new(800, 500);
    // y window deliberately tighter than the cosine amplitude so the
    // clipping engine has something to do.
    let ax = fig.add_axis((0.08, 0.08), (0.86, 0.84), (0.0, 10.0, -1.2, 1.2));
    ax.line(xs.clone(), sine, style([("stroke", "steelblue"), ("stroke_width", "2")]))
        .line(xs, cosine, style([("stroke", "indianred"), ("stroke_width", "2")]))
        .auto_xticks(6)
        .auto_yticks(5)
        .text_styled("sin(x) and 1.5 cos(x)", 5.0, 1.05, 0.0, style([("text_anchor", "middle")]));
    fig
}

fn hist_figure(bins: usize) -> Figure {
    // Deterministic bimodal sample from a cheap LCG.
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut uniform = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    let mut values = Vec::with_capacity(4000);
    for i in 0..4000 {
        let center = if i % 2 == 0 { 3.0 } else { 7.0 };
        let sum: f64 = (0..12).map(|_| uniform()).sum();
        values.push(center + (sum - 6.0) * 0.8);
    }

    let mut fig = Figure::new(800, 500);
    let ax = fig.add_axis((0.08, 0.08), (0.86, 0.84), (0.0, 0.0, 0.0, 0.0));
    ax.hist(&values, bins, style([("fill", "steelblue"), ("stroke", "white")]));
    let (x_min, x_max, y_min, y_max) = (ax.limits.0, ax.limits.1, ax.limits.2, ax.limits.3);
    ax.xticks(rustplot::nice_ticks(x_min, x_max, 6))
        .yticks(rustplot::nice_ticks(y_min, y_max, 5));
    fig
}

fn scatter_figure() -> Figure {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut uniform = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    let xs: Vec<f64> = (0..300).map(|_| uniform() * 14.0 - 2.0).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x * 0.8 + uniform() * 4.0 - 2.0).collect();

    let mut fig = Figure::new(600, 600);
    let ax = fig.add_axis((0.1, 0.1), (0.8, 0.8), (0.0, 10.0, 0.0, 10.0));
    ax.scatter(xs, ys, style([("fill", "seagreen"), ("fill_opacity", "0.6")]))
        .auto_xticks(6)
        .auto_yticks(6);
    fig
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false)
        .init();

    let (figure, out) = match &cli.command {
        Commands::Lines { out } => (lines_figure(), out.clone()),
        Commands::Hist { out, bins } => (hist_figure(*bins), out.clone()),
        Commands::Scatter { out } => (scatter_figure(), out.clone()),
    };

    match figure.save(&out) {
        Ok(()) => info!("wrote {}", out),
        Err(e) => {
            log::error!("could not write {}: {}", out, e);
            std::process::exit(1);
        }
    }
}
