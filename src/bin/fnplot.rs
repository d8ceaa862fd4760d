//! fnplot: ASCII scatter plots of functions in the terminal.
//!
//! Run: `fnplot cosine --scale 0.15`
//!      `fnplot poly --coeffs 0,1,18,1 --scale 0.375 --shift 20`
//!      `fnplot demo`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use trueno_fnplot::config::PlotConfig;
use trueno_fnplot::function::Function;
use trueno_fnplot::plots::{demo_plots, FunctionPlot};
use trueno_fnplot::transform::Transform;

/// fnplot: ASCII scatter plots of cosine and polynomial functions
#[derive(Parser, Debug)]
#[command(name = "fnplot")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Plot cosine and low-degree polynomials as ASCII scatter plots")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Grid width in columns
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Grid height in rows
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Plot symbol
    #[arg(long, global = true)]
    symbol: Option<char>,

    /// Title printed above the plot
    #[arg(long, global = true)]
    title: Option<String>,

    /// Config file path (YAML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot cos(i * scale - shift)
    Cosine {
        /// Domain distance between columns
        #[arg(long, default_value = "0.15", allow_hyphen_values = true)]
        scale: f32,

        /// Domain offset subtracted after scaling
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        shift: f32,
    },

    /// Plot a polynomial of degree <= 3
    Poly {
        /// Coefficients, lowest degree first (e.g. 0,1,18,1)
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        coeffs: Vec<f32>,

        /// Domain distance between columns
        #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
        scale: f32,

        /// Domain offset subtracted after scaling
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        shift: f32,
    },

    /// Print the built-in cosine and cubic plots
    Demo,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr);
    Registry::default().with(filter).with(fmt_layer).init();
}

fn load_config(cli: &Cli) -> Result<PlotConfig> {
    let mut config = match &cli.config {
        Some(path) => PlotConfig::load(path).with_context(|| format!("loading config {path}"))?,
        None => PlotConfig::default(),
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(symbol) = cli.symbol {
        config.symbol = symbol;
    }
    if let Some(title) = &cli.title {
        config.title = Some(title.clone());
    }

    Ok(config)
}

fn plots(cli: &Cli, config: &PlotConfig) -> Result<Vec<FunctionPlot>> {
    let plot = match &cli.command {
        Command::Cosine { scale, shift } => {
            FunctionPlot::new(Function::Cosine).transform(Transform::new(*scale, *shift))
        }
        Command::Poly { coeffs, scale, shift } => {
            let function = Function::polynomial(coeffs).context("invalid polynomial")?;
            FunctionPlot::new(function).transform(Transform::new(*scale, *shift))
        }
        Command::Demo => return demo_plots().context("building demo plots"),
    };

    Ok(vec![config.apply(plot).build()?])
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    tracing::info!(width = config.width, height = config.height, "plot configuration");

    for plot in plots(cli, &config)? {
        plot.print().with_context(|| format!("plotting {}", plot.function().name()))?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
