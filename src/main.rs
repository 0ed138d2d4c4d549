//! Command-line front end for the engine.
//!
//!   nn-engine train --config xor.json --builtin xor --out model.json
//!   nn-engine train --config cfg.json --data rows.csv --label-cols 2
//!   nn-engine predict --model model.json --input 0,1
//!   nn-engine info --model model.json
//!
//! Without `--config`, a sigmoid network with one 16-unit hidden layer is
//! sized from the dataset's input and label widths.
//! Log verbosity comes from `--log-level` (trace, debug, info, warn, error).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use nn_engine::data::{self, builtin, LabelMode};
use nn_engine::{ActivationFunction, ModelSnapshot, Network, NetworkConfig};

#[derive(Parser)]
#[command(name = "nn-engine", about = "Train and query a small feedforward network")]
struct Cli {
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a network and optionally save the snapshot
    Train {
        /// JSON network config; the XOR demo config is used when omitted
        #[arg(long)]
        config: Option<String>,

        /// CSV file with features followed by label columns
        #[arg(long, conflicts_with = "builtin")]
        data: Option<String>,

        /// Built-in dataset to train on
        #[arg(long, value_enum, default_value_t = Builtin::Xor)]
        builtin: Builtin,

        /// Number of trailing CSV columns holding the label
        #[arg(long, default_value_t = 1)]
        label_cols: usize,

        /// Treat the last CSV column as a class index with this many classes
        #[arg(long)]
        classes: Option<usize>,

        /// Where to write the trained snapshot
        #[arg(long)]
        out: Option<String>,
    },

    /// Run a saved model on one input vector
    Predict {
        #[arg(long)]
        model: String,

        /// Comma-separated input values
        #[arg(long, allow_hyphen_values = true)]
        input: String,
    },

    /// Print architecture and hyperparameters of a saved model
    Info {
        #[arg(long)]
        model: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Builtin {
    Xor,
    Blobs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Level {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Train { config, data: data_path, builtin: toy, label_cols, classes, out } => {
            let (inputs, labels) = match data_path {
                Some(path) => {
                    let mode = match classes {
                        Some(n_classes) => LabelMode::ClassIndex { n_classes },
                        None => LabelMode::LastColumns { n: label_cols },
                    };
                    data::load_csv(&path, mode).with_context(|| format!("reading {path}"))?
                }
                None => match toy {
                    Builtin::Xor => builtin::xor(),
                    Builtin::Blobs => builtin::blobs(200),
                },
            };

            let config = match config {
                Some(path) => NetworkConfig::load_json(&path)
                    .with_context(|| format!("loading config {path}"))?,
                None => default_config(&inputs, &labels),
            };

            let mut network = Network::new(config)?;
            network.train(&inputs, &labels)?;

            if let Some(last) = network.training_history().last() {
                info!(epoch = last.epoch, loss = last.loss, "final epoch");
            }
            for input in inputs.iter().take(8) {
                println!("{input:?} -> {:?}", network.predict(input)?);
            }

            if let Some(path) = out {
                network.save_model().save_json(&path)
                    .with_context(|| format!("writing {path}"))?;
                info!(path = %path, "snapshot written");
            }
        }

        Commands::Predict { model, input } => {
            let network = load_network(&model)?;
            let input = data::parse_vector(&input)?;
            println!("{:?}", network.predict(&input)?);
        }

        Commands::Info { model } => {
            let network = load_network(&model)?;
            println!("{}", serde_json::to_string_pretty(&network.network_info())?);
        }
    }

    Ok(())
}

fn load_network(path: &str) -> Result<Network> {
    let snapshot = ModelSnapshot::load_json(path)
        .with_context(|| format!("reading model {path}"))?;
    Ok(Network::from_snapshot(snapshot)?)
}

/// Sigmoid `[inputs, 16, outputs]` network sized from the first row. The wide
/// hidden layer reliably separates XOR at lr 1.0 within 8000 epochs.
fn default_config(inputs: &[Vec<f64>], labels: &[Vec<f64>]) -> NetworkConfig {
    let width = |rows: &[Vec<f64>]| rows.first().map_or(0, Vec::len);
    NetworkConfig::new(vec![width(inputs), 16, width(labels)])
        .with_activation(ActivationFunction::Sigmoid)
        .with_learning_rate(1.0)
        .with_epochs(8000)
        .with_batch_size(inputs.len().clamp(1, 4))
}
