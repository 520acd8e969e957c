//! MargaNav - batch driver for the rail-grid route planner
//!
//! Two modes:
//!
//! - `marga-nav solve`: read instance blocks (file or stdin), answer one
//!   result line per instance in input order (file or stdout).
//! - `marga-nav generate`: write a campaign of random instance files
//!   described by a TOML configuration.
//!
//! Enable diagnostics with `RUST_LOG=marga_nav=debug,marga_plan=debug`.

mod config;
mod error;

use config::CampaignConfig;
use error::Result;

use clap::{Parser, Subcommand};
use marga_plan::generator::{generate_instance, GeneratorParams};
use marga_plan::io::{format_result, read_instances, write_instances};
use marga_plan::RoutePlanner;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Rail-grid route planner driver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Solve instance blocks, one result line per instance
    Solve {
        /// Instance file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Result file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate random instance files for a campaign
    Generate {
        /// Campaign configuration file (TOML); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory for the generated files
        #[arg(short, long, default_value = "instances")]
        out_dir: PathBuf,
    },
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marga_nav=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        CliCommand::Solve { input, output } => solve(input.as_deref(), output.as_deref()),
        CliCommand::Generate { config, out_dir } => generate(config.as_deref(), &out_dir),
    }
}

/// Solve every instance in the input document, in order.
fn solve(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let instances = match input {
        Some(path) => {
            info!("reading instances from {:?}", path);
            read_instances(BufReader::new(File::open(path)?))?
        }
        None => read_instances(io::stdin().lock())?,
    };
    info!("solving {} instances", instances.len());

    let mut lines = Vec::with_capacity(instances.len());
    let mut solved = 0;
    for (index, instance) in instances.iter().enumerate() {
        let planner = RoutePlanner::new(&instance.grid);
        let result = planner.find_route(instance.start, instance.orientation, instance.goal);
        debug!(
            "instance {}: {} ({} states expanded)",
            index,
            if result.success {
                format!("{} commands", result.len())
            } else {
                "no route".to_string()
            },
            result.states_expanded
        );
        if result.success {
            solved += 1;
        }
        lines.push(format_result(&result));
    }
    info!("{}/{} instances have a route", solved, instances.len());

    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            for line in &lines {
                writeln!(writer, "{}", line)?;
            }
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            for line in &lines {
                writeln!(writer, "{}", line)?;
            }
        }
    }
    Ok(())
}

/// Generate the instance files of one campaign.
fn generate(config: Option<&Path>, out_dir: &Path) -> Result<()> {
    let config = match config {
        Some(path) => {
            info!("loading campaign configuration from {:?}", path);
            CampaignConfig::load(path)?
        }
        None => CampaignConfig::default(),
    };

    std::fs::create_dir_all(out_dir)?;

    let mut rng = match config.campaign.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut written = 0;
    for &obstacles in &config.campaign.obstacle_counts {
        let params = GeneratorParams {
            rows: config.grid.rows,
            cols: config.grid.cols,
            obstacles,
        };
        for index in 0..config.campaign.instances_per_count {
            let instance = generate_instance(&mut rng, &params)?;
            let path = out_dir.join(format!("instance_{}_{}.txt", obstacles, index + 1));
            let mut writer = BufWriter::new(File::create(&path)?);
            write_instances(&mut writer, std::slice::from_ref(&instance))?;
            writer.flush()?;
            written += 1;
        }
    }
    info!("wrote {} instance files to {:?}", written, out_dir);
    Ok(())
}
