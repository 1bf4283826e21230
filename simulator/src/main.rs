use anyhow::Context;
use clap::Parser;
use gui_bridge::bridge::{gui_bind_address, GuiBridge};
use gui_bridge::model::VisualizationModel;
use radarcore::interface::{Category, DetectionReport};
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{Scenario, WorkflowConfig};
use workflow::runner::run_simulation;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Ground radar detection-cycle driver")]
struct Args {
    /// Built-in scenario to run when no workflow file is given
    #[arg(long, value_enum, default_value_t = Scenario::Cell)]
    scenario: Scenario,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Seed the scenario's random source for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Print every detection, not just the counts
    #[arg(long, default_value_t = false)]
    detail: bool,
    /// Keep the GUI bridge alive for the visualizer
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::preset(args.scenario)
    }
    .with_seed(args.seed);

    let report = run_simulation(&workflow_config)?;
    print_report(&report, args.detail);

    let gui_bridge = GuiBridge::new();
    gui_bridge.publish(&VisualizationModel::from_report(
        &workflow_config.name,
        report,
    ));

    if args.serve {
        gui_bridge.serve(gui_bind_address());
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}

fn print_report(report: &DetectionReport, detail: bool) {
    println!("Radar: Encrypted message sent -> {}\n", report.challenge);
    println!("Radar range: {:.2} km", report.range_km);
    println!("\nDetected Objects in Range:");
    println!("{}", report.counts);

    if detail {
        for category in Category::ALL {
            for (idx, detection) in report.of_category(category).enumerate() {
                println!(
                    "{} {} at ({:.2}, {:.2}) -> {:.2} km",
                    category,
                    idx + 1,
                    detection.position.x,
                    detection.position.y,
                    detection.distance_from_radar()
                );
            }
        }
    }
}
