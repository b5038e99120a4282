use colsim::{ScenarioConfig, Scenario};
use colsim::run_2d;
use colsim::{bench_frame_curve, bench_substep};

use anyhow::{Context, Result};
use bevy::app::AppExit;
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/; built-in defaults when omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Time the step driver instead of opening a window
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_config(file_name: Option<&str>) -> Result<ScenarioConfig> {
    let Some(file_name) = file_name else {
        return Ok(ScenarioConfig::default());
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_substep()?;
        bench_frame_curve()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_config(args.file_name.as_deref())?;

    // Allocation or placement failure ends the process here, before any window opens
    let scenario = Scenario::build_scenario(scenario_cfg).context("failed to build scenario")?;

    if let AppExit::Error(code) = run_2d(scenario) {
        std::process::exit(i32::from(code.get()));
    }

    Ok(())
}
