//! StudyLab CLI — study validation, assignment, and distribution audits.
//!
//! Commands:
//! - `validate` — load a study config, run all checks, print its fingerprint
//! - `assign` — materialize one participant session (OS entropy, or seeded)
//! - `simulate` — run many assignment draws and report group frequencies

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use studylab_core::domain::Study;
use studylab_core::entropy;
use studylab_core::manifest::StudyManifest;
use studylab_core::sampler::WeightedGroupSampler;
use studylab_core::session::{materialize, SessionPlan};
use studylab_runner::{render_json, render_text, simulate_assignments, SimulationConfig};

#[derive(Parser)]
#[command(
    name = "studylab",
    about = "StudyLab CLI — randomized group assignment and protocol ordering"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a study config, run all validation checks, print its fingerprint.
    Validate {
        /// Path to the study TOML file.
        config: PathBuf,
    },
    /// Assign one participant and print the resulting session plan.
    Assign {
        /// Path to the study TOML file.
        config: PathBuf,

        /// Seed for a reproducible assignment. Uses OS entropy when absent.
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the session plan as JSON instead of a readable summary.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run many assignment draws and report per-group frequencies.
    Simulate {
        /// Path to the study TOML file.
        config: PathBuf,

        /// Number of simulated participants.
        #[arg(long, default_value_t = 10_000)]
        draws: u64,

        /// Master seed for the simulation hierarchy.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Emit the report as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => run_validate(&config),
        Commands::Assign { config, seed, json } => run_assign(&config, seed, json),
        Commands::Simulate {
            config,
            draws,
            seed,
            json,
        } => run_simulate(&config, draws, seed, json),
    }
}

fn run_validate(config: &PathBuf) -> Result<()> {
    let study = Study::load(config)?;
    let manifest = StudyManifest::for_study(&study);

    println!("OK: {}", config.display());
    println!();
    println!("Study:       {}", study.id);
    if !study.title.is_empty() {
        println!("Title:       {}", study.title);
    }
    println!("Fingerprint: {}", manifest.config_hash);
    println!("Groups:      {}", study.groups.len());
    println!();
    println!("{:<16} {:>10} {:>8} {:>10}", "Group", "Weight", "Phases", "Questions");
    println!("{}", "-".repeat(48));
    for group in &study.groups {
        let questions: usize = group
            .protocol
            .phases
            .iter()
            .map(|p| p.questions.len())
            .sum();
        println!(
            "{:<16} {:>10} {:>8} {:>10}",
            group.id.to_string(),
            group.weight.to_string(),
            group.protocol.phases.len(),
            questions
        );
    }
    Ok(())
}

fn run_assign(config: &PathBuf, seed: Option<u64>, json: bool) -> Result<()> {
    let study = Study::load(config)?;
    let sampler = WeightedGroupSampler::for_study(&study)?;

    let plan = match seed {
        Some(seed) => materialize(&study, &sampler, &mut entropy::seeded(seed)),
        None => materialize(&study, &sampler, &mut entropy::os_entropy()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }
    Ok(())
}

fn run_simulate(config: &PathBuf, draws: u64, seed: u64, json: bool) -> Result<()> {
    let study = Study::load(config)?;
    let report = simulate_assignments(
        &study,
        &SimulationConfig {
            draws,
            master_seed: seed,
        },
    )?;

    if json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

fn print_plan(plan: &SessionPlan) {
    println!("Study: {}", plan.study);
    println!("Group: {}", plan.group);
    for (i, phase) in plan.phases.iter().enumerate() {
        println!();
        println!("Phase {}: {}", i + 1, phase.phase);
        for question in &phase.questions {
            if question.options.is_empty() {
                println!("  {}", question.question);
            } else {
                let order: Vec<&str> = question.options.iter().map(|o| o.0.as_str()).collect();
                println!("  {} [options: {}]", question.question, order.join(", "));
            }
        }
    }
}
