use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use placebot::roles::JobRole;
use placebot::roster::{BuiltinRoster, RonRoster, RosterSource, StudentRecord};
use placebot::scoring::{MatchResult, Scorer};
use placebot::settings::settings;
use placebot::utils::{
    init_tracing, log_dashboard_header, log_generic_error, log_match_request, log_match_table,
    log_pipeline_stages, log_roles, log_roster_overview,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(
    name = "placebot",
    version,
    about = "Rule-based candidate matching for campus placements"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the student database.
    Roster {
        /// RON file with student records instead of the built-in roster.
        #[arg(long)]
        roster: Option<PathBuf>,
    },
    /// List target roles and their default job descriptions.
    Roles,
    /// Score the roster against a job description and rank the matches.
    Match {
        #[arg(long, value_enum, default_value_t = JobRole::default())]
        role: JobRole,
        /// Minimum GPA on a 0-10 scale.
        #[arg(long)]
        min_gpa: Option<f32>,
        /// Job description text. Defaults to the role's description.
        #[arg(long)]
        jd: Option<String>,
        #[arg(long)]
        roster: Option<PathBuf>,
        /// Seed for the score jitter, for reproducible rankings.
        #[arg(long)]
        seed: Option<u64>,
        /// Print the ranked matches as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct MatchReport<'a> {
    role: JobRole,
    min_gpa: f32,
    job_description: &'a str,
    matches: &'a [MatchResult],
}

fn main() {
    if let Err(err) = run() {
        log_generic_error("[ERROR]", &format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Roster { roster } => cmd_roster(roster),
        Command::Roles => {
            log_roles(JobRole::iter());
            Ok(())
        }
        Command::Match {
            role,
            min_gpa,
            jd,
            roster,
            seed,
            json,
        } => cmd_match(role, min_gpa, jd, roster, seed, json),
    }
}

fn load_roster(path: Option<PathBuf>) -> Result<Vec<StudentRecord>> {
    let source: Box<dyn RosterSource> = match path {
        Some(path) => Box::new(RonRoster::new(path)),
        None => Box::new(BuiltinRoster),
    };
    source.load()
}

fn cmd_roster(path: Option<PathBuf>) -> Result<()> {
    let roster = load_roster(path)?;
    log_roster_overview(&roster);
    Ok(())
}

fn cmd_match(
    role: JobRole,
    min_gpa: Option<f32>,
    jd: Option<String>,
    roster_path: Option<PathBuf>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let s = settings();
    let roster = load_roster(roster_path)?;
    let min_gpa = min_gpa.unwrap_or(s.dashboard.default_min_gpa);
    let job_description = jd.unwrap_or_else(|| role.default_job_description().to_string());

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    tracing::info!(%role, min_gpa, students = roster.len(), "running match");
    let results = Scorer::default()
        .score(&roster, &job_description, min_gpa, &mut rng)
        .context("scoring failed")?;

    if json {
        let report = MatchReport {
            role,
            min_gpa,
            job_description: &job_description,
            matches: &results,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize matches")?
        );
        return Ok(());
    }

    let date = chrono::Local::now().format("%d %b %Y").to_string();
    log_dashboard_header(&date, s.dashboard.advertised_pool, &s.dashboard.institution);
    println!();
    log_match_request(role, min_gpa, &job_description);
    log_pipeline_stages(s.dashboard.advertised_pool);
    log_match_table(role, &results);

    Ok(())
}
