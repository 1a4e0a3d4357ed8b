use anyhow::Result;
use clap::Parser;
use placebot::roster::StudentRecord;
use placebot::scoring::Scorer;
use placebot::settings::settings;
use placebot::utils::{init_tracing, log_candidate_assessment, log_generic_error};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Explain how a single candidate would score against a job description.
#[derive(Parser)]
#[command(name = "score-student", version)]
struct Args {
    /// Candidate GPA on a 0-10 scale.
    #[arg(long)]
    gpa: f32,
    /// Comma-separated skills, e.g. "Python,Finance".
    #[arg(long, value_delimiter = ',')]
    skills: Vec<String>,
    #[arg(long)]
    min_gpa: Option<f32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Job description text.
    #[arg(required = true, num_args = 1..)]
    jd: Vec<String>,
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

    let args = Args::parse();
    let job_description = args.jd.join(" ");
    let min_gpa = args
        .min_gpa
        .unwrap_or(settings().dashboard.default_min_gpa);

    let skills: Vec<&str> = args
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    let candidate = StudentRecord::new("adhoc", "candidate", args.gpa, &skills, "");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let results = Scorer::default().score(
        std::slice::from_ref(&candidate),
        &job_description,
        min_gpa,
        &mut rng,
    )?;

    for result in &results {
        log_candidate_assessment(result, candidate.gpa, min_gpa);
    }

    Ok(())
}
