use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Highest match score any configuration may produce.
pub const MAX_SCORE: u32 = 98;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub scoring: ScoringSettings,
    pub dashboard: DashboardSettings,
}

/// Constants of the match score. Scores are whole percentage points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Awarded when the student's GPA meets the minimum.
    pub gpa_bonus: u32,
    /// Awarded per skill found in the job description.
    pub per_skill_bonus: u32,
    pub jitter_min: u32,
    pub jitter_max: u32,
    pub score_cap: u32,
    /// Scores strictly above this are recommended for interview.
    pub interview_threshold: u32,
    /// Scores strictly above this (and not above the interview threshold) are waitlisted.
    pub waitlist_threshold: u32,
    /// Upper bound of the GPA scale; `min_gpa` must lie in `[0, gpa_scale]`.
    pub gpa_scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub default_min_gpa: f32,
    pub institution: String,
    pub advertised_pool: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            gpa_bonus: 30,
            per_skill_bonus: 15,
            jitter_min: 5,
            jitter_max: 15,
            score_cap: 98,
            interview_threshold: 75,
            waitlist_threshold: 50,
            gpa_scale: 10.0,
        }
    }
}

impl ScoringSettings {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.score_cap <= MAX_SCORE,
            "score_cap {} exceeds {MAX_SCORE}",
            self.score_cap
        );
        ensure!(
            self.jitter_min <= self.jitter_max,
            "jitter_min {} is above jitter_max {}",
            self.jitter_min,
            self.jitter_max
        );
        ensure!(
            self.waitlist_threshold <= self.interview_threshold,
            "waitlist_threshold {} is above interview_threshold {}",
            self.waitlist_threshold,
            self.interview_threshold
        );
        ensure!(
            self.gpa_scale > 0.0,
            "gpa_scale {} must be positive",
            self.gpa_scale
        );
        Ok(())
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_min_gpa: 7.5,
            institution: "Christ University".to_string(),
            advertised_pool: 1250,
        }
    }
}

impl Settings {
    pub fn load() -> &'static Settings {
        SETTINGS.get_or_init(Self::load_from_files)
    }

    fn load_from_files() -> Settings {
        let default_path = Path::new("settings.default.ron");
        let override_path = Path::new("settings.ron");

        let mut settings = read_settings(default_path).unwrap_or_default();

        if let Some(overrides) = read_settings(override_path) {
            settings = overrides;
        }

        settings
    }
}

fn read_settings(path: &Path) -> Option<Settings> {
    if !path.exists() {
        return None;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("ignoring {}: {e}", path.display());
            return None;
        }
    };

    match parse_settings(&content) {
        Ok(settings) => Some(settings),
        Err(e) => {
            tracing::warn!("ignoring {}: {e:#}", path.display());
            None
        }
    }
}

fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = ron::from_str(content)?;
    settings.scoring.validate()?;
    Ok(settings)
}

pub fn settings() -> &'static Settings {
    Settings::load()
}
