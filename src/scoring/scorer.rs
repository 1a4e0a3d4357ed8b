use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::ScoreError;
use super::keywords::matched_skills;
use super::recommendation::Recommendation;
use crate::roster::StudentRecord;
use crate::settings::{settings, ScoringSettings, MAX_SCORE};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_score: u32,
    pub matched_skills: Vec<String>,
    pub match_bonus: u32,
    pub raw_score: u32,
    pub jitter: u32,
    pub final_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub name: String,
    pub score: u32,
    pub skills: Vec<String>,
    pub recommendation: Recommendation,
    pub breakdown: ScoreBreakdown,
}

/// Rule-based candidate scorer: GPA gate, skill overlap with the job
/// description, and a random jitter, capped and classified.
#[derive(Debug, Clone)]
pub struct Scorer {
    settings: ScoringSettings,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(settings().scoring.clone())
    }
}

impl Scorer {
    pub fn new(settings: ScoringSettings) -> Self {
        Self { settings }
    }

    /// Scores every record and returns them ranked by score, highest first.
    /// Equal scores keep their roster order.
    pub fn score<R: Rng>(
        &self,
        roster: &[StudentRecord],
        job_description: &str,
        min_gpa: f32,
        rng: &mut R,
    ) -> Result<Vec<MatchResult>, ScoreError> {
        self.check_min_gpa(min_gpa)?;

        let mut results: Vec<MatchResult> = roster
            .iter()
            .map(|record| self.score_record(record, job_description, min_gpa, rng))
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(results)
    }

    pub fn score_record<R: Rng>(
        &self,
        record: &StudentRecord,
        job_description: &str,
        min_gpa: f32,
        rng: &mut R,
    ) -> MatchResult {
        let breakdown = self.breakdown(record, job_description, min_gpa, rng);
        let recommendation = Recommendation::from_score(breakdown.final_score, &self.settings);

        tracing::debug!(
            id = %record.id,
            base = breakdown.base_score,
            bonus = breakdown.match_bonus,
            jitter = breakdown.jitter,
            score = breakdown.final_score,
            %recommendation,
            "scored candidate"
        );

        MatchResult {
            id: record.id.clone(),
            name: record.name.clone(),
            score: breakdown.final_score,
            skills: record.skills.clone(),
            recommendation,
            breakdown,
        }
    }

    fn breakdown<R: Rng>(
        &self,
        record: &StudentRecord,
        job_description: &str,
        min_gpa: f32,
        rng: &mut R,
    ) -> ScoreBreakdown {
        let s = &self.settings;

        let base_score = if record.gpa >= min_gpa { s.gpa_bonus } else { 0 };

        let matched: Vec<String> = matched_skills(job_description, &record.skills)
            .into_iter()
            .map(str::to_string)
            .collect();
        let match_bonus = (matched.len() as u32).saturating_mul(s.per_skill_bonus);

        let raw_score = base_score.saturating_add(match_bonus);
        let jitter = rng.random_range(s.jitter_min..=s.jitter_max.max(s.jitter_min));
        let final_score = raw_score
            .saturating_add(jitter)
            .min(s.score_cap.min(MAX_SCORE));

        ScoreBreakdown {
            base_score,
            matched_skills: matched,
            match_bonus,
            raw_score,
            jitter,
            final_score,
        }
    }

    fn check_min_gpa(&self, min_gpa: f32) -> Result<(), ScoreError> {
        let max = self.settings.gpa_scale;
        if (0.0..=max).contains(&min_gpa) {
            Ok(())
        } else {
            Err(ScoreError::MinGpaOutOfRange { min_gpa, max })
        }
    }
}

/// Scores `roster` with the loaded settings and the thread-local RNG.
pub fn score(
    roster: &[StudentRecord],
    job_description: &str,
    min_gpa: f32,
) -> Result<Vec<MatchResult>, ScoreError> {
    Scorer::default().score(roster, job_description, min_gpa, &mut rand::rng())
}
