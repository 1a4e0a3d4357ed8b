mod error;
pub mod keywords;
mod recommendation;
mod scorer;

pub use error::ScoreError;
pub use keywords::matched_skills;
pub use recommendation::Recommendation;
pub use scorer::{score, MatchResult, ScoreBreakdown, Scorer};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::JobRole;
    use crate::roster::{BuiltinRoster, RosterSource};
    use crate::settings::ScoringSettings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_consulting_role_ranks_consultant_first() {
        let roster = BuiltinRoster.load().unwrap();
        let jd = JobRole::ManagementConsultant.default_job_description();
        let mut rng = StdRng::seed_from_u64(17);
        let results = Scorer::new(ScoringSettings::default())
            .score(&roster, jd, 7.5, &mut rng)
            .unwrap();

        let top = &results[0];
        assert_eq!(top.name, "Vikram Malhotra");
        assert_eq!(top.recommendation, Recommendation::Interview);
        assert_eq!(top.breakdown.matched_skills.len(), 3);
    }

    #[test]
    fn test_below_min_gpa_student_rejected_without_skills() {
        let roster = BuiltinRoster.load().unwrap();
        let jd = JobRole::HrBusinessPartner.default_job_description();
        let mut rng = StdRng::seed_from_u64(99);
        let results = Scorer::new(ScoringSettings::default())
            .score(&roster, jd, 7.5, &mut rng)
            .unwrap();

        let rohan = results.iter().find(|r| r.id == "CU23405").unwrap();
        assert_eq!(rohan.breakdown.base_score, 0);
        assert_eq!(rohan.recommendation, Recommendation::Reject);
    }

    #[test]
    fn test_default_scorer_uses_loaded_settings() {
        let roster = BuiltinRoster.load().unwrap();
        let results = score(&roster, "", 7.5).unwrap();
        assert_eq!(results.len(), roster.len());
        assert!(results.iter().all(|r| r.score <= 98));
    }
}
