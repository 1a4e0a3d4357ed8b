use crate::settings::ScoringSettings;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Recommendation {
    #[strum(serialize = "Interview")]
    Interview,
    #[strum(serialize = "Waitlist")]
    Waitlist,
    #[strum(serialize = "Reject")]
    Reject,
}

impl Recommendation {
    pub fn from_score(score: u32, s: &ScoringSettings) -> Self {
        if score > s.interview_threshold {
            Recommendation::Interview
        } else if score > s.waitlist_threshold {
            Recommendation::Waitlist
        } else {
            Recommendation::Reject
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_tiers() {
        let s = ScoringSettings::default();
        assert_eq!(Recommendation::from_score(98, &s), Recommendation::Interview);
        assert_eq!(Recommendation::from_score(60, &s), Recommendation::Waitlist);
        assert_eq!(Recommendation::from_score(20, &s), Recommendation::Reject);
    }

    #[test]
    fn test_threshold_boundaries() {
        let s = ScoringSettings::default();
        assert_eq!(Recommendation::from_score(76, &s), Recommendation::Interview);
        assert_eq!(Recommendation::from_score(75, &s), Recommendation::Waitlist);
        assert_eq!(Recommendation::from_score(51, &s), Recommendation::Waitlist);
        assert_eq!(Recommendation::from_score(50, &s), Recommendation::Reject);
        assert_eq!(Recommendation::from_score(0, &s), Recommendation::Reject);
    }

    #[test]
    fn test_display() {
        assert_eq!(Recommendation::Waitlist.to_string(), "Waitlist");
    }
}
