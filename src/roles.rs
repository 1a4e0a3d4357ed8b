use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

const CONSULTING_JD: &str = "Looking for a strategic thinker with strong problem-solving skills. Must know Excel, Market Research, and Case Analysis. MBA preferred.";
const HR_JD: &str = "Seeking an HR professional with knowledge of Labor Laws, Talent Acquisition, Employee Engagement, and Soft Skills.";
const PRODUCT_JD: &str = "Requires strong User Research, Roadmap planning, Agile methodology, and Cross-functional leadership.";
const ANALYTICS_JD: &str = "We are looking for a candidate with strong Python skills, knowledge of Machine Learning, and an understanding of financial modeling. Good communication is a plus.";

/// Target roles a recruiter can screen for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum JobRole {
    #[default]
    #[strum(to_string = "Management Consultant")]
    ManagementConsultant,
    #[strum(to_string = "Product Manager")]
    ProductManager,
    #[strum(to_string = "HR Business Partner")]
    HrBusinessPartner,
    #[strum(to_string = "Financial Analyst")]
    FinancialAnalyst,
    #[strum(to_string = "Marketing Manager")]
    MarketingManager,
    #[strum(to_string = "Operations Manager")]
    OperationsManager,
    #[strum(to_string = "Data Scientist")]
    DataScientist,
    #[strum(to_string = "Software Engineer")]
    SoftwareEngineer,
}

impl JobRole {
    /// Job description used when the recruiter doesn't paste one.
    pub fn default_job_description(self) -> &'static str {
        match self {
            JobRole::ManagementConsultant => CONSULTING_JD,
            JobRole::HrBusinessPartner => HR_JD,
            JobRole::ProductManager => PRODUCT_JD,
            _ => ANALYTICS_JD,
        }
    }
}
