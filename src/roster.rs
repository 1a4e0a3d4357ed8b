use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub gpa: f32,
    pub skills: Vec<String>,
    pub bio: String,
}

impl StudentRecord {
    pub fn new(id: &str, name: &str, gpa: f32, skills: &[&str], bio: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            gpa,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            bio: bio.to_string(),
        }
    }
}

/// Where student records come from.
pub trait RosterSource {
    fn load(&self) -> Result<Vec<StudentRecord>>;
}

/// The demo student database.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRoster;

impl RosterSource for BuiltinRoster {
    fn load(&self) -> Result<Vec<StudentRecord>> {
        Ok(builtin_students())
    }
}

/// A RON file holding a list of student records.
#[derive(Debug, Clone)]
pub struct RonRoster {
    pub path: PathBuf,
}

impl RonRoster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterSource for RonRoster {
    fn load(&self) -> Result<Vec<StudentRecord>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read roster {}", self.path.display()))?;
        ron::from_str(&content)
            .with_context(|| format!("failed to parse roster {}", self.path.display()))
    }
}

fn builtin_students() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(
            "CU23401",
            "Arjun Sharma",
            8.9,
            &["Python", "Finance", "SQL", "Tableau"],
            "Finance major with strong data analytics skills.",
        ),
        StudentRecord::new(
            "CU23403",
            "Kabir Singh",
            7.8,
            &["Python", "Machine Learning", "Deep Learning", "NLP"],
            "Hackathon winner, focused on AI research.",
        ),
        StudentRecord::new(
            "CU23404",
            "Sneha Gupta",
            8.5,
            &["Finance", "Excel", "Accounting", "Auditing"],
            "Cleared CFA Level 1, strong in core finance.",
        ),
        StudentRecord::new(
            "CU23405",
            "Rohan Das",
            6.9,
            &["Java", "SQL", "Backend", "System Design"],
            "Backend developer, loves building scalable systems.",
        ),
        StudentRecord::new(
            "CU23402",
            "Riya Patel",
            9.2,
            &["Marketing", "SEO", "Content Strategy", "Social Media"],
            "Creative strategist with internship experience at Ogilvy.",
        ),
        StudentRecord::new(
            "CU23406",
            "Vikram Malhotra",
            9.0,
            &["Strategy", "Excel", "Case Analysis", "Market Research"],
            "President of the Consulting Club, excellent problem solver.",
        ),
        StudentRecord::new(
            "CU23407",
            "Ananya Iyer",
            8.2,
            &["HR", "Talent Acquisition", "Employee Engagement", "Labor Laws"],
            "People-person with a focus on organizational psychology.",
        ),
        StudentRecord::new(
            "CU23408",
            "David Fernandez",
            7.5,
            &["Operations", "Supply Chain", "Logistics", "Project Management"],
            "Detail-oriented, Lean Six Sigma Green Belt.",
        ),
        StudentRecord::new(
            "CU23409",
            "Priya Venkatesh",
            8.8,
            &["Product Management", "User Research", "Agile", "Roadmap"],
            "Aspiring PM, built two startup prototypes in college.",
        ),
        StudentRecord::new(
            "CU23410",
            "Rahul Nair",
            8.1,
            &["Sales", "B2B", "Negotiation", "CRM"],
            "High energy, lead the university sponsorship team.",
        ),
    ]
}
