use console::{measure_text_width, Style};

use crate::roles::JobRole;
use crate::roster::StudentRecord;
use crate::scoring::{MatchResult, Recommendation};

pub const TREE_BRANCH: char = '\u{251C}';
pub const TREE_END: char = '\u{2514}';
pub const TREE_HORIZ: char = '\u{2500}';

const TREE_PREFIX_WIDTH: usize = 4;
const VALUE_COLUMN: usize = 22;
const COLUMN_GAP: &str = "  ";

fn tree_branch() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_BRANCH, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

fn tree_end() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_END, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

fn branch_for(index: usize, count: usize) -> String {
    if index + 1 == count {
        tree_end()
    } else {
        tree_branch()
    }
}

pub fn dim() -> Style {
    Style::new().dim()
}

fn blue() -> Style {
    Style::new().blue()
}

fn cyan() -> Style {
    Style::new().cyan()
}

fn green() -> Style {
    Style::new().green()
}

fn red() -> Style {
    Style::new().red()
}

fn yellow() -> Style {
    Style::new().yellow()
}

fn bold() -> Style {
    Style::new().bold()
}

fn agent_prefix() -> String {
    blue().apply_to("[AGENT]").to_string()
}

pub fn pad_label(label: &str, depth: usize) -> String {
    let prefix_width = depth * TREE_PREFIX_WIDTH;
    let target_width = VALUE_COLUMN.saturating_sub(prefix_width);
    let current_width = measure_text_width(label);
    if current_width < target_width {
        format!("{}{}", label, " ".repeat(target_width - current_width))
    } else {
        format!("{} ", label)
    }
}

fn pad_cell(text: &str, width: usize) -> String {
    let current_width = measure_text_width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(current_width)))
}

pub fn format_percent(score: u32) -> String {
    format!("{score}%")
}

fn recommendation_style(recommendation: Recommendation) -> Style {
    match recommendation {
        Recommendation::Interview => green().bold(),
        Recommendation::Waitlist => yellow(),
        Recommendation::Reject => red(),
    }
}

/// Renders rows as a left-aligned table. The header is bold, cells may carry styling.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| bold().apply_to(pad_cell(h, *w)).to_string())
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);

    let mut lines = vec![header];
    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad_cell(cell, *w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        lines.push(line.trim_end().to_string());
    }
    lines
}

pub fn log_dashboard_header(date: &str, advertised_pool: usize, institution: &str) {
    println!("{}", bold().apply_to("PlaceBot.ai | Deployment Dashboard"));
    println!(
        "{}",
        dim().apply_to("Zero-Touch Placement Automation")
    );
    println!(
        "{} ready to screen {} students. {}",
        agent_prefix(),
        bold().apply_to(advertised_pool),
        green().apply_to("ONLINE")
    );
    println!("{}{} {}", tree_branch(), pad_label("date", 1), date);
    println!(
        "{}{} {}",
        tree_end(),
        pad_label("admin", 1),
        dim().apply_to(institution)
    );
}

pub fn log_match_request(role: JobRole, min_gpa: f32, job_description: &str) {
    println!(
        "{} matching for {} (min GPA {:.1})",
        agent_prefix(),
        cyan().apply_to(role),
        min_gpa
    );
    println!("{}{}", tree_end(), dim().apply_to(job_description));
}

pub fn log_stage(message: &str) {
    println!("{} {}", agent_prefix(), message);
}

/// The three pipeline stages shown while a run is "in progress".
pub fn log_pipeline_stages(advertised_pool: usize) {
    log_stage(&format!("Parsing {} Resumes...", format_thousands(advertised_pool)));
    log_stage("Analyzing Keyword Overlap (NLP)...");
    log_stage("Ranking Candidates by Employability Score...");
}

fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn log_match_table(role: JobRole, results: &[MatchResult]) {
    println!();
    println!(
        "{}",
        bold().apply_to(format!("Top Candidates for '{role}'"))
    );

    if results.is_empty() {
        println!("{}{}", tree_end(), dim().apply_to("no students in roster"));
        return;
    }

    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                format_percent(r.score),
                r.skills.join(", "),
                recommendation_style(r.recommendation)
                    .apply_to(r.recommendation)
                    .to_string(),
            ]
        })
        .collect();

    let headers = ["Student Name", "Match Score", "Key Skills", "AI Recommendation"];
    for line in render_table(&headers, &rows) {
        println!("{line}");
    }
}

pub fn log_roster_overview(roster: &[StudentRecord]) {
    println!("{}", bold().apply_to("Current Student Database Overview"));

    let rows: Vec<Vec<String>> = roster
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.name.clone(),
                format!("{:.1}", s.gpa),
                s.skills.join(", "),
                dim().apply_to(&s.bio).to_string(),
            ]
        })
        .collect();

    for line in render_table(&["ID", "Name", "GPA", "Skills", "Bio"], &rows) {
        println!("{line}");
    }
}

pub fn log_roles(roles: impl IntoIterator<Item = JobRole>) {
    let roles: Vec<JobRole> = roles.into_iter().collect();
    let count = roles.len();
    println!("{}", bold().apply_to("Target Roles"));
    for (i, role) in roles.into_iter().enumerate() {
        println!("{}{}", branch_for(i, count), cyan().apply_to(role));
        println!("    {}", dim().apply_to(role.default_job_description()));
    }
}

pub fn log_generic_error(prefix: &str, message: &str) {
    eprintln!("{} {}", red().apply_to(prefix), message);
}

/// Tree-style explanation of a single candidate's score.
pub fn log_candidate_assessment(result: &MatchResult, gpa: f32, min_gpa: f32) {
    let b = &result.breakdown;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "{} {}",
        cyan().apply_to(bold().apply_to("[CANDIDATE]")),
        dim().apply_to(result.skills.join(", "))
    ));

    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("GPA")));
    let gpa_style = if b.base_score > 0 { green() } else { dim() };
    lines.push(format!(
        "{}{} {}",
        tree_branch(),
        pad_label("gpa / minimum", 1),
        gpa_style.apply_to(format!("{gpa:.1} / {min_gpa:.1}"))
    ));
    lines.push(format!(
        "{}{} +{}",
        tree_end(),
        pad_label("base", 1),
        b.base_score
    ));

    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("SKILLS")));
    let matched = if b.matched_skills.is_empty() {
        dim().apply_to("none").to_string()
    } else {
        green().apply_to(b.matched_skills.join(", ")).to_string()
    };
    lines.push(format!(
        "{}{} {}",
        tree_branch(),
        pad_label("matched", 1),
        matched
    ));
    lines.push(format!(
        "{}{} +{}",
        tree_end(),
        pad_label("bonus", 1),
        b.match_bonus
    ));

    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("RESULT")));
    lines.push(format!(
        "{}{} {}",
        tree_branch(),
        pad_label("raw", 1),
        b.raw_score
    ));
    lines.push(format!(
        "{}{} +{}",
        tree_branch(),
        pad_label("jitter", 1),
        dim().apply_to(b.jitter)
    ));
    lines.push(format!(
        "{}{} {}",
        tree_branch(),
        pad_label("score", 1),
        bold().apply_to(format_percent(result.score))
    ));
    lines.push(format!(
        "{}{} {}",
        tree_end(),
        pad_label("recommendation", 1),
        recommendation_style(result.recommendation).apply_to(result.recommendation)
    ));

    println!("{}\n", lines.join("\n"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1250), "1,250");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_pad_label() {
        assert_eq!(measure_text_width(&pad_label("date", 1)), VALUE_COLUMN - 4);
        assert_eq!(pad_label(&"x".repeat(40), 1), format!("{} ", "x".repeat(40)));
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let rows = vec![
            vec!["Arjun Sharma".to_string(), "55%".to_string()],
            vec!["Riya".to_string(), "9%".to_string()],
        ];
        let lines = render_table(&["Name", "Score"], &rows);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Arjun Sharma  55%");
        assert_eq!(lines[2], "Riya          9%");
    }

    #[test]
    fn test_branch_for_last_item() {
        assert_eq!(branch_for(0, 3), tree_branch());
        assert_eq!(branch_for(2, 3), tree_end());
        assert_eq!(branch_for(0, 1), tree_end());
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(98), "98%");
    }
}
