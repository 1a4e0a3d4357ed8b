/// Skills that appear, case-insensitively, as substrings of the job description.
/// Blank skills never match.
pub fn matched_skills<'a>(job_description: &str, skills: &'a [String]) -> Vec<&'a str> {
    let jd_lower = job_description.to_lowercase();
    skills
        .iter()
        .filter(|skill| !skill.trim().is_empty() && jd_lower.contains(&skill.to_lowercase()))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let s = skills(&["Python", "Finance"]);
        assert_eq!(matched_skills("strong python skills", &s), vec!["Python"]);
        assert_eq!(matched_skills("STRONG PYTHON SKILLS", &s), vec!["Python"]);
    }

    #[test]
    fn test_substring_match() {
        let s = skills(&["Finance"]);
        assert_eq!(
            matched_skills("an understanding of financial modeling", &s),
            Vec::<&str>::new()
        );
        assert_eq!(matched_skills("corporate finance team", &s), vec!["Finance"]);
    }

    #[test]
    fn test_multi_word_skill() {
        let s = skills(&["Machine Learning", "NLP"]);
        assert_eq!(
            matched_skills("knowledge of Machine Learning", &s),
            vec!["Machine Learning"]
        );
    }

    #[test]
    fn test_empty_job_description() {
        let s = skills(&["Python", "SQL"]);
        assert!(matched_skills("", &s).is_empty());
    }

    #[test]
    fn test_padded_skill_matched_verbatim() {
        let s = skills(&["SQL "]);
        assert!(matched_skills("python, sql, excel", &s).is_empty());
        assert_eq!(matched_skills("sql and python", &s), vec!["SQL "]);
    }

    #[test]
    fn test_blank_skill_never_matches() {
        let s = skills(&["", "   "]);
        assert!(matched_skills("anything at all", &s).is_empty());
    }
}
