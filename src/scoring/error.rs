use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("minimum GPA {min_gpa} is outside 0..={max}")]
    MinGpaOutOfRange { min_gpa: f32, max: f32 },
}
