use std::fmt;

use thiserror::Error;

/// What is wrong with a single config field.
#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    Missing,
    NotANumber(String),
    NotPositive(f64),
    Negative(f64),
    TooLarge(f64),
}

/// One offending field, named the way the user sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigProblem {
    pub field: String,
    pub problem: Problem,
}

impl ConfigProblem {
    pub fn new(field: impl Into<String>, problem: Problem) -> Self {
        Self { field: field.into(), problem }
    }
}

impl fmt::Display for ConfigProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            Problem::Missing => write!(f, "{}: missing", self.field),
            Problem::NotANumber(raw) => write!(f, "{}: not a number ({:?})", self.field, raw),
            Problem::NotPositive(v) => write!(f, "{}: must be > 0 (got {})", self.field, v),
            Problem::Negative(v) => write!(f, "{}: must be >= 0 (got {})", self.field, v),
            Problem::TooLarge(v) => write!(f, "{}: too large (got {})", self.field, v),
        }
    }
}

fn join_problems(problems: &[ConfigProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid hardware config: {}", join_problems(.problems))]
    InvalidConfig { problems: Vec<ConfigProblem> },
    #[error("invalid sim config: {}", join_problems(.problems))]
    InvalidSimConfig { problems: Vec<ConfigProblem> },
    #[error("failed to parse settings: {0}")]
    Settings(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid(problems: Vec<ConfigProblem>) -> Self {
        Error::InvalidConfig { problems }
    }

    /// The offending fields, empty for non-config errors.
    pub fn problems(&self) -> &[ConfigProblem] {
        match self {
            Error::InvalidConfig { problems } | Error::InvalidSimConfig { problems } => problems,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_every_field() {
        let err = Error::invalid(vec![
            ConfigProblem::new("Battery", Problem::NotANumber("six".into())),
            ConfigProblem::new("Weight", Problem::Missing),
            ConfigProblem::new("motor_kv", Problem::NotPositive(0.0)),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("Battery: not a number (\"six\")"), "{msg}");
        assert!(msg.contains("Weight: missing"), "{msg}");
        assert!(msg.contains("motor_kv: must be > 0"), "{msg}");
        assert_eq!(err.problems().len(), 3);
    }

    #[test]
    fn sim_config_message() {
        let err = Error::InvalidSimConfig {
            problems: vec![ConfigProblem::new("max_time", Problem::Negative(-1.0))],
        };
        assert_eq!(err.to_string(), "invalid sim config: max_time: must be >= 0 (got -1)");
        assert_eq!(err.problems().len(), 1);
    }
}
