use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use thiserror::Error;

/// Natural key of a course, e.g. `EECS 132`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseCode {
    /// Short uppercase department code
    pub department: String,
    pub number: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid course code: {0:?}")]
pub struct ParseCourseCodeError(pub String);

impl CourseCode {
    pub fn new(department: impl Into<String>, number: i32) -> Self {
        Self {
            department: department.into(),
            number,
        }
    }

    /// URL-safe form of the code: the display string with whitespace removed
    pub fn to_param(&self) -> String {
        self.to_string().split_whitespace().collect()
    }

    /// Display string followed by the course title
    pub fn long_string(&self, title: &str) -> String {
        long_string(&self.to_string(), title)
    }
}

impl Display for CourseCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.department, self.number)
    }
}

impl FromStr for CourseCode {
    type Err = ParseCourseCodeError;

    /// Accepts both the display form (`EECS 132`) and the param form (`EECS132`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.split_whitespace().collect();
        let split = compact
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| ParseCourseCodeError(s.to_string()))?;

        let (department, number) = compact.split_at(split);
        if department.is_empty() || !department.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ParseCourseCodeError(s.to_string()));
        }

        let number = number
            .parse()
            .map_err(|_| ParseCourseCodeError(s.to_string()))?;

        Ok(CourseCode {
            department: department.to_ascii_uppercase(),
            number,
        })
    }
}

/// Formats `"{display}: {title}"`
pub fn long_string(display: &str, title: &str) -> String {
    format!("{display}: {title}")
}

/// Something that may or may not currently be offered for scheduling
pub trait Schedulable {
    fn is_schedulable(&self) -> bool;
}

/// A course is schedulable when any of its instances is
pub fn is_schedulable<'a, T, I>(instances: I) -> bool
where
    T: Schedulable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    instances
        .into_iter()
        .any(|instance| instance.is_schedulable())
}
