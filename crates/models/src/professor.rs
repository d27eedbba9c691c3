use serde::Serialize;
use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{EnumIter, EnumProperty, IntoEnumIterator};

/// Who teaches a course instance, as listed by the registrar
///
/// The registrar uses placeholder names ("Staff", "TBA") when nobody has been
/// assigned yet; those parse into their own variants so callers never have to
/// compare against magic strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, EnumProperty, EnumIter)]
pub enum ProfessorName {
    #[strum(props(display = "Staff", parse = "Staff"))]
    Staff,

    #[strum(props(display = "TBA", parse = "TBA"))]
    ToBeAnnounced,

    Named(String),
}

impl ProfessorName {
    /// Placeholder names never refer to a real person
    pub fn is_real(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

impl FromStr for ProfessorName {
    type Err = Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(name))
    }
}

impl From<&str> for ProfessorName {
    /// Placeholders are matched exactly and case-sensitively
    fn from(name: &str) -> Self {
        Self::iter()
            .find(|v| v.get_str("parse") == Some(name))
            .unwrap_or_else(|| Self::Named(name.to_string()))
    }
}

impl Display for ProfessorName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            _ => write!(f, "{}", self.get_str("display").unwrap_or_default()),
        }
    }
}

/// Anything carrying a professor's display name
pub trait HasProfessorName {
    fn professor_name(&self) -> &str;
}

/// Drops placeholder professors, keeping the input order
pub fn real_professors<T: HasProfessorName>(professors: impl IntoIterator<Item = T>) -> Vec<T> {
    professors
        .into_iter()
        .filter(|p| ProfessorName::from(p.professor_name()).is_real())
        .collect()
}
