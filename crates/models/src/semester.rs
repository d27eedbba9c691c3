use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    ops::Deref,
    str::FromStr,
};
use strum::{AsRefStr, EnumIter, EnumProperty, EnumString, IntoEnumIterator};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
    EnumProperty,
)]
pub enum Season {
    #[strum(serialize = "F", props(full = "fall"))]
    Fall,
    #[strum(serialize = "S", props(full = "spring"))]
    Spring,
    #[strum(serialize = "M", props(full = "summer"))]
    Summer,
}

impl Season {
    /// Single letter code stored in the `season` column
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn as_full_str(&self) -> &'static str {
        self.get_str("full").unwrap_or_default()
    }

    pub fn all() -> Vec<Season> {
        Season::iter().collect()
    }

    /// Accepts either the stored code ("F") or the full name ("fall", any case)
    pub fn parse_loose(s: &str) -> Option<Season> {
        let s = s.trim();
        Season::from_str(s).ok().or_else(|| {
            Season::iter().find(|season| season.as_full_str().eq_ignore_ascii_case(s))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Year(pub i16);

impl Deref for Year {
    type Target = i16;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Year {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year = s.trim().parse()?;
        Ok(Year(year))
    }
}

/// A term in which a course can be offered, e.g. Fall 2024
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Semester {
    pub season: Season,
    pub year: Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid semester: {0:?}")]
pub struct ParseSemesterError(pub String);

impl Semester {
    pub fn new(season: Season, year: i16) -> Self {
        Self {
            season,
            year: Year(year),
        }
    }
}

impl FromStr for Semester {
    type Err = ParseSemesterError;

    /// Parses "F24", "F2024" or "fall 2024"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSemesterError(s.to_string());
        let trimmed = s.trim();

        let (season, year) = match trimmed.split_once(char::is_whitespace) {
            Some((season, year)) => (season, year),
            None if trimmed.is_char_boundary(1) => trimmed.split_at(1),
            None => return Err(err()),
        };

        let season = Season::parse_loose(season).ok_or_else(err)?;
        let year: Year = year.parse().map_err(|_| err())?;
        let year = match *year {
            0..=99 => Year(2000 + *year),
            _ => year,
        };

        Ok(Semester { season, year })
    }
}

impl Display for Semester {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.season.as_str(), *self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_codes() {
        assert_eq!(Season::Fall.as_str(), "F");
        assert_eq!(Season::Spring.as_full_str(), "spring");
        assert_eq!(Season::from_str("M").unwrap(), Season::Summer);
        assert_eq!(Season::all().len(), 3);
    }

    #[test]
    fn test_season_parse_loose() {
        assert_eq!(Season::parse_loose("Fall"), Some(Season::Fall));
        assert_eq!(Season::parse_loose("S"), Some(Season::Spring));
        assert_eq!(Season::parse_loose("winter"), None);
    }

    #[test]
    fn test_semester_from_str() {
        assert_eq!(
            "F24".parse::<Semester>().unwrap(),
            Semester::new(Season::Fall, 2024)
        );
        assert_eq!(
            "spring 2023".parse::<Semester>().unwrap(),
            Semester::new(Season::Spring, 2023)
        );
        assert_eq!(
            "M2019".parse::<Semester>().unwrap(),
            Semester::new(Season::Summer, 2019)
        );

        assert!("".parse::<Semester>().is_err());
        assert!("X24".parse::<Semester>().is_err());
        assert!("Fall".parse::<Semester>().is_err());
    }

    #[test]
    fn test_semester_display() {
        assert_eq!(Semester::new(Season::Fall, 2024).to_string(), "F2024");
    }
}
