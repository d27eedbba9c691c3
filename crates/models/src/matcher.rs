//! Word-level matching of free text search queries against courses

use std::collections::HashSet;

/// Whether query tokens must match course tokens with the same case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
    #[default]
    Insensitive,
    Sensitive,
}

impl CaseSensitivity {
    fn normalize(self, token: &str) -> String {
        match self {
            Self::Insensitive => token.to_lowercase(),
            Self::Sensitive => token.to_string(),
        }
    }
}

/// The searchable fields of a course
#[derive(Debug, Clone, Copy)]
pub struct CourseText<'a> {
    pub department: &'a str,
    pub number: i32,
    pub title: &'a str,
}

impl CourseText<'_> {
    fn tokens(&self, case: CaseSensitivity) -> HashSet<String> {
        let number = self.number.to_string();

        self.department
            .split_whitespace()
            .chain(std::iter::once(number.as_str()))
            .chain(self.title.split_whitespace())
            .map(|token| case.normalize(token))
            .collect()
    }
}

/// Counts the query tokens that equal one of the course's tokens
pub fn score(course: &CourseText<'_>, query: &str) -> usize {
    score_with(course, query, CaseSensitivity::default())
}

/// [`score`] with explicit case handling
///
/// Only whole tokens count, so `jav` never matches `Java`. Every matching
/// query token adds one, including repeats.
pub fn score_with(course: &CourseText<'_>, query: &str, case: CaseSensitivity) -> usize {
    let tokens = course.tokens(case);

    query
        .split_whitespace()
        .filter(|word| tokens.contains(&case.normalize(word)))
        .count()
}

/// Keeps the items matching `query`, best match first
///
/// A missing or blank query leaves `items` untouched.
pub fn rank<T, F>(items: Vec<T>, query: Option<&str>, text: F) -> Vec<T>
where
    F: Fn(&T) -> CourseText<'_>,
{
    let Some(query) = query.filter(|q| !q.trim().is_empty()) else {
        return items;
    };

    let mut scored: Vec<(usize, T)> = items
        .into_iter()
        .map(|item| (score(&text(&item), query), item))
        .filter(|(score, _)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, item)| item).collect()
}
