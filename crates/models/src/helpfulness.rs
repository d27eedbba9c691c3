use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single user's opinion of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("vote score must be 1 or -1, got {0}")]
pub struct InvalidVote(pub i32);

impl Vote {
    /// Value stored in the `score` column
    pub fn score(self) -> i32 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }
}

impl TryFrom<i32> for Vote {
    type Error = InvalidVote;

    fn try_from(score: i32) -> Result<Self, Self::Error> {
        match score {
            1 => Ok(Vote::Up),
            -1 => Ok(Vote::Down),
            other => Err(InvalidVote(other)),
        }
    }
}

impl From<Vote> for i32 {
    fn from(vote: Vote) -> Self {
        vote.score()
    }
}

/// Sum of the vote scores. Not clamped, so it may be negative.
pub fn helpfulness<I>(scores: I) -> i32
where
    I: IntoIterator,
    I::Item: Into<i32>,
{
    scores.into_iter().map(Into::<i32>::into).sum()
}

/// Sorts items by descending helpfulness.
///
/// Ties keep their relative input order, but callers should only rely on
/// the non-increasing property between neighbours.
pub fn order_by_helpfulness<T, F>(items: &mut [T], helpfulness: F)
where
    F: Fn(&T) -> i32,
{
    items.sort_by_key(|item| std::cmp::Reverse(helpfulness(item)));
}
