//! Turning a rated detail record into a watched entry.

use thiserror::Error;

use crate::models::{MovieDetail, NOT_AVAILABLE, WatchedEntry};

pub const MAX_USER_RATING: u8 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("pick a rating before adding the movie")]
    Unrated,
    #[error("rating {0} is out of range (1-10)")]
    OutOfRange(u8),
}

/// Build a [`WatchedEntry`] from `detail` and the user's rating.
pub fn rate(detail: &MovieDetail, user_rating: u8) -> Result<WatchedEntry, RatingError> {
    match user_rating {
        0 => return Err(RatingError::Unrated),
        r if r > MAX_USER_RATING => return Err(RatingError::OutOfRange(r)),
        _ => {}
    }

    Ok(WatchedEntry {
        id: detail.id.clone(),
        title: detail.title.clone(),
        year: detail.year.clone(),
        poster: detail.poster.clone(),
        critic_rating: parse_critic_rating(&detail.critic_rating),
        runtime_minutes: parse_runtime(&detail.runtime),
        user_rating,
    })
}

/// `"7.8"` → `Some(7.8)`; anything that is not a finite number → `None`.
pub fn parse_critic_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Leading integer of a `"<N> min"` runtime; 0 for `"N/A"` or garbage.
pub fn parse_runtime(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw == NOT_AVAILABLE {
        return 0;
    }
    raw.split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(runtime: &str, rating: &str) -> MovieDetail {
        MovieDetail {
            id: "tt0133093".into(),
            title: "The Matrix".into(),
            year: "1999".into(),
            poster: "N/A".into(),
            runtime: runtime.into(),
            critic_rating: rating.into(),
            ..MovieDetail::default()
        }
    }

    #[test]
    fn runtime_minutes_parsed_from_text() {
        let entry = rate(&detail("142 min", "8.7"), 9).unwrap();
        assert_eq!(entry.runtime_minutes, 142);
        assert_eq!(entry.critic_rating, Some(8.7));
        assert_eq!(entry.user_rating, 9);
        assert_eq!(entry.id, "tt0133093");
    }

    #[test]
    fn runtime_not_available_is_zero() {
        let entry = rate(&detail("N/A", "N/A"), 5).unwrap();
        assert_eq!(entry.runtime_minutes, 0);
        assert_eq!(entry.critic_rating, None);
    }

    #[test]
    fn unparsable_runtime_is_zero() {
        assert_eq!(parse_runtime("about two hours"), 0);
        assert_eq!(parse_runtime(""), 0);
    }

    #[test]
    fn zero_rating_is_rejected() {
        assert_eq!(rate(&detail("90 min", "6.0"), 0), Err(RatingError::Unrated));
    }

    #[test]
    fn rating_above_ten_is_rejected() {
        assert_eq!(
            rate(&detail("90 min", "6.0"), 11),
            Err(RatingError::OutOfRange(11))
        );
    }
}
