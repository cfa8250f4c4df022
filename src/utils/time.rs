//! Time parsing utilities

use crate::error::{ExtractError, ExtractResult};

/// Parse a time string to total seconds.
///
/// Accepts either plain seconds ("90") or minutes and seconds ("1:30").
/// Anything else, including a second colon, is rejected with a clean
/// error rather than a panic.
pub fn parse_time(time_str: &str) -> ExtractResult<u32> {
    let time_str = time_str.trim();

    if let Some((minutes, seconds)) = time_str.split_once(':') {
        let minutes: u32 = minutes.parse().map_err(|_| ExtractError::InvalidTime {
            time: time_str.to_string(),
        })?;
        let seconds: u32 = seconds.parse().map_err(|_| ExtractError::InvalidTime {
            time: time_str.to_string(),
        })?;
        return minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .ok_or_else(|| ExtractError::InvalidTime {
                time: time_str.to_string(),
            });
    }

    time_str.parse::<u32>().map_err(|_| ExtractError::InvalidTime {
        time: time_str.to_string(),
    })
}
