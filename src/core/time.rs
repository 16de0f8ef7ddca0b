//! Hour/minute/second/millisecond values with clock-style formatting.
//!
//! A [`TimeValue`] built from a millisecond count is normalized (hours wrap at 24,
//! minutes and seconds at 60). One built with [`TimeValue::from_components`] is stored
//! exactly as given, so `minutes = 90` is representable there and nowhere else.

use crate::utils::error::{Result, UtilsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TIME_SEPARATOR: &str = ":";

pub const MILLIS_PER_SECOND: i64 = 1000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// One part of a formatted time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl TimeField {
    pub const ALL: [TimeField; 4] = [
        TimeField::Hours,
        TimeField::Minutes,
        TimeField::Seconds,
        TimeField::Milliseconds,
    ];

    /// Position of this field in the `H:MM:SS:mm` rendering.
    pub fn index(self) -> usize {
        match self {
            TimeField::Hours => 0,
            TimeField::Minutes => 1,
            TimeField::Seconds => 2,
            TimeField::Milliseconds => 3,
        }
    }
}

impl FromStr for TimeField {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "hours" => Ok(TimeField::Hours),
            "m" | "minutes" => Ok(TimeField::Minutes),
            "s" | "seconds" => Ok(TimeField::Seconds),
            "ms" | "milliseconds" => Ok(TimeField::Milliseconds),
            other => Err(UtilsError::invalid_argument(format!(
                "unknown time field '{}', expected one of h, m, s, ms",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeValue {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl TimeValue {
    /// Decomposes `millis` into wrapped hours, minutes and seconds.
    ///
    /// The millisecond part is whatever remains after subtracting the *wrapped*
    /// components, so counts past one day leave the surplus days in `milliseconds`
    /// (`90_000_000` gives `1:00:00` plus `86_400_000` ms). A remainder that does not
    /// fit the `u32` millisecond field is rejected with `InvalidArgument`.
    pub fn from_milliseconds(millis: i64) -> Result<Self> {
        if millis < 0 {
            return Err(UtilsError::invalid_argument(format!(
                "milliseconds can not be smaller than zero, got {}",
                millis
            )));
        }

        let seconds = (millis / MILLIS_PER_SECOND) % 60;
        let minutes = (millis / MILLIS_PER_MINUTE) % 60;
        let hours = (millis / MILLIS_PER_HOUR) % 24;
        let remainder =
            millis - (hours * MILLIS_PER_HOUR + minutes * MILLIS_PER_MINUTE + seconds * MILLIS_PER_SECOND);
        let milliseconds = u32::try_from(remainder).map_err(|_| {
            UtilsError::invalid_argument(format!(
                "{} milliseconds leave a remainder of {} ms past the wrapped hour",
                millis, remainder
            ))
        })?;

        // Wrapped components are below 60, so the narrowing is lossless.
        Ok(Self {
            hours: hours as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
            milliseconds,
        })
    }

    /// Stores the components unchecked.
    pub fn from_components(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    /// Never overflows: even all four fields at `u32::MAX` stay far below `i64::MAX`.
    pub fn to_milliseconds(&self) -> i64 {
        i64::from(self.hours) * MILLIS_PER_HOUR
            + i64::from(self.minutes) * MILLIS_PER_MINUTE
            + i64::from(self.seconds) * MILLIS_PER_SECOND
            + i64::from(self.milliseconds)
    }

    /// `self - other`. Fails with `InvalidArgument` when `other` is later.
    pub fn difference_from(&self, other: &TimeValue) -> Result<TimeValue> {
        Self::from_milliseconds(self.to_milliseconds() - other.to_milliseconds())
    }

    /// `self - other` on a 24 hour dial: `4:00` minus `22:00` is `6:00`.
    ///
    /// Only one day is added to a negative difference, so unchecked components that put
    /// `other` more than a day ahead of `self` still fail with `InvalidArgument`.
    pub fn clock_difference_from(&self, other: &TimeValue) -> Result<TimeValue> {
        let diff = self.to_milliseconds() - other.to_milliseconds();
        let wrapped = if diff < 0 { diff + MILLIS_PER_DAY } else { diff };
        tracing::debug!(diff, wrapped, "clock difference");
        Self::from_milliseconds(wrapped)
    }

    /// Renders `H:MM:SS:mm`.
    ///
    /// Minutes, seconds and milliseconds get one leading zero when they are below 10
    /// and are printed as-is otherwise. Hours are never padded, unlike the older
    /// `0`-prefixed rendering (`01:02:03:04`). Milliseconds are not widened to three
    /// digits: `1:02:03:04` is the rendering of 4 ms.
    pub fn format_all(&self) -> String {
        self.parts().join(TIME_SEPARATOR)
    }

    /// Renders only `fields`, in the given order. No fields gives an empty string.
    pub fn format_selected(&self, fields: &[TimeField]) -> String {
        let parts = self.parts();
        fields
            .iter()
            .map(|field| parts[field.index()].as_str())
            .collect::<Vec<_>>()
            .join(TIME_SEPARATOR)
    }

    fn parts(&self) -> [String; 4] {
        [
            self.hours.to_string(),
            pad_clock_digit(self.minutes),
            pad_clock_digit(self.seconds),
            pad_clock_digit(self.milliseconds),
        ]
    }
}

fn pad_clock_digit(value: u32) -> String {
    if value > 9 {
        value.to_string()
    } else {
        format!("0{}", value)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_milliseconds_decomposes() {
        let t = TimeValue::from_milliseconds(3_723_004).unwrap();
        assert_eq!(t, TimeValue::from_components(1, 2, 3, 4));
        assert_eq!(t.to_milliseconds(), 3_723_004);
    }

    #[test]
    fn test_from_milliseconds_rejects_negative() {
        let err = TimeValue::from_milliseconds(-1).unwrap_err();
        assert!(matches!(err, UtilsError::InvalidArgument { .. }));
    }

    #[test]
    fn test_surplus_milliseconds_past_one_day() {
        // 25 hours: the hour wraps to 1, the extra day stays in the millisecond part.
        let t = TimeValue::from_milliseconds(90_000_000).unwrap();
        assert_eq!(t.hours, 1);
        assert_eq!(t.minutes, 0);
        assert_eq!(t.seconds, 0);
        assert_eq!(t.milliseconds, 86_400_000);
        assert_eq!(t.to_milliseconds(), 90_000_000);
    }

    #[test]
    fn test_to_milliseconds_with_maximal_components() {
        let max = u32::MAX;
        let t = TimeValue::from_components(max, max, max, max);
        let expected = i64::from(max)
            * (MILLIS_PER_HOUR + MILLIS_PER_MINUTE + MILLIS_PER_SECOND + 1);
        assert_eq!(t.to_milliseconds(), expected);
        assert!(t.to_milliseconds() > 0);

        let big = TimeValue::from_components(0, 0, 0, max);
        assert_eq!(big.to_milliseconds(), i64::from(max));
        assert!(matches!(
            big.difference_from(&t),
            Err(UtilsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_from_milliseconds_rejects_oversized_remainder() {
        assert!(matches!(
            TimeValue::from_milliseconds(i64::MAX),
            Err(UtilsError::InvalidArgument { .. })
        ));
        // At least one full u32 range survives the subtraction of the wrapped units.
        assert!(TimeValue::from_milliseconds(2 * i64::from(u32::MAX)).is_err());
        assert!(TimeValue::from_milliseconds(i64::from(u32::MAX)).is_ok());
    }

    #[test]
    fn test_clock_difference_fails_beyond_one_day() {
        let early = TimeValue::from_components(0, 0, 0, 0);
        let far = TimeValue::from_components(48, 0, 0, 0);
        assert!(matches!(
            early.clock_difference_from(&far),
            Err(UtilsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_from_components_is_unchecked() {
        let t = TimeValue::from_components(0, 90, 0, 0);
        assert_eq!(t.minutes, 90);
        assert_eq!(t.to_milliseconds(), 90 * MILLIS_PER_MINUTE);
        assert_eq!(t.format_all(), "0:90:00:00");
    }

    #[test]
    fn test_format_all_padding() {
        assert_eq!(TimeValue::from_components(1, 2, 3, 4).format_all(), "1:02:03:04");
        assert_eq!(TimeValue::from_components(12, 30, 45, 999).format_all(), "12:30:45:999");
        assert_eq!(TimeValue::from_components(0, 10, 9, 10).format_all(), "0:10:09:10");
        assert_eq!(TimeValue::default().to_string(), "0:00:00:00");
    }

    #[test]
    fn test_format_selected() {
        let t = TimeValue::from_components(7, 5, 30, 250);
        assert_eq!(
            t.format_selected(&[TimeField::Hours, TimeField::Minutes]),
            "7:05"
        );
        assert_eq!(
            t.format_selected(&[TimeField::Milliseconds, TimeField::Hours]),
            "250:7"
        );
        assert_eq!(t.format_selected(&[TimeField::Seconds]), "30");
        assert_eq!(t.format_selected(&TimeField::ALL), t.format_all());
        assert_eq!(t.format_selected(&[]), "");
    }

    #[test]
    fn test_difference_from() {
        let a = TimeValue::from_components(2, 30, 0, 0);
        let b = TimeValue::from_components(1, 0, 0, 500);
        assert_eq!(
            a.difference_from(&b).unwrap(),
            TimeValue::from_components(1, 29, 59, 500)
        );
    }

    #[test]
    fn test_difference_from_does_not_wrap() {
        let a = TimeValue::from_components(1, 0, 0, 0);
        let b = TimeValue::from_components(2, 0, 0, 0);
        assert!(matches!(
            a.difference_from(&b),
            Err(UtilsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_clock_difference_wraps_at_midnight() {
        let four = TimeValue::from_components(4, 0, 0, 0);
        let twenty_two = TimeValue::from_components(22, 0, 0, 0);
        assert_eq!(
            four.clock_difference_from(&twenty_two).unwrap(),
            TimeValue::from_components(6, 0, 0, 0)
        );
        assert_eq!(
            twenty_two.clock_difference_from(&four).unwrap(),
            TimeValue::from_components(18, 0, 0, 0)
        );
    }

    #[test]
    fn test_clock_difference_stays_within_a_day() {
        let samples = [0, 1, 999, 59_999, 3_600_000, 43_200_000, 86_399_999];
        for &a in &samples {
            for &b in &samples {
                let ta = TimeValue::from_milliseconds(a).unwrap();
                let tb = TimeValue::from_milliseconds(b).unwrap();
                let diff = ta.clock_difference_from(&tb).unwrap().to_milliseconds();
                assert!((0..MILLIS_PER_DAY).contains(&diff), "{} - {} gave {}", a, b, diff);
            }
        }
    }

    #[test]
    fn test_time_field_from_str() {
        assert_eq!("h".parse::<TimeField>().unwrap(), TimeField::Hours);
        assert_eq!("Minutes".parse::<TimeField>().unwrap(), TimeField::Minutes);
        assert_eq!(" ms ".parse::<TimeField>().unwrap(), TimeField::Milliseconds);
        assert!("days".parse::<TimeField>().is_err());
    }
}
