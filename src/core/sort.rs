use crate::domain::model::SortKind;
use crate::utils::error::{Result, UtilsError};
use chrono::NaiveDate;
use regex::Regex;

const DATE_PATTERN: &str = r"^(\d{2})\.(\d{2})\.(\d{4})$";

/// Returns a sorted copy of `records`.
///
/// Every mode sorts stably, so records with equal keys keep their input order in
/// both directions. In the id and date modes each record must parse; the first one
/// that does not aborts the call with `InvalidFormat`. The returned strings are the
/// input records themselves, never re-rendered keys.
pub fn sort<S: AsRef<str>>(records: &[S], kind: SortKind) -> Result<Vec<String>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    tracing::debug!(count = records.len(), ?kind, "sorting records");

    let descending = kind.is_descending();
    match kind {
        SortKind::StringAscending | SortKind::StringDescending => {
            let mut sorted: Vec<String> = records.iter().map(|r| r.as_ref().to_string()).collect();
            if descending {
                sorted.sort_by(|a, b| b.cmp(a));
            } else {
                sorted.sort();
            }
            Ok(sorted)
        }
        SortKind::IdAscending | SortKind::IdDescending => sort_keyed(records, descending, parse_id),
        SortKind::DateOldToNew | SortKind::DateNewToOld => {
            let parser = DateKeyParser::new()?;
            sort_keyed(records, descending, |record| parser.parse(record))
        }
    }
}

fn sort_keyed<S, K, F>(records: &[S], descending: bool, mut parse: F) -> Result<Vec<String>>
where
    S: AsRef<str>,
    K: Ord,
    F: FnMut(&str) -> Result<K>,
{
    let mut keyed = records
        .iter()
        .map(|record| {
            let record = record.as_ref();
            Ok((parse(record)?, record.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    if descending {
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    }

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

fn parse_id(record: &str) -> Result<i64> {
    record
        .parse::<i64>()
        .map_err(|e| UtilsError::invalid_format(record, format!("not a 64-bit integer id: {}", e)))
}

/// Parses `dd.MM.yyyy` into a calendar date. No locale or timezone is involved.
struct DateKeyParser {
    pattern: Regex,
}

impl DateKeyParser {
    fn new() -> Result<Self> {
        let pattern = Regex::new(DATE_PATTERN).map_err(|e| UtilsError::ConfigError {
            message: format!("date pattern failed to compile: {}", e),
        })?;
        Ok(Self { pattern })
    }

    fn parse(&self, record: &str) -> Result<NaiveDate> {
        let caps = self
            .pattern
            .captures(record)
            .ok_or_else(|| UtilsError::invalid_format(record, "expected a dd.MM.yyyy date"))?;

        // The pattern guarantees ASCII digits, so these parses only fail on overflow.
        let day: u32 = caps[1]
            .parse()
            .map_err(|_| UtilsError::invalid_format(record, "day out of range"))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|_| UtilsError::invalid_format(record, "month out of range"))?;
        let year: i32 = caps[3]
            .parse()
            .map_err(|_| UtilsError::invalid_format(record, "year out of range"))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| UtilsError::invalid_format(record, "no such calendar date"))
    }
}
