//! Date ordering for the record list.

use chrono::NaiveDate;

use super::record::Record;
use super::validate::DATE_FORMAT;

/// Parsed `dateOfDeath`. Dates that fail to parse sort as 1900-01-01.
pub fn sort_key(record: &Record) -> NaiveDate {
    NaiveDate::parse_from_str(&record.date_of_death, DATE_FORMAT)
        .ok()
        .or_else(|| NaiveDate::from_ymd_opt(1900, 1, 1))
        .unwrap_or(NaiveDate::MIN)
}

/// Sort newest first. The sort is stable: equal dates keep their order.
pub fn sort_by_date_desc(records: &mut [Record]) {
    records.sort_by(|left, right| sort_key(right).cmp(&sort_key(left)));
}

/// True if dates never increase along the list.
pub fn is_sorted_by_date_desc(records: &[Record]) -> bool {
    records
        .windows(2)
        .all(|pair| sort_key(&pair[0]) >= sort_key(&pair[1]))
}
