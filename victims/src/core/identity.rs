//! Identity comparison between stored records and lookup candidates.

use super::record::Record;
use super::validate::Candidate;

/// True if `record` is the same entry as `candidate`.
///
/// Names compare case-insensitively; age and date compare exactly.
pub fn matches(record: &Record, candidate: &Candidate) -> bool {
    same_name(&record.firstname, &candidate.firstname)
        && same_name(&record.middlename, &candidate.middlename)
        && same_name(&record.lastname, &candidate.lastname)
        && record.age.map(i64::from) == candidate.age
        && record.date_of_death == candidate.date_of_death
}

/// Index of the first record matching `candidate`, in list order.
pub fn find(records: &[Record], candidate: &Candidate) -> Option<usize> {
    records.iter().position(|record| matches(record, candidate))
}

fn same_name(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    fn candidate(first: &str, middle: &str, last: &str, age: i64, date: &str) -> Candidate {
        Candidate {
            firstname: first.to_string(),
            middlename: middle.to_string(),
            lastname: last.to_string(),
            age: Some(age),
            date_of_death: date.to_string(),
        }
    }

    #[test]
    fn names_ignore_case() {
        let stored = record("Jane", "Q", "Doe", 34, "2020-05-01");
        assert!(matches(&stored, &candidate("JANE", "q", "doe", 34, "2020-05-01")));
    }

    #[test]
    fn middle_name_is_significant() {
        let stored = record("Jane", "Q", "Doe", 34, "2020-05-01");
        assert!(!matches(&stored, &candidate("Jane", "", "Doe", 34, "2020-05-01")));
    }

    #[test]
    fn age_and_date_must_match_exactly() {
        let stored = record("Jane", "", "Doe", 34, "2020-05-01");
        assert!(!matches(&stored, &candidate("Jane", "", "Doe", 35, "2020-05-01")));
        assert!(!matches(&stored, &candidate("Jane", "", "Doe", 34, "2020-05-02")));
    }

    #[test]
    fn legacy_record_without_age_never_matches_an_aged_candidate() {
        let mut stored = record("Jane", "", "Doe", 34, "2020-05-01");
        stored.age = None;
        assert!(!matches(&stored, &candidate("Jane", "", "Doe", 34, "2020-05-01")));
    }

    #[test]
    fn find_returns_first_match() {
        let records = vec![
            record("A", "", "B", 1, "2020-01-01"),
            record("Jane", "", "Doe", 34, "2020-05-01"),
            record("jane", "", "DOE", 34, "2020-05-01"),
        ];
        assert_eq!(
            find(&records, &candidate("Jane", "", "Doe", 34, "2020-05-01")),
            Some(1)
        );
        assert_eq!(find(&records, &candidate("X", "", "Y", 1, "2020-01-01")), None);
    }
}
