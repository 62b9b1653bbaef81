use chrono::{DateTime, Datelike, Utc};
use std::collections::HashSet;
use std::hash::Hash;

pub const MILLISECONDS_PER_DAY: i64 = 86_400_000;

/// Distinct items in order of first appearance.
pub fn uniq<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Whole UTC days between `origin` and `timestamp`, rounded down.
pub fn day_index(origin: &DateTime<Utc>, timestamp: &DateTime<Utc>) -> i64 {
    let millis = (*timestamp - *origin).num_milliseconds();
    millis.div_euclid(MILLISECONDS_PER_DAY)
}

/// `month/day` label with a zero-based UTC month, e.g. `0/3` for January 3rd.
pub fn day_label(timestamp: &DateTime<Utc>) -> String {
    format!("{}/{}", timestamp.month0(), timestamp.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn uniq_keeps_first_seen_order() {
        let names = ["b", "a", "b", "c", "a"];
        assert_eq!(uniq(names), vec!["b", "a", "c"]);
    }

    #[test]
    fn day_index_truncates_partial_days() {
        let origin = Utc.with_ymd_and_hms(2014, 1, 1, 12, 0, 0).unwrap();
        let same_day = Utc.with_ymd_and_hms(2014, 1, 2, 11, 59, 59).unwrap();
        let next_day = Utc.with_ymd_and_hms(2014, 1, 2, 12, 0, 0).unwrap();
        assert_eq!(day_index(&origin, &same_day), 0);
        assert_eq!(day_index(&origin, &next_day), 1);
    }

    #[test]
    fn label_uses_zero_based_month() {
        let ts = Utc.with_ymd_and_hms(2014, 12, 25, 8, 0, 0).unwrap();
        assert_eq!(day_label(&ts), "11/25");
    }
}
