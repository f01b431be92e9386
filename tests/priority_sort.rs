use ipogmp::{record_status, sort_ipos_by_priority, status_priority, IpoRecord};

fn ipo(name: &str, status: &str, close: Option<&str>) -> IpoRecord {
    IpoRecord {
        status: Some(status.to_string()),
        issue_close_date: close.map(str::to_string),
        ..IpoRecord::named(name)
    }
}

fn sample() -> Vec<IpoRecord> {
    vec![
        ipo("Listed Old", "Listed", Some("2024-11-01")),
        ipo("Upcoming Late", "Upcoming", Some("2026-03-20")),
        ipo("Closed", "Closed", Some("2025-01-15")),
        ipo("Ongoing Early", "Open", Some("2020-01-01")),
        ipo("Allotted", "Allotment Done", None),
        ipo("Upcoming Undated", "", None),
        ipo("Ongoing Recent", "Live", Some("2025-02-10")),
    ]
}

fn names(records: &[IpoRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn orders_by_status_then_recent_close_date() {
    let sorted = sort_ipos_by_priority(&sample());
    assert_eq!(
        names(&sorted),
        vec![
            "Ongoing Recent",
            "Ongoing Early",
            "Upcoming Late",
            "Upcoming Undated",
            "Closed",
            "Allotted",
            "Listed Old",
        ]
    );
}

#[test]
fn ranks_never_decrease_along_the_output() {
    let sorted = sort_ipos_by_priority(&sample());
    let ranks: Vec<u32> = sorted
        .iter()
        .map(|r| status_priority(record_status(r)))
        .collect();
    assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn preserves_multiset_and_is_idempotent() {
    let input = sample();
    let once = sort_ipos_by_priority(&input);
    let twice = sort_ipos_by_priority(&once);
    assert_eq!(once, twice);

    let mut before = names(&input);
    let mut after = names(&once);
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn input_is_left_untouched() {
    let input = sample();
    let snapshot = input.clone();
    let _ = sort_ipos_by_priority(&input);
    assert_eq!(input, snapshot);
}

#[test]
fn ongoing_precedes_upcoming_regardless_of_dates() {
    let records = vec![
        ipo("Upcoming", "Upcoming", Some("2030-01-01")),
        ipo("Ongoing", "Ongoing", Some("2000-01-01")),
    ];
    let sorted = sort_ipos_by_priority(&records);
    assert_eq!(names(&sorted), vec!["Ongoing", "Upcoming"]);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(sort_ipos_by_priority(&[]).is_empty());
}
