// Tests for turning export CSV text into calendar events.
use chrono::NaiveDate;
use schedview::model::csv::parse_rows;
use schedview::model::{CalendarEvent, parse_events};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn test_single_row_round_trip() {
    let text = "Subject,Start Date,Start Time,End Date,End Time\n\
                Calculus II,2024-05-06,09:30,2024-05-06,10:15\n";

    let events = parse_events(text);

    assert_eq!(
        events,
        vec![CalendarEvent {
            title: "Calculus II".to_string(),
            start: at(2024, 5, 6, 9, 30),
            end: at(2024, 5, 6, 10, 15),
        }]
    );
}

#[test]
fn test_generator_column_order_is_accepted() {
    // The generator writes End Date before Start Time.
    let text = "Subject,Start Date,End Date,Start Time,End Time\n\
                Statics,2025-04-28,2025-04-28,08:00,08:50\n\
                Statics Lab,2025-04-29,2025-04-29,13:00,15:50\n";

    let events = parse_events(text);
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].title, "Statics Lab");
    assert_eq!(events[1].end, at(2025, 4, 29, 15, 50));
}

#[test]
fn test_rows_missing_required_fields_are_skipped() {
    let text = "Subject,Start Date,Start Time,End Date,End Time\n\
                ,2024-05-06,09:00,2024-05-06,10:00\n\
                No End,2024-05-06,09:00,2024-05-06,\n\
                Short Row,2024-05-06\n\
                Kept,2024-05-07,11:00,2024-05-07,12:00\n";

    let events = parse_events(text);

    assert_eq!(events.len(), 1, "Only the complete row survives");
    assert_eq!(events[0].title, "Kept");
}

#[test]
fn test_missing_column_drops_every_row() {
    let text = "Subject,Start Date,Start Time,End Date\n\
                A,2024-05-06,09:00,2024-05-06\n";
    assert!(parse_events(text).is_empty());
}

#[test]
fn test_order_follows_rows_not_time() {
    let text = "Subject,Start Date,Start Time,End Date,End Time\n\
                Late,2024-05-06,15:00,2024-05-06,16:00\n\
                Early,2024-05-06,08:00,2024-05-06,09:00\n";

    let titles: Vec<String> = parse_events(text).into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["Late", "Early"]);
}

#[test]
fn test_whitespace_and_crlf_are_trimmed() {
    let text = "  Subject , Start Date ,Start Time,End Date,End Time\r\n\
                \x20 Chem 101 , 2024-05-08 , 10:00 ,2024-05-08, 10:50 \r\n\r\n";

    let events = parse_events(text);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Chem 101");
    assert_eq!(events[0].start, at(2024, 5, 8, 10, 0));
}

#[test]
fn test_embedded_comma_is_not_unquoted() {
    // No quoting support: the quote characters stay and the comma splits the cell.
    let rows = parse_rows("Subject,Start Date\n\"Art, History\",2024-05-06\n");
    assert_eq!(rows[0]["Subject"], "\"Art");
    assert_eq!(rows[0]["Start Date"], "History\"");
}

#[test]
fn test_parsing_is_idempotent() {
    let text = "Subject,Start Date,Start Time,End Date,End Time\n\
                A,2024-05-06,09:00,2024-05-06,10:00\n\
                B,2024-05-07,13:30,2024-05-07,14:45\n";

    assert_eq!(parse_events(text), parse_events(text));
}

#[test]
fn test_empty_input() {
    assert!(parse_events("").is_empty());
    assert!(parse_events("   \n  ").is_empty());
}
