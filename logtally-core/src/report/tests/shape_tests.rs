use crate::analysis::{BucketSource, analyze};
use crate::report::{CountRow, Report, StatusRow};
use pretty_assertions::assert_eq;

#[test]
fn status_rows_carry_names() {
    // Arrange
    let log = concat!(
        r#"a - - [10/Oct/2023:13:55:36] "GET /a HTTP/1.1" 404 1"#,
        "\n",
        r#"a - - [10/Oct/2023:13:55:37] "GET /a HTTP/1.1" 999 1"#,
        "\n",
        r#"a - - [10/Oct/2023:13:55:38] "GET /b HTTP/1.1" 404 1"#,
    );
    let tallies = analyze(log, BucketSource::Plain);

    // Act
    let report = Report::from_tallies(&tallies);

    // Assert
    assert_eq!(
        report.statuses,
        vec![
            StatusRow {
                name: "Not Found",
                status_code: "404".to_string(),
                count: 2,
            },
            StatusRow {
                name: "Unknown Status",
                status_code: "999".to_string(),
                count: 1,
            },
        ]
    );
    assert_eq!(
        report.endpoints,
        vec![
            CountRow {
                key: "/a".to_string(),
                count: 2,
            },
            CountRow {
                key: "/b".to_string(),
                count: 1,
            },
        ]
    );
    assert!(report.minutes.is_empty());
}

#[test]
fn empty_tallies_give_empty_report() {
    let report = Report::from_tallies(&analyze("", BucketSource::Plain));

    assert!(report.endpoints.is_empty());
    assert!(report.minutes.is_empty());
    assert!(report.statuses.is_empty());
}
