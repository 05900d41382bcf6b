//! RFC 3977 Section 8.3 - OVER (and the XOVER extension)
//!
//! Each line: number, subject, from, date, message-id, references, bytes, lines,
//! separated by TAB, optionally followed by extra fields.

use crate::common::{connect, hang_up, step};
use nntp_engine::commands::parse_overview_line;
use nntp_engine::{ArticleDate, ErrorKind, NntpError};

#[test]
fn test_overview_rfc_example() {
    let line = "3000234\tI am just a test article\t\"Demo User\" <nobody@example.com>\t6 Oct 1998 04:38:40 -0500\t<45223423@example.com>\t<45454@example.net>\t1234\t17\tXref: news.example.com misc.test:3000363";
    let entry = parse_overview_line(line).unwrap();
    assert_eq!(entry.number, 3000234);
    assert_eq!(entry.subject, "I am just a test article");
    assert_eq!(entry.message_id, "<45223423@example.com>");
    assert_eq!(entry.references, vec!["<45454@example.net>"]);
    assert_eq!(entry.bytes, 1234);
    assert_eq!(entry.lines, 17);
    assert!(entry.date.is_known());
}

#[test]
fn test_overview_too_few_fields_names_raw_line() {
    let line = "3000234\tsubject\tfrom\tdate\t<id@x>\t\t1234";
    let err = parse_overview_line(line).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    match err {
        NntpError::Parse { record, line: raw } => {
            assert_eq!(record, "overview");
            assert_eq!(raw, line);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_overview_unparseable_date_keeps_record() {
    let line = "42\tsubject\tfrom\tlast thursday, probably\t<id@x>\t<a@x> <b@x>\t500\t10";
    let entry = parse_overview_line(line).unwrap();
    assert_eq!(
        entry.date,
        ArticleDate::Unknown("last thursday, probably".to_string())
    );
    assert_eq!(entry.number, 42);
    assert_eq!(entry.subject, "subject");
    assert_eq!(entry.from, "from");
    assert_eq!(entry.message_id, "<id@x>");
    assert_eq!(entry.references, vec!["<a@x>", "<b@x>"]);
    assert_eq!(entry.bytes, 500);
    assert_eq!(entry.lines, 10);
}

#[test]
fn test_overview_bad_byte_count_fails_record() {
    let line = "42\tsubject\tfrom\t1 Jan 2020 00:00 +0000\t<id@x>\t\tlarge\t10";
    assert!(matches!(
        parse_overview_line(line),
        Err(NntpError::Parse { record: "overview", .. })
    ));
}

#[tokio::test]
async fn test_over_session_preserves_order() {
    let (mut client, server) = connect(
        "200 ready",
        vec![
            step("GROUP", &["211 3 1 3 misc.test"]),
            step(
                "OVER",
                &[
                    "224 overview information follows",
                    "3\tthird\tc@x\tMon, 3 Jan 2022 10:00:00 +0000\t<3@x>\t<2@x>\t30\t3",
                    "1\tfirst\ta@x\t1 Jan 22 10:00 GMT\t<1@x>\t\t10\t1",
                    "2\tsecond\tb@x\t2 Jan 2022 10:00 -0500 (EST)\t<2@x>\t<1@x>\t20\t2",
                    ".",
                ],
            ),
        ],
    )
    .await;

    client.select_group("misc.test").await.unwrap();
    let entries = client.over("1-3").await.unwrap();
    let numbers: Vec<u64> = entries.iter().map(|e| e.number).collect();
    assert_eq!(numbers, vec![3, 1, 2]);
    assert!(entries.iter().all(|e| e.date.is_known()));

    assert_eq!(
        hang_up(client, server).await,
        vec!["GROUP misc.test", "OVER 1-3"]
    );
}

#[tokio::test]
async fn test_xover_without_group() {
    let (mut client, _server) = connect(
        "200 ready",
        vec![step("XOVER", &["412 no newsgroup selected"])],
    )
    .await;

    let err = client.xover("1-10").await.unwrap_err();
    assert_eq!(err.code(), Some(412));
    assert!(!client.is_broken());
}
