//! RFC 3977 Section 3.2 - Responses
//!
//! Every response starts with a 3-digit status code.

use crate::common::{connect, step};
use nntp_engine::commands::parse_response_line;
use nntp_engine::{ErrorKind, NntpError, codes};

#[test]
fn test_status_line_parsing() {
    assert_eq!(
        parse_response_line("211 1234 3000234 3002322 misc.test").unwrap(),
        (211, "1234 3000234 3002322 misc.test".to_string())
    );
    assert_eq!(parse_response_line("205").unwrap(), (205, String::new()));
}

#[test]
fn test_malformed_status_lines() {
    for line in ["", "OK", "20 short", "2000 four digits", " 200 leading space"] {
        let err = parse_response_line(line).unwrap_err();
        assert!(matches!(err, NntpError::MalformedStatus(_)), "{line:?}");
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }
}

#[test]
fn test_code_constants() {
    assert_eq!(codes::GROUP_SELECTED, 211);
    assert_eq!(codes::OVERVIEW_INFO_FOLLOWS, 224);
    assert_eq!(codes::AUTH_CONTINUE, 381);
}

#[tokio::test]
async fn test_raw_execute_with_expected_set() {
    let (mut client, _server) = connect(
        "200 ready",
        vec![
            step("MODE READER", &["201 no posting"]),
            step("MODE READER", &["502 service permanently unavailable"]),
        ],
    )
    .await;

    let response = client
        .execute("MODE READER", &[200, 201], false)
        .await
        .unwrap();
    assert_eq!(response.code, 201);
    assert_eq!(response.message, "no posting");

    let err = client
        .execute("MODE READER", &[200, 201], false)
        .await
        .unwrap_err();
    match err {
        NntpError::UnexpectedStatus {
            got,
            expected,
            message,
        } => {
            assert_eq!(got, 502);
            assert_eq!(expected, &[200, 201]);
            assert_eq!(message, "service permanently unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!client.is_broken());
}

#[tokio::test]
async fn test_raw_execute_multiline() {
    let (mut client, _server) = connect(
        "200 ready",
        vec![step(
            "LIST OVERVIEW.FMT",
            &["215 order of fields", "Subject:", "From:", ":bytes", "."],
        )],
    )
    .await;

    let response = client
        .execute("LIST OVERVIEW.FMT", &[215], true)
        .await
        .unwrap();
    let lines = response.into_lines().await.unwrap();
    assert_eq!(lines, vec!["Subject:", "From:", ":bytes"]);
}

#[tokio::test]
async fn test_garbage_status_breaks_session() {
    let (mut client, _server) = connect(
        "200 ready",
        vec![step("DATE", &["<html>oops</html>"])],
    )
    .await;

    assert!(matches!(
        client.date().await,
        Err(NntpError::MalformedStatus(_))
    ));
    assert!(client.is_broken());
}
