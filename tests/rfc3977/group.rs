//! RFC 3977 Section 6.1.1 / 6.1.2 - GROUP and LISTGROUP
//!
//! Response: "211 number low high group"

use crate::common::{connect, hang_up, step};
use nntp_engine::commands::parse_group_line;
use nntp_engine::{ErrorKind, NntpError};

#[test]
fn test_group_line_standard_format() {
    let group = parse_group_line("1234 3000234 3002322 misc.test").unwrap();
    assert_eq!(group.number, 1234);
    assert_eq!(group.low, 3000234);
    assert_eq!(group.high, 3002322);
    assert_eq!(group.name, "misc.test");
}

#[test]
fn test_group_line_empty_group_high_below_low() {
    // RFC 3977 §6.1.1: an empty group may report high = low - 1
    let group = parse_group_line("0 100 99 empty.group").unwrap();
    assert_eq!(group.number, 0);
    assert_eq!(group.low, 100);
    assert_eq!(group.high, 99);
}

#[test]
fn test_group_line_large_numbers() {
    let group = parse_group_line("18446744073709551615 1 18446744073709551615 big").unwrap();
    assert_eq!(group.number, u64::MAX);
}

#[test]
fn test_group_line_malformed() {
    for line in ["", "1 2 3", "a 1 2 g", "1 2 3.5 g", "-1 2 3 g"] {
        let err = parse_group_line(line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol, "line {line:?}");
        match err {
            NntpError::MalformedGroupLine(raw) => assert_eq!(raw, line),
            other => panic!("unexpected error for {line:?}: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_select_group_session() {
    let (mut client, server) = connect(
        "200 ready",
        vec![step("GROUP misc.test", &["211 1234 3000234 3002322 misc.test"])],
    )
    .await;

    let group = client.select_group("misc.test").await.unwrap();
    assert_eq!(group.number, 1234);
    assert_eq!(client.current_group(), Some("misc.test"));

    assert_eq!(hang_up(client, server).await, vec!["GROUP misc.test"]);
}

#[tokio::test]
async fn test_no_such_group() {
    let (mut client, _server) = connect(
        "200 ready",
        vec![step("GROUP", &["411 no such news group"])],
    )
    .await;

    let err = client.select_group("alt.nowhere").await.unwrap_err();
    assert_eq!(err.code(), Some(411));
    assert!(client.current_group().is_none());
    assert!(!client.is_broken());
}

#[tokio::test]
async fn test_listgroup_session() {
    let (mut client, server) = connect(
        "200 ready",
        vec![step(
            "LISTGROUP",
            &["211 2000 3000234 3002322 misc.test list follows", "3000234", "3000237", "3000238", "."],
        )],
    )
    .await;

    let listing = client.listgroup("misc.test", None).await.unwrap();
    assert_eq!(listing.group.number, 2000);
    assert_eq!(listing.articles, vec![3000234, 3000237, 3000238]);
    assert_eq!(client.current_group(), Some("misc.test"));

    assert_eq!(hang_up(client, server).await, vec!["LISTGROUP misc.test"]);
}
