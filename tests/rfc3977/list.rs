//! RFC 3977 Section 7.6.3 - LIST ACTIVE
//!
//! Each line: "group high low status"

use crate::common::{connect, step};
use nntp_engine::commands::parse_list_line;
use nntp_engine::{NntpError, PostingStatus};

#[test]
fn test_list_line_rfc_example() {
    let entry = parse_list_line("misc.test 3002322 3000234 y").unwrap();
    assert_eq!(entry.name, "misc.test");
    assert_eq!(entry.high, 3002322);
    assert_eq!(entry.low, 3000234);
    assert!(entry.posting.allows_posting());
}

#[test]
fn test_list_line_alias_flag() {
    let entry = parse_list_line("comp.obsolete 0 1 =comp.new").unwrap();
    assert_eq!(entry.posting, PostingStatus::Alias("comp.new".to_string()));
}

#[tokio::test]
async fn test_list_preserves_server_order() {
    let (mut client, _server) = connect(
        "200 ready",
        vec![step(
            "LIST",
            &[
                "215 list of newsgroups follows",
                "misc.test 3002322 3000234 y",
                "comp.risks 442001 441099 m",
                "alt.rfc-writers.recovery 4 1 y",
                "tx.natives.recovery 89 56 y",
                ".",
            ],
        )],
    )
    .await;

    let groups = client.list().await.unwrap();
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "misc.test",
            "comp.risks",
            "alt.rfc-writers.recovery",
            "tx.natives.recovery"
        ]
    );
}

#[tokio::test]
async fn test_list_fails_fast_on_malformed_line() {
    let (mut client, _server) = connect(
        "200 ready",
        vec![
            step(
                "LIST ACTIVE",
                &[
                    "215 list follows",
                    "misc.test 3002322 3000234 y",
                    "comp.risks not-a-number 441099 m",
                    "alt.test 4 1 y",
                    ".",
                ],
            ),
            step("DATE", &["111 20240101120000"]),
        ],
    )
    .await;

    match client.list_active("*").await {
        Err(NntpError::MalformedGroupLine(raw)) => {
            assert_eq!(raw, "comp.risks not-a-number 441099 m")
        }
        other => panic!("unexpected result: {other:?}"),
    }

    // The rest of the block was drained; the session is still in step
    assert!(!client.is_broken());
    client.date().await.unwrap();
}
