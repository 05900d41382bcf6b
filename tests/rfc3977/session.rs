//! RFC 3977 Sections 5.1, 5.2, 5.4, 7.1, 7.2 - greeting, CAPABILITIES, QUIT, DATE, HELP

use crate::common::{connect, hang_up, mock_server, step};
use chrono::{Datelike, Timelike};
use nntp_engine::{ErrorKind, NntpClient, NntpError, ServerConfig};
use std::sync::Arc;

#[tokio::test]
async fn test_greeting_200() {
    let (client, _server) = connect("200 NNTP Service Ready, posting permitted", vec![]).await;
    assert!(client.posting_allowed());
    assert_eq!(client.banner(), "NNTP Service Ready, posting permitted");
}

#[tokio::test]
async fn test_greeting_201() {
    let (client, _server) = connect("201 NNTP Service Ready, posting prohibited", vec![]).await;
    assert!(!client.posting_allowed());
}

#[tokio::test]
async fn test_greeting_400_refuses_session() {
    let (dialer, _server) = mock_server("400 Service temporarily unavailable", vec![]);
    let config = Arc::new(ServerConfig::plain("mock.invalid"));
    let err = NntpClient::connect_with(config, &dialer).await.unwrap_err();
    assert_eq!(err.code(), Some(400));
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_capabilities() {
    let (mut client, _server) = connect(
        "200 ready",
        vec![step(
            "CAPABILITIES",
            &[
                "101 Capability list:",
                "VERSION 2",
                "READER",
                "LIST ACTIVE NEWSGROUPS",
                "AUTHINFO USER",
                ".",
            ],
        )],
    )
    .await;

    let caps = client.capabilities().await.unwrap();
    assert_eq!(caps.versions(), vec![2]);
    assert!(caps.has_arg("LIST", "active"));
    assert!(caps.has_arg("AUTHINFO", "USER"));
    assert!(!caps.supports_over());
}

#[tokio::test]
async fn test_help() {
    let (mut client, _server) = connect(
        "200 ready",
        vec![step("HELP", &["100 Help text follows", "This is some help text.", "."])],
    )
    .await;
    assert_eq!(client.help().await.unwrap(), vec!["This is some help text."]);
}

#[tokio::test]
async fn test_date() {
    let (mut client, _server) =
        connect("200 ready", vec![step("DATE", &["111 19990623135624"])]).await;
    let date = client.date().await.unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (1999, 6, 23));
    assert_eq!((date.hour(), date.minute(), date.second()), (13, 56, 24));
}

#[tokio::test]
async fn test_quit_then_reuse() {
    let (mut client, server) = connect(
        "200 ready",
        vec![
            step("GROUP", &["211 1 1 1 misc.test"]),
            step("QUIT", &["205 closing connection"]),
        ],
    )
    .await;

    client.select_group("misc.test").await.unwrap();
    client.quit().await.unwrap();
    assert!(client.is_closed());
    assert!(client.current_group().is_none());

    let err = client.quit().await.unwrap_err();
    assert!(matches!(err, NntpError::SessionClosed));
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert!(matches!(
        client.select_group("misc.test").await,
        Err(NntpError::SessionClosed)
    ));

    assert_eq!(
        hang_up(client, server).await,
        vec!["GROUP misc.test", "QUIT"]
    );
}

#[tokio::test]
async fn test_dial_failure_is_transport_error() {
    let (dialer, _server) = mock_server("200 ready", vec![]);
    let config = Arc::new(ServerConfig::plain("mock.invalid"));
    let _first = NntpClient::connect_with(config.clone(), &dialer)
        .await
        .unwrap();

    // The mock dialer only has one stream to hand out
    let err = NntpClient::connect_with(config, &dialer).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
