//! RFC 4643 Section 2.3 - AUTHINFO USER/PASS
//!
//! USER is answered with 381 (password required); PASS with 281 (accepted) or 481
//! (rejected). A 481 or 482 to USER ends the exchange.

use crate::common::{connect, hang_up, step};
use nntp_engine::{Credentials, ErrorKind, NntpError};

#[tokio::test]
async fn test_user_pass_accepted() {
    let (mut client, server) = connect(
        "200 ready",
        vec![
            step("AUTHINFO USER", &["381 Enter passphrase"]),
            step("AUTHINFO PASS", &["281 Authentication accepted"]),
        ],
    )
    .await;

    assert!(!client.is_authenticated());
    client
        .authenticate(&Credentials::new("wilma", "flintstone"))
        .await
        .unwrap();
    assert!(client.is_authenticated());

    assert_eq!(
        hang_up(client, server).await,
        vec!["AUTHINFO USER wilma", "AUTHINFO PASS flintstone"]
    );
}

#[tokio::test]
async fn test_user_rejected_pass_never_sent() {
    let (mut client, server) = connect(
        "200 ready",
        vec![step("AUTHINFO USER", &["481 Authentication failed"])],
    )
    .await;

    let err = client
        .authenticate(&Credentials::new("wilma", "flintstone"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(481));
    assert_eq!(err.kind(), ErrorKind::Protocol);
    match &err {
        NntpError::UnexpectedStatus { message, .. } => {
            assert_eq!(message, "Authentication failed")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!client.is_authenticated());

    assert_eq!(
        hang_up(client, server).await,
        vec!["AUTHINFO USER wilma"]
    );
}

#[tokio::test]
async fn test_pass_rejected() {
    let (mut client, _server) = connect(
        "200 ready",
        vec![
            step("AUTHINFO USER", &["381 Enter passphrase"]),
            step("AUTHINFO PASS", &["481 Authentication failed"]),
        ],
    )
    .await;

    let err = client
        .authenticate(&Credentials::new("wilma", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(481));
    assert!(!client.is_authenticated());
    assert!(!client.is_broken());
}

#[tokio::test]
async fn test_user_answered_281_is_rejected() {
    // Without a 381 the password step is never attempted
    let (mut client, server) = connect(
        "200 ready",
        vec![step("AUTHINFO USER", &["281 Authentication accepted"])],
    )
    .await;

    let err = client
        .authenticate(&Credentials::new("wilma", "flintstone"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        NntpError::UnexpectedStatus {
            got: 281,
            expected: &[381],
            ..
        }
    ));

    assert_eq!(hang_up(client, server).await, vec!["AUTHINFO USER wilma"]);
}

#[tokio::test]
async fn test_out_of_sequence() {
    let (mut client, _server) = connect(
        "200 ready",
        vec![step("AUTHINFO USER", &["482 Authentication commands issued out of sequence"])],
    )
    .await;

    let err = client
        .authenticate(&Credentials::new("wilma", "flintstone"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(482));
}

#[tokio::test]
async fn test_already_authenticated() {
    let (mut client, server) = connect(
        "200 ready",
        vec![
            step("AUTHINFO USER", &["381 Enter passphrase"]),
            step("AUTHINFO PASS", &["281 Authentication accepted"]),
        ],
    )
    .await;

    let creds = Credentials::new("wilma", "flintstone");
    client.authenticate(&creds).await.unwrap();

    let err = client.authenticate(&creds).await.unwrap_err();
    assert!(matches!(err, NntpError::AlreadyAuthenticated));
    assert_eq!(err.kind(), ErrorKind::Usage);

    assert_eq!(hang_up(client, server).await.len(), 2);
}

#[test]
fn test_credentials_debug_hides_password() {
    let creds = Credentials::new("wilma", "flintstone");
    let debug = format!("{:?}", creds);
    assert!(debug.contains("wilma"));
    assert!(!debug.contains("flintstone"));
}
