//! Transport dialers
//!
//! A [`Dialer`] turns a [`ServerConfig`] into a live duplex byte stream positioned
//! before the server greeting. [`TcpDialer`] is the production implementation: a
//! tuned TCP socket with optional rustls on top. Tests inject their own dialer to hand
//! the client an in-memory stream instead.

use crate::config::ServerConfig;
use crate::error::{NntpError, Result};
use socket2::{Domain, Protocol, Socket, TcpKeepalive, Type};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpSocket, TcpStream, lookup_host};
use tokio::time::timeout;
use tokio_rustls::TlsConnector;
use tokio_rustls::rustls::client::danger::{
    HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier,
};
use tokio_rustls::rustls::crypto::{CryptoProvider, ring};
use tokio_rustls::rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use tokio_rustls::rustls::{ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme};
use tracing::{debug, warn};

/// Receive buffer requested from the OS (4MB)
const RECV_BUFFER_SIZE: usize = 4 * 1024 * 1024;

/// Send buffer requested from the OS (1MB)
const SEND_BUFFER_SIZE: usize = 1024 * 1024;

/// Idle time before the first keepalive probe
const KEEPALIVE_IDLE: Duration = Duration::from_secs(60);

/// Any duplex byte stream the client can speak NNTP over
pub trait NntpStream: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T> NntpStream for T where T: AsyncRead + AsyncWrite + Send + Unpin {}

/// Type-erased stream handed from a [`Dialer`] to the client
pub type BoxedStream = Box<dyn NntpStream>;

/// Establishes the byte stream underneath a session
///
/// Implementations provide a plain and a TLS variant; [`connect`](Self::connect)
/// selects between them from [`ServerConfig::tls`].
pub trait Dialer: Send + Sync {
    /// Open a plain-text stream to `config.host:config.port`
    fn dial(&self, config: &ServerConfig) -> impl Future<Output = Result<BoxedStream>> + Send;

    /// Open a TLS-wrapped stream to `config.host:config.port`
    fn dial_secure(
        &self,
        config: &ServerConfig,
    ) -> impl Future<Output = Result<BoxedStream>> + Send;

    /// Open whichever variant the configuration asks for
    fn connect(&self, config: &ServerConfig) -> impl Future<Output = Result<BoxedStream>> + Send {
        async move {
            if config.tls {
                self.dial_secure(config).await
            } else {
                self.dial(config).await
            }
        }
    }
}

/// Production dialer: tuned TCP socket, rustls for TLS
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpDialer;

/// Create an unconnected socket for `addr` with NNTP-friendly options applied
///
/// Only `TCP_NODELAY` is mandatory; buffer sizes and keepalive are best effort.
fn tuned_socket(addr: &SocketAddr) -> io::Result<TcpSocket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_nodelay(true)?;
    if let Err(e) = socket.set_recv_buffer_size(RECV_BUFFER_SIZE) {
        warn!(size = RECV_BUFFER_SIZE, "Failed to set receive buffer size: {}", e);
    }
    if let Err(e) = socket.set_send_buffer_size(SEND_BUFFER_SIZE) {
        warn!(size = SEND_BUFFER_SIZE, "Failed to set send buffer size: {}", e);
    }
    if let Err(e) = socket.set_tcp_keepalive(&TcpKeepalive::new().with_time(KEEPALIVE_IDLE)) {
        warn!("Failed to enable TCP keepalive: {}", e);
    }

    socket.set_nonblocking(true)?;
    Ok(TcpSocket::from_std_stream(socket.into()))
}

impl TcpDialer {
    /// Resolve the host and try each address in turn until one accepts
    async fn open_tcp(config: &ServerConfig) -> Result<TcpStream> {
        let address = config.address();
        debug!("Resolving {}", address);

        let addrs: Vec<SocketAddr> = lookup_host(address.as_str()).await?.collect();
        if addrs.is_empty() {
            return Err(NntpError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("No address resolved for {}", address),
            )));
        }

        let mut last_err = None;
        for addr in addrs {
            let attempt = async {
                let socket = tuned_socket(&addr)?;
                socket.connect(addr).await
            };
            match timeout(config.connect_timeout, attempt).await {
                Ok(Ok(stream)) => {
                    debug!("Connected to {} ({})", address, addr);
                    return Ok(stream);
                }
                Ok(Err(e)) => {
                    debug!("Connect to {} failed: {}", addr, e);
                    last_err = Some(NntpError::Io(e));
                }
                Err(_) => {
                    debug!("Connect to {} timed out", addr);
                    last_err = Some(NntpError::Timeout);
                }
            }
        }

        Err(last_err.unwrap_or(NntpError::Timeout))
    }
}

/// Build the rustls client configuration for a session
pub(crate) fn tls_client_config(allow_insecure: bool) -> ClientConfig {
    let _ = CryptoProvider::install_default(ring::default_provider());

    if !allow_insecure {
        let roots = RootCertStore {
            roots: webpki_roots::TLS_SERVER_ROOTS.to_vec(),
        };
        return ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();
    }

    warn!("TLS certificate validation disabled - connection vulnerable to MITM attacks");
    ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyServerCert::new()))
        .with_no_client_auth()
}

impl Dialer for TcpDialer {
    async fn dial(&self, config: &ServerConfig) -> Result<BoxedStream> {
        Ok(Box::new(Self::open_tcp(config).await?))
    }

    async fn dial_secure(&self, config: &ServerConfig) -> Result<BoxedStream> {
        let server_name = ServerName::try_from(config.host.as_str())
            .map_err(|e| NntpError::Tls(format!("Invalid server name {}: {}", config.host, e)))?
            .to_owned();
        let tcp = Self::open_tcp(config).await?;

        let connector = TlsConnector::from(Arc::new(tls_client_config(config.allow_insecure_tls)));
        let handshake = connector.connect(server_name, tcp);
        let tls = match timeout(config.tls_handshake_timeout, handshake).await {
            Ok(Ok(tls)) => tls,
            Ok(Err(e)) => return Err(NntpError::Tls(format!("TLS handshake failed: {}", e))),
            Err(_) => return Err(NntpError::Timeout),
        };

        debug!("TLS established with {}", config.host);
        Ok(Box::new(tls))
    }
}

/// Certificate verifier that accepts whatever the server presents
///
/// **Security Warning:** installed only when `allow_insecure_tls` is set. Nothing about
/// the server certificate is checked.
#[derive(Debug)]
pub(crate) struct AcceptAnyServerCert {
    provider: CryptoProvider,
}

impl AcceptAnyServerCert {
    fn new() -> Self {
        Self {
            provider: ring::default_provider(),
        }
    }
}

impl ServerCertVerifier for AcceptAnyServerCert {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, tokio_rustls::rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}
