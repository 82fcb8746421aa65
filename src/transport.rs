//! Raw HTTP/1.1 transport over plain TCP or TLS.
//!
//! This module owns the socket work: format a one-shot GET request, write it,
//! and read the response until the server closes the connection. Requests
//! always carry `Connection: close`, so end-of-stream marks end-of-response
//! and no Content-Length bookkeeping is needed on the way in.
//!
//! Responses are split into lines up front. Size probes drag whole image
//! bodies through the socket, so the byte stream is decoded lossily; header
//! lines are ASCII and survive, and body bytes are never interpreted beyond
//! line splitting.
//!
//! Uses `tokio-rustls` for the TLS path and plain `tokio` sockets otherwise.

use std::sync::Arc;
use std::time::Duration;

use rustls::pki_types::ServerName;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::error::TransportError;

/// Formats a one-shot HTTP/1.1 GET request.
///
/// The header order is part of the wire contract with the photo hosts: the
/// request line, then `Connection: close`, then `Host`, then the blank line.
pub fn format_get_request(path: &str, host: &str) -> String {
    format!(
        "GET {path} HTTP/1.1\r\n\
         Connection: close\r\n\
         Host: {host}\r\n\
         \r\n"
    )
}

/// Sends a request and returns the full response as lines.
///
/// Connects to `host:port`, optionally wraps the socket in TLS (with the
/// server name taken from `host`), writes `request`, and reads until the
/// server closes the connection. Each phase (connect, handshake, exchange)
/// gets `timeout` to complete.
///
/// # Errors
///
/// Returns a `TransportError` if the connect, handshake, write, or read
/// fails or times out, or if the peer closes without sending anything.
pub async fn send(
    host: &str,
    port: u16,
    request: &str,
    use_tls: bool,
    timeout: Duration,
) -> Result<Vec<String>, TransportError> {
    log::debug!("Connecting to {host}:{port} (tls: {use_tls})");
    let sock = connect(host, port, timeout).await?;

    let raw = if use_tls {
        let tls_stream = handshake(sock, host, timeout).await?;
        exchange(tls_stream, host, request, timeout).await?
    } else {
        exchange(sock, host, request, timeout).await?
    };

    if raw.is_empty() {
        return Err(TransportError::EmptyResponse {
            host: host.to_string(),
            port,
        });
    }

    let text = String::from_utf8_lossy(&raw);
    Ok(text.lines().map(str::to_owned).collect())
}

/// Opens the TCP connection with a timeout.
async fn connect(host: &str, port: u16, timeout: Duration) -> Result<TcpStream, TransportError> {
    match tokio::time::timeout(timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(sock)) => Ok(sock),
        Ok(Err(source)) => Err(TransportError::Connect {
            host: host.to_string(),
            port,
            source,
        }),
        Err(_) => Err(TransportError::ConnectTimeout {
            host: host.to_string(),
            port,
            secs: timeout.as_secs(),
        }),
    }
}

/// Wraps an open socket in TLS, verifying against the webpki root set.
async fn handshake(
    sock: TcpStream,
    host: &str,
    timeout: Duration,
) -> Result<TlsStream<TcpStream>, TransportError> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let server_name =
        ServerName::try_from(host.to_string()).map_err(|_| TransportError::InvalidServerName {
            host: host.to_string(),
        })?;

    let connector = TlsConnector::from(Arc::new(config));
    match tokio::time::timeout(timeout, connector.connect(server_name, sock)).await {
        Ok(Ok(tls_stream)) => Ok(tls_stream),
        Ok(Err(source)) => Err(TransportError::Tls {
            host: host.to_string(),
            source,
        }),
        Err(_) => Err(TransportError::HandshakeTimeout {
            host: host.to_string(),
            secs: timeout.as_secs(),
        }),
    }
}

/// Writes the request and reads the response until end-of-stream.
async fn exchange<S>(
    mut stream: S,
    host: &str,
    request: &str,
    timeout: Duration,
) -> Result<Vec<u8>, TransportError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let io = async {
        stream.write_all(request.as_bytes()).await?;
        stream.flush().await?;

        let mut raw = Vec::new();
        match stream.read_to_end(&mut raw).await {
            Ok(_) => {}
            // A peer that drops the link without a TLS close_notify surfaces
            // as UnexpectedEof; whatever arrived before that is the response
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof && !raw.is_empty() => {}
            Err(e) => return Err(e),
        }
        Ok(raw)
    };

    match tokio::time::timeout(timeout, io).await {
        Ok(Ok(raw)) => Ok(raw),
        Ok(Err(source)) => Err(TransportError::Io {
            host: host.to_string(),
            source,
        }),
        Err(_) => Err(TransportError::ReadTimeout {
            host: host.to_string(),
            secs: timeout.as_secs(),
        }),
    }
}
