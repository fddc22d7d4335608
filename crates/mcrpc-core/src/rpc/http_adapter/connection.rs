use std::net::{SocketAddr, ToSocketAddrs};

use reqwest::{Certificate, Identity};

use crate::config::{ConnectionConfig, Protocol, TlsOptions};
use crate::error::CoreError;

/// Build the `reqwest` client for `config`.
pub(super) fn build_http_client(config: &ConnectionConfig) -> Result<reqwest::Client, CoreError> {
    let mut builder = reqwest::Client::builder()
        .use_rustls_tls()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .tcp_nodelay(true)
        // Node endpoints are addressed directly; callers that need a proxy
        // pass their own client to `HttpTransport::with_client`.
        .no_proxy();

    if config.protocol == Protocol::Https {
        builder = apply_tls(builder, &config.tls)?;
        if let Some(server_name) = config.tls.server_name.as_deref() {
            let addrs = resolve_host(&config.host, config.port)?;
            builder = builder.resolve_to_addrs(server_name, &addrs);
        }
    } else if !config.tls.is_empty() {
        tracing::warn!(
            host = %config.host,
            "TLS options are set but protocol is http; they will not be used"
        );
    }

    builder
        .build()
        .map_err(|e| CoreError::InvalidConfig(format!("failed to build HTTP client: {e}")))
}

fn apply_tls(
    mut builder: reqwest::ClientBuilder,
    tls: &TlsOptions,
) -> Result<reqwest::ClientBuilder, CoreError> {
    reject_unsupported(tls)?;

    for pem in &tls.ca {
        let certs = Certificate::from_pem_bundle(pem)
            .map_err(|e| CoreError::InvalidConfig(format!("invalid CA certificate PEM: {e}")))?;
        for cert in certs {
            builder = builder.add_root_certificate(cert);
        }
    }

    match (&tls.cert, &tls.key) {
        (Some(cert), Some(key)) => {
            // rustls wants the key and the certificate chain in one PEM buffer.
            let mut pem = key.clone();
            if !pem.ends_with(b"\n") {
                pem.push(b'\n');
            }
            pem.extend_from_slice(cert);
            let identity = Identity::from_pem(&pem).map_err(|e| {
                CoreError::InvalidConfig(format!("invalid client certificate or key: {e}"))
            })?;
            builder = builder.identity(identity);
        }
        (None, None) => {}
        _ => {
            return Err(CoreError::InvalidConfig(
                "client certificate and key must be set together".to_owned(),
            ));
        }
    }

    if tls.accept_invalid_certs {
        tracing::warn!("TLS certificate verification is disabled");
        builder = builder.danger_accept_invalid_certs(true);
    }

    Ok(builder)
}

fn reject_unsupported(tls: &TlsOptions) -> Result<(), CoreError> {
    let unsupported = [
        ("pfx", tls.pfx.is_some()),
        ("passphrase", tls.passphrase.is_some()),
        ("ciphers", tls.ciphers.is_some()),
    ];
    match unsupported.iter().find(|(_, set)| *set) {
        Some((name, _)) => Err(CoreError::InvalidConfig(format!(
            "TLS option `{name}` is not supported by the rustls backend; \
             use PEM `cert`/`key` without encryption"
        ))),
        None => Ok(()),
    }
}

// The URL carries the server name so SNI and verification use it; the
// configured host is pinned as its address.
fn resolve_host(host: &str, port: u16) -> Result<Vec<SocketAddr>, CoreError> {
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|e| CoreError::InvalidConfig(format!("failed to resolve `{host}:{port}`: {e}")))?
        .collect();
    if addrs.is_empty() {
        return Err(CoreError::InvalidConfig(format!(
            "`{host}:{port}` resolved to no addresses"
        )));
    }
    Ok(addrs)
}
