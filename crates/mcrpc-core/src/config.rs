//! Connection configuration held by a [`Client`](crate::Client).
//!
//! A [`ConnectionConfig`] names one node endpoint (host, port, scheme),
//! optional basic-auth credentials and optional TLS material. Node config
//! files (`multichain.conf` style) can be read with [`read_node_conf`] to
//! fill in credentials and the RPC port.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::CoreError;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ==============================================================================
// Protocol
// ==============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    pub fn scheme(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl std::str::FromStr for Protocol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(CoreError::InvalidConfig(format!(
                "unsupported protocol `{other}`; expected http or https"
            ))),
        }
    }
}

// ==============================================================================
// TLS Options
// ==============================================================================

/// TLS material applied when [`Protocol::Https`] is selected.
///
/// `pfx`, `passphrase` and `ciphers` exist so callers can express the full
/// connection record, but the rustls backend has no way to honour them.
/// Building a transport with any of them set fails instead of ignoring them.
#[derive(Clone, Default)]
pub struct TlsOptions {
    /// Additional PEM-encoded root certificates.
    pub ca: Vec<Vec<u8>>,
    /// PEM client certificate (chain) for mutual TLS.
    pub cert: Option<Vec<u8>>,
    /// PEM private key matching `cert`.
    pub key: Option<Vec<u8>>,
    /// Name used for SNI and certificate verification instead of the host.
    pub server_name: Option<String>,
    pub accept_invalid_certs: bool,
    pub pfx: Option<Vec<u8>>,
    pub passphrase: Option<String>,
    pub ciphers: Option<String>,
}

impl TlsOptions {
    pub fn add_ca_file(&mut self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        self.ca.push(read_pem(path.as_ref(), "CA certificate")?);
        Ok(())
    }

    pub fn set_client_identity_files(
        &mut self,
        cert: impl AsRef<Path>,
        key: impl AsRef<Path>,
    ) -> Result<(), CoreError> {
        self.cert = Some(read_pem(cert.as_ref(), "client certificate")?);
        self.key = Some(read_pem(key.as_ref(), "client key")?);
        Ok(())
    }

    /// `true` when no TLS option deviates from the defaults.
    pub fn is_empty(&self) -> bool {
        self.ca.is_empty()
            && self.cert.is_none()
            && self.key.is_none()
            && self.server_name.is_none()
            && !self.accept_invalid_certs
            && self.pfx.is_none()
            && self.passphrase.is_none()
            && self.ciphers.is_none()
    }
}

impl fmt::Debug for TlsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsOptions")
            .field("ca", &self.ca.len())
            .field("cert", &self.cert.is_some())
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("server_name", &self.server_name)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("pfx", &self.pfx.is_some())
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<redacted>"))
            .field("ciphers", &self.ciphers)
            .finish()
    }
}

fn read_pem(path: &Path, what: &str) -> Result<Vec<u8>, CoreError> {
    std::fs::read(path).map_err(|e| {
        CoreError::InvalidConfig(format!("failed to read {what} {}: {e}", path.display()))
    })
}

// ==============================================================================
// Connection Config
// ==============================================================================

#[derive(Clone)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub protocol: Protocol,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub tls: TlsOptions,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ConnectionConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            protocol: Protocol::Http,
            user: None,
            pass: None,
            tls: TlsOptions::default(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_credentials(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.pass = Some(pass.into());
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn with_tls(mut self, tls: TlsOptions) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Fill whichever of user and pass is unset from a node config file.
    pub fn merge_node_conf(mut self, conf: &NodeConf) -> Self {
        self.user = self.user.or_else(|| conf.rpc_user.clone());
        self.pass = self.pass.or_else(|| conf.rpc_password.clone());
        self
    }

    /// Resolve the basic-auth pair.
    ///
    /// Credentials are attached only when both halves are set; a lone user
    /// or password is rejected rather than sent half-formed.
    pub fn credentials(&self) -> Result<Option<(&str, &str)>, CoreError> {
        match (self.user.as_deref(), self.pass.as_deref()) {
            (Some(u), Some(p)) => Ok(Some((u, p))),
            (None, None) => Ok(None),
            _ => Err(CoreError::InvalidConfig(
                "both rpc user and rpc pass must be set together".to_owned(),
            )),
        }
    }

    /// Host presented on the wire: the TLS server name when one is set for
    /// an https connection, the configured host otherwise.
    pub fn authority_host(&self) -> &str {
        match (self.protocol, self.tls.server_name.as_deref()) {
            (Protocol::Https, Some(name)) => name,
            _ => &self.host,
        }
    }

    /// Endpoint URL, e.g. `http://127.0.0.1:7777/`.
    pub fn url(&self) -> String {
        let host = self.authority_host();
        if host.contains(':') && !host.starts_with('[') {
            format!("{}://[{host}]:{}/", self.protocol.scheme(), self.port)
        } else {
            format!("{}://{host}:{}/", self.protocol.scheme(), self.port)
        }
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("user", &self.user)
            .field("pass", &self.pass.as_ref().map(|_| "<redacted>"))
            .field("tls", &self.tls)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

// ==============================================================================
// Node Config File
// ==============================================================================

/// RPC settings found in a node's `key=value` config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeConf {
    pub rpc_user: Option<String>,
    pub rpc_password: Option<String>,
    pub rpc_port: Option<u16>,
}

pub fn read_node_conf(path: &Path) -> Result<NodeConf, CoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CoreError::InvalidConfig(format!(
            "failed to read node config file {}: {e}",
            path.display()
        ))
    })?;
    parse_node_conf(&content).map_err(|message| {
        CoreError::InvalidConfig(format!("node config file {}: {message}", path.display()))
    })
}

fn parse_node_conf(content: &str) -> Result<NodeConf, String> {
    let mut conf = NodeConf::default();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(format!("line {}: expected `key=value`", idx + 1));
        };
        let value = value.trim();
        match key.trim() {
            "rpcuser" => conf.rpc_user = Some(value.to_owned()),
            "rpcpassword" => conf.rpc_password = Some(value.to_owned()),
            "rpcport" => {
                let port = value
                    .parse::<u16>()
                    .map_err(|e| format!("line {}: invalid rpcport `{value}`: {e}", idx + 1))?;
                conf.rpc_port = Some(port);
            }
            _ => {}
        }
    }

    if conf.rpc_user.is_some() != conf.rpc_password.is_some() {
        return Err("rpcuser and rpcpassword must be set together".to_owned());
    }
    Ok(conf)
}
