use std::path::PathBuf;

use clap::Parser;

/// mcrpc — send one JSON-RPC command to a MultiChain-style node.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node RPC host.
    #[arg(long, default_value = "127.0.0.1", env = "MCRPC_HOST")]
    pub host: String,

    /// Node RPC port. Falls back to `rpcport` from --conf.
    #[arg(long, env = "MCRPC_PORT")]
    pub port: Option<u16>,

    /// RPC username.
    #[arg(long, env = "MCRPC_USER")]
    pub user: Option<String>,

    /// RPC password.
    #[arg(long, env = "MCRPC_PASS", hide_env_values = true)]
    pub pass: Option<String>,

    /// Node config file (`multichain.conf`) supplying rpcuser/rpcpassword/rpcport.
    #[arg(long, env = "MCRPC_CONF")]
    pub conf: Option<PathBuf>,

    /// Connect over HTTPS.
    #[arg(long, env = "MCRPC_HTTPS")]
    pub https: bool,

    /// Extra PEM root certificate to trust (repeatable).
    #[arg(long)]
    pub ca_cert: Vec<PathBuf>,

    /// PEM client certificate for mutual TLS.
    #[arg(long, requires = "client_key")]
    pub client_cert: Option<PathBuf>,

    /// PEM private key for --client-cert.
    #[arg(long, requires = "client_cert")]
    pub client_key: Option<PathBuf>,

    /// TLS server name when it differs from --host.
    #[arg(long)]
    pub server_name: Option<String>,

    /// Skip TLS certificate verification.
    #[arg(long, env = "MCRPC_INSECURE")]
    pub insecure: bool,

    /// Request timeout in seconds.
    #[arg(long, default_value = "30", env = "MCRPC_TIMEOUT")]
    pub timeout: u64,

    /// Connect timeout in seconds.
    #[arg(long, default_value = "10", env = "MCRPC_CONNECT_TIMEOUT")]
    pub connect_timeout: u64,

    /// RPC method name, passed to the node unchanged.
    pub method: String,

    /// Positional parameters. Each is parsed as JSON, or sent as a string
    /// when it is not valid JSON.
    #[arg(allow_hyphen_values = true)]
    pub params: Vec<String>,
}
