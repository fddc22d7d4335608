mod client;
pub mod config;
pub mod error;
mod methods;
pub mod rpc;
#[cfg(test)]
mod test_util;
pub mod types;

pub use client::Client;
pub use config::{read_node_conf, ConnectionConfig, NodeConf, Protocol, TlsOptions};
pub use error::{CoreError, RpcError};
pub use methods::{GrantOptions, RevokeOptions};
