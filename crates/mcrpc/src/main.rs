mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde_json::Value;

use mcrpc_core::{read_node_conf, Client, ConnectionConfig, Protocol, TlsOptions};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let config = build_config(&args)?;
    tracing::debug!(?config, "connection config");

    let client = Client::new(&config).context("build RPC client")?;
    let params: Vec<Value> = args.params.iter().map(|p| parse_param(p)).collect();

    let result = client.call(&args.method, params).await.map_err(|err| {
        let message = format_rpc_error(&config.url(), &err.to_string());
        eyre!(message).wrap_err(format!("`{}` failed", args.method))
    })?;

    println!("{}", render_result(&result)?);
    Ok(())
}

fn build_config(args: &cli::Cli) -> eyre::Result<ConnectionConfig> {
    let node_conf = match &args.conf {
        Some(path) => Some(read_node_conf(path).context("load node config file")?),
        None => None,
    };

    let port = args
        .port
        .or_else(|| node_conf.as_ref().and_then(|conf| conf.rpc_port))
        .ok_or_else(|| eyre!("no RPC port given; pass --port or a --conf file with rpcport"))?;

    let mut tls = TlsOptions {
        server_name: args.server_name.clone(),
        accept_invalid_certs: args.insecure,
        ..TlsOptions::default()
    };
    for path in &args.ca_cert {
        tls.add_ca_file(path).context("load CA certificate")?;
    }
    if let (Some(cert), Some(key)) = (&args.client_cert, &args.client_key) {
        tls.set_client_identity_files(cert, key)
            .context("load client certificate")?;
    }

    let protocol = if args.https {
        Protocol::Https
    } else {
        Protocol::Http
    };

    let mut config = ConnectionConfig::new(args.host.clone(), port)
        .with_protocol(protocol)
        .with_tls(tls)
        .with_connect_timeout(Duration::from_secs(args.connect_timeout))
        .with_request_timeout(Duration::from_secs(args.timeout));
    config.user = args.user.clone();
    config.pass = args.pass.clone();
    if let Some(conf) = &node_conf {
        config = config.merge_node_conf(conf);
    }
    Ok(config)
}

/// Interpret a command line argument as JSON, falling back to a string.
fn parse_param(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

/// Strings print bare, everything else as pretty JSON.
fn render_result(result: &Value) -> eyre::Result<String> {
    match result {
        Value::String(s) => Ok(s.clone()),
        other => serde_json::to_string_pretty(other).context("render result"),
    }
}

fn format_rpc_error(url: &str, source_error: &str) -> String {
    let mut lines = vec![
        format!("RPC endpoint `{url}`"),
        format!("RPC error: {source_error}"),
    ];

    if source_error.contains("Unauthorized") {
        lines.push("hint: authentication failed; verify --user/--pass or the --conf file".into());
    } else if source_error.contains("dns error") {
        lines.push(
            "hint: hostname resolution failed; verify --host and your DNS/network".into(),
        );
    } else if source_error.contains("certificate") || source_error.contains("tls") {
        lines.push(
            "hint: TLS handshake failed; verify --ca-cert/--server-name and that the node serves HTTPS"
                .into(),
        );
    } else if source_error.contains("error sending request for url") {
        lines.push(
            "hint: request could not be sent; verify the node is running and rpcallowip permits this host"
                .into(),
        );
    }

    lines.join("\n")
}
