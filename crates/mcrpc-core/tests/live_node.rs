use std::env;

use mcrpc_core::{Client, ConnectionConfig};

fn client_from_env() -> Client {
    let host = env::var("MCRPC_TEST_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port: u16 = env::var("MCRPC_TEST_PORT")
        .expect("MCRPC_TEST_PORT must be set")
        .parse()
        .expect("MCRPC_TEST_PORT must be a port number");
    let user = env::var("MCRPC_TEST_USER").expect("MCRPC_TEST_USER must be set");
    let pass = env::var("MCRPC_TEST_PASS").expect("MCRPC_TEST_PASS must be set");

    Client::new(&ConnectionConfig::new(host, port).with_credentials(user, pass))
        .expect("client must build")
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a running node; set MCRPC_TEST_PORT/USER/PASS"]
async fn live_node_answers_general_utilities() {
    let client = client_from_env();

    let info = client.get_info().await.expect("getinfo must succeed");
    assert!(!info.chain_name.is_empty());
    eprintln!("[itest] connected to {} at {} blocks", info.chain_name, info.blocks);

    let params = client
        .get_blockchain_params()
        .await
        .expect("getblockchainparams must succeed");
    assert_eq!(params.chain_name, info.chain_name);

    let help = client.help(Some("grant")).await.expect("help must succeed");
    assert!(help.contains("grant"));
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a running node; set MCRPC_TEST_PORT/USER/PASS"]
async fn live_node_creates_and_validates_addresses() {
    let client = client_from_env();

    let address = client
        .get_new_address()
        .await
        .expect("getnewaddress must succeed");
    let validation = client
        .validate_address(&address)
        .await
        .expect("validateaddress must succeed");
    assert!(validation.is_valid);
    assert!(validation.is_mine);

    let addresses = client.get_addresses().await.expect("getaddresses must succeed");
    assert!(addresses.contains(&address));
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a running node; set MCRPC_TEST_PORT/USER/PASS"]
async fn live_node_rejects_bad_credentials() {
    let host = env::var("MCRPC_TEST_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port: u16 = env::var("MCRPC_TEST_PORT")
        .expect("MCRPC_TEST_PORT must be set")
        .parse()
        .expect("MCRPC_TEST_PORT must be a port number");
    let client = Client::new(
        &ConnectionConfig::new(host, port).with_credentials("nobody", "definitely-wrong"),
    )
    .expect("client must build");

    let err = client.get_info().await.expect_err("bad credentials must fail");
    assert!(err.is_unauthorized());
}
