//! Typed convenience wrappers over [`Client::call`].
//!
//! Each wrapper only shapes positional parameters and names the result type.
//! Address and permission lists are sent as comma-separated strings, which
//! is the form every node version accepts.

use serde_json::{json, Map, Value};

use crate::client::Client;
use crate::error::CoreError;
use crate::types::{
    comma_list, Address, AddressInfo, AddressInfoVerbose, AddressValidation, BlockchainParams,
    Info, InitStatus, KeyPair, P2sh, RuntimeParam, RuntimeParams,
};

/// Default `end-block` for grants: the permission never expires.
const GRANT_END_BLOCK_MAX: u64 = u32::MAX as u64;

/// Optional trailing arguments of `grant` / `grantfrom`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrantOptions {
    pub native_amount: Option<f64>,
    pub start_block: Option<u64>,
    pub end_block: Option<u64>,
    pub comment: Option<String>,
    pub comment_to: Option<String>,
}

impl GrantOptions {
    /// Positional form, truncated after the last option that was set. Unset
    /// options before it take the node's defaults.
    fn to_params(&self) -> Vec<Value> {
        let slots = [
            self.native_amount.map(|v| json!(v)),
            self.start_block.map(|v| json!(v)),
            self.end_block.map(|v| json!(v)),
            self.comment.as_ref().map(|v| json!(v)),
            self.comment_to.as_ref().map(|v| json!(v)),
        ];
        let defaults = [
            json!(0),
            json!(0),
            json!(GRANT_END_BLOCK_MAX),
            json!(""),
            json!(""),
        ];
        trailing_params(slots, defaults)
    }
}

/// Optional trailing arguments of `revoke` / `revokefrom`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevokeOptions {
    pub native_amount: Option<f64>,
    pub comment: Option<String>,
    pub comment_to: Option<String>,
}

impl RevokeOptions {
    fn to_params(&self) -> Vec<Value> {
        let slots = [
            self.native_amount.map(|v| json!(v)),
            self.comment.as_ref().map(|v| json!(v)),
            self.comment_to.as_ref().map(|v| json!(v)),
        ];
        trailing_params(slots, [json!(0), json!(""), json!("")])
    }
}

fn trailing_params<const N: usize>(slots: [Option<Value>; N], defaults: [Value; N]) -> Vec<Value> {
    let used = slots
        .iter()
        .rposition(Option::is_some)
        .map_or(0, |last| last + 1);
    slots
        .into_iter()
        .zip(defaults)
        .take(used)
        .map(|(slot, default)| slot.unwrap_or(default))
        .collect()
}

/// `*` when the filter is empty, the comma-joined list otherwise.
fn list_or_wildcard(items: &[&str]) -> Value {
    if items.is_empty() {
        json!("*")
    } else {
        json!(comma_list(items))
    }
}

impl Client {
    // ==========================================================================
    // General Utilities
    // ==========================================================================

    pub async fn get_blockchain_params(&self) -> Result<BlockchainParams, CoreError> {
        self.call_as("getblockchainparams", vec![json!(false)]).await
    }

    /// `getblockchainparams` keyed by the display names used in the chain's
    /// params file (`anyone-can-connect`, ...).
    pub async fn get_blockchain_params_display(&self) -> Result<Map<String, Value>, CoreError> {
        self.call_as("getblockchainparams", vec![json!(true)]).await
    }

    pub async fn get_runtime_params(&self) -> Result<RuntimeParams, CoreError> {
        self.call_as("getruntimeparams", Vec::new()).await
    }

    pub async fn set_runtime_param(
        &self,
        param: RuntimeParam,
        value: impl Into<Value>,
    ) -> Result<Value, CoreError> {
        self.call("setruntimeparam", vec![json!(param.as_str()), value.into()])
            .await
    }

    pub async fn get_info(&self) -> Result<Info, CoreError> {
        self.call_as("getinfo", Vec::new()).await
    }

    pub async fn get_init_status(&self) -> Result<InitStatus, CoreError> {
        self.call_as("getinitstatus", Vec::new()).await
    }

    /// Help text for `command`, or the command index when `None`.
    pub async fn help(&self, command: Option<&str>) -> Result<String, CoreError> {
        let params = command.map(|c| vec![json!(c)]).unwrap_or_default();
        self.call_as("help", params).await
    }

    pub async fn stop(&self) -> Result<String, CoreError> {
        self.call_as("stop", Vec::new()).await
    }

    // ==========================================================================
    // Wallet Addresses
    // ==========================================================================

    pub async fn add_multisig_address(
        &self,
        n_required: u32,
        keys: &[&str],
    ) -> Result<Address, CoreError> {
        self.call_as("addmultisigaddress", vec![json!(n_required), json!(keys)])
            .await
    }

    pub async fn get_addresses(&self) -> Result<Vec<Address>, CoreError> {
        self.call_as("getaddresses", vec![json!(false)]).await
    }

    pub async fn get_addresses_verbose(&self) -> Result<Vec<AddressInfoVerbose>, CoreError> {
        self.call_as("getaddresses", vec![json!(true)]).await
    }

    pub async fn get_new_address(&self) -> Result<Address, CoreError> {
        self.call_as("getnewaddress", Vec::new()).await
    }

    /// Add watch-only addresses (or full pubkeys) to the wallet.
    pub async fn import_address(
        &self,
        addresses: &[&str],
        label: &str,
        rescan: bool,
    ) -> Result<Value, CoreError> {
        self.call(
            "importaddress",
            vec![json!(comma_list(addresses)), json!(label), json!(rescan)],
        )
        .await
    }

    /// Wallet addresses, filtered to `addresses` unless it is empty.
    pub async fn list_addresses(&self, addresses: &[&str]) -> Result<Vec<AddressInfo>, CoreError> {
        self.call_as("listaddresses", vec![list_or_wildcard(addresses), json!(false)])
            .await
    }

    // ==========================================================================
    // Non-wallet Addresses
    // ==========================================================================

    pub async fn create_keypairs(&self, count: u32) -> Result<Vec<KeyPair>, CoreError> {
        self.call_as("createkeypairs", vec![json!(count)]).await
    }

    pub async fn create_multisig(&self, n_required: u32, keys: &[&str]) -> Result<P2sh, CoreError> {
        self.call_as("createmultisig", vec![json!(n_required), json!(keys)])
            .await
    }

    pub async fn validate_address(&self, address: &str) -> Result<AddressValidation, CoreError> {
        self.call_as("validateaddress", vec![json!(address)]).await
    }

    // ==========================================================================
    // Permissions
    // ==========================================================================

    /// Grant `permissions` (comma-separated, e.g. `"connect,send"` or
    /// `"asset1.issue"`) to `addresses`. Returns the txid.
    pub async fn grant(
        &self,
        addresses: &[&str],
        permissions: &str,
        options: &GrantOptions,
    ) -> Result<String, CoreError> {
        let mut params = vec![json!(comma_list(addresses)), json!(permissions)];
        params.extend(options.to_params());
        self.call_as("grant", params).await
    }

    pub async fn grant_from(
        &self,
        from_address: &str,
        to_addresses: &[&str],
        permissions: &str,
        options: &GrantOptions,
    ) -> Result<String, CoreError> {
        let mut params = vec![
            json!(from_address),
            json!(comma_list(to_addresses)),
            json!(permissions),
        ];
        params.extend(options.to_params());
        self.call_as("grantfrom", params).await
    }

    pub async fn revoke(
        &self,
        addresses: &[&str],
        permissions: &str,
        options: &RevokeOptions,
    ) -> Result<String, CoreError> {
        let mut params = vec![json!(comma_list(addresses)), json!(permissions)];
        params.extend(options.to_params());
        self.call_as("revoke", params).await
    }

    pub async fn revoke_from(
        &self,
        from_address: &str,
        to_addresses: &[&str],
        permissions: &str,
        options: &RevokeOptions,
    ) -> Result<String, CoreError> {
        let mut params = vec![
            json!(from_address),
            json!(comma_list(to_addresses)),
            json!(permissions),
        ];
        params.extend(options.to_params());
        self.call_as("revokefrom", params).await
    }

    /// Permission entries matching the filters; empty slices match all.
    pub async fn list_permissions(
        &self,
        permissions: &[&str],
        addresses: &[&str],
        verbose: bool,
    ) -> Result<Vec<Value>, CoreError> {
        self.call_as(
            "listpermissions",
            vec![
                list_or_wildcard(permissions),
                list_or_wildcard(addresses),
                json!(verbose),
            ],
        )
        .await
    }

    pub async fn verify_permission(
        &self,
        address: &str,
        permission: &str,
    ) -> Result<bool, CoreError> {
        self.call_as("verifypermission", vec![json!(address), json!(permission)])
            .await
    }

    // ==========================================================================
    // Chain Queries
    // ==========================================================================

    pub async fn get_block_hash(&self, height: u64) -> Result<String, CoreError> {
        self.call_as("getblockhash", vec![json!(height)]).await
    }

    /// Block by hash or height string. `verbosity` follows the node's
    /// 0-4 scale; 0 yields the hex-encoded block as a JSON string.
    pub async fn get_block(&self, hash_or_height: &str, verbosity: u8) -> Result<Value, CoreError> {
        self.call("getblock", vec![json!(hash_or_height), json!(verbosity)])
            .await
    }

    pub async fn get_raw_mempool(&self) -> Result<Vec<String>, CoreError> {
        self.call_as("getrawmempool", Vec::new()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::rpc::mock::MockTransport;
    use crate::types::Permission;

    fn client_with_results(results: Vec<Value>) -> (Client, Arc<MockTransport>) {
        let mock = Arc::new(MockTransport::with_results(results));
        (Client::with_transport(mock.clone()), mock)
    }

    #[test]
    fn grant_options_default_to_no_trailing_params() {
        assert!(GrantOptions::default().to_params().is_empty());
    }

    #[test]
    fn grant_options_fill_gaps_with_defaults() {
        let options = GrantOptions {
            comment: Some("Test".into()),
            ..GrantOptions::default()
        };
        assert_eq!(
            options.to_params(),
            vec![json!(0), json!(0), json!(4294967295u64), json!("Test")]
        );
    }

    #[test]
    fn revoke_options_keep_amount_only() {
        let options = RevokeOptions {
            native_amount: Some(0.5),
            ..RevokeOptions::default()
        };
        assert_eq!(options.to_params(), vec![json!(0.5)]);
    }

    #[tokio::test]
    async fn help_without_command_sends_no_params() {
        let (client, mock) = client_with_results(vec![json!("== Blockchain ==")]);
        let text = client.help(None).await.unwrap();
        assert_eq!(text, "== Blockchain ==");
        assert_eq!(mock.last_request()["params"], json!([]));
    }

    #[tokio::test]
    async fn help_with_command_passes_it_through() {
        let (client, mock) = client_with_results(vec![json!("grant \"address(es)\" ...")]);
        client.help(Some("grant")).await.unwrap();
        let sent = mock.last_request();
        assert_eq!(sent["method"], json!("help"));
        assert_eq!(sent["params"], json!(["grant"]));
    }

    #[tokio::test]
    async fn grant_joins_addresses_and_options() {
        let (client, mock) = client_with_results(vec![json!("txid-1")]);
        let permissions = comma_list([Permission::Connect, Permission::Send]);
        let txid = client
            .grant(
                &["1Addr", "1Other"],
                &permissions,
                &GrantOptions {
                    native_amount: Some(0.0),
                    start_block: Some(0),
                    end_block: Some(100),
                    comment: Some("Test".into()),
                    comment_to: Some("Test2".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(txid, "txid-1");
        assert_eq!(
            mock.last_request()["params"],
            json!(["1Addr,1Other", "connect,send", 0.0, 0, 100, "Test", "Test2"])
        );
    }

    #[tokio::test]
    async fn grant_from_puts_source_address_first() {
        let (client, mock) = client_with_results(vec![json!("txid-2")]);
        client
            .grant_from("1Admin", &["1Addr"], "mine", &GrantOptions::default())
            .await
            .unwrap();
        let sent = mock.last_request();
        assert_eq!(sent["method"], json!("grantfrom"));
        assert_eq!(sent["params"], json!(["1Admin", "1Addr", "mine"]));
    }

    #[tokio::test]
    async fn revoke_sends_comment_with_default_amount() {
        let (client, mock) = client_with_results(vec![json!("txid-3")]);
        client
            .revoke(
                &["1Addr"],
                "send",
                &RevokeOptions {
                    comment: Some("bye".into()),
                    ..RevokeOptions::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(
            mock.last_request()["params"],
            json!(["1Addr", "send", 0, "bye"])
        );
    }

    #[tokio::test]
    async fn list_permissions_uses_wildcards_for_empty_filters() {
        let (client, mock) = client_with_results(vec![json!([])]);
        let entries = client.list_permissions(&[], &["1Addr"], false).await.unwrap();
        assert!(entries.is_empty());
        assert_eq!(
            mock.last_request()["params"],
            json!(["*", "1Addr", false])
        );
    }

    #[tokio::test]
    async fn create_keypairs_decodes_pairs() {
        let (client, mock) = client_with_results(vec![json!([
            {"address": "1A", "pubkey": "02ab", "privkey": "Vk"}
        ])]);
        let pairs = client.create_keypairs(1).await.unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].pub_key, "02ab");
        assert_eq!(mock.last_request()["params"], json!([1]));
    }

    #[tokio::test]
    async fn blockchain_params_request_machine_names() {
        let (client, mock) = client_with_results(vec![
            json!({"chainname": "chain1", "anyonecanconnect": true}),
            json!({"chain-name": "chain1"}),
        ]);
        let params = client.get_blockchain_params().await.unwrap();
        assert_eq!(params.chain_name, "chain1");
        assert!(params.anyone_can_connect);

        let display = client.get_blockchain_params_display().await.unwrap();
        assert_eq!(display["chain-name"], json!("chain1"));

        let requests = mock.requests();
        assert_eq!(requests[0]["params"], json!([false]));
        assert_eq!(requests[1]["params"], json!([true]));
    }

    #[tokio::test]
    async fn set_runtime_param_sends_name_and_value() {
        let (client, mock) = client_with_results(vec![Value::Null]);
        client
            .set_runtime_param(RuntimeParam::MaxShownData, 1024)
            .await
            .unwrap();
        assert_eq!(
            mock.last_request()["params"],
            json!(["maxshowndata", 1024])
        );
    }

    #[tokio::test]
    async fn verify_permission_decodes_bool() {
        let (client, _) = client_with_results(vec![json!(true)]);
        assert!(client.verify_permission("1Addr", "admin").await.unwrap());
    }

    #[tokio::test]
    async fn wrapper_surfaces_decode_error() {
        let (client, _) = client_with_results(vec![json!({"unexpected": true})]);
        let err = client.get_new_address().await.unwrap_err();
        assert!(matches!(err, CoreError::Decode { ref method, .. } if method == "getnewaddress"));
    }
}
