//! Typed results for the wrapper methods on [`Client`](crate::Client).
//!
//! Structs default missing fields so older or newer node versions that add
//! or drop a key still decode. Anything not modelled here is available
//! through [`Client::call`](crate::Client::call) as raw JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

pub type Address = String;
pub type PubKey = String;
pub type PrivKey = String;

// ==============================================================================
// General Utilities
// ==============================================================================

/// Chain parameters from `getblockchainparams` (machine-readable names).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BlockchainParams {
    #[serde(rename = "chainprotocol")]
    pub chain_protocol: String,
    #[serde(rename = "chaindescription")]
    pub chain_description: String,
    #[serde(rename = "rootstreamname")]
    pub root_stream_name: String,
    #[serde(rename = "rootstreamopen")]
    pub root_stream_open: bool,
    #[serde(rename = "chainistestnet")]
    pub chain_is_testnet: bool,
    #[serde(rename = "targetblocktime")]
    pub target_block_time: i64,
    #[serde(rename = "maximumblocksize")]
    pub maximum_block_size: i64,
    #[serde(rename = "maximumchunksize")]
    pub maximum_chunk_size: i64,
    #[serde(rename = "maximumchunkcount")]
    pub maximum_chunk_count: i64,
    #[serde(rename = "defaultnetworkport")]
    pub default_network_port: u16,
    #[serde(rename = "defaultrpcport")]
    pub default_rpc_port: u16,
    #[serde(rename = "anyonecanconnect")]
    pub anyone_can_connect: bool,
    #[serde(rename = "anyonecansend")]
    pub anyone_can_send: bool,
    #[serde(rename = "anyonecanreceive")]
    pub anyone_can_receive: bool,
    #[serde(rename = "anyonecanreceiveempty")]
    pub anyone_can_receive_empty: bool,
    #[serde(rename = "anyonecancreate")]
    pub anyone_can_create: bool,
    #[serde(rename = "anyonecanissue")]
    pub anyone_can_issue: bool,
    #[serde(rename = "anyonecanmine")]
    pub anyone_can_mine: bool,
    #[serde(rename = "anyonecanactivate")]
    pub anyone_can_activate: bool,
    #[serde(rename = "anyonecanadmin")]
    pub anyone_can_admin: bool,
    #[serde(rename = "supportminerprecheck")]
    pub support_miner_precheck: bool,
    #[serde(rename = "allowarbitraryoutputs")]
    pub allow_arbitrary_outputs: bool,
    #[serde(rename = "allowp2shoutputs")]
    pub allow_p2sh_outputs: bool,
    #[serde(rename = "allowmultisigoutputs")]
    pub allow_multisig_outputs: bool,
    #[serde(rename = "setupfirstblocks")]
    pub setup_first_blocks: i64,
    #[serde(rename = "miningdiversity")]
    pub mining_diversity: f64,
    #[serde(rename = "adminconsensusupgrade")]
    pub admin_consensus_upgrade: f64,
    #[serde(rename = "adminconsensustxfilter")]
    pub admin_consensus_txfilter: f64,
    #[serde(rename = "adminconsensusadmin")]
    pub admin_consensus_admin: f64,
    #[serde(rename = "adminconsensusactivate")]
    pub admin_consensus_activate: f64,
    #[serde(rename = "adminconsensusmine")]
    pub admin_consensus_mine: f64,
    #[serde(rename = "adminconsensuscreate")]
    pub admin_consensus_create: f64,
    #[serde(rename = "adminconsensusissue")]
    pub admin_consensus_issue: f64,
    #[serde(rename = "lockadminminerounds")]
    pub lock_admin_mine_rounds: i64,
    #[serde(rename = "miningrequirespeers")]
    pub mining_requires_peers: bool,
    #[serde(rename = "mineemptyrounds")]
    pub mine_empty_rounds: f64,
    #[serde(rename = "miningturnover")]
    pub mining_turnover: f64,
    #[serde(rename = "firstblockreward")]
    pub first_block_reward: i64,
    #[serde(rename = "initialblockreward")]
    pub initial_block_reward: i64,
    #[serde(rename = "rewardhalvinginterval")]
    pub reward_halving_interval: i64,
    #[serde(rename = "rewardspendabledelay")]
    pub reward_spendable_delay: i64,
    #[serde(rename = "minimumperoutput")]
    pub minimum_per_output: i64,
    #[serde(rename = "maximumperoutput")]
    pub maximum_per_output: i64,
    #[serde(rename = "minimumoffchainfee")]
    pub minimum_offchain_fee: i64,
    #[serde(rename = "minimumrelayfee")]
    pub minimum_relay_fee: i64,
    #[serde(rename = "nativecurrencymultiple")]
    pub native_currency_multiple: i64,
    #[serde(rename = "skippowcheck")]
    pub skip_pow_check: bool,
    #[serde(rename = "powminimumbits")]
    pub pow_minimum_bits: i64,
    #[serde(rename = "targetadjustfreq")]
    pub target_adjust_freq: i64,
    #[serde(rename = "allowmindifficultyblocks")]
    pub allow_min_difficulty_blocks: bool,
    #[serde(rename = "onlyacceptstdtxs")]
    pub only_accept_std_txs: bool,
    #[serde(rename = "maxstdtxsize")]
    pub max_std_tx_size: i64,
    #[serde(rename = "maxstdopreturnscount")]
    pub max_std_op_returns_count: i64,
    #[serde(rename = "maxstdopreturnsize")]
    pub max_std_op_return_size: i64,
    #[serde(rename = "maxstdopdropscount")]
    pub max_std_op_drops_count: i64,
    #[serde(rename = "maxstdelementsize")]
    pub max_std_element_size: i64,
    #[serde(rename = "chainname")]
    pub chain_name: String,
    #[serde(rename = "protocolversion")]
    pub protocol_version: i64,
    #[serde(rename = "networkmessagestart")]
    pub network_message_start: String,
    #[serde(rename = "addresspubkeyhashversion")]
    pub address_pubkeyhash_version: String,
    #[serde(rename = "addressscripthashversion")]
    pub address_scripthash_version: String,
    #[serde(rename = "privatekeyversion")]
    pub private_key_version: String,
    #[serde(rename = "addresschecksumvalue")]
    pub address_checksum_value: String,
    #[serde(rename = "genesispubkey")]
    pub genesis_pubkey: String,
    #[serde(rename = "genesisversion")]
    pub genesis_version: i64,
    #[serde(rename = "genesistimestamp")]
    pub genesis_timestamp: i64,
    #[serde(rename = "genesisnbits")]
    pub genesis_nbits: i64,
    #[serde(rename = "genesisnonce")]
    pub genesis_nonce: i64,
    #[serde(rename = "genesispubkeyhash")]
    pub genesis_pubkey_hash: String,
    #[serde(rename = "genesishash")]
    pub genesis_hash: String,
    #[serde(rename = "chainparamshash")]
    pub chain_params_hash: String,
}

/// Runtime parameters from `getruntimeparams`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuntimeParams {
    pub port: u16,
    pub reindex: bool,
    pub rescan: bool,
    pub txindex: bool,
    #[serde(rename = "autocombineminconf")]
    pub autocombine_min_conf: i64,
    #[serde(rename = "autocombinemininputs")]
    pub autocombine_min_inputs: i64,
    #[serde(rename = "autocombinemaxinputs")]
    pub autocombine_max_inputs: i64,
    #[serde(rename = "autocombinedelay")]
    pub autocombine_delay: i64,
    #[serde(rename = "autocombinesuspend")]
    pub autocombine_suspend: i64,
    #[serde(rename = "autosubscribe")]
    pub auto_subscribe: String,
    #[serde(rename = "handshakelocal")]
    pub handshake_local: String,
    #[serde(rename = "bantx")]
    pub ban_tx: String,
    #[serde(rename = "lockblock")]
    pub lock_block: String,
    #[serde(rename = "hideknownopdrops")]
    pub hide_known_op_drops: bool,
    #[serde(rename = "maxshowndata")]
    pub max_shown_data: i64,
    #[serde(rename = "maxqueryscanitems")]
    pub max_query_scan_items: i64,
    #[serde(rename = "v1apicompatible")]
    pub v1_api_compatible: bool,
    #[serde(rename = "miningrequirespeers")]
    pub mining_requires_peers: bool,
    #[serde(rename = "mineemptyrounds")]
    pub mine_empty_rounds: f64,
    #[serde(rename = "miningturnover")]
    pub mining_turnover: f64,
    #[serde(rename = "lockadminminerounds")]
    pub lock_admin_mine_rounds: i64,
    pub gen: bool,
    #[serde(rename = "genproclimit")]
    pub gen_proc_limit: i64,
    #[serde(rename = "lockinlinemetadata")]
    pub lock_inline_metadata: bool,
    #[serde(rename = "acceptfiltertimeout")]
    pub accept_filter_timeout: i64,
    #[serde(rename = "sendfiltertimeout")]
    pub send_filter_timeout: i64,
}

/// Parameters that `setruntimeparam` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeParam {
    AcceptFilterTimeout,
    AutoSubscribe,
    BanTx,
    HandshakeLocal,
    HideKnownOpDrops,
    LockAdminMineRounds,
    LockBlock,
    LockInlineMetadata,
    MaxShownData,
    MaxQueryScanItems,
    MineEmptyRounds,
    MiningRequiresPeers,
    MiningTurnover,
    SendFilterTimeout,
}

impl RuntimeParam {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AcceptFilterTimeout => "acceptfiltertimeout",
            Self::AutoSubscribe => "autosubscribe",
            Self::BanTx => "bantx",
            Self::HandshakeLocal => "handshakelocal",
            Self::HideKnownOpDrops => "hideknownopdrops",
            Self::LockAdminMineRounds => "lockadminminerounds",
            Self::LockBlock => "lockblock",
            Self::LockInlineMetadata => "lockinlinemetadata",
            Self::MaxShownData => "maxshowndata",
            Self::MaxQueryScanItems => "maxqueryscanitems",
            Self::MineEmptyRounds => "mineemptyrounds",
            Self::MiningRequiresPeers => "miningrequirespeers",
            Self::MiningTurnover => "miningturnover",
            Self::SendFilterTimeout => "sendfiltertimeout",
        }
    }
}

impl fmt::Display for RuntimeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node summary from `getinfo`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Info {
    pub version: String,
    #[serde(rename = "nodeversion")]
    pub node_version: i64,
    pub edition: String,
    #[serde(rename = "protocolversion")]
    pub protocol_version: i64,
    #[serde(rename = "chainname")]
    pub chain_name: String,
    pub description: String,
    pub protocol: String,
    pub port: u16,
    #[serde(rename = "setupblocks")]
    pub setup_blocks: i64,
    #[serde(rename = "nodeaddress")]
    pub node_address: String,
    #[serde(rename = "burnaddress")]
    pub burn_address: Address,
    #[serde(rename = "incomingpaused")]
    pub incoming_paused: bool,
    #[serde(rename = "miningpaused")]
    pub mining_paused: bool,
    #[serde(rename = "offchainpaused")]
    pub offchain_paused: bool,
    #[serde(rename = "walletversion")]
    pub wallet_version: i64,
    pub balance: f64,
    #[serde(rename = "walletdbversion")]
    pub wallet_db_version: i64,
    pub reindex: bool,
    pub blocks: u64,
    #[serde(rename = "chainrewards")]
    pub chain_rewards: f64,
    pub streams: u64,
    #[serde(rename = "timeoffset")]
    pub time_offset: i64,
    pub connections: u64,
    pub proxy: String,
    pub difficulty: f64,
    pub testnet: bool,
    #[serde(rename = "keypoololdest")]
    pub keypool_oldest: i64,
    #[serde(rename = "keypoolsize")]
    pub keypool_size: i64,
    #[serde(rename = "paytxfee")]
    pub pay_tx_fee: f64,
    #[serde(rename = "relayfee")]
    pub relay_fee: f64,
    pub errors: String,
}

/// Result of `getinitstatus`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InitStatus {
    pub version: String,
    #[serde(rename = "nodeversion")]
    pub node_version: i64,
    pub initialized: bool,
}

// ==============================================================================
// Addresses
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AddressInfo {
    pub address: Address,
    #[serde(rename = "ismine")]
    pub is_mine: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AddressInfoVerbose {
    pub address: Address,
    #[serde(rename = "ismine")]
    pub is_mine: bool,
    #[serde(rename = "iswatchonly")]
    pub is_watch_only: bool,
    #[serde(rename = "isscript")]
    pub is_script: bool,
    #[serde(rename = "pubkey")]
    pub pub_key: Option<PubKey>,
    #[serde(rename = "iscompressed")]
    pub is_compressed: Option<bool>,
    pub account: Option<String>,
    pub synchronized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyPair {
    pub address: Address,
    #[serde(rename = "pubkey")]
    pub pub_key: PubKey,
    #[serde(rename = "privkey")]
    pub priv_key: PrivKey,
}

/// Result of `validateaddress`. Fields beyond these depend on the address
/// kind and are left to raw calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AddressValidation {
    #[serde(rename = "isvalid")]
    pub is_valid: bool,
    pub address: Option<Address>,
    #[serde(rename = "ismine")]
    pub is_mine: bool,
}

/// Pay-to-script-hash address from `createmultisig`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct P2sh {
    pub address: Address,
    #[serde(rename = "redeemScript")]
    pub redeem_script: String,
}

// ==============================================================================
// Permissions
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Connect,
    Send,
    Receive,
    Issue,
    Mine,
    Admin,
    Activate,
    Create,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Send => "send",
            Self::Receive => "receive",
            Self::Issue => "issue",
            Self::Mine => "mine",
            Self::Admin => "admin",
            Self::Activate => "activate",
            Self::Create => "create",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A permission scoped to an asset or stream, rendered as
/// `identifier.permission` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityPermission {
    pub identifier: String,
    pub permission: Permission,
}

impl fmt::Display for EntityPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.identifier, self.permission)
    }
}

/// Join items into the comma-separated list format the node expects for
/// address and permission arguments.
pub fn comma_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
