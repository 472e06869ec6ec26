use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use registry_codec::{parse_hash, EncodingError};

use crate::IdentityProfile;

/// Identity registry interactor CLI
#[derive(Default, PartialEq, Eq, Debug, Parser)]
#[command(version, about)]
#[command(propagate_version = true)]
pub struct InteractCli {
    #[command(subcommand)]
    pub command: Option<InteractCliCommand>,
}

/// Identity registry interactor CLI commands
#[derive(Clone, PartialEq, Eq, Debug, Subcommand)]
pub enum InteractCliCommand {
    #[command(about = "Deploy the registry and remember its address for the configured gateway")]
    Deploy(DeployArgs),
    #[command(about = "Upgrade the deployed registry")]
    Upgrade,
    #[command(about = "Create the wallet's identity")]
    Create(IdentityArgs),
    #[command(about = "Replace every field of the wallet's identity")]
    Modify(IdentityArgs),
    #[command(about = "Remove the wallet's identity")]
    Remove,
    #[command(about = "Set the validity flag of an account's identity (owner only)")]
    SetValidity(ValidityArgs),
    #[command(about = "Query the validity flag of an account's identity")]
    Valid(AccountArgs),
    #[command(about = "Query whether an account has an identity")]
    Exists(AccountArgs),
    #[command(about = "Query the record address of an account, zero if none")]
    Address(AccountArgs),
    #[command(about = "Query the number of live identities")]
    Count,
    #[command(about = "Query and decode an account's identity")]
    Data(AccountArgs),
    #[command(about = "List every account that owns an identity")]
    Owners,
    #[command(about = "Print the raw data field of a registry transaction, without sending it")]
    CallData(CallDataArgs),
    #[command(about = "Print the 0x-prefixed hex of a UTF-8 text")]
    EncodeText(TextArgs),
    #[command(about = "Decode hex, padded or not, back to UTF-8 text")]
    DecodeText(HexArgs),
}

#[derive(Default, Clone, PartialEq, Eq, Debug, Args)]
pub struct DeployArgs {
    /// Deploy a new registry even if one is already recorded for this gateway
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, PartialEq, Eq, Debug, Args)]
pub struct CallDataArgs {
    /// ABI produced by `sc-meta all build`
    #[arg(long, default_value = "../output/identity-registry.abi.json")]
    pub abi: PathBuf,
    #[command(subcommand)]
    pub call: CallDataCommand,
}

/// Registry endpoints that can be encoded as raw call data
#[derive(Clone, PartialEq, Eq, Debug, Subcommand)]
pub enum CallDataCommand {
    Create(IdentityArgs),
    Modify(IdentityArgs),
    Remove,
    SetValidity(ValidityArgs),
}

#[derive(Default, Clone, PartialEq, Eq, Debug, Args)]
pub struct IdentityArgs {
    /// National ID or other identifier
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value_t = 0)]
    pub gender: u8,
    #[arg(long)]
    pub birthday: String,
    #[arg(long)]
    pub nationality: String,
    #[arg(long)]
    pub province: String,
    #[arg(long)]
    pub city: String,
    /// 32-byte hex hash of a supporting document, repeatable
    #[arg(long = "document-hash")]
    pub document_hashes: Vec<String>,
}

impl IdentityArgs {
    pub fn to_profile(&self) -> Result<IdentityProfile, EncodingError> {
        let document_hashes = self
            .document_hashes
            .iter()
            .map(|hash| parse_hash(hash))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(IdentityProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            gender: self.gender,
            birthday: self.birthday.clone(),
            nationality: self.nationality.clone(),
            province: self.province.clone(),
            city: self.city.clone(),
            document_hashes,
        })
    }
}

#[derive(Default, Clone, PartialEq, Eq, Debug, Args)]
pub struct AccountArgs {
    /// Bech32 address of the account
    #[arg(long)]
    pub account: String,
}

#[derive(Default, Clone, PartialEq, Eq, Debug, Args)]
pub struct ValidityArgs {
    /// Bech32 address of the account
    #[arg(long)]
    pub account: String,
    #[arg(long, action = clap::ArgAction::Set)]
    pub valid: bool,
}

#[derive(Default, Clone, PartialEq, Eq, Debug, Args)]
pub struct TextArgs {
    pub text: String,
}

#[derive(Default, Clone, PartialEq, Eq, Debug, Args)]
pub struct HexArgs {
    pub hex: String,
}
