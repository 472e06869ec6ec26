pub mod cli;
pub mod config;
pub mod raw_call;

use anyhow::{anyhow, bail, ensure, Context};
use clap::Parser;
use cli::{InteractCli, InteractCliCommand};
use config::Config;
use identity_registry::identity_registry_proxy::{self, IdentityData};
use multiversx_sc_snippets::imports::*;
use registry_codec::{
    decode_field, encode_field, format_hash, hex_to_utf8, utf8_to_hex, HASH_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.toml";
const ADDRESS_LEN: usize = 32;

pub async fn identity_registry_cli() -> anyhow::Result<()> {
    env_logger::init();

    let cli = InteractCli::parse();
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(output) = run_offline(&command)? {
        println!("{output}");
        return Ok(());
    }

    let config = Config::new()?;
    let mut interact = ContractInteract::new(config).await?;

    match command {
        InteractCliCommand::Deploy(args) => {
            let address = interact.deploy(args.force).await?;
            println!("new address: {address}");
        }
        InteractCliCommand::Upgrade => interact.upgrade().await?,
        InteractCliCommand::Create(args) => {
            interact.create_identity(&args.to_profile()?).await?;
            println!("identity created");
        }
        InteractCliCommand::Modify(args) => {
            interact.modify_identity(&args.to_profile()?).await?;
            println!("identity modified");
        }
        InteractCliCommand::Remove => {
            interact.remove_identity().await?;
            println!("identity removed");
        }
        InteractCliCommand::SetValidity(args) => {
            let account = parse_account(&args.account)?;
            interact.set_identity_validity(&account, args.valid).await?;
            println!("validity set to {}", args.valid);
        }
        InteractCliCommand::Valid(args) => {
            let valid = interact.identity_valid(&parse_account(&args.account)?).await?;
            println!("Result: {valid}");
        }
        InteractCliCommand::Exists(args) => {
            let exists = interact.identity_exists(&parse_account(&args.account)?).await?;
            println!("Result: {exists}");
        }
        InteractCliCommand::Address(args) => {
            let address = interact
                .identity_address(&parse_account(&args.account)?)
                .await?;
            println!("Result: {}", address.to_bech32_default());
        }
        InteractCliCommand::Count => {
            let count = interact.identity_count().await?;
            println!("Result: {count}");
        }
        InteractCliCommand::Data(args) => {
            let record = interact.identity_data(&parse_account(&args.account)?).await?;
            record.print();
        }
        InteractCliCommand::Owners => {
            for owner in interact.identity_owners().await? {
                println!("{}", owner.to_bech32_default());
            }
        }
        InteractCliCommand::CallData(_)
        | InteractCliCommand::EncodeText(_)
        | InteractCliCommand::DecodeText(_) => {}
    }

    Ok(())
}

/// Commands that need neither a gateway nor a wallet.
fn run_offline(command: &InteractCliCommand) -> anyhow::Result<Option<String>> {
    let output = match command {
        InteractCliCommand::CallData(args) => {
            let abi = std::fs::read_to_string(&args.abi)
                .with_context(|| format!("reading {}", args.abi.display()))?;
            raw_call::call_data(&abi, &args.call)?
        }
        InteractCliCommand::EncodeText(args) => utf8_to_hex(&args.text),
        InteractCliCommand::DecodeText(args) => {
            hex_to_utf8(&args.hex).with_context(|| format!("decoding {}", args.hex))?
        }
        _ => return Ok(None),
    };
    Ok(Some(output))
}

/// Parses a bech32 account, rejecting bad checksums and non-32-byte payloads.
pub fn parse_account(account: &str) -> anyhow::Result<Bech32Address> {
    ::bech32::decode(account)
        .map_err(anyhow::Error::from)
        .and_then(|(_, data)| {
            ensure!(
                data.len() == ADDRESS_LEN,
                "decodes to {} bytes, expected {ADDRESS_LEN}",
                data.len()
            );
            Ok(())
        })
        .with_context(|| format!("invalid account {account}"))?;

    Ok(Bech32Address::from_bech32_string(account.to_owned()))
}

/// Caller-side view of an identity, with text already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityProfile {
    pub id: String,
    pub name: String,
    pub gender: u8,
    pub birthday: String,
    pub nationality: String,
    pub province: String,
    pub city: String,
    pub document_hashes: Vec<[u8; HASH_WIDTH]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub owner: Address,
    pub profile: IdentityProfile,
}

impl IdentityRecord {
    fn from_data(data: IdentityData<StaticApi>) -> anyhow::Result<Self> {
        let text = |field: &ManagedByteArray<StaticApi, 32usize>, label: &str| {
            decode_field(&field.to_byte_array()).with_context(|| format!("decoding {label}"))
        };

        let profile = IdentityProfile {
            id: text(&data.id, "id")?,
            name: text(&data.name, "name")?,
            gender: data.gender,
            birthday: text(&data.birthday, "birthday")?,
            nationality: text(&data.nationality, "nationality")?,
            province: text(&data.province, "province")?,
            city: text(&data.city, "city")?,
            document_hashes: data
                .document_hashes
                .iter()
                .map(|hash| hash.to_byte_array())
                .collect(),
        };

        Ok(IdentityRecord {
            owner: data.owner.to_address(),
            profile,
        })
    }

    fn print(&self) {
        let profile = &self.profile;
        println!("owner:       {}", self.owner.to_bech32_default());
        println!("id:          {}", profile.id);
        println!("name:        {}", profile.name);
        println!("gender:      {}", profile.gender);
        println!("birthday:    {}", profile.birthday);
        println!("nationality: {}", profile.nationality);
        println!("province:    {}", profile.province);
        println!("city:        {}", profile.city);
        for hash in &profile.document_hashes {
            println!("document:    {}", format_hash(hash));
        }
    }
}

/// Arguments shared by `createIdentity` and `modifyIdentity`, in endpoint order.
struct EncodedProfile {
    id: ManagedByteArray<StaticApi, 32usize>,
    name: ManagedByteArray<StaticApi, 32usize>,
    gender: u8,
    birthday: ManagedByteArray<StaticApi, 32usize>,
    nationality: ManagedByteArray<StaticApi, 32usize>,
    province: ManagedByteArray<StaticApi, 32usize>,
    city: ManagedByteArray<StaticApi, 32usize>,
    document_hashes: ManagedVec<StaticApi, ManagedByteArray<StaticApi, 32usize>>,
}

impl EncodedProfile {
    fn new(profile: &IdentityProfile) -> anyhow::Result<Self> {
        let field = |text: &str, label: &str| -> anyhow::Result<_> {
            let bytes = encode_field(text).with_context(|| format!("encoding {label}"))?;
            Ok(ManagedByteArray::new_from_bytes(&bytes))
        };

        let mut document_hashes = ManagedVec::new();
        for hash in &profile.document_hashes {
            document_hashes.push(ManagedByteArray::new_from_bytes(hash));
        }

        Ok(EncodedProfile {
            id: field(&profile.id, "id")?,
            name: field(&profile.name, "name")?,
            gender: profile.gender,
            birthday: field(&profile.birthday, "birthday")?,
            nationality: field(&profile.nationality, "nationality")?,
            province: field(&profile.province, "province")?,
            city: field(&profile.city, "city")?,
            document_hashes,
        })
    }
}

/// Deployed registry addresses, one per gateway.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    contracts: BTreeMap<String, Bech32Address>,
    #[serde(skip)]
    network: String,
    #[serde(skip)]
    file: Option<PathBuf>,
}

impl State {
    // Deserializes state from file
    pub fn load_state(network: &str) -> anyhow::Result<Self> {
        let mut state = if Path::new(STATE_FILE).exists() {
            let content = std::fs::read_to_string(STATE_FILE)
                .with_context(|| format!("reading {STATE_FILE}"))?;
            toml::from_str(&content).with_context(|| format!("parsing {STATE_FILE}"))?
        } else {
            Self::default()
        };

        state.network = network.to_owned();
        state.file = Some(PathBuf::from(STATE_FILE));
        Ok(state)
    }

    /// State for `network` that is never written to disk.
    pub fn in_memory(network: &str) -> Self {
        State {
            contracts: BTreeMap::new(),
            network: network.to_owned(),
            file: None,
        }
    }

    /// Fails if a registry is already recorded for this network, unless `force` is set.
    pub fn check_deployable(&self, force: bool) -> anyhow::Result<()> {
        match self.contracts.get(&self.network) {
            Some(address) if !force => bail!(
                "registry already deployed on {} at {address}, pass --force to deploy another",
                self.network
            ),
            _ => Ok(()),
        }
    }

    /// Sets the contract address
    pub fn set_address(&mut self, address: Bech32Address) {
        self.contracts.insert(self.network.clone(), address);
    }

    /// Returns the contract address
    pub fn current_address(&self) -> anyhow::Result<&Bech32Address> {
        self.contracts
            .get(&self.network)
            .ok_or_else(|| anyhow!("no known contract on {}, deploy first", self.network))
    }

    fn save(&self) -> anyhow::Result<()> {
        if let Some(file) = &self.file {
            std::fs::write(file, toml::to_string(self)?)?;
        }
        Ok(())
    }
}

impl Drop for State {
    // Serializes state to file
    fn drop(&mut self) {
        if let Err(err) = self.save() {
            eprintln!("could not save {STATE_FILE}: {err:#}");
        }
    }
}

pub struct ContractInteract {
    interactor: Interactor,
    wallet_address: Address,
    contract_code: BytesValue,
    state: State,
}

impl ContractInteract {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let mut interactor = Interactor::new(config.gateway_uri())
            .await
            .use_chain_simulator(config.use_chain_simulator());

        interactor.set_current_dir_from_workspace("identity-registry/interactor");
        let wallet_address = interactor.register_wallet(test_wallets::alice()).await;

        // Useful in the chain simulator setting
        // generate blocks until ESDTSystemSCAddress is enabled
        interactor.generate_blocks_until_all_activations().await;

        let contract_code = BytesValue::interpret_from(
            "mxsc:../output/identity-registry.mxsc.json",
            &InterpreterContext::default(),
        );

        Ok(ContractInteract {
            interactor,
            wallet_address,
            contract_code,
            state: State::load_state(config.gateway_uri())?,
        })
    }

    pub fn wallet_address(&self) -> &Address {
        &self.wallet_address
    }

    /// Deploys the registry. Refuses when this network already has one, unless `force` is set.
    pub async fn deploy(&mut self, force: bool) -> anyhow::Result<Bech32Address> {
        self.state.check_deployable(force)?;

        let new_address = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .gas(30_000_000u64)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .init()
            .code(&self.contract_code)
            .returns(ReturnsNewAddress)
            .run()
            .await;
        let new_address_bech32 = new_address.to_bech32_default();
        self.state.set_address(new_address_bech32.clone());
        Ok(new_address_bech32)
    }

    pub async fn upgrade(&mut self) -> anyhow::Result<()> {
        self.interactor
            .tx()
            .to(self.state.current_address()?)
            .from(&self.wallet_address)
            .gas(30_000_000u64)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .upgrade()
            .code(&self.contract_code)
            .code_metadata(CodeMetadata::UPGRADEABLE)
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        Ok(())
    }

    pub async fn create_identity(&mut self, profile: &IdentityProfile) -> anyhow::Result<()> {
        let args = EncodedProfile::new(profile)?;

        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address()?)
            .gas(30_000_000u64)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .create_identity(
                args.id,
                args.name,
                args.gender,
                args.birthday,
                args.nationality,
                args.province,
                args.city,
                args.document_hashes,
            )
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        Ok(())
    }

    pub async fn modify_identity(&mut self, profile: &IdentityProfile) -> anyhow::Result<()> {
        let args = EncodedProfile::new(profile)?;

        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address()?)
            .gas(30_000_000u64)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .modify_identity(
                args.id,
                args.name,
                args.gender,
                args.birthday,
                args.nationality,
                args.province,
                args.city,
                args.document_hashes,
            )
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        Ok(())
    }

    pub async fn remove_identity(&mut self) -> anyhow::Result<()> {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address()?)
            .gas(30_000_000u64)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .remove_identity()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        Ok(())
    }

    pub async fn set_identity_validity(
        &mut self,
        account: &Bech32Address,
        valid: bool,
    ) -> anyhow::Result<()> {
        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address()?)
            .gas(30_000_000u64)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .set_identity_validity(managed_account(account), valid)
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        Ok(())
    }

    /// Submits `createIdentity` and expects the registry to reject it with `message`.
    pub async fn create_identity_expect_err(
        &mut self,
        profile: &IdentityProfile,
        message: &str,
    ) -> anyhow::Result<()> {
        let args = EncodedProfile::new(profile)?;

        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(self.state.current_address()?)
            .gas(30_000_000u64)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .create_identity(
                args.id,
                args.name,
                args.gender,
                args.birthday,
                args.nationality,
                args.province,
                args.city,
                args.document_hashes,
            )
            .returns(ExpectError(4, message))
            .run()
            .await;

        Ok(())
    }

    pub async fn identity_valid(&mut self, account: &Bech32Address) -> anyhow::Result<bool> {
        let result_value = self
            .interactor
            .query()
            .to(self.state.current_address()?)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .identity_valid(managed_account(account))
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        Ok(result_value)
    }

    pub async fn identity_exists(&mut self, account: &Bech32Address) -> anyhow::Result<bool> {
        let result_value = self
            .interactor
            .query()
            .to(self.state.current_address()?)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .identity_exists(managed_account(account))
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        Ok(result_value)
    }

    pub async fn identity_address(&mut self, account: &Bech32Address) -> anyhow::Result<Address> {
        let result_value = self
            .interactor
            .query()
            .to(self.state.current_address()?)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .get_identity_address(managed_account(account))
            .returns(ReturnsResult)
            .run()
            .await;

        Ok(result_value.to_address())
    }

    pub async fn identity_count(&mut self) -> anyhow::Result<u64> {
        let result_value = self
            .interactor
            .query()
            .to(self.state.current_address()?)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .get_identity_count()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        Ok(result_value)
    }

    pub async fn identity_data(&mut self, account: &Bech32Address) -> anyhow::Result<IdentityRecord> {
        let data = self
            .interactor
            .query()
            .to(self.state.current_address()?)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .get_identity_data(managed_account(account))
            .returns(ReturnsResult)
            .run()
            .await;

        IdentityRecord::from_data(data)
    }

    pub async fn identity_owners(&mut self) -> anyhow::Result<Vec<Address>> {
        let owners = self
            .interactor
            .query()
            .to(self.state.current_address()?)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .get_identity_owners()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        Ok(owners.into_vec())
    }
}

fn managed_account(account: &Bech32Address) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(account.to_address())
}
