use multiversx_sc_scenario::imports::*;

use identity_registry::errors::{ERR_IDENTITY_ALREADY_EXISTS, ERR_IDENTITY_NOT_FOUND};
use identity_registry::identity_registry_proxy::{self, IdentityData};
use registry_codec::{decode_field, encode_field, parse_hash};

const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
const USER_ADDRESS: TestAddress = TestAddress::new("user");
const OTHER_ADDRESS: TestAddress = TestAddress::new("other");
const REGISTRY_ADDRESS: TestSCAddress = TestSCAddress::new("registry");
const CODE_PATH: MxscPath = MxscPath::new("output/identity-registry.mxsc.json");

const ERR_ONLY_OWNER: &str = "Endpoint can only be called by owner";

struct Profile {
    id: &'static str,
    name: &'static str,
    gender: u8,
    birthday: &'static str,
    nationality: &'static str,
    province: &'static str,
    city: &'static str,
    document_hash: &'static str,
}

const ROLAND: Profile = Profile {
    id: "184738199010200917",
    name: "罗兰",
    gender: 0,
    birthday: "1990-10-20",
    nationality: "中国",
    province: "上海",
    city: "宝山",
    document_hash: "0x8938398938398938398938398938398938398938398938398938398938398938",
};

const ALLEN: Profile = Profile {
    id: "2000000000000000",
    name: "Allen",
    gender: 1,
    birthday: "1995-11-20",
    nationality: "英国",
    province: "伦敦",
    city: "伦敦",
    document_hash: "0x0fa2398938398938398938398938398938398938398938398938398938398938",
};

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.set_current_dir_from_workspace("identity-registry");
    blockchain.register_contract(CODE_PATH, identity_registry::ContractBuilder);
    blockchain
}

fn field(text: &str) -> ManagedByteArray<StaticApi, 32> {
    ManagedByteArray::new_from_bytes(&encode_field(text).unwrap())
}

fn hashes(hex: &str) -> ManagedVec<StaticApi, ManagedByteArray<StaticApi, 32>> {
    let mut hashes = ManagedVec::new();
    hashes.push(ManagedByteArray::new_from_bytes(&parse_hash(hex).unwrap()));
    hashes
}

fn managed(address: TestAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

fn text(field: &ManagedByteArray<StaticApi, 32>) -> String {
    decode_field(&field.to_byte_array()).unwrap()
}

fn assert_profile(data: &IdentityData<StaticApi>, owner: TestAddress, profile: &Profile) {
    assert_eq!(data.owner, managed(owner));
    assert_eq!(text(&data.id), profile.id);
    assert_eq!(text(&data.name), profile.name);
    assert_eq!(data.gender, profile.gender);
    assert_eq!(text(&data.birthday), profile.birthday);
    assert_eq!(text(&data.nationality), profile.nationality);
    assert_eq!(text(&data.province), profile.province);
    assert_eq!(text(&data.city), profile.city);
    assert_eq!(data.document_hashes.len(), 1);
    assert_eq!(
        data.document_hashes.get(0).to_byte_array(),
        parse_hash(profile.document_hash).unwrap()
    );
}

struct RegistryTestState {
    world: ScenarioWorld,
}

impl RegistryTestState {
    fn new() -> Self {
        let mut world = world();

        world.account(OWNER_ADDRESS).nonce(1);
        world.account(USER_ADDRESS).nonce(1);
        world.account(OTHER_ADDRESS).nonce(1);

        let new_address = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .init()
            .code(CODE_PATH)
            .new_address(REGISTRY_ADDRESS)
            .returns(ReturnsNewAddress)
            .run();

        assert_eq!(new_address, REGISTRY_ADDRESS);

        Self { world }
    }

    fn create_identity(&mut self, from: TestAddress, profile: &Profile) {
        self.world
            .tx()
            .from(from)
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .create_identity(
                field(profile.id),
                field(profile.name),
                profile.gender,
                field(profile.birthday),
                field(profile.nationality),
                field(profile.province),
                field(profile.city),
                hashes(profile.document_hash),
            )
            .run();
    }

    fn create_identity_expect_err(&mut self, from: TestAddress, profile: &Profile, err: &str) {
        self.world
            .tx()
            .from(from)
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .create_identity(
                field(profile.id),
                field(profile.name),
                profile.gender,
                field(profile.birthday),
                field(profile.nationality),
                field(profile.province),
                field(profile.city),
                hashes(profile.document_hash),
            )
            .returns(ExpectError(4, err))
            .run();
    }

    fn modify_identity(&mut self, from: TestAddress, profile: &Profile) {
        self.world
            .tx()
            .from(from)
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .modify_identity(
                field(profile.id),
                field(profile.name),
                profile.gender,
                field(profile.birthday),
                field(profile.nationality),
                field(profile.province),
                field(profile.city),
                hashes(profile.document_hash),
            )
            .run();
    }

    fn modify_identity_expect_err(&mut self, from: TestAddress, profile: &Profile, err: &str) {
        self.world
            .tx()
            .from(from)
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .modify_identity(
                field(profile.id),
                field(profile.name),
                profile.gender,
                field(profile.birthday),
                field(profile.nationality),
                field(profile.province),
                field(profile.city),
                hashes(profile.document_hash),
            )
            .returns(ExpectError(4, err))
            .run();
    }

    fn remove_identity(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .remove_identity()
            .run();
    }

    fn remove_identity_expect_err(&mut self, from: TestAddress, err: &str) {
        self.world
            .tx()
            .from(from)
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .remove_identity()
            .returns(ExpectError(4, err))
            .run();
    }

    fn set_identity_validity(&mut self, from: TestAddress, account: TestAddress, valid: bool) {
        self.world
            .tx()
            .from(from)
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .set_identity_validity(managed(account), valid)
            .run();
    }

    fn set_identity_validity_expect_err(
        &mut self,
        from: TestAddress,
        account: TestAddress,
        valid: bool,
        err: &str,
    ) {
        self.world
            .tx()
            .from(from)
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .set_identity_validity(managed(account), valid)
            .returns(ExpectError(4, err))
            .run();
    }

    fn identity_valid(&mut self, account: TestAddress) -> bool {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .identity_valid(managed(account))
            .returns(ReturnsResultUnmanaged)
            .run()
    }

    fn identity_exists(&mut self, account: TestAddress) -> bool {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .identity_exists(managed(account))
            .returns(ReturnsResultUnmanaged)
            .run()
    }

    fn identity_address(&mut self, account: TestAddress) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .get_identity_address(managed(account))
            .returns(ReturnsResult)
            .run()
    }

    fn identity_count(&mut self) -> u64 {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .get_identity_count()
            .returns(ReturnsResultUnmanaged)
            .run()
    }

    fn identity_data(&mut self, account: TestAddress) -> IdentityData<StaticApi> {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .get_identity_data(managed(account))
            .returns(ReturnsResult)
            .run()
    }

    fn identity_owners(&mut self) -> Vec<Address> {
        self.world
            .query()
            .to(REGISTRY_ADDRESS)
            .typed(identity_registry_proxy::IdentityRegistryProxy)
            .get_identity_owners()
            .returns(ReturnsResultUnmanaged)
            .run()
            .into_vec()
    }
}

#[test]
fn identity_registry_deploy() {
    let mut state = RegistryTestState::new();

    assert_eq!(state.identity_count(), 0);
    assert!(state.identity_owners().is_empty());
}

#[test]
fn unknown_account_has_no_identity() {
    let mut state = RegistryTestState::new();

    assert!(!state.identity_exists(USER_ADDRESS));
    assert!(!state.identity_valid(USER_ADDRESS));
    assert_eq!(state.identity_address(USER_ADDRESS), ManagedAddress::zero());
}

#[test]
fn identity_registry_full_flow() {
    let mut state = RegistryTestState::new();

    // create
    state.create_identity(OWNER_ADDRESS, &ROLAND);
    assert_eq!(state.identity_count(), 1);
    let data = state.identity_data(OWNER_ADDRESS);
    assert_profile(&data, OWNER_ADDRESS, &ROLAND);

    // validity starts false, then set by the owner
    assert!(!state.identity_valid(OWNER_ADDRESS));
    state.set_identity_validity(OWNER_ADDRESS, OWNER_ADDRESS, true);
    assert!(state.identity_valid(OWNER_ADDRESS));

    assert!(state.identity_exists(OWNER_ADDRESS));
    assert_ne!(state.identity_address(OWNER_ADDRESS), ManagedAddress::zero());

    // modify replaces every field, keeps owner and validity
    assert_eq!(state.identity_count(), 1);
    state.modify_identity(OWNER_ADDRESS, &ALLEN);
    let data = state.identity_data(OWNER_ADDRESS);
    assert_profile(&data, OWNER_ADDRESS, &ALLEN);
    assert!(state.identity_valid(OWNER_ADDRESS));

    // remove
    assert_eq!(state.identity_count(), 1);
    state.remove_identity(OWNER_ADDRESS);
    assert_eq!(state.identity_address(OWNER_ADDRESS), ManagedAddress::zero());
    assert_eq!(state.identity_count(), 0);
    assert!(!state.identity_exists(OWNER_ADDRESS));
    assert!(!state.identity_exists(USER_ADDRESS));
}

#[test]
fn identity_address_is_the_owner() {
    let mut state = RegistryTestState::new();

    state.create_identity(USER_ADDRESS, &ROLAND);
    assert_eq!(state.identity_address(USER_ADDRESS), managed(USER_ADDRESS));
}

#[test]
fn create_twice_fails_and_keeps_record() {
    let mut state = RegistryTestState::new();

    state.create_identity(USER_ADDRESS, &ROLAND);
    state.create_identity_expect_err(USER_ADDRESS, &ALLEN, ERR_IDENTITY_ALREADY_EXISTS);

    assert_eq!(state.identity_count(), 1);
    let data = state.identity_data(USER_ADDRESS);
    assert_profile(&data, USER_ADDRESS, &ROLAND);
}

#[test]
fn missing_identity_operations_fail() {
    let mut state = RegistryTestState::new();

    state.modify_identity_expect_err(USER_ADDRESS, &ALLEN, ERR_IDENTITY_NOT_FOUND);
    state.remove_identity_expect_err(USER_ADDRESS, ERR_IDENTITY_NOT_FOUND);
    state.set_identity_validity_expect_err(
        OWNER_ADDRESS,
        USER_ADDRESS,
        true,
        ERR_IDENTITY_NOT_FOUND,
    );

    state
        .world
        .tx()
        .from(USER_ADDRESS)
        .to(REGISTRY_ADDRESS)
        .typed(identity_registry_proxy::IdentityRegistryProxy)
        .get_identity_data(managed(USER_ADDRESS))
        .returns(ExpectError(4, ERR_IDENTITY_NOT_FOUND))
        .run();

    assert_eq!(state.identity_count(), 0);
}

#[test]
fn only_owner_sets_validity() {
    let mut state = RegistryTestState::new();

    state.create_identity(USER_ADDRESS, &ROLAND);
    state.set_identity_validity_expect_err(USER_ADDRESS, USER_ADDRESS, true, ERR_ONLY_OWNER);
    assert!(!state.identity_valid(USER_ADDRESS));

    state.set_identity_validity(OWNER_ADDRESS, USER_ADDRESS, true);
    assert!(state.identity_valid(USER_ADDRESS));
    state.set_identity_validity(OWNER_ADDRESS, USER_ADDRESS, false);
    assert!(!state.identity_valid(USER_ADDRESS));
}

#[test]
fn records_are_per_account() {
    let mut state = RegistryTestState::new();

    state.create_identity(USER_ADDRESS, &ROLAND);
    state.create_identity(OTHER_ADDRESS, &ALLEN);
    assert_eq!(state.identity_count(), 2);

    state.set_identity_validity(OWNER_ADDRESS, OTHER_ADDRESS, true);
    assert!(!state.identity_valid(USER_ADDRESS));
    assert!(state.identity_valid(OTHER_ADDRESS));

    let data = state.identity_data(USER_ADDRESS);
    assert_profile(&data, USER_ADDRESS, &ROLAND);
    let data = state.identity_data(OTHER_ADDRESS);
    assert_profile(&data, OTHER_ADDRESS, &ALLEN);

    let owners = state.identity_owners();
    assert_eq!(owners.len(), 2);
    assert!(owners.contains(&USER_ADDRESS.to_address()));
    assert!(owners.contains(&OTHER_ADDRESS.to_address()));

    state.remove_identity(USER_ADDRESS);
    assert_eq!(state.identity_count(), 1);
    assert_eq!(state.identity_owners(), vec![OTHER_ADDRESS.to_address()]);
    assert!(state.identity_exists(OTHER_ADDRESS));
}

#[test]
fn recreated_identity_starts_invalid() {
    let mut state = RegistryTestState::new();

    state.create_identity(USER_ADDRESS, &ROLAND);
    state.set_identity_validity(OWNER_ADDRESS, USER_ADDRESS, true);
    state.remove_identity(USER_ADDRESS);
    assert!(!state.identity_valid(USER_ADDRESS));

    state.create_identity(USER_ADDRESS, &ALLEN);
    assert!(!state.identity_valid(USER_ADDRESS));
    assert_eq!(state.identity_count(), 1);
    let data = state.identity_data(USER_ADDRESS);
    assert_profile(&data, USER_ADDRESS, &ALLEN);
}
