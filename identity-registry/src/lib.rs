#![no_std]
#![allow(clippy::too_many_arguments)]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod identity_registry_proxy;
pub mod storage;
pub mod structs;
pub mod utils;
pub mod views;

use structs::{DocumentHash, IdentityData, TextField};

/// Identity registry: one identity record per account, keyed by the account address.
///
/// Create, modify and remove act on the caller's own record. The validity flag is
/// administrative and can only be set by the contract owner.
#[multiversx_sc::contract]
pub trait IdentityRegistry:
    storage::StorageModule + events::EventsModule + utils::UtilsModule + views::ViewsModule
{
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Stores a new record owned by the caller. The record starts out invalid.
    #[endpoint(createIdentity)]
    fn create_identity(
        &self,
        id: TextField<Self::Api>,
        name: TextField<Self::Api>,
        gender: u8,
        birthday: TextField<Self::Api>,
        nationality: TextField<Self::Api>,
        province: TextField<Self::Api>,
        city: TextField<Self::Api>,
        document_hashes: ManagedVec<Self::Api, DocumentHash<Self::Api>>,
    ) {
        let caller = self.blockchain().get_caller();
        self.require_no_identity(&caller);

        let identity = IdentityData {
            owner: caller.clone(),
            id,
            name,
            gender,
            birthday,
            nationality,
            province,
            city,
            document_hashes,
        };

        self.identity_data(&caller).set(&identity);
        self.identity_owners().insert(caller.clone());

        self.identity_created_event(&caller);
    }

    /// Replaces every field of the caller's record. Owner and validity are kept.
    #[endpoint(modifyIdentity)]
    fn modify_identity(
        &self,
        id: TextField<Self::Api>,
        name: TextField<Self::Api>,
        gender: u8,
        birthday: TextField<Self::Api>,
        nationality: TextField<Self::Api>,
        province: TextField<Self::Api>,
        city: TextField<Self::Api>,
        document_hashes: ManagedVec<Self::Api, DocumentHash<Self::Api>>,
    ) {
        let caller = self.blockchain().get_caller();
        self.require_identity_exists(&caller);

        self.identity_data(&caller).update(|identity| {
            identity.id = id;
            identity.name = name;
            identity.gender = gender;
            identity.birthday = birthday;
            identity.nationality = nationality;
            identity.province = province;
            identity.city = city;
            identity.document_hashes = document_hashes;
        });

        self.identity_modified_event(&caller);
    }

    /// Deletes the caller's record together with its validity flag.
    #[endpoint(removeIdentity)]
    fn remove_identity(&self) {
        let caller = self.blockchain().get_caller();
        self.require_identity_exists(&caller);

        self.identity_data(&caller).clear();
        self.identity_validity(&caller).clear();
        self.identity_owners().swap_remove(&caller);

        self.identity_removed_event(&caller);
    }

    #[only_owner]
    #[endpoint(setIdentityValidity)]
    fn set_identity_validity(&self, account: ManagedAddress, valid: bool) {
        self.require_identity_exists(&account);

        self.identity_validity(&account).set(valid);

        self.identity_validity_changed_event(&account, valid);
    }
}
