use crate::structs::IdentityData;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    #[storage_mapper("identityData")]
    fn identity_data(&self, owner: &ManagedAddress) -> SingleValueMapper<IdentityData<Self::Api>>;

    /// Kept apart from the record so that modifying it never resets the flag.
    #[storage_mapper("identityValidity")]
    fn identity_validity(&self, owner: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("identityOwners")]
    fn identity_owners(&self) -> UnorderedSetMapper<ManagedAddress>;
}
