multiversx_sc::imports!();

use crate::structs::IdentityData;

#[multiversx_sc::module]
pub trait ViewsModule: crate::storage::StorageModule + crate::utils::UtilsModule {
    /// False for accounts without a record.
    #[view(identityValid)]
    fn identity_valid(&self, account: ManagedAddress) -> bool {
        self.identity_validity(&account).get()
    }

    #[view(identityExists)]
    fn identity_exists(&self, account: ManagedAddress) -> bool {
        !self.identity_data(&account).is_empty()
    }

    /// Storage key of the account's record, or the zero address when there is none.
    #[view(getIdentityAddress)]
    fn get_identity_address(&self, account: ManagedAddress) -> ManagedAddress {
        if self.identity_data(&account).is_empty() {
            ManagedAddress::zero()
        } else {
            account
        }
    }

    #[view(getIdentityCount)]
    fn get_identity_count(&self) -> u64 {
        self.identity_owners().len() as u64
    }

    #[view(getIdentityData)]
    fn get_identity_data(&self, account: ManagedAddress) -> IdentityData<Self::Api> {
        self.require_identity_exists(&account);
        self.identity_data(&account).get()
    }

    #[view(getIdentityOwners)]
    fn get_identity_owners(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut owners = MultiValueEncoded::new();
        for owner in self.identity_owners().iter() {
            owners.push(owner);
        }
        owners
    }
}
