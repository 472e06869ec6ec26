use crate::errors::*;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait UtilsModule: crate::storage::StorageModule {
    fn require_identity_exists(&self, owner: &ManagedAddress) {
        require!(!self.identity_data(owner).is_empty(), ERR_IDENTITY_NOT_FOUND);
    }

    fn require_no_identity(&self, owner: &ManagedAddress) {
        require!(
            self.identity_data(owner).is_empty(),
            ERR_IDENTITY_ALREADY_EXISTS
        );
    }
}
