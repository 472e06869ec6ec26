multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("identityCreated")]
    fn identity_created_event(&self, #[indexed] owner: &ManagedAddress);

    #[event("identityModified")]
    fn identity_modified_event(&self, #[indexed] owner: &ManagedAddress);

    #[event("identityRemoved")]
    fn identity_removed_event(&self, #[indexed] owner: &ManagedAddress);

    #[event("identityValidityChanged")]
    fn identity_validity_changed_event(&self, #[indexed] owner: &ManagedAddress, valid: bool);
}
