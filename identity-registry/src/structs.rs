multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Width of every textual field, in bytes.
pub const TEXT_FIELD_LEN: usize = 32;

/// Width of a document hash, in bytes.
pub const DOCUMENT_HASH_LEN: usize = 32;

/// UTF-8 text, right-padded with zero bytes.
pub type TextField<M> = ManagedByteArray<M, TEXT_FIELD_LEN>;

/// Content hash of an external supporting document. Never interpreted on-chain.
pub type DocumentHash<M> = ManagedByteArray<M, DOCUMENT_HASH_LEN>;

/// On-chain identity record, one per owning account.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode)]
pub struct IdentityData<M: ManagedTypeApi> {
    /// Account that created the record
    pub owner: ManagedAddress<M>,
    /// National ID or any other opaque identifier
    pub id: TextField<M>,
    pub name: TextField<M>,
    pub gender: u8,
    /// Not validated as a calendar date
    pub birthday: TextField<M>,
    pub nationality: TextField<M>,
    pub province: TextField<M>,
    pub city: TextField<M>,
    pub document_hashes: ManagedVec<M, DocumentHash<M>>,
}
