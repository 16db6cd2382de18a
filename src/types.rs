multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Mint Operation — one entry of the append-only request log
// ============================================================

/// The approver set itself lives in its own storage mapper, keyed by the
/// operation index; `approval_count` mirrors its length.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct MintOperation<M: ManagedTypeApi> {
    pub recipient: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub created_at: u64,
    pub approval_count: u32,
    /// Once set, the operation is frozen and has been minted.
    pub finalized: bool,
}

// ============================================================
// Ownership Claim — an administered contract taken over by
// the controller through issueClaimOwnership
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct OwnershipClaim<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub claimed: bool,
}
