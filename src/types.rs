multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Distribution Run — resumable paginated allocation state
// ============================================================

/// One proportional-allocation run, possibly spread over several calls.
/// `current_page == 0` means idle; a mid-flight run keeps the next page
/// index here together with the basis and pool frozen at its first call.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct DistributionRun<M: ManagedTypeApi> {
    pub last_completed_timestamp: u64,
    pub current_page: u64,
    /// Page size captured when the run started; later `setPageSize`
    /// calls do not affect a run already underway.
    pub page_size: u64,
    pub frozen_basis: BigUint<M>,
    pub pool_amount: BigUint<M>,
}

// ============================================================
// Bounty records
// ============================================================

/// Escrowed reward attached to a project. Exactly one of `active`,
/// `successfully_claimed` or `refunded` holds; `active` flips to false
/// once, either through acceptance or through the first refund.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Bounty<M: ManagedTypeApi> {
    pub id: u64,
    pub creator: ManagedAddress<M>,
    /// The creator's initial deposit.
    pub amount: BigUint<M>,
    pub deadline_block: u64,
    /// Initial deposit plus every later addition.
    pub total_amount: BigUint<M>,
    pub active: bool,
    pub successfully_claimed: bool,
    pub refunded: bool,
}

/// One escrow deposit on a bounty. The creator's initial deposit is
/// recorded as the first addition. `refunded` flips at most once.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct BountyAddition<M: ManagedTypeApi> {
    pub contributor: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub refunded: bool,
}

/// A claim lodged against an active bounty. Only the single claim picked
/// by the bounty creator ever becomes `successful`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct BountyClaim<M: ManagedTypeApi> {
    pub id: u64,
    pub bounty_id: u64,
    pub claimer: ManagedAddress<M>,
    pub successful: bool,
}
