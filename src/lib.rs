#![no_std]

multiversx_sc::imports!();

pub mod approval_policy;
pub mod calendar_proxy;
pub mod daily_limit;
pub mod errors;
pub mod fast_pause;
pub mod ledger_proxy;
pub mod ownership;
pub mod registry_proxy;
pub mod roles;
pub mod types;

use errors::{
    ERR_ALREADY_APPROVED, ERR_ALREADY_FINALIZED, ERR_ALREADY_INITIALIZED, ERR_INVALID_ADDRESS,
    ERR_NOT_FOUND, ERR_NOT_INITIALIZED, ERR_UNAUTHORIZED,
};
use types::MintOperation;

/// Operations are addressed 0-based; VecMapper slots are 1-based.
fn slot(index: u64) -> usize {
    index as usize + 1
}

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait MintController:
    roles::RolesModule
    + ownership::OwnershipModule
    + daily_limit::DailyLimitModule
    + approval_policy::ApprovalPolicyModule
    + fast_pause::FastPauseModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer starts out as both owner and mint key.
    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.mint_key().set(&caller);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: initialize
    // One-shot wiring of the ledger and the minting policy.
    // Later changes go through the individual setters.
    // ========================================================

    #[endpoint(initialize)]
    fn initialize(
        &self,
        ledger: ManagedAddress,
        mint_limit: BigUint,
        small_mint_threshold: BigUint,
        approvals_below_threshold: u32,
        approvals_at_or_above_threshold: u32,
    ) {
        self.require_owner();
        require!(!self.initialized().get(), ERR_ALREADY_INITIALIZED);
        require!(!ledger.is_zero(), ERR_INVALID_ADDRESS);

        self.ledger_address().set(&ledger);
        self.ledger_set_event(&ledger);
        self.mint_limit().set(&mint_limit);
        self.mint_limit_set_event(&mint_limit);
        self.small_mint_threshold().set(&small_mint_threshold);
        self.small_mint_threshold_set_event(&small_mint_threshold);
        self.store_minimal_approvals(approvals_below_threshold, approvals_at_or_above_threshold);

        self.initialized().set(true);
    }

    // ========================================================
    // ENDPOINT: requestMint
    // Owner or mint key only. Reserves the amount against the
    // daily limit and appends a pending operation.
    // ========================================================

    #[endpoint(requestMint)]
    fn request_mint(&self, recipient: ManagedAddress, amount: BigUint) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(
            self.is_owner(&caller) || self.is_mint_key(&caller),
            ERR_UNAUTHORIZED
        );
        require!(self.initialized().get(), ERR_NOT_INITIALIZED);
        self.require_minting_not_paused();

        self.check_and_reserve(&amount);

        let index = self.mint_operations().len() as u64;
        let operation = MintOperation {
            recipient: recipient.clone(),
            amount: amount.clone(),
            created_at: self.blockchain().get_block_timestamp(),
            approval_count: 0u32,
            finalized: false,
        };
        self.mint_operations().push(&operation);

        self.mint_requested_event(index, &caller, &recipient, &amount);

        index
    }

    // ========================================================
    // ENDPOINT: approve
    // Registered approvers only, once per operation. The call
    // that reaches the required count finalizes and mints. Only
    // approvals from identities that are still approvers count.
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, index: u64) {
        let caller = self.blockchain().get_caller();
        require!(self.is_approver(&caller), ERR_UNAUTHORIZED);

        let mut operation = self.require_mint_operation(index);
        require!(!operation.finalized, ERR_ALREADY_FINALIZED);
        require!(
            !self.mint_approvals(index).contains(&caller),
            ERR_ALREADY_APPROVED
        );

        self.mint_approvals(index).insert(caller.clone());
        operation.approval_count += 1;
        self.mint_approved_event(index, &caller, operation.approval_count);

        if self.counting_approvals(index) < self.required_approvals(&operation.amount) {
            self.mint_operations().set(slot(index), &operation);
            return;
        }

        // Commit the finalized state before handing control to the ledger.
        operation.finalized = true;
        self.mint_operations().set(slot(index), &operation);
        self.mint_finalized_event(index, &operation.recipient, &operation.amount);

        let ledger = self.ledger_address().get();
        self.tx()
            .to(&ledger)
            .typed(ledger_proxy::LedgerProxy)
            .mint(operation.recipient, operation.amount)
            .sync_call();
    }

    // ========================================================
    // INTERNAL: operation lookup
    // ========================================================

    fn require_mint_operation(&self, index: u64) -> MintOperation<Self::Api> {
        require!(
            index < self.mint_operations().len() as u64,
            ERR_NOT_FOUND
        );
        self.mint_operations().get(slot(index))
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(mintOperationCount)]
    fn mint_operation_count(&self) -> u64 {
        self.mint_operations().len() as u64
    }

    #[view(getMintOperation)]
    fn get_mint_operation(&self, index: u64) -> MintOperation<Self::Api> {
        self.require_mint_operation(index)
    }

    #[view(getMintOperations)]
    fn get_mint_operations(
        &self,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<MintOperation<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.mint_operations().len() as u64;
        let end = core::cmp::min(from.saturating_add(count), total);

        for index in from..end {
            result.push(self.mint_operations().get(slot(index)));
        }
        result
    }

    #[view(getMintApprovals)]
    fn get_mint_approvals(&self, index: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for approver in self.mint_approvals(index).iter() {
            result.push(approver);
        }
        result
    }

    /// Approvals on `index` whose approver still holds the role.
    #[view(getCountingApprovals)]
    fn counting_approvals(&self, index: u64) -> u32 {
        let mut count = 0u32;
        for approver in self.mint_approvals(index).iter() {
            if self.is_approver(&approver) {
                count += 1;
            }
        }
        count
    }

    #[view(hasApproved)]
    fn has_approved(&self, index: u64, approver: &ManagedAddress) -> bool {
        self.mint_approvals(index).contains(approver)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("mintRequested")]
    fn mint_requested_event(
        &self,
        #[indexed] index: u64,
        #[indexed] requester: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("mintApproved")]
    fn mint_approved_event(
        &self,
        #[indexed] index: u64,
        #[indexed] approver: &ManagedAddress,
        approval_count: u32,
    );

    #[event("mintFinalized")]
    fn mint_finalized_event(
        &self,
        #[indexed] index: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(isInitialized)]
    #[storage_mapper("initialized")]
    fn initialized(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("mintOperations")]
    fn mint_operations(&self) -> VecMapper<MintOperation<Self::Api>>;

    #[storage_mapper("mintApprovals")]
    fn mint_approvals(&self, index: u64) -> UnorderedSetMapper<ManagedAddress>;
}
