multiversx_sc::imports!();

use crate::errors::ERR_INVALID_APPROVAL_COUNT;
use crate::roles;

// ============================================================
// Approval thresholds — two tiers split at smallMintThreshold.
// Requirements are read live on every approval, never frozen
// per operation.
// ============================================================

#[multiversx_sc::module]
pub trait ApprovalPolicyModule: roles::RolesModule {
    #[endpoint(setSmallMintThreshold)]
    fn set_small_mint_threshold(&self, threshold: BigUint) {
        self.require_owner();
        self.small_mint_threshold().set(&threshold);
        self.small_mint_threshold_set_event(&threshold);
    }

    #[endpoint(setMinimalApprovals)]
    fn set_minimal_approvals(&self, below_threshold: u32, at_or_above_threshold: u32) {
        self.require_owner();
        self.store_minimal_approvals(below_threshold, at_or_above_threshold);
    }

    fn store_minimal_approvals(&self, below_threshold: u32, at_or_above_threshold: u32) {
        require!(
            below_threshold > 0 && at_or_above_threshold > 0,
            ERR_INVALID_APPROVAL_COUNT
        );

        self.approvals_below_threshold().set(below_threshold);
        self.approvals_at_or_above_threshold().set(at_or_above_threshold);
        self.minimal_approvals_set_event(below_threshold, at_or_above_threshold);
    }

    /// Amounts equal to the threshold fall into the large tier.
    #[view(requiredApprovals)]
    fn required_approvals(&self, amount: &BigUint) -> u32 {
        if *amount >= self.small_mint_threshold().get() {
            self.approvals_at_or_above_threshold().get()
        } else {
            self.approvals_below_threshold().get()
        }
    }

    #[event("smallMintThresholdSet")]
    fn small_mint_threshold_set_event(&self, threshold: &BigUint);

    #[event("minimalApprovalsSet")]
    fn minimal_approvals_set_event(
        &self,
        #[indexed] below_threshold: u32,
        #[indexed] at_or_above_threshold: u32,
    );

    #[view(getSmallMintThreshold)]
    #[storage_mapper("smallMintThreshold")]
    fn small_mint_threshold(&self) -> SingleValueMapper<BigUint>;

    #[view(getApprovalsBelowThreshold)]
    #[storage_mapper("approvalsBelowThreshold")]
    fn approvals_below_threshold(&self) -> SingleValueMapper<u32>;

    #[view(getApprovalsAtOrAboveThreshold)]
    #[storage_mapper("approvalsAtOrAboveThreshold")]
    fn approvals_at_or_above_threshold(&self) -> SingleValueMapper<u32>;
}
