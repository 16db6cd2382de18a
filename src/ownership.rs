multiversx_sc::imports!();

use crate::errors::{ERR_CLAIM_FAILED, ERR_INVALID_ADDRESS, ERR_NOT_INITIALIZED, ERR_UNAUTHORIZED};
use crate::ledger_proxy;
use crate::roles;
use crate::types::OwnershipClaim;

// ============================================================
// Ownership — two-phase handover of the controller itself, and
// administration of contracts the controller owns (the ledger).
// ============================================================

#[multiversx_sc::module]
pub trait OwnershipModule: roles::RolesModule {
    // ========================================================
    // ENDPOINT: transferOwnership
    // Nominates the next owner. Ownership does not move until
    // the nominee claims it; a later call replaces the nominee.
    // ========================================================

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, next_owner: ManagedAddress) {
        self.require_owner();
        require!(!next_owner.is_zero(), ERR_INVALID_ADDRESS);
        require!(!self.is_owner(&next_owner), ERR_INVALID_ADDRESS);

        self.pending_owner().set(&next_owner);
        self.ownership_transfer_pending_event(&self.owner().get(), &next_owner);
    }

    // ========================================================
    // ENDPOINT: claimOwnership
    // Only the most recent nominee may claim.
    // ========================================================

    #[endpoint(claimOwnership)]
    fn claim_ownership(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.pending_owner().is_empty() && self.pending_owner().get() == caller,
            ERR_UNAUTHORIZED
        );

        let previous = self.owner().get();
        self.owner().set(&caller);
        self.pending_owner().clear();

        self.ownership_transferred_event(&previous, &caller);
    }

    #[endpoint(setLedger)]
    fn set_ledger(&self, ledger: ManagedAddress) {
        self.require_owner();
        require!(!ledger.is_zero(), ERR_INVALID_ADDRESS);
        self.ledger_address().set(&ledger);
        self.ledger_set_event(&ledger);
    }

    // ========================================================
    // ENDPOINT: issueClaimOwnership
    // The target must already have nominated this controller as
    // its pending owner; the controller then runs the target's
    // claim step and checks that ownership actually moved.
    // ========================================================

    #[endpoint(issueClaimOwnership)]
    fn issue_claim_ownership(&self, target: ManagedAddress) {
        self.require_owner();

        let own_address = self.blockchain().get_sc_address();
        let nominee: ManagedAddress = self
            .tx()
            .to(&target)
            .typed(ledger_proxy::LedgerProxy)
            .pending_owner()
            .returns(ReturnsResult)
            .sync_call();
        require!(nominee == own_address, ERR_CLAIM_FAILED);

        self.tx()
            .to(&target)
            .typed(ledger_proxy::LedgerProxy)
            .claim_ownership()
            .sync_call();

        let target_owner: ManagedAddress = self
            .tx()
            .to(&target)
            .typed(ledger_proxy::LedgerProxy)
            .owner()
            .returns(ReturnsResult)
            .sync_call();
        require!(target_owner == own_address, ERR_CLAIM_FAILED);

        let claim = OwnershipClaim {
            target: target.clone(),
            claimed: true,
        };
        self.ownership_claims(&target).set(&claim);

        self.child_ownership_claimed_event(&target);
    }

    // ========================================================
    // ENDPOINT: transferChildOwnership
    // Hands an administered contract on; the nominee still has
    // to claim it on the target itself. The controller's claim
    // record is marked as released.
    // ========================================================

    #[endpoint(transferChildOwnership)]
    fn transfer_child_ownership(&self, target: ManagedAddress, next_owner: ManagedAddress) {
        self.require_owner();
        require!(!next_owner.is_zero(), ERR_INVALID_ADDRESS);

        self.tx()
            .to(&target)
            .typed(ledger_proxy::LedgerProxy)
            .transfer_ownership(next_owner.clone())
            .sync_call();

        if !self.ownership_claims(&target).is_empty() {
            self.ownership_claims(&target).update(|claim| claim.claimed = false);
        }

        self.child_ownership_transferred_event(&target, &next_owner);
    }

    // ========================================================
    // ENDPOINT: setTusdRegistry
    // Points the ledger the controller administers at a registry.
    // ========================================================

    #[endpoint(setTusdRegistry)]
    fn set_ledger_registry(&self, registry: ManagedAddress) {
        self.require_owner();
        require!(!self.ledger_address().is_empty(), ERR_NOT_INITIALIZED);

        let ledger = self.ledger_address().get();
        self.tx()
            .to(&ledger)
            .typed(ledger_proxy::LedgerProxy)
            .set_registry(registry.clone())
            .sync_call();

        self.ledger_registry_set_event(&ledger, &registry);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPendingOwner)]
    fn get_pending_owner(&self) -> OptionalValue<ManagedAddress> {
        if self.pending_owner().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.pending_owner().get())
        }
    }

    #[view(getOwnershipClaim)]
    fn get_ownership_claim(&self, target: ManagedAddress) -> OptionalValue<OwnershipClaim<Self::Api>> {
        if self.ownership_claims(&target).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.ownership_claims(&target).get())
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("ownershipTransferPending")]
    fn ownership_transfer_pending_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] pending_owner: &ManagedAddress,
    );

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] owner: &ManagedAddress,
    );

    #[event("ledgerSet")]
    fn ledger_set_event(&self, #[indexed] ledger: &ManagedAddress);

    #[event("childOwnershipClaimed")]
    fn child_ownership_claimed_event(&self, #[indexed] target: &ManagedAddress);

    #[event("childOwnershipTransferred")]
    fn child_ownership_transferred_event(
        &self,
        #[indexed] target: &ManagedAddress,
        #[indexed] next_owner: &ManagedAddress,
    );

    #[event("ledgerRegistrySet")]
    fn ledger_registry_set_event(
        &self,
        #[indexed] ledger: &ManagedAddress,
        #[indexed] registry: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("pendingOwner")]
    fn pending_owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLedger)]
    #[storage_mapper("ledgerAddress")]
    fn ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("ownershipClaims")]
    fn ownership_claims(&self, target: &ManagedAddress) -> SingleValueMapper<OwnershipClaim<Self::Api>>;
}
