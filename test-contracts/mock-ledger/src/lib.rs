#![no_std]

multiversx_sc::imports!();

/// Minimal token ledger: owner-only minting and two-phase ownership.
#[multiversx_sc::contract]
pub trait MockLedger {
    #[init]
    fn init(&self) {
        self.owner().set(self.blockchain().get_caller());
    }

    #[endpoint(mint)]
    fn mint(&self, recipient: ManagedAddress, amount: BigUint) {
        self.require_owner();
        self.balance(&recipient).update(|balance| *balance += &amount);
        self.total_supply().update(|supply| *supply += &amount);
    }

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, next_owner: ManagedAddress) {
        self.require_owner();
        self.pending_owner().set(&next_owner);
    }

    #[endpoint(claimOwnership)]
    fn claim_ownership(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.pending_owner().is_empty() && self.pending_owner().get() == caller,
            "Only pending owner can claim"
        );
        self.owner().set(&caller);
        self.pending_owner().clear();
    }

    #[endpoint(setRegistry)]
    fn set_registry(&self, registry: ManagedAddress) {
        self.require_owner();
        self.registry().set(&registry);
    }

    fn require_owner(&self) {
        require!(
            self.owner().get() == self.blockchain().get_caller(),
            "Only owner"
        );
    }

    #[view(getPendingOwner)]
    fn get_pending_owner(&self) -> ManagedAddress {
        if self.pending_owner().is_empty() {
            ManagedAddress::zero()
        } else {
            self.pending_owner().get()
        }
    }

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("pendingOwner")]
    fn pending_owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(balanceOf)]
    #[storage_mapper("balance")]
    fn balance(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(getRegistry)]
    #[storage_mapper("registry")]
    fn registry(&self) -> SingleValueMapper<ManagedAddress>;
}
