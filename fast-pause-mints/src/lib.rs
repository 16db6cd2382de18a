#![no_std]

multiversx_sc::imports!();

pub mod controller_proxy;

pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_CONTROLLER_NOT_SET: &str = "Controller not set";

// ============================================================
// Fast pause relay — holds its own set of pause keys and
// forwards their pause requests to the mint controller. The
// controller must list this contract as one of its pause keys.
// ============================================================

#[multiversx_sc::contract]
pub trait FastPauseMints {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setController)]
    fn set_controller(&self, controller: ManagedAddress) {
        self.controller_address().set(&controller);
        self.controller_set_event(&controller);
    }

    #[only_owner]
    #[endpoint(modifyPauseKey)]
    fn modify_pause_key(&self, pause_key: ManagedAddress, enabled: bool) {
        if enabled {
            self.pause_keys().insert(pause_key.clone());
        } else {
            self.pause_keys().swap_remove(&pause_key);
        }
        self.pause_key_modified_event(&pause_key, enabled);
    }

    #[endpoint(pauseMints)]
    fn pause_mints(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.pause_keys().contains(&caller), ERR_UNAUTHORIZED);
        require!(!self.controller_address().is_empty(), ERR_CONTROLLER_NOT_SET);

        let controller = self.controller_address().get();
        self.tx()
            .to(&controller)
            .typed(controller_proxy::MintControllerProxy)
            .pause_mints()
            .sync_call();

        self.pause_relayed_event(&caller, &controller);
    }

    #[view(isPauseKey)]
    fn is_pause_key(&self, who: &ManagedAddress) -> bool {
        self.pause_keys().contains(who)
    }

    #[event("controllerSet")]
    fn controller_set_event(&self, #[indexed] controller: &ManagedAddress);

    #[event("pauseKeyModified")]
    fn pause_key_modified_event(&self, #[indexed] pause_key: &ManagedAddress, #[indexed] enabled: bool);

    #[event("pauseRelayed")]
    fn pause_relayed_event(
        &self,
        #[indexed] pause_key: &ManagedAddress,
        #[indexed] controller: &ManagedAddress,
    );

    #[view(getController)]
    #[storage_mapper("controllerAddress")]
    fn controller_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("pauseKeys")]
    fn pause_keys(&self) -> UnorderedSetMapper<ManagedAddress>;
}
