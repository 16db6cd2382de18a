multiversx_sc::imports!();

use crate::errors::{ERR_PAUSED, ERR_UNAUTHORIZED};
use crate::roles;

// ============================================================
// Fast pause — any pause key halts new mint requests at once;
// only the owner can lift the halt.
// ============================================================

#[multiversx_sc::module]
pub trait FastPauseModule: roles::RolesModule {
    /// Also accepts the FastPauseMints relay once it is registered
    /// as a pause key.
    #[endpoint(pauseMints)]
    fn pause_mints(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.is_pause_key(&caller) || self.is_owner(&caller),
            ERR_UNAUTHORIZED
        );

        self.minting_paused().set(true);
        self.mints_paused_event(&caller);
    }

    #[endpoint(unpauseMints)]
    fn unpause_mints(&self) {
        self.require_owner();
        self.minting_paused().set(false);
        self.mints_unpaused_event(&self.blockchain().get_caller());
    }

    fn require_minting_not_paused(&self) {
        require!(!self.minting_paused().get(), ERR_PAUSED);
    }

    #[event("mintsPaused")]
    fn mints_paused_event(&self, #[indexed] caller: &ManagedAddress);

    #[event("mintsUnpaused")]
    fn mints_unpaused_event(&self, #[indexed] caller: &ManagedAddress);

    #[view(isMintingPaused)]
    #[storage_mapper("mintingPaused")]
    fn minting_paused(&self) -> SingleValueMapper<bool>;
}
