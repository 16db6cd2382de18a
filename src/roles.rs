multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_ADDRESS, ERR_REGISTRY_NOT_SET, ERR_UNAUTHORIZED};
use crate::registry_proxy;

/// Registry attribute that marks an identity as a mint approver.
pub const APPROVER_ATTRIBUTE: &[u8] = b"isTUSDMintApprover";

/// Registry attribute that marks an identity as a pause key.
pub const PAUSE_KEY_ATTRIBUTE: &[u8] = b"isTUSDMintChecker";

// ============================================================
// Role keys — owner, mint key, approvers and pause keys.
// Every mutation here is owner-only.
// ============================================================

#[multiversx_sc::module]
pub trait RolesModule {
    // ========================================================
    // ENDPOINT: transferMintKey
    // Single-step swap. There is no claim phase for the mint
    // key, so the new key takes effect immediately.
    // ========================================================

    #[endpoint(transferMintKey)]
    fn transfer_mint_key(&self, new_mint_key: ManagedAddress) {
        self.require_owner();
        require!(!new_mint_key.is_zero(), ERR_INVALID_ADDRESS);

        let previous = self.mint_key().get();
        self.mint_key().set(&new_mint_key);

        self.mint_key_transferred_event(&previous, &new_mint_key);
    }

    #[endpoint(addApprover)]
    fn add_approver(&self, approver: ManagedAddress) {
        self.require_owner();
        require!(!approver.is_zero(), ERR_INVALID_ADDRESS);
        self.set_approver(&approver, true);
    }

    #[endpoint(removeApprover)]
    fn remove_approver(&self, approver: ManagedAddress) {
        self.require_owner();
        self.set_approver(&approver, false);
    }

    #[endpoint(addPauseKey)]
    fn add_pause_key(&self, pause_key: ManagedAddress) {
        self.require_owner();
        require!(!pause_key.is_zero(), ERR_INVALID_ADDRESS);
        self.set_pause_key(&pause_key, true);
    }

    #[endpoint(removePauseKey)]
    fn remove_pause_key(&self, pause_key: ManagedAddress) {
        self.require_owner();
        self.set_pause_key(&pause_key, false);
    }

    #[endpoint(setRegistry)]
    fn set_registry(&self, registry: ManagedAddress) {
        self.require_owner();
        require!(!registry.is_zero(), ERR_INVALID_ADDRESS);
        self.registry_address().set(&registry);
        self.registry_set_event(&registry);
    }

    // ========================================================
    // ENDPOINT: syncRegistryRoles
    // Mirrors the registry's approver / pause-key attributes
    // for each given identity into the local role sets.
    // ========================================================

    #[endpoint(syncRegistryRoles)]
    fn sync_registry_roles(&self, identities: MultiValueEncoded<ManagedAddress>) {
        self.require_owner();
        require!(!self.registry_address().is_empty(), ERR_REGISTRY_NOT_SET);

        let registry = self.registry_address().get();
        let approver_attribute = ManagedBuffer::from(APPROVER_ATTRIBUTE);
        let pause_key_attribute = ManagedBuffer::from(PAUSE_KEY_ATTRIBUTE);
        for identity in identities.into_iter() {
            let is_approver: bool = self
                .tx()
                .to(&registry)
                .typed(registry_proxy::RegistryProxy)
                .has_attribute(identity.clone(), approver_attribute.clone())
                .returns(ReturnsResult)
                .sync_call();
            let is_pause_key: bool = self
                .tx()
                .to(&registry)
                .typed(registry_proxy::RegistryProxy)
                .has_attribute(identity.clone(), pause_key_attribute.clone())
                .returns(ReturnsResult)
                .sync_call();

            self.set_approver(&identity, is_approver);
            self.set_pause_key(&identity, is_pause_key);
        }
    }

    // ========================================================
    // INTERNAL: capability checks
    // ========================================================

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.is_owner(&caller), ERR_UNAUTHORIZED);
    }

    fn set_approver(&self, who: &ManagedAddress, enabled: bool) {
        if enabled {
            self.approvers().insert(who.clone());
        } else {
            self.approvers().swap_remove(who);
        }
        self.approver_set_event(who, enabled);
    }

    fn set_pause_key(&self, who: &ManagedAddress, enabled: bool) {
        if enabled {
            self.pause_keys().insert(who.clone());
        } else {
            self.pause_keys().swap_remove(who);
        }
        self.pause_key_set_event(who, enabled);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isOwner)]
    fn is_owner(&self, who: &ManagedAddress) -> bool {
        !self.owner().is_empty() && self.owner().get() == *who
    }

    #[view(isMintKey)]
    fn is_mint_key(&self, who: &ManagedAddress) -> bool {
        !self.mint_key().is_empty() && self.mint_key().get() == *who
    }

    #[view(isApprover)]
    fn is_approver(&self, who: &ManagedAddress) -> bool {
        self.approvers().contains(who)
    }

    #[view(isPauseKey)]
    fn is_pause_key(&self, who: &ManagedAddress) -> bool {
        self.pause_keys().contains(who)
    }

    #[view(getApprovers)]
    fn get_approvers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for who in self.approvers().iter() {
            result.push(who);
        }
        result
    }

    #[view(getPauseKeys)]
    fn get_pause_keys(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for who in self.pause_keys().iter() {
            result.push(who);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("mintKeyTransferred")]
    fn mint_key_transferred_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] next: &ManagedAddress,
    );

    #[event("approverSet")]
    fn approver_set_event(&self, #[indexed] approver: &ManagedAddress, #[indexed] enabled: bool);

    #[event("pauseKeySet")]
    fn pause_key_set_event(&self, #[indexed] pause_key: &ManagedAddress, #[indexed] enabled: bool);

    #[event("registrySet")]
    fn registry_set_event(&self, #[indexed] registry: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getOwner)]
    #[storage_mapper("controllerOwner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getMintKey)]
    #[storage_mapper("mintKey")]
    fn mint_key(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("approvers")]
    fn approvers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("pauseKeys")]
    fn pause_keys(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getRegistry)]
    #[storage_mapper("registryAddress")]
    fn registry_address(&self) -> SingleValueMapper<ManagedAddress>;
}
