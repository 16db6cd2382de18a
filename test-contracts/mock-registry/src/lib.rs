#![no_std]

multiversx_sc::imports!();

/// Attribute store keyed by identity and attribute name.
#[multiversx_sc::contract]
pub trait MockRegistry {
    #[init]
    fn init(&self) {}

    #[only_owner]
    #[endpoint(setAttribute)]
    fn set_attribute(&self, who: ManagedAddress, attribute: ManagedBuffer, enabled: bool) {
        self.attributes(&who, &attribute).set(enabled);
    }

    #[view(hasAttribute)]
    fn has_attribute(&self, who: ManagedAddress, attribute: ManagedBuffer) -> bool {
        self.attributes(&who, &attribute).get()
    }

    #[storage_mapper("attributes")]
    fn attributes(&self, who: &ManagedAddress, attribute: &ManagedBuffer) -> SingleValueMapper<bool>;
}
