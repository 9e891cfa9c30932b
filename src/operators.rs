multiversx_sc::imports!();

use crate::errors::ERR_NOT_AUTHORIZED;

/// Operator set answering "is this caller privileged".
///
/// The owner manages the set; the ledger only ever asks `is_operator`.
#[multiversx_sc::module]
pub trait OperatorsModule {
    #[endpoint(addOperator)]
    fn add_operator(&self, operator: ManagedAddress) {
        self.blockchain().check_caller_is_owner();
        if self.operators().insert(operator.clone()) {
            self.operator_added_event(&operator);
        }
    }

    #[endpoint(removeOperator)]
    fn remove_operator(&self, operator: ManagedAddress) {
        self.blockchain().check_caller_is_owner();
        if self.operators().swap_remove(&operator) {
            self.operator_removed_event(&operator);
        }
    }

    #[view(isOperator)]
    fn is_operator(&self, address: &ManagedAddress) -> bool {
        self.operators().contains(address)
    }

    fn require_operator(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.is_operator(&caller), ERR_NOT_AUTHORIZED);
    }

    #[event("operatorAdded")]
    fn operator_added_event(&self, #[indexed] operator: &ManagedAddress);

    #[event("operatorRemoved")]
    fn operator_removed_event(&self, #[indexed] operator: &ManagedAddress);

    #[storage_mapper("operators")]
    fn operators(&self) -> UnorderedSetMapper<ManagedAddress>;
}
