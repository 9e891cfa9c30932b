multiversx_sc::imports!();

use crate::errors::ERR_REENTRANT_CALL;

/// Per-instance mutual exclusion for ledger-mutating endpoints.
///
/// The flag lives in contract storage, so a failed call reverts it together
/// with everything else: the guard is released on every exit path.
#[multiversx_sc::module]
pub trait ReentrancyGuardModule {
    fn enter_guarded(&self) {
        require!(!self.reentrancy_lock().get(), ERR_REENTRANT_CALL);
        self.reentrancy_lock().set(true);
    }

    fn exit_guarded(&self) {
        self.reentrancy_lock().clear();
    }

    #[view(isLocked)]
    fn is_locked(&self) -> bool {
        self.reentrancy_lock().get()
    }

    #[storage_mapper("reentrancyLock")]
    fn reentrancy_lock(&self) -> SingleValueMapper<bool>;
}
