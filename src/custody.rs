multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_AMOUNT, ERR_TRANSFER_IN_FAILED};

/// Movement of the fund asset between members and the contract's own account.
///
/// Any failed leg aborts the calling endpoint; nothing is retried.
#[multiversx_sc::module]
pub trait CustodyModule: crate::storage::StorageModule {
    /// Validates the payment attached to the current call and returns its amount.
    fn transfer_in(&self) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.amount > 0u64, ERR_INVALID_AMOUNT);
        require!(
            payment.token_identifier == self.asset_token().get(),
            ERR_TRANSFER_IN_FAILED
        );
        payment.amount
    }

    /// Pays `amount` out of custody, failing with `err_msg` if custody cannot cover it.
    fn transfer_out(&self, to: &ManagedAddress, amount: &BigUint, err_msg: &str) {
        if *amount == 0u64 {
            return;
        }
        require!(&self.custody_balance() >= amount, err_msg);

        let token = self.asset_token().get();
        self.send().direct(to, &token, 0, amount);
    }

    #[view(getCustodyBalance)]
    fn custody_balance(&self) -> BigUint {
        let token = self.asset_token().get();
        self.blockchain().get_sc_balance(&token, 0)
    }
}
