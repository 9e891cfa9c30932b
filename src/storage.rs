multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[storage_mapper("assetToken")]
    fn asset_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("feeRecipient")]
    fn fee_recipient(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Ledger totals ──

    #[storage_mapper("totalFunds")]
    fn total_funds(&self) -> SingleValueMapper<BigUint>;

    /// First-contribution order; never shrinks.
    #[storage_mapper("memberRegistry")]
    fn member_registry(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Per-member record ──

    #[storage_mapper("principal")]
    fn principal(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("pendingDividend")]
    fn pending_dividend(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("withdrawalAmount")]
    fn withdrawal_amount(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("withdrawalReadyAt")]
    fn withdrawal_ready_at(&self, member: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("hasActiveWithdrawal")]
    fn has_active_withdrawal(&self, member: &ManagedAddress) -> SingleValueMapper<bool>;
}
