multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Member Record — a member's full position in the ledger
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct MemberRecord<M: ManagedTypeApi> {
    /// Contributed capital currently held by the fund.
    pub principal: BigUint<M>,
    /// Profit allocated by distributions, not yet claimed.
    pub pending_dividend: BigUint<M>,
    /// Amount earmarked by the active withdrawal request (0 when idle).
    pub withdrawal_amount: BigUint<M>,
    /// Block timestamp at which the active request matures (0 when idle).
    pub withdrawal_ready_at: u64,
    pub has_active_withdrawal: bool,
}

// ============================================================
// Pending Withdrawal — one row of the operator settlement queue
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PendingWithdrawal<M: ManagedTypeApi> {
    pub member: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub ready_at: u64,
}

// ============================================================
// Fund Config — deployment parameters, immutable after init
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct FundConfig<M: ManagedTypeApi> {
    pub asset_token: EgldOrEsdtTokenIdentifier<M>,
    pub fee_recipient: ManagedAddress<M>,
    pub carry_rate_numerator: u64,
    pub carry_rate_denominator: u64,
    pub withdrawal_delay: u64,
}
