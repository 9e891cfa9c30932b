multiversx_sc::imports!();

/// Log entries for indexers, one per committed state transition.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("contributed")]
    fn contributed_event(&self, #[indexed] member: &ManagedAddress, amount: &BigUint);

    #[event("withdrawalRequested")]
    fn withdrawal_requested_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] amount: &BigUint,
        ready_at: u64,
    );

    #[event("withdrawalSettled")]
    fn withdrawal_settled_event(&self, #[indexed] member: &ManagedAddress, amount: &BigUint);

    #[event("dividendsDistributed")]
    fn dividends_distributed_event(&self, pool: &BigUint);

    #[event("dividendClaimed")]
    fn dividend_claimed_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] net: &BigUint,
        carry: &BigUint,
    );

    #[event("carryFeePaid")]
    fn carry_fee_paid_event(&self, #[indexed] recipient: &ManagedAddress, carry: &BigUint);
}
