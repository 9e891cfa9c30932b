#![no_std]

multiversx_sc::imports!();

pub mod custody;
pub mod errors;
pub mod events;
pub mod guard;
pub mod operators;
pub mod storage;
pub mod types;

use errors::{
    ERR_CARRY_TRANSFER_FAILED, ERR_INSUFFICIENT_LEDGER_FUNDS, ERR_INVALID_AMOUNT,
    ERR_INVALID_ASSET_TOKEN, ERR_NET_TRANSFER_FAILED, ERR_NO_ACTIVE_WITHDRAWAL,
    ERR_NO_DIVIDENDS_AVAILABLE, ERR_NO_DIVIDENDS_TO_CLAIM, ERR_WITHDRAWAL_ALREADY_ACTIVE,
    ERR_WITHDRAWAL_NOT_READY, ERR_WITHDRAWAL_TRANSFER_FAILED,
};
use types::{FundConfig, MemberRecord, PendingWithdrawal};

// ============================================================
// Constants
// ============================================================

/// Carry (performance fee): 15% of claimed profit
pub const CARRY_RATE_NUMERATOR: u64 = 1_500;

/// Basis points denominator for the carry rate
pub const CARRY_RATE_DENOMINATOR: u64 = 10_000;

/// Maturity gate for withdrawal requests: 10 minutes in seconds
pub const WITHDRAWAL_DELAY: u64 = 600;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait PooledFund:
    storage::StorageModule
    + custody::CustodyModule
    + operators::OperatorsModule
    + guard::ReentrancyGuardModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, asset_token: EgldOrEsdtTokenIdentifier, fee_recipient: ManagedAddress) {
        require!(asset_token.is_valid(), ERR_INVALID_ASSET_TOKEN);

        self.asset_token().set(&asset_token);
        self.fee_recipient().set(&fee_recipient);
        self.total_funds().set(BigUint::zero());

        // The deployer starts out as the only operator.
        let deployer = self.blockchain().get_caller();
        if self.operators().insert(deployer.clone()) {
            self.operator_added_event(&deployer);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: contribute
    // Payment in the fund asset becomes the caller's principal.
    // ========================================================

    #[payable("*")]
    #[endpoint(contribute)]
    fn contribute(&self) {
        self.enter_guarded();

        let caller = self.blockchain().get_caller();
        let amount = self.transfer_in();

        // No-op for returning members, even those back at zero principal
        self.member_registry().insert(caller.clone());
        self.principal(&caller).update(|p| *p += &amount);
        self.total_funds().update(|total| *total += &amount);

        self.contributed_event(&caller, &amount);
        self.exit_guarded();
    }

    // ========================================================
    // ENDPOINT: requestWithdrawal
    // Earmarks principal; settlement happens after the delay.
    // ========================================================

    #[endpoint(requestWithdrawal)]
    fn request_withdrawal(&self, amount: BigUint) {
        self.enter_guarded();

        let caller = self.blockchain().get_caller();
        let principal = self.principal(&caller).get();
        require!(amount > 0u64 && amount <= principal, ERR_INVALID_AMOUNT);
        require!(
            !self.has_active_withdrawal(&caller).get(),
            ERR_WITHDRAWAL_ALREADY_ACTIVE
        );

        let ready_at = self.blockchain().get_block_timestamp() + WITHDRAWAL_DELAY;
        self.withdrawal_amount(&caller).set(&amount);
        self.withdrawal_ready_at(&caller).set(ready_at);
        self.has_active_withdrawal(&caller).set(true);

        self.withdrawal_requested_event(&caller, &amount, ready_at);
        self.exit_guarded();
    }

    // ========================================================
    // ENDPOINT: processWithdrawal
    // Operator settles a matured request and pays the member.
    // ========================================================

    #[endpoint(processWithdrawal)]
    fn process_withdrawal(&self, member: ManagedAddress) {
        self.require_operator();
        self.enter_guarded();

        require!(
            self.has_active_withdrawal(&member).get(),
            ERR_NO_ACTIVE_WITHDRAWAL
        );
        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= self.withdrawal_ready_at(&member).get(),
            ERR_WITHDRAWAL_NOT_READY
        );
        let amount = self.withdrawal_amount(&member).get();
        require!(
            amount <= self.total_funds().get(),
            ERR_INSUFFICIENT_LEDGER_FUNDS
        );

        // Ledger is settled before the payout leaves custody.
        self.principal(&member).update(|p| *p -= &amount);
        self.total_funds().update(|total| *total -= &amount);
        self.withdrawal_amount(&member).clear();
        self.withdrawal_ready_at(&member).clear();
        self.has_active_withdrawal(&member).clear();

        self.transfer_out(&member, &amount, ERR_WITHDRAWAL_TRANSFER_FAILED);

        self.withdrawal_settled_event(&member, &amount);
        self.exit_guarded();
    }

    // ========================================================
    // ENDPOINT: distributeDividends
    // Splits custody surplus over principal, pro rata.
    // ========================================================

    /// Allocates `custody balance - total funds` to every member with
    /// principal, in registry order. Linear in the number of members.
    ///
    /// Allocated but unclaimed dividends are still in custody, so a second
    /// call before members claim counts them into the pool again.
    #[endpoint(distributeDividends)]
    fn distribute_dividends(&self) {
        self.require_operator();
        self.enter_guarded();

        let pool = self.get_distributable_pool();
        require!(pool > 0u64, ERR_NO_DIVIDENDS_AVAILABLE);

        // Without principal there is nobody to allocate the pool to
        let total_funds = self.total_funds().get();
        require!(total_funds > 0u64, ERR_NO_DIVIDENDS_AVAILABLE);
        for member in self.member_registry().iter() {
            let principal = self.principal(&member).get();
            if principal == 0u64 {
                continue;
            }
            // Floor division: the remainder stays in custody
            let share = (&pool * &principal) / &total_funds;
            self.pending_dividend(&member).update(|d| *d += &share);
        }

        self.dividends_distributed_event(&pool);
        self.exit_guarded();
    }

    // ========================================================
    // ENDPOINT: claimDividends
    // Pays out pending dividends minus carry.
    // ========================================================

    #[endpoint(claimDividends)]
    fn claim_dividends(&self) {
        self.enter_guarded();

        let caller = self.blockchain().get_caller();
        let pending = self.pending_dividend(&caller).get();
        require!(pending > 0u64, ERR_NO_DIVIDENDS_TO_CLAIM);

        let (net, carry) = self.split_carry(&pending);
        self.pending_dividend(&caller).clear();

        let fee_recipient = self.fee_recipient().get();
        self.transfer_out(&fee_recipient, &carry, ERR_CARRY_TRANSFER_FAILED);
        self.transfer_out(&caller, &net, ERR_NET_TRANSFER_FAILED);

        self.dividend_claimed_event(&caller, &net, &carry);
        if carry > 0u64 {
            self.carry_fee_paid_event(&fee_recipient, &carry);
        }
        self.exit_guarded();
    }

    // ========================================================
    // INTERNAL: carry split
    // carry = floor(amount * 1500 / 10000), net = amount - carry
    // ========================================================

    fn split_carry(&self, amount: &BigUint) -> (BigUint, BigUint) {
        let carry = (amount * CARRY_RATE_NUMERATOR) / CARRY_RATE_DENOMINATOR;
        let net = amount - &carry;
        (net, carry)
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getMemberRecord)]
    fn get_member_record(&self, member: &ManagedAddress) -> MemberRecord<Self::Api> {
        MemberRecord {
            principal: self.principal(member).get(),
            pending_dividend: self.pending_dividend(member).get(),
            withdrawal_amount: self.withdrawal_amount(member).get(),
            withdrawal_ready_at: self.withdrawal_ready_at(member).get(),
            has_active_withdrawal: self.has_active_withdrawal(member).get(),
        }
    }

    #[view(getMyClaimableDividend)]
    fn get_my_claimable_dividend(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.pending_dividend(&caller).get()
    }

    /// (net, carry) the member would receive if they claimed now
    #[view(getClaimBreakdown)]
    fn get_claim_breakdown(&self, member: &ManagedAddress) -> MultiValue2<BigUint, BigUint> {
        let pending = self.pending_dividend(member).get();
        self.split_carry(&pending).into()
    }

    /// Operators only. Scans the whole registry.
    #[view(getPendingWithdrawals)]
    fn get_pending_withdrawals(&self) -> MultiValueEncoded<PendingWithdrawal<Self::Api>> {
        self.require_operator();

        let mut result = MultiValueEncoded::new();
        for member in self.member_registry().iter() {
            if !self.has_active_withdrawal(&member).get() {
                continue;
            }
            result.push(PendingWithdrawal {
                amount: self.withdrawal_amount(&member).get(),
                ready_at: self.withdrawal_ready_at(&member).get(),
                member,
            });
        }
        result
    }

    #[view(getDistributablePool)]
    fn get_distributable_pool(&self) -> BigUint {
        let custody = self.custody_balance();
        let total_funds = self.total_funds().get();
        if custody > total_funds {
            custody - total_funds
        } else {
            BigUint::zero()
        }
    }

    #[view(getTotalFunds)]
    fn get_total_funds(&self) -> BigUint {
        self.total_funds().get()
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.member_registry().len();
        let start = from as usize;
        let end = core::cmp::min(start.saturating_add(count as usize), total);

        for (idx, member) in self.member_registry().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(member);
            }
        }
        result
    }

    #[view(getMemberCount)]
    fn get_member_count(&self) -> usize {
        self.member_registry().len()
    }

    #[view(getFundConfig)]
    fn get_fund_config(&self) -> FundConfig<Self::Api> {
        FundConfig {
            asset_token: self.asset_token().get(),
            fee_recipient: self.fee_recipient().get(),
            carry_rate_numerator: CARRY_RATE_NUMERATOR,
            carry_rate_denominator: CARRY_RATE_DENOMINATOR,
            withdrawal_delay: WITHDRAWAL_DELAY,
        }
    }
}
