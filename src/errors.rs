// Error messages returned by the ledger. Every failed call reverts the whole
// transaction, so none of these leave partial state behind.

pub const ERR_INVALID_AMOUNT: &str = "Invalid amount";
pub const ERR_NOT_AUTHORIZED: &str = "Caller is not an operator";
pub const ERR_WITHDRAWAL_ALREADY_ACTIVE: &str = "Withdrawal already active";
pub const ERR_NO_ACTIVE_WITHDRAWAL: &str = "No active withdrawal";
pub const ERR_WITHDRAWAL_NOT_READY: &str = "Withdrawal not ready";
pub const ERR_INSUFFICIENT_LEDGER_FUNDS: &str = "Insufficient ledger funds";
pub const ERR_NO_DIVIDENDS_AVAILABLE: &str = "No dividends available";
pub const ERR_NO_DIVIDENDS_TO_CLAIM: &str = "No dividends to claim";

// ── Transfer failures, one per leg ──

pub const ERR_TRANSFER_IN_FAILED: &str = "Transfer failed: wrong payment token";
pub const ERR_WITHDRAWAL_TRANSFER_FAILED: &str = "Transfer failed: withdrawal payout";
pub const ERR_CARRY_TRANSFER_FAILED: &str = "Transfer failed: carry fee";
pub const ERR_NET_TRANSFER_FAILED: &str = "Transfer failed: dividend payout";

pub const ERR_REENTRANT_CALL: &str = "Reentrant call";
pub const ERR_INVALID_ASSET_TOKEN: &str = "Invalid asset token";
