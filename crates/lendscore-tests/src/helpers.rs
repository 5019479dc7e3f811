//! Shared test helpers for integration tests.

use lendscore_core::constants::SECS_PER_DAY;
use lendscore_core::types::{ActionKind, TransactionRecord};
use serde_json::{json, Value};

/// 2021-05-01 00:00:00 UTC.
pub const DAY0: i64 = 1_619_827_200;

/// Timestamp `secs` seconds into day `day` after [`DAY0`].
pub fn ts(day: i64, secs: i64) -> i64 {
    DAY0 + day * SECS_PER_DAY + secs
}

/// Validated record for `wallet` doing `action` at `ts(day, secs)`.
pub fn rec(wallet: &str, action: &str, day: i64, secs: i64) -> TransactionRecord {
    TransactionRecord::new(wallet, ActionKind::parse(action), ts(day, secs))
        .expect("test timestamps are in range")
}

/// `n` records of one action for one wallet, all on `day`.
pub fn repeat(wallet: &str, action: &str, n: usize, day: i64) -> Vec<TransactionRecord> {
    (0..n).map(|i| rec(wallet, action, day, i as i64)).collect()
}

/// The reference wallet: 10 deposits, 5 borrows, 5 repays, 2 redemptions,
/// no liquidations, active on 3 distinct days.
pub fn reference_wallet(wallet: &str) -> Vec<TransactionRecord> {
    let mut records = repeat(wallet, "deposit", 10, 0);
    records.extend(repeat(wallet, "borrow", 5, 1));
    records.extend(repeat(wallet, "repay", 5, 2));
    records.extend(repeat(wallet, "redeemunderlying", 2, 2));
    records
}

/// One exported JSON object in the upstream shape (`userWallet` key, mixed
/// case action, extra fields).
pub fn export_row(wallet: &str, action: &str, timestamp: i64) -> Value {
    json!({
        "userWallet": wallet,
        "network": "polygon",
        "protocol": "aave_v2",
        "action": action,
        "timestamp": timestamp,
        "actionData": { "amount": "1000000", "assetSymbol": "USDC" }
    })
}
