//! Wallet grouping and feature reduction.
//!
//! One pass over the batch builds a tally per wallet; each tally is then
//! reduced independently. Output is sorted by wallet identifier so identical
//! input always yields identical output.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use lendscore_core::types::{ActionKind, TransactionRecord, WalletActivity, WalletFeatureVector};
use tracing::debug;

/// Running counters for one wallet during the grouping pass.
#[derive(Debug, Default)]
struct Tally {
    deposits: u64,
    borrows: u64,
    repays: u64,
    redeems: u64,
    liquidations: u64,
    total: u64,
    dates: HashSet<NaiveDate>,
}

impl Tally {
    fn record(&mut self, record: &TransactionRecord) {
        match record.action() {
            ActionKind::Deposit => self.deposits += 1,
            ActionKind::Borrow => self.borrows += 1,
            ActionKind::Repay => self.repays += 1,
            ActionKind::RedeemUnderlying => self.redeems += 1,
            ActionKind::LiquidationCall => self.liquidations += 1,
            ActionKind::Other(_) => {}
        }
        self.total += 1;
        self.dates.insert(record.date());
    }

    fn into_activity(self, wallet: &str) -> WalletActivity {
        WalletActivity {
            wallet: wallet.to_string(),
            deposits: self.deposits,
            borrows: self.borrows,
            repays: self.repays,
            redeems: self.redeems,
            liquidations: self.liquidations,
            total: self.total,
            active_days: self.dates.len() as u64,
        }
    }
}

/// Reduces a batch of records to one feature vector per distinct wallet.
#[derive(Debug, Clone, Default)]
pub struct FeatureAggregator;

impl FeatureAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Per-wallet counters, sorted by wallet.
    pub fn activity(&self, records: &[TransactionRecord]) -> Vec<WalletActivity> {
        let mut groups: BTreeMap<&str, Tally> = BTreeMap::new();
        for record in records {
            groups.entry(record.wallet()).or_default().record(record);
        }

        let unrecognized = records.iter().filter(|r| !r.action().is_counted()).count();
        debug!(
            records = records.len(),
            wallets = groups.len(),
            unrecognized,
            "features: grouped batch"
        );

        groups
            .into_iter()
            .map(|(wallet, tally)| tally.into_activity(wallet))
            .collect()
    }

    /// One [`WalletFeatureVector`] per distinct wallet, sorted by wallet.
    ///
    /// Empty input yields empty output.
    pub fn aggregate(&self, records: &[TransactionRecord]) -> Vec<WalletFeatureVector> {
        self.activity(records)
            .iter()
            .map(WalletActivity::features)
            .collect()
    }
}
