use std::collections::BTreeSet;

use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTransaction {
    pub hash: String,
    pub from: String,
    pub chain_id: String,
    /// `"redeem"`, `"mint"` and so on.
    pub kind: String,
    pub data: Option<String>,
    pub observed: bool,
    pub mined: bool,
    pub is_error: bool,
}

impl PendingTransaction {
    pub fn new(
        hash: impl Into<String>,
        from: impl Into<String>,
        chain_id: impl Into<String>,
        kind: impl Into<String>,
        data: Option<String>,
    ) -> Self {
        PendingTransaction {
            hash: hash.into(),
            from: from.into(),
            chain_id: chain_id.into(),
            kind: kind.into(),
            data,
            observed: false,
            mined: false,
            is_error: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedSubmission {
    pub kind: String,
    pub error: String,
}

/// Transactions submitted from this session. New submissions are staged and
/// join the tracked list on `merge_staged`.
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<PendingTransaction>,
    staged: Vec<PendingTransaction>,
    hashes_to_dismiss: BTreeSet<String>,
    errors: Vec<FailedSubmission>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[PendingTransaction] {
        &self.transactions
    }

    pub fn staged(&self) -> &[PendingTransaction] {
        &self.staged
    }

    pub fn errors(&self) -> &[FailedSubmission] {
        &self.errors
    }

    pub fn get(&self, hash: &str) -> Option<&PendingTransaction> {
        self.transactions.iter().find(|tx| tx.hash == hash)
    }

    pub fn stage(&mut self, transaction: PendingTransaction) {
        debug!(hash = %transaction.hash, kind = %transaction.kind, "staging transaction");
        self.staged.push(transaction);
    }

    /// Moves staged transactions into the tracked list. A staged entry whose
    /// hash is already tracked replaces it. Returns how many were merged.
    pub fn merge_staged(&mut self) -> usize {
        let staged = std::mem::take(&mut self.staged);
        let merged = staged.len();
        for transaction in staged {
            match self
                .transactions
                .iter_mut()
                .find(|tx| tx.hash == transaction.hash)
            {
                Some(existing) => *existing = transaction,
                None => self.transactions.push(transaction),
            }
        }
        merged
    }

    pub fn observe(&mut self, hash: &str) -> bool {
        match self.transactions.iter_mut().find(|tx| tx.hash == hash) {
            Some(tx) => {
                tx.observed = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_mined(&mut self, hash: &str, is_error: bool) -> bool {
        match self.transactions.iter_mut().find(|tx| tx.hash == hash) {
            Some(tx) => {
                tx.mined = true;
                tx.is_error = is_error;
                debug!(hash, is_error, "transaction mined");
                true
            }
            None => {
                warn!(hash, "mined transaction is not tracked");
                false
            }
        }
    }

    pub fn dismiss(&mut self, hash: &str) {
        self.hashes_to_dismiss.insert(hash.to_string());
    }

    /// Drops every dismissed transaction and clears the dismissal list.
    pub fn prune_dismissed(&mut self) -> usize {
        let dismissed = std::mem::take(&mut self.hashes_to_dismiss);
        let before = self.transactions.len();
        self.transactions
            .retain(|tx| !dismissed.contains(tx.hash.as_str()));
        before - self.transactions.len()
    }

    pub fn record_error(&mut self, kind: impl Into<String>, error: impl ToString) {
        self.errors.push(FailedSubmission {
            kind: kind.into(),
            error: error.to_string(),
        });
    }

    pub fn pending(&self) -> impl Iterator<Item = &PendingTransaction> {
        self.transactions.iter().filter(|tx| !tx.mined)
    }

    /// Tracked but not yet seen by a chain listener.
    pub fn unobserved(&self) -> impl Iterator<Item = &PendingTransaction> {
        self.transactions.iter().filter(|tx| !tx.observed)
    }
}
