use {
    crate::TestSuite,
    amm_math::Uint256,
    amm_types::{Addr, Asset},
    std::{cmp::Ordering, collections::BTreeMap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceChange {
    Increased(Uint256),
    Decreased(Uint256),
    Unchanged,
}

pub struct BalanceTracker<'a> {
    pub(crate) suite: &'a mut TestSuite,
}

impl BalanceTracker<'_> {
    /// Record the current balance of a list of accounts.
    pub fn record_many<I>(&mut self, accounts: I)
    where
        I: IntoIterator<Item = Addr>,
    {
        for account in accounts {
            self.record(account);
        }
    }

    /// Record the current balance of a single account.
    pub fn record(&mut self, account: Addr) {
        let balances = self.current(account);
        self.suite.balances.insert(account, balances);
    }

    /// Get the changes in balances of an account since the last recorded balances.
    pub fn changes(&self, account: Addr) -> BTreeMap<Asset, BalanceChange> {
        let old_balances = self.suite.balances.get(&account).unwrap();
        let new_balances = self.current(account);

        Asset::ALL
            .into_iter()
            .map(|asset| {
                let old_balance = old_balances[&asset];
                let new_balance = new_balances[&asset];
                let change = match new_balance.cmp(&old_balance) {
                    Ordering::Greater => BalanceChange::Increased(new_balance - old_balance),
                    Ordering::Less => BalanceChange::Decreased(old_balance - new_balance),
                    Ordering::Equal => BalanceChange::Unchanged,
                };

                (asset, change)
            })
            .collect()
    }

    /// Assert a list of balance changes for an account.
    pub fn should_change(&self, account: Addr, changes: BTreeMap<Asset, BalanceChange>) {
        let delta = self.changes(account);

        for (asset, change) in changes {
            let diff = delta[&asset];
            if change != diff {
                panic!(
                    "incorrect balance! account: {account}, asset: {asset}, expected: {change:?}, actual: {diff:?}"
                );
            }
        }
    }

    fn current(&self, account: Addr) -> BTreeMap<Asset, Uint256> {
        Asset::ALL
            .into_iter()
            .map(|asset| (asset, self.suite.query_balance(account, asset).unwrap()))
            .collect()
    }
}
