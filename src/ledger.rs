use std::collections::{BTreeSet, HashMap};

use crate::{AccountId, AccountSummary, Amount};

/// Possible errors to occur during ledger operations
///
/// Both errors are reported before anything is mutated, so a failed
/// operation leaves the ledger exactly as it was.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Insufficient funds for transfer")]
    InsufficientFundsForTransfer,
}

/// The central in-memory ledger
///
/// The ledger keeps three books keyed by account number: balances, loan
/// balances and transaction logs. Accounts don't have to be created before
/// they are used. Reading an unknown account yields zero, and the first
/// mutation creates its entries on the fly.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Spendable funds per account
    balances: HashMap<AccountId, Amount>,
    /// Total loan principal drawn per account
    loan_balances: HashMap<AccountId, Amount>,
    /// Human readable, append-only log per account
    transaction_log: HashMap<AccountId, Vec<String>>,
}

impl Ledger {
    /// Creates a new, empty ledger
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            loan_balances: HashMap::new(),
            transaction_log: HashMap::new(),
        }
    }

    /// Opens an account with the specified starting balance
    ///
    /// ### Important
    /// Opening an account that already exists wipes its balance, its loan
    /// balance and its whole transaction history.
    pub fn create_account(&mut self, account: &AccountId, initial_balance: Amount) {
        tracing::debug!(%account, %initial_balance, "creating account");

        self.balances.insert(account.clone(), initial_balance);
        self.loan_balances.insert(account.clone(), Amount::ZERO);
        self.transaction_log.insert(account.clone(), Vec::new());
    }

    /// The spendable funds of an account, zero for unknown accounts
    pub fn balance(&self, account: &AccountId) -> Amount {
        Self::get_or_zero(&self.balances, account)
    }

    /// The total loan principal drawn by an account, zero for unknown accounts
    pub fn loan_balance(&self, account: &AccountId) -> Amount {
        Self::get_or_zero(&self.loan_balances, account)
    }

    /// Credits the specified amount to the account
    ///
    /// The amount is not validated. A negative deposit reduces the balance.
    pub fn deposit(&mut self, account: &AccountId, amount: Amount) {
        *self.balance_mut(account) += amount;
        self.record(account, format!("Deposit: +{amount}"));

        tracing::debug!(%account, %amount, "deposit");
    }

    /// Debits the specified amount from the account, if the balance covers it
    pub fn withdraw(&mut self, account: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        // NaN on either side must fail the check
        if !(self.balance(account) >= amount) {
            tracing::warn!(%account, %amount, "withdrawal rejected, insufficient funds");
            return Err(LedgerError::InsufficientFunds);
        }
        self.debit(account, amount);

        Ok(())
    }

    /// Draws a loan and credits it to the account
    ///
    /// The loan shows up twice in the log: once as a regular deposit and once
    /// as the loan itself.
    pub fn take_loan(&mut self, account: &AccountId, amount: Amount) {
        *self.loan_balance_mut(account) += amount;
        self.deposit(account, amount);
        self.record(account, format!("Loan: +{amount}"));

        tracing::debug!(%account, %amount, "loan");
    }

    /// Moves the specified amount from one account to another
    ///
    /// The recipient does not have to exist. A successful transfer appends a
    /// withdrawal and a transfer entry to the sender's log, and a deposit and
    /// a transfer entry to the recipient's log.
    pub fn transfer(&mut self, from: &AccountId, to: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        if !(self.balance(from) >= amount) {
            tracing::warn!(%from, %to, %amount, "transfer rejected, insufficient funds");
            return Err(LedgerError::InsufficientFundsForTransfer);
        }

        self.debit(from, amount);
        self.deposit(to, amount);
        self.record(from, format!("Transfer to {to}: -{amount}"));
        self.record(to, format!("Transfer from {from}: +{amount}"));

        tracing::info!(%from, %to, %amount, "transfer successful");
        Ok(())
    }

    /// The transaction log of an account in chronological order
    pub fn transaction_history(&self, account: &AccountId) -> &[String] {
        self.transaction_log
            .get(account)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Summaries of every account known to the ledger, sorted by account number
    pub fn accounts(&self) -> Vec<AccountSummary> {
        let ids = self.balances.keys()
            .chain(self.loan_balances.keys())
            .chain(self.transaction_log.keys())
            .collect::<BTreeSet<_>>();

        ids.into_iter()
            .map(|account| AccountSummary {
                account: account.clone(),
                balance: self.balance(account),
                loan: self.loan_balance(account),
                entries: self.transaction_history(account).len(),
            })
            .collect()
    }

    // callers have to check the balance themselves
    fn debit(&mut self, account: &AccountId, amount: Amount) {
        *self.balance_mut(account) -= amount;
        self.record(account, format!("Withdrawal: -{amount}"));

        tracing::debug!(%account, %amount, "withdrawal");
    }

    fn record(&mut self, account: &AccountId, entry: String) {
        self.transaction_log
            .entry(account.clone())
            .or_default()
            .push(entry);
    }

    fn get_or_zero(book: &HashMap<AccountId, Amount>, account: &AccountId) -> Amount {
        book.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn balance_mut(&mut self, account: &AccountId) -> &mut Amount {
        self.balances.entry(account.clone()).or_insert(Amount::ZERO)
    }

    fn loan_balance_mut(&mut self, account: &AccountId) -> &mut Amount {
        self.loan_balances.entry(account.clone()).or_insert(Amount::ZERO)
    }
}
