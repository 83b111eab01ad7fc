use std::fmt;

use crate::{AccountId, Amount, AmountError, Ledger, LedgerError, Request, RequestType};

/// Possible errors to occur while handling a customer request
///
/// These are input problems. They are detected before the ledger is
/// called, so they never change any account.
#[derive(Debug, thiserror::Error)]
pub enum TellerError {
    #[error("The request is missing an amount")]
    MissingAmount,
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),
    #[error("The transfer is missing a recipient account")]
    MissingRecipient,
}

/// A notification popped up for the customer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl From<LedgerError> for Notice {
    fn from(err: LedgerError) -> Self {
        Notice::Error(err.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Success(msg) => write!(f, "Success: {msg}"),
            Notice::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// What the customer gets to see after a request
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// An account was opened
    Created {
        account: AccountId,
        balance: Amount,
    },
    /// A deposit, withdrawal, loan or transfer was attempted
    Action {
        /// Shown before anything else, if present
        notice: Option<Notice>,
        /// The balance of the requesting account after the attempt
        balance: Amount,
        /// The action name together with the current loan balance
        result: String,
    },
    /// The transaction history, one entry per line
    History(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created { account, balance } => {
                write!(f, "Account {account} created. Balance: ${balance}")
            }
            Outcome::Action { notice, balance, result } => {
                if let Some(notice) = notice {
                    writeln!(f, "{notice}")?;
                }
                writeln!(f, "Balance: ${balance}")?;
                write!(f, "Result: {result}")
            }
            Outcome::History(text) => f.write_str(text.trim_end_matches('\n')),
        }
    }
}

/// The counter in front of the ledger
///
/// The teller parses the raw customer input, forwards it to the ledger and
/// renders the answer. It holds no state of its own, the ledger is borrowed
/// from whoever owns it.
#[derive(Debug)]
pub struct Teller<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> Teller<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Handles one customer request
    pub fn perform(&mut self, request: &Request) -> Result<Outcome, TellerError> {
        let account = request.account();
        let request_type = request.request_type();

        let notice = match request_type {
            RequestType::History => return Ok(self.history(account)),
            RequestType::Create => {
                let balance = Self::parse_amount(request)?;
                self.ledger.create_account(account, balance);
                tracing::info!(%account, %balance, "account created");

                return Ok(Outcome::Created { account: account.clone(), balance });
            }
            RequestType::Deposit => {
                self.ledger.deposit(account, Self::parse_amount(request)?);
                None
            }
            RequestType::Withdraw => {
                let amount = Self::parse_amount(request)?;
                self.ledger.withdraw(account, amount).err().map(Notice::from)
            }
            RequestType::Loan => {
                self.ledger.take_loan(account, Self::parse_amount(request)?);
                None
            }
            RequestType::Transfer => {
                let amount = Self::parse_amount(request)?;
                let to = request.recipient().ok_or(TellerError::MissingRecipient)?;
                Some(match self.ledger.transfer(account, to, amount) {
                    Ok(()) => Notice::Success("Transfer successful".to_owned()),
                    Err(err) => err.into(),
                })
            }
        };

        // the form reports the action as successful even after an error notice
        Ok(Outcome::Action {
            notice,
            balance: self.ledger.balance(account),
            result: format!(
                "{} successful. Loan Balance: ${}",
                request_type.name(),
                self.ledger.loan_balance(account),
            ),
        })
    }

    fn history(&self, account: &AccountId) -> Outcome {
        let mut text = String::from("Transaction History:\n");
        for entry in self.ledger.transaction_history(account) {
            text.push_str(entry);
            text.push('\n');
        }

        Outcome::History(text)
    }

    fn parse_amount(request: &Request) -> Result<Amount, TellerError> {
        let amount = request
            .amount()
            .ok_or(TellerError::MissingAmount)?
            .parse::<Amount>()?;

        Ok(amount)
    }
}
