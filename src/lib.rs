pub use self::{
    account::{AccountId, AccountSummary},
    amount::{Amount, AmountError},
    ledger::{Ledger, LedgerError},
    request::{Request, RequestType},
    teller::{Notice, Outcome, Teller, TellerError},
};

mod account;
mod amount;
mod ledger;
mod request;
mod teller;
