use crate::account::AccountId;

/// The different actions a customer can request at the counter
#[derive(Clone, Copy, Debug, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Open an account, or reopen it with a fresh balance
    Create,
    /// Pay money into an account
    Deposit,
    /// Take money out of an account
    Withdraw,
    /// Draw a loan that is paid into the account
    Loan,
    /// Move money to another account
    Transfer,
    /// Show the transaction log of an account
    History,
}

impl RequestType {
    /// The name of the action, as shown to the customer
    pub fn name(self) -> &'static str {
        match self {
            RequestType::Create => "create",
            RequestType::Deposit => "deposit",
            RequestType::Withdraw => "withdraw",
            RequestType::Loan => "loan",
            RequestType::Transfer => "transfer",
            RequestType::History => "history",
        }
    }
}

/// A customer request
///
/// Requests carry the raw input of the customer. The amount stays a string
/// until the teller parses it, so a malformed amount is rejected before the
/// ledger is ever touched.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Request {
    #[serde(rename = "action")]
    request_type: RequestType,
    account: AccountId,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    to: Option<AccountId>,
}

impl Request {
    pub fn new(request_type: RequestType, account: impl Into<AccountId>) -> Self {
        Self {
            request_type,
            account: account.into(),
            amount: None,
            to: None,
        }
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn with_recipient(mut self, to: impl Into<AccountId>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// The requested action
    pub fn request_type(&self) -> RequestType {
        self.request_type
    }

    /// The account number typed in by the customer
    pub fn account(&self) -> &AccountId {
        &self.account
    }

    /// The raw amount
    /// Not needed for history requests
    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    /// The recipient of a transfer
    pub fn recipient(&self) -> Option<&AccountId> {
        self.to.as_ref()
    }
}
