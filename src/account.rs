use std::fmt;

use crate::Amount;

/// The identifier of an account
///
/// Identifiers are opaque. They are always supplied by the caller and never
/// validated, any string is a valid account number.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A point in time view of one account
///
/// The summary combines the three ledger books:
/// 1. The balance:
///    Funds the account holder can spend.
/// 2. The loan balance:
///    The total principal ever drawn as a loan. Loans are never repaid,
///    so this only grows.
/// 3. The number of entries in the transaction log.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountSummary {
    pub account: AccountId,
    pub balance: Amount,
    pub loan: Amount,
    pub entries: usize,
}

impl serde::Serialize for AccountSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: serde::Serializer
    {
        use serde::ser::SerializeStruct;
        let mut map = serializer.serialize_struct("AccountSummary", 4)?;

        map.serialize_field("account", &self.account)?;
        map.serialize_field("balance", &self.balance)?;
        map.serialize_field("loan", &self.loan)?;
        map.serialize_field("entries", &self.entries)?;

        map.end()
    }
}
