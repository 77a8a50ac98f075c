//! Type filter offered next to the transaction search box.

use super::transaction::TxnKind;

/// Transaction type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// No filtering.
    #[default]
    All,
    /// Deposits only.
    Deposit,
    /// Withdrawals only.
    Withdraw,
    /// Transfers only.
    Transfer,
}

impl TypeFilter {
    /// Returns `true` if a transaction of `kind` passes this filter.
    #[must_use]
    pub const fn matches(&self, kind: TxnKind) -> bool {
        match self {
            Self::All => true,
            Self::Deposit => matches!(kind, TxnKind::Deposit),
            Self::Withdraw => matches!(kind, TxnKind::Withdraw),
            Self::Transfer => matches!(kind, TxnKind::Transfer),
        }
    }

    /// Value of the `type` query parameter; `None` means "omit it".
    #[must_use]
    pub const fn as_query(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Deposit => Some("deposit"),
            Self::Withdraw => Some("withdraw"),
            Self::Transfer => Some("transfer"),
        }
    }

    /// Display label for the controls bar.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Deposit => "Deposits",
            Self::Withdraw => "Withdrawals",
            Self::Transfer => "Transfers",
        }
    }

    /// Cycles to the next filter.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Deposit,
            Self::Deposit => Self::Withdraw,
            Self::Withdraw => Self::Transfer,
            Self::Transfer => Self::All,
        }
    }
}
