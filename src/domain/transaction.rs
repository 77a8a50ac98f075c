//! Transaction types for the Cassa banking API.
//!
//! The API reports the transaction type as a display label that may be
//! localized (`"Пополнение"`) or an enum token (`"deposit"`), and encodes the
//! direction of a transfer as an arrow inside the description. Both are
//! normalized once, when a record is decoded, into [`TxnKind`] and
//! [`TransferDirection`]. Nothing downstream looks at the raw strings again.

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Description marker the server uses for the receiving side of a transfer.
const INCOMING_MARKER: char = '←';

/// Timestamp layout used in the transaction table.
const DISPLAY_TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

// ============================================================================
// Transaction Kind
// ============================================================================

/// Normalized transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TxnKind {
    /// Money paid into an account.
    Deposit,
    /// Money taken out of an account.
    Withdraw,
    /// Money moved between two accounts.
    Transfer,
    /// Label the client does not recognise.
    #[default]
    Unknown,
}

impl TxnKind {
    /// Maps a server label to a kind.
    ///
    /// Enum tokens are compared exactly, localized labels by containment,
    /// both case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label == "deposit" || label.contains("пополнение") {
            Self::Deposit
        } else if label == "withdraw" || label.contains("снятие") {
            Self::Withdraw
        } else if label == "transfer" || label.contains("перевод") {
            Self::Transfer
        } else {
            Self::Unknown
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::Transfer => "Transfer",
            Self::Unknown => "Unknown",
        }
    }
}

/// Which side of a transfer the listed account is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    /// The listed account received the money.
    Incoming,
    /// The listed account sent the money.
    Outgoing,
}

// ============================================================================
// Transaction
// ============================================================================

/// A transaction as listed by the admin endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "TransactionRecord")]
pub struct Transaction {
    /// Server-side identifier.
    pub id: u64,
    /// Owner of the listed account.
    pub client_name: String,
    /// Number of the listed account.
    pub account_number: String,
    /// Currency the amount is expressed in.
    pub currency: String,
    /// Unsigned amount.
    pub amount: Decimal,
    /// Normalized type.
    pub kind: TxnKind,
    /// Set for transfers only.
    pub direction: Option<TransferDirection>,
    /// Free-text description.
    pub description: String,
    /// ISO-8601 timestamp as sent by the server.
    pub timestamp: String,
    /// Sending account of a transfer.
    pub from_account: Option<String>,
    /// Receiving account of a transfer.
    pub to_account: Option<String>,
}

/// Wire shape of a transaction record.
#[derive(Debug, Deserialize)]
struct TransactionRecord {
    id: u64,
    #[serde(default)]
    client_name: String,
    #[serde(default)]
    account_number: String,
    #[serde(default)]
    currency: Option<String>,
    amount: Decimal,
    #[serde(rename = "type", default)]
    type_label: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    timestamp: String,
    #[serde(default)]
    from_account: Option<String>,
    #[serde(default)]
    to_account: Option<String>,
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        let kind = TxnKind::from_label(&record.type_label);
        let description = record.description.unwrap_or_default();
        let direction = (kind == TxnKind::Transfer).then(|| {
            if description.contains(INCOMING_MARKER) {
                TransferDirection::Incoming
            } else {
                TransferDirection::Outgoing
            }
        });

        Self {
            id: record.id,
            client_name: record.client_name,
            account_number: record.account_number,
            currency: record.currency.unwrap_or_default(),
            amount: record.amount,
            kind,
            direction,
            description,
            timestamp: record.timestamp,
            from_account: record.from_account,
            to_account: record.to_account,
        }
    }
}

impl Transaction {
    /// Returns `true` when money arrived on the listed account.
    #[must_use]
    pub fn is_credit(&self) -> bool {
        match self.kind {
            TxnKind::Deposit => true,
            TxnKind::Transfer => self.direction == Some(TransferDirection::Incoming),
            TxnKind::Withdraw | TxnKind::Unknown => false,
        }
    }

    /// Sign shown in front of the amount. Empty for unknown kinds.
    #[must_use]
    pub fn sign(&self) -> &'static str {
        match self.kind {
            TxnKind::Unknown => "",
            _ if self.is_credit() => "+",
            _ => "-",
        }
    }

    /// Amount with sign, two decimals and currency, e.g. `+150.00 RUB`.
    #[must_use]
    pub fn signed_amount(&self) -> String {
        format!("{}{:.2} {}", self.sign(), self.amount, self.currency)
            .trim_end()
            .to_string()
    }

    /// The other side of a transfer, with an arrow giving the direction.
    #[must_use]
    pub fn counterparty(&self) -> Option<String> {
        match self.direction? {
            TransferDirection::Incoming => self.from_account.as_ref().map(|a| format!("← {a}")),
            TransferDirection::Outgoing => self.to_account.as_ref().map(|a| format!("→ {a}")),
        }
    }

    /// Timestamp in `dd.mm.yyyy HH:MM`, or the raw value if it does not parse.
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

/// Format an ISO-8601 timestamp for the transaction table.
///
/// Offsets are kept as sent; naive timestamps are shown unchanged.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format(DISPLAY_TIMESTAMP_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY_TIMESTAMP_FORMAT).to_string();
    }
    raw.to_string()
}

// ============================================================================
// Transaction Page
// ============================================================================

/// Body of the recent-transactions and search-transactions endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionPage {
    /// Transactions, most recent first.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Number of matches the server reports.
    #[serde(default)]
    pub total_count: Option<usize>,
    /// Limit the server actually applied.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Authoritative "more data" flag, when the server sends one.
    #[serde(default)]
    pub has_more: Option<bool>,
    /// Error reported inside a 2xx response.
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::JsonMother;
    use rstest::rstest;

    #[rstest]
    #[case::token("deposit", TxnKind::Deposit)]
    #[case::token_upper("WITHDRAW", TxnKind::Withdraw)]
    #[case::token_mixed(" Transfer ", TxnKind::Transfer)]
    #[case::localized_deposit("Пополнение", TxnKind::Deposit)]
    #[case::localized_withdraw("Снятие", TxnKind::Withdraw)]
    #[case::localized_transfer("ПЕРЕВОД", TxnKind::Transfer)]
    #[case::token_substring_is_not_enough("deposits", TxnKind::Unknown)]
    #[case::empty("", TxnKind::Unknown)]
    fn test_kind_from_label(#[case] label: &str, #[case] expected: TxnKind) {
        assert_eq!(TxnKind::from_label(label), expected);
    }

    #[test]
    fn test_decode_normalizes_kind_and_direction() {
        let incoming: Transaction =
            serde_json::from_value(JsonMother::transfer(7, "Перевод ← 40817810000000000001"))
                .unwrap();
        assert_eq!(incoming.kind, TxnKind::Transfer);
        assert_eq!(incoming.direction, Some(TransferDirection::Incoming));
        assert!(incoming.is_credit());
        assert_eq!(incoming.sign(), "+");
        assert_eq!(
            incoming.counterparty().as_deref(),
            Some("← 40817810000000000001")
        );

        let outgoing: Transaction =
            serde_json::from_value(JsonMother::transfer(8, "Перевод → 40817810000000000002"))
                .unwrap();
        assert_eq!(outgoing.direction, Some(TransferDirection::Outgoing));
        assert_eq!(outgoing.sign(), "-");
        assert_eq!(
            outgoing.counterparty().as_deref(),
            Some("→ 40817810000000000002")
        );
    }

    #[test]
    fn test_decode_deposit_and_withdraw() {
        let deposit: Transaction =
            serde_json::from_value(JsonMother::transaction(1, "Пополнение")).unwrap();
        assert_eq!(deposit.kind, TxnKind::Deposit);
        assert_eq!(deposit.direction, None);
        assert_eq!(deposit.signed_amount(), "+150.00 RUB");
        assert_eq!(deposit.counterparty(), None);

        let withdraw: Transaction =
            serde_json::from_value(JsonMother::transaction(2, "withdraw")).unwrap();
        assert_eq!(withdraw.signed_amount(), "-150.00 RUB");
    }

    #[test]
    fn test_decode_tolerates_nulls() {
        let json = serde_json::json!({
            "id": 3,
            "amount": 12.5,
            "type": "Снятие",
            "description": null,
            "currency": null,
            "timestamp": "2024-03-05T09:07:00+00:00",
            "from_account": null,
            "to_account": null
        });
        let txn: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(txn.description, "");
        assert_eq!(txn.currency, "");
        assert_eq!(txn.signed_amount(), "-12.50");
    }

    #[rstest]
    #[case::offset("2024-03-05T09:07:00+03:00", "05.03.2024 09:07")]
    #[case::fractional_offset("2024-12-31T23:59:59.123456+00:00", "31.12.2024 23:59")]
    #[case::naive("2024-01-02T03:04:05.000001", "02.01.2024 03:04")]
    #[case::garbage("yesterday", "yesterday")]
    fn test_format_timestamp(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_timestamp(raw), expected);
    }

    #[test]
    fn test_page_defaults_missing_fields() {
        let page: TransactionPage = serde_json::from_str("{}").unwrap();
        assert!(page.transactions.is_empty());
        assert_eq!(page.has_more, None);
        assert_eq!(page.error, None);

        let page: TransactionPage = serde_json::from_value(serde_json::json!({
            "transactions": [JsonMother::transaction(1, "deposit")],
            "total_count": 1,
            "limit": 10,
            "has_more": false
        }))
        .unwrap();
        assert_eq!(page.transactions.len(), 1);
        assert_eq!(page.total_count, Some(1));
        assert_eq!(page.limit, Some(10));
        assert_eq!(page.has_more, Some(false));
    }
}
