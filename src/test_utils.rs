//! Shared test utilities and Mother pattern factories.
//!
//! Reusable fixtures so tests do not copy-paste setup code.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::client::{SearchQuery, TransactionApi};
use crate::domain::transaction::TransferDirection;
use crate::domain::{CassaError, Transaction, TransactionPage, TxnKind};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    fn base(id: u64, kind: TxnKind) -> Transaction {
        Transaction {
            id,
            client_name: "Иван Петров".to_string(),
            account_number: "40817810000000000001".to_string(),
            currency: "RUB".to_string(),
            amount: Decimal::new(15_000, 2),
            kind,
            direction: None,
            description: String::new(),
            timestamp: "2024-03-05T09:07:00+03:00".to_string(),
            from_account: None,
            to_account: None,
        }
    }

    #[must_use]
    pub fn deposit(id: u64) -> Transaction {
        Self::base(id, TxnKind::Deposit)
    }

    #[must_use]
    pub fn withdraw(id: u64) -> Transaction {
        Self::base(id, TxnKind::Withdraw)
    }

    #[must_use]
    pub fn transfer_in(id: u64) -> Transaction {
        Transaction {
            direction: Some(TransferDirection::Incoming),
            description: "Перевод ← 40817810000000000009".to_string(),
            from_account: Some("40817810000000000009".to_string()),
            to_account: Some("40817810000000000001".to_string()),
            ..Self::base(id, TxnKind::Transfer)
        }
    }

    #[must_use]
    pub fn transfer_out(id: u64) -> Transaction {
        Transaction {
            direction: Some(TransferDirection::Outgoing),
            description: "Перевод → 40817810000000000009".to_string(),
            from_account: Some("40817810000000000001".to_string()),
            to_account: Some("40817810000000000009".to_string()),
            ..Self::base(id, TxnKind::Transfer)
        }
    }

    /// `count` deposits with descending ids.
    #[must_use]
    pub fn deposits(count: usize) -> Vec<Transaction> {
        (0..count as u64).rev().map(Self::deposit).collect()
    }

    /// Five transactions, two of them deposits, most recent first.
    #[must_use]
    pub fn mixed() -> Vec<Transaction> {
        vec![
            Self::deposit(5),
            Self::withdraw(4),
            Self::transfer_in(3),
            Self::deposit(2),
            Self::transfer_out(1),
        ]
    }
}

/// Raw API payloads as the server sends them.
pub struct JsonMother;

impl JsonMother {
    #[must_use]
    pub fn transaction(id: u64, type_label: &str) -> Value {
        json!({
            "id": id,
            "account_number": "40817810000000000001",
            "client_name": "Иван Петров",
            "amount": 150.0,
            "type": type_label,
            "description": "",
            "timestamp": "2024-03-05T09:07:00+03:00",
            "currency": "RUB"
        })
    }

    #[must_use]
    pub fn transfer(id: u64, description: &str) -> Value {
        json!({
            "id": id,
            "account_number": "40817810000000000001",
            "client_name": "Иван Петров",
            "amount": 150.0,
            "type": "Перевод",
            "description": description,
            "timestamp": "2024-03-05T09:07:00+03:00",
            "currency": "RUB",
            "from_account": "40817810000000000001",
            "to_account": "40817810000000000002"
        })
    }

    #[must_use]
    pub fn page(transactions: &[Value]) -> Value {
        json!({
            "transactions": transactions,
            "total_count": transactions.len()
        })
    }
}

// ============================================================================
// Fake API
// ============================================================================

/// In-memory [`TransactionApi`] that records every call.
///
/// Returns up to `available` deposits per call.
#[derive(Debug, Clone)]
pub struct FakeApi {
    pub available: usize,
    pub fail_with: Option<u16>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    #[must_use]
    pub fn with_available(available: usize) -> Self {
        Self {
            available,
            fail_with: None,
            calls: Arc::default(),
        }
    }

    #[must_use]
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::with_available(0)
        }
    }

    /// Calls so far, e.g. `recent:10` or `search:ivan:all:10`.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn respond(&self, call: String, limit: u32) -> Result<TransactionPage, CassaError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if let Some(status) = self.fail_with {
            return Err(CassaError::http_status(status, "fake failure"));
        }
        let transactions = TransactionMother::deposits(self.available.min(limit as usize));
        Ok(TransactionPage {
            total_count: Some(transactions.len()),
            transactions,
            limit: Some(limit),
            ..TransactionPage::default()
        })
    }
}

impl TransactionApi for FakeApi {
    async fn recent_transactions(&self, limit: u32) -> Result<TransactionPage, CassaError> {
        self.respond(format!("recent:{limit}"), limit)
    }

    async fn search_transactions(
        &self,
        query: &SearchQuery,
    ) -> Result<TransactionPage, CassaError> {
        let filter = query.filter.as_query().unwrap_or("all");
        self.respond(
            format!("search:{}:{filter}:{}", query.term, query.limit),
            query.limit,
        )
    }
}
