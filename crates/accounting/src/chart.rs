use serde::{Deserialize, Serialize};

use australerp_core::{AccountId, DomainError, DomainResult, Entity};

/// Side on which an account's balance conventionally increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSide {
    Debit,
    Credit,
}

impl BalanceSide {
    pub fn opposite(self) -> Self {
        match self {
            BalanceSide::Debit => BalanceSide::Credit,
            BalanceSide::Credit => BalanceSide::Debit,
        }
    }
}

/// High-level account kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl AccountKind {
    /// Accounting-convention default: assets and expenses carry a debit
    /// balance, everything else a credit balance.
    pub fn normal_side(self) -> BalanceSide {
        match self {
            AccountKind::Asset | AccountKind::Expense => BalanceSide::Debit,
            AccountKind::Liability | AccountKind::Equity | AccountKind::Revenue => {
                BalanceSide::Credit
            }
        }
    }
}

/// Chart-of-accounts entry.
///
/// `normal_side` is stored explicitly rather than derived from `kind`, so a
/// chart can override the convention (e.g. contra accounts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    /// Ordering/display code, e.g. "1.1.2". Hierarchical, sorted lexically.
    pub code: String,
    pub name: String,
    pub kind: AccountKind,
    pub normal_side: BalanceSide,
    /// Journal lines may only target postable accounts; non-postable accounts
    /// are headers used for grouping in reports.
    pub postable: bool,
    pub active: bool,
}

impl Account {
    /// Create a postable, active account on its kind's normal side.
    pub fn new(
        id: AccountId,
        code: impl Into<String>,
        name: impl Into<String>,
        kind: AccountKind,
    ) -> DomainResult<Self> {
        Self::with_normal_side(id, code, name, kind, kind.normal_side())
    }

    /// Create an account with an explicit normal balance side.
    pub fn with_normal_side(
        id: AccountId,
        code: impl Into<String>,
        name: impl Into<String>,
        kind: AccountKind,
        normal_side: BalanceSide,
    ) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("account code must not be empty"));
        }

        Ok(Self {
            id,
            code,
            name: name.into(),
            kind,
            normal_side,
            postable: true,
            active: true,
        })
    }

    /// Mark this account as a non-postable header account.
    pub fn header(mut self) -> Self {
        self.postable = false;
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &AccountId {
        &self.id
    }
}
