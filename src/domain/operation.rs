use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    OpenSaving {
        holder: String,
        amount: Decimal,
    },
    OpenChecking {
        holder: String,
        amount: Decimal,
        deposit_fee: Decimal,
    },
    Deposit {
        amount: Decimal,
    },
    Withdraw {
        amount: Decimal,
    },
    Close,
}

/// A single scripted step against one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    pub account_id: String,
}

impl OperationKind {
    /// Script name of the operation, as accepted by the CSV reader.
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::OpenSaving { .. } => "open_saving",
            OperationKind::OpenChecking { .. } => "open_checking",
            OperationKind::Deposit { .. } => "deposit",
            OperationKind::Withdraw { .. } => "withdraw",
            OperationKind::Close => "close",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            OperationKind::OpenSaving { amount, .. }
            | OperationKind::OpenChecking { amount, .. }
            | OperationKind::Deposit { amount }
            | OperationKind::Withdraw { amount } => write!(
                f,
                "{},account={},amount={}",
                self.kind.name(),
                self.account_id,
                amount
            ),
            OperationKind::Close => write!(f, "{},account={}", self.kind.name(), self.account_id),
        }
    }
}
