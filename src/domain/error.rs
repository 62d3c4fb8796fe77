use rust_decimal::Decimal;

/// Rejections raised by the account model. The account is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("Cannot {operation} a closed account")]
    Closed { operation: &'static str },

    #[error("Cannot withdraw {requested}, only {available} available")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Amount {amount} is less than deposit fee {fee}")]
    BelowDepositFee { amount: Decimal, fee: Decimal },

    #[error("Depositing {amount} would overflow balance {balance}")]
    Overflow { amount: Decimal, balance: Decimal },

    #[error("Amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Decimal },

    #[error("Opening balance cannot be negative, got {0}")]
    NegativeBalance(Decimal),

    #[error("Deposit fee cannot be negative, got {0}")]
    NegativeFee(Decimal),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Engine failed with: {0}")]
    Engine(String),

    #[error("Account {id} rejected operation: {source}")]
    Account {
        id: String,
        #[source]
        source: AccountError,
    },
}
