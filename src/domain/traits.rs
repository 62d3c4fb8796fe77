use core::fmt;

use futures::Stream;
use rust_decimal::Decimal;

use crate::domain::{AccountError, AccountState, Error, Operation};

/// Behavior shared by every account kind.
///
/// Implementors supply their deposit rule and delegate withdrawing and
/// closing to the shared [`AccountState`]. The state is only reachable
/// read-only, so a closed account stays closed:
///
/// ```compile_fail
/// use account_models::{Account, SavingAccount};
/// use rust_decimal::Decimal;
///
/// let mut account = SavingAccount::new("A", "Ann", Decimal::TEN).unwrap();
/// account.close();
/// account.state().is_open = true;
/// ```
pub trait Account: fmt::Display + fmt::Debug + Send {
    fn state(&self) -> &AccountState;

    /// Name of the concrete kind, used for display and reporting.
    fn kind(&self) -> &'static str;

    /// Credits `amount` according to the kind's rule. Fails without touching
    /// the balance when the account is closed or the rule rejects the amount.
    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError>;

    /// Debits `amount` if it does not exceed the balance.
    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError>;

    fn close(&mut self);

    fn id(&self) -> &str {
        &self.state().id
    }

    fn account_holder(&self) -> &str {
        &self.state().account_holder
    }

    fn amount(&self) -> Decimal {
        self.state().amount
    }

    fn is_open(&self) -> bool {
        self.state().is_open
    }
}

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait AccountRepository {
    fn insert_account(&mut self, account: Box<dyn Account>) -> Result<(), Error>;

    fn get_account(&mut self, account_id: &str) -> Option<&mut (dyn Account + 'static)>;

    fn flush(&mut self);
}
