pub mod account;
pub mod error;
pub mod operation;
pub mod traits;

pub use account::{AccountState, CheckingAccount, SavingAccount};
pub use error::{AccountError, Error};
pub use operation::{Operation, OperationKind};
pub use traits::{Account, AccountRepository, DeadLetterQueue, OperationStream};
