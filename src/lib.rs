//! Savings and checking accounts over a shared [`Account`] trait.
//!
//! Every kind supplies its own deposit rule; withdrawing and closing are
//! shared. A closed account rejects every further deposit and withdrawal.
//!
//! ```
//! use account_models::{Account, CheckingAccount, SavingAccount};
//! use rust_decimal::Decimal;
//!
//! let mut saving = SavingAccount::new("NASHVILLE-CUST-ABX100", "John Doe", "200.0".parse()?)?;
//! saving.deposit(Decimal::from(25))?;
//! assert_eq!(saving.amount().to_string(), "225.0");
//!
//! let mut checking = CheckingAccount::new(
//!     "NASHVILLE-CUST-ABY100",
//!     "Jane Doe",
//!     "200.0".parse()?,
//!     "2.0".parse()?,
//! )?;
//! checking.deposit(Decimal::from(25))?;
//! assert_eq!(checking.amount().to_string(), "223.0");
//!
//! checking.close();
//! assert!(checking.deposit(Decimal::from(10)).is_err());
//! assert_eq!(checking.to_string(), "<CheckingAccount NASHVILLE-CUST-ABY100>");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod report;

pub use domain::{Account, AccountError, CheckingAccount, Error, SavingAccount};
