use core::fmt;

use rust_decimal::Decimal;

use crate::domain::{AccountError, traits::Account};

/// Fields common to every account kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountState {
    pub(crate) id: String,
    pub(crate) account_holder: String,
    pub(crate) amount: Decimal, // balance, only changed by deposit/withdraw
    pub(crate) is_open: bool,   // one-way: true until closed
}

impl AccountState {
    pub(crate) fn new(
        id: impl Into<String>,
        account_holder: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self, AccountError> {
        if amount < Decimal::ZERO {
            return Err(AccountError::NegativeBalance(amount));
        }

        Ok(Self {
            id: id.into(),
            account_holder: account_holder.into(),
            amount,
            is_open: true,
        })
    }

    pub(crate) fn ensure_open(&self, operation: &'static str) -> Result<(), AccountError> {
        if self.is_open {
            Ok(())
        } else {
            Err(AccountError::Closed { operation })
        }
    }

    /// Adds `amount` to the balance, leaving it untouched on overflow.
    pub(crate) fn credit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(AccountError::Overflow {
                amount,
                balance: self.amount,
            })?;
        Ok(())
    }

    pub(crate) fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.ensure_open("withdraw from")?;
        Self::ensure_positive(amount)?;

        if amount > self.amount {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.amount,
            });
        }

        self.amount -= amount;
        Ok(())
    }

    pub(crate) fn close(&mut self) {
        self.is_open = false;
    }

    pub(crate) fn ensure_positive(amount: Decimal) -> Result<(), AccountError> {
        if amount > Decimal::ZERO {
            Ok(())
        } else {
            Err(AccountError::NonPositiveAmount { amount })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingAccount {
    state: AccountState,
}

impl SavingAccount {
    pub fn new(
        id: impl Into<String>,
        account_holder: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self, AccountError> {
        Ok(Self {
            state: AccountState::new(id, account_holder, amount)?,
        })
    }

    /// Starts the account in the closed state.
    pub fn closed(mut self) -> Self {
        self.state.is_open = false;
        self
    }
}

impl Account for SavingAccount {
    fn state(&self) -> &AccountState {
        &self.state
    }

    fn kind(&self) -> &'static str {
        "SavingAccount"
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.state.ensure_open("deposit to")?;
        AccountState::ensure_positive(amount)?;

        self.state.credit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.state.withdraw(amount)
    }

    fn close(&mut self) {
        self.state.close();
    }
}

/// Account that charges a flat fee on every deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckingAccount {
    state: AccountState,
    deposit_fee: Decimal,
}

impl CheckingAccount {
    pub fn new(
        id: impl Into<String>,
        account_holder: impl Into<String>,
        amount: Decimal,
        deposit_fee: Decimal,
    ) -> Result<Self, AccountError> {
        if deposit_fee < Decimal::ZERO {
            return Err(AccountError::NegativeFee(deposit_fee));
        }

        Ok(Self {
            state: AccountState::new(id, account_holder, amount)?,
            deposit_fee,
        })
    }

    /// Starts the account in the closed state.
    pub fn closed(mut self) -> Self {
        self.state.is_open = false;
        self
    }

    pub fn deposit_fee(&self) -> Decimal {
        self.deposit_fee
    }
}

impl Account for CheckingAccount {
    fn state(&self) -> &AccountState {
        &self.state
    }

    fn kind(&self) -> &'static str {
        "CheckingAccount"
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.state.ensure_open("deposit to")?;
        AccountState::ensure_positive(amount)?;

        // the fee has to be covered in full, nothing is credited otherwise
        if amount < self.deposit_fee {
            return Err(AccountError::BelowDepositFee {
                amount,
                fee: self.deposit_fee,
            });
        }

        self.state.credit(amount - self.deposit_fee)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.state.withdraw(amount)
    }

    fn close(&mut self) {
        self.state.close();
    }
}

impl fmt::Display for SavingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.kind(), self.state.id)
    }
}

impl fmt::Display for CheckingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.kind(), self.state.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn saving() -> SavingAccount {
        SavingAccount::new("NASHVILLE-CUST-ABX100", "John Doe", dec("200.0")).unwrap()
    }

    fn checking() -> CheckingAccount {
        CheckingAccount::new("NASHVILLE-CUST-ABY100", "Jane Doe", dec("200.0"), dec("2.0"))
            .unwrap()
    }

    #[test]
    fn saving_deposit_adds_full_amount() {
        let mut account = saving();
        account.deposit(dec("25")).unwrap();
        assert_eq!(account.amount(), dec("225.0"));
    }

    #[test]
    fn checking_deposit_subtracts_fee() {
        let mut account = checking();
        account.deposit(dec("25")).unwrap();
        assert_eq!(account.amount(), dec("223.0"));
    }

    #[test]
    fn checking_deposit_below_fee_is_rejected_whole() {
        let mut account = checking();
        let err = account.deposit(dec("1.99")).unwrap_err();
        assert_eq!(
            err,
            AccountError::BelowDepositFee {
                amount: dec("1.99"),
                fee: dec("2.0")
            }
        );
        assert_eq!(account.amount(), dec("200.0"));
    }

    #[test]
    fn checking_deposit_equal_to_fee_credits_nothing() {
        let mut account = checking();
        account.deposit(dec("2.0")).unwrap();
        assert_eq!(account.amount(), dec("200.0"));
    }

    #[test]
    fn closed_account_rejects_deposit_and_withdraw() {
        let mut account = checking();
        account.deposit(dec("25")).unwrap();
        account.close();

        assert_eq!(
            account.deposit(dec("10")).unwrap_err().to_string(),
            "Cannot deposit to a closed account"
        );
        assert_eq!(
            account.withdraw(dec("10")).unwrap_err().to_string(),
            "Cannot withdraw from a closed account"
        );
        assert_eq!(account.amount(), dec("223.0"));
        assert!(!account.is_open());
    }

    #[test]
    fn withdraw_debits_exact_amount() {
        let mut account = saving();
        account.withdraw(dec("50.5")).unwrap();
        assert_eq!(account.amount(), dec("149.5"));
    }

    #[test]
    fn withdraw_whole_balance_drains_to_zero() {
        let mut account = saving();
        account.withdraw(dec("200.0")).unwrap();
        assert!(account.amount().is_zero());
    }

    #[test]
    fn withdraw_more_than_balance_fails() {
        let mut account = saving();
        let err = account.withdraw(dec("200.01")).unwrap_err();
        assert!(matches!(err, AccountError::InsufficientFunds { .. }));
        assert_eq!(account.amount(), dec("200.0"));
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut account = saving();
        assert!(matches!(
            account.withdraw(dec("-5")),
            Err(AccountError::NonPositiveAmount { .. })
        ));
        assert!(matches!(
            account.deposit(Decimal::ZERO),
            Err(AccountError::NonPositiveAmount { .. })
        ));
        assert_eq!(account.amount(), dec("200.0"));
    }

    #[test]
    fn close_is_idempotent_and_ignores_balance() {
        let mut account = saving();
        account.close();
        account.close();
        assert!(!account.is_open());
        assert_eq!(account.amount(), dec("200.0"));
    }

    #[test]
    fn constructor_validates_amounts() {
        assert_eq!(
            SavingAccount::new("A", "B", dec("-1")).unwrap_err(),
            AccountError::NegativeBalance(dec("-1"))
        );
        assert_eq!(
            CheckingAccount::new("A", "B", dec("1"), dec("-0.5")).unwrap_err(),
            AccountError::NegativeFee(dec("-0.5"))
        );
        assert!(CheckingAccount::new("A", "B", Decimal::ZERO, Decimal::ZERO).is_ok());
    }

    #[test]
    fn closed_builder_sets_initial_status() {
        let mut account = saving().closed();
        assert!(!account.is_open());
        assert!(account.deposit(dec("1")).is_err());
    }

    #[test]
    fn closed_account_stays_closed() {
        let mut account = checking();
        account.close();

        let mut account = account.closed();
        assert!(account.deposit(dec("5")).is_err());
        assert!(account.withdraw(dec("5")).is_err());
        account.close();

        assert!(!account.is_open());
        assert_eq!(account.amount(), dec("200.0"));
        assert_eq!(account.account_holder(), "Jane Doe");
    }

    #[test]
    fn deposit_overflow_is_rejected() {
        let mut account = SavingAccount::new("A", "Ann", Decimal::MAX).unwrap();
        assert_eq!(
            account.deposit(Decimal::ONE).unwrap_err(),
            AccountError::Overflow {
                amount: Decimal::ONE,
                balance: Decimal::MAX,
            }
        );
        assert_eq!(account.amount(), Decimal::MAX);

        let mut account = CheckingAccount::new("C", "Cal", Decimal::MAX, dec("1")).unwrap();
        assert!(matches!(
            account.deposit(dec("3")),
            Err(AccountError::Overflow { .. })
        ));
        assert_eq!(account.amount(), Decimal::MAX);
    }

    #[test]
    fn display_shows_kind_and_id() {
        assert_eq!(saving().to_string(), "<SavingAccount NASHVILLE-CUST-ABX100>");
        assert_eq!(checking().to_string(), "<CheckingAccount NASHVILLE-CUST-ABY100>");
    }
}
