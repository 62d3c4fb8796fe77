use crate::domain::{
    Account, AccountError, CheckingAccount, Error, Operation, OperationKind, SavingAccount,
    traits::{AccountRepository, DeadLetterQueue, OperationStream},
};

use futures::StreamExt;

/// Replays a stream of operations against a repository of accounts.
/// Every rejected operation goes to the dead-letter queue and the replay goes on.
#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: OperationStream,
    O: AccountRepository,
    D: DeadLetterQueue,
{
    ingestion: I,
    repository: O,
    dlq: D,
}

impl<I, O, D> Engine<I, O, D>
where
    I: OperationStream,
    O: AccountRepository,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, repository: O, dlq: D) -> Self {
        Self {
            ingestion,
            repository,
            dlq,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut ops = self.ingestion.stream();

        while let Some(op) = ops.next().await {
            match op.and_then(|op| self.apply_operation(op)) {
                Ok(()) => {}
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> Result<(), Error> {
        tracing::debug!(operation = %op, "applying");

        match op.kind {
            OperationKind::OpenSaving { holder, amount } => {
                let account = SavingAccount::new(op.account_id.as_str(), holder, amount)
                    .map_err(|e| rejected(&op.account_id, e))?;
                self.repository.insert_account(Box::new(account))
            }
            OperationKind::OpenChecking {
                holder,
                amount,
                deposit_fee,
            } => {
                let account =
                    CheckingAccount::new(op.account_id.as_str(), holder, amount, deposit_fee)
                        .map_err(|e| rejected(&op.account_id, e))?;
                self.repository.insert_account(Box::new(account))
            }
            OperationKind::Deposit { amount } => {
                self.with_account(&op.account_id, |account| account.deposit(amount))
            }
            OperationKind::Withdraw { amount } => {
                self.with_account(&op.account_id, |account| account.withdraw(amount))
            }
            OperationKind::Close => self.with_account(&op.account_id, |account| {
                account.close();
                Ok(())
            }),
        }
    }

    fn with_account<F>(&mut self, account_id: &str, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut dyn Account) -> Result<(), AccountError>,
    {
        let account = self
            .repository
            .get_account(account_id)
            .ok_or_else(|| Error::Engine(format!("Account {} not found", account_id)))?;

        f(&mut *account).map_err(|e| rejected(account_id, e))?;

        tracing::debug!(account = %account_id, balance = %account.amount(), "applied");
        Ok(())
    }

    pub fn repository(&self) -> &O {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut O {
        &mut self.repository
    }

    pub fn flush(&mut self) {
        self.repository.flush();
    }
}

fn rejected(account_id: &str, source: AccountError) -> Error {
    Error::Account {
        id: account_id.to_string(),
        source,
    }
}
