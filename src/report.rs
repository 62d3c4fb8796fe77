use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::{self, Write};

use crate::domain::{Account, AccountRepository, Error};

/// In-memory accounts keyed by id, printed as CSV on flush.
#[derive(Default, Debug)]
pub struct StdOutReport {
    accounts: BTreeMap<String, Box<dyn Account>>,
}

impl StdOutReport {
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "id,holder,kind,amount,open")?;
        for (id, account) in &self.accounts {
            writeln!(
                out,
                "{},{},{},{},{}",
                id,
                account.account_holder(),
                account.kind(),
                account.amount().round_dp(4),
                account.is_open()
            )?;
        }
        Ok(())
    }
}

impl AccountRepository for StdOutReport {
    fn insert_account(&mut self, account: Box<dyn Account>) -> Result<(), Error> {
        match self.accounts.entry(account.id().to_string()) {
            Entry::Vacant(e) => {
                e.insert(account);
                Ok(())
            }
            Entry::Occupied(e) => Err(Error::Engine(format!(
                "Account ID {} already exists",
                e.key()
            ))),
        }
    }

    fn get_account(&mut self, account_id: &str) -> Option<&mut (dyn Account + 'static)> {
        self.accounts.get_mut(account_id).map(|account| account.as_mut())
    }

    fn flush(&mut self) {
        if let Err(e) = self.write_to(io::stdout().lock()) {
            tracing::error!("failed to write account report: {}", e);
        }
    }
}
