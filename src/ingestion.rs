use std::io::Read;
use std::pin::Pin;
use std::str::FromStr;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Operation, OperationKind};

/// Script replayed when no file is given: the usage example of the crate docs.
pub const USAGE_SCRIPT: &str = "\
type, account, holder, amount, fee
open_saving, NASHVILLE-CUST-ABX100, John Doe, 200.0,
deposit, NASHVILLE-CUST-ABX100, , 25,
open_checking, NASHVILLE-CUST-ABY100, Jane Doe, 200.0, 2.0
deposit, NASHVILLE-CUST-ABY100, , 25,
close, NASHVILLE-CUST-ABY100, , ,
deposit, NASHVILLE-CUST-ABY100, , 10,
";

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

impl CsvReader<&'static [u8]> {
    pub fn usage_script() -> Self {
        Self::new(USAGE_SCRIPT.as_bytes())
    }
}

/// Internal shape used only for CSV deserialization. Amounts stay textual so
/// they are parsed as exact decimals instead of going through floats.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    account: String,
    holder: Option<String>,
    amount: Option<String>,
    fee: Option<String>,
}

fn parse_amount(field: &str, raw: Option<String>) -> Result<Decimal, Error> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Ingestion(format!("Missing {}", field)))?;

    Decimal::from_str(&raw)
        .map_err(|e| Error::Ingestion(format!("Invalid {} '{}': {}", field, raw, e)))
}

fn parse_holder(raw: Option<String>) -> Result<String, Error> {
    raw.filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Ingestion("Missing holder".to_string()))
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        if row.account.is_empty() {
            return Err(Error::Ingestion("Missing account id".to_string()));
        }

        let kind = match row.kind.trim().to_ascii_lowercase().as_str() {
            "open_saving" => OperationKind::OpenSaving {
                holder: parse_holder(row.holder)?,
                amount: parse_amount("amount", row.amount)?,
            },
            "open_checking" => OperationKind::OpenChecking {
                holder: parse_holder(row.holder)?,
                amount: parse_amount("amount", row.amount)?,
                deposit_fee: match row.fee.filter(|s| !s.is_empty()) {
                    Some(fee) => parse_amount("fee", Some(fee))?,
                    None => Decimal::ZERO,
                },
            },
            "deposit" => OperationKind::Deposit {
                amount: parse_amount("amount", row.amount)?,
            },
            "withdraw" => OperationKind::Withdraw {
                amount: parse_amount("amount", row.amount)?,
            },
            "close" => OperationKind::Close,
            other => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        Ok(Operation {
            kind,
            account_id: row.account,
        })
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        let reader = match self.reader.take() {
            Some(r) => r,
            // already consumed
            None => return Box::pin(stream::iter(Vec::<Result<Operation, Error>>::new())),
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
