use crate::domain::{DeadLetterQueue, Error};

/// Logs rejected operations instead of stopping the replay.
#[derive(Default, Debug)]
pub struct LogDLQ {}

impl DeadLetterQueue for LogDLQ {
    fn report(&self, error: &Error) {
        tracing::warn!("DLQ Report - Error: {}", error);
    }
}
