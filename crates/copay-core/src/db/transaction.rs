//! Write transaction lifecycle shared by every aggregate write.

use log::{debug, error, warn};
use rusqlite::{DropBehavior, Transaction, TransactionBehavior};

use crate::{
    error::{CopayError, DatabaseResultExt, Result},
    models::ProgramId,
};

impl super::Database {
    /// Runs `operation` inside one IMMEDIATE transaction.
    ///
    /// Commits when `operation` succeeds. Otherwise, or when the commit
    /// itself fails, the transaction is rolled back explicitly and the
    /// original error is returned, or `CopayError::RollbackFailed` if the
    /// rollback did not go through.
    pub(crate) fn write_transaction<T, F>(
        &mut self,
        program_id: ProgramId,
        action: &str,
        operation: F,
    ) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let value = match operation(&tx) {
            Ok(value) => value,
            Err(cause) => return Err(roll_back(program_id, action, cause, || tx.rollback())),
        };

        // A failed COMMIT is rolled back below, not by the guard's drop
        tx.set_drop_behavior(DropBehavior::Ignore);
        if let Err(source) = tx.commit() {
            let cause = CopayError::database("Failed to commit transaction").with_source(source);
            if self.connection.is_autocommit() {
                // SQLite already ended the transaction
                return Err(cause);
            }
            return Err(roll_back(program_id, action, cause, || {
                self.connection.execute_batch("ROLLBACK")
            }));
        }

        debug!("Committed {action} of program {program_id}");
        Ok(value)
    }
}

/// Converts a failed write into the error surfaced to the caller.
fn roll_back<R>(program_id: ProgramId, action: &str, cause: CopayError, rollback: R) -> CopayError
where
    R: FnOnce() -> rusqlite::Result<()>,
{
    warn!("Rolling back {action} of program {program_id}: {cause}");
    match rollback() {
        Ok(()) => cause,
        Err(source) => {
            error!(
                "Rollback of {action} failed for program {program_id}; stored state is unknown: {source}"
            );
            CopayError::RollbackFailed {
                program_id,
                cause: Box::new(cause),
                source,
            }
        }
    }
}
