//! Commission-change history retention.
//!
//! Commission rates change immediately when edited; the queue only keeps an
//! auditable record of recent changes. Entries older than
//! `PERIOD_COMM_HISTORY` blocks are dropped with no other effect.

use crate::PERIOD_COMM_HISTORY;
use stake_store::{KvStore, Queue, StoreError};

/// Drop history entries older than the retention window. Returns how many
/// were purged.
pub fn process_queue_comm_history<S: KvStore + ?Sized>(
    store: &S,
    height: u64,
) -> Result<usize, StoreError> {
    let queue = Queue::commission_history(store);
    let mut purged = 0;
    while let Some(entry) = queue.peek()? {
        if height.saturating_sub(entry.height_at_init) <= PERIOD_COMM_HISTORY {
            break;
        }
        queue.pop()?;
        tracing::debug!(
            candidate = %entry.delegatee,
            recorded_at = entry.height_at_init,
            "commission history entry expired"
        );
        purged += 1;
    }
    Ok(purged)
}
