//! Waiting for the board to stop changing

use super::GameError;
use crate::config::SettlePolicy;
use log::trace;
use std::thread;

/// Read snapshots until two consecutive reads agree
///
/// The game animates its feedback, so a single read may catch a half-revealed
/// row. Sleeps `poll_interval` between reads and gives up after `max_polls`.
///
/// # Errors
///
/// Propagates any read error, or returns `GameError::Unsettled` when the
/// snapshot is still changing after `max_polls` reads.
pub fn poll_until_stable<T, F>(policy: SettlePolicy, mut read: F) -> Result<T, GameError>
where
    T: PartialEq,
    F: FnMut() -> Result<T, GameError>,
{
    let mut previous = read()?;

    for poll in 1..policy.max_polls {
        if !policy.poll_interval.is_zero() {
            thread::sleep(policy.poll_interval);
        }

        let current = read()?;
        if current == previous {
            trace!("board settled after {} reads", poll + 1);
            return Ok(current);
        }
        previous = current;
    }

    Err(GameError::Unsettled {
        polls: policy.max_polls,
    })
}
