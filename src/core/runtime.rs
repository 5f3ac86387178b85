//! Update stream orchestration.
//!
//! A reader task decodes newline-delimited JSON updates and forwards them to
//! the orchestrator, which owns the snapshot, applies updates strictly in
//! arrival order and publishes each result on a watch channel.

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{mpsc, watch};

use super::snapshot::{apply_update, parse_update_str, Snapshot, SnapshotUpdate};

const UPDATE_CHANNEL_CAPACITY: usize = 32;

/// Read updates line by line until EOF. Bad lines are logged and skipped.
pub async fn read_updates<R>(reader: R, update_tx: mpsc::Sender<SnapshotUpdate>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut line_number = 0usize;

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("Failed to read update stream: {}", e);
                break;
            }
        };
        line_number += 1;

        if line.trim().is_empty() {
            continue;
        }

        match parse_update_str(&line) {
            Ok(update) => {
                if update_tx.send(update).await.is_err() {
                    // orchestrator is gone
                    break;
                }
            }
            Err(e) => log::warn!("Skipping update on line {}: {}", line_number, e),
        }
    }

    log::debug!("Update stream ended after {} lines", line_number);
}

/// Apply updates in order and publish every resulting snapshot.
///
/// Returns the final snapshot once the update channel closes.
pub async fn orchestrator_task(
    mut update_rx: mpsc::Receiver<SnapshotUpdate>,
    snapshot_tx: watch::Sender<Arc<Snapshot>>,
) -> Snapshot {
    let mut current = Snapshot::default();

    while let Some(update) = update_rx.recv().await {
        current = apply_update(&current, &update);
        // send() only fails without receivers, which is fine
        let _ = snapshot_tx.send(Arc::new(current.clone()));
        log::trace!("Snapshot updated: {:?}", current.present());
    }

    current
}

/// Drive `reader` to completion, calling `on_snapshot` for published
/// snapshots. Consecutive updates may be coalesced into one callback, but the
/// final snapshot is always delivered.
pub async fn drive<R, F>(reader: R, mut on_snapshot: F) -> Snapshot
where
    R: AsyncBufRead + Unpin + Send + 'static,
    F: FnMut(&Snapshot),
{
    let (update_tx, update_rx) = mpsc::channel::<SnapshotUpdate>(UPDATE_CHANNEL_CAPACITY);
    let (snapshot_tx, mut snapshot_rx) = watch::channel(Arc::new(Snapshot::default()));

    let reader_task = tokio::spawn(read_updates(reader, update_tx));
    let orchestrator = tokio::spawn(orchestrator_task(update_rx, snapshot_tx));

    let mut last_seen: Option<Arc<Snapshot>> = None;
    while snapshot_rx.changed().await.is_ok() {
        let snapshot = snapshot_rx.borrow_and_update().clone();
        on_snapshot(&*snapshot);
        last_seen = Some(snapshot);
    }

    if let Err(e) = reader_task.await {
        log::error!("Update reader task failed: {}", e);
    }
    let final_snapshot = match orchestrator.await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::error!("Orchestrator task failed: {}", e);
            return last_seen.map(|s| (*s).clone()).unwrap_or_default();
        }
    };

    // the sender is dropped after the last send, so changed() may have
    // returned before we observed the final value
    let delivered = last_seen.as_deref() == Some(&final_snapshot);
    if !delivered && final_snapshot != Snapshot::default() {
        on_snapshot(&final_snapshot);
    }

    final_snapshot
}
