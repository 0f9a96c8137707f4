// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Coalescing of rapid value bursts: the last value submitted within a quiescence window wins.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{timeout_at, Instant};

/// Upper bound on the quiescence window; longer windows are clamped so that computing a deadline
/// as `Instant::now() + window` cannot overflow.
const MAX_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Receiving half of a debounced channel.
///
/// Values sent in quick succession are coalesced: [`Debouncer::recv`] yields only the last value
/// of a burst, once no newer value has arrived for the configured window. Burst state lives on
/// the struct, so a `recv` future may be dropped (e.g. by `select!`) and re-created without
/// losing the pending value or extending its deadline.
#[derive(Debug)]
pub struct Debouncer<T> {
    /// Incoming values.
    rx: mpsc::UnboundedReceiver<T>,
    /// Quiescence window after which the latest value is released.
    window: Duration,
    /// Latest value of the burst currently being coalesced.
    pending: Option<T>,
    /// Deadline at which the pending value is released.
    deadline: Option<Instant>,
}

/// Create a debounced channel with the given quiescence window.
///
/// Windows longer than a day are clamped.
#[must_use]
pub fn channel<T>(window: Duration) -> (mpsc::UnboundedSender<T>, Debouncer<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        tx,
        Debouncer {
            rx,
            window: window.min(MAX_WINDOW),
            pending: None,
            deadline: None,
        },
    )
}

impl<T> Debouncer<T> {
    /// Receive the next debounced value.
    ///
    /// Waits for a value, then keeps replacing it while newer values arrive within the window.
    /// When the sender side is closed, the pending value (if any) is flushed first; afterwards
    /// `None` is returned.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            if let Some(deadline) = self.deadline {
                match timeout_at(deadline, self.rx.recv()).await {
                    Ok(Some(value)) => {
                        self.pending = Some(value);
                        self.deadline = Some(Instant::now() + self.window);
                    }
                    Ok(None) | Err(_) => {
                        self.deadline = None;
                        return self.pending.take();
                    }
                }
            } else {
                let value = self.rx.recv().await?;
                self.pending = Some(value);
                self.deadline = Some(Instant::now() + self.window);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_last_value_of_burst_wins() {
        let (tx, mut debouncer) = channel(WINDOW);
        tx.send("a").expect("send should succeed");
        tx.send("ab").expect("send should succeed");
        tx.send("abc").expect("send should succeed");
        assert_eq!(debouncer.recv().await, Some("abc"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_separate_bursts_each_fire() {
        let (tx, mut debouncer) = channel(WINDOW);
        tx.send(1).expect("send should succeed");
        assert_eq!(debouncer.recv().await, Some(1));
        tx.send(2).expect("send should succeed");
        tx.send(3).expect("send should succeed");
        assert_eq!(debouncer.recv().await, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_flushes_pending_value_on_close() {
        let (tx, mut debouncer) = channel(WINDOW);
        tx.send("final").expect("send should succeed");
        drop(tx);
        assert_eq!(debouncer.recv().await, Some("final"));
        assert_eq!(debouncer.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_none_when_closed_without_values() {
        let (tx, mut debouncer) = channel::<&str>(WINDOW);
        drop(tx);
        assert_eq!(debouncer.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_clamps_excessive_window() {
        let (tx, mut debouncer) = channel(Duration::MAX);
        tx.send("kept").expect("send should succeed");
        assert_eq!(debouncer.recv().await, Some("kept"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_value_survives_cancelled_recv() {
        let (tx, mut debouncer) = channel(WINDOW);
        tx.send("kept").expect("send should succeed");

        // Drop a recv future mid-window, the way a select loop does when another event wins.
        tokio::select! {
            biased;
            _ = debouncer.recv() => panic!("window should not have elapsed yet"),
            () = tokio::time::sleep(Duration::ZERO) => {}
        }

        assert_eq!(debouncer.recv().await, Some("kept"));
    }
}
