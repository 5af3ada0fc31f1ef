// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cancellation is a checked signal rather than an asynchronous exception. The driver
//! polls [`CancelSignal::is_cancelled`] before each write and races
//! [`CancelSignal::cancelled`] against each hold, so an interrupt cuts a hold short.
//!
//! The binary fires the [`CancelHandle`] on Ctrl+C with [`try_cancel_on_interrupt`].

use std::sync::Arc;
use tokio::{signal::unix::{SignalKind, signal},
            sync::watch,
            task::JoinHandle};

/// Create a connected [`CancelHandle`] and [`CancelSignal`] pair.
#[must_use]
pub fn cancel_channel() -> (CancelHandle, CancelSignal) {
    let (sender, receiver) = watch::channel(false);
    (
        CancelHandle {
            sender: Arc::new(sender),
        },
        CancelSignal { receiver },
    )
}

/// Fires the cancellation. Cheap to clone, and firing more than once is harmless.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        // This works even if every signal has been dropped.
        self.sender.send_replace(true);
    }
}

#[derive(Debug, Clone)]
pub struct CancelSignal {
    receiver: watch::Receiver<bool>,
}

impl CancelSignal {
    /// A signal that never fires. Its handle is dropped right away.
    #[must_use]
    pub fn never() -> Self {
        let (_handle, signal) = cancel_channel();
        signal
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool { *self.receiver.borrow() }

    /// Resolves once cancellation has been requested. If the handle is dropped without
    /// firing, this never resolves.
    pub async fn cancelled(&mut self) {
        if self.receiver.wait_for(|is_cancelled| *is_cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Take over `SIGINT` (Ctrl+C) and fire a cancellation when it arrives. The handler is
/// registered before this returns, so an interrupt that comes in before the returned task
/// is first polled is still caught. Abort the task once it is no longer needed.
///
/// Must be called from within a tokio runtime.
///
/// # Errors
///
/// Returns an error if the signal handler can't be registered.
pub fn try_cancel_on_interrupt() -> std::io::Result<(CancelSignal, JoinHandle<()>)> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let (cancel_handle, cancel_signal) = cancel_channel();

    let task = tokio::spawn(async move {
        if interrupt.recv().await.is_some() {
            tracing::debug!(message = "🛑 Ctrl+C received");
            cancel_handle.cancel();
        }
    });

    Ok((cancel_signal, task))
}

#[cfg(test)]
mod tests_cancel_signal {
    use super::*;
    use serial_test::serial;
    use std::time::Duration;

    /// Sends `SIGINT` to this test process right after registering, before the listening
    /// task has had a chance to run. Without the handler in place the process would die.
    #[tokio::test]
    #[serial]
    async fn test_interrupt_right_after_registering_cancels() {
        let (mut signal, task) = try_cancel_on_interrupt().unwrap();

        let status = std::process::Command::new("sh")
            .arg("-c")
            .arg(format!("kill -INT {}", std::process::id()))
            .status()
            .unwrap();
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(5), signal.cancelled())
            .await
            .unwrap();
        assert!(signal.is_cancelled());
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_cancel_is_observed_by_every_clone() {
        let (handle, mut signal) = cancel_channel();
        let other_signal = signal.clone();
        assert!(!signal.is_cancelled());

        handle.cancel();
        assert!(signal.is_cancelled());
        assert!(other_signal.is_cancelled());

        // Already cancelled, so this resolves right away.
        signal.cancelled().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_does_not_resolve() {
        let mut signal = CancelSignal::never();
        assert!(!signal.is_cancelled());

        let result =
            tokio::time::timeout(Duration::from_secs(60), signal.cancelled()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_from_another_task_wakes_waiter() {
        let (handle, mut signal) = cancel_channel();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(250)).await;
            handle.cancel();
        });

        let start = tokio::time::Instant::now();
        signal.cancelled().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(250));
        assert!(elapsed < Duration::from_millis(260));
    }
}
