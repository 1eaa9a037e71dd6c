// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Support chat polling.
//!
//! The chat backend has no push channel. While the chat widget is open a
//! background task polls for new messages on a fixed interval and fans
//! them out over a broadcast channel.
//!
//! - Poll failures are logged and the loop keeps going
//! - Starting again replaces the running loop
//! - `stop()` may be called any number of times, polling or not
//! - Dropping the poller stops the loop

use crate::client::HotelApiClient;
use crate::request_response::ChatMessage;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Maximum number of messages buffered per subscriber.
/// Slow subscribers lose the oldest messages.
const MESSAGE_BUFFER_SIZE: usize = 100;

/// Default delay between two polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Shortest accepted delay between two polls.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Background poll loop for one conversation at a time.
#[derive(Debug)]
pub struct ChatPoller {
    client: Arc<HotelApiClient>,
    interval: Duration,
    tx: broadcast::Sender<ChatMessage>,
    task: Option<JoinHandle<()>>,
}

impl ChatPoller {
    /// Creates a stopped poller. `interval` is raised to
    /// `MIN_POLL_INTERVAL` if shorter.
    #[must_use]
    pub fn new(client: Arc<HotelApiClient>, interval: Duration) -> Self {
        let (tx, _rx) = broadcast::channel(MESSAGE_BUFFER_SIZE);
        Self {
            client,
            interval: interval.max(MIN_POLL_INTERVAL),
            tx,
            task: None,
        }
    }

    /// Subscribes to new messages. Messages published before subscribing
    /// are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChatMessage> {
        self.tx.subscribe()
    }

    /// Starts polling `conversation_id` for messages newer than `after`.
    ///
    /// Any running loop is stopped first. Must be called from within a
    /// Tokio runtime.
    pub fn start(&mut self, conversation_id: impl Into<String>, after: Option<u64>) {
        self.stop();

        let conversation_id: String = conversation_id.into();
        info!(%conversation_id, interval_ms = self.interval.as_millis(), "Chat polling started");

        self.task = Some(tokio::spawn(poll_loop(
            Arc::clone(&self.client),
            conversation_id,
            after,
            self.interval,
            self.tx.clone(),
        )));
    }

    /// Stops polling. Does nothing if no loop is running.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("Chat polling stopped");
        }
    }

    /// Returns true while a poll loop is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for ChatPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_loop(
    client: Arc<HotelApiClient>,
    conversation_id: String,
    mut cursor: Option<u64>,
    period: Duration,
    tx: broadcast::Sender<ChatMessage>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let messages: Vec<ChatMessage> = match client.messages_after(&conversation_id, cursor).await
        {
            Ok(messages) => messages,
            Err(e) => {
                warn!(%conversation_id, error = %e, "Chat poll failed");
                continue;
            }
        };

        for message in messages {
            // Servers may resend the cursor message; skip anything seen.
            if cursor.is_some_and(|seen| message.id <= seen) {
                continue;
            }
            cursor = Some(message.id);
            match tx.send(message) {
                Ok(receivers) => debug!(%conversation_id, cursor, receivers, "Chat message published"),
                Err(_) => debug!(%conversation_id, cursor, "No subscribers for chat message"),
            }
        }
    }
}
