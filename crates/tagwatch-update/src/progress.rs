//! Progress display while waiting on the network
//!
//! `progress_bar_for_status` advances a bar on a fixed tick until the task it
//! is watching reports completion over a channel.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

const BAR_TEMPLATE: &str = "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}";
const BYTES_TEMPLATE: &str =
    "{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

/// Thin wrapper over an indicatif bar that may be hidden
#[derive(Debug, Clone)]
pub struct ProgressDisplay {
    bar: ProgressBar,
}

impl ProgressDisplay {
    /// A display that renders nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// A step bar of `length` steps
    pub fn bar(length: u64, message: &str) -> Self {
        let bar = ProgressBar::new(length);
        if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_message(message.to_string());
        Self { bar }
    }

    /// A byte counter for downloads; the length is set once known
    pub fn bytes(message: &str) -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::with_template(BYTES_TEMPLATE) {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_message(message.to_string());
        Self { bar }
    }

    /// Pick a visible or hidden display
    pub fn bytes_or_hidden(show: bool, message: &str) -> Self {
        if show {
            Self::bytes(message)
        } else {
            Self::hidden()
        }
    }

    pub fn set_length(&self, length: u64) {
        self.bar.set_length(length);
    }

    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    pub fn inc(&self, delta: u64) {
        self.bar.inc(delta);
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish();
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    /// Advance one step per `tick` until `completion` yields a value or closes
    ///
    /// The bar stops at its length and keeps waiting. Returns the number of
    /// ticks observed.
    pub async fn wait_for_completion(
        &self,
        mut completion: mpsc::Receiver<u64>,
        tick: Duration,
    ) -> u64 {
        let mut interval = tokio::time::interval(tick.max(Duration::from_millis(1)));
        // First tick of a tokio interval fires immediately
        interval.tick().await;

        let mut ticks = 0;
        loop {
            tokio::select! {
                received = completion.recv() => {
                    match received {
                        Some(count) => debug!("Completion signal received: {}", count),
                        None => debug!("Completion channel closed"),
                    }
                    break;
                }
                _ = interval.tick() => {
                    ticks += 1;
                    let saturated = self.length().is_some_and(|len| self.position() >= len);
                    if !saturated {
                        self.inc(1);
                    }
                }
            }
        }

        self.finish();
        ticks
    }
}

/// Render a bar of `length` steps until `completion` signals
pub async fn progress_bar_for_status(
    length: u64,
    completion: mpsc::Receiver<u64>,
    message: &str,
    tick: Duration,
) -> u64 {
    ProgressDisplay::bar(length, message)
        .wait_for_completion(completion, tick)
        .await
}
