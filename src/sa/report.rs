//! Progress reporting boundary.
//!
//! The runner hands a [`Snapshot`] of its statistics to a
//! [`ProgressReporter`] once per iteration. Snapshots are owned copies, so a
//! sink may keep or forward them without borrowing from the live search.

use crate::tsp::{City, Tour};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

/// Statistics emitted after each iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Temperature after this iteration's cooling step.
    pub temperature: f64,
    /// Cost of the current (accepted) tour.
    pub current_cost: f64,
    /// Lowest cost among all tours generated so far.
    pub best_cost: f64,
    /// Highest cost among all tours generated so far.
    pub worst_cost: f64,
    /// The current tour.
    pub tour: Tour,
}

impl Snapshot {
    /// The four statistics as display labels, values to two decimals.
    pub fn labels(&self) -> [(&'static str, String); 4] {
        [
            ("Temperature", format!("{:.2}", self.temperature)),
            ("Score", format!("{:.2}", self.current_cost)),
            ("Best Score", format!("{:.2}", self.best_cost)),
            ("Worst Score", format!("{:.2}", self.worst_cost)),
        ]
    }
}

/// Sink for per-iteration progress.
///
/// Implementations must return promptly: the call is made synchronously
/// from inside the annealing loop.
pub trait ProgressReporter {
    fn report(&mut self, cities: &[City], snapshot: Snapshot);
}

impl<F> ProgressReporter for F
where
    F: FnMut(&[City], Snapshot),
{
    fn report(&mut self, cities: &[City], snapshot: Snapshot) {
        self(cities, snapshot)
    }
}

/// Discards every snapshot. Use for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&mut self, _cities: &[City], _snapshot: Snapshot) {}
}

/// Records every snapshot in memory.
#[derive(Debug, Default, Clone)]
pub struct HistoryReporter {
    pub snapshots: Vec<Snapshot>,
}

impl HistoryReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for HistoryReporter {
    fn report(&mut self, _cities: &[City], snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }
}

/// Forwards snapshots to another thread through a bounded queue.
///
/// When the queue is full, or the receiver has been dropped, the snapshot
/// is discarded and counted instead of blocking the search.
#[derive(Debug)]
pub struct ChannelReporter {
    sender: SyncSender<Snapshot>,
    dropped: usize,
}

impl ChannelReporter {
    /// Creates a reporter and the receiving end of its queue.
    ///
    /// A `capacity` of 0 makes a rendezvous channel: only snapshots a
    /// consumer is already waiting for get through.
    pub fn new(capacity: usize) -> (Self, Receiver<Snapshot>) {
        let (sender, receiver) = mpsc::sync_channel(capacity);
        (Self { sender, dropped: 0 }, receiver)
    }

    /// Number of snapshots discarded so far.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl ProgressReporter for ChannelReporter {
    fn report(&mut self, _cities: &[City], snapshot: Snapshot) {
        match self.sender.try_send(snapshot) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => {
                self.dropped += 1;
            }
        }
    }
}

/// Logs the statistics through `tracing` every `every` iterations.
#[derive(Debug, Clone)]
pub struct TracingReporter {
    every: usize,
}

impl TracingReporter {
    /// Logs every `every`-th iteration (values below 1 are treated as 1).
    pub fn new(every: usize) -> Self {
        Self { every: every.max(1) }
    }
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new(100)
    }
}

impl ProgressReporter for TracingReporter {
    fn report(&mut self, cities: &[City], snapshot: Snapshot) {
        if !snapshot.iteration.is_multiple_of(self.every) {
            return;
        }
        let [temperature, score, best, worst] = snapshot.labels();
        tracing::info!(
            iteration = snapshot.iteration,
            cities = cities.len(),
            "{}: {}, {}: {}, {}: {}, {}: {}",
            temperature.0,
            temperature.1,
            score.0,
            score.1,
            best.0,
            best.1,
            worst.0,
            worst.1
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(iteration: usize) -> Snapshot {
        Snapshot {
            iteration,
            temperature: 12.3456,
            current_cost: 40.0,
            best_cost: 38.004,
            worst_cost: 60.5,
            tour: Tour::identity(3),
        }
    }

    #[test]
    fn test_labels_two_decimals() {
        let labels = snapshot(1).labels();
        assert_eq!(labels[0], ("Temperature", "12.35".to_string()));
        assert_eq!(labels[1], ("Score", "40.00".to_string()));
        assert_eq!(labels[2], ("Best Score", "38.00".to_string()));
        assert_eq!(labels[3], ("Worst Score", "60.50".to_string()));
    }

    #[test]
    fn test_closure_reporter() {
        let mut seen = Vec::new();
        {
            let mut reporter = |_: &[City], s: Snapshot| seen.push(s.iteration);
            reporter.report(&[], snapshot(1));
            reporter.report(&[], snapshot(2));
        }
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_history_reporter() {
        let mut reporter = HistoryReporter::new();
        reporter.report(&[], snapshot(1));
        assert_eq!(reporter.snapshots, vec![snapshot(1)]);
    }

    #[test]
    fn test_channel_reporter_drops_when_full() {
        let (mut reporter, receiver) = ChannelReporter::new(2);
        for i in 1..=5 {
            reporter.report(&[], snapshot(i));
        }
        assert_eq!(reporter.dropped(), 3);
        let received: Vec<usize> = receiver.try_iter().map(|s| s.iteration).collect();
        assert_eq!(received, vec![1, 2]);
    }

    #[test]
    fn test_channel_reporter_survives_disconnect() {
        let (mut reporter, receiver) = ChannelReporter::new(4);
        drop(receiver);
        reporter.report(&[], snapshot(1));
        assert_eq!(reporter.dropped(), 1);
    }

    #[test]
    fn test_tracing_reporter_interval_floor() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let mut reporter = TracingReporter::new(0);
        assert_eq!(reporter.every, 1);
        reporter.report(&[City::new(0.0, 0.0)], snapshot(3));
    }
}
