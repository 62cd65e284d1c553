//! Background sample producer.
//!
//! Spawns a named thread that pulls samples from a [`SampleSource`] and
//! feeds them through [`SensorAggregator::update_from_isr`], the same
//! non-blocking path an interrupt handler would use.  The thread exits when
//! the source is exhausted or [`ProducerHandle::stop`] is called.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use log::{debug, info};

use crate::app::ports::SampleSource;
use crate::sensors::SensorAggregator;

pub struct ProducerHandle {
    stop: Arc<AtomicBool>,
    accepted: Arc<AtomicU64>,
    join: JoinHandle<()>,
}

impl ProducerHandle {
    /// Ask the producer to exit after its current sample.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// Samples the aggregator has accepted so far.
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the thread to exit on its own, which a finite source does
    /// once exhausted.  Returns the number of accepted samples.
    pub fn join(self) -> u64 {
        if self.join.join().is_err() {
            log::error!("producer thread panicked");
        }
        self.accepted.load(Ordering::Relaxed)
    }

    /// [`stop`](Self::stop), then [`join`](Self::join).
    pub fn stop_and_join(self) -> u64 {
        self.stop();
        self.join()
    }
}

/// Spawn a producer thread.
///
/// `interval` is slept between samples; zero means "as fast as possible".
pub fn spawn_producer<S>(
    aggregator: Arc<SensorAggregator>,
    mut source: S,
    interval: Duration,
    name: &str,
) -> std::io::Result<ProducerHandle>
where
    S: SampleSource + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let accepted = Arc::new(AtomicU64::new(0));

    let thread_stop = Arc::clone(&stop);
    let thread_accepted = Arc::clone(&accepted);
    let thread_name = name.to_owned();

    info!("Spawning producer '{}' (interval={:?})", name, interval);

    let join = std::thread::Builder::new()
        .name(name.into())
        .spawn(move || {
            while !thread_stop.load(Ordering::Acquire) {
                let Some(sample) = source.next_sample() else {
                    debug!("producer '{}': source exhausted", thread_name);
                    break;
                };
                if aggregator.update_from_isr(sample) {
                    thread_accepted.fetch_add(1, Ordering::Relaxed);
                }
                if !interval.is_zero() {
                    std::thread::sleep(interval);
                }
            }
            info!(
                "producer '{}' stopped ({} samples accepted)",
                thread_name,
                thread_accepted.load(Ordering::Relaxed)
            );
        })?;

    Ok(ProducerHandle {
        stop,
        accepted,
        join,
    })
}
