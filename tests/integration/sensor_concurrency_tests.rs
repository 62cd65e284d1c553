//! Sensor aggregator under concurrent producers and readers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use devattr::sensors::{SensorAggregator, SensorStats};

/// Invariants every snapshot must satisfy, whatever the interleaving.
fn assert_consistent(s: &SensorStats, value_of_every_sample: i32) {
    if s.count == 0 {
        assert_eq!(s, &SensorStats::EMPTY);
        return;
    }
    assert_eq!(s.current, value_of_every_sample);
    assert_eq!(s.sum, i64::from(value_of_every_sample) * s.count as i64);
    assert_eq!(s.minimum, value_of_every_sample);
    assert_eq!(s.maximum, value_of_every_sample);
}

#[test]
fn scenario_from_four_samples() {
    let agg = SensorAggregator::default();
    for x in [5, 1, 9, 3] {
        agg.update(x);
    }
    assert_eq!(agg.read_current(), 3);
    assert_eq!(agg.read_minimum(), 1);
    assert_eq!(agg.read_maximum(), 9);
    assert_eq!(agg.read_average(), 4);
}

#[test]
fn snapshots_are_never_torn() {
    const WRITERS: usize = 4;
    const PER_WRITER: usize = 5_000;

    let agg = Arc::new(SensorAggregator::default());
    let done = Arc::new(AtomicBool::new(false));

    let reader = {
        let agg = agg.clone();
        let done = done.clone();
        thread::spawn(move || {
            let mut observed = 0u64;
            while !done.load(Ordering::Acquire) {
                let s = agg.snapshot();
                assert_consistent(&s, 7);
                assert!(s.count >= observed, "count went backwards");
                observed = s.count;
            }
        })
    };

    let writers: Vec<_> = (0..WRITERS)
        .map(|i| {
            let agg = agg.clone();
            thread::spawn(move || {
                for n in 0..PER_WRITER {
                    // Mix both update paths.
                    if (n + i) % 2 == 0 {
                        agg.update(7);
                    } else {
                        while !agg.update_from_isr(7) {}
                    }
                }
            })
        })
        .collect();

    for w in writers {
        w.join().unwrap();
    }
    done.store(true, Ordering::Release);
    reader.join().unwrap();

    let s = agg.snapshot();
    assert_eq!(s.count, (WRITERS * PER_WRITER) as u64);
    assert_consistent(&s, 7);
}

#[test]
fn distinct_producers_keep_bounds_and_totals() {
    let agg = Arc::new(SensorAggregator::default());
    let writers: Vec<_> = [-50, 0, 30, 100]
        .into_iter()
        .map(|value| {
            let agg = agg.clone();
            thread::spawn(move || {
                for _ in 0..1_000 {
                    agg.update(value);
                    let s = agg.snapshot();
                    assert!(s.minimum <= s.current && s.current <= s.maximum);
                    assert!(s.minimum <= s.average() && s.average() <= s.maximum);
                }
            })
        })
        .collect();
    for w in writers {
        w.join().unwrap();
    }

    let s = agg.snapshot();
    assert_eq!(s.count, 4_000);
    assert_eq!(s.sum, (-50 + 30 + 100) * 1_000);
    assert_eq!(s.minimum, -50);
    assert_eq!(s.maximum, 100);
    assert_eq!(agg.read_average(), 20);
}

#[test]
fn isr_path_accounts_for_every_sample() {
    let agg = Arc::new(SensorAggregator::new(1));
    let writers: Vec<_> = (0..4)
        .map(|_| {
            let agg = agg.clone();
            thread::spawn(move || (0..2_000).filter(|_| agg.update_from_isr(1)).count() as u64)
        })
        .collect();
    let accepted: u64 = writers.into_iter().map(|w| w.join().unwrap()).sum();

    let s = agg.snapshot();
    assert_eq!(s.count, accepted);
    assert_eq!(accepted + agg.dropped_samples(), 8_000);
}
