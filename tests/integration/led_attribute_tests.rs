//! LED controller through the attribute layer: text in, pin writes out.

use crate::mock_hw::{GpioCall, LogSink, MockGpio};

use devattr::app::service::DeviceService;
use devattr::config::SystemConfig;
use devattr::drivers::led::LedController;
use devattr::error::{AttrError, ValidationError};
use devattr::pins::PinId;
use embedded_hal::digital::PinState;

fn attach() -> (DeviceService<MockGpio>, crate::mock_hw::GpioLog, LogSink) {
    let (gpio, log) = MockGpio::new();
    let mut sink = LogSink::new();
    let svc = DeviceService::attach(&SystemConfig::default(), gpio, &mut sink).unwrap();
    (svc, log, sink)
}

#[test]
fn first_write_one_drives_pin_high_exactly_once() {
    let (svc, log, mut sink) = attach();

    assert_eq!(svc.store("led/state", "1", &mut sink), Ok(1));
    assert!(svc.led().read());
    assert_eq!(
        log.calls(),
        vec![
            GpioCall::Request {
                pin: PinId(17),
                initial: PinState::Low
            },
            GpioCall::Write {
                pin: PinId(17),
                level: PinState::High
            },
        ]
    );
}

#[test]
fn show_reflects_writes() {
    let (svc, _log, mut sink) = attach();
    assert_eq!(svc.show("led/state").unwrap().as_str(), "0\n");

    svc.store("led/state", "1\n", &mut sink).unwrap();
    assert_eq!(svc.show("led/state").unwrap().as_str(), "1\n");

    svc.store("led/state", "0", &mut sink).unwrap();
    assert_eq!(svc.show("led/state").unwrap().as_str(), "0\n");
    assert!(!svc.led().read());
}

#[test]
fn invalid_writes_leave_state_and_pin_unchanged() {
    let (svc, log, mut sink) = attach();
    svc.store("led/state", "1", &mut sink).unwrap();
    let before = log.calls();

    for (input, expected) in [
        ("2", ValidationError::OutOfDomain),
        ("-1", ValidationError::OutOfDomain),
        ("abc", ValidationError::NotParsable),
        ("", ValidationError::NotParsable),
    ] {
        assert_eq!(
            svc.store("led/state", input, &mut sink),
            Err(AttrError::Invalid(expected)),
            "input {input:?}"
        );
        assert!(svc.led().read(), "state changed by {input:?}");
    }
    assert_eq!(log.calls(), before, "pin touched by a rejected write");
}

#[test]
fn pin_level_always_matches_reported_state() {
    let (svc, log, mut sink) = attach();
    for input in ["1", "1", "0", "7", "1", "x", "0"] {
        let _ = svc.store("led/state", input, &mut sink);
        let expected = if svc.led().read() {
            PinState::High
        } else {
            PinState::Low
        };
        assert_eq!(log.level(), Some(expected));
    }
}

#[test]
fn concurrent_writers_keep_pin_and_state_consistent() {
    let (gpio, log) = MockGpio::new();
    let led = std::sync::Arc::new(LedController::initialize(PinId(5), gpio).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let led = led.clone();
            std::thread::spawn(move || {
                for i in 0..200 {
                    let text = if (i + t) % 2 == 0 { "1" } else { "0" };
                    led.write(text).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let last = *log.writes().last().unwrap();
    assert_eq!(last, PinState::from(led.read()));
    assert_eq!(log.writes().len(), 800);
}

#[test]
fn led_writes_are_independent_of_sensor_lock() {
    let (svc, _log, mut sink) = attach();
    let sensor = svc.sensor();
    sensor.update(10);
    svc.store("led/state", "1", &mut sink).unwrap();
    assert_eq!(svc.show("sensor/current").unwrap().as_str(), "10\n");
    assert!(svc.led().read());
}
