//! Fuzz target: `DeviceService::store`
//!
//! Drives arbitrary text into every attribute path and asserts that the
//! store path never panics, that only `0`/`1` ever reach the LED, and that
//! the pin level always matches the reported state.
//!
//! cargo fuzz run fuzz_attribute_store

#![no_main]

use devattr::adapters::log_sink::LogEventSink;
use devattr::adapters::sim_gpio::SimGpio;
use devattr::app::service::DeviceService;
use devattr::attributes::parse::parse_switch;
use devattr::config::SystemConfig;
use embedded_hal::digital::PinState;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let cfg = SystemConfig::default();
    let mut sink = LogEventSink::new();
    let Ok(svc) = DeviceService::attach(&cfg, SimGpio::new(), &mut sink) else {
        return;
    };

    for entry in svc.attributes() {
        let _ = svc.store(&entry.path, text, &mut sink);
        let shown = svc.show(&entry.path).expect("registered attribute must show");
        assert!(shown.ends_with('\n'));
    }

    let on = svc.led().read();
    assert_eq!(on, parse_switch(text) == Ok(true), "input {text:?}");
    let level = svc.led().inspect_gpio(|g| g.level(cfg.led_gpio));
    assert_eq!(level, Some(PinState::from(on)));
});
