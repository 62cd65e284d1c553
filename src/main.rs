//! devattr: host console for the device attribute core.
//!
//! ```text
//! ┌──────────────┐   get/set   ┌───────────────┐   GpioPort   ┌─────────┐
//! │ stdin console│────────────▶│ DeviceService │─────────────▶│ SimGpio │
//! └──────────────┘             └───────────────┘              └─────────┘
//!                                      ▲ update_from_isr
//!                              ┌───────┴───────┐
//!                              │ SimSensor thr │
//!                              └───────────────┘
//! ```
//!
//! Usage: `devattr [config.json]`, then type `help`.
#![deny(unused_must_use)]

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use tracing_subscriber::EnvFilter;

use devattr::adapters::config_file::JsonConfigFile;
use devattr::adapters::log_sink::LogEventSink;
use devattr::adapters::sim_gpio::SimGpio;
use devattr::adapters::sim_sensor::SimSensor;
use devattr::app::ports::ConfigPort;
use devattr::app::service::DeviceService;
use devattr::config::SystemConfig;
use devattr::drivers::producer::spawn_producer;

// ── Logging ───────────────────────────────────────────────────
//
// `log` records from the library are bridged into a `tracing-subscriber`
// fmt layer on stderr.  `DEVATTR_LOG` takes `EnvFilter` directives.

fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_env("DEVATTR_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logger: {e}"))
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging()?;
    info!("devattr v{}", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => JsonConfigFile::new(path)
            .load()
            .context("loading configuration")?,
        None => SystemConfig::default(),
    };

    let mut sink = LogEventSink::new();
    let mut device = DeviceService::attach(&config, SimGpio::new(), &mut sink)
        .context("attaching device")?;

    let producer = spawn_producer(
        device.sensor(),
        SimSensor::from_config(&config),
        Duration::from_millis(u64::from(config.sim_sample_interval_ms)),
        "sim-sensor",
    )
    .context("spawning producer")?;

    let result = run_console(&device, &mut sink);

    let accepted = producer.stop_and_join();
    info!("producer fed {} samples", accepted);
    device.detach(&mut sink);
    result
}

fn run_console(device: &DeviceService<SimGpio>, sink: &mut LogEventSink) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "type 'help' for commands")?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (None, ..) => {}
            (Some("help"), ..) => {
                writeln!(out, "ls | get <path> | set <path> <value> | stats | quit")?;
            }
            (Some("ls"), ..) => {
                for entry in device.attributes() {
                    writeln!(out, "{:o} {}", entry.mode.permissions(), entry.path)?;
                }
            }
            (Some("get"), Some(path), None) => match device.show(path) {
                Ok(text) => write!(out, "{}", text)?,
                Err(e) => writeln!(out, "get {}: {}", path, e)?,
            },
            (Some("set"), Some(path), Some(value)) => {
                if let Err(e) = device.store(path, value, sink) {
                    writeln!(out, "set {}: {}", path, e)?;
                }
            }
            (Some("stats"), ..) => {
                let sensor = device.sensor();
                let snap = sensor.snapshot();
                let json = serde_json::json!({
                    "stats": snap,
                    "average": snap.average(),
                    "dropped": sensor.dropped_samples(),
                });
                writeln!(out, "{}", json)?;
            }
            (Some("quit" | "exit"), ..) => break,
            (Some(cmd), ..) => writeln!(out, "unknown command '{}'", cmd)?,
        }
        out.flush()?;
    }
    Ok(())
}
