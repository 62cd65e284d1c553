//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                      |
//! |----------------|--------------|----------------------------------|
//! | `hal_gpio`     | GpioPort     | any `embedded-hal` `OutputPin`   |
//! | `sim_gpio`     | GpioPort     | in-memory line table (host)      |
//! | `sim_sensor`   | SampleSource | seeded pseudo-random samples     |
//! | `log_sink`     | EventSink    | `log` facade                     |
//! | `config_file`  | ConfigPort   | JSON file on disk                |

pub mod config_file;
pub mod hal_gpio;
pub mod log_sink;
pub mod sim_gpio;
pub mod sim_sensor;
