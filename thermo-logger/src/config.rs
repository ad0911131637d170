use std::time::Duration;

/// Time slept before every cycle.
pub const INTERVAL: Duration = Duration::from_secs(4);

/// File rewritten with the history on every cycle.
pub const LOG_PATH: &str = "/var/log/thermo-logger/log_cpu_temperature.txt";
