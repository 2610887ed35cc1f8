//! Logging hooks for the encoder.
//!
//! Window flushes and radix growth are the only decisions the encoder makes,
//! so they are reported through `log_metric!` as structured key/value records.
//! The macro expands to nothing in release builds.

use log::LevelFilter;
use std::fs::OpenOptions;
use std::sync::Once;

/// Logs a structured key-value metric at `debug` level, only in debug builds.
///
/// # Example
/// ```ignore
/// let radix = 4;
/// log_metric!("event"="flush", "radix"=&radix);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            log::debug!(target: "radixpack::metric", "{{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend at `Debug` level, so the encoder's
/// `log_metric!` records are shown.
///
/// Only the first call has any effect. When `log_file` is given, records are
/// appended to that file instead of stderr; a file that cannot be opened
/// leaves logging on stderr.
pub fn enable_verbose_logging(log_file: Option<&str>) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(cfg!(test));
        builder.filter_level(LevelFilter::Debug);

        // Just the level and the message.
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(filename) = log_file {
            match OpenOptions::new().append(true).create(true).open(filename) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(e) => eprintln!("[WARN] could not open log file {filename}: {e}"),
            }
        }

        let _ = builder.try_init();
    });
}
