use flexi_logger::{LogSpecification, Logger, LoggerHandle, WriteMode};
use log::error;

/// Overridden by `RUST_LOG`.
const DEFAULT_SPEC: &str = "info,justsayit=debug,sayit=debug";

/// An unparsable `RUST_LOG` falls back to the default spec instead of aborting startup.
fn log_spec(env: Option<&str>) -> LogSpecification {
    env.and_then(|spec| match LogSpecification::parse(spec) {
        Ok(spec) => Some(spec),
        Err(e) => {
            eprintln!("Ignoring RUST_LOG={spec:?}: {e}");
            None
        }
    })
    .or_else(|| LogSpecification::parse(DEFAULT_SPEC).ok())
    .unwrap_or_else(LogSpecification::info)
}

pub fn init() -> LoggerHandle {
    let env = std::env::var("RUST_LOG").ok();
    let logger = Logger::with(log_spec(env.as_deref()))
        .log_to_stderr()
        .write_mode(WriteMode::Direct)
        .start()
        .expect("log init");

    let orig_hook = std::panic::take_hook();
    let logger_for_panic = logger.clone();
    std::panic::set_hook(Box::new(move |panic_info| {
        // request handler panics are turned into 500s, keep the process alive
        error!("Panic: {panic_info}");
        logger_for_panic.flush();
        orig_hook(panic_info);
    }));
    logger
}
