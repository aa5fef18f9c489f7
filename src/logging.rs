//! Tracing setup.
//!
//! User-facing progress goes to stdout via `println!`; tracing output is for
//! debugging and goes to stderr, quiet unless `RUST_LOG` asks for more.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
