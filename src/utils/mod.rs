//! Utility functions: image loading and logging setup.

pub mod image;

pub use self::image::{dynamic_to_gray, load_gray_image, load_image};

/// Initializes the tracing subscriber for logging.
///
/// Sets up an environment filter (from `RUST_LOG`, falling back to `info` so
/// progress lines are visible by default) and a formatting layer writing to
/// standard output. Call once at the start of the binary.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
