// SPDX-License-Identifier: PMPL-1.0-or-later

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr subscriber. `RUST_LOG` wins over the default
/// directive; calling this twice is harmless.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "lingo_basics=debug"
    } else {
        "lingo_basics=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
