use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr subscriber. `CHOROMAP_LOG` wins over the `-v` count.
pub fn init(verbose: u8) {
    let env = std::env::var("CHOROMAP_LOG").ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter(env.as_deref(), verbose))
        .init();
}

/// Default level for a `-v` count.
fn level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Directives from the environment if they parse, else the `-v` level.
fn filter(env: Option<&str>, verbose: u8) -> EnvFilter {
    env.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level(verbose)))
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level(0), "warn");
        assert_eq!(level(1), "info");
        assert_eq!(level(2), "debug");
        assert_eq!(level(3), "trace");
        assert_eq!(level(9), "trace");
    }

    #[test]
    fn environment_wins_over_verbosity() {
        assert_eq!(filter(Some("choromap=debug"), 0).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(filter(Some("error"), 3).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn verbosity_applies_without_environment() {
        assert_eq!(filter(None, 1).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(filter(Some("  "), 2).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
