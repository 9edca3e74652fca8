pub fn init() {
    // Initialize tracing subscriber once, honoring RUST_LOG if set.
    // Logs go to stderr: stdout carries the MCP stream in stdio mode.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log a metric line and hand it to the `metrics` facade.
/// `*_total` metrics are counters, everything else a histogram.
pub fn log_metric(source: &'static str, metric: &'static str, value: f64) {
    tracing::info!(source = source, metric = metric, value = value, "metric");
    if metric.ends_with("_total") {
        metrics::counter!(metric, "source" => source).increment(value as u64);
    } else {
        metrics::histogram!(metric, "source" => source).record(value);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }

    #[test]
    fn log_metric_without_recorder_is_a_noop() {
        super::log_metric("slides.fetch", "remote_error_total", 1.0);
        super::log_metric("slides.fetch", "remote_latency_ms", 12.5);
    }
}
