use std::future::Future;

use indicatif::ProgressStyle;
use tracing::{Instrument, info_span};
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::span_ext::IndicatifSpanExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::terminal::logging::{LifelineFormatter, PRINT_TARGET};

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Installs the global subscriber. Log lines are routed through the
/// progress bar layer so they never tear a running spinner.
pub fn init_logging() {
    let indicatif_layer = IndicatifLayer::new().with_progress_style(spinner_style());

    let fmt_layer = fmt::layer()
        .event_format(LifelineFormatter)
        .with_writer(indicatif_layer.get_stdout_writer());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Command output must survive any RUST_LOG.
    let filter = match format!("{PRINT_TARGET}=info").parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(indicatif_layer)
        .init();
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.red} {span_child_prefix}{msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// Runs `task` under a spinner showing `message`.
pub async fn run<F, T>(message: &str, task: F) -> T
where
    F: Future<Output = T>,
{
    let span = info_span!("task", indicatif.pb_show = true);
    span.pb_set_message(message);
    task.instrument(span).await
}
