use taboard_core::{IndicatorConfig, IndicatorReport, PriceFrame};
use tracing_subscriber::EnvFilter;

// Run with `RUST_LOG=taboard_core=debug` to see warm-up diagnostics.

fn main() -> taboard_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Stand-in for a provider download: 60 trading days of a drifting wave.
    let records: Vec<String> = (0..60)
        .map(|i| {
            let close = 150.0 + (i as f64 * 0.25).sin() * 4.0 + i as f64 * 0.1;
            let day = i % 28 + 1;
            let month = i / 28 + 1;
            format!(
                r#"{{"Date": "2024-{month:02}-{day:02}", "High": {:.2}, "Close": {close:.2}}}"#,
                close + 1.2
            )
        })
        .collect();
    let frame = PriceFrame::from_json_str(&format!("[{}]", records.join(",")))?;

    let config = IndicatorConfig::from_json_str(r#"{"sma_window": 10, "ema_window": 10}"#)?;
    let report = IndicatorReport::compute(&frame, config)?;

    for row in report.complete_rows().take(5) {
        println!(
            "{} close={:.2} sma={:.2} macd={:+.4} hist={:+.4} psar={:.2}",
            row.date,
            row.close,
            row.sma.unwrap_or(f64::NAN),
            row.macd.unwrap_or(f64::NAN),
            row.macd_histogram.unwrap_or(f64::NAN),
            row.psar,
        );
    }
    println!("rows={} complete={}", report.rows.len(), report.complete_rows().count());
    Ok(())
}
