use clap::Parser;
use ipogmp::{
    build_heatmap, init_logging, log_app_start, log_report_rendered, log_source_selected,
    logging_config_from_env, render_text_report, FileIpoSource, IpoSource, ReportConfig,
    DEFAULT_REFRESH_INTERVAL_SECS,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ReportConfig::parse();

    let logging_cfg = logging_config_from_env();
    init_logging(&logging_cfg)?;
    log_app_start(&logging_cfg);

    let source = FileIpoSource::new(config.feed_path.clone());
    log_source_selected(source.path(), Some(DEFAULT_REFRESH_INTERVAL_SECS));

    let records = source.records()?;
    let snapshot = build_heatmap(&records, &config.filters());

    if config.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_text_report(&snapshot));
    }
    log_report_rendered(snapshot.tiles.len(), config.json);

    Ok(())
}
