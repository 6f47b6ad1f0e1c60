mod bootstrap;

use anyhow::Result;
use sales_core::models::FilterSelection;
use sales_core::settings::Settings;
use sales_data::dataset::SalesDataSet;
use sales_ui::app::{App, ViewMode};

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Sales Dash v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, Theme: {}, Month: {}",
        settings.view,
        settings.theme,
        settings.month
    );

    // The dataset is built exactly once and stays immutable for the process
    // lifetime; every view borrows from it.
    let dataset = match &settings.data_file {
        Some(path) => SalesDataSet::load_from_path(path)?,
        None => SalesDataSet::load()?,
    };
    tracing::info!(records = dataset.len(), "sales data loaded");

    let selection = FilterSelection::parse(&settings.month);

    let view_mode = match settings.view.as_str() {
        "table" => ViewMode::Table,
        _ => ViewMode::Dashboard,
    };

    // An unknown --month is rejected here, before the terminal is taken over.
    let app = App::new(&settings.theme, view_mode, dataset, selection)?;
    app.run()?;

    Ok(())
}
