use chrono::NaiveDate;
use mood_dashboard::{
    app::{dispatch, Action},
    handlers,
    page::Section,
    ui, AppState, DashboardConfig, HttpApi, Widgets,
};
use std::env;
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = DashboardConfig::from_env()?;
    let reference = match env::args().nth(1) {
        Some(arg) => Some(NaiveDate::parse_from_str(&arg, "%Y-%m-%d")?),
        None => None,
    };

    let api = HttpApi::new(&config)?;
    let output_path = config.output_path.clone();
    info!(base = %config.base_url, window = ?config.weekly_window, "starting dashboard");
    let state = AppState::new(config, api, Widgets::all());

    if !handlers::boot(&state).await {
        warn!("not logged in; the dashboard will be empty");
    }

    match reference {
        Some(reference) => {
            state.page.lock().await.section = Section::Dashboard;
            handlers::load_weekly(&state, Some(reference)).await;
            handlers::load_monthly(&state, Some(reference)).await;
        }
        None => dispatch(&state, Action::ShowDashboard).await,
    }

    let html = {
        let page = state.page.lock().await;
        ui::render_dashboard(&page)
    };

    if let Some(parent) = output_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&output_path, html).await?;
    info!("wrote {}", output_path.display());

    Ok(())
}
