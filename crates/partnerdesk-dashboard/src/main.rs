use std::env;
use std::path::PathBuf;

use eyre::Result;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use partnerdesk_dashboard::config::{default_config_path, load_config};
use partnerdesk_dashboard::source::{JsonFileSource, RecordSource};
use partnerdesk_dashboard::view::{self, CandidatePage, DashboardOverview, ListParams};

#[derive(Serialize)]
struct Output {
    overview: DashboardOverview,
    candidates: CandidatePage,
}

fn list_params_from_env() -> Result<ListParams> {
    let page = match env::var("PARTNERDESK_PAGE") {
        Ok(raw) => raw
            .parse::<usize>()
            .map_err(|e| eyre::eyre!("PARTNERDESK_PAGE must be a page index: {e}"))?,
        Err(_) => 0,
    };
    Ok(ListParams {
        search: env::var("PARTNERDESK_SEARCH").unwrap_or_default(),
        status: env::var("PARTNERDESK_STATUS").unwrap_or_default(),
        payment_status: env::var("PARTNERDESK_PAYMENT_STATUS").unwrap_or_default(),
        report_status: env::var("PARTNERDESK_REPORT_STATUS").unwrap_or_default(),
        sort: env::var("PARTNERDESK_SORT").ok(),
        direction: env::var("PARTNERDESK_DIRECTION").ok(),
        page,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env::var("PARTNERDESK_LOG_JSON").is_ok_and(|v| v == "1") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = match env::var("PARTNERDESK_CONFIG") {
        Ok(path) => PathBuf::from(path),
        Err(_) => default_config_path()?,
    };
    let config = load_config(&config_path)?;
    tracing::info!(
        partner_id = %config.partner_id,
        partner_type = %config.partner_type,
        "config loaded"
    );

    let source = JsonFileSource::new(&config.data_dir);
    let records = source.fetch_records(config.partner_id).await?;
    let transactions = source.fetch_transactions(config.partner_id).await?;

    let query = list_params_from_env()?.into_query(config.default_page_size)?;
    let ctx = config.context();

    let output = Output {
        overview: view::overview(&ctx, &records, &transactions),
        candidates: view::candidate_page(&records, &query),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
