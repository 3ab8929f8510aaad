use popup_client::controller::Popup;
use popup_client::dispatch::Dispatcher;
use popup_client::settings::{SettingsStore, resolve_settings_path};
use popup_client::status::{StatusClass, StatusSnapshot};
use popup_client::ui::render_status;
use std::env;
use std::process::ExitCode;
use tokio::fs;
use tracing_subscriber::{EnvFilter, fmt};

const READER_BASE_URL: &str = "http://localhost:8000";
const QUERY_BASE_URL: &str = "http://127.0.0.1:8000";

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_default();

    let snapshot = match command.as_str() {
        "read" => run_reader(args.next()).await?,
        "query" => run_query(args.collect::<Vec<_>>().join(" ")).await,
        _ => {
            eprintln!("usage: popup_client read [count] | popup_client query <text>");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{}", render_status(&snapshot));

    Ok(match snapshot.class {
        Some(StatusClass::Error) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

async fn run_reader(
    count_arg: Option<String>,
) -> Result<StatusSnapshot, Box<dyn std::error::Error>> {
    let settings_path = resolve_settings_path();
    if let Some(parent) = settings_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let store = SettingsStore::new(settings_path);
    let dispatcher = Dispatcher::new(base_url(READER_BASE_URL));
    let mut popup = Popup::reader(dispatcher, Some(store));

    let raw = match count_arg {
        Some(value) => {
            popup.count_changed(&value).await;
            value
        }
        None => popup
            .load_saved_count()
            .await
            .map(|count| count.to_string())
            .unwrap_or_default(),
    };

    Ok(popup.activate(&raw).await)
}

async fn run_query(text: String) -> StatusSnapshot {
    let dispatcher = Dispatcher::new(base_url(QUERY_BASE_URL));
    let mut popup = Popup::query(dispatcher);
    popup.activate(&text).await
}

fn base_url(default: &str) -> String {
    env::var("SERVER_URL").unwrap_or_else(|_| default.to_string())
}
