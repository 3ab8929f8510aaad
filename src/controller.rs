use crate::dispatch::Dispatcher;
use crate::errors::DispatchError;
use crate::settings::SettingsStore;
use crate::status::{StatusClass, StatusLine, StatusSnapshot};
use crate::validate;
use std::time::Duration;
use tracing::{debug, error, warn};

pub const RANGE_MESSAGE: &str = "Please enter a number between 1 and 50";
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a query";
pub const QUERY_SUCCESS_MESSAGE: &str = "Query processed successfully";
pub const CONNECTION_FAILURE_MESSAGE: &str =
    "Error: Could not connect to the server. Make sure it is running.";

const PENDING_LABEL: &str = "Processing...";
const AUTO_HIDE_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    ReadMessages,
    ProcessQuery,
}

#[derive(Debug, Clone)]
pub struct EndpointDescriptor {
    pub kind: EndpointKind,
    pub pending_label: Option<&'static str>,
    pub auto_hide: Option<Duration>,
}

impl EndpointDescriptor {
    pub fn read_messages() -> Self {
        Self {
            kind: EndpointKind::ReadMessages,
            pending_label: None,
            auto_hide: None,
        }
    }

    pub fn process_query() -> Self {
        Self {
            kind: EndpointKind::ProcessQuery,
            pending_label: Some(PENDING_LABEL),
            auto_hide: Some(AUTO_HIDE_DELAY),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub disabled: bool,
    pub label: String,
}

pub struct Popup {
    dispatcher: Dispatcher,
    settings: Option<SettingsStore>,
    descriptor: EndpointDescriptor,
    pub status: StatusLine,
    pub button: ButtonState,
}

impl Popup {
    pub fn new(
        dispatcher: Dispatcher,
        settings: Option<SettingsStore>,
        descriptor: EndpointDescriptor,
        button_label: &str,
    ) -> Self {
        Self {
            dispatcher,
            settings,
            descriptor,
            status: StatusLine::new(),
            button: ButtonState {
                disabled: false,
                label: button_label.to_string(),
            },
        }
    }

    pub fn reader(dispatcher: Dispatcher, settings: Option<SettingsStore>) -> Self {
        Self::new(
            dispatcher,
            settings,
            EndpointDescriptor::read_messages(),
            "Read Messages",
        )
    }

    pub fn query(dispatcher: Dispatcher) -> Self {
        Self::new(
            dispatcher,
            None,
            EndpointDescriptor::process_query(),
            "Process Query",
        )
    }

    pub async fn load_saved_count(&self) -> Option<i64> {
        match &self.settings {
            Some(store) => store.load().await,
            None => None,
        }
    }

    // Mirrors the change handler: the raw value is persisted without range
    // validation, only dispatch is range-checked.
    pub async fn count_changed(&self, raw: &str) {
        let Some(store) = &self.settings else {
            return;
        };
        let Ok(value) = raw.trim().parse::<i64>() else {
            debug!("skipping save of non-numeric count {raw:?}");
            return;
        };
        if let Err(err) = store.save(value).await {
            error!("failed to save message count: {err}");
        }
    }

    pub async fn activate(&mut self, raw_input: &str) -> StatusSnapshot {
        match self.descriptor.kind {
            EndpointKind::ReadMessages => self.run_read(raw_input).await,
            EndpointKind::ProcessQuery => self.run_query(raw_input).await,
        }

        self.status.snapshot().await
    }

    async fn run_read(&mut self, raw: &str) {
        let Some(count) = validate::parse_count(raw) else {
            self.status.show(RANGE_MESSAGE, StatusClass::Error).await;
            return;
        };

        match self.dispatcher.read_messages(count).await {
            Ok(body) => self.status.show(&body.message, StatusClass::Success).await,
            Err(DispatchError::Http { detail, .. }) => {
                self.status
                    .show(&format!("Error: {detail}"), StatusClass::Error)
                    .await;
            }
            Err(DispatchError::Network(message)) => {
                self.status
                    .show(
                        &format!("Error: {message}. Make sure the server is running."),
                        StatusClass::Error,
                    )
                    .await;
            }
        }
    }

    async fn run_query(&mut self, raw: &str) {
        let Some(query) = validate::normalize_query(raw) else {
            self.status
                .show(EMPTY_QUERY_MESSAGE, StatusClass::Error)
                .await;
            return;
        };

        let restore = self.button.clone();
        self.button.disabled = true;
        if let Some(label) = self.descriptor.pending_label {
            self.button.label = label.to_string();
        }

        let outcome = self.dispatcher.process_query(&query).await;
        self.button = restore;

        match outcome {
            Ok(()) => {
                self.status
                    .show(QUERY_SUCCESS_MESSAGE, StatusClass::Success)
                    .await;
            }
            Err(DispatchError::Http { status, detail }) => {
                warn!("query rejected with {status}: {detail}");
                self.status
                    .show(&format!("Error: {detail}"), StatusClass::Error)
                    .await;
            }
            Err(DispatchError::Network(message)) => {
                warn!("query dispatch failed: {message}");
                self.status
                    .show(CONNECTION_FAILURE_MESSAGE, StatusClass::Error)
                    .await;
            }
        }

        if let Some(delay) = self.descriptor.auto_hide {
            self.status.schedule_hide(delay).await;
        }
    }
}
