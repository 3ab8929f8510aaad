use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Error,
}

impl StatusClass {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusClass::Success => "success",
            StatusClass::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub text: String,
    pub class: Option<StatusClass>,
    pub visible: bool,
}

#[derive(Clone, Default)]
pub struct StatusLine {
    state: Arc<Mutex<StatusSnapshot>>,
    hide_timer: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn show(&self, text: &str, class: StatusClass) {
        self.cancel_hide().await;
        let mut state = self.state.lock().await;
        state.text = text.to_string();
        state.class = Some(class);
        state.visible = true;
    }

    // A newer timer always replaces a pending one, so the last status shown
    // is never hidden by a stale timer.
    pub async fn schedule_hide(&self, delay: Duration) {
        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().await;
            state.visible = false;
            state.text.clear();
            state.class = None;
        });

        let mut timer = self.hide_timer.lock().await;
        if let Some(previous) = timer.replace(handle) {
            previous.abort();
        }
    }

    pub async fn snapshot(&self) -> StatusSnapshot {
        self.state.lock().await.clone()
    }

    async fn cancel_hide(&self) {
        if let Some(previous) = self.hide_timer.lock().await.take() {
            previous.abort();
        }
    }
}
