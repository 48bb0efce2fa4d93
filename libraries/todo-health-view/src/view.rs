//! Loading / success / error state of the health page.

use crate::client::HealthClient;
use crate::error::{HealthViewError, Result};
use crate::table::{escape_html, render_html, render_text, JsonNode};
use serde_json::Value;

const LOADING: &str = "Loading API data...";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Success { root: Value, health: Value },
    Error(String),
}

/// One page showing the API root and health responses of a server.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthView {
    api_version: String,
    state: ViewState,
}

impl HealthView {
    pub fn new(api_version: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            state: ViewState::Loading,
        }
    }

    /// Fetch root then health once and settle the view.
    pub async fn load(client: &HealthClient) -> Self {
        let mut view = Self::new(client.api_version());

        let outcome = async {
            let root = client.fetch_root().await?;
            let health = client.fetch_health().await?;
            Ok::<_, HealthViewError>((root, health))
        }
        .await;

        view.resolve(outcome);
        view
    }

    /// Settle a loading view. Returns false when the view was already settled.
    pub fn resolve(&mut self, outcome: Result<(Value, Value)>) -> bool {
        if !matches!(self.state, ViewState::Loading) {
            return false;
        }

        self.state = match outcome {
            Ok((root, health)) => ViewState::Success { root, health },
            Err(e) => {
                tracing::warn!("Health view failed: {}", e);
                ViewState::Error(e.to_string())
            }
        };
        true
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state, ViewState::Error(_))
    }

    pub fn render_html(&self) -> String {
        match &self.state {
            ViewState::Loading => format!("<div>{}</div>", LOADING),
            ViewState::Error(message) => format!("<div>Error: {}</div>", escape_html(message)),
            ViewState::Success { root, health } => format!(
                "<div class=\"grid-container\">{}{}</div>",
                self.html_section("Root", root),
                self.html_section("Health", health)
            ),
        }
    }

    pub fn render_text(&self) -> String {
        match &self.state {
            ViewState::Loading => format!("{}\n", LOADING),
            ViewState::Error(message) => format!("Error: {}\n", message),
            ViewState::Success { root, health } => format!(
                "{}\n{}",
                self.text_section("Root", root),
                self.text_section("Health", health)
            ),
        }
    }

    fn heading(&self, section: &str) -> String {
        format!("API {} {}", self.api_version, section)
    }

    fn html_section(&self, section: &str, data: &Value) -> String {
        format!(
            "<div class=\"card\"><h2>{}</h2>{}</div>",
            escape_html(&self.heading(section)),
            render_html(&JsonNode::from_value(data))
        )
    }

    fn text_section(&self, section: &str, data: &Value) -> String {
        let heading = self.heading(section);
        format!(
            "{}\n{}\n{}",
            heading,
            "=".repeat(heading.len()),
            render_text(&JsonNode::from_value(data))
        )
    }
}
