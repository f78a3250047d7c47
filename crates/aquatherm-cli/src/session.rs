//! A console session bound to the HTTP analysis client

use std::fs;
use std::path::Path;

use anyhow::Result;
use aquatherm_client::HttpAnalysisClient;
use aquatherm_console::view::ConsoleView;
use aquatherm_console::{ConsoleState, Controller, Disposition};
use aquatherm_core::config::LayeredConfig;
use aquatherm_core::models::SourceMode;

use crate::errors::{self, CliError};
use crate::output::OutputWriter;
use crate::progress;

pub struct Session {
    pub controller: Controller<HttpAnalysisClient>,
    endpoint: String,
}

impl Session {
    pub fn open(config: &LayeredConfig) -> Result<Self> {
        let client = HttpAnalysisClient::from_config(config)?;
        let endpoint = client.endpoint();
        let state = ConsoleState::new(config.session_coordinate()?, config.zoom.value);

        tracing::debug!(endpoint = %endpoint, timeout_secs = config.timeout_secs.value, "Opened console session");

        Ok(Self { controller: Controller::with_state(client, state), endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Switch to upload mode with the file at `path`
    pub fn attach(&mut self, path: &Path) -> Result<()> {
        let bytes = fs::read(path).map_err(|e| errors::upload_unreadable(path, &e.to_string()))?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.controller.select_source(SourceMode::Upload);
        self.controller.set_file(bytes, filename);
        Ok(())
    }

    /// Wait for every in-flight request, spinning while the console is loading
    pub async fn settle(&mut self, output: &OutputWriter, message: &str) -> Vec<Disposition> {
        let spinner = progress::create_spinner(message, !output.is_json());
        let dispositions = self.controller.settle().await;

        match self.controller.view().failure {
            Some(failure) => progress::finish_error(&spinner, failure.title),
            None => progress::finish_success(&spinner, "Analysis complete"),
        }

        dispositions
    }

    /// Error out if the console ended in the failed state
    pub fn ensure_loaded(&self, view: &ConsoleView) -> std::result::Result<(), CliError> {
        match view.failure {
            Some(ref failure) => Err(errors::analysis_failed(failure, &self.endpoint)),
            None => Ok(()),
        }
    }
}
