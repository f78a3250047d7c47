use aquatherm_console::view::FailureView;
use aquatherm_core::error::ErrorKind;
use aquatherm_core::routing::Screen;
use console::style;
use std::fmt;
use std::path::Path;

/// Error with context and suggestions for the operator
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// The analysis ended in the failed state
pub fn analysis_failed(failure: &FailureView, endpoint: &str) -> CliError {
    let error = CliError::new(failure.title).with_context(format!(
        "{}\n\nEndpoint: {}",
        failure.message, endpoint
    ));

    match failure.kind {
        ErrorKind::Transport => error
            .with_suggestion("Check that the analysis API is running and reachable")
            .with_suggestion("Point at another server: --api-url or AQUATHERM_API_URL")
            .with_suggestion("Allow slower responses: --timeout <SECS>")
            .with_help("Run: aquatherm config"),
        ErrorKind::ServerRejected => error
            .with_suggestion("Correct the input the service rejected and try again")
            .with_suggestion("Check the location with --lat/--lng or the uploaded file")
            .with_help("Run: aquatherm analyze --help"),
        ErrorKind::MalformedResponse => error
            .with_suggestion("The analysis API may be a different version than this console")
            .with_suggestion("Verify --api-url points at the analysis service")
            .with_help("Run: aquatherm config"),
    }
}

/// The upload file could not be read
pub fn upload_unreadable(path: &Path, reason: &str) -> CliError {
    CliError::new("Upload file could not be read")
        .with_context(format!("Path: {}\nError: {}", path.display(), reason))
        .with_suggestion("Check the file path and try again")
        .with_suggestion("Or omit --file to analyse the live satellite feed")
        .with_help("Run: aquatherm analyze --help")
}

/// The path matches no screen
pub fn unknown_route(path: &str) -> CliError {
    let known = Screen::ALL
        .iter()
        .map(|screen| screen.path())
        .collect::<Vec<_>>()
        .join(", ");

    CliError::new("Unknown route")
        .with_context(format!("No screen is served at '{}'.\n\nKnown paths: {}", path, known))
        .with_suggestion("Use one of the known paths")
        .with_help("Run: aquatherm route --help")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(kind: ErrorKind) -> FailureView {
        FailureView {
            kind,
            title: "Analysis failed",
            message: "details".to_string(),
            user_recoverable: kind.is_user_recoverable(),
        }
    }

    #[test]
    fn test_suggestions_depend_on_kind() {
        let transport = analysis_failed(&failure(ErrorKind::Transport), "http://x/api/analyze/");
        let malformed =
            analysis_failed(&failure(ErrorKind::MalformedResponse), "http://x/api/analyze/");

        assert!(transport.suggestions[0].contains("running"));
        assert!(malformed.suggestions[0].contains("version"));
        assert!(transport.context.unwrap().contains("http://x/api/analyze/"));
    }

    #[test]
    fn test_unknown_route_lists_known_paths() {
        let error = unknown_route("/admin");
        assert!(error.context.unwrap().contains("/console"));
    }
}
