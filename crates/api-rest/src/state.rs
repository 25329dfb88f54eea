use quill_core::NoteRepository;
use quill_webhook::WebhookVerifier;

/// Application state shared across REST API handlers.
///
/// Both members are resolved once at startup and reused across requests;
/// handlers never read process-wide configuration themselves.
#[derive(Clone)]
pub struct AppState {
    pub repository: NoteRepository,
    pub verifier: WebhookVerifier,
}

impl AppState {
    /// Creates the shared state from an opened repository and a
    /// configured webhook verifier.
    pub fn new(repository: NoteRepository, verifier: WebhookVerifier) -> Self {
        Self {
            repository,
            verifier,
        }
    }
}
