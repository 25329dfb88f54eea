use api_rest::AppState;
use quill_core::NoteRepository;
use quill_store::DocumentStore;
use quill_webhook::WebhookVerifier;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DATA_DIR: &str = "./notes_data";

/// Main entry point for the Quillbox notes service.
///
/// Starts the REST server (notes CRUD plus the identity-provider
/// webhook) on the configured address. All configuration is resolved
/// here, once, and passed into the shared state; request handlers never
/// read the environment.
///
/// # Environment Variables
/// - `QUILLBOX_ADDR`: server address (default: "0.0.0.0:3000")
/// - `QUILLBOX_DATA_DIR`: note store root (default: "./notes_data")
/// - `QUILLBOX_WEBHOOK_SECRET`: shared secret for webhook signature
///   verification (required)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration or startup fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quillbox=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("QUILLBOX_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
    let data_dir = std::env::var("QUILLBOX_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into());
    let webhook_secret = std::env::var("QUILLBOX_WEBHOOK_SECRET")
        .map_err(|_| anyhow::anyhow!("QUILLBOX_WEBHOOK_SECRET is not set"))?;

    tracing::info!("++ Starting Quillbox on {}", addr);
    tracing::info!("++ Note store root: {}", data_dir);

    let store = DocumentStore::open(&data_dir)?;
    let repository = NoteRepository::new(store);
    let verifier = WebhookVerifier::new(&webhook_secret)?;
    let app = api_rest::app(AppState::new(repository, verifier));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
