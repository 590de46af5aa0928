use gitp::presentation::cli::CliApp;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Run the CLI application
    let app = CliApp::new();
    app.run().await
}
