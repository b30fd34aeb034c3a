use knotx_repository_connector::cli::CliCommand;
use knotx_repository_connector::logging;
use knotx_repository_connector_http::HttpRepositoryConnectorFactory;

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", e);
    }

    if let Err(err) = CliCommand::run_from_args(&[&HttpRepositoryConnectorFactory]).await {
        eprintln!("knotx-http-repo error: {:#}", err);
        std::process::exit(1);
    }
}
