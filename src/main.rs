use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    foldsite::cli::run().await
}
