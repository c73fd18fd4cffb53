use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    anitrack_lib::run().await
}
