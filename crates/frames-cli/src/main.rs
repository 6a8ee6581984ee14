//! Binary entrypoint; all behaviour lives in the library.

#[tokio::main]
async fn main() {
    let exit_code = frames_cli::run().await;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
