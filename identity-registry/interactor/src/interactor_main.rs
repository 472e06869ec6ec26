use identity_registry_interact::identity_registry_cli;

#[tokio::main]
async fn main() {
    if let Err(err) = identity_registry_cli().await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
