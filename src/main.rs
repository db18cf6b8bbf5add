use echo_server::frameworks::server;

#[tokio::main]
async fn main() {
    // Delegate to the server framework entry point.
    server::start().await;
}
