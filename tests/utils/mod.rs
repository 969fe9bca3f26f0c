use heartbeat_api::{config::Config, server::Server};

pub async fn spawn_server() -> String {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let server = Server::new(&config).await.unwrap();

    let port = server.port().unwrap();
    tokio::spawn(server.run());

    format!("http://{}:{}", config.host, port)
}
