use shop_server::{Config, Server, init_logger_with_file};

#[tokio::main]
async fn main() {
    // Load .env file
    let _ = dotenv::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(
        "Starting shop-server v{} (env: {})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    // 数据库连接失败直接退出, 不重试
    if let Err(e) = Server::new(config).run().await {
        tracing::error!("Server failed: {e}");
        std::process::exit(1);
    }
}
