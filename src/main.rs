//! Adreel - 浏览器端创意广告生成后端
//!
//! 架构: domain / application / infrastructure 三层，
//! 外部依赖通过端口注入，HTTP 层只做验证与转换。

use std::sync::Arc;
use std::time::Duration;

use adreel::application::{BatchConfig, PollConfig};
use adreel::config::{load_config, print_config};
use adreel::infrastructure::adapters::{
    ElevenLabsClient, ElevenLabsClientConfig, ReplicateClient, ReplicateClientConfig,
};
use adreel::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},adreel={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Adreel - 创意广告生成后端");
    print_config(&config);

    // 创建预测服务客户端
    let replicate_config = ReplicateClientConfig {
        base_url: config.replicate.base_url.clone(),
        api_token: config.replicate.api_token.clone(),
        image_model: config.replicate.image_model.clone(),
        video_model: config.replicate.video_model.clone(),
        timeout_secs: config.replicate.timeout_secs,
    };
    let prediction_port = Arc::new(ReplicateClient::new(replicate_config)?);

    // 创建语音合成客户端
    let elevenlabs_config = ElevenLabsClientConfig {
        base_url: config.elevenlabs.base_url.clone(),
        api_key: config.elevenlabs.api_key.clone(),
        model_id: config.elevenlabs.model_id.clone(),
        timeout_secs: config.elevenlabs.timeout_secs,
    };
    let speech_port = Arc::new(ElevenLabsClient::new(elevenlabs_config)?);

    // 轮询与批量参数
    let image_poll = PollConfig {
        interval: Duration::from_secs(config.poll.image_interval_secs),
        max_attempts: config.poll.image_max_attempts,
    };
    let video_poll = PollConfig {
        interval: Duration::from_secs(config.poll.video_interval_secs),
        max_attempts: config.poll.video_max_attempts,
    };
    let batch = BatchConfig {
        group_size: config.batch.group_size,
    };

    // 创建 HTTP 服务器
    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if config.server.static_files.enabled {
        server_config =
            server_config.with_static_dir(config.server.static_files.dir.display().to_string());
    }

    let state = AppState::new(prediction_port, speech_port, batch, image_poll, video_poll);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
