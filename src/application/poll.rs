//! Job Poller - 任务轮询
//!
//! 固定间隔轮询任务状态，直到终态或达到次数上限:
//! - 图像: 2s 间隔，最多 30 次
//! - 视频: 5s 间隔，最多 60 次
//!
//! 不做指数退避，不做重试。相比原始实现增加了协作式取消:
//! 每次休眠期间响应 CancellationToken，避免陈旧轮询跑满上限。

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::application::ports::{JobStatus, PredictionPort};

/// 轮询配置
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// 轮询间隔
    pub interval: Duration,
    /// 最大查询次数
    pub max_attempts: u32,
}

impl PollConfig {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// 图像任务预设: 2s × 30
    pub fn image() -> Self {
        Self::new(Duration::from_secs(2), 30)
    }

    /// 视频任务预设: 5s × 60
    pub fn video() -> Self {
        Self::new(Duration::from_secs(5), 60)
    }
}

/// 轮询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollResult {
    /// 终态成功，携带结果 URL
    Succeeded(String),
    /// 终态失败或查询失败
    Failed,
    /// 达到次数上限仍未见终态
    Exhausted,
    /// 被调用方取消
    Cancelled,
}

impl PollResult {
    /// 压平为结果 URL；所有非成功情形均为 None
    pub fn into_output(self) -> Option<String> {
        match self {
            PollResult::Succeeded(url) => Some(url),
            _ => None,
        }
    }
}

/// 任务轮询器
#[derive(Clone)]
pub struct JobPoller {
    port: Arc<dyn PredictionPort>,
}

impl JobPoller {
    pub fn new(port: Arc<dyn PredictionPort>) -> Self {
        Self { port }
    }

    /// 轮询任务直到终态、次数上限或取消
    ///
    /// 与原始循环一致，首次查询之前也会先休眠一个间隔
    pub async fn poll(
        &self,
        job_id: &str,
        config: &PollConfig,
        cancel: &CancellationToken,
    ) -> PollResult {
        for attempt in 0..config.max_attempts {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(job_id = %job_id, attempt, "Poll cancelled");
                    return PollResult::Cancelled;
                }
                _ = tokio::time::sleep(config.interval) => {}
            }

            let job = match self.port.fetch(job_id).await {
                Ok(job) => job,
                Err(e) => {
                    // 查询失败视为该任务终态失败，不重试
                    tracing::error!(job_id = %job_id, error = %e, "Job status fetch failed");
                    return PollResult::Failed;
                }
            };

            match job.status {
                JobStatus::Succeeded => {
                    if let Some(output) = job.output {
                        return PollResult::Succeeded(output);
                    }
                    // 成功但无输出，继续等待下一次查询
                    tracing::warn!(job_id = %job_id, "Job succeeded without output");
                }
                JobStatus::Failed | JobStatus::Canceled => {
                    tracing::error!(
                        job_id = %job_id,
                        status = job.status.as_str(),
                        error = ?job.error,
                        "Job reached terminal failure"
                    );
                    return PollResult::Failed;
                }
                JobStatus::Starting | JobStatus::Processing => {}
            }
        }

        tracing::warn!(
            job_id = %job_id,
            max_attempts = config.max_attempts,
            "Poll attempt ceiling reached"
        );
        PollResult::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{FakeOutcome, FakePredictionClient};
    use crate::application::ports::GenerationInput;

    fn fast_config(max_attempts: u32) -> PollConfig {
        PollConfig::new(Duration::from_millis(1), max_attempts)
    }

    async fn submit(client: &FakePredictionClient) -> String {
        client
            .submit(GenerationInput::image("test", "1:1", 80))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_poll_success_after_processing() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::succeed_after(
            3,
            "https://example.com/out.webp",
        )));
        let id = submit(&client).await;
        let poller = JobPoller::new(client.clone());

        let result = poller
            .poll(&id, &fast_config(30), &CancellationToken::new())
            .await;

        assert_eq!(
            result,
            PollResult::Succeeded("https://example.com/out.webp".to_string())
        );
        // 3 次 processing + 1 次 succeeded
        assert_eq!(client.fetch_count(&id), 4);
    }

    #[tokio::test]
    async fn test_poll_terminal_failure() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::fail_after(
            2,
            "NSFW content detected",
        )));
        let id = submit(&client).await;
        let poller = JobPoller::new(client.clone());

        let result = poller
            .poll(&id, &fast_config(30), &CancellationToken::new())
            .await;

        assert_eq!(result, PollResult::Failed);
    }

    #[tokio::test]
    async fn test_poll_exhausts_exactly_at_ceiling() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::never_terminal()));
        let id = submit(&client).await;
        let poller = JobPoller::new(client.clone());

        let result = poller
            .poll(&id, &fast_config(30), &CancellationToken::new())
            .await;

        assert_eq!(result, PollResult::Exhausted);
        // 恰好在次数上限处停止，不多不少
        assert_eq!(client.fetch_count(&id), 30);
    }

    #[tokio::test]
    async fn test_poll_fetch_error_is_terminal() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::fetch_error()));
        let id = submit(&client).await;
        let poller = JobPoller::new(client.clone());

        let result = poller
            .poll(&id, &fast_config(30), &CancellationToken::new())
            .await;

        assert_eq!(result, PollResult::Failed);
        assert_eq!(client.fetch_count(&id), 1);
    }

    #[tokio::test]
    async fn test_poll_cancellation_stops_loop() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::never_terminal()));
        let id = submit(&client).await;
        let poller = JobPoller::new(client.clone());

        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = poller
            .poll(&id, &PollConfig::new(Duration::from_secs(60), 30), &cancel)
            .await;

        assert_eq!(result, PollResult::Cancelled);
        assert_eq!(client.fetch_count(&id), 0);
    }

    #[test]
    fn test_presets() {
        let image = PollConfig::image();
        assert_eq!(image.interval, Duration::from_secs(2));
        assert_eq!(image.max_attempts, 30);
        let video = PollConfig::video();
        assert_eq!(video.interval, Duration::from_secs(5));
        assert_eq!(video.max_attempts, 60);
    }

    #[test]
    fn test_into_output() {
        assert_eq!(
            PollResult::Succeeded("u".to_string()).into_output(),
            Some("u".to_string())
        );
        assert_eq!(PollResult::Failed.into_output(), None);
        assert_eq!(PollResult::Exhausted.into_output(), None);
        assert_eq!(PollResult::Cancelled.into_output(), None);
    }
}
