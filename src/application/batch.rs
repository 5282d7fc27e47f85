//! Batch Orchestrator - 批量生成编排
//!
//! N 个相互独立的生成任务按固定大小分组（默认 3 个一组）执行:
//! 组内提交与轮询并发进行，一组完全结束后才开始下一组。
//! 结果按任务原始序号写入有序槽位；部分失败不影响其他槽位。

use std::sync::Arc;

use futures_util::future::join_all;
use tokio_util::sync::CancellationToken;

use crate::application::poll::{JobPoller, PollConfig};
use crate::application::ports::{GenerationInput, PredictionPort};

/// 默认组大小
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// 批量编排配置
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// 每组并发任务数
    pub group_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
        }
    }
}

/// 批量编排器
#[derive(Clone)]
pub struct BatchRunner {
    port: Arc<dyn PredictionPort>,
    poller: JobPoller,
    config: BatchConfig,
}

impl BatchRunner {
    pub fn new(port: Arc<dyn PredictionPort>, config: BatchConfig) -> Self {
        Self {
            poller: JobPoller::new(port.clone()),
            port,
            config,
        }
    }

    /// 执行一批生成任务，返回与输入等长的结果槽位
    ///
    /// 槽位按任务原始序号填写，与组内完成顺序无关。
    /// 提交失败、生成失败或轮询耗尽的槽位为 None。
    pub async fn run(
        &self,
        inputs: Vec<GenerationInput>,
        poll_config: &PollConfig,
        cancel: &CancellationToken,
    ) -> Vec<Option<String>> {
        let total = inputs.len();
        let mut slots: Vec<Option<String>> = vec![None; total];

        let mut tasks: Vec<(usize, GenerationInput)> = inputs.into_iter().enumerate().collect();

        while !tasks.is_empty() {
            if cancel.is_cancelled() {
                tracing::debug!(remaining = tasks.len(), "Batch cancelled, skipping remaining groups");
                break;
            }

            let group: Vec<(usize, GenerationInput)> = tasks
                .drain(..self.config.group_size.min(tasks.len()))
                .collect();

            let group_futures = group.into_iter().map(|(index, input)| {
                let port = self.port.clone();
                let poller = self.poller.clone();
                async move {
                    let job = match port.submit(input).await {
                        Ok(job) => job,
                        Err(e) => {
                            tracing::error!(slot = index, error = %e, "Batch submission failed");
                            return (index, None);
                        }
                    };
                    tracing::debug!(slot = index, job_id = %job.id, "Batch task submitted");
                    let output = poller.poll(&job.id, poll_config, cancel).await.into_output();
                    (index, output)
                }
            });

            for (index, output) in join_all(group_futures).await {
                slots[index] = output;
            }
        }

        tracing::info!(
            total,
            completed = slots.iter().filter(|s| s.is_some()).count(),
            "Batch finished"
        );
        slots
    }
}
