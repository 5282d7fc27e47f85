//! Fake Prediction Client - 用于测试的预测客户端
//!
//! 不发起任何外部调用。按预设脚本推进任务状态，并记录所有
//! 提交与查询，供测试断言「未发起外部调用」「恰好 N 次查询」等性质。

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::application::ports::{
    GenerationInput, Job, JobStatus, PredictionPort, ProviderError,
};

/// 单个任务的预设结局
#[derive(Debug, Clone)]
pub enum FakeOutcome {
    /// 前 n 次查询返回 processing，之后返回 succeeded + output
    SucceedAfter { processing: u32, output: String },
    /// 前 n 次查询返回 processing，之后返回 failed + error
    FailAfter { processing: u32, error: String },
    /// 永不进入终态
    NeverTerminal,
    /// 提交本身失败
    SubmitError,
    /// 每次查询都返回传输错误
    FetchError,
}

impl FakeOutcome {
    pub fn succeed_after(processing: u32, output: impl Into<String>) -> Self {
        FakeOutcome::SucceedAfter {
            processing,
            output: output.into(),
        }
    }

    pub fn fail_after(processing: u32, error: impl Into<String>) -> Self {
        FakeOutcome::FailAfter {
            processing,
            error: error.into(),
        }
    }

    pub fn never_terminal() -> Self {
        FakeOutcome::NeverTerminal
    }

    pub fn submit_error() -> Self {
        FakeOutcome::SubmitError
    }

    pub fn fetch_error() -> Self {
        FakeOutcome::FetchError
    }
}

struct FakeJob {
    outcome: FakeOutcome,
    fetches: u32,
}

#[derive(Default)]
struct FakeState {
    jobs: HashMap<String, FakeJob>,
    submissions: Vec<GenerationInput>,
}

type OutcomeFn = Box<dyn Fn(usize) -> FakeOutcome + Send + Sync>;

/// Fake Prediction Client
///
/// 结局可以是固定的，也可以按提交序号逐个指定
pub struct FakePredictionClient {
    outcome_fn: OutcomeFn,
    state: Mutex<FakeState>,
}

impl FakePredictionClient {
    /// 所有任务使用同一结局
    pub fn new(outcome: FakeOutcome) -> Self {
        Self::with_outcome_fn(move |_| outcome.clone())
    }

    /// 按提交序号（0 起）指定每个任务的结局
    pub fn with_outcome_fn<F>(outcome_fn: F) -> Self
    where
        F: Fn(usize) -> FakeOutcome + Send + Sync + 'static,
    {
        Self {
            outcome_fn: Box::new(outcome_fn),
            state: Mutex::new(FakeState::default()),
        }
    }

    /// 已提交的任务数
    pub fn submission_count(&self) -> usize {
        self.state.lock().unwrap().submissions.len()
    }

    /// 所有提交的输入（按提交顺序）
    pub fn submissions(&self) -> Vec<GenerationInput> {
        self.state.lock().unwrap().submissions.clone()
    }

    /// 某个任务被查询的次数
    pub fn fetch_count(&self, id: &str) -> u32 {
        self.state
            .lock()
            .unwrap()
            .jobs
            .get(id)
            .map(|j| j.fetches)
            .unwrap_or(0)
    }
}

#[async_trait]
impl PredictionPort for FakePredictionClient {
    async fn submit(&self, input: GenerationInput) -> Result<Job, ProviderError> {
        let mut state = self.state.lock().unwrap();
        let order = state.submissions.len();
        let outcome = (self.outcome_fn)(order);

        if matches!(outcome, FakeOutcome::SubmitError) {
            state.submissions.push(input);
            return Err(ProviderError::ServiceError { status: 500 });
        }

        let id = format!("fake-{}", Uuid::new_v4());
        state.submissions.push(input);
        state.jobs.insert(
            id.clone(),
            FakeJob {
                outcome,
                fetches: 0,
            },
        );

        Ok(Job {
            id,
            status: JobStatus::Starting,
            output: None,
            error: None,
        })
    }

    async fn fetch(&self, id: &str) -> Result<Job, ProviderError> {
        let mut state = self.state.lock().unwrap();
        let job = state
            .jobs
            .get_mut(id)
            .ok_or_else(|| ProviderError::InvalidResponse(format!("Unknown job: {}", id)))?;

        job.fetches += 1;
        let fetches = job.fetches;

        let (status, output, error) = match &job.outcome {
            FakeOutcome::SucceedAfter { processing, output } => {
                if fetches > *processing {
                    (JobStatus::Succeeded, Some(output.clone()), None)
                } else {
                    (JobStatus::Processing, None, None)
                }
            }
            FakeOutcome::FailAfter { processing, error } => {
                if fetches > *processing {
                    (JobStatus::Failed, None, Some(error.clone()))
                } else {
                    (JobStatus::Processing, None, None)
                }
            }
            FakeOutcome::NeverTerminal => (JobStatus::Processing, None, None),
            FakeOutcome::FetchError => {
                return Err(ProviderError::NetworkError("fake fetch error".to_string()));
            }
            // SubmitError 的任务不会进入 jobs 表
            FakeOutcome::SubmitError => unreachable!(),
        };

        Ok(Job {
            id: id.to_string(),
            status,
            output,
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_success() {
        let client = FakePredictionClient::new(FakeOutcome::succeed_after(2, "https://x.webp"));
        let job = client
            .submit(GenerationInput::image("p", "1:1", 80))
            .await
            .unwrap();
        assert_eq!(job.status, JobStatus::Starting);

        assert_eq!(client.fetch(&job.id).await.unwrap().status, JobStatus::Processing);
        assert_eq!(client.fetch(&job.id).await.unwrap().status, JobStatus::Processing);
        let done = client.fetch(&job.id).await.unwrap();
        assert_eq!(done.status, JobStatus::Succeeded);
        assert_eq!(done.output.as_deref(), Some("https://x.webp"));
        assert_eq!(done.id, job.id);
        assert_eq!(client.fetch_count(&job.id), 3);
    }

    #[tokio::test]
    async fn test_unknown_id_is_error() {
        let client = FakePredictionClient::new(FakeOutcome::never_terminal());
        assert!(client.fetch("nope").await.is_err());
    }

    #[tokio::test]
    async fn test_submit_error_still_recorded() {
        let client = FakePredictionClient::new(FakeOutcome::submit_error());
        let result = client.submit(GenerationInput::video("v")).await;
        assert!(result.is_err());
        assert_eq!(client.submission_count(), 1);
    }
}
