//! Generation Command Handlers - 生成命令处理器
//!
//! 组合式流程的编排逻辑。验证错误在任何外部调用之前同步返回。

use std::sync::Arc;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::application::batch::{BatchConfig, BatchRunner};
use crate::application::commands::generate_commands::*;
use crate::application::error::ApplicationError;
use crate::application::poll::{JobPoller, PollConfig};
use crate::application::ports::{GenerationInput, PredictionPort};
use crate::domain::prompt::{panel_prompt, valentine_prompt};
use crate::domain::script::{ad_script, ad_video_prompt, tiktok_script, tiktok_video_prompt};
use crate::domain::storyboard::{Selection, Storyboard, FRAMES_PER_SCENE};

/// 图像生成参数（分镜）
const PANEL_ASPECT_RATIO: &str = "1:1";
const PANEL_OUTPUT_QUALITY: u8 = 80;

/// 图像生成参数（场景卷）
const SCENE_ASPECT_RATIO: &str = "16:9";
const SCENE_OUTPUT_QUALITY: u8 = 90;

/// GenerateStoryboard Handler - 批量生成分镜图像
pub struct GenerateStoryboardHandler {
    runner: BatchRunner,
    image_poll: PollConfig,
}

impl GenerateStoryboardHandler {
    pub fn new(port: Arc<dyn PredictionPort>, batch: BatchConfig, image_poll: PollConfig) -> Self {
        Self {
            runner: BatchRunner::new(port, batch),
            image_poll,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateStoryboardCommand,
        cancel: &CancellationToken,
    ) -> Result<GenerateStoryboardResponse, ApplicationError> {
        let board = Storyboard::from_texts(&cmd.panels);
        let texts = board.effective_texts();

        tracing::info!(panels = texts.len(), "Generating storyboard images");

        let inputs: Vec<GenerationInput> = texts
            .iter()
            .map(|scene| {
                GenerationInput::image(
                    panel_prompt(scene, cmd.character.as_deref(), cmd.brand.as_deref()),
                    PANEL_ASPECT_RATIO,
                    PANEL_OUTPUT_QUALITY,
                )
            })
            .collect();

        let panels = self.runner.run(inputs, &self.image_poll, cancel).await;

        Ok(GenerateStoryboardResponse { panels })
    }
}

/// GenerateReel Handler - 逐场景生成记忆碎片帧
///
/// 场景之间顺序执行，场景内 3 帧并发
pub struct GenerateReelHandler {
    runner: BatchRunner,
    image_poll: PollConfig,
}

impl GenerateReelHandler {
    pub fn new(port: Arc<dyn PredictionPort>, image_poll: PollConfig) -> Self {
        Self {
            // 组大小即场景帧数，保证一个场景完整结束后才进入下一个
            runner: BatchRunner::new(
                port,
                BatchConfig {
                    group_size: FRAMES_PER_SCENE,
                },
            ),
            image_poll,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateReelCommand,
        cancel: &CancellationToken,
    ) -> Result<GenerateReelResponse, ApplicationError> {
        if cmd.scenes.is_empty() {
            return Err(ApplicationError::validation("Scenes are required"));
        }

        let mut scenes = Vec::with_capacity(cmd.scenes.len());

        for (index, description) in cmd.scenes.iter().enumerate() {
            tracing::info!(scene = index + 1, total = cmd.scenes.len(), "Generating scene");

            let prompt = valentine_prompt(description);
            let inputs: Vec<GenerationInput> = (0..FRAMES_PER_SCENE)
                .map(|_| {
                    GenerationInput::image(prompt.clone(), SCENE_ASPECT_RATIO, SCENE_OUTPUT_QUALITY)
                })
                .collect();

            let images = self.runner.run(inputs, &self.image_poll, cancel).await;

            scenes.push(SceneResult {
                description: description.clone(),
                images,
            });
        }

        Ok(GenerateReelResponse { scenes })
    }
}

/// GenerateAd Handler - 完整广告流程
///
/// 分镜图像 → 旁白脚本 → 视频，三步顺序执行
pub struct GenerateAdHandler {
    port: Arc<dyn PredictionPort>,
    storyboard: GenerateStoryboardHandler,
    poller: JobPoller,
    video_poll: PollConfig,
}

impl GenerateAdHandler {
    pub fn new(
        port: Arc<dyn PredictionPort>,
        batch: BatchConfig,
        image_poll: PollConfig,
        video_poll: PollConfig,
    ) -> Self {
        Self {
            storyboard: GenerateStoryboardHandler::new(port.clone(), batch, image_poll),
            poller: JobPoller::new(port.clone()),
            port,
            video_poll,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateAdCommand,
        cancel: &CancellationToken,
    ) -> Result<GenerateAdResponse, ApplicationError> {
        validate_selection(&cmd.brand, &cmd.character, &cmd.slogan)?;

        let board = Storyboard::from_texts(&cmd.panels);
        let texts = board.effective_texts();

        let panels = self
            .storyboard
            .handle(
                GenerateStoryboardCommand {
                    character: Some(cmd.character.clone()),
                    brand: Some(cmd.brand.clone()),
                    panels: cmd.panels.clone(),
                },
                cancel,
            )
            .await?
            .panels;

        let script = ad_script(&cmd.character, &cmd.brand, &cmd.slogan);

        let video_prompt = ad_video_prompt(&cmd.character, &cmd.brand, &cmd.slogan, &texts);
        let video = submit_and_poll_video(
            &self.port,
            &self.poller,
            &self.video_poll,
            video_prompt,
            cancel,
        )
        .await;

        Ok(GenerateAdResponse {
            panels,
            script,
            video,
            generated_at: Utc::now(),
        })
    }
}

/// GenerateTiktok Handler - TikTok 反应视频流程
pub struct GenerateTiktokHandler {
    port: Arc<dyn PredictionPort>,
    poller: JobPoller,
    video_poll: PollConfig,
}

impl GenerateTiktokHandler {
    pub fn new(port: Arc<dyn PredictionPort>, video_poll: PollConfig) -> Self {
        Self {
            poller: JobPoller::new(port.clone()),
            port,
            video_poll,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateTiktokCommand,
        cancel: &CancellationToken,
    ) -> Result<GenerateTiktokResponse, ApplicationError> {
        validate_selection(&cmd.brand, &cmd.character, &cmd.slogan)?;

        let board = Storyboard::from_texts(&cmd.panels);
        let texts = board.effective_texts();

        let script = tiktok_script(&cmd.character, &cmd.brand, &cmd.slogan, &texts);
        let video_prompt = tiktok_video_prompt(&cmd.character, &cmd.brand, &texts);

        let video = submit_and_poll_video(
            &self.port,
            &self.poller,
            &self.video_poll,
            video_prompt,
            cancel,
        )
        .await;

        Ok(GenerateTiktokResponse {
            script,
            video,
            generated_at: Utc::now(),
        })
    }
}

/// 验证品牌/角色/口号齐备
fn validate_selection(brand: &str, character: &str, slogan: &str) -> Result<(), ApplicationError> {
    let selection = Selection {
        brand: Some(brand.to_string()),
        character: Some(character.to_string()),
        slogan: Some(slogan.to_string()),
    };
    if !selection.can_generate() {
        return Err(ApplicationError::validation(
            "Brand, character and slogan are required",
        ));
    }
    Ok(())
}

/// 提交视频任务并轮询至终态。任何失败都压平为 None
async fn submit_and_poll_video(
    port: &Arc<dyn PredictionPort>,
    poller: &JobPoller,
    video_poll: &PollConfig,
    prompt: String,
    cancel: &CancellationToken,
) -> Option<String> {
    let job = match port.submit(GenerationInput::video(prompt)).await {
        Ok(job) => job,
        Err(e) => {
            tracing::error!(error = %e, "Video submission failed");
            return None;
        }
    };
    tracing::info!(job_id = %job.id, "Video job submitted");
    poller.poll(&job.id, video_poll, cancel).await.into_output()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{FakeOutcome, FakePredictionClient};
    use std::time::Duration;

    fn fast_poll() -> PollConfig {
        PollConfig::new(Duration::from_millis(1), 30)
    }

    fn nine_panels() -> Vec<String> {
        (1..=9).map(|i| format!("panel {}", i)).collect()
    }

    #[tokio::test]
    async fn test_storyboard_returns_nine_slots() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::succeed_after(
            1,
            "https://example.com/p.webp",
        )));
        let handler = GenerateStoryboardHandler::new(
            client.clone(),
            BatchConfig::default(),
            fast_poll(),
        );

        let response = handler
            .handle(
                GenerateStoryboardCommand {
                    character: Some("Batman".to_string()),
                    brand: Some("Pepsi".to_string()),
                    panels: nine_panels(),
                },
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(response.panels.len(), 9);
        assert!(response.panels.iter().all(|p| p.is_some()));
        assert_eq!(client.submission_count(), 9);

        // 提示词包含角色与品牌
        let submissions = client.submissions();
        assert!(submissions[0].prompt().contains("Character: Batman."));
        assert!(submissions[0].prompt().contains("Brand: Pepsi visible in scene."));
    }

    #[tokio::test]
    async fn test_storyboard_blank_panels_use_placeholders() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::succeed_after(
            1,
            "https://example.com/p.webp",
        )));
        let handler =
            GenerateStoryboardHandler::new(client.clone(), BatchConfig::default(), fast_poll());

        handler
            .handle(
                GenerateStoryboardCommand {
                    character: None,
                    brand: None,
                    panels: Vec::new(),
                },
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let submissions = client.submissions();
        assert_eq!(submissions.len(), 9);
        assert!(submissions[0]
            .prompt()
            .starts_with("WIDE SHOT: Industrial warehouse."));
    }

    #[tokio::test]
    async fn test_reel_three_frames_per_scene() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::succeed_after(
            1,
            "https://example.com/f.webp",
        )));
        let handler = GenerateReelHandler::new(client.clone(), fast_poll());

        let response = handler
            .handle(
                GenerateReelCommand {
                    scenes: vec![
                        "parked car at night".to_string(),
                        "gas station lot".to_string(),
                    ],
                },
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(response.scenes.len(), 2);
        for scene in &response.scenes {
            assert_eq!(scene.images.len(), 3);
            assert!(scene.images.iter().all(|i| i.is_some()));
        }
        assert_eq!(client.submission_count(), 6);
    }

    #[tokio::test]
    async fn test_reel_empty_scenes_is_validation_error() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::never_terminal()));
        let handler = GenerateReelHandler::new(client.clone(), fast_poll());

        let result = handler
            .handle(
                GenerateReelCommand { scenes: Vec::new() },
                &CancellationToken::new(),
            )
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::ValidationError(_))
        ));
        // 验证错误之前不发起任何外部调用
        assert_eq!(client.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_ad_full_flow() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::succeed_after(
            1,
            "https://example.com/out",
        )));
        let handler = GenerateAdHandler::new(
            client.clone(),
            BatchConfig::default(),
            fast_poll(),
            fast_poll(),
        );

        let response = handler
            .handle(
                GenerateAdCommand {
                    brand: "Doritos".to_string(),
                    character: "The Rock".to_string(),
                    slogan: "crunch different".to_string(),
                    panels: nine_panels(),
                },
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(response.panels.len(), 9);
        assert!(response.script.contains("Doritos changed my life."));
        assert_eq!(response.video.as_deref(), Some("https://example.com/out"));
        // 9 张图 + 1 条视频
        assert_eq!(client.submission_count(), 10);

        // 视频提示词由分镜文案连接而成
        let submissions = client.submissions();
        let video_prompt = submissions.last().unwrap().prompt();
        assert!(video_prompt.contains("panel 1 → panel 2"));
        assert!(video_prompt.contains("Slogan: \"crunch different\""));
    }

    #[tokio::test]
    async fn test_ad_missing_selection_makes_no_calls() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::never_terminal()));
        let handler = GenerateAdHandler::new(
            client.clone(),
            BatchConfig::default(),
            fast_poll(),
            fast_poll(),
        );

        let result = handler
            .handle(
                GenerateAdCommand {
                    brand: "Doritos".to_string(),
                    character: "".to_string(),
                    slogan: "crunch".to_string(),
                    panels: Vec::new(),
                },
                &CancellationToken::new(),
            )
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert_eq!(client.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_ad_video_failure_degrades_to_none() {
        // 前 9 个任务（图像）成功，第 10 个（视频）失败
        let client = Arc::new(FakePredictionClient::with_outcome_fn(|n| {
            if n < 9 {
                FakeOutcome::succeed_after(1, "https://example.com/p.webp")
            } else {
                FakeOutcome::fail_after(1, "video model crashed")
            }
        }));
        let handler = GenerateAdHandler::new(
            client.clone(),
            BatchConfig::default(),
            fast_poll(),
            fast_poll(),
        );

        let response = handler
            .handle(
                GenerateAdCommand {
                    brand: "Pepsi".to_string(),
                    character: "Shrek".to_string(),
                    slogan: "swamp sip".to_string(),
                    panels: nine_panels(),
                },
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(response.panels.iter().all(|p| p.is_some()));
        assert!(response.video.is_none());
    }

    #[tokio::test]
    async fn test_tiktok_flow() {
        let client = Arc::new(FakePredictionClient::new(FakeOutcome::succeed_after(
            1,
            "https://example.com/tiktok.mp4",
        )));
        let handler = GenerateTiktokHandler::new(client.clone(), fast_poll());

        let response = handler
            .handle(
                GenerateTiktokCommand {
                    brand: "Nike".to_string(),
                    character: "Groot".to_string(),
                    slogan: "I am shoes".to_string(),
                    panels: nine_panels(),
                },
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(response.script.contains("So it starts with panel 1."));
        assert_eq!(
            response.video.as_deref(),
            Some("https://example.com/tiktok.mp4")
        );
        // 只提交一条视频任务
        assert_eq!(client.submission_count(), 1);

        let submissions = client.submissions();
        assert!(submissions[0]
            .prompt()
            .starts_with("Vertical 9:16 TikTok reaction video format."));
    }
}
