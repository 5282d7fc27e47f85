//! Prediction Adapters - 预测服务适配器

mod fake_prediction_client;
mod replicate_client;

pub use fake_prediction_client::{FakeOutcome, FakePredictionClient};
pub use replicate_client::{ReplicateClient, ReplicateClientConfig};
