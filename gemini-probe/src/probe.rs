//! The probe run: list the models that can generate content, then send one
//! prompt to one model.
//!
//! Only two outcomes are fatal: a missing API key and a failed model listing.
//! A failed generation call is reported and the run still succeeds.

use std::io::Write;
use std::process::ExitCode;

use gemini_probe_types::models::Model;
use gemini_probe_types::response::GenerateContentResponse;
use thiserror::Error;

use crate::error::{Error, Result};
use crate::service::ModelService;

mod config;

pub use config::{
    ApiKey, ProbeConfig, API_KEY_VAR, API_VERSION_VAR, BASE_URL_VARS, DEFAULT_MODEL,
    DEFAULT_PROMPT, MODEL_VAR, PROMPT_VAR, TIMEOUT_VAR,
};

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("GEMINI_API_KEY environment variable not found.")]
    MissingApiKey,

    #[error("Invalid value for {name}: {value:?}")]
    InvalidSetting { name: &'static str, value: String },

    #[error("{source}")]
    Client {
        #[from]
        source: Error,
    },
}

/// 单次生成调用的结果。失败不会中断运行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Text(String),
    Failed(String),
}

impl GenerationOutcome {
    #[must_use]
    pub fn from_result(result: Result<GenerateContentResponse>) -> Self {
        match result {
            Ok(response) => match response.text() {
                Some(text) => Self::Text(text),
                None => Self::Failed(missing_text_reason(&response)),
            },
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

fn missing_text_reason(response: &GenerateContentResponse) -> String {
    if let Some(reason) = response.block_reason() {
        let detail = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason_message.as_deref());
        return match detail {
            Some(detail) => format!("prompt blocked ({reason:?}): {detail}"),
            None => format!("prompt blocked ({reason:?})"),
        };
    }
    match response.finish_reason() {
        Some(reason) => format!("response contained no text (finish reason: {reason:?})"),
        None => "response contained no text".to_string(),
    }
}

/// 进程退出状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Success,
    Failure,
}

impl From<ProbeStatus> for ExitCode {
    fn from(status: ProbeStatus) -> Self {
        match status {
            ProbeStatus::Success => Self::SUCCESS,
            ProbeStatus::Failure => Self::FAILURE,
        }
    }
}

/// 只保留支持 `generateContent` 的模型，顺序不变。
#[must_use]
pub fn generating_models(models: &[Model]) -> Vec<&Model> {
    models
        .iter()
        .filter(|model| model.supports_generate_content())
        .collect()
}

/// 发送唯一一次生成请求。
pub async fn generate<S>(service: &S, model: &str, prompt: &str) -> GenerationOutcome
where
    S: ModelService + ?Sized,
{
    let outcome = GenerationOutcome::from_result(service.generate_content(model, prompt).await);
    if let GenerationOutcome::Failed(message) = &outcome {
        tracing::warn!(model, error = %message, "generation failed");
    }
    outcome
}

/// 列出模型并生成一次内容，结果写入 `out`。
///
/// # Errors
/// 模型列表请求失败或写出失败时返回错误；生成失败不算错误。
pub async fn run<S, W>(service: &S, config: &ProbeConfig, out: &mut W) -> Result<GenerationOutcome>
where
    S: ModelService + ?Sized,
    W: Write,
{
    writeln!(out, "Listing available models:")?;
    let models = service.list_models().await?;
    let capable = generating_models(&models);
    tracing::info!(
        total = models.len(),
        capable = capable.len(),
        "model listing complete"
    );
    for name in capable.iter().filter_map(|model| model.name.as_deref()) {
        writeln!(out, "{name}")?;
    }

    writeln!(
        out,
        "\nAttempting to generate content with '{}'...",
        config.model
    )?;
    let outcome = generate(service, &config.model, &config.prompt).await;
    match &outcome {
        GenerationOutcome::Text(text) => writeln!(out, "\nResponse from Gemini:\n{text}")?,
        GenerationOutcome::Failed(message) => {
            writeln!(out, "Error with {}: {message}", config.model)?;
        }
    }
    Ok(outcome)
}

/// 完整运行：校验配置、构建一次客户端、执行 [`run`]。
///
/// 致命错误以 `Error: ...` 写入 `out` 并返回 [`ProbeStatus::Failure`]。
pub async fn execute<S, F, W>(
    config: std::result::Result<ProbeConfig, ProbeError>,
    connect: F,
    out: &mut W,
) -> ProbeStatus
where
    S: ModelService,
    F: FnOnce(&ProbeConfig) -> Result<S>,
    W: Write,
{
    match try_execute(config, connect, out).await {
        Ok(_) => ProbeStatus::Success,
        Err(err) => {
            tracing::error!(error = %err, "probe failed");
            // Nothing left to report to if stdout itself is gone.
            let _ = writeln!(out, "Error: {err}");
            ProbeStatus::Failure
        }
    }
}

async fn try_execute<S, F, W>(
    config: std::result::Result<ProbeConfig, ProbeError>,
    connect: F,
    out: &mut W,
) -> std::result::Result<GenerationOutcome, ProbeError>
where
    S: ModelService,
    F: FnOnce(&ProbeConfig) -> Result<S>,
    W: Write,
{
    let config = config?;
    let service = connect(&config)?;
    Ok(run(&service, &config, out).await?)
}
