use std::fmt;

use crate::client::Client;
use crate::probe::ProbeError;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_PROBE_MODEL";
pub const PROMPT_VAR: &str = "GEMINI_PROBE_PROMPT";
pub const TIMEOUT_VAR: &str = "GEMINI_PROBE_TIMEOUT_SECS";
pub const BASE_URL_VARS: [&str; 2] = ["GENAI_BASE_URL", "GEMINI_BASE_URL"];
pub const API_VERSION_VAR: &str = "GENAI_API_VERSION";

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_PROMPT: &str = "Hello, Gemini!";

/// API 密钥。`Debug` 输出不包含明文。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// 空白字符串视为缺失。
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// 运行配置，全部来自环境变量。
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub api_key: ApiKey,
    pub model: String,
    pub prompt: String,
    pub base_url: Option<String>,
    pub api_version: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ProbeConfig {
    /// 使用默认模型与 prompt。
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            base_url: None,
            api_version: None,
            timeout_secs: None,
        }
    }

    /// 从进程环境读取配置。
    ///
    /// # Errors
    /// `GEMINI_API_KEY` 缺失或为空时返回 [`ProbeError::MissingApiKey`]；
    /// 超时设置无法解析或为 0 时返回 [`ProbeError::InvalidSetting`]。
    pub fn from_env() -> Result<Self, ProbeError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过查找函数读取配置；空值与未设置等价。
    ///
    /// # Errors
    /// 同 [`ProbeConfig::from_env`]。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ProbeError> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = lookup(API_KEY_VAR)
            .and_then(ApiKey::new)
            .ok_or(ProbeError::MissingApiKey)?;
        let mut config = Self::new(api_key);

        if let Some(model) = non_empty(MODEL_VAR) {
            config.model = model.trim().to_string();
        }
        if let Some(prompt) = non_empty(PROMPT_VAR) {
            config.prompt = prompt;
        }
        config.base_url = BASE_URL_VARS.iter().find_map(|name| non_empty(*name));
        config.api_version = non_empty(API_VERSION_VAR);
        // 0 秒会让每个请求立即超时。
        config.timeout_secs = non_empty(TIMEOUT_VAR)
            .map(|value| match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(secs),
                _ => Err(ProbeError::InvalidSetting {
                    name: TIMEOUT_VAR,
                    value,
                }),
            })
            .transpose()?;

        Ok(config)
    }

    /// 构建客户端；整个运行期间只调用一次。
    ///
    /// # Errors
    /// 当客户端配置无效时返回错误。
    pub fn build_client(&self) -> crate::Result<Client> {
        let mut builder = Client::builder().api_key(self.api_key.expose());
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(api_version) = &self.api_version {
            builder = builder.api_version(api_version);
        }
        if let Some(timeout) = self.timeout_secs {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}
