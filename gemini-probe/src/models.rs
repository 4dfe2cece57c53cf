//! Models API surface.

use std::sync::Arc;

use gemini_probe_types::content::Content;
use gemini_probe_types::models::{
    GenerateContentRequest, ListModelsConfig, ListModelsResponse, Model,
};
use gemini_probe_types::response::GenerateContentResponse;

use crate::client::ClientInner;
use crate::error::Result;

mod http;

use self::http::{
    build_model_get_url, build_model_method_url, build_models_list_url, ensure_success,
};

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 生成内容。
    pub async fn generate_content(
        &self,
        model: impl Into<String>,
        contents: Vec<Content>,
    ) -> Result<GenerateContentResponse> {
        let model = model.into();
        let url = build_model_method_url(&self.inner, &model, "generateContent");
        let body = GenerateContentRequest { contents };

        let request = self.inner.http.post(url).json(&body);
        let response = ensure_success(self.inner.send(request).await?).await?;
        let result = response.json::<GenerateContentResponse>().await?;
        tracing::debug!(
            model = %model,
            candidates = result.candidates.len(),
            "generateContent completed"
        );
        Ok(result)
    }

    /// 以单条用户文本生成内容。
    pub async fn generate_text(
        &self,
        model: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<GenerateContentResponse> {
        self.generate_content(model, vec![Content::user(prompt)]).await
    }

    /// 列出模型（单页）。
    pub async fn list(&self) -> Result<ListModelsResponse> {
        self.list_with_config(ListModelsConfig::default()).await
    }

    /// 列出模型（带分页配置）。
    pub async fn list_with_config(&self, config: ListModelsConfig) -> Result<ListModelsResponse> {
        let url = build_models_list_url(&self.inner, &config)?;
        let request = self.inner.http.get(url);
        let response = ensure_success(self.inner.send(request).await?).await?;
        Ok(response.json::<ListModelsResponse>().await?)
    }

    /// 列出所有模型（自动翻页）。
    pub async fn all(&self) -> Result<Vec<Model>> {
        self.all_with_config(ListModelsConfig::default()).await
    }

    /// 列出所有模型（带配置，自动翻页）。
    pub async fn all_with_config(&self, mut config: ListModelsConfig) -> Result<Vec<Model>> {
        let mut models = Vec::new();
        loop {
            let response = self.list_with_config(config.clone()).await?;
            if let Some(items) = response.models {
                models.extend(items);
            }
            match response.next_page_token {
                Some(token) if !token.is_empty() => {
                    config.page_token = Some(token);
                }
                _ => break,
            }
        }
        tracing::debug!(count = models.len(), "listed models");
        Ok(models)
    }

    /// 获取单个模型信息。
    pub async fn get(&self, model: impl Into<String>) -> Result<Model> {
        let url = build_model_get_url(&self.inner, &model.into());
        let request = self.inner.http.get(url);
        let response = ensure_success(self.inner.send(request).await?).await?;
        Ok(response.json::<Model>().await?)
    }
}

/// 绑定到单个模型 ID 的句柄。
#[derive(Clone)]
pub struct GenerativeModel {
    models: Models,
    model: String,
}

impl GenerativeModel {
    pub(crate) fn new(models: Models, model: impl Into<String>) -> Self {
        Self {
            models,
            model: model.into(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// 发送一段文本 prompt。
    pub async fn generate_content(
        &self,
        prompt: impl Into<String>,
    ) -> Result<GenerateContentResponse> {
        self.models.generate_text(&self.model, prompt).await
    }
}
