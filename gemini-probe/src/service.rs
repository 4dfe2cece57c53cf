//! The two Gemini calls the probe depends on.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use gemini_probe_types::models::Model;
use gemini_probe_types::response::GenerateContentResponse;

use crate::client::Client;
use crate::error::Result;

/// 模型服务。`Client` 是线上实现；测试中可替换为桩实现。
pub trait ModelService: Send + Sync {
    /// 列出全部模型，保持服务端返回顺序。
    fn list_models(&self) -> BoxFuture<'_, Result<Vec<Model>>>;

    /// 向指定模型发送一段文本 prompt。
    fn generate_content<'a>(
        &'a self,
        model: &'a str,
        prompt: &'a str,
    ) -> BoxFuture<'a, Result<GenerateContentResponse>>;
}

impl ModelService for Client {
    fn list_models(&self) -> BoxFuture<'_, Result<Vec<Model>>> {
        async move { self.models().all().await }.boxed()
    }

    fn generate_content<'a>(
        &'a self,
        model: &'a str,
        prompt: &'a str,
    ) -> BoxFuture<'a, Result<GenerateContentResponse>> {
        async move { self.generative_model(model).generate_content(prompt).await }.boxed()
    }
}
