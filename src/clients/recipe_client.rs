/// 菜谱生成 API 客户端
///
/// 把完整的答案集合 POST 到 `/api/generate-recipe`，解析返回的菜谱
use crate::config::Config;
use crate::error::SubmitError;
use crate::models::{AnswerMap, RecipeResult};
use tracing::{debug, info, warn};

/// 菜谱生成接口路径
pub const GENERATE_RECIPE_PATH: &str = "/api/generate-recipe";

/// 菜谱生成客户端
///
/// 每次 `submit` 只发一次请求，不重试，不设置超时
pub struct RecipeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RecipeClient {
    /// 创建新的菜谱客户端
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(&config.recipe_api_base_url)
    }

    /// 使用指定的服务地址创建
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), GENERATE_RECIPE_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 提交答案
    ///
    /// # 参数
    /// - `answers`: 完整的答案集合，作为唯一的请求体
    ///
    /// # 返回
    /// - 2xx：解析后的菜谱
    /// - 非 2xx：`ServerRejected`，忽略响应体
    /// - 网络错误或响应体无法解析：`TransportFailure`
    pub async fn submit(&self, answers: &AnswerMap) -> Result<RecipeResult, SubmitError> {
        if let Ok(payload) = serde_json::to_string(answers) {
            debug!("提交答案 Payload: {}", payload);
        }

        let response = self
            .http
            .post(self.endpoint.as_str())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(answers)
            .send()
            .await
            .map_err(|e| {
                warn!("菜谱请求发送失败: {}", e);
                SubmitError::transport(&self.endpoint, e)
            })?;

        let status = response.status();
        info!("菜谱接口返回状态: {}", status);

        if !status.is_success() {
            return Err(SubmitError::ServerRejected {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SubmitError::transport(&self.endpoint, e))?;

        decode_recipe(&self.endpoint, &body)
    }
}

/// 解析 2xx 响应体，无法解析视为传输失败
pub fn decode_recipe(endpoint: &str, body: &[u8]) -> Result<RecipeResult, SubmitError> {
    let recipe: RecipeResult = serde_json::from_slice(body).map_err(|e| {
        warn!("菜谱响应解析失败: {}", e);
        SubmitError::transport(endpoint, e)
    })?;

    debug!("收到菜谱: {}", recipe.title());
    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "http://localhost/api/generate-recipe";

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = RecipeClient::with_base_url("http://127.0.0.1:8000/");
        assert_eq!(client.endpoint(), "http://127.0.0.1:8000/api/generate-recipe");
    }

    #[test]
    fn test_decode_success() {
        let body = r#"{"recipe_name":"Суп","ingredients":[{"quantity":"2","unit":"шт","ingredient_name":"картофель"}]}"#;
        let recipe = decode_recipe(ENDPOINT, body.as_bytes()).unwrap();

        assert_eq!(recipe.recipe_name.as_deref(), Some("Суп"));
        let ingredients = recipe.ingredients();
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].quantity.as_deref(), Some("2"));
        assert_eq!(ingredients[0].unit.as_deref(), Some("шт"));
        assert_eq!(ingredients[0].ingredient_name.as_deref(), Some("картофель"));
    }

    #[test]
    fn test_decode_malformed_body_is_transport_failure() {
        let result = decode_recipe(ENDPOINT, b"<html>oops</html>");
        assert!(matches!(result, Err(SubmitError::TransportFailure { .. })));
    }
}
