use crate::error::{AppResult, FileError};
use crate::models::question::Questionnaire;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载问卷并校验
pub async fn load_questionnaire(toml_file_path: &Path) -> AppResult<Questionnaire> {
    let path = toml_file_path.display().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path.clone(),
            source,
        })?;

    let questionnaire = parse_questionnaire(&content, &path)?;

    tracing::info!(
        "成功加载问卷 {}: {} 道题",
        path,
        questionnaire.len()
    );

    Ok(questionnaire)
}

/// 解析 TOML 文本
///
/// ```toml
/// [[questions]]
/// id = "cooking_time"
/// prompt = "Время готовки"
/// options = ["Быстро", "Средне", "Долго"]
/// presentation = "dropdown" # 可选，默认 buttons
/// ```
pub fn parse_questionnaire(content: &str, path: &str) -> AppResult<Questionnaire> {
    let questionnaire: Questionnaire =
        toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
            path: path.to_string(),
            source,
        })?;

    questionnaire.validate()?;

    Ok(questionnaire)
}
