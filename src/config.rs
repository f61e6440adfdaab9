/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 菜谱服务地址（不含接口路径）
    pub recipe_api_base_url: String,
    /// 自定义问卷 TOML 文件，未设置时使用内置问卷
    pub questions_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipe_api_base_url: "http://127.0.0.1:8000".to_string(),
            questions_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            recipe_api_base_url: std::env::var("RECIPE_API_BASE_URL").unwrap_or(default.recipe_api_base_url),
            questions_file: std::env::var("QUESTIONS_FILE").ok().filter(|v| !v.trim().is_empty()).or(default.questions_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
