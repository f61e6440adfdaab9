use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 问卷状态机错误
    #[error("问卷错误: {0}")]
    Quiz(#[from] QuizError),
    /// 提交错误
    #[error("提交错误: {0}")]
    Submit(#[from] SubmitError),
    /// 问卷配置错误
    #[error("问卷配置错误: {0}")]
    Questionnaire(#[from] QuestionnaireError),
    /// 文件错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
}

/// 问卷状态机错误
///
/// 这些都是调用顺序错误（程序缺陷），正常的界面流程不会触发
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// 不在答题状态时访问当前题目
    #[error("当前不在答题状态 (索引: {index:?}, 题目总数: {len})")]
    OutOfRange { index: Option<usize>, len: usize },
    /// 问卷尚未完成，不能导出答案
    #[error("问卷尚未完成，已回答 {answered}/{len}")]
    NotCompleted { answered: usize, len: usize },
}

/// 提交菜谱请求的错误
#[derive(Debug, Error)]
pub enum SubmitError {
    /// 网络不可达、超时、响应体无法解析等
    #[error("传输失败 ({endpoint}): {source}")]
    TransportFailure {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务端返回非 2xx 状态码
    #[error("服务端拒绝请求 ({endpoint}): HTTP {status}")]
    ServerRejected { endpoint: String, status: u16 },
}

impl SubmitError {
    /// 创建传输失败错误
    pub fn transport(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SubmitError::TransportFailure {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// 是否为服务端拒绝
    pub fn is_server_rejected(&self) -> bool {
        matches!(self, SubmitError::ServerRejected { .. })
    }
}

/// 问卷定义校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("问卷中没有任何题目")]
    Empty,
    #[error("题目 ID 为空 (第 {index} 题)")]
    BlankId { index: usize },
    #[error("题目 ID 重复: {id}")]
    DuplicateId { id: String },
    #[error("题目 {id} 没有选项")]
    NoOptions { id: String },
    #[error("题目 {id} 含有空白选项")]
    BlankOption { id: String },
    #[error("题目 {id} 的选项重复: {option}")]
    DuplicateOption { id: String, option: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
