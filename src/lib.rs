//! # Recipe Quiz
//!
//! 通过四个问题了解用户偏好，然后向菜谱服务请求生成菜谱的终端客户端
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、问卷、答案集合、菜谱
//! - `models/loaders` - 从 TOML 加载自定义问卷
//!
//! ### ② 能力层（Services / Clients）
//! - `clients::RecipeClient` - 调用 `/api/generate-recipe`
//! - `services::renderer` - 渲染协作者（终端实现）
//! - `services::input` - 按行读取用户输入
//!
//! ### ③ 流程层（Workflow）
//! - `QuizStateMachine` - 逐题作答的状态机
//! - `QuizFlow` - 一次完整会话（作答 → 提交 → 显示）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator::App` - 主界面循环
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::RecipeClient;
pub use config::Config;
pub use error::{AppError, AppResult, QuizError, SubmitError};
pub use models::{AnswerMap, Question, Questionnaire, RecipeResult};
pub use orchestrator::App;
pub use workflow::{Advance, QuizFlow, QuizState, QuizStateMachine, SessionOutcome};
