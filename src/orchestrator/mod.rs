//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 主界面循环：启动问卷、统计会话结果、退出。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (主界面，多次会话)
//!     ↓
//! workflow::QuizFlow (单次会话：作答 → 提交 → 显示)
//!     ↓
//! workflow::QuizStateMachine / clients::RecipeClient
//!     ↓
//! services (能力层：renderer / input)
//! ```

pub mod app;

pub use app::{App, SessionStats};
