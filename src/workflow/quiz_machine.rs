//! 问卷状态机 - 流程层
//!
//! 核心职责：按固定顺序逐题收集答案
//!
//! 状态流转：
//! NotStarted → InProgress(0) → ... → InProgress(n-1) → Completed
//!
//! - 只能按顺序作答，没有跳题，也没有"上一题"
//! - 当前题未作答时 `advance()` 返回 Blocked，索引不变
//! - `reset()` 回到 NotStarted（放弃问卷或提交成功后）

use tracing::debug;

use crate::error::QuizError;
use crate::models::{AnswerMap, Question, Questionnaire};

/// 问卷状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    /// 正在回答第 N 题（从 0 开始）
    InProgress(usize),
    /// 全部答完，等待提交
    Completed,
}

/// `advance()` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// 当前题还没有答案，或不在答题状态
    Blocked,
    /// 进入下一题
    Moved { index: usize },
    /// 最后一题已确认，可以提交
    Completed,
}

/// 一次答题会话
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    current_index: usize,
    answers: AnswerMap,
}

impl QuizSession {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }
}

/// 问卷状态机
///
/// 持有题目列表和当前会话，所有操作都是同步的
#[derive(Debug, Clone)]
pub struct QuizStateMachine {
    questionnaire: Questionnaire,
    session: Option<QuizSession>,
}

impl QuizStateMachine {
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            session: None,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn state(&self) -> QuizState {
        match &self.session {
            None => QuizState::NotStarted,
            Some(session) if session.current_index >= self.questionnaire.len() => {
                QuizState::Completed
            }
            Some(session) => QuizState::InProgress(session.current_index),
        }
    }

    /// 开始新会话：索引归零，清空答案
    pub fn start(&mut self) {
        debug!("开始问卷，共 {} 道题", self.questionnaire.len());
        self.session = Some(QuizSession::default());
    }

    /// 放弃当前会话
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            debug!("问卷会话已重置");
        }
    }

    /// 当前题目，仅在 InProgress 状态下有效
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        match self.state() {
            QuizState::InProgress(index) => self
                .questionnaire
                .get(index)
                .ok_or_else(|| self.out_of_range()),
            _ => Err(self.out_of_range()),
        }
    }

    /// 记录当前题的答案，可重复选择（覆盖），不会前进
    ///
    /// 调用方保证 `option` 来自当前题的选项
    pub fn record_answer(&mut self, option: impl Into<String>) -> Result<(), QuizError> {
        let question_id = self.current_question()?.id.clone();
        let option = option.into();

        debug!("记录答案: {} = {}", question_id, option);

        if let Some(session) = self.session.as_mut() {
            session.answers.insert(question_id, option);
        }
        Ok(())
    }

    /// 当前题是否已有非空答案
    pub fn can_advance(&self) -> bool {
        match (self.current_question(), &self.session) {
            (Ok(question), Some(session)) => session
                .answers
                .get(&question.id)
                .is_some_and(|option| !option.is_empty()),
            _ => false,
        }
    }

    /// 确认当前题并前进
    pub fn advance(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }

        let total = self.questionnaire.len();
        let Some(session) = self.session.as_mut() else {
            return Advance::Blocked;
        };

        session.current_index += 1;

        if session.current_index == total {
            debug!("全部 {} 道题已回答", total);
            Advance::Completed
        } else {
            Advance::Moved {
                index: session.current_index,
            }
        }
    }

    /// 完整答案的副本，仅在 Completed 状态下有效
    pub fn snapshot(&self) -> Result<AnswerMap, QuizError> {
        let total = self.questionnaire.len();
        match (&self.session, self.state()) {
            (Some(session), QuizState::Completed) => Ok(session.answers.clone()),
            (session, _) => Err(QuizError::NotCompleted {
                answered: session.as_ref().map_or(0, |s| s.current_index),
                len: total,
            }),
        }
    }

    /// 当前进度百分比：(index + 1) / len * 100
    pub fn progress_percent(&self) -> Option<u8> {
        match self.state() {
            QuizState::InProgress(index) => {
                let total = self.questionnaire.len();
                Some(((index + 1) * 100 / total) as u8)
            }
            _ => None,
        }
    }

    fn out_of_range(&self) -> QuizError {
        QuizError::OutOfRange {
            index: self.session.as_ref().map(|s| s.current_index),
            len: self.questionnaire.len(),
        }
    }
}
