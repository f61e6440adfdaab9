//! 问卷流程 - 流程层
//!
//! 核心职责：把用户输入翻译成状态机调用，把状态变化交给渲染器
//!
//! 流程顺序：
//! 1. 逐题显示 → 选择 → Далее
//! 2. 全部答完 → 提交
//! 3. 成功显示菜谱；失败提示并允许用同一份答案重试

use anyhow::Result;
use tokio::io::AsyncRead;
use tracing::{error, info, warn};

use crate::clients::RecipeClient;
use crate::models::RecipeResult;
use crate::services::input::{LineInput, QuizCommand, RetryCommand};
use crate::services::renderer::Renderer;
use crate::workflow::quiz_machine::{Advance, QuizState, QuizStateMachine};

/// 一次会话的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// 拿到并显示了菜谱
    Recipe(RecipeResult),
    /// 用户放弃，回到主界面
    Abandoned,
    /// 输入已结束
    InputClosed,
}

/// 问卷流程
///
/// - 不持有问卷状态，状态由调用方传入
/// - 提交只发生在状态机进入 Completed 之后
pub struct QuizFlow {
    client: RecipeClient,
}

impl QuizFlow {
    pub fn new(client: RecipeClient) -> Self {
        Self { client }
    }

    /// 从 start() 开始跑完一次会话
    pub async fn run<R, I>(
        &self,
        machine: &mut QuizStateMachine,
        renderer: &mut R,
        input: &mut LineInput<I>,
    ) -> Result<SessionOutcome>
    where
        R: Renderer,
        I: AsyncRead + Unpin,
    {
        machine.start();

        if !self.answer_questions(machine, renderer, input).await? {
            let outcome = if machine.state() == QuizState::NotStarted {
                SessionOutcome::Abandoned
            } else {
                SessionOutcome::InputClosed
            };
            return Ok(outcome);
        }

        self.submit(machine, renderer, input).await
    }

    /// 逐题作答，全部完成返回 true
    async fn answer_questions<R, I>(
        &self,
        machine: &mut QuizStateMachine,
        renderer: &mut R,
        input: &mut LineInput<I>,
    ) -> Result<bool>
    where
        R: Renderer,
        I: AsyncRead + Unpin,
    {
        self.show_current(machine, renderer)?;

        while let QuizState::InProgress(_) = machine.state() {
            let Some(line) = input.next_line().await? else {
                return Ok(false);
            };

            match QuizCommand::parse(&line) {
                QuizCommand::Select(number) => {
                    let question = machine.current_question()?.clone();
                    match question.option_by_number(number) {
                        Some(option) => {
                            machine.record_answer(option)?;
                            renderer.selection_confirmed(&question, option)?;
                        }
                        None => renderer.invalid_input(&line)?,
                    }
                }
                QuizCommand::Next => match machine.advance() {
                    Advance::Blocked => renderer.advance_blocked()?,
                    Advance::Moved { .. } => self.show_current(machine, renderer)?,
                    Advance::Completed => {}
                },
                QuizCommand::Abandon => {
                    info!("用户放弃问卷");
                    machine.reset();
                    return Ok(false);
                }
                QuizCommand::Invalid(raw) => renderer.invalid_input(&raw)?,
            }
        }

        Ok(machine.state() == QuizState::Completed)
    }

    /// 提交答案，失败时由用户决定重试还是返回
    async fn submit<R, I>(
        &self,
        machine: &mut QuizStateMachine,
        renderer: &mut R,
        input: &mut LineInput<I>,
    ) -> Result<SessionOutcome>
    where
        R: Renderer,
        I: AsyncRead + Unpin,
    {
        loop {
            let answers = machine.snapshot()?;
            renderer.submitting()?;
            info!("📤 正在提交 {} 个答案到 {}", answers.len(), self.client.endpoint());

            match self.client.submit(&answers).await {
                Ok(recipe) => {
                    info!("✓ 菜谱生成成功: {}", recipe.title());
                    renderer.recipe(&recipe)?;
                    machine.reset();
                    return Ok(SessionOutcome::Recipe(recipe));
                }
                Err(e) => {
                    // 会话保持不变，重试时无需重新作答
                    error!("❌ 菜谱生成失败: {}", e);
                    renderer.submit_failed(&e)?;
                }
            }

            loop {
                let Some(line) = input.next_line().await? else {
                    return Ok(SessionOutcome::InputClosed);
                };
                match RetryCommand::parse(&line) {
                    RetryCommand::Retry => break,
                    RetryCommand::BackToMenu => {
                        warn!("提交失败后返回主界面");
                        machine.reset();
                        return Ok(SessionOutcome::Abandoned);
                    }
                    RetryCommand::Invalid(raw) => renderer.invalid_input(&raw)?,
                }
            }
        }
    }

    fn show_current<R: Renderer>(&self, machine: &QuizStateMachine, renderer: &mut R) -> Result<()> {
        let QuizState::InProgress(index) = machine.state() else {
            return Ok(());
        };
        let question = machine.current_question()?;
        let progress = machine.progress_percent().unwrap_or(0);
        renderer.question(question, index + 1, machine.questionnaire().len(), progress)?;
        Ok(())
    }
}
