use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncRead;
use tracing::{info, warn};

use crate::clients::RecipeClient;
use crate::config::Config;
use crate::models::{load_questionnaire, Questionnaire};
use crate::services::input::{LineInput, MenuCommand};
use crate::services::renderer::{Renderer, TerminalRenderer};
use crate::utils::logging::{log_startup, print_session_stats};
use crate::workflow::{QuizFlow, QuizStateMachine, SessionOutcome};

/// 会话统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub started: usize,
    pub recipes: usize,
    pub abandoned: usize,
}

/// 应用主结构
pub struct App {
    machine: QuizStateMachine,
    flow: QuizFlow,
}

impl App {
    /// 初始化应用：加载问卷、创建客户端
    pub async fn initialize(config: Config) -> Result<Self> {
        let (questionnaire, source) = match &config.questions_file {
            Some(path) => {
                let questionnaire = load_questionnaire(Path::new(path))
                    .await
                    .with_context(|| format!("无法加载问卷: {}", path))?;
                (questionnaire, path.clone())
            }
            None => (Questionnaire::builtin(), "内置".to_string()),
        };

        let client = RecipeClient::new(&config);
        log_startup(client.endpoint(), questionnaire.len(), &source);

        Ok(Self::new(questionnaire, client))
    }

    pub fn new(questionnaire: Questionnaire, client: RecipeClient) -> Self {
        Self {
            machine: QuizStateMachine::new(questionnaire),
            flow: QuizFlow::new(client),
        }
    }

    /// 在终端上运行
    pub async fn run(&mut self) -> Result<()> {
        let mut renderer = TerminalRenderer::stdout();
        let mut input = LineInput::stdin();

        let stats = self.run_with(&mut renderer, &mut input).await?;
        print_session_stats(stats.started, stats.recipes, stats.abandoned);

        Ok(())
    }

    /// 主界面循环，直到用户退出或输入结束
    pub async fn run_with<R, I>(
        &mut self,
        renderer: &mut R,
        input: &mut LineInput<I>,
    ) -> Result<SessionStats>
    where
        R: Renderer,
        I: AsyncRead + Unpin,
    {
        let mut stats = SessionStats::default();

        loop {
            renderer.main_menu()?;

            let Some(line) = input.next_line().await? else {
                break;
            };

            match MenuCommand::parse(&line) {
                MenuCommand::Generate => {
                    stats.started += 1;
                    info!("开始第 {} 次问卷", stats.started);

                    match self.flow.run(&mut self.machine, renderer, input).await? {
                        SessionOutcome::Recipe(_) => stats.recipes += 1,
                        SessionOutcome::Abandoned => stats.abandoned += 1,
                        SessionOutcome::InputClosed => {
                            warn!("输入已结束，问卷未完成");
                            break;
                        }
                    }
                }
                MenuCommand::Exit => break,
                MenuCommand::Invalid(raw) => renderer.invalid_input(&raw)?,
            }
        }

        self.machine.reset();
        Ok(stats)
    }

    pub fn machine(&self) -> &QuizStateMachine {
        &self.machine
    }
}
