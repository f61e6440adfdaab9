use crate::error::QuestionnaireError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 选项的展示方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// 每个选项一个按钮
    #[default]
    Buttons,
    /// 折叠成下拉列表
    Dropdown,
}

/// 单个题目：一个固定的提示语和一组封闭的选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub presentation: Presentation,
}

impl Question {
    /// 创建按钮样式的题目
    pub fn new<I, S>(id: impl Into<String>, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            presentation: Presentation::Buttons,
        }
    }

    /// 改为下拉列表样式
    pub fn as_dropdown(mut self) -> Self {
        self.presentation = Presentation::Dropdown;
        self
    }

    /// 按界面编号（从 1 开始）取选项
    pub fn option_by_number(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }
}

/// 有序的题目列表，进程内固定不变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// 创建并校验问卷
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        let questionnaire = Self { questions };
        questionnaire.validate()?;
        Ok(questionnaire)
    }

    /// 内置的四道题
    pub fn builtin() -> Self {
        Self {
            questions: vec![
                Question::new("cooking_time", "Время готовки", ["Быстро", "Средне", "Долго"]),
                Question::new("meal_type", "Прием пищи", ["Завтрак", "Обед", "Ужин"]),
                Question::new(
                    "difficulty",
                    "Сложность приготовления",
                    ["Легко", "Средне", "Тяжело"],
                ),
                Question::new("preference", "Хочу приготовить", ["Новое", "Популярное", "Любимое"]),
            ],
        }
    }

    /// 校验问卷定义
    ///
    /// 要求：至少一道题、ID 非空且唯一、每题至少一个选项，选项非空且互不相同
    pub fn validate(&self) -> Result<(), QuestionnaireError> {
        if self.questions.is_empty() {
            return Err(QuestionnaireError::Empty);
        }

        let mut ids = HashSet::new();
        for (index, question) in self.questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(QuestionnaireError::BlankId { index: index + 1 });
            }
            if !ids.insert(question.id.as_str()) {
                return Err(QuestionnaireError::DuplicateId {
                    id: question.id.clone(),
                });
            }
            if question.options.is_empty() {
                return Err(QuestionnaireError::NoOptions {
                    id: question.id.clone(),
                });
            }

            let mut seen = HashSet::new();
            for option in &question.options {
                if option.trim().is_empty() {
                    return Err(QuestionnaireError::BlankOption {
                        id: question.id.clone(),
                    });
                }
                if !seen.insert(option.as_str()) {
                    return Err(QuestionnaireError::DuplicateOption {
                        id: question.id.clone(),
                        option: option.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::builtin()
    }
}
