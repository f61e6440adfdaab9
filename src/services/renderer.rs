//! 渲染服务 - 业务能力层
//!
//! 只负责"把数据画出来"，不修改任何问卷状态

use std::io::{self, Write};

use crate::error::SubmitError;
use crate::models::{Presentation, Question, RecipeResult};

/// 面向用户的统一失败提示（传输失败和服务端拒绝不做区分）
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Произошла ошибка при генерации рецепта. Попробуйте еще раз.";

/// 渲染协作者
///
/// 核心逻辑只产出数据，由实现者决定如何展示（终端、测试记录等）
pub trait Renderer {
    /// 主界面
    fn main_menu(&mut self) -> io::Result<()>;

    /// 显示当前题目
    ///
    /// # 参数
    /// - `question`: 当前题目
    /// - `number`: 题号（从 1 开始）
    /// - `total`: 题目总数
    /// - `progress`: 进度百分比
    fn question(
        &mut self,
        question: &Question,
        number: usize,
        total: usize,
        progress: u8,
    ) -> io::Result<()>;

    /// 选择已记录
    fn selection_confirmed(&mut self, question: &Question, option: &str) -> io::Result<()>;

    /// 未选择答案就尝试进入下一题
    fn advance_blocked(&mut self) -> io::Result<()>;

    /// 无法识别的输入
    fn invalid_input(&mut self, input: &str) -> io::Result<()>;

    /// 正在提交
    fn submitting(&mut self) -> io::Result<()>;

    /// 最终菜谱
    fn recipe(&mut self, recipe: &RecipeResult) -> io::Result<()>;

    /// 提交失败，并给出重试 / 返回选项
    fn submit_failed(&mut self, error: &SubmitError) -> io::Result<()>;
}

/// 把菜谱排版成若干行
pub fn format_recipe(recipe: &RecipeResult) -> Vec<String> {
    let mut lines = vec![format!("=== {} ===", recipe.title())];

    if let Some(time) = recipe.cooking_time.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("Время: {}", time));
    }
    if let Some(servings) = recipe
        .number_of_servings
        .as_deref()
        .filter(|s| !s.is_empty())
    {
        lines.push(format!("Порций: {}", servings));
    }
    if let Some(description) = recipe.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(String::new());
        lines.push(description.to_string());
    }

    let ingredients = recipe.ingredients();
    if !ingredients.is_empty() {
        lines.push(String::new());
        lines.push("Ингредиенты:".to_string());
        lines.extend(
            ingredients
                .iter()
                .map(|ingredient| format!("  • {}", ingredient.display_line())),
        );
    }

    lines
}

/// 进度条，宽度 20 格
pub fn progress_bar(progress: u8) -> String {
    let filled = (progress.min(100) as usize) / 5;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(20 - filled),
        progress.min(100)
    )
}

/// 终端渲染器
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn main_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Что приготовить?")?;
        writeln!(self.out, "  [1] Сгенерировать рецепт")?;
        writeln!(self.out, "  [0] Выход")?;
        self.out.flush()
    }

    fn question(
        &mut self,
        question: &Question,
        number: usize,
        total: usize,
        progress: u8,
    ) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{} {}/{}", progress_bar(progress), number, total)?;
        writeln!(self.out, "{}", question.prompt)?;

        match question.presentation {
            Presentation::Buttons => {
                for (i, option) in question.options.iter().enumerate() {
                    writeln!(self.out, "  [{}] {}", i + 1, option)?;
                }
            }
            Presentation::Dropdown => {
                let items: Vec<String> = question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(i, option)| format!("{}) {}", i + 1, option))
                    .collect();
                writeln!(self.out, "  Выберите ответ: {}", items.join("  "))?;
            }
        }

        writeln!(self.out, "  (номер ответа, Enter — Далее, q — в меню)")?;
        self.out.flush()
    }

    fn selection_confirmed(&mut self, _question: &Question, option: &str) -> io::Result<()> {
        writeln!(self.out, "  ✓ {}", option)?;
        self.out.flush()
    }

    fn advance_blocked(&mut self) -> io::Result<()> {
        writeln!(self.out, "  Сначала выберите ответ")?;
        self.out.flush()
    }

    fn invalid_input(&mut self, input: &str) -> io::Result<()> {
        writeln!(self.out, "  Непонятный ввод: {}", input)?;
        self.out.flush()
    }

    fn submitting(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Генерируем рецепт...")?;
        self.out.flush()
    }

    fn recipe(&mut self, recipe: &RecipeResult) -> io::Result<()> {
        writeln!(self.out)?;
        for line in format_recipe(recipe) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }

    fn submit_failed(&mut self, _error: &SubmitError) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", SUBMIT_FAILED_MESSAGE)?;
        writeln!(self.out, "  [r] Повторить  [m] В главное меню")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeIngredient;

    #[test]
    fn test_format_full_recipe() {
        let recipe = RecipeResult {
            recipe_name: Some("Суп".to_string()),
            cooking_time: Some("30 минут".to_string()),
            number_of_servings: Some("4".to_string()),
            description: Some("Вкусный суп".to_string()),
            ingredients: Some(vec![
                RecipeIngredient {
                    quantity: Some("2".to_string()),
                    unit: Some("шт".to_string()),
                    ingredient_name: Some("картофель".to_string()),
                },
                RecipeIngredient {
                    quantity: None,
                    unit: None,
                    ingredient_name: Some("соль".to_string()),
                },
            ]),
        };

        assert_eq!(
            format_recipe(&recipe),
            vec![
                "=== Суп ===",
                "Время: 30 минут",
                "Порций: 4",
                "",
                "Вкусный суп",
                "",
                "Ингредиенты:",
                "  • 2 шт картофель",
                "  • соль",
            ]
        );
    }

    #[test]
    fn test_format_empty_recipe_uses_fallbacks() {
        let recipe = RecipeResult {
            ingredients: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(format_recipe(&recipe), vec!["=== Рецепт ==="]);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(25), format!("[{}{}] 25%", "█".repeat(5), "░".repeat(15)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "█".repeat(20)));
    }

    #[test]
    fn test_terminal_renderer_dropdown() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let question = Question::new("meal_type", "Прием пищи", ["Завтрак", "Обед"]).as_dropdown();

        renderer.question(&question, 2, 4, 50).unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(output.contains("Прием пищи"));
        assert!(output.contains("Выберите ответ: 1) Завтрак  2) Обед"));
        assert!(output.contains("2/4"));
    }

    #[test]
    fn test_terminal_renderer_failure_message() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let error = SubmitError::ServerRejected {
            endpoint: "http://localhost/api/generate-recipe".to_string(),
            status: 500,
        };

        renderer.submit_failed(&error).unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(output.contains(SUBMIT_FAILED_MESSAGE));
    }
}
