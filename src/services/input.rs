//! 输入服务 - 业务能力层
//!
//! 按行读取用户输入，并翻译成各个界面上的指令

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// 主界面指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Generate,
    Exit,
    Invalid(String),
}

/// 答题界面指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCommand {
    /// 选择第 N 个选项（从 1 开始）
    Select(usize),
    /// "Далее"
    Next,
    /// 放弃问卷，回到主界面
    Abandon,
    Invalid(String),
}

/// 提交失败后的指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryCommand {
    Retry,
    BackToMenu,
    Invalid(String),
}

impl MenuCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => MenuCommand::Generate,
            "0" | "q" => MenuCommand::Exit,
            other => MenuCommand::Invalid(other.to_string()),
        }
    }
}

impl QuizCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" | "n" | "далее" => QuizCommand::Next,
            "q" => QuizCommand::Abandon,
            _ => match line.parse::<usize>() {
                Ok(number) => QuizCommand::Select(number),
                Err(_) => QuizCommand::Invalid(line.to_string()),
            },
        }
    }
}

impl RetryCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "r" | "" => RetryCommand::Retry,
            "m" | "q" => RetryCommand::BackToMenu,
            other => RetryCommand::Invalid(other.to_string()),
        }
    }
}

/// 按行读取的输入源
pub struct LineInput<R> {
    reader: BufReader<R>,
}

impl LineInput<tokio::io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

impl<R: AsyncRead + Unpin> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// 读取下一行（去掉换行符），输入结束时返回 None
    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quiz_command() {
        assert_eq!(QuizCommand::parse("2"), QuizCommand::Select(2));
        assert_eq!(QuizCommand::parse(" 3 "), QuizCommand::Select(3));
        assert_eq!(QuizCommand::parse(""), QuizCommand::Next);
        assert_eq!(QuizCommand::parse("Далее"), QuizCommand::Next);
        assert_eq!(QuizCommand::parse("q"), QuizCommand::Abandon);
        assert_eq!(
            QuizCommand::parse("суп"),
            QuizCommand::Invalid("суп".to_string())
        );
    }

    #[test]
    fn test_parse_menu_and_retry() {
        assert_eq!(MenuCommand::parse("1"), MenuCommand::Generate);
        assert_eq!(MenuCommand::parse("0"), MenuCommand::Exit);
        assert_eq!(MenuCommand::parse("x"), MenuCommand::Invalid("x".to_string()));

        assert_eq!(RetryCommand::parse("r"), RetryCommand::Retry);
        assert_eq!(RetryCommand::parse("M"), RetryCommand::BackToMenu);
    }

    #[tokio::test]
    async fn test_line_input_reads_until_eof() {
        let mock = tokio_test::io::Builder::new()
            .read(b"1\r\n2\n")
            .read(b"\n")
            .build();
        let mut input = LineInput::new(mock);

        assert_eq!(input.next_line().await.unwrap().as_deref(), Some("1"));
        assert_eq!(input.next_line().await.unwrap().as_deref(), Some("2"));
        assert_eq!(input.next_line().await.unwrap().as_deref(), Some(""));
        assert_eq!(input.next_line().await.unwrap(), None);
    }
}
