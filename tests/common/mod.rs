#![allow(dead_code)]

use std::io;

use recipe_quiz::models::{Question, RecipeResult};
use recipe_quiz::services::Renderer;
use recipe_quiz::SubmitError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 桩服务器收到的一次请求
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

/// 预设的一次响应
#[derive(Debug, Clone, Copy)]
pub struct CannedResponse {
    pub status: &'static str,
    pub body: &'static str,
}

impl CannedResponse {
    pub const fn new(status: &'static str, body: &'static str) -> Self {
        Self { status, body }
    }
}

/// 启动本地桩服务器，按顺序为每个连接返回一个预设响应
///
/// 返回服务地址和收到的请求列表
pub async fn spawn_stub(
    responses: Vec<CannedResponse>,
) -> (String, JoinHandle<Vec<CapturedRequest>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut captured = Vec::new();
        for response in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            captured.push(read_request(&mut socket).await);

            let reply = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                response.status,
                response.body.len(),
                response.body
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        }
        captured
    });

    (base_url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "连接在请求头结束前关闭");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();
    CapturedRequest { head, body }
}

/// 渲染事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MainMenu,
    Question { id: String, number: usize, total: usize, progress: u8 },
    Selected { id: String, option: String },
    Blocked,
    Invalid(String),
    Submitting,
    Recipe(RecipeResult),
    Failed { rejected: bool },
}

/// 记录所有渲染调用的渲染器
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<Event>,
}

impl Renderer for RecordingRenderer {
    fn main_menu(&mut self) -> io::Result<()> {
        self.events.push(Event::MainMenu);
        Ok(())
    }

    fn question(
        &mut self,
        question: &Question,
        number: usize,
        total: usize,
        progress: u8,
    ) -> io::Result<()> {
        self.events.push(Event::Question {
            id: question.id.clone(),
            number,
            total,
            progress,
        });
        Ok(())
    }

    fn selection_confirmed(&mut self, question: &Question, option: &str) -> io::Result<()> {
        self.events.push(Event::Selected {
            id: question.id.clone(),
            option: option.to_string(),
        });
        Ok(())
    }

    fn advance_blocked(&mut self) -> io::Result<()> {
        self.events.push(Event::Blocked);
        Ok(())
    }

    fn invalid_input(&mut self, input: &str) -> io::Result<()> {
        self.events.push(Event::Invalid(input.to_string()));
        Ok(())
    }

    fn submitting(&mut self) -> io::Result<()> {
        self.events.push(Event::Submitting);
        Ok(())
    }

    fn recipe(&mut self, recipe: &RecipeResult) -> io::Result<()> {
        self.events.push(Event::Recipe(recipe.clone()));
        Ok(())
    }

    fn submit_failed(&mut self, error: &SubmitError) -> io::Result<()> {
        self.events.push(Event::Failed {
            rejected: error.is_server_rejected(),
        });
        Ok(())
    }
}
