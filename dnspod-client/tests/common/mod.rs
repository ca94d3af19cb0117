//! 共享测试工具：内存 Transport 与断言宏

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dnspod_client::{ClientError, CommonParams, DnspodClient, Payload, Result, Transport};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

pub const TEST_LOGIN_TOKEN: &str = "13490,6b5976c68aba5b14a0558b77c17c3932";

/// A request the client sent.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub path: String,
    pub form: Payload,
}

/// Canned reply for one action path.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Fail(ClientError),
}

/// In-memory transport: replays canned bodies per path and records every call.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, Reply>>,
    sent: Mutex<Vec<SentRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, path: &str, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Body(body.to_string()));
    }

    pub fn fail(&self, path: &str, error: ClientError) {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Fail(error));
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// The only request sent so far; panics when there were none or several.
    pub fn last(&self) -> SentRequest {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one request, got {sent:?}");
        sent.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_form(&self, path: &str, form: &Payload) -> Result<String> {
        self.sent.lock().unwrap().push(SentRequest {
            path: path.to_string(),
            form: form.clone(),
        });
        let reply = self.replies.lock().unwrap().get(path).cloned();
        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fail(error)) => Err(error),
            None => Err(ClientError::HttpStatus {
                url: format!("mock://{path}"),
                status: 404,
                message: "404 page not found".to_string(),
            }),
        }
    }
}

/// Client wired to a fresh [`MockTransport`].
pub fn setup() -> (DnspodClient, Arc<MockTransport>) {
    let transport = MockTransport::new();
    let client = DnspodClient::builder(CommonParams::new(TEST_LOGIN_TOKEN))
        .transport(transport.clone())
        .build()
        .unwrap();
    (client, transport)
}

/// Envelope with a success status and `payload` merged in.
pub fn ok_body(payload: &str) -> String {
    let payload = payload.trim();
    if payload.is_empty() {
        r#"{"status":{"code":"1","message":"Action completed successful","created_at":"2015-01-18 20:07:29"}}"#
            .to_string()
    } else {
        format!(
            r#"{{"status":{{"code":"1","message":"Action completed successful","created_at":"2015-01-18 20:07:29"}},{payload}}}"#
        )
    }
}

pub const BAD_TOKEN_BODY: &str = r#"{"status":{"code":"0","message":"bad token"}}"#;
