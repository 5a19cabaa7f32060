//! 送信ステージの結合テスト
//!
//! actix-webでローカルのテストサーバーを立てて検証

use actix_web::dev::ServerHandle;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use bfhl_form::client::HttpClassifier;
use bfhl_form::config::Config;
use bfhl_form_common::{submit, FilterToggles, FormState, SubmissionError};
use serde_json::{json, Value};
use std::net::{SocketAddr, TcpListener};
use std::sync::Mutex;

/// 受信したリクエスト
#[derive(Debug, Clone)]
struct CapturedRequest {
    method: String,
    path: String,
    content_type: Option<String>,
    body: String,
}

impl CapturedRequest {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("リクエストボディがJSONでない")
    }
}

/// サーバーが返す固定レスポンス
#[derive(Clone, Copy)]
struct Reply {
    status: StatusCode,
    body: &'static str,
}

type Captured = web::Data<Mutex<Vec<CapturedRequest>>>;

/// すべてのリクエストを記録して固定レスポンスを返す
async fn record(req: HttpRequest, body: web::Bytes, captured: Captured, reply: web::Data<Reply>) -> HttpResponse {
    let request = CapturedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        content_type: req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    captured.lock().unwrap().push(request);

    HttpResponse::build(reply.status)
        .content_type("application/json")
        .body(reply.body)
}

struct TestServer {
    addr: SocketAddr,
    captured: Captured,
    handle: ServerHandle,
}

impl TestServer {
    async fn start(status: StatusCode, body: &'static str) -> Self {
        let captured: Captured = web::Data::new(Mutex::new(Vec::new()));
        let reply = web::Data::new(Reply { status, body });

        let shared = captured.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(shared.clone())
                .app_data(reply.clone())
                .default_service(web::to(record))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind失敗");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self { addr, captured, handle }
    }

    fn classifier(&self) -> HttpClassifier {
        classifier_for(self.addr)
    }

    fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    async fn stop(self) {
        self.handle.stop(false).await;
    }
}

fn classifier_for(addr: SocketAddr) -> HttpClassifier {
    let config = Config {
        endpoint: format!("http://{}/bfhl", addr),
        timeout_seconds: 5,
    };
    HttpClassifier::new(&config).expect("クライアント作成失敗")
}

const SAMPLE_RESPONSE: &str = r#"{"is_success":true,"alphabets":["a","B2","c"],"numbers":["3","x","42"],"highest_lowercase_alphabet":["c"]}"#;

/// 正常系: リクエスト形式とレスポンス保存
#[actix_web::test]
async fn test_submit_success_sends_expected_request() {
    let server = TestServer::start(StatusCode::OK, SAMPLE_RESPONSE).await;

    let mut state = FormState::new();
    state.set_json_text(r#"{"data": ["a", "B2", "3"]}"#);
    state.set_file_base64("aGVsbG8=");

    submit(&mut state, &server.classifier()).await.expect("送信失敗");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/bfhl");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        request.json(),
        json!({"data": ["a", "B2", "3"], "file_base64": "aGVsbG8="})
    );

    assert!(state.error.is_none());
    let response = state.response.as_ref().expect("レスポンスが保存されていない");
    assert_eq!(response.as_value()["is_success"], json!(true));

    server.stop().await;
}

/// 正常系: 送信後にフィルタ
#[actix_web::test]
async fn test_submit_then_filter() {
    let server = TestServer::start(StatusCode::OK, SAMPLE_RESPONSE).await;

    let mut state = FormState::new();
    state.set_json_text(r#"{"data": []}"#);
    submit(&mut state, &server.classifier()).await.expect("送信失敗");
    server.stop().await;

    state.toggles = FilterToggles::new(true, true, false);
    let filtered = state.apply_filters().expect("フィルタ失敗").clone();
    assert_eq!(filtered.alphabets, vec!["a", "c"]);
    assert_eq!(filtered.numbers, vec!["3", "42"]);
    assert!(filtered.highest_lowercase_alphabet.is_empty());
}

/// dataが無い入力ではキーを省略し、空のfile_base64はそのまま送る
#[actix_web::test]
async fn test_submit_without_data_and_file() {
    let server = TestServer::start(StatusCode::OK, "{}").await;

    let mut state = FormState::new();
    state.set_json_text(r#"{"numbers": [1]}"#);
    submit(&mut state, &server.classifier()).await.expect("送信失敗");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].json(), json!({"file_base64": ""}));

    server.stop().await;
}

/// HTTP 500: エラー表示、レスポンスは未取得のまま
#[actix_web::test]
async fn test_submit_server_error_keeps_response() {
    let server = TestServer::start(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#).await;

    let mut state = FormState::new();
    state.set_json_text("{}");
    let result = submit(&mut state, &server.classifier()).await;
    server.stop().await;

    assert!(matches!(result, Err(SubmissionError::CommunicationFailure(_))));
    assert!(state.error.is_some());
    assert!(state.response.is_none());
    assert!(!state.is_submitting());
}

/// 2回目の失敗で1回目のレスポンスが残る
#[actix_web::test]
async fn test_submit_failure_after_success_keeps_previous() {
    let ok = TestServer::start(StatusCode::OK, SAMPLE_RESPONSE).await;
    let mut state = FormState::new();
    state.set_json_text("{}");
    submit(&mut state, &ok.classifier()).await.expect("送信失敗");
    ok.stop().await;
    let before = state.response.clone();

    let not_found = TestServer::start(StatusCode::NOT_FOUND, "{}").await;
    let result = submit(&mut state, &not_found.classifier()).await;
    not_found.stop().await;

    assert!(result.is_err());
    assert_eq!(state.response, before);
}

/// 2xxでもJSONでないボディは通信失敗扱い
#[actix_web::test]
async fn test_submit_non_json_body() {
    let server = TestServer::start(StatusCode::OK, "<html>oops</html>").await;

    let mut state = FormState::new();
    state.set_json_text("{}");
    let result = submit(&mut state, &server.classifier()).await;
    server.stop().await;

    assert!(matches!(result, Err(SubmissionError::CommunicationFailure(_))));
    assert!(state.response.is_none());
}

/// 接続できない場合
#[actix_web::test]
async fn test_submit_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut state = FormState::new();
    state.set_json_text("{}");
    let result = submit(&mut state, &classifier_for(addr)).await;

    assert!(matches!(result, Err(SubmissionError::CommunicationFailure(_))));
    assert!(state.error.is_some());
}

/// JSON不正ならサーバーへ送信しない
#[actix_web::test]
async fn test_invalid_json_sends_nothing() {
    let server = TestServer::start(StatusCode::OK, SAMPLE_RESPONSE).await;

    let mut state = FormState::new();
    state.set_json_text("{\"data\": [1,");
    let result = submit(&mut state, &server.classifier()).await;

    assert!(matches!(result, Err(SubmissionError::InvalidInput(_))));
    assert!(server.requests().is_empty(), "リクエストがあってはならない");

    server.stop().await;
}
