//! End-to-end tests running the binary against a mock Messages API

use std::path::{Path, PathBuf};

use assert_cmd::assert::{Assert, OutputAssertExt};
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DISCLAIMER: &str = "<!-- This is an AI-generated transcript of a PDF. Certain elements of the original document, such as figures and images, have been replaced with descriptions. -->";

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let prompts = dir.path().join("prompts");
        std::fs::create_dir(&prompts).unwrap();
        std::fs::write(prompts.join("v2_no_scratchpad.txt"), "Summarize.").unwrap();
        std::fs::write(prompts.join("transcribe_v1.txt"), "Transcribe.").unwrap();
        std::fs::write(dir.path().join("attention.pdf"), b"%PDF-1.4 test").unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn command(&self, base_url: &str) -> Command {
        let mut cmd = Command::cargo_bin("nutshell").unwrap();
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env("ANTHROPIC_API_KEY", "test-key")
            .env("ANTHROPIC_BASE_URL", base_url)
            .env("NUTSHELL_PROMPTS_DIR", self.path().join("prompts"))
            .env("NUTSHELL_CACHE_DIR", self.path().join("cache"))
            .env_remove("RUST_LOG");
        cmd
    }
}

async fn messages_server(prompt: &str, max_tokens: u32, reply: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(body_partial_json(json!({
            "max_tokens": max_tokens,
            "messages": [{ "content": [{ "type": "document" }, { "type": "text", "text": prompt }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{ "type": "text", "text": reply }],
            "usage": { "input_tokens": 1234, "output_tokens": 56 }
        })))
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// Run the binary off the async workers so the mock server keeps serving
async fn run(mut cmd: Command) -> Assert {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
        .assert()
}

#[tokio::test(flavor = "multi_thread")]
async fn summarize_writes_verbatim_summary() {
    let ws = Workspace::new();
    let server = messages_server("Summarize.", 4096, "# Attention\n\nKey points.").await;

    let mut cmd = ws.command(&server.uri());
    cmd.args(["summarize", "attention.pdf", "-m", "haiku"]);

    run(cmd)
        .await
        .success()
        .stderr(predicate::str::contains("Using model: claude-3-5-haiku-20241022"))
        .stderr(predicate::str::contains("Summary saved to"))
        .stdout(predicate::str::contains("1,234 in, 56 out"))
        .stdout(predicate::str::contains("$0.0012"));

    let written = std::fs::read_to_string(ws.path().join("attention_summary.md")).unwrap();
    assert_eq!(written, "# Attention\n\nKey points.");
}

#[tokio::test(flavor = "multi_thread")]
async fn transcribe_prepends_disclaimer() {
    let ws = Workspace::new();
    let server = messages_server("Transcribe.", 16384, "# Full paper").await;
    let output: PathBuf = ws.path().join("custom.md");

    let mut cmd = ws.command(&server.uri());
    cmd.args(["transcribe", "attention.pdf", "-o"]).arg(&output);

    run(cmd).await.success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, format!("{}\n\n# Full paper", DISCLAIMER));
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_model_omits_cost() {
    let ws = Workspace::new();
    let server = messages_server("Summarize.", 4096, "ok").await;

    let mut cmd = ws.command(&server.uri());
    cmd.args(["summarise", "attention.pdf", "-m", "some-new-model"]);

    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("1,234 in"))
        .stdout(predicate::str::contains("Cost").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn remote_failure_exits_one_and_writes_nothing() {
    let ws = Workspace::new();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let mut cmd = ws.command(&server.uri());
    cmd.args(["summarize", "attention.pdf"]);

    run(cmd)
        .await
        .code(1)
        .stderr(predicate::str::contains("Summary failed"))
        .stderr(predicate::str::contains("API key"));

    assert!(!ws.path().join("attention_summary.md").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_prompt_file_exits_one() {
    let ws = Workspace::new();
    let server = MockServer::start().await;

    let mut cmd = ws.command(&server.uri());
    cmd.args(["summarize", "attention.pdf", "-p", "nope.txt"]);

    run(cmd)
        .await
        .code(1)
        .stderr(predicate::str::contains("Prompt file not found"))
        .stderr(predicate::str::contains("nope.txt"));
}

#[tokio::test(flavor = "multi_thread")]
async fn url_input_is_downloaded_and_named_by_arxiv_id() {
    let ws = Workspace::new();
    let server = messages_server("Summarize.", 4096, "arxiv summary").await;
    Mock::given(method("HEAD"))
        .and(path("/arxiv.org/pdf/2301.12345"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "application/pdf"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/arxiv.org/pdf/2301.12345"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 remote".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/arxiv.org/pdf/2301.12345", server.uri());
    let mut cmd = ws.command(&server.uri());
    cmd.args(["summarize", &url]);

    run(cmd).await.success();

    let written = std::fs::read_to_string(ws.path().join("2301.12345_summary.md")).unwrap();
    assert_eq!(written, "arxiv summary");
}
