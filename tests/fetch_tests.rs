//! PDF download and cache integration tests

use nutshell::application::ports::{FetchError, PdfFetcher};
use nutshell::infrastructure::CachedHttpFetcher;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\n%%EOF";

async fn pdf_server(route: &str, content_type: Option<&str>, expected: u64) -> MockServer {
    let server = MockServer::start().await;

    let mut head = ResponseTemplate::new(200);
    if let Some(ct) = content_type {
        head = head.insert_header("content-type", ct);
    }
    Mock::given(method("HEAD"))
        .and(path(route))
        .respond_with(head)
        .expect(expected)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PDF_BYTES))
        .expect(expected)
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn second_fetch_is_served_from_cache() {
    let server = pdf_server("/pdf/2301.12345", Some("application/pdf"), 1).await;
    let cache = tempfile::tempdir().unwrap();
    let fetcher = CachedHttpFetcher::with_cache_dir(cache.path().join("pdfs"));
    let url = format!("{}/pdf/2301.12345", server.uri());

    let first = fetcher.fetch(&url).await.unwrap();
    let second = fetcher.fetch(&url).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first, fetcher.cache_path(&url));
    assert_eq!(std::fs::read(&first).unwrap(), PDF_BYTES);
    // MockServer verifies on drop that HEAD and GET each ran exactly once
}

#[tokio::test]
async fn cache_dir_is_created() {
    let server = pdf_server("/paper", Some("application/pdf"), 1).await;
    let cache = tempfile::tempdir().unwrap();
    let dir = cache.path().join("a").join("b");
    let fetcher = CachedHttpFetcher::with_cache_dir(&dir);

    fetcher
        .fetch(&format!("{}/paper", server.uri()))
        .await
        .unwrap();

    assert!(dir.is_dir());
    let entries: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
    assert_eq!(entries.len(), 1, "temp files must not be left behind");
}

#[tokio::test]
async fn pdf_extension_accepted_without_content_type() {
    let server = pdf_server("/files/paper.pdf", None, 1).await;
    let cache = tempfile::tempdir().unwrap();
    let fetcher = CachedHttpFetcher::with_cache_dir(cache.path());

    let path = fetcher
        .fetch(&format!("{}/files/paper.pdf", server.uri()))
        .await
        .unwrap();
    assert!(path.is_file());
}

#[tokio::test]
async fn non_pdf_content_type_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/landing"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/landing"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PDF_BYTES))
        .expect(0)
        .mount(&server)
        .await;

    let cache = tempfile::tempdir().unwrap();
    let fetcher = CachedHttpFetcher::with_cache_dir(cache.path());
    let url = format!("{}/landing", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    match err {
        FetchError::UnsupportedContentType { url: u, content_type } => {
            assert_eq!(u, url);
            assert!(content_type.contains("text/html"));
        }
        other => panic!("expected UnsupportedContentType, got {:?}", other),
    }
    assert!(!fetcher.cache_path(&url).exists());
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/missing.pdf"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let cache = tempfile::tempdir().unwrap();
    let fetcher = CachedHttpFetcher::with_cache_dir(cache.path());

    let err = fetcher
        .fetch(&format!("{}/missing.pdf", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus { status: 404, .. }));
    assert!(err.to_string().contains("missing.pdf"));
}

#[tokio::test]
async fn connection_failure_is_reported() {
    let cache = tempfile::tempdir().unwrap();
    let fetcher = CachedHttpFetcher::with_cache_dir(cache.path());

    let err = fetcher
        .fetch("http://127.0.0.1:9/paper.pdf")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::RequestFailed { .. }));
}

#[tokio::test]
async fn existing_cache_entry_skips_network() {
    let cache = tempfile::tempdir().unwrap();
    let fetcher = CachedHttpFetcher::with_cache_dir(cache.path());
    let url = "http://127.0.0.1:9/never-contacted.pdf";
    std::fs::write(fetcher.cache_path(url), b"cached").unwrap();

    let path = fetcher.fetch(url).await.unwrap();
    assert_eq!(std::fs::read(path).unwrap(), b"cached");
}
