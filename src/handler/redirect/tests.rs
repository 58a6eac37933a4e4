use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::http;

use super::*;
use crate::build::mapping::builtin_mapping;
use crate::handler::HelloHandler;

/// Fallback that answers 418 and echoes the path it was given.
struct Teapot;

impl ServiceHandler for Teapot {
    fn handle_request<'a, B>(&'a self, req: &'a http::Request<B>) -> BoxResponseFuture<'a>
    where
        B: Sync + 'a,
    {
        let body = format!("teapot {}", req.uri());
        Box::pin(async move {
            http::Response::builder()
                .status(http::StatusCode::IM_A_TEAPOT)
                .header("x-fallback", "teapot")
                .body(Full::from(body))
                .unwrap()
        })
    }
}

fn get(uri: &str) -> http::Request<()> {
    http::Request::builder().uri(uri).body(()).unwrap()
}

async fn body_of(resp: http::Response<Full<Bytes>>) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn single(path: &str, url: &str) -> RedirectMapping {
    [(path, url)].into_iter().collect()
}

#[tokio::test]
async fn hit_redirects_with_found() {
    let handler = MapHandler::new(single("/a", "http://x"), HelloHandler);
    let resp = handler.handle_request(&get("/a")).await;
    assert_eq!(resp.status(), http::StatusCode::FOUND);
    assert_eq!(resp.headers()[http::header::LOCATION], "http://x");
    assert_eq!(resp.headers()[http::header::CONTENT_TYPE], "text/html; charset=utf-8");
    assert_eq!(body_of(resp).await, "<a href=\"http://x\">Found</a>.\n");
}

#[tokio::test]
async fn miss_falls_through_to_hello() {
    let handler = MapHandler::new(single("/a", "http://x"), HelloHandler);
    let resp = handler.handle_request(&get("/unknown")).await;
    assert_eq!(resp.status(), http::StatusCode::OK);
    assert!(resp.headers().get(http::header::LOCATION).is_none());
    assert_eq!(body_of(resp).await, "Hello, world!");
}

#[tokio::test]
async fn every_mapped_path_redirects_to_its_url() {
    let mapping: RedirectMapping = [
        ("/a", "http://x"),
        ("/b", "https://y.example/path?q=1"),
        ("/deep/nested/path", "http://z/"),
    ]
    .into_iter()
    .collect();
    let handler = MapHandler::new(mapping.clone(), Teapot);
    for (path, url) in mapping.iter() {
        let resp = handler.handle_request(&get(path)).await;
        assert_eq!(resp.status(), http::StatusCode::FOUND, "{path}");
        assert_eq!(resp.headers()[http::header::LOCATION], url, "{path}");
    }
}

#[tokio::test]
async fn miss_returns_fallback_response_unchanged() {
    let handler = MapHandler::new(single("/a", "http://x"), Teapot);
    for uri in ["/", "/b", "/a/", "/A", "/x?y=z"] {
        let direct = Teapot.handle_request(&get(uri)).await;
        let via = handler.handle_request(&get(uri)).await;
        assert_eq!(via.status(), direct.status());
        assert_eq!(via.headers(), direct.headers());
        assert_eq!(body_of(via).await, body_of(direct).await);
    }
}

#[tokio::test]
async fn query_string_is_ignored_for_lookup() {
    let handler = MapHandler::new(single("/a", "http://x"), Teapot);
    let resp = handler.handle_request(&get("/a?utm=1")).await;
    assert_eq!(resp.status(), http::StatusCode::FOUND);
    assert_eq!(resp.headers()[http::header::LOCATION], "http://x");
}

#[tokio::test]
async fn chained_handlers_consult_each_mapping_in_order() {
    let builtin = MapHandler::new(builtin_mapping(), HelloHandler);
    let handler = MapHandler::new(single("/yaml-godoc", "http://override"), builtin);

    let resp = handler.handle_request(&get("/yaml-godoc")).await;
    assert_eq!(resp.headers()[http::header::LOCATION], "http://override");

    let resp = handler.handle_request(&get("/urlshort-godoc")).await;
    assert_eq!(
        resp.headers()[http::header::LOCATION],
        "https://godoc.org/github.com/gophercises/urlshort"
    );

    let resp = handler.handle_request(&get("/")).await;
    assert_eq!(body_of(resp).await, "Hello, world!");
}

#[tokio::test]
async fn yaml_handler_builds_from_document() {
    let doc = b"- path: /a\n  url: http://x\n- path: /b\n  url: http://y\n";
    let handler = yaml_handler(doc, HelloHandler).unwrap();
    assert_eq!(handler.mapping().len(), 2);
    let resp = handler.handle_request(&get("/b")).await;
    assert_eq!(resp.headers()[http::header::LOCATION], "http://y");
}

#[tokio::test]
async fn json_handler_builds_from_document() {
    let doc = br#"[{"path":"/a","url":"http://x"},{"path":"/b","url":"http://y"}]"#;
    let handler = json_handler(doc, HelloHandler).unwrap();
    assert_eq!(handler.mapping().get("/a"), Some("http://x"));
    let resp = handler.handle_request(&get("/a")).await;
    assert_eq!(resp.headers()[http::header::LOCATION], "http://x");
}

#[test]
fn malformed_documents_produce_no_handler() {
    assert!(yaml_handler(b"- path: /a\n", HelloHandler).is_err());
    assert!(yaml_handler(b"path: /a\nurl: http://x\n", HelloHandler).is_err());
    assert!(json_handler(br#"[{"url":"http://x"}]"#, HelloHandler).is_err());
    assert!(document_handler(ConfigFormat::Json, b"not json", HelloHandler).is_err());
}

#[test]
fn document_handler_dispatches_on_format() {
    let json = br#"[{"path":"/a","url":"http://x"}]"#;
    let handler = document_handler(ConfigFormat::Json, json, HelloHandler).unwrap();
    assert_eq!(handler.mapping().get("/a"), Some("http://x"));
    let yaml = b"- path: /a\n  url: http://y\n";
    let handler = document_handler(ConfigFormat::Yaml, yaml, HelloHandler).unwrap();
    assert_eq!(handler.mapping().get("/a"), Some("http://y"));
}

#[tokio::test]
async fn relative_target_resolves_against_request_dir() {
    let mapping: RedirectMapping = [("/docs/old", "new"), ("/docs/up", "")].into_iter().collect();
    let handler = MapHandler::new(mapping, HelloHandler);
    let resp = handler.handle_request(&get("/docs/old")).await;
    assert_eq!(resp.headers()[http::header::LOCATION], "/docs/new");
    let resp = handler.handle_request(&get("/docs/up")).await;
    assert_eq!(resp.headers()[http::header::LOCATION], "/docs/");
}

#[test]
fn absolute_targets_are_kept() {
    assert_eq!(resolve_location("/a/b", "https://x/y"), "https://x/y");
    assert_eq!(resolve_location("/a/b", "mailto:someone@example.com"), "mailto:someone@example.com");
    assert_eq!(resolve_location("/a/b", "/root"), "/root");
    assert_eq!(resolve_location("/a/b", "//cdn.example/x"), "//cdn.example/x");
    assert_eq!(resolve_location("/a/b", "c:d/e"), "c:d/e");
    assert_eq!(resolve_location("/a/b", "d/e:f"), "/a/d/e:f");
}

#[tokio::test]
async fn post_redirect_has_no_body() {
    let handler = MapHandler::new(single("/a", "http://x"), HelloHandler);
    let req = http::Request::builder().method(http::Method::POST).uri("/a").body(()).unwrap();
    let resp = handler.handle_request(&req).await;
    assert_eq!(resp.status(), http::StatusCode::FOUND);
    assert_eq!(body_of(resp).await, "");
}
