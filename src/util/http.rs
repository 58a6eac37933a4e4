use bytes::Bytes;
use http_body_util::Full;
use hyper::http;
use percent_encoding::{CONTROLS, utf8_percent_encode};

pub fn make_error_resp(status: http::StatusCode, msg: &str) -> http::Response<Full<Bytes>> {
    let mut resp = http::Response::new(Full::from(msg.to_string()));
    *resp.status_mut() = status;
    resp
}

pub fn make_text_resp(status: http::StatusCode, text: &str) -> http::Response<Full<Bytes>> {
    let mut resp = make_error_resp(status, text);
    resp.headers_mut().insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    resp
}

/// 302 Found to `location`. GET gets a short HTML body linking the target,
/// HEAD only the matching content type.
pub fn make_redirect_resp(method: &http::Method, location: &str) -> http::Response<Full<Bytes>> {
    let header_val = utf8_percent_encode(location, CONTROLS).to_string();
    let is_get = *method == http::Method::GET;

    let mut builder = http::Response::builder()
        .status(http::StatusCode::FOUND)
        .header(http::header::LOCATION, header_val.as_str());
    if is_get || *method == http::Method::HEAD {
        builder = builder.header(http::header::CONTENT_TYPE, "text/html; charset=utf-8");
    }
    let body = if is_get {
        format!("<a href=\"{}\">Found</a>.\n", html_escape(location))
    } else {
        String::new()
    };

    builder.body(Full::from(body)).unwrap_or_else(|e| {
        tracing::error!(%location, error = %e, "cannot build redirect response");
        make_text_resp(http::StatusCode::INTERNAL_SERVER_ERROR, "redirect build failed")
    })
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
