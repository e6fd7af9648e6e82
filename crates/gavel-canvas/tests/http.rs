//! HTTP client tests against a local single-threaded server.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use gavel_canvas::{CanvasApiConfig, CanvasClient, CanvasError, HttpCanvasClient};

struct Reply {
    status: &'static str,
    headers: Vec<String>,
    body: String,
}

impl Reply {
    fn ok(body: &str) -> Self {
        Self {
            status: "200 OK",
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn status(status: &'static str, body: &str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn with_header(mut self, header: String) -> Self {
        self.headers.push(header);
        self
    }
}

/// Serves `count` requests, answering each with `route(base_url, path)`.
/// Returns the base URL and a handle yielding the raw request heads.
fn serve<F>(count: usize, route: F) -> (String, JoinHandle<Vec<String>>)
where
    F: Fn(&str, &str) -> Reply + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let base_for_thread = base.clone();

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for _ in 0..count {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            let path = head
                .lines()
                .next()
                .and_then(|l| l.split_whitespace().nth(1))
                .unwrap_or("/")
                .to_string();

            let reply = route(&base_for_thread, &path);
            let mut out = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
                reply.status,
                reply.body.len()
            );
            for header in &reply.headers {
                out.push_str(header);
                out.push_str("\r\n");
            }
            out.push_str("\r\n");
            out.push_str(&reply.body);
            stream.write_all(out.as_bytes()).unwrap();
            stream.flush().unwrap();
            seen.push(head);
        }
        seen
    });

    (base, handle)
}

fn client(base: &str) -> HttpCanvasClient {
    let config = CanvasApiConfig::new(format!("{base}/"), "test-token")
        .with_timeout(Duration::from_secs(10));
    HttpCanvasClient::new(config).unwrap()
}

#[test]
fn fetches_course_and_modules() {
    let (base, server) = serve(2, |_, path| match path {
        "/api/v1/courses/42" => Reply::ok(r#"{"id": 42, "name": "Data Structures", "course_code": "SER 222"}"#),
        "/api/v1/courses/42/modules" => Reply::ok(
            r#"[{"id": 1, "name": "Week 1", "position": 1}, {"id": 2, "position": 2}]"#,
        ),
        other => Reply::status("500 Internal Server Error", other),
    });

    let data = client(&base).fetch_course_data(42).unwrap();
    assert_eq!(data.course.id, 42);
    assert_eq!(data.course.name, "Data Structures");
    assert_eq!(data.course.course_code.as_deref(), Some("SER 222"));
    let names: Vec<&str> = data.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Week 1", "Module 2"]);

    let requests = server.join().unwrap();
    assert_eq!(requests.len(), 2);
    for head in &requests {
        let lower = head.to_ascii_lowercase();
        assert!(lower.contains("authorization: bearer test-token"), "{head}");
        assert!(lower.contains("accept: application/json"), "{head}");
    }
    assert!(requests[0].starts_with("GET /api/v1/courses/42 "));
    assert!(requests[1].starts_with("GET /api/v1/courses/42/modules "));
}

#[test]
fn follows_module_pagination() {
    let (base, server) = serve(3, |base, path| match path {
        "/api/v1/courses/7" => Reply::ok(r#"{"id": 7, "name": null, "course_code": "CSE 110"}"#),
        "/api/v1/courses/7/modules" => Reply::ok(r#"[{"id": 10, "name": "Intro"}]"#).with_header(
            format!(
                "Link: <{base}/api/v1/courses/7/modules?page=1>; rel=\"current\", \
                 <{base}/api/v1/courses/7/modules?page=2>; rel=\"next\""
            ),
        ),
        "/api/v1/courses/7/modules?page=2" => Reply::ok(r#"[{"id": 11, "name": "Loops"}]"#)
            .with_header(format!(
                "Link: <{base}/api/v1/courses/7/modules?page=1>; rel=\"first\""
            )),
        other => Reply::status("500 Internal Server Error", other),
    });

    let data = client(&base).fetch_course_data(7).unwrap();
    assert_eq!(data.course.name, "CSE 110");
    let ids: Vec<i64> = data.modules.iter().map(|m| m.id).collect();
    assert_eq!(ids, [10, 11]);
    assert_eq!(server.join().unwrap().len(), 3);
}

#[test]
fn self_referencing_next_link_fails() {
    let (base, server) = serve(2, |base, path| match path {
        "/api/v1/courses/7" => Reply::ok(r#"{"id": 7, "name": "Intro"}"#),
        _ => Reply::ok(r#"[{"id": 10, "name": "Intro"}]"#).with_header(format!(
            "Link: <{base}/api/v1/courses/7/modules>; rel=\"next\""
        )),
    });

    let err = client(&base).fetch_course_data(7).unwrap_err();
    assert!(matches!(err, CanvasError::Pagination(_)), "{err:?}");
    assert!(!err.is_retryable());
    assert_eq!(server.join().unwrap().len(), 2);
}

#[test]
fn missing_course_is_reported() {
    let (base, server) = serve(1, |_, _| {
        Reply::status("404 Not Found", r#"{"errors":[{"message":"The specified resource does not exist."}]}"#)
    });

    let err = client(&base).fetch_course_data(99).unwrap_err();
    assert!(matches!(err, CanvasError::CourseNotFound(99)), "{err:?}");
    server.join().unwrap();
}

#[test]
fn rejected_token_is_reported() {
    let (base, server) = serve(1, |_, _| Reply::status("401 Unauthorized", "{}"));

    let err = client(&base).fetch_course_data(1).unwrap_err();
    assert!(matches!(err, CanvasError::Unauthorized { status: 401 }));
    assert!(!err.is_retryable());
    server.join().unwrap();
}

#[test]
fn forbidden_without_rate_limit_is_an_api_error() {
    let (base, server) = serve(1, |_, _| {
        Reply::status("403 Forbidden", "user not authorized to perform that action")
            .with_header("X-Rate-Limit-Remaining: 650.0".to_string())
    });

    let err = client(&base).fetch_course_data(1).unwrap_err();
    assert!(
        matches!(err, CanvasError::Api { status: 403, .. }),
        "{err:?}"
    );
    server.join().unwrap();
}

#[test]
fn server_error_keeps_status_and_body() {
    let (base, server) = serve(1, |_, _| Reply::status("503 Service Unavailable", "maintenance"));

    match client(&base).fetch_course_data(1) {
        Err(err @ CanvasError::Api { .. }) => {
            assert!(err.is_retryable());
            let CanvasError::Api { status, message } = err else {
                unreachable!()
            };
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn throttled_request_is_rate_limited() {
    let (base, server) = serve(1, |_, _| {
        Reply::status("403 Forbidden", "403 Forbidden (Rate Limit Exceeded)")
            .with_header("X-Rate-Limit-Remaining: 0.0".to_string())
    });

    let err = client(&base).fetch_course_data(1).unwrap_err();
    assert!(matches!(err, CanvasError::RateLimited));
    server.join().unwrap();
}

#[test]
fn malformed_json_is_a_parse_error() {
    let (base, server) = serve(1, |_, _| Reply::ok("not json"));

    let err = client(&base).fetch_course_data(1).unwrap_err();
    assert!(matches!(err, CanvasError::JsonParse(_)));
    server.join().unwrap();
}
