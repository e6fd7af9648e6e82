//! Canvas client trait and its REST implementation.

use std::collections::HashSet;

use reqwest::StatusCode;
use reqwest::blocking::Response;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, LINK, USER_AGENT};
use serde::de::DeserializeOwned;

use gavel_model::{CanvasCourseData, CanvasModule};

use crate::config::CanvasApiConfig;
use crate::error::{CanvasError, Result};
use crate::types::{ApiCourse, ApiModule};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("gavel/", env!("CARGO_PKG_VERSION"));

/// Upper bound on module listing pages for one course.
const MAX_PAGES: usize = 100;

/// Source of Canvas course data.
///
/// Implementations are interchangeable; callers hold a `Box<dyn CanvasClient>`
/// or a generic parameter and never learn which one they were given.
pub trait CanvasClient {
    /// Fetches a course and all of its modules.
    fn fetch_course_data(&self, course_id: i64) -> Result<CanvasCourseData>;
}

impl<C: CanvasClient + ?Sized> CanvasClient for Box<C> {
    fn fetch_course_data(&self, course_id: i64) -> Result<CanvasCourseData> {
        (**self).fetch_course_data(course_id)
    }
}

/// Canvas REST API client authenticated with a bearer token.
#[derive(Debug, Clone)]
pub struct HttpCanvasClient {
    client: reqwest::blocking::Client,
    config: CanvasApiConfig,
}

impl HttpCanvasClient {
    /// Creates a client for the configured Canvas instance.
    ///
    /// Fails with [`CanvasError::Network`] if the token is not a valid header
    /// value or the HTTP client cannot be built.
    pub fn new(config: CanvasApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|e| CanvasError::Network(format!("invalid access token: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| CanvasError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Returns the connection settings.
    pub fn config(&self) -> &CanvasApiConfig {
        &self.config
    }

    /// Fetches every module of a course, following `rel="next"` links.
    ///
    /// Fails with [`CanvasError::Pagination`] rather than returning a partial
    /// listing when a link repeats or the page limit is reached.
    pub fn fetch_modules(&self, course_id: i64) -> Result<Vec<CanvasModule>> {
        let mut modules = Vec::new();
        let mut next = Some(self.config.build_url(&format!(
            "/api/v1/courses/{course_id}/modules"
        )));
        let mut visited = HashSet::new();

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                return Err(CanvasError::Pagination(format!(
                    "module listing for course {course_id} links back to {url}"
                )));
            }
            if visited.len() > MAX_PAGES {
                return Err(CanvasError::Pagination(format!(
                    "module listing for course {course_id} exceeds {MAX_PAGES} pages"
                )));
            }
            let (page, link) = self.get_page::<Vec<ApiModule>>(&url)?;
            modules.extend(page.into_iter().map(ApiModule::into_module));
            next = link.map(|href| self.config.build_url(&href));
        }

        tracing::debug!(
            course_id,
            modules = modules.len(),
            pages = visited.len(),
            "Fetched module listing"
        );
        Ok(modules)
    }

    fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<(T, Option<String>)> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let next = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(next_link);
        let body = handle_response(response)?;
        Ok((body, next))
    }
}

impl CanvasClient for HttpCanvasClient {
    fn fetch_course_data(&self, course_id: i64) -> Result<CanvasCourseData> {
        let url = self.config.build_url(&format!("/api/v1/courses/{course_id}"));
        let (course, _) = self
            .get_page::<ApiCourse>(&url)
            .map_err(|e| not_found_as_course(e, course_id))?;
        let course = course.into_course();
        let modules = self
            .fetch_modules(course_id)
            .map_err(|e| not_found_as_course(e, course_id))?;

        tracing::info!(
            course_id,
            course = %course.name,
            modules = modules.len(),
            "Fetched Canvas course"
        );
        Ok(CanvasCourseData { course, modules })
    }
}

fn not_found_as_course(err: CanvasError, course_id: i64) -> CanvasError {
    match err {
        CanvasError::Api { status: 404, .. } => CanvasError::CourseNotFound(course_id),
        other => other,
    }
}

/// Checks the status and decodes the JSON body.
fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    // Canvas throttles with 403 and an exhausted rate-limit bucket.
    if status == StatusCode::FORBIDDEN
        && response
            .headers()
            .get("x-rate-limit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<f64>().ok())
            .is_some_and(|remaining| remaining <= 0.0)
    {
        return Err(CanvasError::RateLimited);
    }

    if status == StatusCode::UNAUTHORIZED {
        return Err(CanvasError::Unauthorized {
            status: status.as_u16(),
        });
    }

    if !status.is_success() {
        let message = response.text().unwrap_or_default();
        return Err(CanvasError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let text = response.text()?;
    Ok(serde_json::from_str(&text)?)
}

/// Extracts the `rel="next"` target from a `Link` header value.
pub fn next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let mut segments = part.split(';');
        let target = segments.next()?.trim();
        let is_next = segments.any(|param| {
            let param = param.trim();
            param == "rel=\"next\"" || param == "rel=next"
        });
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}
