//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, body
//! collection, route resolution, parameter binding, and conversion of
//! binding failures into error responses.

use http_body_util::{BodyExt, Full};
use hyper::body::{Body as _, Bytes};
use hyper::{header, Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::{pages, records};
use crate::binding::{self, BindError, ParamMap};
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{Resolution, RouteId};

/// Request context handed to every handler after binding sources are
/// collected: merged query/form parameters, captured path segments,
/// and the raw body for JSON-target handlers.
pub struct BindContext<'a> {
    pub params: ParamMap,
    pub path: ParamMap,
    pub content_type: Option<&'a str>,
    pub body: &'a [u8],
    pub is_head: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    // Reject oversized declared bodies before reading them
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_error(&format!("Failed to read request body: {e}"));
            return Ok(http::build_400_response("failed to read request body"));
        }
    };

    let response = dispatch(
        &state,
        &method,
        uri.path(),
        uri.query(),
        content_type.as_deref(),
        &body,
    );

    if state.config.logging.access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.to_string(),
            time: chrono::Local::now(),
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(ToString::to_string),
            status: response.status().as_u16(),
            body_bytes: response.body().size_hint().exact().unwrap_or(0),
            duration_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve, bind, and run the handler for one request.
///
/// Split out from `handle_request` so it works on plain values; the
/// async shell above only extracts them from the hyper types.
pub fn dispatch(
    state: &AppState,
    method: &Method,
    path: &str,
    query: Option<&str>,
    content_type: Option<&str>,
    body: &[u8],
) -> Response<Full<Bytes>> {
    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return resp;
    }

    let (id, path_params) = match state.router.resolve(method, path) {
        Resolution::Matched { id, path_params } => (id, path_params),
        Resolution::MethodNotAllowed { allowed } => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            return http::build_405_response(&allow_header(&allowed));
        }
        Resolution::NotFound => return http::build_404_response(),
    };

    let response = match build_context(method, query, content_type, body, path_params)
        .and_then(|ctx| run_handler(id, &ctx))
    {
        Ok(resp) => resp,
        Err(err) => bind_error_response(method, path, &err),
    };

    apply_cors(response, state.config.http.enable_cors)
}

/// Collect the binding sources for a request.
///
/// Request parameters are the query pairs followed by the form-body
/// pairs (form bodies only; other content types contribute nothing).
fn build_context<'a>(
    method: &Method,
    query: Option<&str>,
    content_type: Option<&'a str>,
    body: &'a [u8],
    path_params: ParamMap,
) -> Result<BindContext<'a>, BindError> {
    let mut params = match query {
        Some(q) => ParamMap::parse(q)?,
        None => ParamMap::new(),
    };
    params.extend(binding::form_params(content_type, body)?);

    Ok(BindContext {
        params,
        path: path_params,
        content_type,
        body,
        is_head: *method == Method::HEAD,
    })
}

fn run_handler(
    id: RouteId,
    ctx: &BindContext<'_>,
) -> Result<Response<Full<Bytes>>, BindError> {
    match id {
        RouteId::Index => pages::index(ctx),
        RouteId::People => pages::people(ctx),
        RouteId::GetRes1 => pages::get_res1(ctx),
        RouteId::GetRes2 => pages::get_res2(ctx),
        RouteId::GetRes3 => pages::get_res3(ctx),
        RouteId::GetRes4 => pages::get_res4(ctx),
        RouteId::GetRes5 => pages::get_res5(ctx),
        RouteId::IntroducePath => pages::introduce_path(ctx),
        RouteId::IntroduceQuery => pages::introduce_query(ctx),
        RouteId::PostRes1 => pages::post_res1(ctx),
        RouteId::PostRes2 => pages::post_res2(ctx),
        RouteId::PostRes3 => records::post_res3(ctx),
        RouteId::PostRes4 => records::post_res4(ctx),
        RouteId::PostRes7 => pages::post_res7(ctx),
        RouteId::DtoRes1 => records::dto_res1(ctx),
        RouteId::DtoRes2 => records::dto_res2(ctx),
        RouteId::DtoRes3 => records::dto_res3(ctx),
        RouteId::VoRes1 => records::vo_res1(ctx),
        RouteId::VoRes2 => records::vo_res2(ctx),
        RouteId::VoRes3 => records::vo_res3(ctx),
        RouteId::AxiosRes1 => records::axios_res1(ctx),
        RouteId::AxiosRes2 => records::axios_res2(ctx),
        RouteId::AxiosRes3 => records::axios_res3(ctx),
        RouteId::AxiosRes4 => records::axios_res4(ctx),
        RouteId::AxiosRes5 => records::axios_res5(ctx),
        RouteId::AxiosVoRes1 => records::axios_vo_res1(ctx),
        RouteId::AxiosVoRes2 => records::axios_vo_res2(ctx),
        RouteId::AxiosVoRes3 => records::axios_vo_res3(ctx),
        RouteId::AxiosVoRes4 => records::axios_vo_res4(ctx),
        RouteId::AxiosVoRes5 => records::axios_vo_res5(ctx),
    }
}

/// Check HTTP method and return an early response for anything other
/// than the verbs the demo serves
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD | Method::POST => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response("GET, HEAD, POST, OPTIONS"))
        }
    }
}

/// Validate Content-Length header against max body size
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get(header::CONTENT_LENGTH)?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Build the Allow header value for a 405 from the declared methods.
/// GET implies HEAD, and OPTIONS is always answered.
fn allow_header(allowed: &[Method]) -> String {
    let mut names: Vec<&str> = Vec::new();
    for method in allowed {
        names.push(method.as_str());
        if *method == Method::GET {
            names.push("HEAD");
        }
    }
    names.push("OPTIONS");
    names.join(", ")
}

fn bind_error_response(method: &Method, path: &str, err: &BindError) -> Response<Full<Bytes>> {
    logger::log_warning(&format!("Binding failed for {method} {path}: {err}"));
    match err.status() {
        hyper::StatusCode::UNSUPPORTED_MEDIA_TYPE => http::build_415_response(&err.to_string()),
        _ => http::build_400_response(&err.to_string()),
    }
}

fn apply_cors(mut response: Response<Full<Bytes>>, enable_cors: bool) -> Response<Full<Bytes>> {
    if enable_cors {
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::HeaderValue::from_static("*"),
        );
    }
    response
}
