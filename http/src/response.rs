//! Mapping the repository's response onto the connector contract.

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use knotx_repository_connector::{FetchError, FetchResult};

use crate::transfer::RawResponse;

/// Parse response header lines (status line included or not) into a HeaderMap.
/// Lines that are not valid `Name: value` pairs are skipped.
pub(crate) fn parse_headers(lines: &[String]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with("HTTP/") {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = HeaderName::from_bytes(name.trim().as_bytes());
            let value = HeaderValue::from_str(value.trim());
            if let (Ok(name), Ok(value)) = (name, value) {
                headers.append(name, value);
            }
        }
    }
    headers
}

/// 2xx/3xx become a [`FetchResult`]; everything else a [`FetchError`].
pub(crate) fn into_fetch_result(
    location: &str,
    raw: RawResponse,
) -> Result<FetchResult, FetchError> {
    let status = StatusCode::from_u16(raw.status).map_err(|_| {
        FetchError::transport(location, format!("invalid HTTP status {}", raw.status))
    })?;

    if status.is_success() || status.is_redirection() {
        return Ok(FetchResult::ok(raw.body)
            .with_status(status)
            .with_headers(parse_headers(&raw.header_lines)));
    }

    let location = location.to_string();
    Err(match status {
        StatusCode::NOT_FOUND | StatusCode::GONE => FetchError::NotFound { location },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            FetchError::PermissionDenied { location }
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            FetchError::Timeout { location }
        }
        _ => FetchError::Upstream { location, status },
    })
}

/// curl failures: timeouts keep their kind, everything else is a transport failure.
pub(crate) fn from_curl_error(location: &str, err: &curl::Error) -> FetchError {
    if err.is_operation_timedout() {
        FetchError::Timeout {
            location: location.to_string(),
        }
    } else {
        FetchError::transport(location, err)
    }
}
