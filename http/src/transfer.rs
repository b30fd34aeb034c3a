//! Blocking GET with libcurl. Call from `spawn_blocking` when used from async code.

use std::cell::RefCell;
use std::str;
use std::time::Duration;

use crate::options::ClientOptions;
use crate::request::RepoRequest;

/// Status, header lines and body of the final response.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    /// Header lines of the final response only (redirect hops dropped).
    pub header_lines: Vec<String>,
    pub body: Vec<u8>,
}

pub(crate) fn perform_get(
    request: &RepoRequest,
    client: &ClientOptions,
) -> Result<RawResponse, curl::Error> {
    let mut header_lines: Vec<String> = Vec::new();
    // Shared by the header and write callbacks.
    let body: RefCell<Vec<u8>> = RefCell::new(Vec::new());

    let mut easy = curl::easy::Easy::new();
    easy.url(&request.url)?;
    easy.get(true)?;
    easy.follow_location(client.follow_redirects)?;
    easy.max_redirections(client.max_redirects)?;
    easy.connect_timeout(Duration::from_secs(client.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(client.timeout_secs))?;
    if let Some(agent) = &client.user_agent {
        easy.useragent(agent)?;
    }
    if client.trust_all {
        easy.ssl_verify_peer(false)?;
        easy.ssl_verify_host(false)?;
    }

    let mut list = curl::easy::List::new();
    for (name, value) in &request.headers {
        list.append(&format!("{}: {}", name.trim(), value.trim()))?;
    }
    if !request.headers.is_empty() {
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(line) = str::from_utf8(data) {
                let line = line.trim_end();
                // Each redirect hop starts a new status line; keep the last block.
                if line.starts_with("HTTP/") {
                    header_lines.clear();
                    body.borrow_mut().clear();
                }
                if !line.is_empty() {
                    header_lines.push(line.to_string());
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            body.borrow_mut().extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(RawResponse {
        status: status as u16,
        header_lines,
        body: body.into_inner(),
    })
}
