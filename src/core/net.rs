// src/core/net.rs
// Blocking HTTP over one shared ureq agent. Non-2xx statuses come back from
// ureq as errors, so callers only ever see a body on success.

use std::io::Read;
use std::time::Duration;

use serde::Serialize;

use crate::config::consts::{HOST, HTTP_TIMEOUT_SECS, MAX_PAGE_BYTES, USER_AGENT};
use crate::error::{Error, Result};

pub fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
}

/// `https://<HOST><path>`; `path` must start with `/`.
pub fn site_url(path: &str) -> String {
    join!("https://", HOST, path)
}

/// GET `url` and return the body as text, refusing bodies over `MAX_PAGE_BYTES`.
pub fn http_get(agent: &ureq::Agent, url: &str) -> Result<String> {
    let resp = agent.get(url).call().map_err(|e| Error::http(url, e))?;
    logd!("GET {} -> {}", url, resp.status());

    let mut body = String::new();
    resp.into_reader()
        .take(MAX_PAGE_BYTES + 1)
        .read_to_string(&mut body)
        .map_err(|source| Error::Body { url: s!(url), source })?;
    if body.len() as u64 > MAX_PAGE_BYTES {
        let source = std::io::Error::other(format!("body exceeds {MAX_PAGE_BYTES} bytes"));
        return Err(Error::Body { url: s!(url), source });
    }
    Ok(body)
}

/// POST `body` as JSON to `url`; returns the response status.
/// Errors only name the origin: webhook paths carry the token.
pub fn post_json<T: Serialize>(agent: &ureq::Agent, url: &str, body: &T) -> Result<u16> {
    let resp = agent
        .post(url)
        .send_json(body)
        .map_err(|e| Error::http(origin(url), e))?;
    Ok(resp.status())
}

/// Scheme and authority of `url`, e.g. `https://discord.com`.
pub fn origin(url: &str) -> &str {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    match url[after_scheme..].find('/') {
        Some(i) => &url[..after_scheme + i],
        None => url,
    }
}
