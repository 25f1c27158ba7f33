// src/loader.rs
//
// One attempt to fetch and parse a board's record file. No retry: a failed
// load is reported once by the caller (see board::present).

use std::{fmt, fs, path::PathBuf, str::FromStr};

use serde::de::DeserializeOwned;

use crate::{core::net, error::LoadError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Http { host: String, port: u16, path: String },
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(p) => write!(f, "{}", p.display()),
            Source::Http { host, port, path } => write!(f, "http://{host}:{port}{path}"),
        }
    }
}

impl FromStr for Source {
    type Err = String;

    /// `http://host[:port][/path]` or a file path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(s!("Empty source"));
        }
        if s.starts_with("https://") {
            return Err(format!("HTTPS is not supported: {s}"));
        }
        let Some(rest) = s.strip_prefix("http://") else {
            return Ok(Source::File(PathBuf::from(s)));
        };

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], s!(&rest[i..])),
            None => (rest, s!("/")),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => (h, p.parse::<u16>().map_err(|_| format!("Bad port in {s}"))?),
            None => (authority, 80),
        };
        if host.is_empty() {
            return Err(format!("Missing host in {s}"));
        }
        Ok(Source::Http { host: s!(host), port, path })
    }
}

/// Raw document text.
pub fn fetch(source: &Source) -> Result<String, LoadError> {
    match source {
        Source::File(path) => fs::read_to_string(path)
            .map_err(|e| LoadError::Io { path: path.clone(), source: e }),
        Source::Http { host, port, path } => net::http_get(host, *port, path),
    }
}

/// Fetch and parse a JSON array of records.
pub fn load<T: DeserializeOwned>(source: &Source) -> Result<Vec<T>, LoadError> {
    logd!("Load: fetching {}", source);
    let body = fetch(source)?;
    let records: Vec<T> = serde_json::from_str(&body)
        .map_err(|e| LoadError::Parse { target: source.to_string(), source: e })?;
    logf!("Load: {} → {} record(s)", source, records.len());
    Ok(records)
}
