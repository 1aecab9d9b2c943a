// src/core/net.rs
// Page sources. The parser only ever sees bytes; these produce them.
//
// HttpFetcher is a plain HTTP/1.0 GET over TCP, no TLS. HTTP/1.0 so the modem
// closes the connection at the end (no chunked transfer). Modems serve their
// status page on plain http on the LAN side.

use std::{
    fs,
    io::{Read, Write},
    net::{TcpStream, ToSocketAddrs},
    path::PathBuf,
};

use tracing::debug;
use url::{Position, Url};

use crate::config::consts::USER_AGENT;
use crate::config::options::FetchOptions;
use crate::error::FetchError;

// Room for the status line and headers on top of the body cap.
const HEADER_ALLOWANCE: usize = 64 * 1024;

/// Something that can hand over the raw status page.
pub trait Fetch {
    fn fetch(&self) -> Result<Vec<u8>, FetchError>;
}

pub struct HttpFetcher {
    host: String,
    port: u16,
    path: String,
    opts: FetchOptions,
}

impl HttpFetcher {
    pub fn new(opts: FetchOptions) -> Result<Self, FetchError> {
        let url = Url::parse(&opts.url).map_err(|e| FetchError::InvalidUrl {
            url: opts.url.clone(),
            reason: e.to_string(),
        })?;
        if url.scheme() != "http" {
            return Err(FetchError::UnsupportedScheme(s!(url.scheme())));
        }
        let host = url.host_str().ok_or_else(|| FetchError::InvalidUrl {
            url: opts.url.clone(),
            reason: s!("missing host"),
        })?;
        let host = s!(host);
        let port = url.port_or_known_default().unwrap_or(80);
        let path = s!(&url[Position::BeforePath..Position::AfterQuery]);

        Ok(Self { host, port, path, opts })
    }

    fn connect(&self) -> Result<TcpStream, FetchError> {
        let mut last_err = None;
        for addr in (self.host.as_str(), self.port).to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, self.opts.connect_timeout) {
                Ok(stream) => return Ok(stream),
                Err(e) => last_err = Some(e),
            }
        }
        Err(match last_err {
            Some(e) => FetchError::Io(e),
            None => FetchError::InvalidUrl { url: self.opts.url.clone(), reason: s!("host did not resolve") },
        })
    }
}

impl Fetch for HttpFetcher {
    /// 1. Connect with a timeout.
    /// 2. Send a GET with `Connection: close`.
    /// 3. Read until EOF, at most the body cap plus headers.
    /// 4. Require a 200 status line.
    /// 5. Return the body after the header section.
    fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let mut stream = self.connect()?;
        stream.set_read_timeout(Some(self.opts.io_timeout))?;
        stream.set_write_timeout(Some(self.opts.io_timeout))?;

        let host_header = if self.port == 80 { self.host.clone() } else { format!("{}:{}", self.host, self.port) };
        let req = format!(
            "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
            self.path, host_header, USER_AGENT
        );
        stream.write_all(req.as_bytes())?;
        stream.flush()?;

        let limit = self.opts.max_body_bytes;
        let mut buf = Vec::new();
        stream.take((limit + HEADER_ALLOWANCE + 1) as u64).read_to_end(&mut buf)?;

        let head_end = buf
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .ok_or_else(|| FetchError::MalformedResponse(s!("no end of headers")))?;

        let head = String::from_utf8_lossy(&buf[..head_end]);
        let status = head.split("\r\n").next().unwrap_or("");
        if status.split_whitespace().nth(1) != Some("200") {
            return Err(FetchError::Status { status: s!(status) });
        }

        let body = buf.split_off(head_end + 4);
        if body.len() > limit {
            return Err(FetchError::TooLarge { limit });
        }
        debug!(host = %self.host, path = %self.path, bytes = body.len(), "fetched");
        Ok(body)
    }
}

/// A page saved to disk (offline runs, fixtures).
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Fetch for FileFetcher {
    fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        Ok(fs::read(&self.path)?)
    }
}
