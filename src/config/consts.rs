// src/config/consts.rs

// Net config
pub const DEFAULT_MODEM_URL: &str = "http://192.168.100.1/cgi-bin/status_cgi";
pub const CONNECT_TIMEOUT_SECS: u64 = 5;
pub const IO_TIMEOUT_SECS: u64 = 15;
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024; // status pages are a few KiB
pub const USER_AGENT: &str = concat!("modem_scrape/", env!("CARGO_PKG_VERSION"));

// Page layout (DG1670A firmware)
pub const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";
pub const DOWNSTREAM_LABEL: &str = "Downstream";
pub const UPSTREAM_LABEL: &str = "Upstream";
pub const DOWNSTREAM_SKIP_ROWS: usize = 1; // column headings
pub const UPSTREAM_SKIP_ROWS: usize = 2; // column headings + channel-type sub-heading

// Units
pub const MHZ_TO_KHZ: f64 = 1000.0;
pub const QAM_SUFFIX: &str = "QAM";
