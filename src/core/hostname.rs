//! Best-effort host identity used for the default common fields

use super::content::CommonField;
use std::{env, fs, io};

/// Key of the default common field
pub const HOSTNAME_KEY: &str = "HostName";

/// Source of the host name, substitutable in tests
pub type HostnameSource = fn() -> io::Result<String>;

/// Resolve the host name of this machine
///
/// Tries the kernel and `/etc/hostname` first, then the `HOSTNAME` and
/// `COMPUTERNAME` environment variables.
pub fn hostname() -> io::Result<String> {
    for path in ["/proc/sys/kernel/hostname", "/etc/hostname"] {
        if let Ok(raw) = fs::read_to_string(path) {
            let name = raw.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }
    }
    for var in ["HOSTNAME", "COMPUTERNAME"] {
        if let Ok(raw) = env::var(var) {
            let name = raw.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }
    }
    Err(io::Error::new(io::ErrorKind::NotFound, "host name unavailable"))
}

/// `[HostName: <name>]`, or nothing when the lookup fails
pub fn default_common_fields(source: HostnameSource) -> Vec<CommonField> {
    match source() {
        Ok(name) => vec![CommonField::new(HOSTNAME_KEY, name)],
        Err(_) => Vec::new(),
    }
}
