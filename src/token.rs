// Token persistence: a single plain-text file holding the bearer token
// issued at login. Authenticated calls read it back to build the
// Authorization header.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::{debug, info, warn};

const TOKEN_FILE: &str = "token.txt";

#[derive(Debug, Clone)]
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    /// Overwrite the token file, creating the directory first if needed.
    pub fn save(&self, token: &str) -> io::Result<()> {
        create_dir(&self.dir)?;
        let path = self.path();
        write_file(&path, token.as_bytes())?;
        info!(path = %path.display(), "saved access token");
        Ok(())
    }

    /// Read the stored token, trimmed. Any read failure means "not logged in".
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(self.path()) {
            Ok(data) => Some(data.trim().to_string()),
            Err(e) => {
                debug!(error = %e, "no token available");
                None
            }
        }
    }

    /// Headers for an authenticated request, or `None` when there is no
    /// usable token.
    pub fn auth_headers(&self) -> Option<HeaderMap> {
        let token = self.load()?;
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                let mut headers = HeaderMap::new();
                headers.insert(AUTHORIZATION, value);
                Some(headers)
            }
            Err(_) => {
                warn!("token file contains characters not allowed in a header; ignoring it");
                None
            }
        }
    }
}

#[cfg(unix)]
fn create_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    if dir.is_dir() {
        return Ok(());
    }
    fs::DirBuilder::new().recursive(true).mode(0o755).create(dir)
}

#[cfg(not(unix))]
fn create_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents)
}
