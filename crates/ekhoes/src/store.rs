//! Token persistence.
//!
//! The token lives as raw bytes in a single file under a per-user directory,
//! readable and writable by the owner only. No locking is done: each CLI run
//! is a separate single-threaded process, so two invocations racing on the
//! file (a login against a logout) can interleave. Known limitation of a
//! single-user local tool.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::token::Token;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Name of the token file inside the store directory.
const TOKEN_FILE: &str = "token";

/// Persists and retrieves the single bearer token.
///
/// Exclusively owns the on-disk representation; everything else borrows the
/// token value per call through [`load`](TokenStore::load).
#[derive(Debug, Clone)]
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    /// Open a store rooted at the given directory. The directory is created
    /// lazily on the first [`save`](TokenStore::save).
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    /// True iff the token file exists and is a regular file.
    ///
    /// Not-found is a normal answer; any other filesystem error is surfaced.
    pub fn exists(&self) -> Result<bool, Error> {
        match fs::metadata(self.token_path()) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Load the persisted token.
    pub fn load(&self) -> Result<Token, Error> {
        match fs::read_to_string(self.token_path()) {
            Ok(raw) => Ok(Token::new(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(Error::NotFound("no saved token".to_string()))
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Persist a token, replacing any previous one.
    ///
    /// Writes to a temporary sibling and renames it into place so a partial
    /// write is never observable. The file gets mode 0600 and the containing
    /// directory 0700, created if absent.
    pub fn save(&self, token: &Token) -> Result<(), Error> {
        create_private_dir(&self.dir)?;

        let tmp = self.dir.join("token.tmp");
        fs::write(&tmp, token.as_str())?;

        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&tmp)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&tmp, perms)?;
        }

        fs::rename(&tmp, self.token_path())?;
        Ok(())
    }

    /// Remove the token file.
    pub fn delete(&self) -> Result<(), Error> {
        match fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(Error::NotFound("no saved token".to_string()))
            }
            Err(e) => Err(Error::Io(e)),
        }
    }
}

/// Create a directory accessible by the owner only (0700).
fn create_private_dir(dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(dir)?;

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(dir)?.permissions();
        perms.set_mode(0o700);
        fs::set_permissions(dir, perms)?;
    }

    Ok(())
}
