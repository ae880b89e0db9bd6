use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::typing::error::TypingError;

/// Name the external tool is looked up under on the search path.
pub const ANTECHAMBER: &str = "antechamber";

/// Handle to the external antechamber executable.
///
/// Discovery and invocation are separated so the capability can be injected:
/// tests (and non-PATH installs) construct the handle with an explicit path
/// instead of probing the environment.
pub struct Antechamber {
    executable: PathBuf,
}

impl Antechamber {
    /// Locates antechamber on the system search path.
    pub fn discover() -> Result<Self, TypingError> {
        let executable = which::which(ANTECHAMBER).map_err(|_| TypingError::ToolNotFound)?;
        Ok(Self { executable })
    }

    /// Uses an explicit executable instead of searching the path.
    pub fn at(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Re-asserts that the executable is still present and runnable.
    /// Checked on every call; the tool can vanish between discovery and use.
    pub fn ensure_available(&self) -> Result<(), TypingError> {
        which::which(&self.executable)
            .map(|_| ())
            .map_err(|_| TypingError::ToolNotFound)
    }

    /// Runs antechamber with the given arguments, its working directory set
    /// to `workdir`, capturing stdout and stderr. Blocks until the child
    /// exits. A spawn failure surfaces as `Launch` with the OS error intact.
    pub fn run<I, S>(&self, workdir: &Path, args: I) -> Result<Output, TypingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Command::new(&self.executable)
            .args(args)
            .current_dir(workdir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(TypingError::Launch)
    }
}
