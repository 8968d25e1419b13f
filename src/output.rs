//! Writing the generated script.
//!
//! Destinations are tried in order:
//! 1. `<root>/lua/autorun/server/fastdl.lua` when the directory exists
//! 2. the same path after creating the directory chain
//! 3. `<root>/fastdl.lua`, which the operator has to move by hand
//!
//! If the write itself fails the script is echoed to the terminal instead.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::logger::{Status, StatusReporter};
use crate::root::ContentRoot;
use crate::script::EmittedScript;

/// Pause before echoing the script, so the warning can be read.
pub const ECHO_DELAY: Duration = Duration::from_secs(5);

/// Mode of the written script: owner read/write, group/other read.
#[cfg(unix)]
const SCRIPT_MODE: u32 = 0o644;

#[derive(Debug, Error)]
#[error("failed to write `{}`", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Where the script ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Written into `lua/autorun/server`
    Autorun(PathBuf),
    /// Written to the content root; must be moved manually
    Fallback(PathBuf),
    /// Printed to the terminal
    Terminal,
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Autorun(path) | Self::Fallback(path) => write!(f, "{}", path.display()),
            Self::Terminal => f.write_str("terminal"),
        }
    }
}

/// Writes the script using the layered fallback.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    echo_delay: Duration,
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new(ECHO_DELAY)
    }
}

impl OutputWriter {
    pub const fn new(echo_delay: Duration) -> Self {
        Self { echo_delay }
    }

    /// Write `script` under `root`, reporting each step to `status`.
    pub fn write(
        &self,
        root: &ContentRoot,
        script: &EmittedScript,
        status: &mut dyn StatusReporter,
    ) -> Destination {
        let server_dir = root.autorun_server_dir();
        let shown_dir = format!("{}/lua/autorun/server", root.display());

        status.step(&format!("Scanning for directory {shown_dir}"));
        if server_dir.is_dir() {
            status.finish(Status::Success);
            return self.write_autorun(root, script, status);
        }
        status.finish(Status::Fail);

        status.step(&format!("Attempting to create directory {shown_dir}"));
        if let Err(e) = fs::create_dir_all(&server_dir) {
            crate::debug!("fastdl"; "create {}: {}", server_dir.display(), e);
        }
        if server_dir.is_dir() {
            status.finish(Status::Success);
            return self.write_autorun(root, script, status);
        }
        status.finish(Status::Fail);

        let path = root.fallback_script();
        status.step(&format!("Writing to temporary file in {}", path.display()));
        let destination = match write_script(&path, script) {
            Ok(()) => {
                status.finish(Status::Success);
                Destination::Fallback(path)
            }
            Err(e) => self.echo(script, &e, status),
        };
        status.warn(
            "YOU MUST MOVE THE 'fastdl.lua' FILE TO YOUR 'lua/autorun/server' FOLDER \
             IN YOUR GMOD SERVER BEFORE YOUR FASTDL WILL WORK",
        );
        destination
    }

    fn write_autorun(
        &self,
        root: &ContentRoot,
        script: &EmittedScript,
        status: &mut dyn StatusReporter,
    ) -> Destination {
        let path = root.autorun_script();
        status.step("Writing file 'fastdl.lua'");
        match write_script(&path, script) {
            Ok(()) => {
                status.finish(Status::Success);
                Destination::Autorun(path)
            }
            Err(e) => self.echo(script, &e, status),
        }
    }

    /// Last resort: print the script so it is not lost.
    fn echo(
        &self,
        script: &EmittedScript,
        error: &WriteError,
        status: &mut dyn StatusReporter,
    ) -> Destination {
        status.finish(Status::Fail);
        crate::debug!("fastdl"; "{}: {}", error, error.source);
        status.warn("FAILED TO WRITE FASTDL TO FILE");
        status.warn(&format!(
            "Echoing output to terminal in {} seconds",
            self.echo_delay.as_secs()
        ));
        std::thread::sleep(self.echo_delay);
        status.echo(script.as_str());
        Destination::Terminal
    }
}

/// Write the script as UTF-8, truncating any previous file.
fn write_script(path: &Path, script: &EmittedScript) -> Result<(), WriteError> {
    let to_error = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(SCRIPT_MODE);
    }

    let mut file = options.open(path).map_err(to_error)?;
    file.write_all(script.as_str().as_bytes()).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::RecordingStatus;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ContentRoot) {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("addons")).unwrap();
        let root = ContentRoot::open(dir.path()).unwrap();
        (dir, root)
    }

    fn script() -> EmittedScript {
        EmittedScript::new(&[], &["models/foo.mdl".to_string()])
    }

    fn writer() -> OutputWriter {
        OutputWriter::new(Duration::ZERO)
    }

    #[test]
    fn test_writes_into_existing_autorun_dir() {
        let (_dir, root) = setup();
        fs::create_dir_all(root.autorun_server_dir()).unwrap();

        let mut status = RecordingStatus::default();
        let destination = writer().write(&root, &script(), &mut status);

        assert_eq!(destination, Destination::Autorun(root.autorun_script()));
        assert_eq!(fs::read_to_string(root.autorun_script()).unwrap(), script().as_str());
        assert_eq!(status.status_of("Scanning for directory"), Some(Status::Success));
        assert_eq!(status.status_of("Attempting"), None);
    }

    #[test]
    fn test_creates_missing_autorun_dir() {
        let (_dir, root) = setup();

        let mut status = RecordingStatus::default();
        let destination = writer().write(&root, &script(), &mut status);

        assert_eq!(destination, Destination::Autorun(root.autorun_script()));
        assert!(root.autorun_script().is_file());
        assert_eq!(status.status_of("Scanning for directory"), Some(Status::Fail));
        assert_eq!(status.status_of("Attempting"), Some(Status::Success));
        assert_eq!(status.status_of("Writing file"), Some(Status::Success));
    }

    #[test]
    fn test_falls_back_to_root_when_creation_blocked() {
        let (_dir, root) = setup();
        // a plain file named `lua` makes the directory chain impossible
        fs::write(root.path().join("lua"), "").unwrap();

        let mut status = RecordingStatus::default();
        let destination = writer().write(&root, &script(), &mut status);

        assert_eq!(destination, Destination::Fallback(root.fallback_script()));
        assert_eq!(fs::read_to_string(root.fallback_script()).unwrap(), script().as_str());
        assert_eq!(status.status_of("Attempting"), Some(Status::Fail));
        assert_eq!(status.status_of("temporary file"), Some(Status::Success));
        assert_eq!(status.status_of("YOU MUST MOVE"), Some(Status::Warning));
    }

    #[test]
    fn test_echoes_when_write_fails() {
        let (_dir, root) = setup();
        // a directory where the script should go makes the write fail
        fs::create_dir_all(root.autorun_script()).unwrap();

        let mut status = RecordingStatus::default();
        let destination = writer().write(&root, &script(), &mut status);

        assert_eq!(destination, Destination::Terminal);
        assert_eq!(status.status_of("Writing file"), Some(Status::Fail));
        assert_eq!(status.status_of("FAILED TO WRITE"), Some(Status::Warning));
        assert_eq!(status.echoed, vec![script().as_str().to_string()]);
    }

    #[test]
    fn test_overwrites_previous_script() {
        let (_dir, root) = setup();
        fs::create_dir_all(root.autorun_server_dir()).unwrap();
        fs::write(root.autorun_script(), "old contents that are longer than the new ones").unwrap();

        writer().write(&root, &script(), &mut RecordingStatus::default());
        assert_eq!(fs::read_to_string(root.autorun_script()).unwrap(), script().as_str());
    }

    #[cfg(unix)]
    #[test]
    fn test_script_mode() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, root) = setup();
        writer().write(&root, &script(), &mut RecordingStatus::default());

        let mode = fs::metadata(root.autorun_script()).unwrap().permissions().mode();
        // umask may only clear bits
        assert_eq!(mode & 0o777 & !0o644, 0);
        assert_ne!(mode & 0o600, 0);
    }
}
