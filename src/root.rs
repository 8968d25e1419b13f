//! Content root resolution.
//!
//! The content root is the server directory holding `addons`, `lua`, etc.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::cli::prompt::Prompt;

/// Subdirectory every content root must contain
pub const ADDONS_DIR: &str = "addons";

/// Name of the generated script
pub const SCRIPT_NAME: &str = "fastdl.lua";

/// Inputs that end the root prompt without a directory
const CANCEL_WORDS: [&str; 2] = ["exit", "quit"];

/// A directory known to contain an `addons` subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRoot {
    path: PathBuf,
}

impl ContentRoot {
    /// Accept `path` if `<path>/addons` is a directory.
    pub fn open(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        path.join(ADDONS_DIR).is_dir().then_some(Self { path })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn addons_dir(&self) -> PathBuf {
        self.path.join(ADDONS_DIR)
    }

    /// `<root>/lua/autorun/server`
    pub fn autorun_server_dir(&self) -> PathBuf {
        self.path.join("lua").join("autorun").join("server")
    }

    /// `<root>/lua/autorun/server/fastdl.lua`
    pub fn autorun_script(&self) -> PathBuf {
        self.autorun_server_dir().join(SCRIPT_NAME)
    }

    /// `<root>/fastdl.lua`, used when the autorun directory is unavailable
    pub fn fallback_script(&self) -> PathBuf {
        self.path.join(SCRIPT_NAME)
    }

    /// Root path as shown to the operator.
    pub fn display(&self) -> std::path::Display<'_> {
        self.path().display()
    }
}

/// Why a candidate directory was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// `<path>/addons` exists but is not a directory
    NotADirectory(PathBuf),
    /// `<path>/addons` does not exist
    Missing(PathBuf),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotADirectory(p) => write!(f, "{} is not a directory.", p.display()),
            Self::Missing(p) => write!(f, "Unable to locate {}.", p.display()),
        }
    }
}

/// Check a candidate path the operator typed.
pub fn check_candidate(path: &Path) -> Result<ContentRoot, Rejection> {
    let addons = path.join(ADDONS_DIR);
    if addons.is_dir() {
        Ok(ContentRoot {
            path: path.to_path_buf(),
        })
    } else if addons.exists() {
        Err(Rejection::NotADirectory(addons))
    } else {
        Err(Rejection::Missing(addons))
    }
}

/// Resolve the content root, prompting until a valid one is entered.
///
/// Returns `None` when the operator cancels (`exit`, `quit` or end of input).
pub fn resolve_root<R: BufRead, W: Write>(
    default: &Path,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<ContentRoot>> {
    if let Some(root) = ContentRoot::open(default) {
        return Ok(Some(root));
    }

    prompt.say(&format!(
        "Could not find {} folder. Please specify the path of your garrysmod folder \
         relative to this program (or type 'exit' to cancel).",
        default.display()
    ))?;

    loop {
        let Some(line) = prompt.read_line()? else {
            return Ok(None);
        };
        if CANCEL_WORDS.contains(&line.to_lowercase().as_str()) {
            return Ok(None);
        }

        match check_candidate(Path::new(&line)) {
            Ok(root) => return Ok(Some(root)),
            Err(rejection) => prompt.say(&rejection.to_string())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn prompt(input: String) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    #[test]
    fn test_default_accepted_without_prompt() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("addons")).unwrap();

        let mut p = prompt(String::new());
        let root = resolve_root(dir.path(), &mut p).unwrap().unwrap();
        assert_eq!(root.path(), dir.path());
        assert!(p.into_output().is_empty());
    }

    #[test]
    fn test_reprompts_until_valid() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nowhere");
        let file_root = dir.path().join("file_root");
        fs::create_dir(&file_root).unwrap();
        fs::write(file_root.join("addons"), "not a dir").unwrap();
        let good = dir.path().join("server");
        fs::create_dir_all(good.join("addons")).unwrap();

        let input = format!(
            "{}\n{}\n{}\n",
            missing.display(),
            file_root.display(),
            good.display()
        );
        let mut p = prompt(input);
        let root = resolve_root(&dir.path().join("garrysmod"), &mut p)
            .unwrap()
            .unwrap();
        assert_eq!(root.path(), good);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.contains("Could not find"));
        assert!(output.contains(&format!("Unable to locate {}.", missing.join("addons").display())));
        assert!(output.contains(&format!("{} is not a directory.", file_root.join("addons").display())));
    }

    #[test]
    fn test_cancel_words_and_eof() {
        let dir = TempDir::new().unwrap();
        let default = dir.path().join("garrysmod");

        assert_eq!(resolve_root(&default, &mut prompt("exit\n".into())).unwrap(), None);
        assert_eq!(resolve_root(&default, &mut prompt("QUIT\n".into())).unwrap(), None);
        assert_eq!(resolve_root(&default, &mut prompt("bad\n".into())).unwrap(), None);
    }

    #[test]
    fn test_root_paths() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("addons")).unwrap();
        let root = ContentRoot::open(dir.path()).unwrap();

        assert_eq!(root.addons_dir(), dir.path().join("addons"));
        assert_eq!(
            root.autorun_script(),
            dir.path().join("lua/autorun/server/fastdl.lua")
        );
        assert_eq!(root.fallback_script(), dir.path().join("fastdl.lua"));
    }

    #[test]
    fn test_open_requires_addons() {
        let dir = TempDir::new().unwrap();
        assert!(ContentRoot::open(dir.path()).is_none());
    }
}
