//! Line repository
//!
//! Resolves a logical quote-file name under the configured base directory
//! and reads its non-blank lines.

use rand::Rng;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{QuoteError, Result};
use crate::models::Quote;
use crate::selector;

/// Quote files stored as flat files under one base directory
pub struct LineRepository<'a> {
    config: &'a Config,
}

impl<'a> LineRepository<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn base_dir(&self) -> &Path {
        &self.config.files_base_dir
    }

    pub fn extension(&self) -> &str {
        &self.config.default_extension
    }

    /// Append the configured extension unless `name` already ends with it
    pub fn normalize_name(&self, name: &str) -> String {
        let ext = self.extension();
        if name.ends_with(ext) {
            name.to_string()
        } else {
            format!("{}{}", name, ext)
        }
    }

    /// Full path of the quote file called `name`
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_dir().join(self.normalize_name(name))
    }

    /// Read the candidate lines of a quote file.
    ///
    /// Blank lines are skipped and trailing whitespace is stripped from the
    /// rest. A file with no candidates is an `EmptyFile` error.
    pub fn read_lines(&self, name: &str) -> Result<Vec<String>> {
        let path = self.resolve_path(name);
        log::debug!("Reading quotes from {}", path.display());

        // Only a missing entry is "not found"; any other stat failure is an open error
        match fs::metadata(&path) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(QuoteError::FileNotFound { path });
            }
            Err(source) => return Err(QuoteError::FileOpen { path, source }),
        }

        let file = match File::open(&path) {
            Ok(f) => f,
            Err(source) => return Err(QuoteError::FileOpen { path, source }),
        };

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(l) => l,
                Err(source) => return Err(QuoteError::FileOpen { path, source }),
            };

            if line.trim().is_empty() {
                continue;
            }
            lines.push(line.trim_end().to_string());
        }

        if lines.is_empty() {
            return Err(QuoteError::EmptyFile { path });
        }

        log::debug!("{} candidate lines in {}", lines.len(), path.display());
        Ok(lines)
    }

    /// Pick one random line from the quote file called `name`
    pub fn random_quote<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Result<Quote> {
        let lines = self.read_lines(name)?;
        let text = selector::pick(&lines, rng).ok_or_else(|| QuoteError::EmptyFile {
            path: self.resolve_path(name),
        })?;
        Ok(Quote::new(text))
    }

    /// Pick up to `count` distinct random lines, in file order
    pub fn random_quotes<R: Rng + ?Sized>(
        &self,
        name: &str,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Quote>> {
        let lines = self.read_lines(name)?;
        Ok(selector::pick_many(&lines, count, rng)
            .into_iter()
            .map(Quote::new)
            .collect())
    }

    /// Names of the quote files in the base directory, without extension
    pub fn available_files(&self) -> Result<Vec<String>> {
        let base_dir = self.base_dir();
        if !base_dir.is_dir() {
            return Err(QuoteError::Config(format!(
                "Directory '{}' not found",
                base_dir.display()
            )));
        }

        let ext = self.extension();
        let mut names = Vec::new();

        // Walk directory (max depth 1 - no recursion)
        for entry in WalkDir::new(base_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let cause = match e.io_error() {
                    Some(io_err) => io_err.to_string(),
                    None => e.to_string(),
                };
                QuoteError::Config(format!(
                    "Error reading directory '{}': {}",
                    base_dir.display(),
                    cause
                ))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };

            if let Some(stem) = file_name.strip_suffix(ext) {
                if !stem.is_empty() {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn config_for(dir: &Path) -> Config {
        Config {
            files_base_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_normalize_name() {
        let config = Config::default();
        let repo = LineRepository::new(&config);

        assert_eq!(repo.normalize_name("quotes"), "quotes.lst");
        assert_eq!(repo.normalize_name("quotes.lst"), "quotes.lst");
        assert_eq!(repo.normalize_name("quotes.txt"), "quotes.txt.lst");
    }

    #[test]
    fn test_resolve_path_joins_base_dir() {
        let config = Config::default();
        let repo = LineRepository::new(&config);

        assert_eq!(
            repo.resolve_path("citas"),
            PathBuf::from("src/files/citas.lst")
        );
    }

    #[test]
    fn test_read_lines_skips_blank_lines() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("quotes.lst"), "a\n\nb\n   \t\nc\n").unwrap();
        let config = config_for(temp.path());
        let repo = LineRepository::new(&config);

        assert_eq!(repo.read_lines("quotes").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_read_lines_strips_trailing_whitespace() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("quotes.lst"),
            "first line  \r\n  indented\t\nlast",
        )
        .unwrap();
        let config = config_for(temp.path());
        let repo = LineRepository::new(&config);

        assert_eq!(
            repo.read_lines("quotes").unwrap(),
            vec!["first line", "  indented", "last"]
        );
    }

    #[test]
    fn test_name_with_and_without_extension_are_equivalent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("quotes.lst"), "one\ntwo\n").unwrap();
        let config = config_for(temp.path());
        let repo = LineRepository::new(&config);

        assert_eq!(
            repo.read_lines("quotes").unwrap(),
            repo.read_lines("quotes.lst").unwrap()
        );
    }

    #[test]
    fn test_missing_file_reports_full_path() {
        let temp = TempDir::new().unwrap();
        let config = config_for(temp.path());
        let repo = LineRepository::new(&config);

        let err = repo.read_lines("nope").unwrap_err();
        match &err {
            QuoteError::FileNotFound { path } => {
                assert_eq!(path, &temp.path().join("nope.lst"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err
            .to_string()
            .contains(&temp.path().join("nope.lst").display().to_string()));
    }

    #[test]
    fn test_directory_is_open_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dir.lst")).unwrap();
        let config = config_for(temp.path());
        let repo = LineRepository::new(&config);

        assert!(matches!(
            repo.read_lines("dir"),
            Err(QuoteError::FileOpen { .. })
        ));
    }

    #[test]
    fn test_base_dir_not_a_directory_is_open_error() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("base");
        fs::write(&base, "not a directory\n").unwrap();
        let config = config_for(&base);
        let repo = LineRepository::new(&config);

        match repo.read_lines("quotes") {
            Err(QuoteError::FileOpen { path, .. }) => {
                assert_eq!(path, base.join("quotes.lst"));
            }
            other => panic!("expected open error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_open_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bin.lst"), [0xff, 0xfe, b'\n']).unwrap();
        let config = config_for(temp.path());
        let repo = LineRepository::new(&config);

        assert!(matches!(
            repo.read_lines("bin"),
            Err(QuoteError::FileOpen { .. })
        ));
    }

    #[test]
    fn test_blank_file_is_empty_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("empty.lst"), "\n\n   \n").unwrap();
        let config = config_for(temp.path());
        let repo = LineRepository::new(&config);

        assert!(matches!(
            repo.random_quote("empty", &mut StdRng::seed_from_u64(1)),
            Err(QuoteError::EmptyFile { .. })
        ));
    }

    #[test]
    fn test_random_quote_is_always_a_candidate() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("quotes.lst"), "a\n\nb\nc\n").unwrap();
        fs::write(temp.path().join("other.lst"), "zzz\n").unwrap();
        let config = config_for(temp.path());
        let repo = LineRepository::new(&config);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let quote = repo.random_quote("quotes", &mut rng).unwrap();
            assert!(["a", "b", "c"].contains(&quote.text.as_str()));
        }
    }

    #[test]
    fn test_random_quotes_are_distinct() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("quotes.lst"), "a\nb\nc\nd\n").unwrap();
        let config = config_for(temp.path());
        let repo = LineRepository::new(&config);
        let mut rng = StdRng::seed_from_u64(5);

        let quotes = repo.random_quotes("quotes", 3, &mut rng).unwrap();
        assert_eq!(quotes.len(), 3);
        assert_ne!(quotes[0], quotes[1]);
        assert_ne!(quotes[1], quotes[2]);
        assert_ne!(quotes[0], quotes[2]);
    }

    #[test]
    fn test_available_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("zen.lst"), "z\n").unwrap();
        fs::write(temp.path().join("citas.lst"), "c\n").unwrap();
        fs::write(temp.path().join("notes.txt"), "n\n").unwrap();
        fs::create_dir(temp.path().join("nested.lst")).unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/deep.lst"), "d\n").unwrap();
        let config = config_for(temp.path());
        let repo = LineRepository::new(&config);

        assert_eq!(repo.available_files().unwrap(), vec!["citas", "zen"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_base_dir_names_directory_once() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let base = temp.path().join("locked");
        fs::create_dir(&base).unwrap();
        fs::set_permissions(&base, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still read the directory
        if fs::read_dir(&base).is_ok() {
            fs::set_permissions(&base, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let config = config_for(&base);
        let repo = LineRepository::new(&config);
        let message = repo.available_files().unwrap_err().to_string();
        fs::set_permissions(&base, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(message.contains("Error reading directory"));
        assert_eq!(message.matches(&base.display().to_string()).count(), 1);
    }

    #[test]
    fn test_available_files_missing_dir() {
        let temp = TempDir::new().unwrap();
        let config = config_for(&temp.path().join("missing"));
        let repo = LineRepository::new(&config);

        let err = repo.available_files().unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
