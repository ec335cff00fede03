use std::io::{self, Write};

use crate::config::Config;
use crate::error::{QuoteError, Result};
use crate::repository::LineRepository;
use crate::selector;

/// Print `count` random lines from the named quote file, without a
/// trailing newline
pub fn run(
    program: &str,
    filename: Option<&str>,
    count: usize,
    config: &Config,
) -> Result<()> {
    let Some(filename) = filename.filter(|f| !f.is_empty()) else {
        return Err(QuoteError::MissingParameter {
            program: program.to_string(),
            extension: config.default_extension.clone(),
        });
    };

    let repo = LineRepository::new(config);
    let mut rng = selector::seeded_rng();

    let text = if count <= 1 {
        repo.random_quote(filename, &mut rng)?.text
    } else {
        repo.random_quotes(filename, count, &mut rng)?
            .into_iter()
            .map(|q| q.text)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_filename() {
        let config = Config::default();
        let err = run("get-quote", None, 1, &config).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::MissingParameter { ref extension, .. } if extension == ".lst"
        ));
    }

    #[test]
    fn test_empty_filename_is_missing() {
        let config = Config::default();
        assert!(matches!(
            run("get-quote", Some(""), 1, &config),
            Err(QuoteError::MissingParameter { .. })
        ));
    }
}
