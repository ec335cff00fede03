use std::fmt;

/// A single line selected from a quote file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
}

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
