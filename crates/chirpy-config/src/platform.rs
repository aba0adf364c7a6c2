use std::env;
use std::fmt;

/// Where the server is running. Only [`Platform::Dev`] may wipe the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Platform {
    Dev,
    #[default]
    Production,
}

impl Platform {
    pub fn from_env() -> Self {
        env::var("PLATFORM")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dev" => Platform::Dev,
            _ => Platform::Production,
        }
    }

    pub fn allows_reset(self) -> bool {
        self == Platform::Dev
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Dev => f.write_str("dev"),
            Platform::Production => f.write_str("production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_dev_allows_reset() {
        assert!(Platform::parse("dev").allows_reset());
        assert!(Platform::parse(" DEV ").allows_reset());
        assert!(!Platform::parse("production").allows_reset());
        assert!(!Platform::parse("").allows_reset());
        assert!(!Platform::parse("staging").allows_reset());
    }
}
