use std::time::Duration;

/// Connection settings shared by every action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    pub url: String,
    pub timeout: Option<Duration>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(url: String) -> Self {
        Self { url, timeout: None }
    }

    pub fn set_timeout(&mut self, seconds: u64) {
        self.timeout = Some(Duration::from_secs(seconds));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let mut args = GlobalArgs::new("http://localhost:8000".to_string());
        assert_eq!(args.url, "http://localhost:8000");
        assert_eq!(args.timeout, None);

        args.set_timeout(5);
        assert_eq!(args.timeout, Some(Duration::from_secs(5)));
    }
}
