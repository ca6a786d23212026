use phonofeat_algo::MAX_SEQUENCE;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub max_symbols: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let max_symbols = std::env::var("PHONOFEAT_MAX_SYMBOLS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|&limit| limit >= 1)
            .unwrap_or(MAX_SEQUENCE);

        Self {
            log_level,
            max_symbols,
        }
    }
}
