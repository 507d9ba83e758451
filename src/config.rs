use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub store_name: String,
    pub window_width: f32,
    pub window_height: f32,
    pub typing_delay_min_ms: u64,
    pub typing_delay_max_ms: u64,
    pub welcome_delay_ms: u64,
}

/// Читает переменную окружения, при отсутствии или ошибке разбора берёт значение по умолчанию
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr>(key: &str, raw: &str, default: T) -> T {
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            log::warn!(
                "⚠️ Некорректное значение {}={:?}, используется значение по умолчанию",
                key,
                raw
            );
            default
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();

        let store_name = env::var("STORE_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Luxe Diamonds".to_string());

        Self {
            store_name,
            window_width: env_or("WINDOW_WIDTH", 420.0),
            window_height: env_or("WINDOW_HEIGHT", 680.0),
            // Ответ "печатается" 1-2 секунды
            typing_delay_min_ms: env_or("TYPING_DELAY_MIN_MS", 1000),
            typing_delay_max_ms: env_or("TYPING_DELAY_MAX_MS", 2000),
            welcome_delay_ms: env_or("WELCOME_DELAY_MS", 500),
        }
    }
}

impl Config {
    pub fn typing_delay(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.typing_delay_min_ms),
            Duration::from_millis(self.typing_delay_max_ms),
        )
    }

    pub fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_delay_ms)
    }

    pub fn window_title(&self) -> String {
        format!("{} Assistant", self.store_name)
    }
}
