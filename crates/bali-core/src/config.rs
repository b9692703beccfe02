//! Configuration management
//!
//! 設定は以下の優先順位で読み込まれます:
//! 1. 環境変数
//! 2. bali-bot.toml 設定ファイル
//! 3. デフォルト値
//!
//! 設定ファイル内では `${VAR_NAME}` 形式で環境変数を展開できます。

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::{Error, Result};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "bali-bot.toml";

/// Which reply set the bot serves
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BotMode {
    /// Bali real-estate bot (rich menu, Airtable listings)
    #[default]
    Property,
    /// Generic template / product catalog demo
    Catalog,
}

impl BotMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "property" => Some(Self::Property),
            "catalog" => Some(Self::Catalog),
            _ => None,
        }
    }
}

/// LINE channel credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineConfig {
    #[serde(default)]
    pub channel_secret: String,
    #[serde(default)]
    pub channel_access_token: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Public URL used to qualify static image paths
    #[serde(default)]
    pub base_url: Option<String>,

    /// Directory served under `/images`
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// Deployment environment name, reported by `/health`
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            base_url: None,
            public_dir: default_public_dir(),
            environment: default_environment(),
        }
    }
}

/// Airtable ("remote store") configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirtableSettings {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub base_id: Option<String>,

    /// Table names tried in order
    #[serde(default = "default_tables")]
    pub tables: Vec<String>,

    /// Upper bound on rows per lookup
    #[serde(default = "default_max_records")]
    pub max_records: usize,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log the observed `area` values when a lookup comes back empty
    #[serde(default)]
    pub diagnostics: bool,

    /// Serve sample listings when the store rejects our credentials
    #[serde(default)]
    pub demo_fallback: bool,
}

impl Default for AirtableSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_id: None,
            tables: default_tables(),
            max_records: default_max_records(),
            timeout_secs: default_timeout_secs(),
            diagnostics: false,
            demo_fallback: false,
        }
    }
}

impl AirtableSettings {
    /// Both credentials are present
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
            && self.base_id.as_deref().is_some_and(|b| !b.is_empty())
    }
}

/// Static card content configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// External booking form linked from the inspection card
    #[serde(default = "default_booking_form_url")]
    pub booking_form_url: String,

    /// Appended as `?v=` to static image URLs when set
    #[serde(default)]
    pub asset_version: Option<String>,

    /// Image used for listings without a photo; `{base_url}/images/no-image.jpg` when unset
    #[serde(default)]
    pub placeholder_image: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            booking_form_url: default_booking_form_url(),
            asset_version: None,
            placeholder_image: None,
        }
    }
}

/// Bot behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub mode: BotMode,
}

/// Main configuration for bali-bot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub line: LineConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub airtable: AirtableSettings,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub bot: BotConfig,
}

fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> String {
    "public/images".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_tables() -> Vec<String> {
    vec!["Properties".to_string(), "Table 1".to_string()]
}

fn default_max_records() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_booking_form_url() -> String {
    "https://forms.google.com".to_string()
}

impl Config {
    /// 設定ファイルから環境変数を展開する
    ///
    /// `${VAR_NAME}` 形式の文字列を環境変数の値に置換します。
    /// 環境変数が存在しない場合は空文字列になります。
    fn expand_env_vars(value: &str) -> String {
        let mut result = String::with_capacity(value.len());
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' && chars.peek() == Some(&'{') {
                chars.next(); // '{' を消費

                let mut var_name = String::new();
                while let Some(c) = chars.next_if(|&c| c != '}') {
                    var_name.push(c);
                }
                chars.next(); // '}' を消費

                if let Ok(env_value) = std::env::var(&var_name) {
                    result.push_str(&env_value);
                }
            } else {
                result.push(c);
            }
        }

        result
    }

    /// TOML 文字列から設定を読み込む（環境変数の上書きなし）
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let expanded = Self::expand_env_vars(content);
        toml::from_str(&expanded).map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// TOML 設定ファイルから設定を読み込む
    ///
    /// 設定ファイル内の `${VAR_NAME}` は環境変数の値に置換され、
    /// その後、既存の環境変数で上書きされます。
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file {}: {}", path.display(), e)))?;

        let mut cfg = Self::from_toml_str(&content)?;
        cfg.apply_env_overrides();

        info!("Loaded configuration from {}", path.display());
        Ok(cfg)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.apply_env_overrides();
        cfg
    }

    /// 設定を読み込む
    ///
    /// 1. 明示的に指定されたパス
    /// 2. `./bali-bot.toml`
    /// 3. 見つからない場合は環境変数のみ
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_toml_file(path);
        }

        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::from_toml_file(DEFAULT_CONFIG_FILE);
        }

        Ok(Self::from_env())
    }

    /// 環境変数で設定を上書きする
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a key lookup; empty values are ignored
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |keys: &[&str]| {
            keys.iter()
                .filter_map(|&k| lookup(k))
                .find(|v| !v.is_empty())
        };
        let flag = |v: String| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no" | "off");
        let list = |v: String| -> Vec<String> {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };

        // LINE 設定の上書き
        if let Some(secret) = get(&["LINE_CHANNEL_SECRET", "CHANNEL_SECRET"]) {
            self.line.channel_secret = secret;
        }
        if let Some(token) = get(&["LINE_CHANNEL_ACCESS_TOKEN", "CHANNEL_ACCESS_TOKEN"]) {
            self.line.channel_access_token = token;
        }

        // サーバー設定の上書き
        if let Some(port) = get(&["PORT"]).and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(url) = get(&["BASE_URL"]) {
            self.server.base_url = Some(url);
        }
        if let Some(dir) = get(&["PUBLIC_DIR"]) {
            self.server.public_dir = dir;
        }
        if let Some(env) = get(&["APP_ENV"]) {
            self.server.environment = env;
        }

        // Airtable 設定の上書き
        if let Some(key) = get(&["AIRTABLE_API_KEY"]) {
            self.airtable.api_key = Some(key);
        }
        if let Some(base) = get(&["AIRTABLE_BASE_ID"]) {
            self.airtable.base_id = Some(base);
        }
        if let Some(tables) = get(&["AIRTABLE_TABLES"]).map(list).filter(|t| !t.is_empty()) {
            self.airtable.tables = tables;
        }
        if let Some(max) = get(&["AIRTABLE_MAX_RECORDS"]).and_then(|m| m.parse().ok()) {
            self.airtable.max_records = max;
        }
        if let Some(secs) = get(&["AIRTABLE_TIMEOUT_SECS"]).and_then(|s| s.parse().ok()) {
            self.airtable.timeout_secs = secs;
        }
        if let Some(enabled) = get(&["AIRTABLE_DIAGNOSTICS"]) {
            self.airtable.diagnostics = flag(enabled);
        }
        if let Some(enabled) = get(&["AIRTABLE_DEMO_FALLBACK"]) {
            self.airtable.demo_fallback = flag(enabled);
        }

        // コンテンツ設定の上書き
        if let Some(url) = get(&["GOOGLE_FORM_URL"]) {
            self.content.booking_form_url = url;
        }
        if let Some(version) = get(&["ASSET_VERSION"]) {
            self.content.asset_version = Some(version);
        }
        if let Some(image) = get(&["PLACEHOLDER_IMAGE_URL"]) {
            self.content.placeholder_image = Some(image);
        }

        if let Some(mode) = get(&["BOT_MODE"]).and_then(|m| BotMode::parse(&m)) {
            self.bot.mode = mode;
        }
    }

    /// Check required settings
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.line.channel_secret.is_empty() {
            missing.push("LINE_CHANNEL_SECRET");
        }
        if self.line.channel_access_token.is_empty() {
            missing.push("LINE_CHANNEL_ACCESS_TOKEN");
        }

        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "Missing required settings: {}",
                missing.join(", ")
            )));
        }

        if self.airtable.max_records == 0 {
            return Err(Error::Config("airtable.max_records must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Public base URL without a trailing slash
    pub fn base_url(&self) -> String {
        match &self.server.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.server.port),
        }
    }

    /// Whether the process runs in production
    pub fn is_production(&self) -> bool {
        self.server.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.public_dir, "public/images");
        assert_eq!(config.airtable.tables, vec!["Properties", "Table 1"]);
        assert_eq!(config.airtable.max_records, 10);
        assert!(!config.airtable.diagnostics);
        assert!(!config.airtable.demo_fallback);
        assert_eq!(config.content.booking_form_url, "https://forms.google.com");
        assert_eq!(config.bot.mode, BotMode::Property);
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_validate_requires_line_credentials() {
        let mut config = Config::default();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("LINE_CHANNEL_SECRET"));
        assert!(err.contains("LINE_CHANNEL_ACCESS_TOKEN"));

        config.line.channel_secret = "secret".to_string();
        config.line.channel_access_token = "token".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_expand_env_vars() {
        // テスト用環境変数を設定
        unsafe {
            std::env::set_var("BALI_BOT_TEST_VAR", "test_value");
        }

        let result = Config::expand_env_vars("prefix_${BALI_BOT_TEST_VAR}_suffix");
        assert_eq!(result, "prefix_test_value_suffix");

        // 存在しない環境変数
        let result = Config::expand_env_vars("prefix_${BALI_BOT_NONEXISTENT}_suffix");
        assert_eq!(result, "prefix__suffix");

        unsafe {
            std::env::remove_var("BALI_BOT_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_env_vars_passthrough() {
        assert_eq!(Config::expand_env_vars("no_vars_here"), "no_vars_here");
        assert_eq!(Config::expand_env_vars("cost $5"), "cost $5");
        assert_eq!(Config::expand_env_vars("${}_content"), "_content");
    }

    #[test]
    fn test_toml_config_parsing() {
        let toml_content = r#"
[line]
channel_secret = "secret"
channel_access_token = "token"

[server]
port = 8080
base_url = "https://bot.example.com/"
environment = "production"

[airtable]
api_key = "pat_key"
base_id = "appBASE"
tables = ["Listings"]
max_records = 5
diagnostics = true
demo_fallback = true

[content]
booking_form_url = "https://forms.example.com/booking"
asset_version = "42"

[bot]
mode = "catalog"
"#;

        let config = Config::from_toml_str(toml_content).unwrap();

        assert_eq!(config.line.channel_secret, "secret");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.base_url(), "https://bot.example.com");
        assert!(config.is_production());
        assert!(config.airtable.is_configured());
        assert_eq!(config.airtable.tables, vec!["Listings"]);
        assert_eq!(config.airtable.max_records, 5);
        assert!(config.airtable.diagnostics);
        assert!(config.airtable.demo_fallback);
        assert_eq!(config.content.asset_version.as_deref(), Some("42"));
        assert_eq!(config.bot.mode, BotMode::Catalog);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.public_dir, "public/images");
        assert_eq!(config.airtable.max_records, 10);
        assert!(!config.airtable.is_configured());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("CHANNEL_SECRET", "legacy-secret"),
            ("LINE_CHANNEL_ACCESS_TOKEN", "token"),
            ("PORT", "4000"),
            ("AIRTABLE_TABLES", "Primary, Secondary ,"),
            ("AIRTABLE_DIAGNOSTICS", "true"),
            ("AIRTABLE_DEMO_FALLBACK", "off"),
            ("BOT_MODE", "Catalog"),
            ("BASE_URL", ""),
        ]));

        assert_eq!(config.line.channel_secret, "legacy-secret");
        assert_eq!(config.line.channel_access_token, "token");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.base_url(), "http://localhost:4000");
        assert_eq!(config.airtable.tables, vec!["Primary", "Secondary"]);
        assert!(config.airtable.diagnostics);
        assert!(!config.airtable.demo_fallback);
        assert_eq!(config.bot.mode, BotMode::Catalog);
    }

    #[test]
    fn test_prefixed_env_var_wins() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("LINE_CHANNEL_SECRET", "new"),
            ("CHANNEL_SECRET", "legacy"),
        ]));
        assert_eq!(config.line.channel_secret, "new");
    }
}
