use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Parameters of the randomized stub checker (optional `[stub]` section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StubConfig {
    /// Lower bound of the simulated lookup latency, inclusive.
    pub min_delay_ms: u64,
    /// Upper bound of the simulated lookup latency, exclusive.
    pub max_delay_ms: u64,
    /// Probability that a URL is reported as existing.
    pub exists_probability: f64,
    /// Probability that an existing URL is a file rather than a folder.
    pub file_probability: f64,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 200,
            max_delay_ms: 800,
            exists_probability: 0.7,
            file_probability: 0.5,
        }
    }
}

/// Widget configuration loaded from `~/.config/urlcheck/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlCheckConfig {
    /// Quiet period after the last keystroke before a check fires.
    pub debounce_ms: u64,
    /// Drop results of checks whose input has since been superseded.
    /// `false` lets whichever check resolves last win the display.
    #[serde(default = "default_discard_stale")]
    pub discard_stale_results: bool,
    /// Optional upper bound on one existence check (None = wait forever).
    #[serde(default)]
    pub check_timeout_ms: Option<u64>,
    #[serde(default)]
    pub stub: StubConfig,
}

fn default_discard_stale() -> bool {
    true
}

impl Default for UrlCheckConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            discard_stale_results: true,
            check_timeout_ms: None,
            stub: StubConfig::default(),
        }
    }
}

impl UrlCheckConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn check_timeout(&self) -> Option<Duration> {
        self.check_timeout_ms.map(Duration::from_millis)
    }

    /// Rejects settings the stub or the gate cannot honor.
    pub fn validate(&self) -> Result<()> {
        let stub = &self.stub;
        if stub.min_delay_ms > stub.max_delay_ms {
            anyhow::bail!(
                "stub.min_delay_ms ({}) exceeds stub.max_delay_ms ({})",
                stub.min_delay_ms,
                stub.max_delay_ms
            );
        }
        for (name, p) in [
            ("stub.exists_probability", stub.exists_probability),
            ("stub.file_probability", stub.file_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                anyhow::bail!("{} must be within [0, 1], got {}", name, p);
            }
        }
        if self.check_timeout_ms == Some(0) {
            anyhow::bail!("check_timeout_ms must be positive when set");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from `path`.
pub fn load_from(path: &Path) -> Result<UrlCheckConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: UrlCheckConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path`, or write the defaults there when it does not exist yet.
pub fn load_or_init_at(path: &Path) -> Result<UrlCheckConfig> {
    if path.exists() {
        return load_from(path);
    }
    let cfg = UrlCheckConfig::default();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(path, toml::to_string_pretty(&cfg)?)
        .with_context(|| format!("writing default config {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(cfg)
}

/// [`load_or_init_at`] on the XDG config path.
pub fn load_or_init() -> Result<UrlCheckConfig> {
    load_or_init_at(&config_path()?)
}
