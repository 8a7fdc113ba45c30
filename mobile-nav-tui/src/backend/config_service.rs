//! 配置服务

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mobile_nav_core::{Language, NavConfig};
use serde::{Deserialize, Serialize};

/// 默认每个终端列对应的逻辑像素
pub const DEFAULT_PX_PER_COLUMN: u32 = 8;
/// 每列逻辑像素的上限
pub const MAX_PX_PER_COLUMN: u32 = 64;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 终端列宽折算成逻辑像素的倍数
    pub px_per_column: u32,
    /// 导航控制器配置
    pub nav: NavConfig,
    /// 学生接口；未配置时使用内置演示数据
    pub api: Option<ApiSettings>,
}

/// 学生接口地址
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default)]
    pub csrf_token: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            px_per_column: DEFAULT_PX_PER_COLUMN,
            nav: NavConfig::default(),
            api: None,
        }
    }
}

impl AppConfig {
    /// 终端宽度（列）对应的视口宽度（逻辑像素）
    pub fn viewport_width(&self, columns: u16) -> u32 {
        u32::from(columns).saturating_mul(self.px_per_column)
    }

    /// 终端行高对应的逻辑像素（字符单元大约是两倍高）
    pub fn px_per_row(&self) -> u32 {
        self.px_per_column.saturating_mul(2)
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;

    /// 只更新界面语言，配置文件里的其他内容保持不变
    fn save_language(&self, language: Language) -> Result<()>;
}

/// 本地配置服务：`<config_dir>/mobile-nav/config.toml`
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// 平台默认配置路径；无法确定配置目录时退回当前目录
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mobile-nav")
            .join("config.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("Config file {} not found, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config: AppConfig = toml::from_str(&text)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        config.nav.validate()?;
        if !(1..=MAX_PX_PER_COLUMN).contains(&config.px_per_column) {
            anyhow::bail!("px_per_column must be between 1 and {MAX_PX_PER_COLUMN}");
        }
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(config)?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    fn save_language(&self, language: Language) -> Result<()> {
        if !self.path.exists() {
            let mut config = AppConfig::default();
            config.nav.language = language;
            return self.save(&config);
        }

        // 原文件无法解析时不覆盖
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let mut table: toml::Table = toml::from_str(&text)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        let nav = table
            .entry("nav")
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        let Some(nav) = nav.as_table_mut() else {
            anyhow::bail!("[nav] in {} is not a table", self.path.display());
        };
        nav.insert(
            "language".to_string(),
            toml::Value::String(language.code().to_string()),
        );

        std::fs::write(&self.path, toml::to_string_pretty(&table)?)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
