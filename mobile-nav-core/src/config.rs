//! 导航配置
//!
//! 断点、防抖时长、滑动阈值等都是展示层的调校常量，
//! 这里作为可配置的默认值提供，可从 TOML 覆盖。

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::i18n::Language;

/// 默认移动端断点（逻辑像素，含）
pub const DEFAULT_BREAKPOINT_PX: u32 = 480;
/// 默认 resize 防抖时长
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;
/// 默认滑动关闭阈值
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;
/// 默认页眉阴影滚动阈值
pub const DEFAULT_SCROLL_SHADOW_THRESHOLD_PX: f64 = 10.0;
/// 默认通知自动消失时间
pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 5000;

/// 导航控制器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// 宽度 <= 该值时进入移动端模式
    pub breakpoint_px: u32,
    /// resize 防抖时长（毫秒）
    pub resize_debounce_ms: u64,
    /// 左滑关闭菜单的水平位移阈值
    pub swipe_threshold_px: f64,
    /// 滚动超过该值时给页眉加阴影
    pub scroll_shadow_threshold_px: f64,
    /// 通知自动消失时间（毫秒）
    pub notification_ttl_ms: u64,
    /// 界面语言
    pub language: Language,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            scroll_shadow_threshold_px: DEFAULT_SCROLL_SHADOW_THRESHOLD_PX,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            language: Language::default(),
        }
    }
}

impl NavConfig {
    /// 从 TOML 文本解析并校验
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded navigation config from {}", path.display());
        Ok(config)
    }

    /// 从文件加载，文件不存在时使用默认值
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// 序列化为 TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 校验取值范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoint_px == 0 {
            return Err(ConfigError::Invalid {
                field: "breakpoint_px",
                reason: "must be greater than 0".to_string(),
            });
        }
        if !(self.swipe_threshold_px.is_finite() && self.swipe_threshold_px > 0.0) {
            return Err(ConfigError::Invalid {
                field: "swipe_threshold_px",
                reason: format!("must be a positive number, got {}", self.swipe_threshold_px),
            });
        }
        if !(self.scroll_shadow_threshold_px.is_finite() && self.scroll_shadow_threshold_px >= 0.0)
        {
            return Err(ConfigError::Invalid {
                field: "scroll_shadow_threshold_px",
                reason: format!(
                    "must be a non-negative number, got {}",
                    self.scroll_shadow_threshold_px
                ),
            });
        }
        Ok(())
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}
