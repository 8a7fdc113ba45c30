//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::dom::NodeId;

/// 虚拟文档操作错误
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum DomError {
    /// 节点不存在（已被删除或来自其他文档）
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// 节点不是所声称父节点的直接子节点
    #[error("Node {node} is not a child of {parent}")]
    NotAChild { node: NodeId, parent: NodeId },

    /// 移动会让节点成为自己的后代
    #[error("Moving {node} under {target} would create a cycle")]
    Cycle { node: NodeId, target: NodeId },

    /// 根节点不可移动或删除
    #[error("The document root cannot be detached")]
    DetachRoot,
}

/// 配置错误
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    /// TOML 解析失败
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// 配置值非法
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// 接口调用错误
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ApiError {
    /// 网络错误（连接失败、超时等）
    #[error("Network error: {0}")]
    Network(String),

    /// 非 2xx 响应
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// 响应不是预期的 JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// 服务端返回 `success: false`
    #[error("{0}")]
    Rejected(String),

    /// 本地校验失败（未选择分类、学生 ID 缺失等）
    #[error("Validation error: {0}")]
    Validation(String),

    /// URL 构造失败
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// 是否为预期行为（用户输入问题、服务端业务拒绝），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，返回 `false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::Validation(_))
    }
}

/// 顶层错误类型
#[derive(Error, Debug)]
pub enum NavError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result 类型别名
pub type NavResult<T> = std::result::Result<T, NavError>;
