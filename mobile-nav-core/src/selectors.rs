//! 页面约定的 class / 属性标记

/// 导航栏容器
pub const NAV: &str = "nav";
/// 导航链接
pub const NAV_LINK: &str = "nav-link";
/// 用户问候语
pub const USER_GREETING: &str = "user-greeting";
/// 登录按钮
pub const BTN_LOGIN: &str = "btn-login";
/// 通用按钮（触摸按压反馈）
pub const BTN: &str = "btn";
/// 移动端菜单切换按钮
pub const NAV_TOGGLE: &str = "nav-toggle";
/// 移动端折叠菜单
pub const NAV_MENU: &str = "nav-menu";
/// 折叠菜单展开状态
pub const ACTIVE: &str = "active";
/// 页眉
pub const HEADER: &str = "header";

/// 导航容器的 ARIA role
pub const NAVIGATION_ROLE: &str = "navigation";

/// 菜单关闭时的按钮图标
pub const GLYPH_OPEN: &str = "☰";
/// 菜单打开时的按钮图标
pub const GLYPH_CLOSE: &str = "✕";

/// 滚动后的页眉阴影
pub const HEADER_SHADOW: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";
/// 触摸按压缩放
pub const PRESS_TRANSFORM: &str = "scale(0.98)";
