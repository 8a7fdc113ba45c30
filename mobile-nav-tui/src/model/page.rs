//! 演示页面：页眉导航栏 + 正文
//!
//! 页面结构保存在核心库的 [`Document`] 中，导航控制器直接修改它，
//! 视图层每一帧从文档重新读取导航栏的结构。

use mobile_nav_core::selectors;
use mobile_nav_core::{Document, NodeId};

use crate::i18n::{fill, Translations};

/// 当前显示的页面
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Dictionary,
    Tests,
    Students,
    Other(String),
}

impl Page {
    pub fn from_href(href: &str) -> Self {
        match href {
            "/" => Self::Home,
            "/dictionary/" => Self::Dictionary,
            "/tests/" => Self::Tests,
            "/students/" => Self::Students,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn title(&self, texts: &Translations) -> String {
        let p = &texts.pages;
        match self {
            Self::Home => p.home.to_string(),
            Self::Dictionary => p.dictionary.to_string(),
            Self::Tests => p.tests.to_string(),
            Self::Students => p.students.to_string(),
            Self::Other(href) => href.clone(),
        }
    }

    pub fn is_students(&self) -> bool {
        matches!(self, Self::Students)
    }
}

/// 导航条目的地址，顺序与导航栏一致
const LINKS: [&str; 4] = ["/", "/dictionary/", "/tests/", "/students/"];
const LOGOUT_HREF: &str = "/logout/";

/// 演示页面的文档和关键节点
pub struct DemoPage {
    pub doc: Document,
    pub header: NodeId,
    pub nav: NodeId,
    pub links: Vec<NodeId>,
    pub greeting: NodeId,
    pub login: NodeId,
    /// 正文容器（导航栏之外）
    pub content: NodeId,
}

impl DemoPage {
    pub fn new(viewport_width: u32, user: &str, texts: &Translations) -> Self {
        let mut doc = Document::new(viewport_width);
        let root = doc.root();

        let header = Self::element(&mut doc, root, "header", &[selectors::HEADER]);
        let nav = Self::element(&mut doc, header, "nav", &[selectors::NAV]);
        let links = LINKS
            .iter()
            .map(|href| {
                let id = Self::element(&mut doc, nav, "a", &[selectors::NAV_LINK]);
                if let Some(el) = doc.element_mut(id) {
                    el.set_attribute("href", *href);
                }
                id
            })
            .collect();
        let greeting = Self::element(&mut doc, nav, "span", &[selectors::USER_GREETING]);
        if let Some(el) = doc.element_mut(greeting) {
            el.set_attribute("data-user", user);
        }
        let login = Self::element(&mut doc, nav, "a", &[selectors::BTN, selectors::BTN_LOGIN]);
        if let Some(el) = doc.element_mut(login) {
            el.set_attribute("href", LOGOUT_HREF);
        }
        let content = Self::element(&mut doc, root, "main", &[]);

        let mut page = Self {
            doc,
            header,
            nav,
            links,
            greeting,
            login,
            content,
        };
        page.relabel(texts);
        page
    }

    fn element(doc: &mut Document, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let id = doc.create_element(tag);
        if let Some(el) = doc.element_mut(id) {
            for class in classes {
                el.add_class(class);
            }
        }
        if let Err(e) = doc.append_child(parent, id) {
            log::error!("Failed to build demo page: {e}");
        }
        id
    }

    /// 按当前语言写入条目文字（节点身份不变）
    pub fn relabel(&mut self, texts: &Translations) {
        let p = &texts.pages;
        let labels = [p.home, p.dictionary, p.tests, p.students];
        for (id, label) in self.links.iter().zip(labels) {
            if let Some(el) = self.doc.element_mut(*id) {
                el.set_text(label);
            }
        }
        if let Some(el) = self.doc.element_mut(self.greeting) {
            let user = el.attribute("data-user").unwrap_or_default().to_string();
            el.set_text(fill(p.greeting, &[("name", &user)]));
        }
        if let Some(el) = self.doc.element_mut(self.login) {
            el.set_text(p.log_out);
        }
    }
}
