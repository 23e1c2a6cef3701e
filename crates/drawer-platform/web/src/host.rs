//! [`DrawerHost`] over the live document.

use drawer_core::{
    DrawerHost, NodeList, OverscrollBehavior, Role, ScrollMetrics, ScrollTree, Transition,
    Translate, TRIGGER_ATTRIBUTE,
};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, Window};

/// Body properties set while a drawer is mounted.
const PAGE_LOCK: [(&str, &str); 2] = [("position", "fixed"), ("overflow", "hidden")];

pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn select_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::error!("invalid selector {selector:?}: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(style) = style_of(node) else {
            return;
        };
        if let Err(err) = style.set_property(property, value) {
            log::warn!("failed to set {property}: {value} on {node:?}: {err:?}");
        }
    }
}

fn style_of(node: &Element) -> Option<CssStyleDeclaration> {
    match node.dyn_ref::<HtmlElement>() {
        Some(element) => Some(element.style()),
        None => {
            log::warn!("{node:?} is not an HTML element; style left untouched");
            None
        }
    }
}

/// Quote `value` for use inside a double-quoted attribute selector.
fn quote_attribute_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

impl ScrollTree for WebHost {
    type Node = Element;

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn scroll_metrics(&self, node: &Element) -> ScrollMetrics {
        ScrollMetrics::new(
            node.scroll_height() as f32,
            node.client_height() as f32,
            node.scroll_top() as f32,
        )
    }

    fn set_overscroll(&self, node: &Element, behavior: OverscrollBehavior) {
        self.set_style(node, "overscroll-behavior", behavior.css());
    }
}

impl DrawerHost for WebHost {
    fn drawer_roots(&self) -> Vec<Element> {
        self.select_all(&Role::Drawer.selector())
    }

    fn element_id(&self, node: &Element) -> Option<String> {
        Some(node.id()).filter(|id| !id.is_empty())
    }

    fn find_part(&self, root: &Element, role: Role) -> Option<Element> {
        root.query_selector(&role.selector()).ok().flatten()
    }

    fn find_triggers(&self, id: &str) -> NodeList<Element> {
        let selector = format!("[{TRIGGER_ATTRIBUTE}={}]", quote_attribute_value(id));
        self.select_all(&selector).into_iter().collect()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_visible(&self, node: &Element, visible: bool) {
        self.set_style(node, "display", if visible { "block" } else { "none" });
    }

    fn set_translate(&self, node: &Element, translate: Translate) {
        self.set_style(node, "transform", &translate.css());
    }

    fn set_opacity(&self, node: &Element, opacity: f32) {
        self.set_style(node, "opacity", &opacity.to_string());
    }

    fn set_transition(&self, node: &Element, transition: Option<Transition>) {
        match transition {
            Some(transition) => self.set_style(node, "transition", &transition.css()),
            None => self.set_style(node, "transition", "none"),
        }
    }

    fn set_page_scroll_locked(&self, locked: bool) {
        let Some(body) = self.document.body() else {
            log::warn!("document has no body; page scroll lock skipped");
            return;
        };
        let style = body.style();
        for (property, value) in PAGE_LOCK {
            let result = if locked {
                style.set_property(property, value)
            } else {
                style.remove_property(property).map(|_| ())
            };
            if let Err(err) = result {
                log::warn!("failed to update body {property}: {err:?}");
            }
        }
    }

    fn viewport_top(&self, node: &Element) -> f32 {
        node.get_bounding_client_rect().top() as f32
    }

    fn viewport_height(&self) -> f32 {
        match self.window.inner_height().ok().and_then(|height| height.as_f64()) {
            Some(height) => height as f32,
            None => {
                log::warn!("window.innerHeight unavailable; using document height");
                self.document
                    .document_element()
                    .map_or(0.0, |root| root.client_height() as f32)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_are_quoted() {
        assert_eq!(quote_attribute_value("sheet"), "\"sheet\"");
        assert_eq!(quote_attribute_value("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
