//! Default look of the drawer markup.
//!
//! Layout only; every animated property is written inline by the drawer.

use wasm_bindgen::JsValue;
use web_sys::Document;

/// Marks the injected `<style>` element so it is installed once per document.
const STYLESHEET_ID: &str = "drawer-default-styles";

pub const DEFAULT_STYLESHEET: &str = r#"
[data-role=drawer] {
    position: absolute;
    inset: 0;
    display: none;
}

[data-role=drawer-background] {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, .5);
}

[data-role=drawer-container] {
    position: absolute;
    bottom: 0;
    top: 10vh;
    top: 10dvh;
    left: 0;
    right: 0;
    display: grid;
    padding: 2.25rem 0 0;
    background: white;
    border-top-right-radius: 1rem;
    border-top-left-radius: 1rem;
}

[data-role=drawer-container]:before {
    content: "";
    position: absolute;
    top: 100%;
    right: 0;
    left: 0;
    height: 200%;
    background: inherit;
}

[data-role=drawer-handle] {
    position: absolute;
    top: .5rem;
    justify-self: center;
    height: .25rem;
    width: 5rem;
    background: lightgrey;
    border-radius: 9999px;
}

[data-role=drawer-content] {
    overflow-y: scroll;
}
"#;

/// Append [`DEFAULT_STYLESHEET`] to the document head unless already present.
pub fn install_default_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or("document has no <head>")?;
    let style = document.create_element("style")?;
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(DEFAULT_STYLESHEET));
    head.append_child(&style)?;
    Ok(())
}
