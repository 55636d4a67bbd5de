//! Small wrappers over the web-sys calls the pages need, turning JS
//! exceptions into [`Error`]s.

use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, HtmlScriptElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Storage,
};

use crate::error::{describe, Error, Result};

pub fn document() -> Result<Document> {
    window().and_then(|w| w.document()).ok_or(Error::NoDocument)
}

pub fn local_storage() -> Result<Storage> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(Error::StorageUnavailable)
}

/// Adds `class` to `<html>` when `present`, removes it otherwise.
pub fn set_root_class(class: &str, present: bool) -> Result<()> {
    let root = document()?.document_element().ok_or(Error::NoDocument)?;
    root.class_list()
        .toggle_with_force(class, present)
        .map(|_| ())
        .map_err(|e| Error::Dom(describe(&e)))
}

#[cfg(all(test, target_arch = "wasm32"))]
pub fn root_has_class(class: &str) -> Result<bool> {
    let root = document()?.document_element().ok_or(Error::NoDocument)?;
    Ok(root.class_list().contains(class))
}

/// Fresh container appended to the body for mounting a component under test.
#[cfg(all(test, target_arch = "wasm32"))]
pub fn mount_point() -> web_sys::Element {
    let document = document().unwrap();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

/// Lets the scheduler run pending renders and effects.
#[cfg(all(test, target_arch = "wasm32"))]
pub async fn settle() {
    yew::platform::time::sleep(std::time::Duration::ZERO).await;
}

/// Smoothly scrolls the element with `id` to the top of the viewport.
pub fn scroll_to_section(id: &str) -> Result<()> {
    let target = document()?
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(id.to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Appends an async `<script src>` to the body unless one with the same
/// source is already in the document. Returns whether a new tag was added.
pub fn load_script_once(src: &str) -> Result<bool> {
    let document = document()?;
    let selector = format!("script[src=\"{}\"]", src);
    let existing = document
        .query_selector(&selector)
        .map_err(|e| Error::Dom(describe(&e)))?;
    if existing.is_some() {
        return Ok(false);
    }

    let script = document
        .create_element("script")
        .map_err(|e| Error::Dom(describe(&e)))?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| Error::Dom("created element is not a script".to_string()))?;
    script.set_src(src);
    script.set_async(true);

    let body = document.body().ok_or(Error::NoDocument)?;
    body.append_child(&script)
        .map_err(|e| Error::Dom(describe(&e)))?;
    Ok(true)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn root_class_toggles() {
        set_root_class("marker", true).unwrap();
        assert!(root_has_class("marker").unwrap());
        set_root_class("marker", false).unwrap();
        assert!(!root_has_class("marker").unwrap());
    }

    #[wasm_bindgen_test]
    fn script_is_injected_once() {
        let src = "data:text/javascript,void 0";
        assert!(load_script_once(src).unwrap());
        assert!(!load_script_once(src).unwrap());
    }

    #[wasm_bindgen_test]
    fn scrolling_to_a_missing_section_is_an_error() {
        assert_eq!(
            scroll_to_section("does-not-exist"),
            Err(Error::MissingElement("does-not-exist".to_string()))
        );
    }
}
