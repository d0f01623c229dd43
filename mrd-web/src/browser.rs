//! Reads from the host page
//!
//! Only meaningful in the browser. Native builds (tests) get `None` so the
//! rest of the crate stays testable.

/// `scheme://host:port` of the current page
#[cfg(target_arch = "wasm32")]
pub fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn origin() -> Option<String> {
    None
}

/// CSRF token rendered by the server into the page, either as a hidden
/// `_csrf` form field or a `_csrf` meta tag.
#[cfg(target_arch = "wasm32")]
pub fn csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;

    let from_input = document
        .query_selector(r#"input[name="_csrf"]"#)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value());

    from_input
        .or_else(|| {
            document
                .query_selector(r#"meta[name="_csrf"]"#)
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        })
        .filter(|token| !token.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn csrf_token() -> Option<String> {
    None
}
