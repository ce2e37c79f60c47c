use riobravo_core::PageConfig;

const CONFIG_ELEMENT_ID: &str = "page-config";

/// Read overrides from `<script type="application/json" id="page-config">`.
/// Missing or malformed blocks fall back to the defaults.
pub fn load_config() -> PageConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(text) = text else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            PageConfig::default()
        }
    }
}
