//! Disguised-tab host-service adapter for browser contexts.

use platform_host::{DisguisedTabFuture, DisguisedTabService, DisguisedTabSpec};

#[derive(Debug, Clone, Copy, Default)]
/// Browser disguised-tab adapter.
///
/// Opens `about:blank` in a new top-level context and builds the minimal document in place:
/// neutral title, no page margins, one borderless frame filling the viewport.
pub struct WebDisguisedTabService;

impl DisguisedTabService for WebDisguisedTabService {
    fn open_disguised<'a>(
        &'a self,
        spec: &'a DisguisedTabSpec,
    ) -> DisguisedTabFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                return open_in_new_context(spec);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = spec;
                Err("disguised tabs are only available when compiled for wasm32".to_string())
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn js_err(context: &'static str) -> impl Fn(wasm_bindgen::JsValue) -> String {
    move |err| format!("{context}: {err:?}")
}

#[cfg(target_arch = "wasm32")]
fn open_in_new_context(spec: &DisguisedTabSpec) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let tab = window
        .open_with_url_and_target("about:blank", "_blank")
        .map_err(js_err("window.open failed"))?
        .ok_or_else(|| "popup blocked".to_string())?;
    let document = tab
        .document()
        .ok_or_else(|| "disguised tab has no document".to_string())?;

    document.set_title(&spec.title);
    if let Some(root) = document.document_element() {
        root.set_attribute("style", &spec.page_style)
            .map_err(js_err("root style failed"))?;
    }
    let body = document
        .body()
        .ok_or_else(|| "disguised tab has no body".to_string())?;
    body.set_attribute("style", &spec.page_style)
        .map_err(js_err("body style failed"))?;

    let frame = document
        .create_element("iframe")
        .map_err(js_err("frame creation failed"))?;
    frame
        .set_attribute("src", &spec.frame_src)
        .map_err(js_err("frame src failed"))?;
    frame
        .set_attribute("sandbox", &spec.frame_sandbox)
        .map_err(js_err("frame sandbox failed"))?;
    frame
        .set_attribute("style", &spec.frame_style)
        .map_err(js_err("frame style failed"))?;
    body.append_child(&frame)
        .map_err(js_err("frame insertion failed"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn web_adapter_reports_unsupported_off_wasm() {
        let spec = DisguisedTabSpec::for_address("https://example.com").expect("spec");
        let err = block_on(WebDisguisedTabService.open_disguised(&spec)).unwrap_err();
        assert!(err.contains("wasm32"));
    }
}
