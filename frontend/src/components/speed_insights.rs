use yew::prelude::*;
use log::{error, info};
use wasm_bindgen::JsValue;
use web_sys::{window, Document};

use crate::config;

const SDK_MARKER: &str = "@vercel/speed-insights";

/// Mounts the Vercel Speed Insights collector script once. Renders nothing.
#[function_component(SpeedInsights)]
pub fn speed_insights() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(document) = window().and_then(|w| w.document()) {
                match inject_script(&document) {
                    Ok(true) => info!("Speed insights collector injected"),
                    Ok(false) => {}
                    Err(err) => error!("Failed to inject speed insights script: {:?}", err),
                }
            }
            || ()
        },
        (),
    );

    html! {}
}

/// Returns `Ok(false)` if the script is already on the page.
fn inject_script(document: &Document) -> Result<bool, JsValue> {
    let selector = format!("script[data-sdkn=\"{}\"]", SDK_MARKER);
    if document.query_selector(&selector)?.is_some() {
        return Ok(false);
    }

    // Queue stub so events recorded before the script loads are not lost.
    let stub = document.create_element("script")?;
    stub.set_text_content(Some(
        "window.si = window.si || function () { (window.siq = window.siq || []).push(arguments); };",
    ));

    let script = document.create_element("script")?;
    script.set_attribute("src", config::speed_insights_script_src())?;
    script.set_attribute("defer", "")?;
    script.set_attribute("data-sdkn", SDK_MARKER)?;
    script.set_attribute("data-sdkv", env!("CARGO_PKG_VERSION"))?;

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&stub)?;
    head.append_child(&script)?;
    Ok(true)
}
