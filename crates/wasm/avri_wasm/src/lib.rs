//! Statistics dashboard charts.
//!
//! Renders every slot of [`DASHBOARD_CHARTS`] whose placeholder element
//! carries a `data-chart` attribute. Chart.js and chartjs-plugin-datalabels
//! must already be loaded as page globals (`Chart`, `ChartDataLabels`).

use avri_core::charts::{
    CHART_DATA_ATTRIBUTE, ChartData, ChartKind, ChartSlot, DASHBOARD_CHARTS, chart_config,
    document_is_parsed, share_label,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    type Document;

    #[wasm_bindgen(thread_local_v2, js_name = document)]
    static DOCUMENT: Document;

    #[wasm_bindgen(method, getter, js_name = readyState)]
    fn ready_state(this: &Document) -> String;

    type Element;

    #[wasm_bindgen(js_namespace = document, js_name = getElementById)]
    fn get_element_by_id(id: &str) -> Option<Element>;

    #[wasm_bindgen(method, js_name = getAttribute)]
    fn get_attribute(this: &Element, name: &str) -> Option<String>;

    #[wasm_bindgen(js_namespace = document, js_name = addEventListener)]
    fn add_document_listener(kind: &str, listener: &JsValue);

    #[wasm_bindgen(js_namespace = JSON, js_name = parse, catch)]
    fn json_parse(text: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Reflect, js_name = get, catch)]
    fn reflect_get(target: &JsValue, key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Reflect, js_name = set, catch)]
    fn reflect_set(target: &JsValue, key: &str, value: &JsValue) -> Result<bool, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    type Array;

    #[wasm_bindgen(constructor, js_class = "Array")]
    fn new() -> Array;

    #[wasm_bindgen(method)]
    fn push(this: &Array, value: &JsValue) -> u32;
}

// Chart.js and its datalabels plugin.
#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &Element, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(thread_local_v2, js_name = ChartDataLabels)]
    static CHART_DATA_LABELS: JsValue;
}

/// Renders the dashboard charts once the document has been parsed.
///
/// The module usually finishes instantiating after `DOMContentLoaded`, in
/// which case the charts are rendered straight away.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if document_is_parsed(&DOCUMENT.with(Document::ready_state)) {
        return render_dashboard_charts().map(|_| ());
    }
    let listener = Closure::<dyn Fn() -> Result<(), JsValue>>::new(|| {
        render_dashboard_charts().map(|_| ())
    });
    add_document_listener("DOMContentLoaded", &listener.into_js_value());
    Ok(())
}

/// Renders every dashboard chart whose element carries data.
///
/// Missing elements, missing attributes and unparsable data skip the slot.
/// Returns the number of charts created.
#[wasm_bindgen]
pub fn render_dashboard_charts() -> Result<u32, JsValue> {
    let mut rendered = 0;
    for slot in &DASHBOARD_CHARTS {
        let Some(element) = get_element_by_id(slot.element_id) else {
            continue;
        };
        let Some(raw) = element.get_attribute(CHART_DATA_ATTRIBUTE) else {
            continue;
        };
        let Ok(data) = ChartData::parse(&raw) else {
            continue;
        };
        create_chart(&element, slot, &data)?;
        rendered += 1;
    }
    Ok(rendered)
}

fn create_chart(canvas: &Element, slot: &ChartSlot, data: &ChartData) -> Result<Chart, JsValue> {
    let config = json_parse(&chart_config(slot, data).to_string())?;

    if slot.kind == ChartKind::Pie {
        let total = data.total();
        let formatter =
            Closure::<dyn Fn(f64) -> String>::new(move |value| share_label(value, total));
        let options = reflect_get(&config, "options")?;
        let plugins = reflect_get(&options, "plugins")?;
        let datalabels = reflect_get(&plugins, "datalabels")?;
        reflect_set(&datalabels, "formatter", &formatter.into_js_value())?;

        let chart_plugins = Array::new();
        chart_plugins.push(&CHART_DATA_LABELS.with(JsValue::clone));
        reflect_set(&config, "plugins", &chart_plugins)?;
    }

    Chart::new(canvas, &config)
}
