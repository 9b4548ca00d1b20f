//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals (no ES modules) exposed via `window.*`.
//! This module serializes payloads and calls those globals.

use hfd_views::ChartPayload;
use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static HISTOGRAM_CHART_JS: &str = include_str!("../assets/js/histogram-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");

/// Global render functions promoted to `window` once D3 is ready.
const CHART_FUNCTIONS: [&str; 7] = [
    "renderHistogramChart",
    "renderPieChart",
    "renderScatterChart",
    "renderDataTable",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HFD JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        web_sys::console::warn_2(&JsValue::from_str("HFD eval failed:"), &e);
    }
}

/// Quote a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Safe to call
/// more than once; only the first call evaluates the scripts.
///
/// The scripts define functions via `function` declarations. They are
/// evaluated at global scope through an indirect `eval()` once D3 has
/// loaded, then each function is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        HISTOGRAM_CHART_JS,
        PIE_CHART_JS,
        SCATTER_CHART_JS,
        DATA_TABLE_JS,
    ]
    .join("\n");

    let promote = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n");

    call_js(&format!(
        r#"
        if (!window.__hfdChartsReady && !window.__hfdChartScripts) {{
            window.__hfdChartScripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__hfdChartScripts);
                    delete window.__hfdChartScripts;
                    {promote}
                    window.__hfdChartsReady = true;
                    console.log('HFD charts initialized');
                }}
            }}, 100);
        }}
        "#,
        scripts = js_string(&all_js),
        promote = promote,
    ));
}

/// Call `window.<function>(container_id, data, config)` once D3, the chart
/// scripts and the container element are all available.
fn render_when_ready(function: &str, container_id: &str, payload: &ChartPayload) {
    log::debug!(
        "[HFD] js_bridge: {} into #{} ({} bytes of data)",
        function,
        container_id,
        payload.data_json.len()
    );
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__hfdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[HFD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        function = function,
        id = js_string(container_id),
        data = js_string(&payload.data_json),
        config = js_string(&payload.config_json),
    ));
}

/// Render the outcome-coloured density histogram.
pub fn render_histogram_chart(container_id: &str, payload: &ChartPayload) {
    render_when_ready("renderHistogramChart", container_id, payload);
}

/// Render the four-slice breakdown pie.
pub fn render_pie_chart(container_id: &str, payload: &ChartPayload) {
    render_when_ready("renderPieChart", container_id, payload);
}

/// Render the outcome-coloured scatter plot.
pub fn render_scatter_chart(container_id: &str, payload: &ChartPayload) {
    render_when_ready("renderScatterChart", container_id, payload);
}

/// Render a sortable data table.
pub fn render_data_table(container_id: &str, payload: &ChartPayload) {
    render_when_ready("renderDataTable", container_id, payload);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}
