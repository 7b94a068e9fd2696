//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('BRD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderLineChart(...)` via
/// `function` declarations. They are evaluated at global scope via an
/// indirect `eval()` once D3 is ready and then promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LINE_CHART_JS, BAR_CHART_JS].join("\n");

    let store_js = format!(
        "window.__brdChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__brdChartScripts);
                    delete window.__brdChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__brdChartsReady = true;
                    console.log('BRD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until the charts are initialised and the container exists, then
/// call `window.<function>(container, data, config)`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("[BRD] js_bridge: queue {} into #{}", function, container_id);
    call_js(&render_script(function, container_id, data_json, config_json));
}

/// JS that bumps the container's render sequence and returns the new value.
fn bump_seq(container_id: &str) -> String {
    format!(
        "(window.__brdChartSeq = window.__brdChartSeq || {{}}, \
         window.__brdChartSeq['{container_id}'] = (window.__brdChartSeq['{container_id}'] || 0) + 1)"
    )
}

/// Deferred render for one container.
///
/// Each queued render takes a sequence number for its container and draws
/// only if no later render or destroy has claimed the container meanwhile.
fn render_script(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    let seq = bump_seq(container_id);
    format!(
        r#"
        (function() {{
            var mySeq = {seq};
            var poll = setInterval(function() {{
                if (window.__brdChartSeq['{container_id}'] !== mySeq) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__brdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[BRD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Clear a container and cancel any render still queued for it.
fn destroy_script(container_id: &str) -> String {
    format!(
        "{}; var el = document.getElementById('{container_id}'); if (el) el.innerHTML = '';",
        bump_seq(container_id)
    )
}

/// Render the daily rentals line chart.
///
/// `data_json` is an array of `{date, value}` objects.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render a category bar chart (weather, holiday).
///
/// `data_json` is an array of `{label, value}` objects drawn in array order.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
///
/// Renders queued before this call are dropped rather than drawn late.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}
