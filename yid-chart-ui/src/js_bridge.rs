//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! cal-heatmap, its plugins, and d3 are loaded by the hosting page as plain
//! script tags and live on `window.*`. The embedded bridge script keeps a
//! registry of CalHeatmap instances keyed by chart name, so repainting a
//! name replaces the prior rendering instead of stacking a new calendar.

// Embed the bridge JS at compile time
static CAL_HEATMAP_BRIDGE_JS: &str = include_str!("../assets/js/cal-heatmap-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('YID JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the bridge with a wait-for-CalHeatmap polling loop.
///
/// The bridge defines `yidPaintHeatmap`/`yidDestroyHeatmap` via `function`
/// declarations. To ensure they become globally accessible (not
/// block-scoped inside the setInterval callback), the script is stashed on
/// `window`, evaluated at global scope via indirect `eval()` once
/// CalHeatmap is ready, and each function is then promoted to `window.*`.
pub fn init_heatmaps() {
    let store_js = format!(
        "window.__yidBridgeScript = {};",
        serde_json::to_string(CAL_HEATMAP_BRIDGE_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForCal = setInterval(function() {
                if (typeof CalHeatmap !== 'undefined') {
                    clearInterval(waitForCal);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__yidBridgeScript);
                    delete window.__yidBridgeScript;
                    // Promote function declarations to window explicitly
                    if (typeof yidPaintHeatmap !== 'undefined') window.yidPaintHeatmap = yidPaintHeatmap;
                    if (typeof yidDestroyHeatmap !== 'undefined') window.yidDestroyHeatmap = yidDestroyHeatmap;
                    window.__yidHeatmapsReady = true;
                    console.log('year-in-data heatmap bridge initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Paint (or repaint) the calendar heatmap `name`.
///
/// Uses a polling loop to wait for the bridge to initialize and for the
/// `#{name}-heatmap` container element to exist before painting.
pub fn paint_heatmap(name: &str, options_json: &str, plugins_json: &str) {
    let escaped_options = options_json.replace('\'', "\\'").replace('\n', "");
    let escaped_plugins = plugins_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__yidHeatmapsReady &&
                    typeof window.yidPaintHeatmap !== 'undefined' &&
                    document.getElementById('{name}-heatmap')) {{
                    clearInterval(poll);
                    try {{
                        window.yidPaintHeatmap('{name}', '{escaped_options}', '{escaped_plugins}');
                    }} catch(e) {{ console.error('[YID] yidPaintHeatmap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart instance for `name` and release its DOM/listeners.
pub fn destroy_heatmap(name: &str) {
    call_js(&format!(
        "if (window.yidDestroyHeatmap) window.yidDestroyHeatmap('{}');",
        name
    ));
}
