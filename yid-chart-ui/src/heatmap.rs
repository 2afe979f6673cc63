//! Declarative heatmap configuration builder.
//!
//! A [`HeatmapSpec`] describes one calendar heatmap — column mapping,
//! colors, legend, unit — and builds the options/plugins JSON cal-heatmap
//! consumes. [`Heatmap`] is the owned handle to one painted instance with
//! an explicit create/paint/dispose lifecycle, so a remounted view never
//! leaks the listeners of its predecessor.

use crate::js_bridge;
use serde::Serialize;
use serde_json::json;
use yid_data::dates::year_start;
use yid_data::transform::Aggregation;

/// Left-column labels: two blanks to clear the month header rows.
pub const WEEKDAY_LABELS: [&str; 9] = ["", "", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The d3 color schemes the dashboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    YlGnBu,
    YlOrBr,
    YlOrRd,
    PuBuGn,
    GnBu,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::YlGnBu => "YlGnBu",
            ColorScheme::YlOrBr => "YlOrBr",
            ColorScheme::YlOrRd => "YlOrRd",
            ColorScheme::PuBuGn => "PuBuGn",
            ColorScheme::GnBu => "GnBu",
        }
    }
}

/// How day cells map to colors: an explicit ordered color range, or a named
/// d3 scheme. Either way the four breakpoints split values into five bins
/// and the scale type is always "threshold".
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    ExplicitRange { colors: Vec<String>, domain: [f64; 4] },
    NamedScheme { scheme: ColorScheme, domain: [f64; 4] },
}

impl ColorSpec {
    pub fn scheme(scheme: ColorScheme, domain: [f64; 4]) -> Self {
        ColorSpec::NamedScheme { scheme, domain }
    }

    pub fn range(colors: &[&str], domain: [f64; 4]) -> Self {
        ColorSpec::ExplicitRange {
            colors: colors.iter().map(|color| color.to_string()).collect(),
            domain,
        }
    }

    pub fn domain(&self) -> &[f64; 4] {
        match self {
            ColorSpec::ExplicitRange { domain, .. } => domain,
            ColorSpec::NamedScheme { domain, .. } => domain,
        }
    }

    /// The cal-heatmap `scale.color` object.
    pub fn to_scale_color(&self) -> serde_json::Value {
        match self {
            ColorSpec::ExplicitRange { colors, domain } => json!({
                "range": colors,
                "domain": domain,
                "type": "threshold",
            }),
            ColorSpec::NamedScheme { scheme, domain } => json!({
                "scheme": scheme.as_str(),
                "domain": domain,
                "type": "threshold",
            }),
        }
    }
}

/// Which of the five threshold bins `value` falls into (0..=4).
///
/// Bin 0 is everything below the first breakpoint, bin 4 everything at or
/// above the last.
pub fn threshold_bin(value: f64, domain: &[f64; 4]) -> usize {
    domain.iter().filter(|breakpoint| value >= **breakpoint).count()
}

/// Everything needed to paint one category's calendar heatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapSpec {
    /// Category name; the chart paints into `#{name}-heatmap` and the
    /// legend into `#{name}-legend`.
    pub name: String,
    /// Field of the data records holding the date.
    pub date_col: String,
    /// Field of the data records holding the value.
    pub value_col: String,
    /// Legend caption, e.g. "Minutes read".
    pub legend_label: String,
    /// Unit rendered in the tooltip, e.g. "minutes".
    pub units: String,
    pub color: ColorSpec,
    /// How same-day records combine into one cell.
    pub group_y: Aggregation,
}

impl HeatmapSpec {
    pub fn item_selector(&self) -> String {
        format!("#{}-heatmap", self.name)
    }

    pub fn legend_selector(&self) -> String {
        format!("#{}-legend", self.name)
    }

    /// The cal-heatmap options object: month domain, day sub-domain, dark
    /// theme, the data source with its column mapping, and the threshold
    /// color scale, painting the calendar year starting at Jan 1 of `year`.
    pub fn build_options(&self, source: serde_json::Value, year: i32) -> serde_json::Value {
        json!({
            "itemSelector": self.item_selector(),
            "domain": {
                "type": "month",
                "gutter": 6,
                "label": { "position": "top" },
            },
            "subDomain": {
                "type": "day",
                "radius": 2,
                "gutter": 3,
                "label": { "position": "left" },
            },
            "date": { "start": year_start(year) },
            "theme": "dark",
            "data": {
                "source": source,
                "x": self.date_col,
                "y": self.value_col,
                "groupY": self.group_y.as_group_y(),
            },
            "scale": { "color": self.color.to_scale_color() },
        })
    }

    /// The three fixed plugin descriptors: weekday label column, legend
    /// bound to this category's DOM element, unit-aware tooltip.
    pub fn build_plugins(&self) -> serde_json::Value {
        json!([
            { "plugin": "calendarLabel", "labels": WEEKDAY_LABELS },
            {
                "plugin": "legend",
                "label": self.legend_label,
                "itemSelector": self.legend_selector(),
            },
            { "plugin": "tooltip", "unit": self.units },
        ])
    }
}

/// Owned handle to one painted cal-heatmap instance.
///
/// `paint` serializes the spec and data and (re)paints in place; `dispose`
/// destroys the JS instance. Views hold one `Heatmap` for their lifetime
/// and call `dispose` from `use_drop`.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    name: String,
}

impl Heatmap {
    pub fn new(name: impl Into<String>) -> Self {
        Heatmap { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Paint `data` according to `spec` for the given calendar year.
    /// Repeated calls replace the prior rendering.
    pub fn paint<T: Serialize>(&self, spec: &HeatmapSpec, data: &[T], year: i32) {
        let source = serde_json::to_value(data).unwrap_or_default();
        let options = spec.build_options(source, year);
        let plugins = spec.build_plugins();
        js_bridge::paint_heatmap(&self.name, &options.to_string(), &plugins.to_string());
    }

    /// Destroy the JS chart instance and release its listeners.
    pub fn dispose(&self) {
        js_bridge::destroy_heatmap(&self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn workout_spec() -> HeatmapSpec {
        HeatmapSpec {
            name: "workout".to_string(),
            date_col: "date".to_string(),
            value_col: "workout_duration_minutes".to_string(),
            legend_label: "Minutes working out".to_string(),
            units: "minutes".to_string(),
            color: ColorSpec::scheme(ColorScheme::YlGnBu, [40.0, 60.0, 80.0, 100.0]),
            group_y: Aggregation::Max,
        }
    }

    #[test]
    fn test_threshold_bins_cover_all_five_buckets() {
        let domain = [40.0, 60.0, 80.0, 100.0];
        assert_eq!(threshold_bin(0.0, &domain), 0);
        assert_eq!(threshold_bin(25.0, &domain), 0);
        assert_eq!(threshold_bin(45.0, &domain), 1);
        assert_eq!(threshold_bin(65.0, &domain), 2);
        assert_eq!(threshold_bin(85.0, &domain), 3);
        assert_eq!(threshold_bin(105.0, &domain), 4);
        // Breakpoints belong to the upper bin.
        assert_eq!(threshold_bin(40.0, &domain), 1);
        assert_eq!(threshold_bin(100.0, &domain), 4);
    }

    #[test]
    fn test_scale_color_is_always_threshold() {
        let named = ColorSpec::scheme(ColorScheme::YlOrBr, [20.0, 40.0, 60.0, 80.0]);
        let scale = named.to_scale_color();
        assert_eq!(scale["type"], "threshold");
        assert_eq!(scale["scheme"], "YlOrBr");
        assert_eq!(scale["domain"], json!([20.0, 40.0, 60.0, 80.0]));
        assert!(scale.get("range").is_none());

        let explicit = ColorSpec::range(
            &["#9AE9A8", "#41C363", "#31A14E", "#206D38"],
            [5.0, 10.0, 15.0, 20.0],
        );
        let scale = explicit.to_scale_color();
        assert_eq!(scale["type"], "threshold");
        assert_eq!(scale["range"][0], "#9AE9A8");
        assert!(scale.get("scheme").is_none());
    }

    #[test]
    fn test_options_carry_selector_mapping_and_aggregation() {
        let spec = workout_spec();
        let source = json!([
            {"date": "2024-02-01", "workout_duration_minutes": 45.0},
        ]);
        let options = spec.build_options(source.clone(), 2024);

        assert_eq!(options["itemSelector"], "#workout-heatmap");
        assert_eq!(options["date"]["start"], "2024-01-01");
        assert_eq!(options["theme"], "dark");
        assert_eq!(options["data"]["source"], source);
        assert_eq!(options["data"]["x"], "date");
        assert_eq!(options["data"]["y"], "workout_duration_minutes");
        assert_eq!(options["data"]["groupY"], "max");
        assert_eq!(options["scale"]["color"]["type"], "threshold");
        assert_eq!(options["domain"]["type"], "month");
        assert_eq!(options["subDomain"]["type"], "day");
    }

    #[test]
    fn test_plugins_carry_legend_selector_and_unit() {
        let plugins = workout_spec().build_plugins();
        let plugins = plugins.as_array().unwrap();
        assert_eq!(plugins.len(), 3);
        assert_eq!(plugins[0]["plugin"], "calendarLabel");
        assert_eq!(plugins[0]["labels"][2], "Sun");
        assert_eq!(plugins[1]["plugin"], "legend");
        assert_eq!(plugins[1]["itemSelector"], "#workout-legend");
        assert_eq!(plugins[1]["label"], "Minutes working out");
        assert_eq!(plugins[2]["plugin"], "tooltip");
        assert_eq!(plugins[2]["unit"], "minutes");
    }

    #[test]
    fn test_year_changes_move_the_calendar_start() {
        let spec = workout_spec();
        let options = spec.build_options(json!([]), 2025);
        assert_eq!(options["date"]["start"], "2025-01-01");
    }
}
