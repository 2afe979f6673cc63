//! Container divs one heatmap view paints into.

use dioxus::prelude::*;

/// Props for HeatmapContainer
#[derive(Props, Clone, PartialEq)]
pub struct HeatmapContainerProps {
    /// Category name; cal-heatmap targets "#{name}-heatmap" and the legend
    /// plugin "#{name}-legend". The containers must exist before painting,
    /// which is why the view renders them unconditionally.
    pub name: String,
    /// Chart height in rem.
    #[props(default = 7)]
    pub height_rem: u32,
}

/// The pre-existing DOM targets for one calendar heatmap and its legend.
#[component]
pub fn HeatmapContainer(props: HeatmapContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.name}-heatmap",
            style: "height: {props.height_rem}rem; overflow-x: auto;",
        }
        div { id: "{props.name}-legend" }
    }
}
