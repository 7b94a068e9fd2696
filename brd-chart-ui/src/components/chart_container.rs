//! Mount point for one D3.js chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the D3 script renders into
    pub id: String,
    /// Reserved height in pixels, so sections don't jump while D3 loads
    #[props(default = 320)]
    pub min_height: u32,
    /// The selection has no records; overlay a placeholder on the cleared chart
    #[props(default = false)]
    pub empty: bool,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.empty {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #999;",
                    "No data"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
