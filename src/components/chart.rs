use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Pie},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::debounce::on_resize_settled;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Cost per service as vertical bars.
    Bar,
    /// Share of each service as a doughnut.
    Share,
}

/// Labels and values plotted by a chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl SeriesData {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    /// DOM id of the render target; must be unique on the page.
    pub id: AttrValue,
    pub title: AttrValue,
    pub kind: ChartKind,
    pub data: Rc<SeriesData>,
    pub palette: &'static [&'static str],
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let spec = Rc::new(ChartSpec {
            id: props.id.to_string(),
            title: props.title.to_string(),
            kind: props.kind,
            data: props.data.clone(),
            palette: props.palette,
        });

        use_effect_with((spec, container_ref), |(spec, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                render_chart(&container, spec);

                let spec = spec.clone();
                on_resize_settled(
                    move || render_chart(&container, &spec),
                    Config::RESIZE_DEBOUNCE_MS,
                )
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

#[derive(Debug, PartialEq)]
struct ChartSpec {
    id: String,
    title: String,
    kind: ChartKind,
    data: Rc<SeriesData>,
    palette: &'static [&'static str],
}

fn render_chart(container: &HtmlElement, spec: &ChartSpec) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || spec.data.is_empty() {
        return;
    }

    let chart = match spec.kind {
        ChartKind::Bar => build_bar_chart(&spec.title, &spec.data, spec.palette),
        ChartKind::Share => build_share_chart(&spec.title, &spec.data, spec.palette),
    };

    if let Err(e) = WasmRenderer::new(width, height).render(&spec.id, &chart) {
        log::error!("Render error for {}: {e:?}", spec.id);
    }
}

fn title(text: &str) -> Title {
    Title::new()
        .text(text)
        .left("center")
        .text_style(TextStyle::new().font_size(16).color("#1f2937"))
}

fn colors(palette: &[&str]) -> Vec<Color> {
    palette.iter().map(|c| Color::from(*c)).collect()
}

fn build_bar_chart(text: &str, data: &SeriesData, palette: &[&str]) -> CharmingChart {
    CharmingChart::new()
        .title(title(text))
        .color(colors(palette))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(data.labels.clone())
                .axis_label(AxisLabel::new().rotate(30).color("#6b7280")),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("USD")
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Bar::new().data(data.values.clone()).bar_width("60%"))
}

fn build_share_chart(text: &str, data: &SeriesData, palette: &[&str]) -> CharmingChart {
    // Credits cannot be drawn as slices
    let slices: Vec<(f64, &str)> = data
        .values
        .iter()
        .zip(&data.labels)
        .filter(|(value, _)| **value > 0.0)
        .map(|(value, label)| (*value, label.as_str()))
        .collect();

    CharmingChart::new()
        .title(title(text))
        .color(colors(palette))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("0"))
        .series(
            Pie::new()
                .radius(vec!["40%", "70%"])
                .center(vec!["50%", "50%"])
                .data(slices),
        )
}
