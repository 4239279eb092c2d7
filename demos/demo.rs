use gpui::prelude::*;
use gpui::*;
use gpui_radial_chart::{AnimationStyle, RadialChartConfig, RadialChartView};

struct DemoApp {
    charts: Vec<Entity<RadialChartView>>,
}

impl DemoApp {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let styles = [
            AnimationStyle::Rotation,
            AnimationStyle::Sequential,
            AnimationStyle::Bidirectional,
        ];

        let charts = styles
            .into_iter()
            .map(|style| {
                cx.new(|cx| {
                    let config = RadialChartConfig::default()
                        .with_stroke_width(12.0)
                        .with_font_size(24.0)
                        .with_segment_colors([
                            gpui::rgb(0x2E7D32).into(),
                            gpui::rgb(0x1565C0).into(),
                            gpui::rgb(0xF9A825).into(),
                            gpui::rgb(0xC62828).into(),
                        ])
                        .with_animation_style(style);
                    let mut view = RadialChartView::new(config, cx);
                    view.set_total(2000.0, cx);
                    view.set_values(vec![500.0, 500.0], cx);
                    view
                })
            })
            .collect();

        Self { charts }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_row()
            .bg(gpui::white())
            .children(
                self.charts
                    .iter()
                    .map(|chart| div().flex_1().h_full().p_4().child(chart.clone())),
            )
    }
}

fn main() {
    Application::new().run(|cx: &mut App| {
        cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| DemoApp::new(cx))
        })
        .expect("failed to open window");
    });
}
