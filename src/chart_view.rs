use crate::chart::RadialChart;
use crate::data_types::RadialChartConfig;
use crate::rendering::{label_baseline_offset, paint_frame};
use crate::theme::ChartTheme;
use crate::utils::PixelsExt;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use tracing::trace;

/// GPUI view hosting a [`RadialChart`].
///
/// The chart is resized from the canvas bounds at paint time and advanced
/// once per frame while its animation runs.
pub struct RadialChartView {
    chart: Rc<RefCell<RadialChart>>,
    theme: ChartTheme,
}

impl RadialChartView {
    pub fn new(config: RadialChartConfig, _cx: &mut Context<Self>) -> Self {
        Self {
            chart: Rc::new(RefCell::new(RadialChart::new(config))),
            theme: ChartTheme::default(),
        }
    }

    pub fn chart(&self) -> std::cell::Ref<'_, RadialChart> {
        self.chart.borrow()
    }

    pub fn set_total(&mut self, total: f32, cx: &mut Context<Self>) {
        self.chart.borrow_mut().set_total(total, Instant::now());
        cx.notify();
    }

    pub fn set_values(&mut self, values: Vec<f32>, cx: &mut Context<Self>) {
        self.chart.borrow_mut().set_values(values, Instant::now());
        cx.notify();
    }

    pub fn set_config(&mut self, config: RadialChartConfig, cx: &mut Context<Self>) {
        self.chart.borrow_mut().set_config(config);
        cx.notify();
    }

    pub fn set_theme(&mut self, theme: ChartTheme, cx: &mut Context<Self>) {
        self.theme = theme;
        cx.notify();
    }

    /// Advances the animation run `generation` to `now`. Returns `false`
    /// (and requests nothing) when that run has been replaced or finished.
    pub fn advance(&mut self, generation: u64, now: Instant, cx: &mut Context<Self>) -> bool {
        match self.chart.borrow_mut().tick(generation, now) {
            Some(_) => {
                cx.notify();
                true
            }
            None => {
                trace!(generation, "dropping stale animation tick");
                false
            }
        }
    }

    fn schedule_tick(&self, window: &mut Window, cx: &mut Context<Self>) {
        let generation = self.chart.borrow().animator().generation();
        cx.on_next_frame(window, move |this, _window, cx| {
            this.advance(generation, Instant::now(), cx);
        });
    }

    fn render_label(&self, text: String) -> impl IntoElement {
        let font_size = self.chart.borrow().config().font_size;
        let line = px(font_size);

        // The view spans the canvas, so its center is the chart's center. A
        // one-font-size line box centered there is lifted so that it ends at
        // the baseline, a quarter font below the center.
        div()
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .relative()
                    .top(px(label_baseline_offset(font_size)) - line / 2.0)
                    .h(line)
                    .flex()
                    .items_center()
                    .text_size(line)
                    .text_color(self.theme.label_color)
                    .child(text),
            )
    }
}

impl Render for RadialChartView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.chart.borrow().is_animating() {
            self.schedule_tick(window, cx);
        }

        let label = self.chart.borrow().label_text();
        let chart = self.chart.clone();

        div()
            .size_full()
            .relative()
            .overflow_hidden()
            .bg(self.theme.background)
            .child(
                canvas(
                    |_, _, _| {},
                    move |bounds, (), window, _cx| {
                        let mut chart = chart.borrow_mut();
                        chart.resize(bounds.size.width.as_f32(), bounds.size.height.as_f32());
                        let frame = chart.render(&mut rand::rng());
                        if let Some(geometry) = chart.geometry() {
                            paint_frame(window, bounds.origin, geometry, &frame);
                        }
                    },
                )
                .size_full()
                .absolute(),
            )
            .children(label.map(|text| self.render_label(text)))
    }
}
