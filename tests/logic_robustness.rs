#[cfg(test)]
mod tests {
    use gpui_radial_chart::{ChartInput, RadialChart, RadialChartConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Instant;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn test_zero_total_is_degenerate_not_fatal() {
        let input = ChartInput::new(0.0, vec![500.0, 500.0]);
        let segments = input.segments();
        assert!(segments.iter().all(|s| !s.fraction.is_finite()));

        let mut chart = RadialChart::new(RadialChartConfig::default());
        chart.resize(100.0, 100.0);
        let t0 = Instant::now();
        chart.set_total(0.0, t0);
        let generation = chart.set_values(vec![500.0, 500.0], t0);
        chart.tick(generation, t0 + std::time::Duration::from_millis(1000));

        let frame = chart.render(&mut rng());
        assert!(frame.arcs.iter().all(|a| !a.is_finite()));
        assert_eq!(frame.label.unwrap().text, "inf%");
    }

    #[test]
    fn test_zero_over_zero_label() {
        let mut chart = RadialChart::new(RadialChartConfig::default());
        chart.resize(100.0, 100.0);
        chart.set_values(vec![0.0], Instant::now());

        let frame = chart.render(&mut rng());
        assert_eq!(frame.label.unwrap().text, "NaN%");
    }

    #[test]
    fn test_render_before_resize_is_noop() {
        let mut chart = RadialChart::new(RadialChartConfig::default());
        let t0 = Instant::now();
        chart.set_total(10.0, t0);
        chart.set_values(vec![5.0], t0);

        assert!(chart.render(&mut rng()).is_empty());
        assert!(chart.label().is_none());
    }

    #[test]
    fn test_zero_sized_viewport_is_noop() {
        let mut chart = RadialChart::new(RadialChartConfig::default());
        chart.set_total(10.0, Instant::now());
        chart.set_values(vec![5.0], Instant::now());

        chart.resize(0.0, 0.0);
        assert!(chart.geometry().is_none());
        assert!(chart.render(&mut rng()).is_empty());

        chart.resize(50.0, 50.0);
        assert!(!chart.render(&mut rng()).is_empty());
    }

    #[test]
    fn test_partial_total_without_remainder() {
        let input = ChartInput::new(2000.0, vec![500.0, 500.0]);
        assert_eq!(input.remainder_fraction(), Some(0.5));

        let exact = ChartInput::new(1000.0, vec![500.0, 500.0]);
        assert_eq!(exact.remainder_fraction(), None);
    }
}

mod palette_limits {
    use gpui_radial_chart::data_types::MAX_SEGMENT_COLORS;
    use gpui_radial_chart::{RadialChart, RadialChartConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::{Duration, Instant};

    #[test]
    fn test_chart_ignores_extra_colors() {
        let mut config = RadialChartConfig::default();
        config.segment_colors = vec![gpui::red(); 4];
        config.segment_colors.push(gpui::blue());

        let mut chart = RadialChart::new(config.clone());
        assert_eq!(chart.config().segment_colors.len(), MAX_SEGMENT_COLORS);

        chart.set_config(config);
        assert_eq!(chart.config().segment_colors.len(), MAX_SEGMENT_COLORS);

        chart.resize(100.0, 100.0);
        let t0 = Instant::now();
        chart.set_total(5.0, t0);
        let generation = chart.set_values(vec![1.0; 5], t0);
        chart.tick(generation, t0 + Duration::from_secs(3));

        // The fifth segment falls back to random colors instead of blue
        let mut rng = StdRng::seed_from_u64(11);
        let colors: Vec<_> = (0..3)
            .map(|_| chart.render(&mut rng).arcs[4].color)
            .collect();
        assert!(colors.iter().any(|c| *c != gpui::blue()));
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn test_label_text_without_geometry() {
        let mut chart = RadialChart::new(RadialChartConfig::default());
        chart.set_total(2000.0, Instant::now());
        chart.set_values(vec![500.0, 500.0], Instant::now());

        assert!(chart.label().is_none());
        assert_eq!(chart.label_text().as_deref(), Some("50.00%"));

        chart.set_values(vec![], Instant::now());
        assert!(chart.label_text().is_none());
    }
}
