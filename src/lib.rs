//! gpui_radial_chart: animated radial statistics chart for GPUI

pub mod animation;
pub mod chart;
pub mod chart_view;
pub mod data_types;
pub mod layout;
pub mod palette;
pub mod plot_types;
pub mod rendering;
pub mod theme;
pub mod utils;

pub use animation::{Animator, ANIMATION_DURATION};
pub use chart::RadialChart;
pub use chart_view::RadialChartView;
pub use data_types::{AnimationStyle, ChartInput, RadialChartConfig, Segment};
pub use layout::ChartGeometry;
pub use rendering::{ArcOp, Frame, LabelOp, MarkerOp};
pub use theme::ChartTheme;
