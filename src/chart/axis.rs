use super::ChartVariant;
use crate::scale::{ContinuousScale, ScalePoint};

/// One labelled tick on the x axis
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// One category row on the y axis
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTick {
    pub label: String,
    pub position: f64,
}

/// Tick positions and labels for both axes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisModel {
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<CategoryTick>,
}

impl AxisModel {
    /// `x` is the scale currently on screen, i.e. after any zoom
    pub fn build(variant: ChartVariant, x: &ContinuousScale, y: &ScalePoint) -> Self {
        let format = variant.x_tick_format();
        let x_ticks = x
            .ticks(variant.x_tick_count())
            .into_iter()
            .map(|value| Tick {
                value,
                position: x.map(value),
                label: format.format(value),
            })
            .filter(|t| t.position.is_finite())
            .collect();

        let y_ticks = y
            .positions()
            .map(|(label, position)| CategoryTick {
                label: label.to_string(),
                position,
            })
            .collect();

        Self { x_ticks, y_ticks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{ScaleLinear, ScaleLog};
    use crate::state::ViewTransform;

    #[test]
    fn test_revenue_axis_labels() {
        let x = ContinuousScale::Log(ScaleLog::new((0.01, 950.0), (160.0, 640.0)).nice());
        let y = ScalePoint::new(["Thriller", "Action"], (620.0, 40.0));
        let axis = AxisModel::build(ChartVariant::Revenue, &x, &y);

        let labels: Vec<_> = axis.x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0.01", "0.1", "1", "10", "100", "1,000"]);
        assert!((axis.x_ticks[0].position - 160.0).abs() < 1e-9);

        assert_eq!(axis.y_ticks[0].label, "Thriller");
        assert_eq!(axis.y_ticks[0].position, 620.0);
        assert_eq!(axis.y_ticks[1].position, 40.0);
    }

    #[test]
    fn test_zoomed_axis_follows_transform() {
        let base = ContinuousScale::Linear(ScaleLinear::new((-10.0, 950.0), (150.0, 650.0)));
        let mut t = ViewTransform::identity();
        t.zoom_at(150.0, 4.0);
        let zoomed = base.rescaled(&t);

        let axis = AxisModel::build(ChartVariant::Classic, &zoomed, &ScalePoint::new(["a"], (0.0, 1.0)));
        let last = axis.x_ticks.last().unwrap();
        assert!(last.value <= 230.0);
        assert!(axis.x_ticks.iter().all(|t| t.position >= 150.0 - 1e-6 && t.position <= 650.0 + 1e-6));
    }
}
