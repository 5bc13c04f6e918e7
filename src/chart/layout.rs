//! Backend-independent chart descriptions

/// Which kind of chart a layout describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    StackedArea,
}

impl ChartKind {
    /// Suffix used in output file names
    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::StackedArea => "stacked_area",
        }
    }
}

/// Corner the legend is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
}

/// Geometry of one drawn series, indexed by row
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesShape {
    /// A polyline; `None` points break the line
    Line { points: Vec<Option<f64>> },
    /// A filled region between two curves
    Band { lower: Vec<f64>, upper: Vec<f64> },
}

impl SeriesShape {
    /// Number of x positions this shape covers
    pub fn len(&self) -> usize {
        match self {
            SeriesShape::Line { points } => points.len(),
            SeriesShape::Band { upper, .. } => upper.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest y value reached by this shape
    pub fn max_value(&self) -> f64 {
        match self {
            SeriesShape::Line { points } => points.iter().flatten().copied().fold(0.0, f64::max),
            SeriesShape::Band { upper, .. } => upper.iter().copied().fold(0.0, f64::max),
        }
    }
}

/// One labeled series of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub shape: SeriesShape,
}

/// Everything needed to draw a chart, independent of the drawing backend
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub kind: ChartKind,
    /// Subject the chart is about, e.g. the data source label
    pub subject: String,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    /// One label per x position (row)
    pub x_labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub legend: LegendPosition,
}

impl ChartLayout {
    /// Upper bound of the y axis, with 5% headroom
    pub fn y_max(&self) -> f64 {
        let max = self
            .series
            .iter()
            .map(|s| s.shape.max_value())
            .fold(0.0, f64::max);
        (max * 1.05).max(1.0)
    }
}
