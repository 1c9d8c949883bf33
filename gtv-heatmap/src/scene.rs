//! Scene geometry for the heat map.
//!
//! [`HeatMapScene::build`] turns a dataset into everything the SVG needs:
//! one [`Cell`] per observation, a year axis, a month axis, two axis titles
//! and the colour legend. A new scene is built whenever the dataset changes;
//! nothing is patched in place.

use gtv_data::{Dataset, Observation};
use log::{info, warn};

use crate::layout::ChartConfig;
use crate::scale::Scales;
use crate::ticks::ticks;
use crate::tooltip::Tooltip;

/// One coloured rectangle of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub observation: Observation,
    /// Zero-based month index (January = 0).
    pub month_index: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    /// Absolute temperature, `base + variance`.
    pub temperature: f64,
    pub tooltip: Tooltip,
}

impl Cell {
    /// Identity of the cell across rebuilds.
    pub fn key(&self) -> (i32, u32) {
        (self.observation.year, self.observation.month)
    }

    /// `data-temp` value: the absolute temperature to three decimals.
    pub fn temperature_tag(&self) -> String {
        format!("{:.3}", self.temperature)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position along the axis in SVG units.
    pub position: f64,
    pub label: String,
}

/// An axis group: domain line, tick marks and tick labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orient: AxisOrient,
    /// Translation of the whole group.
    pub translate: (f64, f64),
    /// Extent of the domain line along the axis.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
}

impl Axis {
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.translate.0, self.translate.1)
    }

    /// SVG path of the domain line with its outer ticks.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        let k = self.tick_size;
        match self.orient {
            AxisOrient::Bottom => format!("M{r0},{k}V0H{r1}V{k}"),
            AxisOrient::Left => format!("M{},{r0}H0V{r1}H{}", -k, -k),
        }
    }

    /// Translation of one tick group.
    pub fn tick_transform(&self, tick: &Tick) -> String {
        match self.orient {
            AxisOrient::Bottom => format!("translate({}, 0)", tick.position),
            AxisOrient::Left => format!("translate(0, {})", tick.position),
        }
    }

    /// End point of a tick mark relative to its tick group.
    pub fn tick_line_end(&self) -> (f64, f64) {
        match self.orient {
            AxisOrient::Bottom => (0.0, self.tick_size),
            AxisOrient::Left => (-self.tick_size, 0.0),
        }
    }

    /// Anchor point of a tick label relative to its tick group.
    pub fn tick_label_anchor(&self) -> (f64, f64) {
        let gap = self.tick_size + 3.0;
        match self.orient {
            AxisOrient::Bottom => (0.0, gap),
            AxisOrient::Left => (-gap, 0.0),
        }
    }

    pub fn text_anchor(&self) -> &'static str {
        match self.orient {
            AxisOrient::Bottom => "middle",
            AxisOrient::Left => "end",
        }
    }

    pub fn label_dy(&self) -> &'static str {
        match self.orient {
            AxisOrient::Bottom => "0.71em",
            AxisOrient::Left => "0.32em",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTitle {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees, negative is counter-clockwise.
    pub rotate: Option<f64>,
}

impl AxisTitle {
    pub fn transform(&self) -> Option<String> {
        self.rotate.map(|deg| format!("rotate({deg})"))
    }
}

/// One legend swatch and the lower bound of its colour bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendSwatch {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub fill: &'static str,
    /// Lower bound of the bucket as a variance.
    pub lower_bound: f64,
    /// Lower bound as an absolute temperature.
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub translate: (f64, f64),
    pub swatches: Vec<LegendSwatch>,
}

impl Legend {
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.translate.0, self.translate.1)
    }
}

/// Everything drawn inside the chart's SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatMapScene {
    pub width: f64,
    pub height: f64,
    /// Inclusive year span covered by the x axis.
    pub years: (i32, i32),
    pub cells: Vec<Cell>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_title: AxisTitle,
    pub y_title: AxisTitle,
    pub legend: Legend,
}

impl HeatMapScene {
    /// Lay out the chart for `dataset`, `None` when it has no observations.
    pub fn build(dataset: &Dataset, config: &ChartConfig) -> Option<Self> {
        let scales = Scales::from_dataset(dataset, config)?;

        let cells: Vec<Cell> = dataset
            .monthly_variance
            .iter()
            .filter_map(|o| build_cell(o, dataset.base_temperature, &scales, config))
            .collect();
        let skipped = dataset.len() - cells.len();
        if skipped > 0 {
            warn!("Skipped {} observations with a month outside 1..=12", skipped);
        }
        info!("Laid out {} heat map cells", cells.len());

        Some(Self {
            width: config.width,
            height: config.height,
            years: scales.years,
            cells,
            x_axis: year_axis(&scales, config),
            y_axis: month_axis(&scales, config),
            x_title: AxisTitle {
                text: "Year",
                x: config.width / 2.0,
                y: config.height - 50.0,
                rotate: None,
            },
            y_title: AxisTitle {
                text: "Months",
                x: -config.height / 2.0,
                y: 50.0,
                rotate: Some(-90.0),
            },
            legend: legend(&scales, dataset.base_temperature, config),
        })
    }
}

fn build_cell(
    observation: &Observation,
    base_temperature: f64,
    scales: &Scales,
    config: &ChartConfig,
) -> Option<Cell> {
    let month_name = observation.month_name()?;
    let month_index = observation.month_index()?;
    let row = scales.month_to_y(month_name)?;
    let span = scales.year_span();
    let width = if span > 0 {
        config.inner_width() / f64::from(span)
    } else {
        config.inner_width()
    };

    Some(Cell {
        observation: *observation,
        month_index,
        x: scales.year_to_x(observation.year),
        y: row - config.row_offset,
        width,
        height: config.inner_height() / 12.0,
        fill: scales.variance_to_color(observation.variance),
        temperature: observation.temperature(base_temperature),
        tooltip: Tooltip::for_observation(observation, base_temperature)?,
    })
}

/// Bottom axis with integer year labels.
fn year_axis(scales: &Scales, config: &ChartConfig) -> Axis {
    let (d0, d1) = scales.x.domain();
    let ticks = ticks(d0, d1, config.x_ticks)
        .into_iter()
        .filter(|t| t.fract() == 0.0)
        .map(|t| Tick {
            position: scales.x.apply(t),
            label: format!("{}", t as i64),
        })
        .collect();

    Axis {
        id: "x-axis",
        orient: AxisOrient::Bottom,
        translate: (0.0, config.height - config.padding),
        range: scales.x.range(),
        ticks,
        tick_size: config.tick_size,
    }
}

/// Left axis with one tick per month.
fn month_axis(scales: &Scales, config: &ChartConfig) -> Axis {
    let ticks = scales
        .y
        .domain()
        .iter()
        .enumerate()
        .filter_map(|(i, name)| {
            Some(Tick {
                position: scales.y.position_of(i)?,
                label: name.to_string(),
            })
        })
        .collect();

    Axis {
        id: "y-axis",
        orient: AxisOrient::Left,
        translate: (config.padding, 0.0),
        range: scales.y.range(),
        ticks,
        tick_size: config.tick_size,
    }
}

/// Swatches ordered cold to hot, labelled with each bucket's lower bound.
fn legend(scales: &Scales, base_temperature: f64, config: &ChartConfig) -> Legend {
    let swatches = scales
        .color
        .range()
        .iter()
        .enumerate()
        .filter_map(|(i, fill)| {
            let (lower_bound, _) = scales.color.invert_extent(i)?;
            let x = i as f64 * config.legend_swatch_step;
            Some(LegendSwatch {
                x,
                y: -50.0,
                size: config.legend_swatch_size,
                fill: *fill,
                lower_bound,
                label: format!("{:.1}", base_temperature + lower_bound),
                label_x: x + config.legend_swatch_size / 2.0,
                label_y: 5.0,
            })
        })
        .collect();

    Legend {
        translate: (config.padding, config.height - 8.0),
        swatches,
    }
}
