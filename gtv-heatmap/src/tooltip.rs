//! Hover tooltip content and placement.

use gtv_data::Observation;

use crate::layout::ChartConfig;

/// What the tooltip says about one hovered cell.
///
/// Built from a single observation; nothing is shared between cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub year: i32,
    pub month_name: &'static str,
    /// Base temperature less the observation's variance.
    pub temperature: f64,
    pub variance: f64,
}

impl Tooltip {
    /// Tooltip for `observation`, `None` when its month is out of range.
    pub fn for_observation(observation: &Observation, base_temperature: f64) -> Option<Self> {
        Some(Self {
            year: observation.year,
            month_name: observation.month_name()?,
            temperature: base_temperature - observation.variance,
            variance: observation.variance,
        })
    }

    /// `"<year> - <month>"`
    pub fn heading(&self) -> String {
        format!("{} - {}", self.year, self.month_name)
    }

    pub fn temperature_line(&self) -> String {
        format!("{:.2}℃", self.temperature)
    }

    /// Magnitude of the variance; the sign is dropped.
    pub fn variance_line(&self) -> String {
        format!("{:.2}℃", self.variance.abs())
    }

    pub fn lines(&self) -> [String; 3] {
        [self.heading(), self.temperature_line(), self.variance_line()]
    }

    /// All lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

/// Page position of the tooltip's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPosition {
    pub left: f64,
    pub top: f64,
}

impl TooltipPosition {
    /// Place the tooltip at a fixed offset from the pointer.
    pub fn near_pointer(page_x: f64, page_y: f64, config: &ChartConfig) -> Self {
        Self {
            left: page_x + config.tooltip_offset_x,
            top: page_y + config.tooltip_offset_y,
        }
    }
}

/// The visible tooltip and where it sits on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub tooltip: Tooltip,
    pub position: TooltipPosition,
}

impl TooltipState {
    /// Pointer entered a cell: show its tooltip next to the pointer.
    pub fn enter(tooltip: &Tooltip, page_x: f64, page_y: f64, config: &ChartConfig) -> Self {
        Self {
            tooltip: tooltip.clone(),
            position: TooltipPosition::near_pointer(page_x, page_y, config),
        }
    }

    /// Pointer moved over a cell. A hidden tooltip stays hidden.
    pub fn moved(current: &mut Option<Self>, page_x: f64, page_y: f64, config: &ChartConfig) {
        if let Some(state) = current {
            state.position = TooltipPosition::near_pointer(page_x, page_y, config);
        }
    }

    /// Pointer left a cell.
    pub fn leave(current: &mut Option<Self>) {
        *current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovered_june_1800() {
        let observation = Observation {
            year: 1800,
            month: 6,
            variance: 0.5,
        };
        let tooltip = Tooltip::for_observation(&observation, 8.66).unwrap();
        assert_eq!(tooltip.heading(), "1800 - June");
        assert_eq!(tooltip.temperature_line(), "8.16℃");
        assert_eq!(tooltip.variance_line(), "0.50℃");
        assert!(tooltip.text().contains("1800 - June"));
        assert!(tooltip.text().contains("8.16℃"));
    }

    #[test]
    fn negative_variance_shows_its_magnitude() {
        let observation = Observation {
            year: 1753,
            month: 1,
            variance: -1.5,
        };
        let tooltip = Tooltip::for_observation(&observation, 8.66).unwrap();
        assert_eq!(tooltip.variance_line(), "1.50℃");
        assert_eq!(tooltip.temperature_line(), "10.16℃");
    }

    #[test]
    fn invalid_month_has_no_tooltip() {
        let observation = Observation {
            year: 1753,
            month: 0,
            variance: 0.0,
        };
        assert!(Tooltip::for_observation(&observation, 8.66).is_none());
    }

    #[test]
    fn position_tracks_pointer_with_offset() {
        let position = TooltipPosition::near_pointer(300.0, 400.0, &ChartConfig::default());
        assert_eq!(position, TooltipPosition { left: 310.0, top: 350.0 });
    }

    fn june_1800() -> Tooltip {
        let observation = Observation {
            year: 1800,
            month: 6,
            variance: 0.5,
        };
        Tooltip::for_observation(&observation, 8.66).unwrap()
    }

    #[test]
    fn enter_shows_the_tooltip_near_the_pointer() {
        let config = ChartConfig::default();
        let current = Some(TooltipState::enter(&june_1800(), 300.0, 400.0, &config));
        let state = current.as_ref().unwrap();
        assert_eq!(state.tooltip.heading(), "1800 - June");
        assert_eq!(state.position, TooltipPosition { left: 310.0, top: 350.0 });
    }

    #[test]
    fn move_while_hidden_stays_hidden() {
        let mut current: Option<TooltipState> = None;
        TooltipState::moved(&mut current, 300.0, 400.0, &ChartConfig::default());
        assert!(current.is_none());
    }

    #[test]
    fn move_while_visible_tracks_the_pointer() {
        let config = ChartConfig::default();
        let mut current = Some(TooltipState::enter(&june_1800(), 300.0, 400.0, &config));
        TooltipState::moved(&mut current, 500.0, 120.0, &config);
        let state = current.unwrap();
        assert_eq!(state.position, TooltipPosition { left: 510.0, top: 70.0 });
        assert_eq!(state.tooltip, june_1800());
    }

    #[test]
    fn leave_hides_the_tooltip() {
        let config = ChartConfig::default();
        let mut current = Some(TooltipState::enter(&june_1800(), 300.0, 400.0, &config));
        TooltipState::leave(&mut current);
        assert!(current.is_none());
    }
}
