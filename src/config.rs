/// Settings owned by one [`Game`](crate::Game) session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    click_region_percent: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            click_region_percent: Self::DEFAULT_CLICK_REGION,
        }
    }
}

impl Config {
    /// Click region of a fresh session.
    pub const DEFAULT_CLICK_REGION: f64 = 0.4;
    /// Upper bound of the click region; wider bands would overlap.
    pub const MAX_CLICK_REGION: f64 = 0.5;

    /// How close to a side, as a fraction of the cell size, a click must land to count for that side.
    pub fn click_region_percent(&self) -> f64 {
        self.click_region_percent
    }

    /// Set the click region, clamped into `[0, 0.5]`.
    pub fn with_click_region_percent(mut self, value: f64) -> Self {
        self.click_region_percent = if value.is_nan() { 0.0 } else { value.clamp(0.0, Self::MAX_CLICK_REGION) };
        self
    }
}
