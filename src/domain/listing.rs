use serde::Deserialize;

/// A rentable unit as returned by the listings API.
/// The scores are computed server-side; we only display them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub title: String,
    pub price: f64,
    pub location: String,
    #[serde(default)]
    pub amenities: Vec<String>,

    // 0-100, all optional
    #[serde(default)]
    pub matchability: Option<f64>,
    #[serde(default)]
    pub walkable_score: Option<f64>,
    #[serde(default)]
    pub transit_score: Option<f64>,
    #[serde(default)]
    pub car_score: Option<f64>,
}

impl Listing {
    /// Score used by the "match" ordering; missing means 0.
    pub fn match_score(&self) -> f64 {
        self.matchability.unwrap_or(0.0)
    }

    pub fn has_accessibility_scores(&self) -> bool {
        self.walkable_score.is_some() || self.transit_score.is_some() || self.car_score.is_some()
    }

    /// "$700", or "$712.50" when the price carries cents.
    pub fn display_price(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("${:.0}", self.price)
        } else {
            format!("${:.2}", self.price)
        }
    }
}
