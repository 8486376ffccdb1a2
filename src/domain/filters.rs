// src/domain/filters.rs

/// Amenities offered as checkboxes on the search form.
pub const AMENITY_CHOICES: &[&str] = &["wifi", "laundry", "furnished", "gym", "parking"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Match,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Match, SortKey::PriceAsc, SortKey::PriceDesc];

    /// Unknown values fall back to `Match`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            _ => SortKey::Match,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Match => "match",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Match => "Best match",
            SortKey::PriceAsc => "Price: low to high",
            SortKey::PriceDesc => "Price: high to low",
        }
    }
}

/// Current values of the search form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    /// Any non-zero number, sent as entered; no range check.
    pub budget: Option<f64>,
    /// Sent exactly as typed, whitespace included.
    pub location: Option<String>,
    /// Selection order, no duplicates.
    amenities: Vec<String>,
    pub walkable: bool,
    pub transit: bool,
    pub car_friendly: bool,
    pub sort: SortKey,
}

impl FilterState {
    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    pub fn has_amenity(&self, name: &str) -> bool {
        self.amenities.iter().any(|a| a == name)
    }

    /// Adds the amenity if absent, removes it if present.
    pub fn toggle_amenity(&mut self, name: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == name) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(name.to_string());
        }
    }

    pub fn has_accessibility_filter(&self) -> bool {
        self.walkable || self.transit || self.car_friendly
    }

    /// Builds the state from decoded form pairs, in submission order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut state = FilterState::default();

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "budget" => state.budget = parse_budget(value),
                "location" => {
                    state.location = (!value.is_empty()).then(|| value.to_string());
                }
                "amenities" => {
                    for name in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                        if !state.has_amenity(name) {
                            state.amenities.push(name.to_string());
                        }
                    }
                }
                "walkable" => state.walkable = is_checked(value),
                "transit" => state.transit = is_checked(value),
                "car_friendly" => state.car_friendly = is_checked(value),
                "sort" => state.sort = SortKey::parse(value),
                _ => {}
            }
        }

        state
    }
}

// Zero, blank and non-numeric all mean "no budget". Negative and
// fractional values pass through for the backend to judge.
fn parse_budget(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n != 0.0 => Some(n),
        _ => None,
    }
}

fn is_checked(raw: &str) -> bool {
    matches!(raw, "true" | "on" | "1")
}
