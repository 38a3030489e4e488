use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Location -- Coordinates plus the zone local times are reported in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    /// IANA zone name, e.g. `"US/Eastern"` or `"Australia/Sydney"`.
    pub tz: String,
}

impl Location {
    pub fn new(lat: f64, lng: f64, tz: &str) -> Self {
        Self {
            lat,
            lng,
            tz: tz.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Locations -- City name -> Location, in insertion order
// ---------------------------------------------------------------------------

/// Ordered city mapping. Iteration follows insertion order; inserting an
/// existing city replaces its location without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locations {
    entries: Vec<(String, Location)>,
}

impl Locations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a city. Returns the previous location, if any.
    pub fn insert(&mut self, city: &str, location: Location) -> Option<Location> {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(name, _)| name == city) {
            return Some(std::mem::replace(existing, location));
        }
        self.entries.push((city.to_string(), location));
        None
    }

    pub fn get(&self, city: &str) -> Option<&Location> {
        self.entries
            .iter()
            .find(|(name, _)| name == city)
            .map(|(_, loc)| loc)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Location)> {
        self.entries.iter().map(|(name, loc)| (name.as_str(), loc))
    }

    pub fn cities(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Location)> for Locations {
    fn from_iter<I: IntoIterator<Item = (S, Location)>>(iter: I) -> Self {
        let mut locations = Locations::new();
        for (city, loc) in iter {
            locations.insert(city.as_ref(), loc);
        }
        locations
    }
}
