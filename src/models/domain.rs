use std::borrow::Cow;
use std::fmt;

/// Longest business name, in bytes, accepted from an input line
pub const MAX_NAME_LEN: usize = 100;

/// Advertising tier of a business; higher tiers win first placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AdLevel {
    #[default]
    None,
    Standard,
    Premium,
}

impl AdLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            AdLevel::None => 0,
            AdLevel::Standard => 1,
            AdLevel::Premium => 2,
        }
    }
}

impl TryFrom<i64> for AdLevel {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AdLevel::None),
            1 => Ok(AdLevel::Standard),
            2 => Ok(AdLevel::Premium),
            other => Err(other),
        }
    }
}

impl fmt::Display for AdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Point on the Cartesian plane, in miles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Business profile read from an input file
///
/// `is_nearby`, `is_good` and `distance` are derived by the filters. Each
/// filter only ever turns its flag on, and `distance` is meaningful only
/// while `is_nearby` is set. The name keeps the exact bytes read from the
/// input file, whatever their encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: Vec<u8>,
    pub location: Location,
    pub rating: f64,
    pub ad_level: AdLevel,
    pub is_nearby: bool,
    pub is_good: bool,
    pub distance: f64,
}

impl Profile {
    /// Fresh record with every derived field at its default
    pub fn new(name: impl Into<Vec<u8>>, location: Location, rating: f64, ad_level: AdLevel) -> Self {
        Self {
            name: name.into(),
            location,
            rating,
            ad_level,
            is_nearby: false,
            is_good: false,
            distance: 0.0,
        }
    }

    /// Name for display and logging; invalid UTF-8 is replaced
    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    pub fn mark_nearby(self, distance: f64) -> Self {
        Self {
            is_nearby: true,
            distance,
            ..self
        }
    }

    pub fn mark_good(self) -> Self {
        Self {
            is_good: true,
            ..self
        }
    }

    /// Nearby and good; the only records that reach the results file
    #[inline]
    pub fn qualifies(&self) -> bool {
        self.is_nearby && self.is_good
    }
}

/// User-supplied search parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchCriteria {
    pub origin: Location,
    pub max_distance: f64,
    pub min_rating: f64,
}

/// Filtered records plus the chosen sponsor
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResults {
    pub profiles: Vec<Profile>,
    pub sponsor: Option<usize>,
}

impl RankedResults {
    /// Qualifying records in output order: sponsor first, then the rest in
    /// input order with the sponsor left out.
    pub fn ordered(&self) -> impl Iterator<Item = &Profile> + '_ {
        let sponsor = self.sponsor.and_then(|index| self.profiles.get(index));
        let rest = self
            .profiles
            .iter()
            .enumerate()
            .filter(move |(index, profile)| Some(*index) != self.sponsor && profile.qualifies())
            .map(|(_, profile)| profile);

        sponsor.into_iter().chain(rest)
    }

    pub fn qualifying_count(&self) -> usize {
        self.profiles.iter().filter(|p| p.qualifies()).count()
    }
}
