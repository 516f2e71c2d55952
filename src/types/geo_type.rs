#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeoType {
    State,      // Highest-level entity
    County,     // County -> State
}

impl GeoType {
    /// Fixed width of a FIPS code at this level.
    pub fn width(&self) -> usize {
        match self {
            GeoType::State => 2,
            GeoType::County => 5,
        }
    }
}
