mod geo_id;
mod geo_type;
mod state;

pub use geo_id::GeoId;
pub use geo_type::GeoType;
pub use state::{normalize_state_name, state_abbr_to_fips, state_abbr_to_name, state_name_to_abbr};
