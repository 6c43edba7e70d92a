// City lookups: the static world table plus the GeoNames proxy for Arabic
// city names. The proxy is the only stateful path in the service — its
// cache lives behind the CityCache seam.

pub mod cache;
pub mod geonames;
pub mod handlers;
