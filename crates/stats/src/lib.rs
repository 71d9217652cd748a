//! Telemetry statistics for RouteViz.
//!
//! This crate provides:
//! - CSV and JSON telemetry loading with per-field validation
//! - Single-pass aggregate statistics over a route
//! - Chart axis domains, including equal-scale balancing for maps
//!
//! # Example
//!
//! ```
//! use routeviz_stats::{aggregate, read_csv};
//!
//! let input = "\
//! time,latitude,longitude,altitude,speed
//! 2016-05-14T09:00:00Z,51.044935,13.777610,112.0,18.2
//! 2016-05-14T09:00:30Z,51.050122,13.775076,116.5,21.6
//! ";
//!
//! let rows = read_csv(input.as_bytes()).unwrap();
//! let stats = aggregate(&rows).unwrap();
//!
//! assert_eq!(stats.max_altitude, 116.5);
//! assert!(stats.distance_travelled_meters > 600.0);
//! ```

mod aggregate;
mod domain;
mod error;
mod loader;
mod row;

pub use aggregate::{aggregate, StatsResult};
pub use domain::{
    altitude_domain, route_domains, speed_domain, time_domain, AxisDomain, RouteDomains,
};
pub use error::{Result, StatsError};
pub use loader::{load_csv, load_json, load_rows, read_csv, read_json};
pub use row::TelemetryRow;
