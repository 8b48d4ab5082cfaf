//! Static data model for the Zagreb 2050 transit visualization.
//!
//! Everything in this crate is bundled, immutable data plus the small amount
//! of logic needed to turn it into renderable routes:
//! - `geo`: geographic coordinates
//! - `route`: validated polylines and named segments spliced into routes
//! - `data`: the lines, stations and development zones of the network
//! - `timeline`: construction plans and the per-year lookups the UI uses

use bevy::prelude::*;

pub mod config;
pub mod data;
pub mod geo;
pub mod route;
pub mod timeline;

pub use geo::LngLat;
pub use route::{Route, RouteError, Segment, SegmentMap};
pub use timeline::{ElementStatus, PlanType, TimelineSelection};

/// Registers the timeline selection resource shared by the UI and the map.
pub struct NetworkPlugin;

impl Plugin for NetworkPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TimelineSelection>();
    }
}
