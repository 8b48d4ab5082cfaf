//! The bundled Zagreb 2050 network: five lines, their stations, and the
//! riverfront development zones.
//!
//! Coordinates are `[longitude, latitude]` in degrees. Each line is split into
//! named segments because segments open in different construction phases
//! (see `crate::timeline`).

mod lines;
mod stations;
mod zones;

pub use lines::*;
pub use stations::*;
pub use zones::*;

use crate::route::SegmentMap;

/// Identifies one transit line of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKey {
    MetroA,
    MetroB,
    MetroC,
    Premetro,
    Gondola,
}

/// Mode of transport, which decides how a line's vehicles look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitMode {
    Metro,
    Tram,
    Gondola,
}

/// Display metadata for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// sRGB color as `[r, g, b]`.
    pub color: [u8; 3],
    pub mode: TransitMode,
}

impl LineKey {
    pub const ALL: [LineKey; 5] = [
        LineKey::MetroA,
        LineKey::MetroB,
        LineKey::MetroC,
        LineKey::Premetro,
        LineKey::Gondola,
    ];

    pub fn info(self) -> LineInfo {
        match self {
            LineKey::MetroA => LineInfo {
                name: "Metro Line A",
                description: "Main spine: Sesvete → Airport",
                color: [0x25, 0x63, 0xeb],
                mode: TransitMode::Metro,
            },
            LineKey::MetroB => LineInfo {
                name: "Metro Line B",
                description: "Crosstown: Žitnjak → Podsused",
                color: [0xdc, 0x26, 0x26],
                mode: TransitMode::Metro,
            },
            LineKey::MetroC => LineInfo {
                name: "Metro Line C",
                description: "Sava corridor: East → Jankomir",
                color: [0x16, 0xa3, 0x4a],
                mode: TransitMode::Metro,
            },
            LineKey::Premetro => LineInfo {
                name: "Premetro Tunnel",
                description: "Tram tunnel under the Lower Town",
                color: [0x8b, 0x5c, 0xf6],
                mode: TransitMode::Tram,
            },
            LineKey::Gondola => LineInfo {
                name: "Sava Skyway",
                description: "Scenic gondola: Črnomerec → Novi Zagreb",
                color: [0xf5, 0x9e, 0x0b],
                mode: TransitMode::Gondola,
            },
        }
    }

    /// The line's named segments, in travel order.
    pub fn segments(self) -> SegmentMap {
        let table = match self {
            LineKey::MetroA => METRO_A_SEGMENTS,
            LineKey::MetroB => METRO_B_SEGMENTS,
            LineKey::MetroC => METRO_C_SEGMENTS,
            LineKey::Premetro => PREMETRO_SEGMENTS,
            LineKey::Gondola => GONDOLA_SEGMENTS,
        };
        table
            .iter()
            .fold(SegmentMap::new(), |map, (id, pairs)| map.with(id, pairs))
    }

    /// Stable short key used in layer ids (`"metro-a"`, `"gondola"`, ...).
    pub fn slug(self) -> &'static str {
        match self {
            LineKey::MetroA => "metro-a",
            LineKey::MetroB => "metro-b",
            LineKey::MetroC => "metro-c",
            LineKey::Premetro => "premetro",
            LineKey::Gondola => "gondola",
        }
    }
}
