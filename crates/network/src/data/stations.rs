//! Station points for every line.

use super::LineKey;
use crate::geo::LngLat;

/// A station marker on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub name: &'static str,
    pub position: LngLat,
    /// Lines serving the station.
    pub lines: &'static [LineKey],
    pub is_interchange: bool,
    /// Short text for the station popup.
    pub description: &'static str,
}

const fn station(name: &'static str, lng: f64, lat: f64, lines: &'static [LineKey]) -> Station {
    Station {
        name,
        position: LngLat::new(lng, lat),
        lines,
        is_interchange: lines.len() > 1,
        description: "",
    }
}

const fn described(
    name: &'static str,
    lng: f64,
    lat: f64,
    line: &'static [LineKey],
    description: &'static str,
) -> Station {
    Station {
        name,
        position: LngLat::new(lng, lat),
        lines: line,
        is_interchange: false,
        description,
    }
}

use super::LineKey::{Gondola, MetroA, MetroB, MetroC, Premetro};

pub const METRO_STATIONS: &[Station] = &[
    // Line A
    station("Sesvete", 16.1132, 45.8283, &[MetroA]),
    station("Dubec", 16.0823, 45.8234, &[MetroA]),
    station("Dubrava", 16.0456, 45.8198, &[MetroA]),
    station("Kvaternikov trg", 16.0178, 45.8145, &[MetroA, MetroB]),
    station("Glavni kolodvor", 15.9785, 45.8047, &[MetroA, MetroB, MetroC]),
    station("Savski most", 15.9712, 45.7923, &[MetroA]),
    station("Siget", 15.9634, 45.7812, &[MetroA]),
    station("Lanište", 15.9523, 45.7687, &[MetroA]),
    station("Airport", 15.9456, 45.7534, &[MetroA]),
    station("Velika Gorica", 15.9378, 45.7412, &[MetroA]),
    // Line B
    station("Žitnjak", 16.0567, 45.8023, &[MetroB]),
    station("Borongaj", 16.0312, 45.8089, &[MetroB]),
    station("Tehnički muzej", 15.9623, 45.8078, &[MetroB]),
    station("Črnomerec", 15.9378, 45.8123, &[MetroB]),
    station("Vrapče", 15.9123, 45.8156, &[MetroB]),
    station("Podsused", 15.8834, 45.8189, &[MetroB]),
    // Line C
    station("Ivanja Reka", 16.0712, 45.7823, &[MetroC]),
    station("Žitnjak-jug", 16.0312, 45.7856, &[MetroC]),
    station("Zapruđe", 15.9978, 45.7878, &[MetroC]),
    station("Bundek", 15.9756, 45.7912, &[MetroC]),
    station("Sava centar", 15.9534, 45.7934, &[MetroC]),
    station("Jarun", 15.9234, 45.7878, &[MetroC]),
    station("Jankomir", 15.8912, 45.7912, &[MetroC]),
];

pub const PREMETRO_STATIONS: &[Station] = &[
    described("Zapadni portal", 15.9551, 45.8093, &[Premetro], "Portal station"),
    described("Britanski trg", 15.9655, 45.8117, &[Premetro], "Underground station"),
    described("Frankopanska", 15.9712, 45.8124, &[Premetro], "Underground station"),
    described("Trg bana Jelačića", 15.9772, 45.8130, &[Premetro], "Main square interchange"),
    described("Zrinjevac", 15.9810, 45.8085, &[Premetro], "Underground station"),
    described("Glavni kolodvor (premetro)", 15.9785, 45.8047, &[Premetro], "Metro interchange"),
    described("Istočni portal", 15.9893, 45.8012, &[Premetro], "Portal station"),
];

pub const GONDOLA_STATIONS: &[Station] = &[
    described("Črnomerec Terminal", 15.9378, 45.8123, &[Gondola], "Metro Line B connection"),
    described("Jarun Lake", 15.9312, 45.7989, &[Gondola], "Sports & recreation zone"),
    described("Sava Beach", 15.9423, 45.7934, &[Gondola], "Beach & swimming area"),
    described("Sava Centar", 15.9534, 45.7934, &[Gondola], "Cultural & conference center"),
    described("Museum District", 15.9656, 45.7923, &[Gondola], "New cultural quarter"),
    described("Bundek Park", 15.9756, 45.7912, &[Gondola], "Park & entertainment zone"),
    described("Novi Zagreb Hub", 15.9834, 45.7878, &[Gondola], "Metro Line C connection"),
];

/// Premetro stations at either end of the tunnel.
pub fn is_portal(station: &Station) -> bool {
    station.name.ends_with("portal")
}

/// Every station of every line.
pub fn all_stations() -> impl Iterator<Item = &'static Station> {
    METRO_STATIONS
        .iter()
        .chain(PREMETRO_STATIONS)
        .chain(GONDOLA_STATIONS)
}
