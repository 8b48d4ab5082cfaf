//! Riverfront development zones drawn as polygons.

/// Land use of a development zone, which picks its overlay color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    Recreation,
    Cultural,
    Mixed,
}

impl ZoneKind {
    /// sRGB color as `[r, g, b]`.
    pub fn color(self) -> [u8; 3] {
        match self {
            ZoneKind::Recreation => [0x22, 0xc5, 0x5e],
            ZoneKind::Cultural => [0xa8, 0x55, 0xf7],
            ZoneKind::Mixed => [0x3b, 0x82, 0xf6],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevelopmentZone {
    pub name: &'static str,
    pub kind: ZoneKind,
    /// Closed ring: the last point repeats the first.
    pub ring: &'static [[f64; 2]],
}

pub const DEVELOPMENT_ZONES: &[DevelopmentZone] = &[
    DevelopmentZone {
        name: "Jarun Sports District",
        kind: ZoneKind::Recreation,
        ring: &[
            [15.9212, 45.7934],
            [15.9345, 45.7934],
            [15.9345, 45.8012],
            [15.9212, 45.8012],
            [15.9212, 45.7934],
        ],
    },
    DevelopmentZone {
        name: "Sava Cultural Quarter",
        kind: ZoneKind::Cultural,
        ring: &[
            [15.9489, 45.7889],
            [15.9623, 45.7889],
            [15.9623, 45.7956],
            [15.9489, 45.7956],
            [15.9489, 45.7889],
        ],
    },
    DevelopmentZone {
        name: "Bundek Entertainment Zone",
        kind: ZoneKind::Mixed,
        ring: &[
            [15.9689, 45.7867],
            [15.9823, 45.7867],
            [15.9823, 45.7934],
            [15.9689, 45.7934],
            [15.9689, 45.7867],
        ],
    },
];
