//! Line geometry, split into construction segments.
//!
//! Consecutive segments of a line share their join point so splicing them
//! yields one continuous polyline.

/// `(segment id, [lng, lat] points)` pairs for one line.
pub type SegmentTable = &'static [(&'static str, &'static [[f64; 2]])];

// Metro Line A (blue): Sesvete → Velika Gorica, northeast to southwest.
pub const METRO_A_SEGMENTS: SegmentTable = &[
    (
        "a-east",
        &[
            [16.1132, 45.8283], // Sesvete
            [16.0823, 45.8234], // Dubec
            [16.0456, 45.8198], // Dubrava
            [16.0178, 45.8145], // Kvaternikov trg
        ],
    ),
    (
        "a-center",
        &[
            [16.0178, 45.8145], // Kvaternikov trg
            [15.9785, 45.8047], // Glavni kolodvor
            [15.9712, 45.7923], // Savski most
        ],
    ),
    (
        "a-south",
        &[
            [15.9712, 45.7923], // Savski most
            [15.9634, 45.7812], // Siget
            [15.9523, 45.7687], // Lanište
            [15.9456, 45.7534], // Airport
            [15.9378, 45.7412], // Velika Gorica
        ],
    ),
];

// Metro Line B (red): Žitnjak → Podsused crosstown.
pub const METRO_B_SEGMENTS: SegmentTable = &[
    (
        "b-east",
        &[
            [16.0567, 45.8023], // Žitnjak
            [16.0312, 45.8089], // Borongaj
            [16.0178, 45.8145], // Kvaternikov trg
            [15.9785, 45.8047], // Glavni kolodvor
        ],
    ),
    (
        "b-west",
        &[
            [15.9785, 45.8047], // Glavni kolodvor
            [15.9623, 45.8078], // Tehnički muzej
            [15.9378, 45.8123], // Črnomerec
            [15.9123, 45.8156], // Vrapče
            [15.8834, 45.8189], // Podsused
        ],
    ),
];

// Metro Line C (green): Sava corridor, Ivanja Reka → Jankomir.
pub const METRO_C_SEGMENTS: SegmentTable = &[
    (
        "c-east",
        &[
            [16.0712, 45.7823], // Ivanja Reka
            [16.0312, 45.7856], // Žitnjak-jug
            [15.9978, 45.7878], // Zapruđe
            [15.9756, 45.7912], // Bundek
            [15.9785, 45.8047], // Glavni kolodvor
        ],
    ),
    (
        "c-west",
        &[
            [15.9785, 45.8047], // Glavni kolodvor
            [15.9534, 45.7934], // Sava centar
            [15.9234, 45.7878], // Jarun
            [15.8912, 45.7912], // Jankomir
        ],
    ),
];

// Premetro: tram tunnel under the Lower Town between two surface portals.
pub const PREMETRO_SEGMENTS: SegmentTable = &[
    (
        "p-west",
        &[
            [15.9551, 45.8093], // Zapadni portal
            [15.9655, 45.8117], // Britanski trg
            [15.9712, 45.8124], // Frankopanska
            [15.9772, 45.8130], // Trg bana Jelačića
        ],
    ),
    (
        "p-east",
        &[
            [15.9772, 45.8130], // Trg bana Jelačića
            [15.9810, 45.8085], // Zrinjevac
            [15.9785, 45.8047], // Glavni kolodvor
            [15.9893, 45.8012], // Istočni portal
        ],
    ),
];

// Sava Skyway gondola along the river.
pub const GONDOLA_SEGMENTS: SegmentTable = &[
    (
        "g-west",
        &[
            [15.9378, 45.8123], // Črnomerec
            [15.9312, 45.7989], // Jarun lake
            [15.9423, 45.7934], // Sava beach
            [15.9534, 45.7934], // Sava centar
        ],
    ),
    (
        "g-east",
        &[
            [15.9534, 45.7934], // Sava centar
            [15.9656, 45.7923], // Museum district
            [15.9756, 45.7912], // Bundek
            [15.9834, 45.7878], // Novi Zagreb hub
        ],
    ),
];
