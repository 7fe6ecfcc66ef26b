//! Hand-curated catalog of attractions, grouped by region.
//!
//! The catalog is static data compiled into the binary. Regions and the
//! attractions inside them keep their curated display order.

use crate::models::Place;

/// Category attached to catalog attractions when they are bookmarked.
pub const ATTRACTION_CATEGORY: &str = "tourism.sights";

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Attraction {
    const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }

    /// Converts the attraction into a bookmarkable place.
    pub fn to_place(&self) -> Place {
        Place::named(self.name, self.latitude, self.longitude).with_category(ATTRACTION_CATEGORY)
    }
}

/// A named group of attractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub name: &'static str,
    pub attractions: &'static [Attraction],
}

const REGIONS: &[Region] = &[
    Region {
        name: "Western Cape",
        attractions: &[
            Attraction::new("Table Mountain, Cape Town", -33.9628, 18.4098),
            Attraction::new("V&A Waterfront", -33.9036, 18.4207),
            Attraction::new("Cape of Good Hope", -34.3568, 18.4740),
            Attraction::new("Stellenbosch Wine Route", -33.9366, 18.8610),
            Attraction::new("Hermanus Whale Watching", -34.4187, 19.2410),
        ],
    },
    Region {
        name: "Gauteng",
        attractions: &[
            Attraction::new("Apartheid Museum", -26.2367, 28.0083),
            Attraction::new("Vilakazi Street, Soweto", -26.2360, 27.9304),
            Attraction::new("Union Buildings, Pretoria", -25.7402, 28.2120),
        ],
    },
    Region {
        name: "Mpumalanga",
        attractions: &[
            Attraction::new("Kruger National Park (Skukuza)", -24.9923, 31.5969),
            Attraction::new("Blyde River Canyon", -24.5850, 30.8074),
            Attraction::new("God's Window", -24.8782, 30.8947),
        ],
    },
    Region {
        name: "KwaZulu-Natal",
        attractions: &[
            Attraction::new("Durban Golden Mile", -29.8527, 31.0456),
            Attraction::new("uShaka Marine World", -29.8677, 31.0456),
            Attraction::new("Drakensberg Amphitheatre", -28.6856, 28.9360),
        ],
    },
    Region {
        name: "Eastern Cape",
        attractions: &[
            Attraction::new("Addo Elephant Park", -33.4459, 25.7499),
            Attraction::new("Tsitsikamma National Park", -34.0329, 23.8879),
        ],
    },
    Region {
        name: "Free State",
        attractions: &[
            Attraction::new("Golden Gate Highlands Park", -28.5162, 28.6155),
            Attraction::new("Clarens", -28.5130, 28.4234),
        ],
    },
    Region {
        name: "North West",
        attractions: &[
            Attraction::new("Pilanesberg National Park", -25.2510, 27.0819),
            Attraction::new("Sun City", -25.3442, 27.0996),
        ],
    },
    Region {
        name: "Limpopo",
        attractions: &[
            Attraction::new("Mapungubwe National Park", -22.1963, 29.3957),
            Attraction::new("Bela-Bela Hot Springs", -24.8833, 28.2833),
        ],
    },
    Region {
        name: "Northern Cape",
        attractions: &[
            Attraction::new("Augrabies Falls", -28.5965, 20.3397),
            Attraction::new("Kgalagadi Transfrontier Park", -26.4470, 20.6111),
        ],
    },
    Region {
        name: "Garden Route",
        attractions: &[
            Attraction::new("Knysna Heads", -34.0809, 23.0606),
            Attraction::new("Mossel Bay Point", -34.1808, 22.1460),
        ],
    },
];

/// All regions in display order.
pub fn regions() -> &'static [Region] {
    REGIONS
}

/// Looks up a region by name, ignoring case.
pub fn region(name: &str) -> Option<&'static Region> {
    let wanted = name.trim().to_lowercase();
    REGIONS.iter().find(|r| r.name.to_lowercase() == wanted)
}

/// Iterates every attraction across all regions.
pub fn all_attractions() -> impl Iterator<Item = &'static Attraction> {
    REGIONS.iter().flat_map(|r| r.attractions.iter())
}

/// Looks up an attraction by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Attraction> {
    let wanted = name.trim().to_lowercase();
    all_attractions().find(|a| a.name.to_lowercase() == wanted)
}
