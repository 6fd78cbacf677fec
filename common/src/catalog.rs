//! Static jurisdiction reference data.
//!
//! The state table lists the 50 states plus the District of Columbia in the
//! order the rule form presents them. Only two states carry city-level rules:
//! Illinois (Chicago) and Colorado (its home-rule cities).

use serde::Serialize;

/// State name and postal abbreviation, in form order.
pub const US_STATES: [(&str, &str); 51] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
    ("District of Columbia", "DC"),
];

pub const ILLINOIS_CITIES: [&str; 1] = ["Chicago"];

pub const COLORADO_CITIES: [&str; 69] = [
    "Arvada",
    "Aspen",
    "Aurora",
    "Avon",
    "Black Hawk",
    "Boulder",
    "Breckenridge",
    "Brighton",
    "Broomfield",
    "Carbondale",
    "Castle Pines",
    "Castle Rock",
    "Centennial",
    "Central City",
    "Cherry Hills Village",
    "Colorado Springs",
    "Commerce City",
    "Cortez",
    "Craig",
    "Crested Butte",
    "Dacono",
    "Delta",
    "Denver",
    "Durango",
    "Edgewater",
    "Englewood",
    "Evans",
    "Federal Heights",
    "Fort Collins",
    "Frisco",
    "Glendale",
    "Glenwood Springs",
    "Golden",
    "Grand Junction",
    "Greeley",
    "Greenwood Village",
    "Gunnison",
    "Gypsum",
    "La Junta",
    "Lafayette",
    "Lakewood",
    "Lamar",
    "Littleton",
    "Lone Tree",
    "Longmont",
    "Louisville",
    "Loveland",
    "Montrose",
    "Mountain Village",
    "Mt Crested Butte",
    "Northglenn",
    "Parker",
    "Pueblo",
    "Ridgeway",
    "Rifle",
    "Sheridan",
    "Silverthorne",
    "Snowmass Village",
    "Steamboat Springs",
    "Sterling",
    "Telluride",
    "Thornton",
    "Timnath",
    "Vail",
    "Westminster",
    "Wheat Ridge",
    "Windsor",
    "Winter Park",
    "Woodland Park",
];

/// A catalog state together with the cities that get their own rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Jurisdiction {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub sub_regions: &'static [&'static str],
}

/// Iterates every catalog state in form order.
pub fn states() -> impl Iterator<Item = Jurisdiction> {
    US_STATES.iter().map(|&(name, abbreviation)| Jurisdiction {
        name,
        abbreviation,
        sub_regions: sub_regions(name).unwrap_or(&[]),
    })
}

pub fn abbreviation(state: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|&(_, abbr)| abbr)
}

/// Cities with their own rules under `state`, or `None` when the state has none.
pub fn sub_regions(state: &str) -> Option<&'static [&'static str]> {
    match state {
        "Illinois" => Some(&ILLINOIS_CITIES),
        "Colorado" => Some(&COLORADO_CITIES),
        _ => None,
    }
}
