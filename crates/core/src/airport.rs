//! Reference airport directory.
//!
//! Static table of IATA codes covering the Mexican domestic network plus the
//! major international destinations served from it. Lookup is by exact code
//! equality; the table is sorted by code so a binary search suffices.

/// A single entry in the reference directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Airport {
    /// 3-letter IATA code.
    pub iata: &'static str,
    /// Airport name.
    pub name: &'static str,
}

/// Sorted by IATA code.
pub const AIRPORTS: &[Airport] = &[
    Airport { iata: "ACA", name: "Acapulco International" },
    Airport { iata: "AMS", name: "Amsterdam Schiphol" },
    Airport { iata: "ATL", name: "Hartsfield-Jackson Atlanta International" },
    Airport { iata: "AUS", name: "Austin-Bergstrom International" },
    Airport { iata: "BCN", name: "Barcelona-El Prat" },
    Airport { iata: "BJX", name: "Del Bajio International" },
    Airport { iata: "BOG", name: "El Dorado International" },
    Airport { iata: "BOS", name: "Boston Logan International" },
    Airport { iata: "CDG", name: "Paris Charles de Gaulle" },
    Airport { iata: "CEN", name: "Ciudad Obregon International" },
    Airport { iata: "CJS", name: "Ciudad Juarez International" },
    Airport { iata: "CLT", name: "Charlotte Douglas International" },
    Airport { iata: "CME", name: "Ciudad del Carmen International" },
    Airport { iata: "CUL", name: "Culiacan International" },
    Airport { iata: "CUN", name: "Cancun International" },
    Airport { iata: "CUU", name: "Chihuahua International" },
    Airport { iata: "CZM", name: "Cozumel International" },
    Airport { iata: "DEN", name: "Denver International" },
    Airport { iata: "DFW", name: "Dallas/Fort Worth International" },
    Airport { iata: "DGO", name: "Durango International" },
    Airport { iata: "DTW", name: "Detroit Metropolitan" },
    Airport { iata: "DXB", name: "Dubai International" },
    Airport { iata: "EWR", name: "Newark Liberty International" },
    Airport { iata: "EZE", name: "Buenos Aires Ezeiza International" },
    Airport { iata: "FRA", name: "Frankfurt am Main" },
    Airport { iata: "GDL", name: "Guadalajara International" },
    Airport { iata: "GIG", name: "Rio de Janeiro-Galeao International" },
    Airport { iata: "GRU", name: "Sao Paulo-Guarulhos International" },
    Airport { iata: "GYM", name: "Guaymas International" },
    Airport { iata: "HAV", name: "Havana Jose Marti International" },
    Airport { iata: "HMO", name: "Hermosillo International" },
    Airport { iata: "HUX", name: "Bahias de Huatulco International" },
    Airport { iata: "IAD", name: "Washington Dulles International" },
    Airport { iata: "IAH", name: "Houston George Bush Intercontinental" },
    Airport { iata: "ICN", name: "Seoul Incheon International" },
    Airport { iata: "JFK", name: "New York John F. Kennedy International" },
    Airport { iata: "LAP", name: "La Paz International" },
    Airport { iata: "LAS", name: "Las Vegas Harry Reid International" },
    Airport { iata: "LAX", name: "Los Angeles International" },
    Airport { iata: "LHR", name: "London Heathrow" },
    Airport { iata: "LIM", name: "Lima Jorge Chavez International" },
    Airport { iata: "LMM", name: "Los Mochis International" },
    Airport { iata: "LTO", name: "Loreto International" },
    Airport { iata: "MAD", name: "Madrid Barajas" },
    Airport { iata: "MAM", name: "Matamoros International" },
    Airport { iata: "MCO", name: "Orlando International" },
    Airport { iata: "MEX", name: "Mexico City International" },
    Airport { iata: "MIA", name: "Miami International" },
    Airport { iata: "MID", name: "Merida International" },
    Airport { iata: "MLM", name: "Morelia International" },
    Airport { iata: "MTY", name: "Monterrey International" },
    Airport { iata: "MXL", name: "Mexicali International" },
    Airport { iata: "MZT", name: "Mazatlan International" },
    Airport { iata: "NLD", name: "Nuevo Laredo International" },
    Airport { iata: "NRT", name: "Tokyo Narita International" },
    Airport { iata: "OAX", name: "Oaxaca International" },
    Airport { iata: "ORD", name: "Chicago O'Hare International" },
    Airport { iata: "PBC", name: "Puebla International" },
    Airport { iata: "PDX", name: "Portland International" },
    Airport { iata: "PHX", name: "Phoenix Sky Harbor International" },
    Airport { iata: "PVR", name: "Puerto Vallarta International" },
    Airport { iata: "PXM", name: "Puerto Escondido International" },
    Airport { iata: "QRO", name: "Queretaro Intercontinental" },
    Airport { iata: "REX", name: "Reynosa International" },
    Airport { iata: "SAN", name: "San Diego International" },
    Airport { iata: "SCL", name: "Santiago International" },
    Airport { iata: "SEA", name: "Seattle-Tacoma International" },
    Airport { iata: "SFO", name: "San Francisco International" },
    Airport { iata: "SJC", name: "San Jose Mineta International" },
    Airport { iata: "SJD", name: "Los Cabos International" },
    Airport { iata: "SLP", name: "San Luis Potosi International" },
    Airport { iata: "SLW", name: "Saltillo International" },
    Airport { iata: "TAM", name: "Tampico International" },
    Airport { iata: "TAP", name: "Tapachula International" },
    Airport { iata: "TGZ", name: "Tuxtla Gutierrez International" },
    Airport { iata: "TIJ", name: "Tijuana International" },
    Airport { iata: "TLC", name: "Toluca International" },
    Airport { iata: "TRC", name: "Torreon International" },
    Airport { iata: "UPN", name: "Uruapan International" },
    Airport { iata: "VER", name: "Veracruz International" },
    Airport { iata: "VSA", name: "Villahermosa International" },
    Airport { iata: "YUL", name: "Montreal-Trudeau International" },
    Airport { iata: "YVR", name: "Vancouver International" },
    Airport { iata: "YYZ", name: "Toronto Pearson International" },
    Airport { iata: "ZCL", name: "Zacatecas International" },
    Airport { iata: "ZIH", name: "Ixtapa-Zihuatanejo International" },
    Airport { iata: "ZLO", name: "Manzanillo International" },
];

/// Find an airport by exact IATA code.
pub fn find_airport(code: &str) -> Option<&'static Airport> {
    AIRPORTS
        .binary_search_by(|a| a.iata.cmp(code))
        .ok()
        .map(|i| &AIRPORTS[i])
}

/// Whether a code exists in the reference directory.
pub fn is_known_airport(code: &str) -> bool {
    find_airport(code).is_some()
}
