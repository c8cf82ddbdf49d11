//! The font families logos can be set in, and the weights each of them ships.

use crate::source::Weight;

/// A font family and the weights available for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    pub name: &'static str,
    pub weights: &'static [u16],
}

impl Family {
    pub fn has_weight(&self, weight: Weight) -> bool {
        self.weights.contains(&weight.value())
    }

    /// The offered weight closest to `weight`, preferring the lighter one on ties
    pub fn nearest_weight(&self, weight: Weight) -> Option<Weight> {
        self.weights
            .iter()
            .min_by_key(|w| (w.abs_diff(weight.value()), **w))
            .and_then(|w| Weight::new(*w).ok())
    }
}

const STANDARD: &[u16] = &[300, 400, 500, 600, 700];

pub static FAMILIES: &[Family] = &[
    Family { name: "Inter", weights: STANDARD },
    Family { name: "Playfair Display", weights: STANDARD },
    Family { name: "Montserrat", weights: STANDARD },
    Family { name: "Open Sans", weights: STANDARD },
    Family { name: "Poppins", weights: STANDARD },
    Family { name: "Oswald", weights: STANDARD },
    Family { name: "Outfit", weights: STANDARD },
    Family { name: "Work Sans", weights: STANDARD },
    Family { name: "DM Sans", weights: STANDARD },
    Family { name: "DM Serif Text", weights: STANDARD },
    Family { name: "Nunito Sans", weights: STANDARD },
    Family { name: "Quicksand", weights: STANDARD },
    Family { name: "Lexend Deca", weights: STANDARD },
    Family { name: "Funnel Sans", weights: STANDARD },
    Family { name: "Funnel Display", weights: STANDARD },
    Family { name: "Onest", weights: STANDARD },
    Family { name: "Figtree", weights: STANDARD },
    Family { name: "Roboto", weights: &[300, 400, 500, 700] },
    Family { name: "Lato", weights: &[300, 400, 700] },
    Family { name: "Merriweather", weights: &[300, 400, 700] },
    Family { name: "Source Sans Pro", weights: &[300, 400, 600, 700] },
    Family { name: "Questrial", weights: &[400] },
    Family { name: "Gabarito", weights: &[400, 500, 600, 700] },
    Family { name: "Tomorrow", weights: &[100, 200, 300, 400, 500, 600, 700, 800, 900] },
    Family { name: "Sniglet", weights: &[400, 800] },
];

/// Look a family up by name, ignoring case and surrounding whitespace
pub fn find_family(name: &str) -> Option<&'static Family> {
    let name = name.trim();
    FAMILIES.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Whether `name` mentions one of the known families (`"Inter Bold"` is allowed)
pub fn is_allowed(name: &str) -> bool {
    let name = name.to_lowercase();
    FAMILIES
        .iter()
        .any(|f| name.contains(&f.name.to_lowercase()))
}

/// The weights offered for a family, or an empty list for unknown families
pub fn weights_for(name: &str) -> &'static [u16] {
    find_family(name).map(|f| f.weights).unwrap_or_default()
}
