use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FareClass {
    #[serde(rename = "Economy")]
    Economy,
    #[serde(rename = "Premium Economy")]
    PremiumEconomy,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "First Class")]
    FirstClass,
}

impl FareClass {
    pub const ALL: [FareClass; 4] = [
        FareClass::Economy,
        FareClass::PremiumEconomy,
        FareClass::Business,
        FareClass::FirstClass,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::PremiumEconomy => "Premium Economy",
            Self::Business => "Business",
            Self::FirstClass => "First Class",
        }
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFareClass(pub String);

impl fmt::Display for UnknownFareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fare class: {}", self.0)
    }
}

impl std::error::Error for UnknownFareClass {}

// exact names only, "economy" is not a fare class
impl FromStr for FareClass {
    type Err = UnknownFareClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| UnknownFareClass(s.into()))
    }
}

/// One value per fare class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTable<T> {
    pub economy: T,
    pub premium_economy: T,
    pub business: T,
    pub first_class: T,
}

impl<T> ClassTable<T> {
    pub fn new(economy: T, premium_economy: T, business: T, first_class: T) -> Self {
        Self {
            economy,
            premium_economy,
            business,
            first_class,
        }
    }

    pub fn get(&self, class: FareClass) -> &T {
        match class {
            FareClass::Economy => &self.economy,
            FareClass::PremiumEconomy => &self.premium_economy,
            FareClass::Business => &self.business,
            FareClass::FirstClass => &self.first_class,
        }
    }

    pub fn get_mut(&mut self, class: FareClass) -> &mut T {
        match class {
            FareClass::Economy => &mut self.economy,
            FareClass::PremiumEconomy => &mut self.premium_economy,
            FareClass::Business => &mut self.business,
            FareClass::FirstClass => &mut self.first_class,
        }
    }
}
