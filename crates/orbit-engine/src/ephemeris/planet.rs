// ephemeris/planet.rs
//
// Planet identifiers for the analytic theory.

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// The eight bodies covered by the analytic theory.
///
/// `EarthMoonBarycenter` is index 3; the theory has no term for the Earth itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Planet {
    Mercury,
    Venus,
    #[serde(rename = "earth_barycenter")]
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::EarthMoonBarycenter,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Planet from its 1-based index (1 = Mercury ... 8 = Neptune).
    pub fn from_index(index: i32) -> Result<Self> {
        match index {
            1..=8 => Ok(Self::ALL[(index - 1) as usize]),
            _ => Err(Error::InvalidPlanet(index)),
        }
    }

    /// 1-based index.
    pub fn index(self) -> i32 {
        self.row() as i32 + 1
    }

    /// Row into the element tables.
    pub(crate) fn row(self) -> usize {
        match self {
            Planet::Mercury => 0,
            Planet::Venus => 1,
            Planet::EarthMoonBarycenter => 2,
            Planet::Mars => 3,
            Planet::Jupiter => 4,
            Planet::Saturn => 5,
            Planet::Uranus => 6,
            Planet::Neptune => 7,
        }
    }

    /// Scenario-file name of the body.
    pub fn name(self) -> &'static str {
        match self {
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::EarthMoonBarycenter => "earth_barycenter",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
        }
    }

    /// Parse a scenario-file name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == lower)
            .ok_or_else(|| Error::UnknownPlanet(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for p in Planet::ALL {
            assert_eq!(Planet::from_index(p.index()).unwrap(), p);
        }
        assert_eq!(Planet::from_index(3).unwrap(), Planet::EarthMoonBarycenter);
    }

    #[test]
    fn out_of_range_index() {
        assert!(matches!(Planet::from_index(0), Err(Error::InvalidPlanet(0))));
        assert!(matches!(Planet::from_index(9), Err(Error::InvalidPlanet(9))));
    }

    #[test]
    fn names_parse() {
        assert_eq!(Planet::from_name("Mars").unwrap(), Planet::Mars);
        assert_eq!(
            Planet::from_name("earth_barycenter").unwrap(),
            Planet::EarthMoonBarycenter
        );
        assert!(Planet::from_name("pluto").is_err());
    }

    #[test]
    fn serde_uses_scenario_names() {
        let p: Planet = serde_json::from_str("\"earth_barycenter\"").unwrap();
        assert_eq!(p, Planet::EarthMoonBarycenter);
        assert_eq!(serde_json::to_string(&Planet::Neptune).unwrap(), "\"neptune\"");
    }
}
