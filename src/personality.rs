//! Driving personality selection.

use core::fmt;
use core::str::FromStr;

/// A driving-style preset that shapes how hard the vehicle accelerates and brakes.
///
/// The integer values are the ones sent by the upstream selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Personality {
    /// Defer to the caller's own limits
    #[default]
    Stock = 0,
    Eco = 1,
    Sport = 2,
}

impl Personality {
    pub const ALL: [Personality; 3] = [Personality::Stock, Personality::Eco, Personality::Sport];

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Stock => "stock",
            Personality::Eco => "eco",
            Personality::Sport => "sport",
        }
    }
}

impl TryFrom<i32> for Personality {
    type Error = &'static str;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Personality::Stock),
            1 => Ok(Personality::Eco),
            2 => Ok(Personality::Sport),
            _ => Err("Unknown acceleration personality"),
        }
    }
}

impl TryFrom<u8> for Personality {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Personality::try_from(i32::from(value))
    }
}

impl From<Personality> for i32 {
    fn from(value: Personality) -> Self {
        value as i32
    }
}

impl FromStr for Personality {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Personality::ALL
            .into_iter()
            .find(|p| s.eq_ignore_ascii_case(p.as_str()))
            .ok_or("Unknown acceleration personality")
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
