//! Skill activation conditions ("propers").
//!
//! The database stores each axis as a raw integer code where `0` means the
//! axis is unconstrained. The typed accessors turn a code into
//! `Option<Enum>` and reject codes outside the known set.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Running style a skill is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunningStyle {
    /// Front runner.
    Nige,
    /// Pace chaser.
    Senko,
    /// Late surger.
    Sashi,
    /// End closer.
    Oikomi,
}

impl RunningStyle {
    pub fn from_code(code: i32) -> Result<Option<Self>, SchemaError> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(RunningStyle::Nige)),
            2 => Ok(Some(RunningStyle::Senko)),
            3 => Ok(Some(RunningStyle::Sashi)),
            4 => Ok(Some(RunningStyle::Oikomi)),
            other => Err(SchemaError::UnknownStyle(other)),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            RunningStyle::Nige => 1,
            RunningStyle::Senko => 2,
            RunningStyle::Sashi => 3,
            RunningStyle::Oikomi => 4,
        }
    }
}

/// Race distance category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distance {
    Short,
    Mile,
    Middle,
    Long,
}

impl Distance {
    pub fn from_code(code: i32) -> Result<Option<Self>, SchemaError> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(Distance::Short)),
            2 => Ok(Some(Distance::Mile)),
            3 => Ok(Some(Distance::Middle)),
            4 => Ok(Some(Distance::Long)),
            other => Err(SchemaError::UnknownDistance(other)),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Distance::Short => 1,
            Distance::Mile => 2,
            Distance::Middle => 3,
            Distance::Long => 4,
        }
    }
}

/// Track surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ground {
    Turf,
    Dirt,
}

impl Ground {
    pub fn from_code(code: i32) -> Result<Option<Self>, SchemaError> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(Ground::Turf)),
            2 => Ok(Some(Ground::Dirt)),
            other => Err(SchemaError::UnknownGround(other)),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Ground::Turf => 1,
            Ground::Dirt => 2,
        }
    }
}

/// One activation-condition tuple, as stored in the skill database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProper {
    #[serde(default)]
    pub style: i32,
    #[serde(default)]
    pub distance: i32,
    #[serde(default)]
    pub ground: i32,
}

impl SkillProper {
    /// Build a tuple from typed axes.
    pub fn new(style: Option<RunningStyle>, distance: Option<Distance>, ground: Option<Ground>) -> Self {
        Self {
            style: style.map_or(0, RunningStyle::code),
            distance: distance.map_or(0, Distance::code),
            ground: ground.map_or(0, Ground::code),
        }
    }

    pub fn running_style(&self) -> Result<Option<RunningStyle>, SchemaError> {
        RunningStyle::from_code(self.style)
    }

    pub fn distance(&self) -> Result<Option<Distance>, SchemaError> {
        Distance::from_code(self.distance)
    }

    pub fn ground(&self) -> Result<Option<Ground>, SchemaError> {
        Ground::from_code(self.ground)
    }

    /// True when no axis carries a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.style == 0 && self.distance == 0 && self.ground == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_means_unconstrained() {
        assert_eq!(RunningStyle::from_code(0), Ok(None));
        assert_eq!(Distance::from_code(0), Ok(None));
        assert_eq!(Ground::from_code(0), Ok(None));
        assert!(SkillProper::default().is_unconstrained());
    }

    #[test]
    fn test_code_round_trip() {
        for style in [
            RunningStyle::Nige,
            RunningStyle::Senko,
            RunningStyle::Sashi,
            RunningStyle::Oikomi,
        ] {
            assert_eq!(RunningStyle::from_code(style.code()), Ok(Some(style)));
        }
        assert_eq!(Distance::from_code(Distance::Mile.code()), Ok(Some(Distance::Mile)));
        assert_eq!(Ground::from_code(Ground::Dirt.code()), Ok(Some(Ground::Dirt)));
    }

    #[test]
    fn test_out_of_range_codes_are_schema_errors() {
        assert_eq!(RunningStyle::from_code(5), Err(SchemaError::UnknownStyle(5)));
        assert_eq!(Distance::from_code(-1), Err(SchemaError::UnknownDistance(-1)));
        assert_eq!(Ground::from_code(3), Err(SchemaError::UnknownGround(3)));
    }

    #[test]
    fn test_proper_typed_accessors() {
        let proper = SkillProper::new(Some(RunningStyle::Sashi), None, Some(Ground::Turf));
        assert_eq!(proper.style, 3);
        assert_eq!(proper.distance, 0);
        assert_eq!(proper.running_style(), Ok(Some(RunningStyle::Sashi)));
        assert_eq!(proper.distance(), Ok(None));
        assert_eq!(proper.ground(), Ok(Some(Ground::Turf)));
        assert!(!proper.is_unconstrained());
    }
}
