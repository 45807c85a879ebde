//! Compact symbol text for skill activation conditions.

use event_catalog::{Distance, Ground, RunningStyle, SchemaError, SkillProper};

/// Separator between axis symbols of one condition tuple.
pub const AXIS_SEPARATOR: char = '・';

/// Separator between condition tuples.
pub const TUPLE_SEPARATOR: char = '/';

pub fn style_symbol(style: RunningStyle) -> &'static str {
    match style {
        RunningStyle::Nige => "逃",
        RunningStyle::Senko => "先",
        RunningStyle::Sashi => "差",
        RunningStyle::Oikomi => "追",
    }
}

pub fn distance_symbol(distance: Distance) -> &'static str {
    match distance {
        Distance::Short => "短",
        Distance::Mile => "英",
        Distance::Middle => "中",
        Distance::Long => "长",
    }
}

pub fn ground_symbol(ground: Ground) -> &'static str {
    match ground {
        Ground::Dirt => "泥",
        Ground::Turf => "芝",
    }
}

/// Render one tuple: style, distance, ground, skipping unconstrained axes.
pub fn render_proper(proper: &SkillProper) -> Result<String, SchemaError> {
    let symbols = [
        proper.running_style()?.map(style_symbol),
        proper.distance()?.map(distance_symbol),
        proper.ground()?.map(ground_symbol),
    ];

    let mut out = String::new();
    for symbol in symbols.into_iter().flatten() {
        if !out.is_empty() {
            out.push(AXIS_SEPARATOR);
        }
        out.push_str(symbol);
    }
    Ok(out)
}

/// Render all tuples of a skill, joined with `/`.
///
/// Any code outside the known enumerations aborts rendering.
pub fn render_conditions(propers: &[SkillProper]) -> Result<String, SchemaError> {
    let mut out = String::new();
    for (i, proper) in propers.iter().enumerate() {
        if i != 0 {
            out.push(TUPLE_SEPARATOR);
        }
        out.push_str(&render_proper(proper)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_axis() {
        let nige = SkillProper::new(Some(RunningStyle::Nige), None, None);
        assert_eq!(render_conditions(&[nige]).unwrap(), "逃");

        let long = SkillProper::new(None, Some(Distance::Long), None);
        assert_eq!(render_conditions(&[long]).unwrap(), "长");
    }

    #[test]
    fn test_axes_joined_with_mid_dot() {
        let proper = SkillProper::new(Some(RunningStyle::Sashi), Some(Distance::Mile), Some(Ground::Dirt));
        assert_eq!(render_conditions(&[proper]).unwrap(), "差・英・泥");

        let no_style = SkillProper::new(None, Some(Distance::Short), Some(Ground::Turf));
        assert_eq!(render_conditions(&[no_style]).unwrap(), "短・芝");
    }

    #[test]
    fn test_tuples_joined_with_slash() {
        let propers = [
            SkillProper::new(Some(RunningStyle::Senko), None, None),
            SkillProper::new(None, Some(Distance::Middle), Some(Ground::Turf)),
            SkillProper::new(Some(RunningStyle::Oikomi), None, None),
        ];
        assert_eq!(render_conditions(&propers).unwrap(), "先/中・芝/追");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_conditions(&[]).unwrap(), "");
        assert_eq!(render_conditions(&[SkillProper::default()]).unwrap(), "");
    }

    #[test]
    fn test_unknown_code_is_fatal() {
        let bad = SkillProper {
            style: 1,
            distance: 9,
            ground: 0,
        };
        assert_eq!(render_conditions(&[bad]), Err(SchemaError::UnknownDistance(9)));

        let bad_ground = SkillProper {
            style: 0,
            distance: 0,
            ground: 7,
        };
        let good = SkillProper::new(Some(RunningStyle::Nige), None, None);
        assert_eq!(
            render_conditions(&[good, bad_ground]),
            Err(SchemaError::UnknownGround(7))
        );
    }
}
