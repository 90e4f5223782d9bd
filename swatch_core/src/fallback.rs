use crate::Color;
use std::fmt;

/// Where a resolved role color came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// An explicit theme value, named by its key (e.g. `switch.thumbSelected`).
    Override(&'static str),
    /// Nothing was set; the named default role was used.
    Default(&'static str),
}

impl Origin {
    pub fn is_override(self) -> bool {
        matches!(self, Origin::Override(_))
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Override(key) => write!(f, "{key}"),
            Origin::Default(role) => write!(f, "default: {role}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub color: Color,
    pub origin: Origin,
}

/// First `Some` in `candidates`, else `default`.
pub fn first_present<T>(candidates: impl IntoIterator<Item = Option<T>>, default: T) -> T {
    candidates.into_iter().flatten().next().unwrap_or(default)
}

/// Walk `steps` in priority order; the first set value wins. Otherwise the
/// `(role, color)` default is used.
pub fn resolve_chain(
    steps: &[(&'static str, Option<Color>)],
    default: (&'static str, Color),
) -> Resolved {
    steps
        .iter()
        .find_map(|&(key, value)| {
            value.map(|color| Resolved {
                color,
                origin: Origin::Override(key),
            })
        })
        .unwrap_or(Resolved {
            color: default.1,
            origin: Origin::Default(default.0),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_present_picks_earliest() {
        assert_eq!(first_present([None, Some(2), Some(3)], 9), 2);
        assert_eq!(first_present::<u8>([None, None], 9), 9);
        assert_eq!(first_present::<u8>([], 9), 9);
    }

    #[test]
    fn chain_reports_matching_key() {
        let red = Color::rgb(255, 0, 0);
        let blue = Color::rgb(0, 0, 255);

        let r = resolve_chain(
            &[("a", None), ("b", Some(red)), ("c", Some(blue))],
            ("primary", Color::BLACK),
        );
        assert_eq!(r.color, red);
        assert_eq!(r.origin, Origin::Override("b"));
        assert!(r.origin.is_override());
    }

    #[test]
    fn chain_falls_back_to_default_role() {
        let r = resolve_chain(&[("a", None)], ("surface", Color::WHITE));
        assert_eq!(r.color, Color::WHITE);
        assert_eq!(r.origin, Origin::Default("surface"));
        assert_eq!(r.origin.to_string(), "default: surface");
    }
}
