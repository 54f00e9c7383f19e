//! Status lookup shared by all record types.
//!
//! Every status enum implements [`StatusDisplay`], so a page never carries
//! its own `get_status_color` / `get_status_text` helpers.

/// Badge colour family understood by the frontend `Badge` component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeTone {
    /// Variant string passed to the `Badge` component.
    pub fn variant(&self) -> &'static str {
        match self {
            BadgeTone::Primary => "primary",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Error => "error",
            BadgeTone::Neutral => "neutral",
        }
    }
}

pub trait StatusDisplay: Copy + PartialEq + Sized + 'static {
    /// Every variant, in the order offered by status filters.
    const ALL: &'static [Self];

    /// Stable machine code, used as `<option value>` and in CSV.
    fn code(&self) -> &'static str;

    /// Human-readable label.
    fn label(&self) -> &'static str;

    fn tone(&self) -> BadgeTone;

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }
}

/// Implements [`StatusDisplay`] for a fieldless enum from a
/// `Variant => (code, label, tone)` table.
#[macro_export]
macro_rules! status_display {
    ($ty:ident { $($variant:ident => ($code:literal, $label:literal, $tone:ident)),+ $(,)? }) => {
        impl $crate::shared::status::StatusDisplay for $ty {
            const ALL: &'static [Self] = &[$($ty::$variant),+];

            fn code(&self) -> &'static str {
                match self {
                    $($ty::$variant => $code),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }

            fn tone(&self) -> $crate::shared::status::BadgeTone {
                match self {
                    $($ty::$variant => $crate::shared::status::BadgeTone::$tone),+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Light {
        Green,
        Red,
    }

    status_display!(Light {
        Green => ("green", "Vert", Success),
        Red => ("red", "Rouge", Error),
    });

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(Light::from_code("red"), Some(Light::Red));
        assert_eq!(Light::from_code("amber"), None);
    }

    #[test]
    fn test_tone_variant() {
        assert_eq!(Light::Green.tone().variant(), "success");
        assert_eq!(Light::Red.label(), "Rouge");
        assert_eq!(Light::ALL.len(), 2);
    }
}
