//! The three user preferences and their token normalization.
//!
//! Root attributes and persisted values are untrusted strings; every one of
//! them resolves to exactly one of two variants, falling back to the default
//! for anything unrecognized.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Resolve a raw token; anything other than `light` is dark.
    pub fn from_token(token: &str) -> Self {
        match token {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Whether `token` is one of the two recognized theme values.
    pub fn is_token(token: &str) -> bool {
        matches!(token, "light" | "dark")
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Motion {
    #[default]
    Auto,
    Off,
}

impl Motion {
    /// Resolve a raw token; anything other than `off` is auto.
    pub fn from_token(token: &str) -> Self {
        match token {
            "off" => Motion::Off,
            _ => Motion::Auto,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Motion::Auto => "auto",
            Motion::Off => "off",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Motion::Auto => Motion::Off,
            Motion::Off => Motion::Auto,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Constellations {
    #[default]
    On,
    Off,
}

impl Constellations {
    /// Resolve a raw token; anything other than `off` is on.
    pub fn from_token(token: &str) -> Self {
        match token {
            "off" => Constellations::Off,
            _ => Constellations::On,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Constellations::On => "on",
            Constellations::Off => "off",
        }
    }

    pub fn is_on(self) -> bool {
        self == Constellations::On
    }

    pub fn toggled(self) -> Self {
        match self {
            Constellations::On => Constellations::Off,
            Constellations::Off => Constellations::On,
        }
    }
}

macro_rules! display_as_token {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_token!(Theme, Motion, Constellations);

/// Snapshot of the current preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreferenceState {
    pub theme: Theme,
    pub motion: Motion,
    pub constellations: Constellations,
}

impl PreferenceState {
    /// Seed from raw attribute tokens; `None` resolves to the default.
    pub fn from_tokens(
        theme: Option<&str>,
        motion: Option<&str>,
        constellations: Option<&str>,
    ) -> Self {
        Self {
            theme: theme.map(Theme::from_token).unwrap_or_default(),
            motion: motion.map(Motion::from_token).unwrap_or_default(),
            constellations: constellations
                .map(Constellations::from_token)
                .unwrap_or_default(),
        }
    }
}
