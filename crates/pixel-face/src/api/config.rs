use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::types::{Button, Mood};

/// Errors raised while loading an avatar configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed avatar config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("blink interval is inverted: min {min} ms > max {max} ms")]
    InvertedBlinkInterval { min: u32, max: u32 },

    #[error("blink interval min {min} ms must be positive and longer than a blink ({blink} ms)")]
    BlinkIntervalTooShort { min: u32, blink: u32 },

    #[error("click milestone must be at least 1")]
    ZeroClickMilestone,

    #[error("max pupil offset must be positive and finite, got {0}")]
    InvalidPupilOffset(f32),
}

/// Which fourth navigation button the home page shows.
/// The two layouts are mutually exclusive variants of the same page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonLayout {
    #[default]
    Resume,
    Games,
}

impl ButtonLayout {
    /// Buttons in page order.
    pub fn buttons(self) -> [Button; 4] {
        let last = match self {
            ButtonLayout::Resume => Button::Resume,
            ButtonLayout::Games => Button::Games,
        };
        [Button::About, Button::Work, Button::Contact, last]
    }

    /// Resolve a button name. Names outside this layout are unrecognized.
    pub fn button(self, name: &str) -> Option<Button> {
        self.buttons().into_iter().find(|b| b.name() == name)
    }
}

/// How long each transient mood lasts before reverting to idle.
/// All durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodTimings {
    pub looking_ms: u32,
    pub surprised_ms: u32,
    pub broken_ms: u32,
    pub waving_ms: u32,
    pub angry_ms: u32,
    pub wakeup_ms: u32,
    /// How long the eyes stay shut per blink.
    pub blink_ms: u32,
    pub blink_interval_min_ms: u32,
    pub blink_interval_max_ms: u32,
}

impl Default for MoodTimings {
    fn default() -> Self {
        Self {
            looking_ms: 2000,
            surprised_ms: 800,
            broken_ms: 2000,
            waving_ms: 1000,
            angry_ms: 1200,
            wakeup_ms: 800,
            blink_ms: 150,
            blink_interval_min_ms: 2000,
            blink_interval_max_ms: 5000,
        }
    }
}

impl MoodTimings {
    /// Delay before `mood` reverts to idle, or `None` if it persists
    /// until another stimulus replaces it.
    pub fn revert_after(&self, mood: Mood) -> Option<u32> {
        match mood {
            Mood::Looking => Some(self.looking_ms),
            Mood::Surprised => Some(self.surprised_ms),
            Mood::Broken => Some(self.broken_ms),
            Mood::Waving => Some(self.waving_ms),
            Mood::Angry => Some(self.angry_ms),
            Mood::Wakeup => Some(self.wakeup_ms),
            Mood::Idle
            | Mood::Curious
            | Mood::Determined
            | Mood::Happy
            | Mood::Excited
            | Mood::Scrolling
            | Mood::Sleep => None,
        }
    }
}

/// Configuration for the avatar, optionally loaded from JSON at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub timings: MoodTimings,
    /// Clicks needed to break the face (default: 10).
    pub click_milestone: u32,
    /// Maximum pupil travel from the eye center, in SVG units (default: 8).
    pub max_pupil_offset: f32,
    /// Page scroll in pixels beyond which the face reacts (default: 100).
    pub scroll_threshold: f32,
    pub layout: ButtonLayout,
    /// Maximum sound cues per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum avatar events per frame (default: 32).
    pub max_events: usize,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            timings: MoodTimings::default(),
            click_milestone: 10,
            max_pupil_offset: 8.0,
            scroll_threshold: 100.0,
            layout: ButtonLayout::default(),
            max_sounds: 32,
            max_events: 32,
        }
    }
}

impl AvatarConfig {
    /// Parse and validate a config from a JSON string.
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AvatarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timings;
        if t.blink_interval_min_ms > t.blink_interval_max_ms {
            return Err(ConfigError::InvertedBlinkInterval {
                min: t.blink_interval_min_ms,
                max: t.blink_interval_max_ms,
            });
        }
        if t.blink_interval_min_ms == 0 || t.blink_interval_min_ms <= t.blink_ms {
            return Err(ConfigError::BlinkIntervalTooShort {
                min: t.blink_interval_min_ms,
                blink: t.blink_ms,
            });
        }
        if self.click_milestone == 0 {
            return Err(ConfigError::ZeroClickMilestone);
        }
        if !self.max_pupil_offset.is_finite() || self.max_pupil_offset <= 0.0 {
            return Err(ConfigError::InvalidPupilOffset(self.max_pupil_offset));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = AvatarConfig::from_json("{}").unwrap();
        assert_eq!(config, AvatarConfig::default());
        assert_eq!(config.timings.looking_ms, 2000);
        assert_eq!(config.click_milestone, 10);
    }

    #[test]
    fn partial_timings_keep_other_defaults() {
        let json = r#"{
            "layout": "games",
            "timings": { "surprised_ms": 500 }
        }"#;
        let config = AvatarConfig::from_json(json).unwrap();
        assert_eq!(config.layout, ButtonLayout::Games);
        assert_eq!(config.timings.surprised_ms, 500);
        assert_eq!(config.timings.angry_ms, 1200);
    }

    #[test]
    fn inverted_blink_interval_rejected() {
        let json = r#"{ "timings": { "blink_interval_min_ms": 6000 } }"#;
        let err = AvatarConfig::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvertedBlinkInterval { min: 6000, max: 5000 }
        ));
    }

    #[test]
    fn zero_blink_interval_rejected() {
        let json = r#"{ "timings": { "blink_interval_min_ms": 0, "blink_interval_max_ms": 0 } }"#;
        let err = AvatarConfig::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BlinkIntervalTooShort { min: 0, blink: 150 }
        ));
    }

    #[test]
    fn blink_interval_must_outlast_the_blink() {
        let json = r#"{ "timings": { "blink_interval_min_ms": 100 } }"#;
        let err = AvatarConfig::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BlinkIntervalTooShort { min: 100, blink: 150 }
        ));

        let json = r#"{ "timings": { "blink_interval_min_ms": 150, "blink_interval_max_ms": 150 } }"#;
        assert!(AvatarConfig::from_json(json).is_err());

        let json = r#"{ "timings": { "blink_interval_min_ms": 151, "blink_interval_max_ms": 151 } }"#;
        assert!(AvatarConfig::from_json(json).is_ok());
    }

    #[test]
    fn zero_milestone_rejected() {
        let err = AvatarConfig::from_json(r#"{ "click_milestone": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroClickMilestone));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = AvatarConfig::from_json("{ layout: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn revert_table_matches_transient_moods() {
        let t = MoodTimings::default();
        assert_eq!(t.revert_after(Mood::Looking), Some(2000));
        assert_eq!(t.revert_after(Mood::Surprised), Some(800));
        assert_eq!(t.revert_after(Mood::Broken), Some(2000));
        assert_eq!(t.revert_after(Mood::Waving), Some(1000));
        assert_eq!(t.revert_after(Mood::Angry), Some(1200));
        assert_eq!(t.revert_after(Mood::Wakeup), Some(800));
        assert_eq!(t.revert_after(Mood::Sleep), None);
        assert_eq!(t.revert_after(Mood::Curious), None);
        assert_eq!(t.revert_after(Mood::Idle), None);
    }

    #[test]
    fn layouts_are_mutually_exclusive() {
        assert_eq!(ButtonLayout::Resume.button("resume"), Some(Button::Resume));
        assert_eq!(ButtonLayout::Resume.button("games"), None);
        assert_eq!(ButtonLayout::Games.button("games"), Some(Button::Games));
        assert_eq!(ButtonLayout::Games.button("resume"), None);
        assert_eq!(ButtonLayout::Games.button("about"), Some(Button::About));
    }
}
