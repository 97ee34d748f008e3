use bytemuck::{Pod, Zeroable};

use crate::api::config::ButtonLayout;

/// The avatar's current discrete expression.
/// The numeric value is the wire id read by the TypeScript renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Mood {
    #[default]
    Idle = 0,
    Looking = 1,
    Curious = 2,
    Determined = 3,
    Happy = 4,
    Excited = 5,
    Surprised = 6,
    Waving = 7,
    Angry = 8,
    Scrolling = 9,
    Sleep = 10,
    Wakeup = 11,
    Broken = 12,
}

impl Mood {
    /// Every mood, ordered by wire id.
    pub const ALL: [Mood; 13] = [
        Mood::Idle,
        Mood::Looking,
        Mood::Curious,
        Mood::Determined,
        Mood::Happy,
        Mood::Excited,
        Mood::Surprised,
        Mood::Waving,
        Mood::Angry,
        Mood::Scrolling,
        Mood::Sleep,
        Mood::Wakeup,
        Mood::Broken,
    ];

    /// Stable key, also used as the face container's CSS class.
    pub fn key(self) -> &'static str {
        match self {
            Mood::Idle => "idle",
            Mood::Looking => "looking",
            Mood::Curious => "curious",
            Mood::Determined => "determined",
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Surprised => "surprised",
            Mood::Waving => "waving",
            Mood::Angry => "angry",
            Mood::Scrolling => "scrolling",
            Mood::Sleep => "sleep",
            Mood::Wakeup => "wakeup",
            Mood::Broken => "broken",
        }
    }

    /// Look up a mood by key. Unknown keys fall back to `Idle`.
    pub fn from_key(key: &str) -> Mood {
        Self::ALL
            .iter()
            .copied()
            .find(|mood| mood.key() == key)
            .unwrap_or(Mood::Idle)
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a mood by wire id. Out-of-range ids fall back to `Idle`.
    pub fn from_id(id: u8) -> Mood {
        Self::ALL.get(id as usize).copied().unwrap_or(Mood::Idle)
    }

    /// Whether pointer movement may drive this mood, and the eyes blink.
    pub fn follows_pointer(self) -> bool {
        matches!(self, Mood::Idle | Mood::Looking)
    }

    /// Speech bubble text shown next to the face.
    pub fn caption(self, layout: ButtonLayout) -> &'static str {
        match self {
            Mood::Idle => "Click me!",
            Mood::Looking => "I see you...",
            Mood::Curious => "What brings you here?",
            Mood::Determined => "Let's see what I built!",
            Mood::Happy => "Get in touch! 💌",
            Mood::Excited => match layout {
                ButtonLayout::Resume => "Resume incoming!",
                ButtonLayout::Games => "Let's play!",
            },
            Mood::Surprised => "Ouch!",
            Mood::Waving => "Hey there! 👋",
            Mood::Angry => "RAAAAWR! 😤",
            Mood::Scrolling => "Whoa, slow down!",
            Mood::Sleep => "Zzz...",
            Mood::Wakeup => "Oh, welcome back!",
            Mood::Broken => "System error! ...jk",
        }
    }
}

/// A navigation button on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    About = 0,
    Work = 1,
    Contact = 2,
    Resume = 3,
    Games = 4,
}

impl Button {
    pub fn name(self) -> &'static str {
        match self {
            Button::About => "about",
            Button::Work => "work",
            Button::Contact => "contact",
            Button::Resume => "resume",
            Button::Games => "games",
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Mood the face takes while this button is hovered.
    pub fn mood(self) -> Mood {
        match self {
            Button::About => Mood::Curious,
            Button::Work => Mood::Determined,
            Button::Contact => Mood::Happy,
            Button::Resume | Button::Games => Mood::Excited,
        }
    }

    /// Page this button navigates to when clicked, if any.
    pub fn route(self) -> Option<Route> {
        match self {
            Button::Games => Some(Route::Games),
            Button::About | Button::Work | Button::Contact | Button::Resume => None,
        }
    }
}

/// Pages the navigation collaborator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Route {
    Home = 0,
    Games = 1,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Games => "/games",
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }
}

/// A sound cue emitted by the controller.
/// The numeric value maps to a tone in the host's audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SoundCue {
    Hover = 1,
    Click = 2,
}

impl SoundCue {
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// Outbound notification for the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarEvent {
    /// A routed button was clicked.
    Navigate(Route),
    /// The displayed mood changed.
    MoodChanged { from: Mood, to: Mood },
    /// The click milestone was reached and the face "broke".
    EasterEgg,
}

impl AvatarEvent {
    pub const KIND_NAVIGATE: f32 = 1.0;
    pub const KIND_MOOD_CHANGED: f32 = 2.0;
    pub const KIND_EASTER_EGG: f32 = 3.0;

    pub fn to_wire(self) -> WireEvent {
        match self {
            AvatarEvent::Navigate(route) => WireEvent {
                kind: Self::KIND_NAVIGATE,
                a: route.id() as f32,
                ..WireEvent::default()
            },
            AvatarEvent::MoodChanged { from, to } => WireEvent {
                kind: Self::KIND_MOOD_CHANGED,
                a: from.id() as f32,
                b: to.id() as f32,
                ..WireEvent::default()
            },
            AvatarEvent::EasterEgg => WireEvent {
                kind: Self::KIND_EASTER_EGG,
                ..WireEvent::default()
            },
        }
    }
}

/// An avatar event as laid out in the shared frame buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct WireEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl WireEvent {
    pub const FLOATS: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_keys_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_key(mood.key()), mood);
            assert_eq!(Mood::from_id(mood.id()), mood);
        }
    }

    #[test]
    fn unknown_mood_key_is_idle() {
        assert_eq!(Mood::from_key("confused"), Mood::Idle);
        assert_eq!(Mood::from_key(""), Mood::Idle);
        assert_eq!(Mood::from_id(200), Mood::Idle);
    }

    #[test]
    fn only_idle_and_looking_follow_pointer() {
        let following: Vec<Mood> = Mood::ALL
            .iter()
            .copied()
            .filter(|m| m.follows_pointer())
            .collect();
        assert_eq!(following, vec![Mood::Idle, Mood::Looking]);
    }

    #[test]
    fn excited_caption_depends_on_layout() {
        assert_eq!(Mood::Excited.caption(ButtonLayout::Resume), "Resume incoming!");
        assert_eq!(Mood::Excited.caption(ButtonLayout::Games), "Let's play!");
        assert_eq!(Mood::Idle.caption(ButtonLayout::Games), "Click me!");
    }

    #[test]
    fn button_moods() {
        assert_eq!(Button::About.mood(), Mood::Curious);
        assert_eq!(Button::Work.mood(), Mood::Determined);
        assert_eq!(Button::Contact.mood(), Mood::Happy);
        assert_eq!(Button::Resume.mood(), Mood::Excited);
        assert_eq!(Button::Games.mood(), Mood::Excited);
    }

    #[test]
    fn only_games_button_routes() {
        assert_eq!(Button::Games.route(), Some(Route::Games));
        assert_eq!(Button::Resume.route(), None);
        assert_eq!(Route::Games.path(), "/games");
    }

    #[test]
    fn mood_change_wire_layout() {
        let wire = AvatarEvent::MoodChanged { from: Mood::Idle, to: Mood::Broken }.to_wire();
        assert_eq!(wire.kind, AvatarEvent::KIND_MOOD_CHANGED);
        assert_eq!(wire.a, 0.0);
        assert_eq!(wire.b, 12.0);
        assert_eq!(wire.c, 0.0);
    }
}
