use log::warn;
use shared::constants::{BUZZWIRE_SECONDS, GREENTEL_SECONDS, SHOWCASE_SECONDS};
use shared::{DrawMode, ImageRef, PrizeList};

/// Deployment variants. Each one is served from its own route and fixes its
/// timer duration and draw mode at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KioskVariant {
    Showcase,
    Buzzwire,
    Greentel,
    Aerophone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountdownConfig {
    pub seconds: u32,
    /// Display-only timers start counting on mount and have no controls.
    pub autostart: bool,
    pub show_controls: bool,
    pub countdown_track: Option<&'static str>,
    pub times_up_sound: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WheelConfig {
    pub draw_mode: DrawMode,
    pub show_winner_modal: bool,
    pub prizes: &'static [(&'static str, Option<&'static str>)],
}

#[derive(Clone, Debug, PartialEq)]
pub struct KioskConfig {
    pub variant: KioskVariant,
    pub title: &'static str,
    pub countdown: Option<CountdownConfig>,
    pub wheel: Option<WheelConfig>,
}

const SHOWCASE_PRIZES: &[(&str, Option<&str>)] = &[
    ("iPhone 17 Pro", Some("/assets/iphone-17.png")),
    ("50% Discount", None),
    ("Smart Watch", None),
    ("Try Again", None),
    ("Headphones", None),
    ("10% Discount", None),
    ("Speaker", None),
    ("Try Again", None),
];

const AEROPHONE_PRIZES: &[(&str, Option<&str>)] = &[
    ("Aerophone Earbuds", None),
    ("Thank you for trying", None),
    ("Power Bank", None),
    ("Try Again", None),
    ("Phone Case", None),
    ("Thank you for trying", None),
];

impl KioskVariant {
    pub fn config(self) -> KioskConfig {
        match self {
            Self::Showcase => KioskConfig {
                variant: self,
                title: "Unlock It With Home Credit",
                countdown: Some(CountdownConfig {
                    seconds: SHOWCASE_SECONDS,
                    autostart: true,
                    show_controls: false,
                    countdown_track: None,
                    times_up_sound: None,
                }),
                wheel: Some(WheelConfig {
                    draw_mode: DrawMode::WithReplacement,
                    show_winner_modal: false,
                    prizes: SHOWCASE_PRIZES,
                }),
            },
            Self::Buzzwire => KioskConfig {
                variant: self,
                title: "The Buzzwire",
                countdown: Some(CountdownConfig {
                    seconds: BUZZWIRE_SECONDS,
                    autostart: false,
                    show_controls: true,
                    countdown_track: None,
                    times_up_sound: Some("/assets/times-up-sound.mp3"),
                }),
                wheel: None,
            },
            Self::Greentel => KioskConfig {
                variant: self,
                title: "Free iPhone Challenge",
                countdown: Some(CountdownConfig {
                    seconds: GREENTEL_SECONDS,
                    autostart: false,
                    show_controls: true,
                    countdown_track: Some("/assets/countdown-music.mp3"),
                    times_up_sound: Some("/assets/times-up-sound.mp3"),
                }),
                wheel: None,
            },
            Self::Aerophone => KioskConfig {
                variant: self,
                title: "Spin & Win",
                countdown: None,
                wheel: Some(WheelConfig {
                    draw_mode: DrawMode::WithoutReplacement,
                    show_winner_modal: true,
                    prizes: AEROPHONE_PRIZES,
                }),
            },
        }
    }
}

impl WheelConfig {
    pub fn initial_prizes(&self) -> PrizeList {
        let seed = self
            .prizes
            .iter()
            .map(|(name, image)| (*name, image.map(ImageRef::remote)));
        PrizeList::new(seed).unwrap_or_else(|e| {
            warn!("Invalid prize configuration ({}), using default wheel", e);
            PrizeList::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [KioskVariant; 4] = [
        KioskVariant::Showcase,
        KioskVariant::Buzzwire,
        KioskVariant::Greentel,
        KioskVariant::Aerophone,
    ];

    #[test]
    fn test_configured_wheels_are_valid() {
        for variant in ALL {
            if let Some(wheel) = variant.config().wheel {
                let seed = wheel.prizes.iter().map(|(name, _)| (*name, None));
                assert!(PrizeList::new(seed).is_ok(), "{:?} ships an invalid wheel", variant);
            }
        }
    }

    #[test]
    fn test_variant_timers_and_draw_modes() {
        let seconds = |v: KioskVariant| v.config().countdown.map(|c| c.seconds);
        assert_eq!(seconds(KioskVariant::Buzzwire), Some(60));
        assert_eq!(seconds(KioskVariant::Greentel), Some(300));
        assert_eq!(seconds(KioskVariant::Aerophone), None);

        let showcase = KioskVariant::Showcase.config();
        assert!(showcase.countdown.is_some_and(|c| c.autostart && !c.show_controls));
        assert_eq!(showcase.wheel.map(|w| w.draw_mode), Some(DrawMode::WithReplacement));

        let aerophone = KioskVariant::Aerophone.config().wheel.unwrap();
        assert_eq!(aerophone.draw_mode, DrawMode::WithoutReplacement);
        assert!(aerophone.show_winner_modal);
    }
}
