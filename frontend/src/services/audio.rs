use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use log::warn;
use shared::constants::AUDIO_LOOP_GAP_MS;
use web_sys::HtmlAudioElement;

fn load(src: &str) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(src) {
        Ok(audio) => Some(audio),
        Err(e) => {
            warn!("Could not load audio {}: {:?}", src, e);
            None
        }
    }
}

// Fire and forget; autoplay rejections only surface in the console.
fn play(audio: &HtmlAudioElement) {
    if let Err(e) = audio.play() {
        warn!("Audio playback failed: {:?}", e);
    }
}

/// Countdown soundtrack that replays while the timer runs, plus the
/// "time's up" alert.
pub struct AlertAudio {
    countdown: Option<HtmlAudioElement>,
    times_up: Option<HtmlAudioElement>,
    looping: Rc<Cell<bool>>,
    continuation: Rc<RefCell<Option<Timeout>>>,
    _ended: Option<EventListener>,
}

impl AlertAudio {
    pub fn new(countdown_src: Option<&str>, times_up_src: Option<&str>) -> Self {
        let countdown = countdown_src.and_then(load);
        let times_up = times_up_src.and_then(load);
        let looping = Rc::new(Cell::new(false));
        let continuation = Rc::new(RefCell::new(None::<Timeout>));

        let ended = countdown.as_ref().map(|audio| {
            let looping = looping.clone();
            let continuation = continuation.clone();
            let track = audio.clone();
            EventListener::new(audio, "ended", move |_| {
                if looping.get() {
                    let track = track.clone();
                    *continuation.borrow_mut() = Some(Timeout::new(AUDIO_LOOP_GAP_MS, move || play(&track)));
                }
            })
        });

        Self {
            countdown,
            times_up,
            looping,
            continuation,
            _ended: ended,
        }
    }

    pub fn start_loop(&self) {
        self.looping.set(true);
        if let Some(track) = &self.countdown {
            play(track);
        }
    }

    pub fn stop_loop(&self) {
        self.looping.set(false);
        self.continuation.borrow_mut().take();
        if let Some(track) = &self.countdown {
            if let Err(e) = track.pause() {
                warn!("Could not pause countdown track: {:?}", e);
            }
            track.set_current_time(0.0);
        }
    }

    pub fn alert(&self) {
        if let Some(sound) = &self.times_up {
            play(sound);
        }
    }
}

impl Drop for AlertAudio {
    fn drop(&mut self) {
        self.stop_loop();
    }
}
