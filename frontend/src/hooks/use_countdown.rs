use gloo_timers::callback::Interval;
use shared::constants::TICK_INTERVAL_MS;
use shared::{CountdownTimer, TickOutcome};
use yew::prelude::*;

use crate::config::CountdownConfig;
use crate::services::AlertAudio;

#[derive(Clone, PartialEq)]
pub struct CountdownHandle {
    pub remaining: u32,
    pub running: bool,
    pub expired: bool,
    pub display: String,
    pub start: Callback<()>,
    pub restart: Callback<()>,
}

#[hook]
pub fn use_countdown(config: &CountdownConfig) -> CountdownHandle {
    let timer = {
        let seconds = config.seconds;
        let autostart = config.autostart;
        use_mut_ref(move || {
            if autostart {
                CountdownTimer::running(seconds)
            } else {
                CountdownTimer::new(seconds)
            }
        })
    };
    let audio = {
        let countdown_track = config.countdown_track;
        let times_up_sound = config.times_up_sound;
        use_mut_ref(move || AlertAudio::new(countdown_track, times_up_sound))
    };
    let ticker = use_mut_ref(|| None::<Interval>);
    let redraw = use_force_update();

    let running = timer.borrow().is_running();

    // One tick source per timer: armed while running, dropped otherwise and
    // on teardown.
    {
        let timer = timer.clone();
        let audio = audio.clone();
        let ticker = ticker.clone();
        let redraw = redraw.clone();
        use_effect_with(running, move |running| {
            if *running {
                let slot = ticker.clone();
                let interval = Interval::new(TICK_INTERVAL_MS, move || {
                    let outcome = timer.borrow_mut().tick();
                    if outcome == TickOutcome::Expired {
                        let audio = audio.borrow();
                        audio.stop_loop();
                        audio.alert();
                    }
                    redraw.force_update();
                });
                *slot.borrow_mut() = Some(interval);
            } else {
                ticker.borrow_mut().take();
            }

            move || {
                ticker.borrow_mut().take();
            }
        });
    }

    {
        let audio = audio.clone();
        use_effect_with((), move |_| {
            move || {
                audio.borrow().stop_loop();
            }
        });
    }

    let start = {
        let timer = timer.clone();
        let audio = audio.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            if timer.borrow_mut().start() {
                audio.borrow().start_loop();
            }
            redraw.force_update();
        })
    };

    let restart = {
        let timer = timer.clone();
        let audio = audio.clone();
        Callback::from(move |_| {
            timer.borrow_mut().restart();
            audio.borrow().stop_loop();
            redraw.force_update();
        })
    };

    let timer = timer.borrow();
    CountdownHandle {
        remaining: timer.remaining(),
        running: timer.is_running(),
        expired: timer.is_expired(),
        display: timer.formatted(),
        start,
        restart,
    }
}
