use gloo_timers::callback::Timeout;
use log::{debug, info};
use shared::{Announcement, ImageRef, PrizeList, SessionController, SpinPlan, Winner};
use yew::prelude::*;

use crate::config::WheelConfig;
use crate::services::ImageResolver;

#[derive(Clone, PartialEq)]
pub struct SpinSessionHandle {
    pub prizes: PrizeList,
    /// Target of the spin in flight, or the rest position.
    pub rotation: f64,
    pub spin_duration_ms: u32,
    pub is_spinning: bool,
    pub is_locked: bool,
    /// Winner waiting for the modal's acknowledgment.
    pub pending: Option<Winner>,
    /// Most recent resolved winner, for the passive display.
    pub last_winner: Option<Winner>,
    pub spin: Callback<()>,
    pub acknowledge: Callback<()>,
    pub add_prize: Callback<(String, Option<ImageRef>)>,
    pub remove_prize: Callback<usize>,
}

#[hook]
pub fn use_spin_session(config: &WheelConfig) -> SpinSessionHandle {
    let session = {
        let config = config.clone();
        use_mut_ref(move || SessionController::new(config.initial_prizes(), config.draw_mode))
    };
    let completion = use_mut_ref(|| None::<Timeout>);
    let last_plan = use_state(|| None::<SpinPlan>);
    let pending = use_state(|| None::<Winner>);
    let last_winner = use_state(|| None::<Winner>);
    let redraw = use_force_update();
    let show_winner_modal = config.show_winner_modal;

    // Teardown: cancel a pending completion and release every local image.
    {
        let session = session.clone();
        let completion = completion.clone();
        use_effect_with((), move |_| {
            move || {
                completion.borrow_mut().take();
                ImageResolver::release_all(session.borrow_mut().release_images());
            }
        });
    }

    let acknowledge = {
        let session = session.clone();
        let pending = pending.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            let outcome = session.borrow_mut().acknowledge();
            if let Some(outcome) = outcome {
                if let Some(image) = outcome.released {
                    ImageResolver::release(image);
                }
                pending.set(None);
                redraw.force_update();
            }
        })
    };

    let spin = {
        let session = session.clone();
        let completion = completion.clone();
        let last_plan = last_plan.clone();
        let pending = pending.clone();
        let last_winner = last_winner.clone();
        let acknowledge = acknowledge.clone();
        Callback::from(move |_| {
            let plan = match session.borrow_mut().request_spin() {
                Some(plan) => plan,
                None => return,
            };
            last_plan.set(Some(plan));
            last_winner.set(None);

            let session = session.clone();
            let pending = pending.clone();
            let last_winner = last_winner.clone();
            let acknowledge = acknowledge.clone();
            let timeout = Timeout::new(plan.duration_ms, move || {
                let announcement = session.borrow_mut().on_animation_complete();
                if let Some(Announcement { winner, show_modal }) = announcement {
                    info!("Wheel stopped on '{}'", winner.entry.name);
                    last_winner.set(Some(winner.clone()));
                    if show_modal && show_winner_modal {
                        pending.set(Some(winner));
                    } else {
                        debug!("No announcement for '{}'", winner.entry.name);
                        acknowledge.emit(());
                    }
                }
            });
            *completion.borrow_mut() = Some(timeout);
        })
    };

    let add_prize = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |(name, image): (String, Option<ImageRef>)| {
            let mut session = session.borrow_mut();
            let Some(prizes) = session.prizes_mut() else {
                ImageResolver::release_all(image);
                return;
            };
            match prizes.add(&name, image) {
                Ok(_) => redraw.force_update(),
                Err(rejected) => {
                    debug!("Prize not added: {}", rejected);
                    ImageResolver::release_all(rejected.image);
                }
            }
        })
    };

    let remove_prize = {
        let session = session.clone();
        Callback::from(move |index: usize| {
            let mut session = session.borrow_mut();
            let Some(prizes) = session.prizes_mut() else {
                return;
            };
            match prizes.remove(index) {
                Ok(entry) => {
                    ImageResolver::release_all(entry.image);
                    redraw.force_update();
                }
                Err(e) => debug!("Prize not removed: {}", e),
            }
        })
    };

    let session = session.borrow();
    SpinSessionHandle {
        prizes: session.prizes().clone(),
        rotation: session.rotation(),
        spin_duration_ms: last_plan.map(|plan| plan.duration_ms).unwrap_or_default(),
        is_spinning: session.is_spinning(),
        is_locked: session.is_locked(),
        pending: (*pending).clone(),
        last_winner: (*last_winner).clone(),
        spin,
        acknowledge,
        add_prize,
        remove_prize,
    }
}
