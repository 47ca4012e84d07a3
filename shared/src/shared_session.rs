use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::image_ref::ImageRef;
use crate::prize_list::{PrizeEntry, PrizeList, PrizeListError};
use crate::shared_wheel_game::{plan_spin, SpinPlan};
use crate::validation::is_non_prize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawMode {
    WithReplacement,
    WithoutReplacement,
}

/// Winning entry captured when the spin starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    pub index: usize,
    pub entry: PrizeEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpinState {
    Idle,
    Spinning { winner: Winner },
    Resolved { winner: Winner },
}

/// What the announcement surface should show once the wheel stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub winner: Winner,
    pub show_modal: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcknowledgeOutcome {
    pub winner: Winner,
    pub removed: bool,
    /// Local image of a removed winner; the caller releases it.
    pub released: Option<ImageRef>,
}

/// One wheel session: owns the prize list and runs the
/// `Idle -> Spinning -> Resolved -> Idle` cycle.
///
/// The list is locked for editing while a spin is in flight or awaiting
/// acknowledgment, and the winner is snapshotted at spin time.
#[derive(Debug, Clone)]
pub struct SessionController<R = SmallRng> {
    prizes: PrizeList,
    state: SpinState,
    rotation: f64,
    draw_mode: DrawMode,
    rng: R,
}

impl SessionController<SmallRng> {
    pub fn new(prizes: PrizeList, draw_mode: DrawMode) -> Self {
        Self::with_rng(prizes, draw_mode, SmallRng::from_entropy())
    }
}

impl<R: Rng> SessionController<R> {
    pub fn with_rng(prizes: PrizeList, draw_mode: DrawMode, rng: R) -> Self {
        Self {
            prizes,
            state: SpinState::Idle,
            rotation: 0.0,
            draw_mode,
            rng,
        }
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn prizes(&self) -> &PrizeList {
        &self.prizes
    }

    /// Editable view of the prizes, refused while a spin is in flight or
    /// waiting for acknowledgment.
    pub fn prizes_mut(&mut self) -> Option<&mut PrizeList> {
        if self.is_locked() {
            None
        } else {
            Some(&mut self.prizes)
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning { .. })
    }

    pub fn is_locked(&self) -> bool {
        !matches!(self.state, SpinState::Idle)
    }

    pub fn winner(&self) -> Option<&Winner> {
        match &self.state {
            SpinState::Idle => None,
            SpinState::Spinning { winner } | SpinState::Resolved { winner } => Some(winner),
        }
    }

    pub fn request_spin(&mut self) -> Option<SpinPlan> {
        if self.is_locked() {
            debug!("Ignoring spin request while wheel is busy");
            return None;
        }

        let plan = plan_spin(&mut self.rng, self.prizes.len(), self.rotation)?;
        let entry = self.prizes.get(plan.index)?.clone();
        info!("Spinning to segment {} ('{}')", plan.index, entry.name);

        self.rotation = plan.rotation;
        self.state = SpinState::Spinning {
            winner: Winner { index: plan.index, entry },
        };
        Some(plan)
    }

    pub fn on_animation_complete(&mut self) -> Option<Announcement> {
        let winner = match &self.state {
            SpinState::Spinning { winner } => winner.clone(),
            _ => {
                debug!("Animation completion without a spin in flight");
                return None;
            }
        };

        let show_modal = !is_non_prize(&winner.entry.name);
        self.state = SpinState::Resolved { winner: winner.clone() };
        Some(Announcement { winner, show_modal })
    }

    pub fn acknowledge(&mut self) -> Option<AcknowledgeOutcome> {
        let winner = match std::mem::replace(&mut self.state, SpinState::Idle) {
            SpinState::Resolved { winner } => winner,
            other => {
                self.state = other;
                return None;
            }
        };

        let mut outcome = AcknowledgeOutcome {
            winner,
            removed: false,
            released: None,
        };

        if self.draw_mode == DrawMode::WithoutReplacement {
            match self.prizes.remove_by_id(outcome.winner.entry.id) {
                Ok(entry) => {
                    info!("Removed won prize '{}' from the wheel", entry.name);
                    outcome.removed = true;
                    outcome.released = entry.image.filter(ImageRef::needs_release);
                }
                Err(PrizeListError::MinCapacityReached) => {
                    warn!("Keeping '{}': wheel is at minimum size", outcome.winner.entry.name);
                }
                Err(e) => warn!("Could not remove won prize: {}", e),
            }
        }

        Some(outcome)
    }

    /// Teardown: every local image still owned by the list.
    pub fn release_images(&mut self) -> Vec<ImageRef> {
        self.prizes.drain_releasable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MIN_PRIZES;
    use rand::rngs::StdRng;

    fn session(names: &[&str], draw_mode: DrawMode, seed: u64) -> SessionController<StdRng> {
        let prizes = PrizeList::from_names(names.iter().copied()).unwrap();
        SessionController::with_rng(prizes, draw_mode, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_spin_cycle() {
        let mut s = session(&["A", "B", "C"], DrawMode::WithReplacement, 3);
        let plan = s.request_spin().unwrap();
        assert!(s.is_spinning());
        assert_eq!(s.rotation(), plan.rotation);

        let announcement = s.on_animation_complete().unwrap();
        assert_eq!(announcement.winner.index, plan.index);
        assert!(matches!(s.state(), SpinState::Resolved { .. }));

        let outcome = s.acknowledge().unwrap();
        assert!(!outcome.removed);
        assert_eq!(s.state(), &SpinState::Idle);
        assert_eq!(s.prizes().len(), 3);
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let mut s = session(&["A", "B", "C", "D"], DrawMode::WithReplacement, 11);
        let plan = s.request_spin().unwrap();
        let before = s.state().clone();
        assert!(s.request_spin().is_none());
        assert_eq!(s.state(), &before);
        assert_eq!(s.rotation(), plan.rotation);
    }

    #[test]
    fn test_completion_and_ack_out_of_order_are_noops() {
        let mut s = session(&["A", "B"], DrawMode::WithReplacement, 5);
        assert!(s.on_animation_complete().is_none());
        assert!(s.acknowledge().is_none());
        s.request_spin().unwrap();
        assert!(s.acknowledge().is_none());
        assert!(s.is_spinning());
        s.on_animation_complete().unwrap();
        assert!(s.on_animation_complete().is_none());
        assert!(s.request_spin().is_none());
    }

    #[test]
    fn test_list_locked_until_acknowledged() {
        let mut s = session(&["A", "B", "C"], DrawMode::WithReplacement, 9);
        assert!(s.prizes_mut().is_some());
        s.request_spin().unwrap();
        assert!(s.prizes_mut().is_none());
        s.on_animation_complete().unwrap();
        assert!(s.prizes_mut().is_none());
        s.acknowledge().unwrap();
        assert!(s.prizes_mut().is_some());
    }

    #[test]
    fn test_non_prize_skips_modal() {
        let mut s = session(&["Try Again", "Thank you for trying"], DrawMode::WithReplacement, 2);
        s.request_spin().unwrap();
        let announcement = s.on_animation_complete().unwrap();
        assert!(!announcement.show_modal);

        let mut s = session(&["Speaker", "Headphones"], DrawMode::WithReplacement, 2);
        s.request_spin().unwrap();
        assert!(s.on_animation_complete().unwrap().show_modal);
    }

    #[test]
    fn test_draw_without_replacement_removes_by_identity() {
        let names = ["Try Again", "Speaker", "Try Again", "Smart Watch"];
        let mut s = session(&names, DrawMode::WithoutReplacement, 17);
        let plan = s.request_spin().unwrap();
        let won_id = s.winner().unwrap().entry.id;
        s.on_animation_complete().unwrap();
        let outcome = s.acknowledge().unwrap();

        assert!(outcome.removed);
        assert_eq!(outcome.winner.index, plan.index);
        assert_eq!(s.prizes().len(), 3);
        assert_eq!(s.prizes().position(won_id), None);
        let remaining_ids: Vec<_> = s.prizes().entries().iter().map(|e| e.id).collect();
        let expected_ids: Vec<_> = (0..4u64)
            .map(crate::prize_list::EntryId)
            .filter(|id| *id != won_id)
            .collect();
        assert_eq!(remaining_ids, expected_ids);
    }

    #[test]
    fn test_draw_without_replacement_stops_at_minimum() {
        let mut s = session(&["A", "B", "C"], DrawMode::WithoutReplacement, 23);
        for _ in 0..5 {
            s.request_spin().unwrap();
            s.on_animation_complete().unwrap();
            s.acknowledge().unwrap();
        }
        assert_eq!(s.prizes().len(), MIN_PRIZES);
    }

    #[test]
    fn test_removed_winner_hands_back_local_image() {
        let prizes = PrizeList::new(vec![
            ("Camera", Some(ImageRef::local("blob:camera"))),
            ("Camera", Some(ImageRef::local("blob:camera-2"))),
            ("Bag", Some(ImageRef::remote("/assets/bag.png"))),
        ])
        .unwrap();
        let mut s = SessionController::with_rng(prizes, DrawMode::WithoutReplacement, StdRng::seed_from_u64(4));
        s.request_spin().unwrap();
        let image = s.winner().unwrap().entry.image.clone().unwrap();
        s.on_animation_complete().unwrap();
        let outcome = s.acknowledge().unwrap();
        assert_eq!(outcome.released.is_some(), image.needs_release());

        let leftover = s.release_images();
        assert!(leftover.iter().all(ImageRef::needs_release));
        assert!(s.release_images().is_empty());
    }

    #[test]
    fn test_two_prizes_split_evenly_over_many_spins() {
        let mut s = session(&["A", "B"], DrawMode::WithReplacement, 2024);
        let spins = 10_000;
        let mut a_wins = 0;
        for _ in 0..spins {
            s.request_spin().unwrap();
            let announcement = s.on_animation_complete().unwrap();
            if announcement.winner.entry.name == "A" {
                a_wins += 1;
            }
            s.acknowledge().unwrap();
        }
        let share = a_wins as f64 / spins as f64;
        assert!((0.45..=0.55).contains(&share), "A won {:.3} of spins", share);
    }
}
