use shared::validation::is_non_prize;
use shared::Winner;
use yew::prelude::*;

use crate::styles;

/// Headline shown on the passive display for a resolved spin.
pub fn result_headline(winner: &Winner) -> &'static str {
    if is_non_prize(&winner.entry.name) {
        "Better Luck Next Time!"
    } else {
        "Congratulations!"
    }
}

// Passive display beside the wheel
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub winner: Option<Winner>,
    pub is_spinning: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if props.is_spinning {
        return html! {
            <div class={styles::DISPLAY_SCREEN}>
                <span class="text-3xl font-bold text-gray-400 animate-pulse">{"Spinning..."}</span>
            </div>
        };
    }

    let Some(winner) = &props.winner else {
        return html! {
            <div class={styles::DISPLAY_SCREEN}>
                <span class="text-3xl font-bold text-gray-400">{"Spin to win!"}</span>
            </div>
        };
    };

    let animation_class = if is_non_prize(&winner.entry.name) {
        "animate-pulse"
    } else {
        "animate-bounce"
    };

    html! {
        <div class={styles::DISPLAY_SCREEN}>
            <h2 class={classes!("text-4xl", "font-black", "uppercase", "text-[#E30613]", animation_class)}>
                {result_headline(winner)}
            </h2>
            if let Some(image) = &winner.entry.image {
                <img src={image.url().to_string()} alt={winner.entry.name.clone()} class="max-h-64 object-contain mt-6" />
            }
            <p class="text-3xl font-extrabold text-gray-900 mt-4 break-words">{winner.entry.name.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    /// A winner is still waiting for acknowledgment.
    pub is_locked: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "SPIN" };
    let is_disabled = props.is_spinning || props.is_locked;

    let button_class = if is_disabled {
        styles::BUTTON_SPIN_DISABLED
    } else {
        styles::BUTTON_SPIN
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={is_disabled}
            class={button_class}
        >
            <div class="flex items-center justify-center">
                <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </svg>
                <span>{button_text}</span>
            </div>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{EntryId, PrizeEntry};

    fn winner(name: &str) -> Winner {
        Winner {
            index: 0,
            entry: PrizeEntry { id: EntryId(0), name: name.to_string(), image: None },
        }
    }

    #[test]
    fn test_result_headline() {
        assert_eq!(result_headline(&winner("Smart Watch")), "Congratulations!");
        assert_eq!(result_headline(&winner("TRY AGAIN")), "Better Luck Next Time!");
        assert_eq!(result_headline(&winner("Thank you for trying")), "Better Luck Next Time!");
    }
}
