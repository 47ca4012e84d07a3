use shared::Winner;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinnerModalProps {
    pub winner: Option<Winner>,
    pub on_acknowledge: Callback<()>,
}

#[function_component(WinnerModal)]
pub fn winner_modal(props: &WinnerModalProps) -> Html {
    let Some(winner) = &props.winner else {
        return html! {};
    };

    let onclick = {
        let on_acknowledge = props.on_acknowledge.clone();
        Callback::from(move |_: MouseEvent| on_acknowledge.emit(()))
    };

    html! {
        <div class={styles::MODAL_OVERLAY}>
            <div class={styles::MODAL_CARD}>
                <h2 class="text-4xl sm:text-5xl md:text-6xl font-black mb-4 uppercase leading-tight text-[#E30613]">
                    {"Congratulations!"}
                </h2>
                <p class="text-xl sm:text-2xl text-gray-600 mb-6 font-medium">{"You won:"}</p>
                <div class="my-8 p-6 rounded-2xl bg-gray-500/10 flex flex-col items-center gap-4">
                    if let Some(image) = &winner.entry.image {
                        <img src={image.url().to_string()} alt={winner.entry.name.clone()} class="max-h-48 object-contain" />
                    }
                    <p class="text-4xl sm:text-6xl font-extrabold text-black break-words">{winner.entry.name.clone()}</p>
                </div>
                <button {onclick} class={styles::BUTTON_CLAIM}>
                    {"Claim Prize & Continue"}
                </button>
            </div>
        </div>
    }
}
