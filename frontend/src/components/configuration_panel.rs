use shared::constants::MAX_PRIZES;
use shared::{ImageRef, PrizeList};
use yew::prelude::*;

use crate::hooks::use_prize_form;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ConfigurationPanelProps {
    pub prizes: PrizeList,
    /// Edits are refused while a spin is in flight or awaiting acknowledgment.
    pub locked: bool,
    pub on_add: Callback<(String, Option<ImageRef>)>,
    pub on_remove: Callback<usize>,
}

#[function_component(ConfigurationPanel)]
pub fn configuration_panel(props: &ConfigurationPanelProps) -> Html {
    let form = use_prize_form();
    let minimized = use_state(|| false);

    let toggle = {
        let minimized = minimized.clone();
        Callback::from(move |_: MouseEvent| minimized.set(!*minimized))
    };

    if *minimized {
        return html! {
            <button onclick={toggle} title="Customize Wheel" class={styles::PANEL_RESTORE}>
                {"⚙"}
            </button>
        };
    }

    let can_add = props.prizes.can_add() && !props.locked;
    let can_remove = props.prizes.can_remove() && !props.locked;

    let on_add = {
        let submit = form.submit.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(draft) = submit.emit(()) {
                on_add.emit(draft);
            }
        })
    };

    let on_clear_preview = {
        let clear = form.clear_preview.clone();
        Callback::from(move |_: MouseEvent| clear.emit(()))
    };

    let add_label = if props.prizes.len() >= MAX_PRIZES {
        "Max Items Reached"
    } else {
        "Add Item"
    };

    html! {
        <div class={styles::PANEL}>
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-gray-900 text-lg font-bold">{"Customize Wheel"}</h3>
                <button onclick={toggle} title="Minimize Panel" class="text-gray-500 hover:text-gray-900 font-black text-2xl leading-none px-2">
                    {"−"}
                </button>
            </div>

            <div class="space-y-3">
                <input
                    type="text"
                    placeholder="Prize Name (e.g., iPhone 17)"
                    value={form.name.clone()}
                    oninput={form.on_name_input.clone()}
                    disabled={props.locked}
                    class={styles::INPUT}
                />
                <input
                    type="file"
                    accept="image/*"
                    onchange={form.on_file_change.clone()}
                    disabled={props.locked}
                    class="w-full text-sm text-gray-600"
                />
                <input
                    type="url"
                    placeholder="…or image URL"
                    oninput={form.on_url_input.clone()}
                    disabled={props.locked}
                    class={styles::INPUT}
                />
                if let Some(preview) = &form.preview {
                    <div class="flex items-center gap-3">
                        <img src={preview.url().to_string()} alt="Preview" class="w-12 h-12 object-contain rounded" />
                        <button onclick={on_clear_preview} class="text-sm text-gray-500 hover:text-red-500">
                            {"Remove image"}
                        </button>
                    </div>
                }
                <button
                    onclick={on_add}
                    disabled={!form.is_valid || !can_add}
                    class={styles::BUTTON_ADD}
                >
                    {add_label}
                </button>
            </div>

            <hr class="border-gray-300 my-4" />

            <div class="space-y-2 max-h-48 overflow-y-auto pr-2">
                { for props.prizes.entries().iter().enumerate().map(|(index, entry)| {
                    let on_remove = {
                        let on_remove = props.on_remove.clone();
                        Callback::from(move |_: MouseEvent| on_remove.emit(index))
                    };
                    html! {
                        <div key={entry.id.0} class="flex items-center justify-between bg-gray-100 p-2 rounded">
                            <div class="flex items-center gap-3 overflow-hidden">
                                if let Some(image) = &entry.image {
                                    <img src={image.url().to_string()} alt={entry.name.clone()} class="w-8 h-8 object-contain rounded" />
                                }
                                <span class="text-gray-800 text-sm truncate" title={entry.name.clone()}>{entry.name.clone()}</span>
                            </div>
                            <button
                                onclick={on_remove}
                                disabled={!can_remove}
                                class="text-gray-400 hover:text-red-500 disabled:text-gray-500 disabled:cursor-not-allowed flex-shrink-0 pl-2"
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
