mod wheel_canvas;
mod wheel_utils;

use yew::prelude::*;

use crate::components::{ConfigurationPanel, WinnerModal};
use crate::config::WheelConfig;
use crate::hooks::use_spin_session;
use crate::styles;
use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SpinButton};

#[derive(Properties, PartialEq)]
pub struct WheelPageProps {
    pub config: WheelConfig,
}

#[function_component(WheelPage)]
pub fn wheel_page(props: &WheelPageProps) -> Html {
    let session = use_spin_session(&props.config);

    let on_spin = {
        let spin = session.spin.clone();
        Callback::from(move |_: MouseEvent| spin.emit(()))
    };

    html! {
        <div class={styles::WHEEL_LAYOUT}>
            <ConfigurationPanel
                prizes={session.prizes.clone()}
                locked={session.is_locked}
                on_add={session.add_prize.clone()}
                on_remove={session.remove_prize.clone()}
            />

            <ResultDisplay
                winner={session.last_winner.clone()}
                is_spinning={session.is_spinning}
            />

            <div class="flex flex-col items-center gap-8">
                <WheelCanvas
                    prizes={session.prizes.clone()}
                    rotation={session.rotation}
                    duration_ms={session.spin_duration_ms}
                    is_spinning={session.is_spinning}
                />
                <SpinButton
                    is_spinning={session.is_spinning}
                    is_locked={session.is_locked}
                    onclick={on_spin}
                />
            </div>

            <WinnerModal
                winner={session.pending.clone()}
                on_acknowledge={session.acknowledge.clone()}
            />
        </div>
    }
}
