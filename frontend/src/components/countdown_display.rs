use yew::prelude::*;

use crate::config::CountdownConfig;
use crate::hooks::use_countdown;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CountdownDisplayProps {
    pub config: CountdownConfig,
}

#[function_component(CountdownDisplay)]
pub fn countdown_display(props: &CountdownDisplayProps) -> Html {
    let countdown = use_countdown(&props.config);

    let on_start = {
        let start = countdown.start.clone();
        Callback::from(move |_: MouseEvent| start.emit(()))
    };
    let on_restart = {
        let restart = countdown.restart.clone();
        Callback::from(move |_: MouseEvent| restart.emit(()))
    };

    let time_class = if countdown.expired {
        styles::TIMER_TIMES_UP
    } else {
        styles::TIMER_DIGITS
    };

    html! {
        <div class="flex flex-col items-center gap-6 md:gap-8 lg:gap-10">
            <div class={time_class}>
                if countdown.expired && props.config.show_controls {
                    {"Time's Up!"}
                } else {
                    {countdown.display.clone()}
                }
            </div>

            if props.config.show_controls {
                if countdown.running {
                    <button onclick={on_restart} class={styles::BUTTON_TIMER_RESTART}>
                        {"Restart"}
                    </button>
                } else {
                    <button onclick={on_start} class={styles::BUTTON_TIMER_START}>
                        { if countdown.expired { "Restart" } else { "Start" } }
                    </button>
                }
            }
        </div>
    }
}
