use log::info;
use yew::prelude::*;

use crate::components::CountdownDisplay;
use crate::config::KioskVariant;
use crate::pages::wheel::WheelPage;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct KioskPageProps {
    pub variant: KioskVariant,
}

/// One kiosk scene: an optional countdown above an optional prize wheel.
#[function_component(KioskPage)]
pub fn kiosk_page(props: &KioskPageProps) -> Html {
    let config = props.variant.config();

    {
        let variant = props.variant;
        use_effect_with(variant, move |variant| {
            info!("Kiosk scene {:?} mounted", variant);
            || ()
        });
    }

    html! {
        <div class={styles::SCENE}>
            <h1 class={styles::SCENE_TITLE}>{config.title}</h1>

            if let Some(countdown) = config.countdown {
                <div class={styles::SCENE_TIMER}>
                    <CountdownDisplay config={countdown} />
                </div>
            }

            if let Some(wheel) = config.wheel {
                <WheelPage config={wheel} />
            }
        </div>
    }
}
