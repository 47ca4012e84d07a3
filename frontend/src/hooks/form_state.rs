use shared::validation::validate_prize_name;
use shared::ImageRef;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::ImageResolver;

/// Draft of the prize being added in the configuration panel.
///
/// The draft owns its image preview until the prize is submitted (ownership
/// moves to the wheel) or the preview is replaced, cleared or unmounted
/// (the preview is released).
#[derive(Clone)]
pub struct PrizeFormState {
    pub name: String,
    pub preview: Option<ImageRef>,
    pub is_valid: bool,
    pub on_name_input: Callback<InputEvent>,
    pub on_file_change: Callback<Event>,
    pub on_url_input: Callback<InputEvent>,
    pub clear_preview: Callback<()>,
    /// Hands the draft over and resets the form.
    pub submit: Callback<(), Option<(String, Option<ImageRef>)>>,
}

#[hook]
pub fn use_prize_form() -> PrizeFormState {
    let name = use_state(String::new);
    let preview = use_mut_ref(|| None::<ImageRef>);
    let redraw = use_force_update();

    {
        let preview = preview.clone();
        use_effect_with((), move |_| {
            move || {
                ImageResolver::release_all(preview.borrow_mut().take());
            }
        });
    }

    let replace_preview = {
        let preview = preview.clone();
        let redraw = redraw.clone();
        move |next: Option<ImageRef>| {
            let previous = std::mem::replace(&mut *preview.borrow_mut(), next);
            ImageResolver::release_all(previous);
            redraw.force_update();
        }
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                name.set(input.value());
            }
        })
    };

    let on_file_change = {
        let replace_preview = replace_preview.clone();
        Callback::from(move |e: Event| {
            let file = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                replace_preview(ImageResolver::from_file(&file));
            }
        })
    };

    let on_url_input = {
        let replace_preview = replace_preview.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                replace_preview(ImageResolver::from_url(&input.value()));
            }
        })
    };

    let clear_preview = {
        let replace_preview = replace_preview.clone();
        Callback::from(move |_| replace_preview(None))
    };

    let submit = {
        let name = name.clone();
        let preview = preview.clone();
        Callback::from(move |_| {
            if validate_prize_name(&name).is_err() {
                return None;
            }
            let draft = ((*name).clone(), preview.borrow_mut().take());
            name.set(String::new());
            redraw.force_update();
            Some(draft)
        })
    };

    let current_preview = preview.borrow().clone();
    PrizeFormState {
        is_valid: validate_prize_name(&name).is_ok(),
        name: (*name).clone(),
        preview: current_preview,
        on_name_input,
        on_file_change,
        on_url_input,
        clear_preview,
        submit,
    }
}
