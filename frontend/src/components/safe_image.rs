use yew::prelude::*;

use crate::i18n::context::use_language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ImageState {
    Loading,
    Loaded,
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct SafeImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// An image that shows a spinner while loading and a placeholder if it
/// fails, never a broken image icon.
#[function_component(SafeImage)]
pub fn safe_image(props: &SafeImageProps) -> Html {
    let language = use_language();
    let state = use_state(|| ImageState::Loading);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                state.set(ImageState::Loading);
                || ()
            },
            props.src.clone(),
        );
    }

    let onload = {
        let state = state.clone();
        Callback::from(move |_: Event| state.set(ImageState::Loaded))
    };

    let onerror = {
        let state = state.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::warn!("Image failed to load: {}", src);
            state.set(ImageState::Failed)
        })
    };

    if *state == ImageState::Failed {
        return html! {
            <div class={classes!("image-placeholder", props.class.clone())} role="img" aria-label={props.alt.clone()}>
                <span>{ language.t("image.unavailable") }</span>
            </div>
        };
    }

    html! {
        <div class={classes!("safe-image", props.class.clone())}>
            if *state == ImageState::Loading {
                <div class="image-spinner"></div>
            }
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                class={classes!((*state == ImageState::Loading).then(|| "loading"))}
                {onload}
                {onerror}
            />
        </div>
    }
}
