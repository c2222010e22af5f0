use std::rc::Rc;

use gloo_console::log;
use studio_core::{Mode, StudioAction, StudioConfig, StudioState, TicketSource};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::api::Api;

#[derive(Properties, PartialEq)]
pub struct StudioProps {
    pub config: StudioConfig,
}

/// Yew wrapper around the shared studio state machine.
#[derive(Default, PartialEq)]
pub struct StudioStore(pub StudioState);

impl Reducible for StudioStore {
    type Action = StudioAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Self(state))
    }
}

#[function_component(Studio)]
pub fn studio(props: &StudioProps) -> Html {
    let store = use_reducer(StudioStore::default);
    let tickets = use_mut_ref(TicketSource::default);
    let api = Api::new(props.config.clone());

    // Warm up the backend once on mount
    {
        let api = api.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    studio_core::warm_up(&api).await;
                });
                || ()
            },
            (),
        );
    }

    let onsubmit = {
        let store = store.clone();
        let tickets = tickets.clone();
        let api = api.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ticket = tickets.borrow_mut().next();
            let submission = store.0.prepare(ticket);
            store.dispatch(StudioAction::Started(ticket));

            let store = store.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = studio_core::generate(&api, &submission.request).await;
                if let Err(err) = &outcome {
                    log!("Generation failed:", err.to_string());
                }
                store.dispatch(StudioAction::Resolved {
                    ticket: submission.ticket,
                    outcome,
                });
            });
        })
    };

    let oninput = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            store.dispatch(StudioAction::SetPrompt(input.value()));
        })
    };

    let state = &store.0;
    let mode_button = |mode: Mode| {
        let store = store.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            store.dispatch(StudioAction::SetMode(mode));
        });
        let class = if state.mode == mode {
            "mode-button active"
        } else {
            "mode-button"
        };
        html! {
            <button type="button" {class} {onclick}>{ mode.label() }</button>
        }
    };

    html! {
        <section id="studio" class="studio">
            <div class="studio-card">
                <div class="mode-buttons">
                    { mode_button(Mode::Image) }
                    { mode_button(Mode::Video) }
                </div>
                <form class="studio-form" {onsubmit}>
                    <input
                        class="prompt-input"
                        value={state.prompt.clone()}
                        {oninput}
                        placeholder="Describe your vision…"
                    />
                    <button type="submit" class="generate-button" disabled={state.submit_disabled()}>
                        { state.submit_label() }
                    </button>
                </form>
                if !state.note.is_empty() {
                    <p class="studio-note">{ state.note.clone() }</p>
                }
                if !state.visible_images().is_empty() {
                    <div class="image-grid">
                        { for state.visible_images().iter().enumerate().map(|(i, src)| html! {
                            <img key={i} src={src.clone()} alt="generated" class="generated-image" />
                        }) }
                    </div>
                }
                if let Some(src) = state.visible_video() {
                    <div class="video-wrap">
                        <video src={src.to_string()} controls=true class="generated-video" />
                    </div>
                }
            </div>
            <style>
                {r#"
        .studio {
            position: relative;
            z-index: 10;
            max-width: 72rem;
            margin: -3rem auto 0;
            padding: 0 1.5rem 6rem;
        }
        .studio-card {
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.05);
            border-radius: 1rem;
            padding: 1.5rem;
            backdrop-filter: blur(8px);
        }
        .mode-buttons {
            display: flex;
            gap: 0.75rem;
        }
        .mode-button {
            border-radius: 9999px;
            padding: 0.5rem 1rem;
            font-size: 0.875rem;
            background: transparent;
            color: rgba(255, 255, 255, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.2);
            cursor: pointer;
        }
        .mode-button.active {
            background: #fff;
            color: #000;
            border-color: #fff;
        }
        .studio-form {
            margin-top: 1rem;
            display: grid;
            gap: 0.75rem;
            grid-template-columns: 1fr auto;
        }
        .prompt-input {
            width: 100%;
            border-radius: 0.75rem;
            background: rgba(255, 255, 255, 0.1);
            padding: 0.75rem 1rem;
            color: #fff;
            border: none;
            outline: 1px solid rgba(255, 255, 255, 0.1);
        }
        .generate-button {
            border-radius: 0.75rem;
            background: #fff;
            color: #000;
            padding: 0.75rem 1.5rem;
            font-weight: 500;
            border: none;
            cursor: pointer;
        }
        .generate-button:disabled {
            opacity: 0.6;
            cursor: default;
        }
        .studio-note {
            margin-top: 0.75rem;
            font-size: 0.875rem;
            color: rgba(255, 255, 255, 0.7);
        }
        .image-grid {
            margin-top: 1.5rem;
            display: grid;
            gap: 1rem;
            grid-template-columns: repeat(3, 1fr);
        }
        .generated-image {
            width: 100%;
            aspect-ratio: 1 / 1;
            object-fit: cover;
            border-radius: 0.75rem;
        }
        .video-wrap {
            margin-top: 1.5rem;
        }
        .generated-video {
            width: 100%;
            border-radius: 0.75rem;
        }
        @media (max-width: 768px) {
            .studio-form {
                grid-template-columns: 1fr;
            }
            .image-grid {
                grid-template-columns: 1fr;
            }
        }
                "#}
            </style>
        </section>
    }
}
