use yew::prelude::*;
use gloo_timers::callback::Interval;
use log::info;

use crate::components::{
    contact_form::ContactForm,
    cta_banner::CtaBanner,
    footer::Footer,
    header::Header,
    hero::Hero,
    solutions::Solutions,
    use_cases::UseCases,
};
use crate::config;
use crate::content::Section;
use crate::scroll::{scroll_to, ScrollListener};
use crate::state::{DisplayAction, DisplayState};

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer_eq(DisplayState::default);

    // Headline rotation, cancelled on unmount
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                info!("Starting headline rotation");
                let interval = Interval::new(config::PHRASE_ROTATION_MS, move || {
                    state.dispatch(DisplayAction::Tick);
                });
                move || drop(interval)
            },
            (),
        );
    }

    // Header shrink follows the scroll offset
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move |offset| {
                    state.dispatch(DisplayAction::Scrolled(offset));
                });
                move || drop(listener)
            },
            (),
        );
    }

    let on_navigate = Callback::from(|section: Section| scroll_to(section.id()));

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(DisplayAction::ToggleFlip(index)))
    };

    html! {
        <>
            <style>
                {r#"
                :root {
                    --black: #000;
                    --white: #fff;
                    --gray-100: #f5f5f7;
                    --gray-200: #e9e9ec;
                    --gray-700: #6b6b6b;
                    --gold: #b89b5e;
                    --radius: 24px;
                    --space: 160px;
                    --space-m: 96px;
                }
                * {
                    box-sizing: border-box;
                    margin: 0;
                    padding: 0;
                }
                body {
                    font-family: -apple-system, BlinkMacSystemFont, 'SF Pro', 'Segoe UI', Roboto, sans-serif;
                    background: var(--gray-100);
                    color: var(--black);
                    line-height: 1.6;
                    -webkit-font-smoothing: antialiased;
                }
                h1, h2 {
                    font-weight: 700;
                    letter-spacing: -.45px;
                    margin-bottom: 1rem;
                }
                h1 {
                    font-size: clamp(2.8rem, 7vw, 4.2rem);
                }
                h2 {
                    font-size: clamp(1.9rem, 4.5vw, 2.6rem);
                }
                p {
                    color: var(--gray-700);
                }
                a {
                    text-decoration: none;
                    color: inherit;
                }
                .btn {
                    font: inherit;
                    cursor: pointer;
                    border: none;
                    border-radius: 9999px;
                    padding: 1rem 2.8rem;
                    background: var(--black);
                    color: var(--white);
                    transition: transform .15s ease, box-shadow .15s ease, background .15s ease;
                }
                .btn:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 8px 20px rgba(0,0,0,.08);
                    background: var(--gold);
                    color: var(--black);
                }
                .btn-gold {
                    background: var(--gold);
                    color: var(--black);
                }
                .btn-gold:hover {
                    background: var(--black);
                    color: var(--white);
                }
                .container {
                    max-width: 1200px;
                    margin: auto;
                    padding: 0 1.5rem;
                }
                section {
                    padding: var(--space) 0;
                }
                .grid {
                    display: grid;
                    gap: 2rem;
                }
                @media (min-width: 640px) {
                    .grid {
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    }
                }
                @media (max-width: 640px) {
                    :root {
                        --space: var(--space-m);
                    }
                    .grid {
                        grid-template-columns: 1fr !important;
                    }
                    .container {
                        padding: 0 1rem;
                    }
                }
                "#}
            </style>
            <Header shrunk={state.header_shrunk} on_navigate={on_navigate.clone()} />
            <Hero active_phrase={state.active_phrase} on_navigate={on_navigate.clone()} />
            <CtaBanner on_navigate={on_navigate} />
            <Solutions />
            <UseCases flipped_card={state.flipped_card} {on_toggle} />
            <ContactForm />
            <Footer />
        </>
    }
}
