use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config::LOGO_PATH;
use crate::content::{phrase_lead_in, Section, PHRASES};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub active_phrase: usize,
    pub on_navigate: Callback<Section>,
}

/// Headline with the rotating gold phrase. All phrases stay in the layout; only the active one is opaque.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let know_more = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Contact))
    };

    let watermark = format!(
        ".hero::before {{ content: \"\"; position: absolute; inset: 0; background: url('/{}') center/22% no-repeat; opacity: 0.03; filter: invert(1); pointer-events: none; }}",
        LOGO_PATH
    );

    html! {
        <section class="hero" id="hero">
            <style>
                {r#"
                .hero {
                    background: var(--black);
                    color: var(--white);
                    text-align: center;
                    min-height: 480px;
                    overflow: hidden;
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                }
                .hero-line {
                    display: flex;
                    gap: .5rem;
                    font-size: clamp(2.8rem, 7vw, 4.2rem);
                    font-weight: 700;
                    z-index: 1;
                    flex-wrap: nowrap;
                    white-space: nowrap;
                }
                .static {
                    white-space: nowrap;
                }
                .gold {
                    color: var(--gold);
                }
                .white {
                    color: var(--white);
                }
                .dynamic-wrapper {
                    position: relative;
                    display: inline-block;
                    min-width: 240px;
                }
                .phrase {
                    position: absolute;
                    left: 0;
                    top: 0;
                    opacity: 0;
                    transition: opacity 3s ease-in-out;
                    white-space: nowrap;
                }
                .phrase.active {
                    opacity: 1;
                }
                .hero-cta {
                    position: absolute;
                    left: 50%;
                    bottom: 40px;
                    transform: translateX(-50%);
                    z-index: 1;
                }
                @media (max-width: 640px) {
                    .hero-line {
                        flex-direction: column;
                        align-items: center;
                        font-size: 2rem;
                        text-align: center;
                    }
                    .hero-cta {
                        position: static;
                        margin-top: 2rem;
                        transform: none;
                    }
                }
                "#}
                {watermark}
            </style>
            <div class="hero-line">
                <span class="static">{"AI\u{a0}"}<span class="gold">{"A"}</span>{"gents\u{a0}"}</span>
                <span class="dynamic-wrapper">
                    { for PHRASES.iter().enumerate().map(|(i, phrase)| html! {
                        <span key={i} class={classes!("phrase", (i == props.active_phrase).then(|| "active"))}>
                            <span class="white">{phrase_lead_in(i)}</span>
                            <span class="gold">{*phrase}</span>
                        </span>
                    }) }
                </span>
            </div>
            <button class="btn btn-gold hero-cta" onclick={know_more}>{"Know More"}</button>
        </section>
    }
}
