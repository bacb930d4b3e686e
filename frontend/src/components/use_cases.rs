use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{Section, UseCase, USE_CASES};

#[derive(Properties, PartialEq)]
pub struct UseCasesProps {
    pub flipped_card: Option<usize>,
    pub on_toggle: Callback<usize>,
}

#[function_component(UseCases)]
pub fn use_cases(props: &UseCasesProps) -> Html {
    let card = |(i, use_case): (usize, &UseCase)| {
        let on_toggle = props.on_toggle.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_toggle.emit(i));
        let flipped = props.flipped_card == Some(i);

        html! {
            <div key={i} class={classes!("ucard", flipped.then(|| "flipped"))} {onclick}>
                <div class="ucard-inner">
                    <div class="ucard-face ucard-front">
                        <span class="ucard-icon" aria-hidden="true">{use_case.icon}</span>
                        <p>{use_case.title}</p>
                    </div>
                    <div class="ucard-face ucard-back">
                        <p>{use_case.detail}</p>
                    </div>
                </div>
            </div>
        }
    };

    html! {
        <section id={Section::UseCases.id()}>
            <style>
                {r#"
                #usecases {
                    background: var(--white);
                }
                .ucard {
                    perspective: 1200px;
                    height: 240px;
                    cursor: pointer;
                }
                .ucard-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    transition: transform .7s cubic-bezier(.4,.2,.2,1);
                    transform-style: preserve-3d;
                }
                .ucard.flipped .ucard-inner {
                    transform: rotateY(180deg);
                }
                .ucard-face {
                    position: absolute;
                    inset: 0;
                    border-radius: var(--radius);
                    box-shadow: 0 6px 20px rgba(0,0,0,.04);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    backface-visibility: hidden;
                    background: rgba(255,255,255,0.72);
                    backdrop-filter: saturate(180%) blur(24px);
                }
                .ucard-front {
                    gap: 1.2rem;
                }
                .ucard-icon {
                    font-size: 2rem;
                    color: var(--black);
                    transition: transform .25s ease;
                }
                .ucard:hover .ucard-icon,
                .ucard.flipped .ucard-icon {
                    transform: scale(1.1);
                }
                .ucard-front p {
                    font-weight: 600;
                    color: var(--black);
                }
                .ucard-back {
                    transform: rotateY(180deg);
                    text-align: left;
                    line-height: 1.6;
                    color: var(--black);
                    font-size: .95rem;
                }
                @media (max-width: 640px) {
                    .ucard {
                        height: auto;
                    }
                    .ucard-inner {
                        height: auto;
                        min-height: 260px;
                    }
                    .ucard-face {
                        padding: 1.2rem;
                        font-size: 0.95rem;
                    }
                }
                "#}
            </style>
            <div class="container">
                <h2 style="text-align: center; margin-bottom: 3rem;">
                    {"Real‑World Wins Powered by Nuralis Agents"}
                </h2>
                <div class="grid">
                    { for USE_CASES.iter().enumerate().map(card) }
                </div>
            </div>
        </section>
    }
}
