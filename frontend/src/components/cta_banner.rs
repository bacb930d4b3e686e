use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::Section;

#[derive(Properties, PartialEq)]
pub struct CtaBannerProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(CtaBanner)]
pub fn cta_banner(props: &CtaBannerProps) -> Html {
    let book_demo = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Contact))
    };

    html! {
        <section class="cta">
            <style>
                {r#"
                .cta {
                    background: var(--white);
                    text-align: center;
                }
                .cta h2 {
                    font-size: clamp(2.2rem, 5vw, 3rem);
                    margin-bottom: 1.2rem;
                }
                .cta p {
                    font-size: 1.1rem;
                    margin-bottom: 2rem;
                    color: var(--gray-700);
                }
                @media (max-width: 640px) {
                    .cta p {
                        padding: 0 1rem;
                    }
                }
                "#}
            </style>
            <div class="container">
                <h2>{"Automate the work nobody wants to do"}</h2>
                <p>{"From frontline support to back‑office ops, Nuralis Agents handle the repetitive, rules‑based grind—so your people can invent, create, and delight customers."}</p>
                <button class="btn" onclick={book_demo}>{"Book My Demo"}</button>
            </div>
        </section>
    }
}
