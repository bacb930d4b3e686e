use yew::prelude::*;

use crate::content::{Section, SOLUTIONS};

#[function_component(Solutions)]
pub fn solutions() -> Html {
    html! {
        <section id={Section::Solutions.id()}>
            <style>
                {r#"
                #solutions {
                    background: linear-gradient(135deg, var(--gray-100) 0%, var(--gray-200) 100%);
                }
                .card {
                    background: var(--white);
                    padding: 2.8rem 2.2rem;
                    border-radius: var(--radius);
                    box-shadow: 0 10px 30px rgba(0,0,0,.05);
                    transition: transform .25s cubic-bezier(.4,.2,.2,1), box-shadow .25s cubic-bezier(.4,.2,.2,1);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .card:hover {
                    transform: translateY(-6px);
                    box-shadow: 0 18px 40px rgba(0,0,0,.07);
                }
                .card-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1.4rem;
                    color: var(--black);
                    transition: transform .25s ease;
                }
                .card:hover .card-icon {
                    transform: scale(1.05);
                }
                .card strong {
                    font-size: 1.25rem;
                    margin-bottom: .6rem;
                    color: var(--black);
                }
                "#}
            </style>
            <div class="container">
                <h2 style="text-align: center; margin-bottom: 3rem;">
                    {"AI Agents as a Service — Your On‑Demand Digital Workforce"}
                </h2>
                <div class="grid">
                    { for SOLUTIONS.iter().enumerate().map(|(i, solution)| html! {
                        <div key={i} class="card">
                            <div class="card-icon" aria-hidden="true">{solution.icon}</div>
                            <strong>{solution.title}</strong>
                            <p>{solution.desc}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
