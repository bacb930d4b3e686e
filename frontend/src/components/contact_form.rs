use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::content::Section;
use crate::lead::{AcknowledgeOnly, Field, FormState};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(FormState::default);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let _ = next.submit(&AcknowledgeOnly);
            form.set(next);
        })
    };

    let on_edit = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Description => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*form).clone();
            next.edit(field, value);
            form.set(next);
        })
    };

    html! {
        <section id={Section::Contact.id()}>
            <style>
                {r#"
                #contact form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 480px;
                    margin: auto;
                }
                #contact input,
                #contact textarea {
                    padding: 1rem;
                    border: 1px solid var(--gray-200);
                    border-radius: 12px;
                    font-size: 1rem;
                }
                #contact button {
                    background: var(--black);
                    color: var(--white);
                }
                #contact button:hover {
                    background: var(--gold);
                    color: var(--black);
                }
                .form-ack {
                    text-align: center;
                    color: var(--black);
                    font-weight: 600;
                }
                .form-error {
                    text-align: center;
                    color: #b3261e;
                }
                "#}
            </style>
            <div class="container">
                <h2 style="text-align: center; margin-bottom: 2rem;">{"Let’s Map Your First Automation"}</h2>
                <form {onsubmit}>
                    <input
                        type="text"
                        placeholder="Name"
                        required=true
                        value={form.name.clone()}
                        oninput={on_edit(Field::Name)}
                    />
                    <input
                        type="email"
                        placeholder="Work Email"
                        required=true
                        value={form.email.clone()}
                        oninput={on_edit(Field::Email)}
                    />
                    <textarea
                        placeholder="Briefly describe the process you’d like to automate"
                        rows="4"
                        required=true
                        value={form.description.clone()}
                        oninput={on_edit(Field::Description)}
                    />
                    <button type="submit" class="btn">{"Submit"}</button>
                    {
                        if let Some(message) = form.success.as_ref() {
                            html! { <p class="form-ack" role="status">{message}</p> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if let Some(message) = form.error.as_ref() {
                            html! { <p class="form-error" role="alert">{message}</p> }
                        } else {
                            html! {}
                        }
                    }
                </form>
            </div>
        </section>
    }
}
