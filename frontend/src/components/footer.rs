use chrono::Datelike;
use yew::prelude::*;

use crate::config::LOGO_PATH;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer>
            <style>
                {r#"
                footer {
                    background: var(--black);
                    color: var(--white);
                    text-align: center;
                    padding: 4rem 1rem;
                }
                .footer-logo {
                    width: 150px;
                    margin-bottom: 1.5rem;
                    filter: none;
                }
                @media (max-width: 640px) {
                    .footer-logo {
                        width: 100px;
                    }
                }
                "#}
            </style>
            <img src={LOGO_PATH} alt="Nuralis Logo" class="footer-logo" />
            <p>{format!("© {} Nuralis.ai — All rights reserved.", year)}</p>
        </footer>
    }
}
