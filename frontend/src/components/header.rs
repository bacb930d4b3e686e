use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config::LOGO_PATH;
use crate::content::Section;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub shrunk: bool,
    pub on_navigate: Callback<Section>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { shrunk, on_navigate } = props;

    let nav_link = |section: Section| {
        let on_navigate = on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        });
        html! {
            <a href={section.href()} {onclick}>{section.nav_label()}</a>
        }
    };

    let know_more = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Contact))
    };

    html! {
        <header class={classes!("header", shrunk.then(|| "shrink"))}>
            <style>
                {r#"
                .header {
                    background: var(--white);
                    position: sticky;
                    top: 0;
                    z-index: 1000;
                    border-bottom: 1px solid var(--gray-200);
                    transition: height .3s ease;
                }
                .header-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 72px;
                    transition: height .3s ease;
                }
                .header.shrink .header-inner {
                    height: 56px;
                }
                .logo {
                    height: 40px;
                    transition: height .3s ease;
                }
                .header.shrink .logo {
                    height: 100px;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                }
                .nav-links a {
                    margin-left: 2rem;
                    font-weight: 500;
                    position: relative;
                }
                .nav-links a::after {
                    content: "";
                    position: absolute;
                    left: 0;
                    bottom: -6px;
                    width: 0;
                    height: 2px;
                    background: var(--gold);
                    transition: width .25s ease;
                }
                .nav-links a:hover::after {
                    width: 100%;
                }
                .header-cta {
                    margin-left: 2.5rem;
                }
                @media (max-width: 640px) {
                    .header-inner {
                        flex-direction: column;
                        gap: 1rem;
                        height: auto;
                        padding: 1rem 0;
                    }
                    .logo {
                        height: 150px;
                    }
                    .nav-links a {
                        display: none;
                    }
                    .header-cta {
                        margin-left: 0;
                    }
                }
                "#}
            </style>
            <div class="container header-inner">
                <img src={LOGO_PATH} alt="Nuralis" class="logo" />
                <nav class="nav-links">
                    { for Section::ALL.into_iter().map(nav_link) }
                </nav>
                <button class="btn header-cta" onclick={know_more}>{"Know More"}</button>
            </div>
        </header>
    }
}
