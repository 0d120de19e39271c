use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::page_link::PageLink;
use crate::scroll_spy::{IndicatorBox, SectionId};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: SectionId,
    pub indicator: Option<IndicatorBox>,
    pub scrolled: bool,
    pub navigate: Callback<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Link clicks bubble up here after PageLink has started the scroll.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let indicator_style = props
        .indicator
        .map(|indicator| indicator.style())
        .unwrap_or_else(|| "opacity: 0;".to_string());

    html! {
        <header class={classes!("site-header", props.scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <PageLink href={SectionId::Home.href()} classes={classes!("logo")} navigate={props.navigate.clone()}>
                    {"STRAD"}
                </PageLink>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("nav", (*menu_open).then(|| "mobile-menu-open"))} onclick={close_menu}>
                    {
                        for SectionId::ALL.iter().map(|&id| html! {
                            <PageLink
                                href={id.href()}
                                id={AttrValue::from(id.nav_link_id())}
                                classes={classes!("nav-link", (id == props.active).then(|| "active"))}
                                navigate={props.navigate.clone()}
                            >
                                {id.label()}
                            </PageLink>
                        })
                    }
                    <span class="nav-indicator" style={indicator_style}></span>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: background 0.3s ease, padding 0.3s ease;
                }

                .site-header.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(12, 14, 18, 0.92);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 4px 24px rgba(0, 0, 0, 0.35);
                }

                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .logo {
                    font-size: 1.6rem;
                    font-weight: 800;
                    letter-spacing: 0.3em;
                    color: #ffffff;
                    text-decoration: none;
                }

                .nav {
                    position: relative;
                    display: flex;
                    gap: 2rem;
                }

                .nav-link {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    font-size: 0.95rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    padding: 0.5rem 0;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: #ffffff;
                }

                .nav-indicator {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    height: 2px;
                    background: #e63222;
                    transition: transform 0.3s ease, width 0.3s ease;
                    pointer-events: none;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #ffffff;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 0;
                        padding: 1rem 2rem;
                        background: rgba(12, 14, 18, 0.97);
                    }

                    .nav.mobile-menu-open {
                        display: flex;
                    }

                    .nav-indicator {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}
