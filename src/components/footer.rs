use yew::prelude::*;
use chrono::Datelike;

use crate::components::page_link::PageLink;
use crate::scroll_spy::SectionId;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub navigate: Callback<String>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <PageLink href={SectionId::Home.href()} classes={classes!("footer-logo")} navigate={props.navigate.clone()}>
                    {"STRAD"}
                </PageLink>
                <div class="footer-links">
                    {
                        for SectionId::ALL.iter().skip(1).map(|&id| html! {
                            <PageLink href={id.href()} navigate={props.navigate.clone()}>
                                {id.label()}
                            </PageLink>
                        })
                    }
                </div>
                <p class="footer-copy">{format!("© {} STRAD Engineering GmbH. All rights reserved.", year)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 2rem;
                    background: #08090c;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }

                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }

                .footer-logo {
                    color: #ffffff;
                    font-weight: 800;
                    letter-spacing: 0.3em;
                    text-decoration: none;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-links a {
                    color: rgba(255, 255, 255, 0.6);
                    text-decoration: none;
                }

                .footer-copy {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.85rem;
                    margin: 0;
                }
                "#}
            </style>
        </footer>
    }
}
