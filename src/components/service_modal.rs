use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::content::{ServiceDetail, ServiceSection};
use crate::modal::ModalControl;

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub service: ServiceDetail,
    pub on_control: Callback<ModalControl>,
}

fn render_section(section: &ServiceSection) -> Html {
    html! {
        <div class="modal-section">
            <h3>{&section.heading}</h3>
            <p>{&section.body}</p>
            {
                if let Some(bullets) = section.bullet_list() {
                    html! {
                        <ul class="modal-bullets">
                            { for bullets.iter().map(|bullet| html! { <li>{bullet}</li> }) }
                        </ul>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let control = |which: ModalControl| {
        let on_control = props.on_control.clone();
        Callback::from(move |_: MouseEvent| on_control.emit(which))
    };

    // The panel swallows clicks so they never reach the backdrop.
    let on_panel = {
        let on_control = props.on_control.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_control.emit(ModalControl::Panel);
        })
    };

    let service = &props.service;

    html! {
        <div class="modal-overlay" onclick={control(ModalControl::Backdrop)}>
            <div class="modal-content" onclick={on_panel}>
                <button class="modal-close" onclick={control(ModalControl::Close)} aria-label="Close">{"×"}</button>
                <div class="modal-hero">
                    <img src={config::asset_url(&service.image)} alt={service.title.clone()} />
                    <div class="modal-hero-text">
                        <h2>{&service.title}</h2>
                        <p class="modal-headline">{&service.headline}</p>
                    </div>
                </div>
                <div class="modal-body">
                    <p class="modal-intro">{&service.intro}</p>
                    { for service.sections.iter().map(render_section) }
                </div>
                <div class="modal-actions">
                    <button class="modal-back" onclick={control(ModalControl::BackToServices)}>{"Back to Services"}</button>
                    <button class="modal-cta" onclick={control(ModalControl::StartProject)}>{"Start a Project"}</button>
                </div>
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    background: rgba(0, 0, 0, 0.8);
                }

                .modal-content {
                    position: relative;
                    width: 100%;
                    max-width: 860px;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #15181d;
                    border: 1px solid rgba(230, 50, 34, 0.2);
                    border-radius: 12px;
                    color: #ffffff;
                }

                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 1;
                    width: 40px;
                    height: 40px;
                    border: none;
                    border-radius: 50%;
                    background: rgba(0, 0, 0, 0.6);
                    color: #ffffff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .modal-hero {
                    position: relative;
                    height: 280px;
                    overflow: hidden;
                }

                .modal-hero img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .modal-hero-text {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    padding: 2rem;
                    background: linear-gradient(to top, rgba(21, 24, 29, 1), rgba(21, 24, 29, 0));
                }

                .modal-headline {
                    color: #e63222;
                    margin: 0;
                }

                .modal-body {
                    padding: 2rem;
                }

                .modal-intro {
                    font-size: 1.1rem;
                    color: rgba(255, 255, 255, 0.85);
                }

                .modal-section h3 {
                    margin-top: 2rem;
                }

                .modal-bullets li {
                    margin-bottom: 0.4rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .modal-actions {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0 2rem 2rem;
                }

                .modal-back,
                .modal-cta {
                    padding: 0.9rem 1.8rem;
                    border-radius: 4px;
                    font-size: 1rem;
                    cursor: pointer;
                }

                .modal-back {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #ffffff;
                }

                .modal-cta {
                    background: #e63222;
                    border: none;
                    color: #ffffff;
                }
                "#}
            </style>
        </div>
    }
}
