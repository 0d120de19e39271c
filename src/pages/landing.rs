use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_window_size;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, KeyboardEvent};

use crate::components::{
    contact::ContactSection,
    footer::Footer,
    header::Header,
    page_link::PageLink,
    service_card::ServiceCard,
    service_modal::ServiceModal,
};
use crate::config;
use crate::content::ServiceCatalog;
use crate::dom_layout::{self, DomLayout};
use crate::modal::{scroll_after_close, ModalAction, ModalControl, ModalState};
use crate::scroll_lock::{self, DomOverflow};
use crate::scroll_spy::{active_section, header_is_scrolled, indicator_for, IndicatorBox, SectionId};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub catalog: Rc<ServiceCatalog>,
}

/// Recomputes navigation state from the container's current layout.
fn track_sections(
    container: &Element,
    active: &UseStateHandle<SectionId>,
    scrolled: &UseStateHandle<bool>,
) {
    if let Some(layout) = DomLayout::new(container.clone()) {
        active.set(active_section(&layout, &config::SCROLL_SPY));
        scrolled.set(header_is_scrolled(&layout, &config::SCROLL_SPY));
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let container_ref = use_node_ref();
    let active = use_state_eq(SectionId::default);
    let scrolled = use_state_eq(|| false);
    let indicator = use_state_eq(|| None::<IndicatorBox>);
    let modal = use_reducer(ModalState::default);
    let pending_scroll = use_state_eq(|| None::<SectionId>);
    let window_size = use_window_size();

    // Scroll-spy on the page container
    {
        let container_ref = container_ref.clone();
        let active = active.clone();
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = container_ref.cast::<Element>().map(|container| {
                    let scroll_callback = {
                        let container = container.clone();
                        let active = active.clone();
                        let scrolled = scrolled.clone();
                        Closure::wrap(Box::new(move || {
                            track_sections(&container, &active, &scrolled);
                        }) as Box<dyn FnMut()>)
                    };

                    if let Err(e) = container.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::error!("Failed to register scroll listener: {:?}", e);
                    }

                    // Initial check
                    track_sections(&container, &active, &scrolled);

                    (container, scroll_callback)
                });

                move || {
                    if let Some((container, scroll_callback)) = listener {
                        let _ = container.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Slide the indicator under the active link, also after resizes
    {
        let container_ref = container_ref.clone();
        let indicator = indicator.clone();
        use_effect_with_deps(
            move |(active, _)| {
                let next = container_ref
                    .cast::<Element>()
                    .and_then(DomLayout::new)
                    .and_then(|layout| indicator_for(&layout, *active));
                indicator.set(next);
                || ()
            },
            (*active, window_size),
        );
    }

    // Background scrolling stays off exactly while a modal is open
    {
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |state: &ModalState| {
                let lock = scroll_lock::lock_for(state, || {
                    DomOverflow::new(container_ref.cast::<HtmlElement>())
                });
                move || drop(lock)
            },
            (*modal).clone(),
        );
    }

    let navigate = {
        let container_ref = container_ref.clone();
        Callback::from(move |target: String| {
            if let Some(section) = SectionId::from_fragment(&target) {
                log::debug!("Navigating to {}", section.label());
            }
            if let Some(container) = container_ref.cast::<Element>() {
                dom_layout::scroll_container_to(container, &target);
            }
        })
    };

    // Scrolls queued by modal controls run once the overlay has closed, after
    // the scroll-lock effect above has released the container.
    {
        let pending_scroll_handle = pending_scroll.clone();
        let navigate = navigate.clone();
        use_effect_with_deps(
            move |(state, pending)| {
                if let Some(section) = scroll_after_close(state, *pending) {
                    pending_scroll_handle.set(None);
                    navigate.emit(section.as_str().to_string());
                }
                || ()
            },
            ((*modal).clone(), *pending_scroll),
        );
    }

    let on_control = {
        let modal = modal.clone();
        let pending_scroll = pending_scroll.clone();
        Callback::from(move |control: ModalControl| {
            let (action, scroll_to) = control.effects();
            if let Some(section) = scroll_to {
                pending_scroll.set(Some(section));
            }
            if let Some(action) = action {
                modal.dispatch(action);
            }
        })
    };

    // Escape works whenever the state is open, even if no overlay could be
    // rendered for the id.
    {
        let on_control = on_control.clone();
        use_effect_with_deps(
            move |is_open| {
                let listener = (*is_open).then(window).flatten().map(|window| {
                    let keydown_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if let Some(control) = ModalControl::from_key(&e.key()) {
                            on_control.emit(control);
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);

                    if let Err(e) = window.add_event_listener_with_callback(
                        "keydown",
                        keydown_callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Failed to register keydown listener: {:?}", e);
                    }
                    (window, keydown_callback)
                });

                move || {
                    if let Some((window, keydown_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            keydown_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            modal.is_open(),
        );
    }

    let open_modal = {
        let modal = modal.clone();
        let catalog = props.catalog.clone();
        Callback::from(move |id: String| {
            if catalog.find(&id).is_none() {
                log::warn!("No service with id '{}'", id);
            }
            modal.dispatch(ModalAction::Open(id));
        })
    };

    let hero_background = format!(
        "background-image: linear-gradient(to right, rgba(12, 14, 18, 0.95), rgba(12, 14, 18, 0.4)), url('{}');",
        config::asset_url("hero.jpg")
    );

    html! {
        <div class="landing-page">
            <Header
                active={*active}
                indicator={*indicator}
                scrolled={*scrolled}
                navigate={navigate.clone()}
            />

            <div class="page-scroll" ref={container_ref}>
                <main>
                    <section id="home" class="hero">
                        <div class="hero-background" style={hero_background}></div>
                        <div class="hero-content">
                            <p class="hero-eyebrow">{"Graz · Austria"}</p>
                            <h1>{"Engineering the Future of Automotive"}</h1>
                            <p class="hero-subtitle">
                                {"STRAD develops cars and car parts for leading manufacturers, from series production to the race track."}
                            </p>
                            <div class="hero-cta-group">
                                <PageLink href={SectionId::Services.href()} classes={classes!("hero-cta")} navigate={navigate.clone()}>
                                    {"Our Services"}
                                </PageLink>
                                <PageLink href={SectionId::Contact.href()} classes={classes!("hero-secondary")} navigate={navigate.clone()}>
                                    {"Start a Project"}
                                </PageLink>
                            </div>
                        </div>
                    </section>

                    <section id="about" class="about-section">
                        <div class="section-inner about-grid">
                            <div>
                                <h2>{"About STRAD"}</h2>
                                <p>
                                    {"Based in Austria, STRAD specializes in developing and engineering cars and car parts for major automotive companies. While we primarily work with Ford, our expertise extends to partnerships with other industry leaders."}
                                </p>
                                <p>
                                    {"Our engineers come from series development and from motorsport. That mix lets us move at racing speed without losing the discipline that production programs demand."}
                                </p>
                            </div>
                            <ul class="about-stats">
                                <li><span class="stat-value">{"20+"}</span><span class="stat-label">{"Years in automotive"}</span></li>
                                <li><span class="stat-value">{"150"}</span><span class="stat-label">{"Engineers"}</span></li>
                                <li><span class="stat-value">{"40+"}</span><span class="stat-label">{"OEM programs delivered"}</span></li>
                            </ul>
                        </div>
                    </section>

                    <section id="services" class="services-section">
                        <div class="section-inner">
                            <h2>{"Our Services"}</h2>
                            {
                                if props.catalog.is_empty() {
                                    html! {
                                        <p class="services-empty">
                                            {"Service details are being updated. "}
                                            <PageLink href={SectionId::Contact.href()} navigate={navigate.clone()}>
                                                {"Get in touch"}
                                            </PageLink>
                                            {" to hear what we can do for you."}
                                        </p>
                                    }
                                } else {
                                    html! {
                                        <div class="service-grid">
                                            {
                                                for props.catalog.iter().map(|service| html! {
                                                    <ServiceCard
                                                        key={service.id.clone()}
                                                        service={service.clone()}
                                                        on_learn_more={open_modal.clone()}
                                                    />
                                                })
                                            }
                                        </div>
                                    }
                                }
                            }
                        </div>
                    </section>

                    <ContactSection />
                </main>

                <Footer navigate={navigate.clone()} />
            </div>

            {
                if let Some(service) = modal.resolve(&props.catalog) {
                    html! {
                        <ServiceModal
                            service={service.clone()}
                            on_control={on_control}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                html, body {
                    margin: 0;
                    height: 100%;
                    background: #0c0e12;
                    color: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .page-scroll {
                    height: 100vh;
                    overflow-y: auto;
                    scroll-behavior: smooth;
                }

                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                main > section {
                    padding: 7rem 0;
                }

                h2 {
                    font-size: 2.4rem;
                    margin: 0 0 1.5rem;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 0 !important;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    z-index: 0;
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    width: 100%;
                }

                .hero-eyebrow {
                    color: #e63222;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }

                .hero h1 {
                    font-size: 3.6rem;
                    max-width: 720px;
                    margin: 0 0 1.5rem;
                }

                .hero-subtitle {
                    max-width: 560px;
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2.5rem;
                }

                .hero-cta,
                .hero-secondary {
                    padding: 1rem 2rem;
                    border-radius: 4px;
                    text-decoration: none;
                    color: #ffffff;
                }

                .hero-cta {
                    background: #e63222;
                }

                .hero-secondary {
                    border: 1px solid rgba(255, 255, 255, 0.4);
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 4rem;
                    align-items: center;
                }

                .about-section p {
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.7;
                }

                .about-stats {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: grid;
                    gap: 2rem;
                }

                .stat-value {
                    display: block;
                    font-size: 2.6rem;
                    font-weight: 800;
                    color: #e63222;
                }

                .stat-label {
                    color: rgba(255, 255, 255, 0.6);
                }

                .services-section {
                    background: #111418;
                }

                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 2rem;
                }

                .service-card {
                    display: flex;
                    flex-direction: column;
                    background: #15181d;
                    border: 1px solid rgba(255, 255, 255, 0.06);
                    border-radius: 8px;
                    overflow: hidden;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .service-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(230, 50, 34, 0.4);
                }

                .service-card-image img {
                    width: 100%;
                    height: 180px;
                    object-fit: cover;
                }

                .service-card-body {
                    display: flex;
                    flex-direction: column;
                    flex: 1;
                    padding: 1.5rem;
                }

                .service-card-body p {
                    flex: 1;
                    color: rgba(255, 255, 255, 0.7);
                }

                .learn-more {
                    align-self: flex-start;
                    padding: 0.6rem 1.4rem;
                    background: transparent;
                    border: 1px solid #e63222;
                    border-radius: 4px;
                    color: #ffffff;
                    cursor: pointer;
                }

                .services-empty a {
                    color: #e63222;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }

                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
