use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::config;

/// Outbound profiles listed under the contact details.
const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("LinkedIn", "https://www.linkedin.com/company/strad-engineering"),
    ("Instagram", "https://www.instagram.com/strad.engineering"),
    ("YouTube", "https://www.youtube.com/@strad-engineering"),
];

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let company = use_state(String::new);
    let message = use_state(String::new);

    let input_handler = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let mailto = format!("mailto:{}", config::CONTACT_EMAIL);

    html! {
        <section id="contact" class="contact-section">
            <div class="section-inner contact-grid">
                <div class="contact-info">
                    <h2>{"Start a Project"}</h2>
                    <p>{"Ready to innovate? Tell us about your program and our engineering team in Graz will get back to you."}</p>
                    <a href={mailto} class="contact-email">{config::CONTACT_EMAIL}</a>
                    <div class="social-links">
                        {
                            for SOCIAL_LINKS.iter().map(|(label, url)| html! {
                                <a href={*url} target="_blank" rel="noopener noreferrer">{*label}</a>
                            })
                        }
                    </div>
                </div>
                <form class="contact-form">
                    <input type="text" placeholder="Name" value={(*name).clone()} oninput={input_handler(&name)} />
                    <input type="email" placeholder="Email" value={(*email).clone()} oninput={input_handler(&email)} />
                    <input type="text" placeholder="Company" value={(*company).clone()} oninput={input_handler(&company)} />
                    <textarea placeholder="Message" rows="6" value={(*message).clone()} oninput={on_message}></textarea>
                    <button type="submit">{"Send"}</button>
                </form>
            </div>
            <style>
                {r#"
                .contact-section {
                    background: #0c0e12;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }

                .contact-email {
                    display: inline-block;
                    margin: 1rem 0;
                    color: #e63222;
                    font-size: 1.2rem;
                    text-decoration: none;
                }

                .social-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .social-links a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-form input,
                .contact-form textarea {
                    padding: 0.9rem 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 4px;
                    color: #ffffff;
                    font: inherit;
                }

                .contact-form button {
                    align-self: flex-start;
                    padding: 0.9rem 2.5rem;
                    background: #e63222;
                    border: none;
                    border-radius: 4px;
                    color: #ffffff;
                    font-size: 1rem;
                    cursor: pointer;
                }

                @media (max-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
