use yew::prelude::*;

use crate::config;
use crate::content::ServiceDetail;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: ServiceDetail,
    pub on_learn_more: Callback<String>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    let onclick = {
        let id = service.id.clone();
        let on_learn_more = props.on_learn_more.clone();
        Callback::from(move |_| on_learn_more.emit(id.clone()))
    };

    html! {
        <div class="service-card">
            <div class="service-card-image">
                <img src={config::asset_url(&service.image)} alt={service.title.clone()} loading="lazy" />
            </div>
            <div class="service-card-body">
                <h3>{&service.title}</h3>
                <p>{&service.summary}</p>
                <button class="learn-more" {onclick}>{"Learn More"}</button>
            </div>
        </div>
    }
}
