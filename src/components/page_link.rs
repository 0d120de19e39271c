use yew::prelude::*;
use web_sys::MouseEvent;

use crate::scroll_spy::anchor_fragment;

#[derive(Properties, PartialEq)]
pub struct PageLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub classes: Classes,
    /// Receives the target element id for in-page anchors.
    pub navigate: Callback<String>,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that smooth-scrolls the page container for `#fragment` hrefs and
/// leaves every other href to the browser.
#[function_component(PageLink)]
pub fn page_link(props: &PageLinkProps) -> Html {
    let onclick = {
        let target = anchor_fragment(&props.href).map(str::to_string);
        let navigate = props.navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(target) = &target {
                e.prevent_default();
                navigate.emit(target.clone());
            }
        })
    };

    html! {
        <a id={props.id.clone()} href={props.href.clone()} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
