use crate::options::NotifyOptions;
use crate::toaster::Toaster;
use crate::web::WebSurface;
use web_sys::Element;
use yew::prelude::*;

pub type WebToaster = Toaster<WebSurface>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
    /// Process-wide configuration for the provided toaster.
    #[prop_or_default]
    pub config: NotifyOptions<Element>,
}

/// Makes a toaster available to every component below it through `use_toaster`.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let config = props.config.clone();
    let toaster = use_state(move || {
        let toaster = WebToaster::new(WebSurface);
        toaster.configure(config);
        toaster
    });

    html! {
        <ContextProvider<WebToaster> context={(*toaster).clone()}>
            { props.children.clone() }
        </ContextProvider<WebToaster>>
    }
}

/// The toaster of the nearest `ToastProvider`.
#[hook]
pub fn use_toaster() -> Option<WebToaster> {
    use_context::<WebToaster>()
}
