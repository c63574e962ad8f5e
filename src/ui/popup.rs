/// Popup UI for the Pathmarks extension

use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::location::{self, CurrentLocation};
use crate::navigate;
use crate::store;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn openOptionsPage() -> Result<(), JsValue>;
}

#[derive(Clone, PartialEq)]
enum ViewState {
    Loading,
    Idle,
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| ViewState::Loading);
    let config = use_state(Config::default);
    let current = use_state(|| None::<CurrentLocation>);

    // Load the config and resolve the current tab once, on mount
    {
        let state = state.clone();
        let config = config.clone();
        let current = current.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                config.set(store::load().await);

                if let Some(tab) = navigate::active_tab().await {
                    current.set(location::resolve(tab.url.as_deref()));
                }

                state.set(ViewState::Idle);
            });
            || ()
        });
    }

    // Open a pathmark next to the current tab. Dropped silently when the
    // current location or the active tab is gone by click time.
    let on_open_path = {
        let current = current.clone();

        Callback::from(move |path: String| {
            let Some(base) = (*current).clone() else {
                return;
            };

            spawn_local(async move {
                let Some(tab) = navigate::active_tab().await else {
                    return;
                };
                navigate::go_to_path(&base.origin, &path, tab.index).await;
            });
        })
    };

    // Open the current path on an alternate environment's origin
    let on_open_env = {
        let current = current.clone();

        Callback::from(move |origin: String| {
            let Some(base) = (*current).clone() else {
                return;
            };

            spawn_local(async move {
                let Some(tab) = navigate::active_tab().await else {
                    return;
                };
                navigate::go_to_env(&origin, &base.path, tab.index).await;
            });
        })
    };

    let on_edit = Callback::from(move |_| {
        spawn_local(async move {
            let _ = openOptionsPage().await;
        });
    });

    let nav_available = current.is_some();

    html! {
        <div class="padding-20">
            <div class="popup-header">
                <h1 class="popup-title">{"Pathmarks"}</h1>
                <Button onclick={on_edit.clone()} variant={ButtonVariant::Secondary}>
                    {"Edit"}
                </Button>
            </div>

            {match &*state {
                ViewState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                ViewState::Idle => html! {
                    <>
                        if !nav_available {
                            <Alert r#type={AlertType::Info} title={"Navigation is unavailable on this page"} inline={true}>
                            </Alert>
                        }

                        if config.pathmarks.is_empty() {
                            <div class="empty-state">
                                <p>{"No pathmarks found."}</p>
                                <Button onclick={on_edit.clone()} variant={ButtonVariant::Secondary}>
                                    {"Add some"}
                                </Button>
                            </div>
                        } else {
                            <ul class="pathmark-list">
                                {for config.pathmarks.iter().map(|mark| {
                                    let on_open_path = on_open_path.clone();
                                    let path = mark.path.clone();

                                    html! {
                                        <li class="pathmark-item">
                                            <button
                                                class="pathmark-button"
                                                disabled={!nav_available}
                                                onclick={Callback::from(move |_| on_open_path.emit(path.clone()))}
                                            >
                                                <div class="pathmark-title">{&mark.title}</div>
                                                <div class="pathmark-path">{&mark.path}</div>
                                            </button>
                                        </li>
                                    }
                                })}
                            </ul>
                        }

                        // Environment switching needs a resolvable location
                        if nav_available && !config.envs.is_empty() {
                            <div class="env-row">
                                {for config.envs.iter().map(|env| {
                                    let on_open_env = on_open_env.clone();
                                    let origin = env.origin.clone();

                                    html! {
                                        <Button
                                            onclick={Callback::from(move |_| on_open_env.emit(origin.clone()))}
                                            variant={ButtonVariant::Secondary}
                                        >
                                            {env.label.clone()}
                                        </Button>
                                    }
                                })}
                            </div>
                        }
                    </>
                },
            }}
        </div>
    }
}
