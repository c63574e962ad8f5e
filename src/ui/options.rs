/// Options page: raw-JSON editor over the configuration document

use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::config;
use crate::store;

// Import JS bridge functions
#[wasm_bindgen(module = "/options.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn copyToClipboard(text: &str) -> Result<(), JsValue>;
}

#[derive(Clone, PartialEq)]
enum Status {
    Saved,
    Copied,
    Failed(String),
}

#[function_component(Options)]
pub fn options() -> Html {
    let text = use_state(String::new);
    let is_valid = use_state(|| true);
    let status = use_state(|| None::<Status>);
    let loading = use_state(|| true);

    // Load the stored document text on mount
    {
        let text = text.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                text.set(store::load_text().await);
                loading.set(false);
            });
            || ()
        });
    }

    // Live validation on every keystroke; typing is never blocked
    let on_input = {
        let text = text.clone();
        let is_valid = is_valid.clone();
        let status = status.clone();

        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                let value = area.value();
                is_valid.set(config::check_document(&value).is_ok());
                text.set(value);
                status.set(None);
            }
        })
    };

    // Commit: parse, persist atomically, redisplay the canonical form
    let on_save = {
        let text = text.clone();
        let is_valid = is_valid.clone();
        let status = status.clone();

        Callback::from(move |_| {
            let raw = (*text).clone();
            let text = text.clone();
            let is_valid = is_valid.clone();
            let status = status.clone();

            spawn_local(async move {
                match store::save(&raw).await {
                    Ok(canonical) => {
                        text.set(canonical);
                        is_valid.set(true);
                        status.set(Some(Status::Saved));
                    }
                    Err(e) => {
                        status.set(Some(Status::Failed(e.to_string())));
                    }
                }
            });
        })
    };

    // Copy the working text as-is, saved or not
    let on_copy = {
        let text = text.clone();
        let status = status.clone();

        Callback::from(move |_| {
            let value = (*text).clone();
            let status = status.clone();

            spawn_local(async move {
                match copyToClipboard(&value).await {
                    Ok(()) => status.set(Some(Status::Copied)),
                    Err(e) => log::warn!("Clipboard write failed: {:?}", e),
                }
            });
        })
    };

    if *loading {
        return html! {
            <div class="loading-text-center">
                <Spinner />
                <p class="loading-text">{"Loading configuration..."}</p>
            </div>
        };
    }

    let editor_class = if *is_valid {
        "config-editor"
    } else {
        "config-editor config-editor-invalid"
    };

    html! {
        <div class="options-container">
            <h1 class="options-title">{"Pathmarks Configuration"}</h1>

            <div class="helper-box">
                <p>
                    {"Define shortcuts to useful paths on the current site. Each entry needs a "}
                    <code>{"title"}</code>
                    {" and a "}
                    <code>{"path"}</code>
                    {". Optional "}
                    <code>{"envs"}</code>
                    {" entries ("}
                    <code>{"label"}</code>
                    {" plus "}
                    <code>{"origin"}</code>
                    {") switch the current path between deployments of the same site."}
                </p>
            </div>

            <div class="editor-wrapper">
                <textarea
                    class={editor_class}
                    value={(*text).clone()}
                    oninput={on_input}
                />
                if !*is_valid {
                    <div class="editor-invalid-marker">{"Invalid JSON"}</div>
                }
                <button class="copy-button" onclick={on_copy} title="Copy configuration to clipboard">
                    {"Copy"}
                </button>
            </div>

            <div class="options-footer">
                <Button onclick={on_save} disabled={!*is_valid} variant={ButtonVariant::Primary}>
                    {"Save"}
                </Button>

                {match &*status {
                    Some(Status::Saved) => html! { <span class="status-ok">{"Saved"}</span> },
                    Some(Status::Copied) => html! { <span class="status-ok">{"Copied"}</span> },
                    Some(Status::Failed(err)) => html! {
                        <Alert r#type={AlertType::Danger} title={"Save failed"} inline={true}>
                            {err.clone()}
                        </Alert>
                    },
                    None => html! {},
                }}
            </div>
        </div>
    }
}
