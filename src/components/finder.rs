use crate::components::ResultView;
use crate::config::{search_client, StartupConfig};
use crate::error::AppError;
use crate::presenter::present;
use crate::preview::{format_size, photo_data_url};
use crate::session::Session;
use dioxus::prelude::*;
use dioxus_i18n::t;
use findme_client::PhotoIntake;

/// The single page: photo upload, search trigger and results
#[component]
pub fn FinderScreen() -> Element {
    let config = use_context::<StartupConfig>();

    // No client exists without a valid config, so nothing can reach the network
    let client = use_hook(move || {
        search_client(config).inspect_err(|e| log::error!("Search disabled: {}", e))
    });

    let mut session = use_signal(Session::new);
    let mut intake_error = use_signal(|| None::<AppError>);

    let preview = use_memo(move || {
        session.read().photo().map(|photo| {
            (
                photo.filename.clone(),
                format_size(photo.size()),
                photo_data_url(photo),
            )
        })
    });

    let configured = client.is_ok();
    let busy = session.read().is_searching();
    let can_submit = session.read().can_submit(configured);
    let presentation = present(session.read().outcome());

    let start_search = {
        let client = client.clone();
        move |_| {
            let Ok(client) = client.clone() else {
                return;
            };
            let ticket = match session.write().begin_search() {
                Ok(ticket) => ticket,
                Err(e) => {
                    log::debug!("Search not started: {}", e);
                    return;
                }
            };

            spawn(async move {
                let outcome = client.search(&ticket.photo).await;
                session.write().complete(ticket, outcome);
            });
        }
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh;",
            h1 { style: "color: #0066cc; text-align: center; margin: 48px 0 12px 0; font-size: 28px; font-weight: 700;",
                {t!("app-title")}
            }
            p { style: "text-align: center; color: #555; margin-bottom: 24px;", {t!("app-intro")} }

            if let Err(err) = &client {
                div { class: "card", style: "background: #f8d7da; color: #721c24;",
                    p { style: "margin: 0 0 8px 0; font-weight: 600;", {t!("config-error-title")} }
                    p { style: "margin: 0 0 8px 0; font-size: 14px;", "{err.user_message()}" }
                    p { style: "margin: 0; font-size: 13px;", {t!("config-error-disabled")} }
                }
            }

            div { class: "card",
                label { style: "display: block; font-weight: 600; margin-bottom: 8px;",
                    {t!("upload-label")}
                }
                input {
                    r#type: "file",
                    accept: PhotoIntake::accept_filter(),
                    multiple: false,
                    disabled: !configured || busy,
                    onchange: move |evt: FormEvent| async move {
                        let Some(file) = evt.files().into_iter().next() else {
                            return;
                        };
                        let name = file.name();
                        let accepted = match file.read_bytes().await {
                            Ok(bytes) => PhotoIntake::accept(&name, bytes.to_vec()).map_err(AppError::from),
                            Err(e) => Err(AppError::Other(format!("Could not read {}: {}", name, e))),
                        };
                        match accepted {
                            Ok(photo) => {
                                intake_error.set(None);
                                session.write().select_photo(photo);
                            }
                            Err(e) => {
                                log::warn!("Photo rejected: {}", e);
                                session.write().clear_photo();
                                intake_error.set(Some(e));
                            }
                        }
                    },
                }
                p { style: "margin: 4px 0 0 0; font-size: 12px; color: #888;", {t!("upload-hint")} }

                if let Some(err) = intake_error() {
                    div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-top: 12px; border-radius: 8px; font-size: 14px;",
                        "⚠️ {err.user_message()}"
                    }
                }

                if let Some((name, size, url)) = preview() {
                    div { style: "margin-top: 12px; text-align: center;",
                        img {
                            src: "{url}",
                            alt: "{name}",
                            style: "max-width: 100%; max-height: 240px; border-radius: 8px;",
                        }
                        p { style: "margin: 4px 0 0 0; font-size: 13px; color: #555;",
                            {t!("selected-photo", name: name.clone(), size: size)}
                        }
                    }
                }

                button {
                    class: "btn-primary",
                    style: "width: 100%; margin-top: 16px;",
                    disabled: !can_submit,
                    onclick: start_search,
                    {t!("action-search")}
                }

                if busy {
                    div { style: "margin-top: 12px; padding: 12px; background: #fff3cd; border-radius: 4px; text-align: center;",
                        span { class: "spinner", "⏳" }
                        " "
                        {t!("searching")}
                    }
                }
            }

            if let Some(presentation) = presentation {
                ResultView { presentation }
            }

            hr { style: "margin-top: 32px; border: none; border-top: 1px solid #ddd;" }
            p { style: "font-size: 12px; color: #888; text-align: center;", {t!("footer")} }
        }
    }
}
