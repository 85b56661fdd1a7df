use dioxus::prelude::*;

use crate::context::use_archive;

/// Bottom-centre notice; the context clears it after a few seconds.
#[component]
pub fn ToastNotice() -> Element {
    let archive = use_archive();

    let toast = archive.toast.read().clone();
    match toast {
        Some(toast) => rsx! {
            div { class: "toast-message", "{toast.message}" }
        },
        None => rsx! {},
    }
}
