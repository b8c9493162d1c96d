//! Confirm and alert dialogs over the native `<dialog>` element. The
//! element stays mounted; the `open` prop drives `showModal`/`close`.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDialogElement, MouseEvent};
use yew::prelude::*;

use super::app::SettingsContext;

#[derive(PartialEq, Clone, Copy)]
pub enum DialogMode {
    /// Cancel plus confirm button; backdrop click and Escape cancel.
    Confirm,
    /// Single OK button; Escape dismisses, backdrop click does not.
    Alert,
}

#[derive(PartialEq, Clone, Copy, Default)]
pub enum DialogVariant {
    Danger,
    #[default]
    Warning,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ModalDialogProps {
    pub open: bool,
    pub title: String,
    pub message: String,
    pub mode: DialogMode,
    #[prop_or_default]
    pub confirm_label: Option<String>,
    #[prop_or_default]
    pub variant: DialogVariant,
    #[prop_or_default]
    pub on_confirm: Callback<()>,
    #[prop_or_default]
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(ModalDialog)]
pub fn modal_dialog(props: &ModalDialogProps) -> Html {
    let settings = use_context::<SettingsContext>().expect("settings context");
    let dialog_ref = use_node_ref();

    {
        let dialog_ref = dialog_ref.clone();
        use_effect_with(props.open, move |open| {
            if let Some(dialog) = dialog_ref.cast::<HtmlDialogElement>() {
                if *open {
                    let _ = dialog.show_modal();
                } else {
                    dialog.close();
                }
            }
            || ()
        });
    }

    // Escape lands here as the dialog's native cancel event. Both modes
    // treat it as a dismissal.
    let dismiss = match props.mode {
        DialogMode::Confirm => props.on_cancel.clone(),
        DialogMode::Alert => props.on_close.clone(),
    };
    let on_native_cancel = {
        let dismiss = dismiss.clone();
        Callback::from(move |e: Event| {
            e.prevent_default();
            dismiss.emit(());
        })
    };

    let on_dialog_click = {
        let dialog_ref = dialog_ref.clone();
        let on_cancel = props.on_cancel.clone();
        let closes_on_backdrop = matches!(props.mode, DialogMode::Confirm);
        Callback::from(move |e: MouseEvent| {
            if !closes_on_backdrop {
                return;
            }
            let dialog = dialog_ref.cast::<HtmlDialogElement>();
            let target = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if let (Some(dialog), Some(target)) = (dialog, target) {
                if dialog.is_same_node(Some(&target)) {
                    on_cancel.emit(());
                }
            }
        })
    };

    let confirm_class = match props.variant {
        DialogVariant::Danger => "btn-danger-fill",
        DialogVariant::Warning => "btn-primary",
    };

    let buttons = match props.mode {
        DialogMode::Confirm => {
            let cancel_click = {
                let cb = props.on_cancel.clone();
                Callback::from(move |_: MouseEvent| cb.emit(()))
            };
            let confirm_click = {
                let cb = props.on_confirm.clone();
                Callback::from(move |_: MouseEvent| cb.emit(()))
            };
            let confirm_label = props
                .confirm_label
                .clone()
                .unwrap_or_else(|| settings.text.ok.to_string());
            html! {
                <>
                    <button class="btn" onclick={cancel_click}>{ settings.text.cancel }</button>
                    <button class={classes!("btn", confirm_class)} onclick={confirm_click}>
                        { confirm_label }
                    </button>
                </>
            }
        }
        DialogMode::Alert => {
            let close_click = {
                let cb = props.on_close.clone();
                Callback::from(move |_: MouseEvent| cb.emit(()))
            };
            html! {
                <button class={classes!("btn", confirm_class)} onclick={close_click}>
                    { settings.text.ok }
                </button>
            }
        }
    };

    html! {
        <dialog
            ref={dialog_ref}
            class="modal-dialog"
            style="border:none; border-radius:12px; padding:0; max-width:420px; width:calc(100vw - 48px);"
            oncancel={on_native_cancel}
            onclick={on_dialog_click}
        >
            <div style="padding:20px 24px; display:flex; flex-direction:column; gap:12px;">
                <h3 style="margin:0; font-size:17px;">{ &props.title }</h3>
                <p style="margin:0; line-height:1.5;">{ &props.message }</p>
                <div style="display:flex; justify-content:flex-end; gap:8px; margin-top:4px;">
                    { buttons }
                </div>
            </div>
        </dialog>
    }
}
