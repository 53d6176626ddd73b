//! Kolam Upload Component
//!
//! Drop zone plus native file picker. Only image files are accepted; the
//! chosen file is shown with its size and an "Analyze Kolam" action.

use std::path::Path;

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use kolam_core::{KolamImage, Notice, UploadSelection};
use kolam_ui::{Button, ButtonVariant, SectionCard};
use rfd::FileDialog;

use crate::context::{use_controller, SharedController};

/// Extensions offered by the file picker
const PICKER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// Label of the analyze button.
pub fn analyze_label(is_processing: bool) -> &'static str {
    if is_processing {
        "Processing..."
    } else {
        "Analyze Kolam"
    }
}

/// Base name of a dropped or picked path.
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
        .to_string()
}

fn choose(mut selection: Signal<UploadSelection>, controller: &SharedController, image: KolamImage) {
    let mime = image.mime_type.clone();
    if selection.write().select(image).is_err() {
        tracing::debug!("Rejected {} selection", mime);
        controller.notify(Notice::error("Invalid file type", "Please upload an image file"));
    }
}

#[component]
pub fn KolamUpload(
    /// Called with the selected image when "Analyze Kolam" is pressed
    on_upload: EventHandler<KolamImage>,
    #[props(default = false)] is_processing: bool,
) -> Element {
    let controller = use_controller();
    let mut selection = use_signal(UploadSelection::default);

    let drop_controller = controller.clone();
    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        selection.write().set_drag_active(false);
        let controller = drop_controller.clone();
        async move {
            let Some(files) = evt.files() else {
                return;
            };
            let Some(name) = files.files().into_iter().next() else {
                return;
            };
            match files.read_file(&name).await {
                Some(bytes) => choose(selection, &controller, KolamImage::from_bytes(display_name(&name), bytes)),
                None => {
                    tracing::warn!("Could not read dropped file {}", name);
                    controller.notify(Notice::error("Could not open file", name));
                }
            }
        }
    };

    let pick_controller = controller.clone();
    let handle_pick = move |_| {
        let controller = pick_controller.clone();
        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", PICKER_EXTENSIONS)
                    .set_title("Select Kolam Image")
                    .pick_file()
                    .map(|path| KolamImage::from_path(&path))
            })
            .await;

            match picked {
                Ok(Some(Ok(image))) => choose(selection, &controller, image),
                Ok(Some(Err(e))) => {
                    controller.notify(Notice::error("Could not open file", e.to_string()));
                }
                // User cancelled
                Ok(None) => {}
                Err(e) => tracing::error!("File picker error: {:?}", e),
            }
        });
    };

    let handle_analyze = move |_| {
        if let Some(image) = selection.read().selected().cloned() {
            on_upload.call(image);
        }
    };

    let drag_active = selection.read().drag_active();
    let zone_class = if drag_active {
        "upload-zone kolam-pattern dragover"
    } else {
        "upload-zone kolam-pattern"
    };
    let selected = selection.read().selected().cloned();

    rsx! {
        SectionCard {
            title: "Upload Your Kolam Image".to_string(),
            icon: "\u{2B06}".to_string(),
            div {
                class: "{zone_class}",
                ondragenter: move |evt| {
                    evt.prevent_default();
                    selection.write().set_drag_active(true);
                },
                ondragover: move |evt| {
                    evt.prevent_default();
                    if !selection.peek().drag_active() {
                        selection.write().set_drag_active(true);
                    }
                },
                ondragleave: move |_| selection.write().set_drag_active(false),
                ondrop: handle_drop,

                if let Some(image) = selected {
                    div { class: "upload-zone__selected",
                        img {
                            class: "upload-zone__preview",
                            src: "{image.data_uri()}",
                            alt: "{image.file_name}",
                        }
                        p { class: "upload-zone__name", "{image.file_name}" }
                        p { class: "text-muted", "{image.size_mb()}" }
                        Button {
                            variant: ButtonVariant::Primary,
                            busy: is_processing,
                            onclick: handle_analyze,
                            "{analyze_label(is_processing)}"
                        }
                    }
                } else {
                    div { class: "upload-zone__empty",
                        div { class: "upload-zone__icon neon-pulse", "\u{2B06}" }
                        h3 { "Upload Your Kolam Image" }
                        p { class: "text-muted",
                            "Drag and drop your kolam image here, or click to browse"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: handle_pick,
                            "Choose File"
                        }
                    }
                }
            }
        }
    }
}
