//! Upload area: click to browse or drop a PDF

use gloo::console;
use leptos::prelude::*;
use perfect_cv_common::{FileLike, UploadFlow};
use web_sys::DragEvent;

use crate::file::BrowserFile;

type Flow = RwSignal<UploadFlow<BrowserFile>, LocalStorage>;

fn report_rejection(result: Result<(), perfect_cv_common::ValidationError>) {
    if let Err(e) = result {
        console::warn!(format!("file rejected: {}", e));
    }
}

#[component]
pub fn UploadArea(flow: Flow) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            flow.update(|f| report_rejection(f.select_file(BrowserFile::new(file))));
        }
        // same file can be picked again after a rejection
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        match ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
            Some(file) => flow.update(|f| report_rejection(f.drop_file(BrowserFile::new(file)))),
            None => flow.update(|f| f.drag_leave()),
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !flow.with_untracked(|f| f.is_dragging()) {
            flow.update(|f| f.drag_enter());
        }
    };

    let on_dragleave = move |_: DragEvent| {
        flow.update(|f| f.drag_leave());
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <input
            type="file"
            accept=".pdf,application/pdf"
            style="display: none"
            node_ref=input_ref
            on:change=on_change
        />
        <div
            class=move || {
                if flow.with(|f| f.is_dragging()) { "upload-area dragover" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            {move || match flow.with(|f| f.selected().map(|file| file.file_name())) {
                Some(name) => view! {
                    <div class="upload-icon">"📄"</div>
                    <p>{name}</p>
                    <p class="text-muted">"Click or drop another PDF to replace"</p>
                }.into_any(),
                None => view! {
                    <div class="upload-icon">"📤"</div>
                    <p>"Drag & drop your resume here or click to browse"</p>
                    <p class="text-muted">"PDF only, max 20MB"</p>
                }.into_any(),
            }}
        </div>
    }
}
