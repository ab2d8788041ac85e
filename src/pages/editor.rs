//! Rich-text editor page: mark toolbar, text area, styled preview.

use leptos::prelude::*;
use storage::{Block, FontSize, Mark, TextRun};

use crate::components::save_feedback::SaveFeedback;
use crate::state::editor::EditorState;
use crate::util::store::gateway;

/// Editor page. Content is only persisted when "Submit" is pressed; "Try
/// Again" clears both the editor and the stored document.
#[component]
pub fn EditorPage() -> impl IntoView {
    let state = RwSignal::new(EditorState::load(&gateway()));

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let selection = read_selection(&ev);
        state.update(|s| {
            s.replace_text(&text, selection.map(|(_, end)| end));
            if let Some((start, end)) = selection {
                s.set_selection(start, end);
            }
        });
    };
    let sync_selection = move |ev: &leptos::ev::Event| {
        if let Some((start, end)) = read_selection(ev) {
            state.update(|s| s.set_selection(start, end));
        }
    };

    let on_save = move |_| {
        let gateway = gateway();
        state.update(|s| {
            if let Err(e) = s.save(&gateway) {
                log::warn!("editor: save failed: {e}");
            }
        });
    };
    let on_reset = move |_| {
        let gateway = gateway();
        state.update(|s| s.reset(&gateway));
    };

    let status = Signal::derive(move || state.with(|s| s.status.clone()));
    let preview = move || state.with(|s| s.document().blocks().iter().map(render_block).collect::<Vec<_>>());

    view! {
        <div class="editor">
            <div class="editor__toolbar">
                <MarkButton state=state mark=Mark::Bold label="Bold"/>
                <MarkButton state=state mark=Mark::Italic label="Italic"/>
                <MarkButton state=state mark=Mark::Underline label="Underline"/>
                <select
                    class="editor__font-size"
                    prop:value=move || state.with(|s| s.font_size.name())
                    on:change=move |ev| {
                        if let Some(size) = FontSize::from_name(&event_target_value(&ev)) {
                            state.update(|s| s.apply_font_size(size));
                        }
                    }
                >
                    {FontSize::ALL
                        .into_iter()
                        .map(|size| view! { <option value=size.name()>{size.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <textarea
                class="editor__input"
                style:font-size=move || state.with(|s| s.font_size.as_css())
                prop:value=move || state.with(EditorState::plain_text)
                on:input=on_input
                on:select=move |ev| sync_selection(&ev)
                on:keyup=move |ev| sync_selection(&ev)
                on:mouseup=move |ev| sync_selection(&ev)
            ></textarea>

            <div class="editor__preview">{preview}</div>

            <div class="editor__actions">
                <button class="btn btn--primary" on:click=on_save>
                    "Submit"
                </button>
                <button class="btn" on:click=on_reset>
                    "Try Again"
                </button>
            </div>
            <SaveFeedback status=status saved_message="Content saved successfully!"/>
        </div>
    }
}

/// Toolbar toggle for one mark; highlighted while the mark covers the selection.
#[component]
fn MarkButton(state: RwSignal<EditorState>, mark: Mark, label: &'static str) -> impl IntoView {
    view! {
        <button
            class="btn editor__mark"
            class:editor__mark--active=move || state.with(|s| s.is_mark_active(mark))
            // mousedown + preventDefault keeps the text area's selection.
            on:mousedown=move |ev| {
                ev.prevent_default();
                state.update(|s| s.toggle_mark(mark));
            }
        >
            {label}
        </button>
    }
}

fn render_block(block: &Block) -> impl IntoView + use<> {
    let runs = block.children().iter().map(render_run).collect::<Vec<_>>();
    view! { <p class="editor__paragraph">{runs}</p> }
}

fn render_run(run: &TextRun) -> impl IntoView + use<> {
    let text = run.text.clone();
    view! {
        <span
            style:font-weight=if run.bold { "bold" } else { "normal" }
            style:font-style=if run.italic { "italic" } else { "normal" }
            style:text-decoration=if run.underline { "underline" } else { "none" }
            style:font-size=run.font_size.unwrap_or_default().as_css()
        >
            {text}
        </span>
    }
}

/// Selection of the text area that fired `ev`, as char offsets.
fn read_selection(ev: &leptos::ev::Event) -> Option<(usize, usize)> {
    #[cfg(feature = "csr")]
    {
        use crate::state::editor::char_offset_from_utf16;

        let area = event_target::<web_sys::HtmlTextAreaElement>(ev);
        let text = area.value();
        let start = area.selection_start().ok().flatten()?;
        let end = area.selection_end().ok().flatten()?;
        Some((
            char_offset_from_utf16(&text, start as usize),
            char_offset_from_utf16(&text, end as usize),
        ))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}
