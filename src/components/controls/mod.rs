//! Control bar above the viewer.
//!
//! Holds the depth/width inputs, the pager and the reload button. Edits are
//! written through [`AppContext`] so they persist across sessions.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::Page;

stylance::import_crate_style!(css, "src/components/controls/controls.module.css");

/// Parse a numeric input; blank or invalid input is ignored.
fn parse_setting(ev: &ev::Event) -> Option<u32> {
    event_target_value(ev).trim().parse().ok()
}

/// Depth/width inputs, pager and reload button.
#[component]
pub fn ControlBar(page: RwSignal<Option<Page>>, at_end: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let depth = Signal::derive(move || ctx.settings.with(|s| s.depth.to_string()));
    let width = Signal::derive(move || ctx.settings.with(|s| s.width.to_string()));

    let on_depth = move |ev: ev::Event| {
        if let Some(value) = parse_setting(&ev) {
            ctx.set_depth(value);
        }
    };
    let on_width = move |ev: ev::Event| {
        if let Some(value) = parse_setting(&ev) {
            ctx.set_width(value);
        }
    };

    view! {
        <header class=css::bar>
            <span class=css::title>{APP_NAME}</span>

            <label class=css::field title="Document depth (0 = unlimited)">
                <span class=css::icon><Icon icon=ic::DEPTH /></span>
                <span class=css::labelText>"Depth"</span>
                <input
                    class=css::input
                    type="number"
                    min="0"
                    prop:value=move || depth.get()
                    on:change=on_depth
                />
            </label>

            <label class=css::field title="Document width (0 = unlimited)">
                <span class=css::icon><Icon icon=ic::WIDTH /></span>
                <span class=css::labelText>"Width"</span>
                <input
                    class=css::input
                    type="number"
                    min="0"
                    prop:value=move || width.get()
                    on:change=on_width
                />
            </label>

            <Pager page=page at_end=at_end />

            <button
                class=css::button
                on:click=move |_| ctx.reload()
                title="Reload mounted devices"
                aria-label="Reload mounted devices"
            >
                <Icon icon=ic::RELOAD />
            </button>
        </header>
    }
}

/// Offset pager over the modules of each document.
///
/// `None` means pagination is off and documents are requested whole.
/// `at_end` disables "next" once the longest document has no more modules;
/// it stays `false` while the page count is unknown.
#[component]
pub fn Pager(page: RwSignal<Option<Page>>, at_end: Signal<bool>) -> impl IntoView {
    let enabled = Signal::derive(move || page.with(Option::is_some));
    let at_start = Signal::derive(move || page.get().is_none_or(|p| p.offset == 0));
    let label = Signal::derive(move || {
        page.get()
            .map(|p| format!("Page {}", p.number()))
            .unwrap_or_default()
    });

    let toggle = move |_: ev::Event| {
        page.update(|p| {
            *p = if p.is_some() {
                None
            } else {
                Some(Page::default())
            };
        });
    };
    let previous = move |_: ev::MouseEvent| {
        page.update(|p| {
            if let Some(current) = p.as_mut() {
                *current = current.previous();
            }
        });
    };
    let next = move |_: ev::MouseEvent| {
        page.update(|p| {
            if let Some(current) = p.as_mut() {
                *current = current.next();
            }
        });
    };

    view! {
        <div class=css::pager>
            <label class=css::field>
                <input type="checkbox" prop:checked=move || enabled.get() on:change=toggle />
                <span class=css::labelText>"Paginate"</span>
            </label>
            <Show when=move || enabled.get()>
                <button
                    class=css::button
                    on:click=previous
                    disabled=move || at_start.get()
                    aria-label="Previous page"
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <span class=css::pageLabel>{move || label.get()}</span>
                <button
                    class=css::button
                    on:click=next
                    disabled=move || at_end.get()
                    aria-label="Next page"
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </Show>
        </div>
    }
}
