// web_app/components/common.rs - Reusable UI components
//
// Small, composable building blocks shared by the pages.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Inline error line shown under a form
#[component]
pub fn InlineError(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <p class="text-red-500 text-sm" role="alert">{error}</p>
    }
}

pub const BUTTON_CLASS: &str = "w-full px-4 py-2 bg-gray-900 text-white rounded-md hover:bg-gray-800 \
                                transition-colors disabled:opacity-50 disabled:cursor-not-allowed \
                                font-medium shadow-sm";

pub const OUTLINE_BUTTON_CLASS: &str = "w-full px-4 py-2 bg-white text-gray-700 rounded-md border \
                                        border-gray-300 hover:bg-gray-50 transition-colors \
                                        disabled:opacity-50 disabled:cursor-not-allowed font-medium";

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Use the outline style instead of the filled one
    #[prop(default = false)]
    outline: bool,
) -> impl IntoView {
    let class = if outline { OUTLINE_BUTTON_CLASS } else { BUTTON_CLASS };

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=class
        >
            {children()}
        </button>
    }
}

/// Card with a header and a body
#[component]
pub fn Card(
    children: Children,
    /// Card heading
    title: &'static str,
    /// Optional line under the heading
    #[prop(optional)]
    description: Option<&'static str>,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("bg-white rounded-lg border shadow-sm flex flex-col {}", class)>
            <div class="p-6 pb-2">
                <h3 class="text-xl font-semibold">{title}</h3>
                {description.map(|d| view! { <p class="text-sm text-gray-500 mt-1">{d}</p> })}
            </div>
            <div class="p-6 pt-2 flex-1 flex flex-col">
                {children()}
            </div>
        </div>
    }
}
