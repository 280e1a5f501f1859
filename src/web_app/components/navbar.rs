// web_app/components/navbar.rs - Top navigation bar
//
// Highlights the link matching the current route.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::web_app::model::nav_link_class;

/// Navigation links as (href, label)
pub const NAV_LINKS: [(&str, &str); 2] = [("/", "首页"), ("/smart-expiry", "SmartExpiry")];

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="bg-gray-100 border-b">
            <div class="container mx-auto px-4">
                <div class="flex h-16 items-center justify-between">
                    <div class="flex items-center">
                        <a href="/" class="text-xl font-bold">"Fridge Manager"</a>
                    </div>
                    <div class="flex space-x-4">
                        {NAV_LINKS.into_iter().map(move |(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class=move || nav_link_class(&pathname.get(), href)
                                >
                                    {label}
                                </a>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
