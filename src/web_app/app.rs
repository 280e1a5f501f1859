// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up meta tags, the navigation bar and routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::Navbar;
use crate::web_app::pages::{HomePage, SmartExpiryPage};

pub const APP_TITLE: &str = "Fridge Manager";
pub const APP_DESCRIPTION: &str = "智能管理您的冰箱物品，追踪过期时间，避免食品浪费";
pub const STYLESHEET_PATH: &str = "/pkg/fridge_manager.css";

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Navigation bar shared by every page
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content=APP_DESCRIPTION />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href=STYLESHEET_PATH />

        <Router>
            <Navbar />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/smart-expiry") view=SmartExpiryPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"页面不存在"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-gray-900 text-white rounded-md hover:bg-gray-800 transition-colors"
                >
                    "返回首页"
                </a>
            </div>
        </div>
    }
}
