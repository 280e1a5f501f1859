// web_app/pages/home.rs - Landing page
//
// Static content only. SmartExpiry is the one live feature; the other cards
// announce features that are not built yet.

use leptos::prelude::*;
use crate::web_app::components::{Button, Card};

/// A landing page feature card
pub struct Feature {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub blurb: &'static str,
    /// Link target, `None` while the feature is still coming
    pub href: Option<&'static str>,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        title: "SmartExpiry",
        subtitle: "智能物品管理",
        blurb: "使用自然语言添加物品，系统自动识别物品名称、数量和过期时间，帮助您轻松管理冰箱中的物品。",
        href: Some("/smart-expiry"),
    },
    Feature {
        title: "即将过期",
        subtitle: "过期提醒",
        blurb: "查看即将过期的物品，避免食品浪费，合理安排食材使用顺序。",
        href: None,
    },
    Feature {
        title: "购物清单",
        subtitle: "智能推荐",
        blurb: "根据冰箱中的物品和使用习惯，智能生成购物清单，提醒您需要购买的物品。",
        href: None,
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container mx-auto py-12 px-4">
            <div class="flex flex-col items-center justify-center text-center space-y-8 mb-12">
                <h1 class="text-4xl font-bold tracking-tight">"Fridge Manager"</h1>
                <p class="text-xl text-gray-500 max-w-2xl">
                    "智能管理您的冰箱物品，追踪过期时间，避免食品浪费"
                </p>
            </div>

            <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                {FEATURES.iter().map(|feature| view! {
                    <Card title=feature.title description=feature.subtitle>
                        <p class="text-gray-500 flex-1">{feature.blurb}</p>
                        <div class="pt-6">
                            {match feature.href {
                                Some(href) => view! {
                                    <a href=href class="block w-full">
                                        <Button>"立即使用"</Button>
                                    </a>
                                }.into_any(),
                                None => view! {
                                    <Button outline=true disabled=true>"即将推出"</Button>
                                }.into_any(),
                            }}
                        </div>
                    </Card>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_smart_expiry_is_live() {
        let live: Vec<_> = FEATURES.iter().filter(|f| f.href.is_some()).collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].title, "SmartExpiry");
        assert_eq!(live[0].href, Some("/smart-expiry"));
    }
}
