// Component render tests
// Components are instantiated under a reactive Owner and, where they need no
// router context, rendered to HTML on the server side.

use leptos::prelude::*;
use fridge_manager::web_app::components::*;
use fridge_manager::web_app::model::*;

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

fn milk() -> InventoryItem {
    InventoryItem {
        item: "牛奶".to_string(),
        quantity: 2.0,
        unit: "盒".to_string(),
        expire_date: "2024-06-01T00:00:00Z".to_string(),
    }
}

#[test]
fn test_inline_error_renders_message() {
    with_runtime(|| {
        let html = view! { <InlineError error="请输入物品描述".to_string() /> }.to_html();
        assert!(html.contains("请输入物品描述"));
        assert!(html.contains("text-red-500"));
    });
}

#[test]
fn test_item_row_renders_fields() {
    with_runtime(|| {
        let html = view! { <ItemRow item=milk() /> }.to_html();

        assert!(html.contains("牛奶"));
        assert!(html.contains("盒"));
        assert!(html.contains(&format_expire_date("2024-06-01T00:00:00Z")));
        assert!(!html.contains("2024-06-01T00:00:00Z"));
    });
}

#[test]
fn test_item_row_keeps_unparseable_date() {
    with_runtime(|| {
        let item = InventoryItem {
            expire_date: "下周一".to_string(),
            ..milk()
        };
        let html = view! { <ItemRow item=item /> }.to_html();
        assert!(html.contains("下周一"));
    });
}

#[test]
fn test_items_table_empty_placeholder() {
    with_runtime(|| {
        let items = Signal::stored(Vec::<InventoryItem>::new());
        let html = view! { <ItemsTable items=items /> }.to_html();

        assert!(html.contains(EMPTY_TABLE_MESSAGE));
        assert!(!html.contains("<table"));
    });
}

#[test]
fn test_items_table_lists_every_item() {
    with_runtime(|| {
        let eggs = InventoryItem {
            item: "鸡蛋".to_string(),
            quantity: 12.0,
            unit: "个".to_string(),
            expire_date: "2024-06-10 00:00:00".to_string(),
        };
        let items = Signal::stored(vec![milk(), eggs]);
        let html = view! { <ItemsTable items=items /> }.to_html();

        assert!(html.contains("<table"));
        for header in TABLE_HEADERS {
            assert!(html.contains(header), "missing header {}", header);
        }
        assert!(html.contains("牛奶"));
        assert!(html.contains("鸡蛋"));
        assert!(html.contains("2024/06/10 00:00"));
        assert!(!html.contains(EMPTY_TABLE_MESSAGE));
    });
}

#[test]
fn test_card_renders_title_and_description() {
    with_runtime(|| {
        let html = view! {
            <Card title="即将过期" description="过期提醒">
                <p>"body"</p>
            </Card>
        }
        .to_html();

        assert!(html.contains("即将过期"));
        assert!(html.contains("过期提醒"));
        assert!(html.contains("body"));
    });
}
