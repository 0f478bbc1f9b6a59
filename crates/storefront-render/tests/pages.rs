use std::time::Duration;

use storefront_catalog::{CatalogView, CategoryFilter, MockCatalog};
use storefront_render::{
    visible_width, AboutView, ContactView, HomeView, NoticeKind, OutputMode, PageView,
    ProductDetailView, Renderer, ThemeDetailView, ThemeListView, DEFAULT_WIDTH,
};
use storefront_theme::{registry, MemoryStorage, ThemeId, ThemeStore};

async fn loaded_catalog() -> CatalogView {
    let source = MockCatalog::new().with_latency(Duration::ZERO);
    let mut view = CatalogView::new();
    view.load(&source, None).await;
    view
}

async fn all_pages() -> Vec<PageView> {
    let catalog = loaded_catalog().await;
    let product = catalog.products()[0].clone();
    vec![
        PageView::Home(HomeView::from(&catalog)),
        PageView::About(AboutView::default()),
        PageView::Contact(ContactView::default()),
        PageView::Product(ProductDetailView::from(&product)),
        PageView::Themes(ThemeListView::new(registry::records(), ThemeId::Minimalist)),
        PageView::Theme(ThemeDetailView::new(
            registry::lookup(ThemeId::ColorfulGrid),
            false,
        )),
    ]
}

#[tokio::test]
async fn home_page_shows_catalog_sections() {
    let catalog = loaded_catalog().await;
    let renderer = Renderer::new(
        registry::lookup(ThemeId::Minimalist),
        OutputMode::Text,
        DEFAULT_WIDTH,
    )
    .unwrap();

    let page = renderer.render(&PageView::Home(HomeView::from(&catalog))).unwrap();

    assert!(page.contains("Discover Amazing Products"));
    assert!(page.contains("8 Products"));
    assert!(page.contains("4 Categories"));
    assert!(page.contains("Featured Products"));
    assert!(page.contains("All Products (8)"));
    assert!(page.contains("electronics (2)"));
    assert!(page.contains("$199.99"));
    assert!(!page.contains('\x1b'));
}

#[tokio::test]
async fn home_page_filtered_to_empty_category() {
    let mut catalog = loaded_catalog().await;
    catalog.set_filter(CategoryFilter::Category("garden".into()));
    let renderer = Renderer::new(
        registry::lookup(ThemeId::Minimalist),
        OutputMode::Text,
        DEFAULT_WIDTH,
    )
    .unwrap();

    let page = renderer.render(&PageView::Home(HomeView::from(&catalog))).unwrap();
    assert!(page.contains("No products found in this category."));
    assert!(page.contains("Featured Products"));
}

#[test]
fn home_page_loading_and_failure_states() {
    let renderer = Renderer::new(
        registry::lookup(ThemeId::Minimalist),
        OutputMode::Text,
        DEFAULT_WIDTH,
    )
    .unwrap();

    let loading = renderer
        .render(&PageView::Home(HomeView::from(&CatalogView::new())))
        .unwrap();
    assert!(loading.contains("Loading products..."));

    let mut failed = CatalogView::new();
    failed.resolve(Err(storefront_catalog::CatalogError::Unavailable(
        "offline".into(),
    )));
    let page = renderer.render(&PageView::Home(HomeView::from(&failed))).unwrap();
    assert!(page.contains("Failed to load products. Please try again later."));
    assert!(page.contains("Try Again"));
    assert!(!page.contains("Featured Products"));
}

#[tokio::test]
async fn every_page_fits_the_width_in_every_theme() {
    for page in all_pages().await {
        for id in ThemeId::ALL {
            let renderer =
                Renderer::new(registry::lookup(id), OutputMode::Text, DEFAULT_WIDTH).unwrap();
            let out = renderer.render(&page).unwrap();
            for line in out.lines() {
                assert!(
                    visible_width(line) <= DEFAULT_WIDTH,
                    "{} / {:?}: line too wide: {:?}",
                    id,
                    page.page(),
                    line
                );
            }
        }
    }
}

#[tokio::test]
async fn sidebar_theme_uses_three_product_columns() {
    let catalog = loaded_catalog().await;
    let view = PageView::Home(HomeView::from(&catalog));

    let count_corners = |id: ThemeId| {
        let renderer = Renderer::new(registry::lookup(id), OutputMode::Text, 140).unwrap();
        let out = renderer.render(&view).unwrap();
        // The widest card row in the product grid.
        out.lines()
            .map(|l| l.matches(['┌', '╭']).count())
            .max()
            .unwrap_or(0)
    };

    assert_eq!(count_corners(ThemeId::Minimalist), 4);
    assert_eq!(count_corners(ThemeId::DarkSidebar), 3);
    assert_eq!(count_corners(ThemeId::ColorfulGrid), 4);
}

#[test]
fn term_debug_keeps_tags_and_term_applies_styles() {
    let view = PageView::About(AboutView::default());

    let debug = Renderer::new(
        registry::lookup(ThemeId::Minimalist),
        OutputMode::TermDebug,
        DEFAULT_WIDTH,
    )
    .unwrap()
    .render(&view)
    .unwrap();
    assert!(debug.contains("[brand]ThemeApp[/brand]"));
    assert!(debug.contains("[nav-active]About[/nav-active]"));

    let styled = Renderer::new(
        registry::lookup(ThemeId::Minimalist),
        OutputMode::Term,
        DEFAULT_WIDTH,
    )
    .unwrap()
    .render(&view)
    .unwrap();
    assert!(styled.contains("\x1b["));
    assert!(!styled.contains("[brand]"));
}

#[test]
fn json_mode_prints_page_context() {
    let renderer = Renderer::new(
        registry::lookup(ThemeId::DarkSidebar),
        OutputMode::Json,
        DEFAULT_WIDTH,
    )
    .unwrap();
    let view = PageView::Contact(
        ContactView::default().with_notice(NoticeKind::Success, "Message sent"),
    );

    let out = renderer.render(&view).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["page"], "contact");
    assert_eq!(json["brand"], "ThemeApp");
    assert_eq!(json["theme"]["id"], "dark-sidebar");
    assert_eq!(json["layout"]["chrome"], "sidebar");
    assert_eq!(json["layout"]["columns"]["products"], 3);
    assert_eq!(json["view"]["notice"]["kind"], "success");
    assert_eq!(json["nav"][2]["active"], true);
}

#[test]
fn renderer_follows_store_changes() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut store = ThemeStore::new(MemoryStorage::new());
    let renderer = Rc::new(RefCell::new(
        Renderer::new(store.record(), OutputMode::Term, DEFAULT_WIDTH).unwrap(),
    ));
    let follower = Rc::clone(&renderer);
    store.subscribe(move |change| follower.borrow_mut().on_theme_change(change));

    let view = PageView::About(AboutView::default());
    let before = renderer.borrow().render(&view).unwrap();

    store.set_theme(ThemeId::ColorfulGrid);
    assert_eq!(renderer.borrow().record().id, ThemeId::ColorfulGrid);

    let after = renderer.borrow().render(&view).unwrap();
    assert_ne!(before, after);
    assert!(after.contains('┼'));
}

#[tokio::test]
async fn catalog_text_with_brackets_is_printed_verbatim() {
    let source = MockCatalog::from_json(
        r#"{"products": [
            {"id": 1, "title": "Bolt [price]M8[/price]", "price": 4.5,
             "description": "Zinc [muted]plated[/muted].", "category": "[hw]",
             "image": "", "rating": {"rate": 4.0, "count": 2}}
        ]}"#,
    )
    .unwrap()
    .with_latency(Duration::ZERO);
    let mut catalog = CatalogView::new();
    catalog.load(&source, None).await;
    let product = catalog.products()[0].clone();

    for mode in [OutputMode::Text, OutputMode::TermDebug, OutputMode::Term] {
        let renderer =
            Renderer::new(registry::lookup(ThemeId::Minimalist), mode, DEFAULT_WIDTH).unwrap();

        let home = renderer.render(&PageView::Home(HomeView::from(&catalog))).unwrap();
        assert!(home.contains("Bolt [price]M8[/price]"), "{:?}", mode);
        assert!(home.contains("[hw] (1)"), "{:?}", mode);

        let detail = renderer
            .render(&PageView::Product(ProductDetailView::from(&product)))
            .unwrap();
        assert!(detail.contains("Zinc [muted]plated[/muted]."), "{:?}", mode);
        assert!(!detail.contains('\u{E000}'));
    }
}
