//! Serializable view data for every page.
//!
//! Templates receive these through the page context; `--output json`
//! prints the same context, so everything a page shows is also
//! available as structured data.

use serde::Serialize;
use storefront_catalog::{
    CatalogState, CatalogView, CategoryCount, Product, EMPTY_CATEGORY_MESSAGE,
};
use storefront_theme::{variables, LayoutKind, ThemeId, ThemeRecord};

/// Brand shown in the header and sidebar.
pub const BRAND: &str = "ThemeApp";

/// Label of the retry hint shown when loading fails.
pub const RETRY_LABEL: &str = "Try Again";

/// Pages the storefront can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    About,
    Contact,
    Product,
    Themes,
    Theme,
}

impl Page {
    /// Pages reachable from the navigation, in menu order.
    pub const NAV: [Page; 3] = [Page::Home, Page::About, Page::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Contact => "Contact",
            Page::Product => "Product",
            Page::Themes => "Themes",
            Page::Theme => "Theme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub active: bool,
}

/// Navigation entries with `current` highlighted. Pages outside the menu
/// highlight nothing.
pub fn nav_items(current: Page) -> Vec<NavItem> {
    Page::NAV
        .iter()
        .map(|page| NavItem {
            label: page.label(),
            active: *page == current,
        })
        .collect()
}

/// What the theme selector shows for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSummary {
    pub id: ThemeId,
    pub name: &'static str,
    pub tagline: &'static str,
    pub layout: LayoutKind,
    pub active: bool,
}

impl ThemeSummary {
    pub fn new(record: &ThemeRecord, active: bool) -> Self {
        Self {
            id: record.id,
            name: record.name,
            tagline: record.tagline,
            layout: record.layout.kind,
            active,
        }
    }
}

/// A product as a card shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardView {
    #[serde(flatten)]
    pub product: Product,
    /// Price formatted as USD.
    pub display_price: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            product: product.clone(),
            display_price: product.display_price(),
        }
    }
}

/// The catalog page in each of its load states.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum HomeView {
    Loading { message: &'static str },
    Failed { message: String, retry: &'static str },
    Ready(HomeContent),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeContent {
    pub headline: &'static str,
    pub intro: &'static str,
    pub product_count: usize,
    pub category_count: usize,
    pub featured: Vec<ProductCardView>,
    pub filters: Vec<CategoryCount>,
    pub products: Vec<ProductCardView>,
    pub empty_message: Option<&'static str>,
}

impl From<&CatalogView> for HomeView {
    fn from(view: &CatalogView) -> Self {
        match view.state() {
            CatalogState::Loading => HomeView::Loading {
                message: storefront_catalog::LOADING_MESSAGE,
            },
            CatalogState::Failed { message } => HomeView::Failed {
                message: message.clone(),
                retry: RETRY_LABEL,
            },
            CatalogState::Ready(catalog) => HomeView::Ready(HomeContent {
                headline: "Discover Amazing Products",
                intro: "Explore our curated collection of high-quality products from around \
                        the world. Find exactly what you're looking for with our smart \
                        filtering system.",
                product_count: catalog.products.len(),
                category_count: catalog.categories.len(),
                featured: view.featured().iter().map(ProductCardView::from).collect(),
                filters: view.category_counts(),
                products: view
                    .visible_products()
                    .into_iter()
                    .map(ProductCardView::from)
                    .collect(),
                empty_message: view
                    .is_empty_selection()
                    .then_some(EMPTY_CATEGORY_MESSAGE),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetailView {
    pub product: ProductCardView,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            product: product.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A titled blurb: about-page features and values, FAQ entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blurb {
    pub title: &'static str,
    pub text: &'static str,
}

const fn blurb(title: &'static str, text: &'static str) -> Blurb {
    Blurb { title, text }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutView {
    pub title: &'static str,
    pub intro: &'static str,
    pub stats: Vec<Stat>,
    pub features_title: &'static str,
    pub features_intro: &'static str,
    pub features: Vec<Blurb>,
    pub values_title: &'static str,
    pub values_intro: &'static str,
    pub values: Vec<Blurb>,
}

impl Default for AboutView {
    fn default() -> Self {
        Self {
            title: "About Our Story",
            intro: "We're passionate about bringing you the best products from around the \
                    world. Our journey started with a simple idea: make shopping enjoyable, \
                    reliable, and accessible to everyone.",
            stats: vec![
                Stat { value: "50K+", label: "Happy Customers" },
                Stat { value: "500K+", label: "Products Sold" },
                Stat { value: "50+", label: "Countries Served" },
                Stat { value: "10+", label: "Years Experience" },
            ],
            features_title: "What Makes Us Different",
            features_intro: "We're committed to providing exceptional value through quality \
                             products, outstanding service, and innovative solutions.",
            features: vec![
                blurb(
                    "Our Mission",
                    "To provide high-quality products that enhance your lifestyle and bring \
                     joy to your everyday experiences.",
                ),
                blurb(
                    "Our Team",
                    "A dedicated group of professionals committed to excellence in customer \
                     service and product curation.",
                ),
                blurb(
                    "Quality Assurance",
                    "Every product goes through rigorous testing to ensure it meets our high \
                     standards of quality and reliability.",
                ),
                blurb(
                    "Fast Delivery",
                    "Quick and reliable shipping to get your products to you as fast as \
                     possible, wherever you are.",
                ),
                blurb(
                    "Customer Care",
                    "24/7 customer support to help you with any questions or concerns about \
                     your orders.",
                ),
                blurb(
                    "Global Reach",
                    "Serving customers worldwide with a diverse range of products from \
                     trusted suppliers.",
                ),
            ],
            values_title: "Our Values",
            values_intro: "These core values guide everything we do and shape our commitment \
                           to you.",
            values: vec![
                blurb(
                    "Customer First",
                    "Every decision we make is centered around providing the best experience \
                     for our customers.",
                ),
                blurb(
                    "Excellence",
                    "We strive for excellence in everything we do, from product selection to \
                     customer service.",
                ),
                blurb(
                    "Innovation",
                    "We continuously innovate to bring you the latest and greatest products \
                     and features.",
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    pub title: &'static str,
    pub lines: Vec<&'static str>,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Outcome line shown above the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub title: &'static str,
    pub intro: &'static str,
    pub cards: Vec<ContactCard>,
    pub form_title: &'static str,
    pub form_fields: Vec<&'static str>,
    pub submit_label: &'static str,
    pub notice: Option<Notice>,
    pub faq_title: &'static str,
    pub faqs: Vec<Blurb>,
    pub help: Blurb,
}

impl Default for ContactView {
    fn default() -> Self {
        Self {
            title: "Get In Touch",
            intro: "Have questions? We'd love to hear from you. Send us a message and we'll \
                    respond as soon as possible.",
            cards: vec![
                ContactCard {
                    title: "Email Us",
                    lines: vec!["support@themeapp.com"],
                    note: "Send us an email anytime",
                },
                ContactCard {
                    title: "Call Us",
                    lines: vec!["+1 (555) 123-4567"],
                    note: "Mon-Fri 9AM-6PM EST",
                },
                ContactCard {
                    title: "Visit Us",
                    lines: vec!["123 Business Ave, Suite 100"],
                    note: "New York, NY 10001",
                },
            ],
            form_title: "Send Message",
            form_fields: vec!["Name", "Email", "Subject", "Message"],
            submit_label: "Send Message",
            notice: None,
            faq_title: "Quick Answers",
            faqs: vec![
                blurb(
                    "How long does shipping take?",
                    "Standard shipping typically takes 3-7 business days. Express shipping \
                     is available for faster delivery.",
                ),
                blurb(
                    "What is your return policy?",
                    "We offer a 30-day return policy for most items. Products must be in \
                     original condition.",
                ),
                blurb(
                    "Do you ship internationally?",
                    "Yes, we ship to over 50 countries worldwide. Shipping costs and times \
                     vary by location.",
                ),
            ],
            help: blurb(
                "Need more help?",
                "Check out our comprehensive help center for detailed guides and tutorials.",
            ),
        }
    }
}

impl ContactView {
    pub fn with_notice(mut self, kind: NoticeKind, message: impl Into<String>) -> Self {
        self.notice = Some(Notice {
            kind,
            message: message.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeListView {
    pub themes: Vec<ThemeSummary>,
}

impl ThemeListView {
    pub fn new<'a>(records: impl IntoIterator<Item = &'a ThemeRecord>, active: ThemeId) -> Self {
        Self {
            themes: records
                .into_iter()
                .map(|r| ThemeSummary::new(r, r.id == active))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub value: &'static str,
}

/// Full detail of one theme: its record and the variables it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeDetailView {
    pub summary: ThemeSummary,
    pub record: &'static ThemeRecord,
    pub variables: Vec<Variable>,
}

impl ThemeDetailView {
    pub fn new(record: &'static ThemeRecord, active: bool) -> Self {
        Self {
            summary: ThemeSummary::new(record, active),
            record,
            variables: variables(record)
                .into_iter()
                .map(|(name, value)| Variable { name, value })
                .collect(),
        }
    }
}

/// Any page body, tagged with the template that draws it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageView {
    Home(HomeView),
    About(AboutView),
    Contact(ContactView),
    Product(ProductDetailView),
    Themes(ThemeListView),
    Theme(ThemeDetailView),
}

impl PageView {
    pub fn page(&self) -> Page {
        match self {
            PageView::Home(_) => Page::Home,
            PageView::About(_) => Page::About,
            PageView::Contact(_) => Page::Contact,
            PageView::Product(_) => Page::Product,
            PageView::Themes(_) => Page::Themes,
            PageView::Theme(_) => Page::Theme,
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            PageView::Home(_) => "home.jinja",
            PageView::About(_) => "about.jinja",
            PageView::Contact(_) => "contact.jinja",
            PageView::Product(_) => "product.jinja",
            PageView::Themes(_) => "themes.jinja",
            PageView::Theme(_) => "theme.jinja",
        }
    }
}
