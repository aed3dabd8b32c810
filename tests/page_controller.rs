//! End-to-end behaviour of the page controller over the in-memory document

use std::rc::Rc;
use std::time::Duration;

use onedigram_site::PageController;
use onedigram_site::dom::memory::{MemoryBrowser, MemoryDom, NodeId};
use onedigram_site::dom::{Dom, IntersectionEntry, Rect};
use onedigram_site::domain::config::SiteConfig;
use onedigram_site::features::contact::ValidationError;
use onedigram_site::helpers::ManualScheduler;
use onedigram_site::i18n::Language;
use onedigram_site::utils::preference_store::MemoryStore;

type Page = PageController<MemoryDom, MemoryBrowser, Rc<MemoryStore>, ManualScheduler>;

struct Site {
    page: Rc<Page>,
    store: Rc<MemoryStore>,
    scheduler: ManualScheduler,
    header: NodeId,
    menu: NodeId,
    toggle: NodeId,
    links: Vec<NodeId>,
    heading: NodeId,
    question: NodeId,
    card: NodeId,
    hero: NodeId,
    name: NodeId,
    hero_text: NodeId,
}

fn site(store: MemoryStore) -> Site {
    onedigram_site::logging::init();

    let dom = MemoryDom::new();
    let root = dom.root();
    dom.set_document_title("Onedigram - أنظمة ذكية بنمو بسيط");

    let header = dom.append(root, "header").with_id("header").offset(0.0, 80.0).node();
    dom.append(header, "button").with_id("langToggle");
    let toggle = dom.append(header, "button").with_id("mobileToggle").node();
    let menu = dom.append(header, "ul").with_id("nav-menu").node();
    let links = ["home", "services", "contact"]
        .iter()
        .map(|id| {
            dom.append(menu, "a")
                .class("nav-link")
                .attr("href", &format!("#{id}"))
                .node()
        })
        .collect();

    let home = dom.append(root, "section").with_id("home").offset(0.0, 600.0).node();
    let heading = dom
        .append(home, "h1")
        .text("أنظمة ذكية بنمو بسيط")
        .attr("data-en", "Smart Systems. Simple Growth.")
        .node();
    let hero_text = dom.append(home, "p").text("مرحبا").node();
    let hero = dom
        .append(home, "img")
        .attr("loading", "lazy")
        .attr("data-src", "/img/hero.webp")
        .node();

    let services = dom.append(root, "section").with_id("services").offset(600.0, 900.0).node();
    let card = dom.append(services, "div").class("service-card").rect(1200.0, 1500.0).node();
    dom.append(card, "h3").text("Automation");

    let faq = dom.append(root, "section").with_id("faq").offset(1500.0, 500.0).node();
    let item = dom.append(faq, "div").class("faq-item").node();
    let question = dom.append(item, "button").class("faq-question").node();

    let contact = dom.append(root, "section").with_id("contact").offset(2000.0, 700.0).node();
    let form = dom.append(contact, "form").with_id("contactForm").node();
    let name = dom.append(form, "input").with_id("name").node();
    dom.append(form, "input").with_id("email");
    dom.append(form, "textarea").with_id("message");

    let store = Rc::new(store);
    let scheduler = ManualScheduler::new();
    let page = PageController::init(
        dom,
        MemoryBrowser::new(800.0),
        Rc::clone(&store),
        scheduler.clone(),
        SiteConfig::default(),
    );

    Site {
        page,
        store,
        scheduler,
        header,
        menu,
        toggle,
        links,
        heading,
        question,
        card,
        hero,
        name,
        hero_text,
    }
}

fn scroll_to(site: &Site, y: f64) {
    site.page.context().browser().set_scroll_y(y);
    site.page.on_scroll();
}

#[test]
fn test_fresh_visit_stays_arabic() {
    let site = site(MemoryStore::new());
    let dom = site.page.context().dom();

    assert_eq!(site.page.language(), Language::Ar);
    assert_eq!(dom.text(&site.heading), "أنظمة ذكية بنمو بسيط");
    assert!(site.store.get("language").is_none());
}

#[test]
fn test_saved_english_is_restored_at_startup() {
    let site = site(MemoryStore::with_entry("language", "en"));
    let dom = site.page.context().dom();
    let html = dom.document_element().expect("html element");

    assert_eq!(site.page.language(), Language::En);
    assert_eq!(dom.text(&site.heading), "Smart Systems. Simple Growth.");
    assert_eq!(dom.attribute(&html, "dir").as_deref(), Some("ltr"));
    assert_eq!(dom.title(), "Onedigram - Smart Systems. Simple Growth.");
}

#[test]
fn test_toggle_twice_restores_page_and_persists() {
    let site = site(MemoryStore::new());
    let dom = site.page.context().dom();

    assert_eq!(site.page.on_language_toggle(), Language::En);
    assert_eq!(site.store.get("language").as_deref(), Some("en"));
    // Elements without translations are untouched
    assert_eq!(dom.text(&site.hero_text), "مرحبا");

    assert_eq!(site.page.on_language_toggle(), Language::Ar);
    assert_eq!(site.store.get("language").as_deref(), Some("ar"));
    assert_eq!(dom.text(&site.heading), "أنظمة ذكية بنمو بسيط");
    assert_eq!(dom.title(), "Onedigram - أنظمة ذكية بنمو بسيط");
}

#[test]
fn test_menu_closes_on_link_and_outside_click() {
    let site = site(MemoryStore::new());
    let dom = site.page.context().dom();

    site.page.on_menu_toggle();
    assert!(dom.has_class(&site.menu, "active"));
    assert!(dom.has_class(&site.toggle, "active"));

    site.page.on_nav_link_click();
    assert!(!dom.has_class(&site.menu, "active"));

    site.page.on_menu_toggle();
    site.page.on_document_click(&site.links[0]);
    assert!(dom.has_class(&site.menu, "active"));

    site.page.on_document_click(&site.heading);
    assert!(!dom.has_class(&site.menu, "active"));
    assert!(!dom.has_class(&site.toggle, "active"));
}

#[test]
fn test_scroll_shadow_is_immediate() {
    let site = site(MemoryStore::new());

    scroll_to(&site, 150.0);
    assert_eq!(
        site.page.context().dom().style(site.header, "box-shadow").as_deref(),
        Some("0 4px 20px rgba(11, 37, 69, 0.15)")
    );
}

#[test]
fn test_highlight_waits_for_scrolling_to_settle() {
    let site = site(MemoryStore::new());
    let dom = site.page.context().dom();
    let services_link = &site.links[1];

    for y in [100.0, 300.0, 550.0] {
        scroll_to(&site, y);
        site.scheduler.advance(Duration::from_millis(60));
    }
    assert!(!dom.has_class(services_link, "active"));

    site.scheduler.advance(Duration::from_millis(40));
    assert!(dom.has_class(services_link, "active"));
    assert!(!dom.has_class(&site.links[0], "active"));

    // Past every section: the last highlight stays
    scroll_to(&site, 5000.0);
    site.scheduler.advance(Duration::from_millis(100));
    assert!(dom.has_class(services_link, "active"));
}

#[test]
fn test_cards_reveal_after_scroll_debounce() {
    let site = site(MemoryStore::new());
    let dom = site.page.context().dom();
    // Below the fold at startup
    assert_eq!(dom.style(site.card, "opacity"), None);

    dom.set_rect(site.card, Rect::new(400.0, 700.0));
    scroll_to(&site, 800.0);
    site.scheduler.advance(Duration::from_millis(49));
    assert_eq!(dom.style(site.card, "opacity"), None);

    site.scheduler.advance(Duration::from_millis(1));
    assert_eq!(dom.style(site.card, "opacity").as_deref(), Some("1"));
    assert_eq!(dom.style(site.card, "transform").as_deref(), Some("translateY(0)"));
}

#[test]
fn test_anchor_click_scrolls_below_header() {
    let site = site(MemoryStore::new());
    let ctx = site.page.context();
    let faq = ctx.dom().element_by_id("faq").expect("faq section");
    ctx.dom().set_rect(faq, Rect::new(900.0, 1400.0));

    assert!(site.page.on_anchor_click("#faq"));
    assert!(!site.page.on_anchor_click("#"));
    assert_eq!(ctx.browser().scroll_requests(), vec![900.0 - 80.0]);
}

#[test]
fn test_faq_question_toggles_item() {
    let site = site(MemoryStore::new());
    let dom = site.page.context().dom();
    let item = dom.parent(&site.question).expect("faq item");

    site.page.on_faq_question_click(&site.question);
    assert!(dom.has_class(&item, "active"));
    site.page.on_faq_question_click(&site.question);
    assert!(!dom.has_class(&item, "active"));
}

#[test]
fn test_contact_submission_flow() {
    let site = site(MemoryStore::new());
    let ctx = site.page.context();

    assert_eq!(site.page.on_contact_submit(), Some(Err(ValidationError::MissingFields)));
    assert!(ctx.browser().navigations().is_empty());

    let form = site.page.contact_form().expect("contact form bound");
    let email = ctx.dom().element_by_id("email").expect("email field");
    let message = ctx.dom().element_by_id("message").expect("message field");
    ctx.dom().set_value(site.name, "Sara");
    ctx.dom().set_value(email, "sara@example.com");
    ctx.dom().set_value(message, "Hello");

    let link = site
        .page
        .on_contact_submit()
        .expect("form present")
        .expect("valid input");
    assert!(link.starts_with("mailto:hello@onedigram.com?subject="));
    assert_eq!(ctx.browser().navigations(), vec![link]);
    assert_eq!(ctx.dom().field_value(&site.name), "");
    assert!(ctx.dom().contains(form.form(), &email));
}

#[test]
fn test_lazy_image_loads_once() {
    let site = site(MemoryStore::new());
    let dom = site.page.context().dom();
    assert_eq!(site.page.lazy_images().watched(), vec![site.hero]);

    let done = site.page.on_lazy_images_intersect(&[IntersectionEntry::new(site.hero, true)]);
    assert_eq!(done, vec![site.hero]);
    assert_eq!(dom.attribute(&site.hero, "src").as_deref(), Some("/img/hero.webp"));
    assert!(site.page.lazy_images().watched().is_empty());
}

#[test]
fn test_load_marks_body() {
    let site = site(MemoryStore::new());
    let dom = site.page.context().dom();
    let body = dom.body().expect("body");

    site.page.on_load();
    assert!(dom.has_class(&body, "loaded"));

    // Logging only; must not disturb the page
    site.page.on_case_card_click(&site.card);
    assert!(!dom.has_class(&site.card, "active"));
}

#[test]
fn test_page_without_optional_sections() {
    onedigram_site::logging::init();
    let page: Rc<Page> = PageController::init(
        MemoryDom::new(),
        MemoryBrowser::default(),
        Rc::new(MemoryStore::new()),
        ManualScheduler::new(),
        SiteConfig::default(),
    );

    assert!(page.navigation().is_none());
    assert!(page.on_contact_submit().is_none());
    page.on_menu_toggle();
    page.on_scroll();
    assert_eq!(page.on_language_toggle(), Language::En);
}

#[test]
fn test_page_starts_in_authored_language_whatever_the_config() {
    onedigram_site::logging::init();
    let dom = MemoryDom::new();
    let heading = dom
        .append(dom.root(), "h1")
        .text("عربي")
        .attr("data-en", "English")
        .node();
    let config = SiteConfig::from_json(r#"{"language": {"default": "en", "storage_key": "lang"}}"#)
        .expect("valid config");
    let store = Rc::new(MemoryStore::new());
    let page: Rc<Page> = PageController::init(
        dom,
        MemoryBrowser::default(),
        Rc::clone(&store),
        ManualScheduler::new(),
        config,
    );
    let dom = page.context().dom();

    assert_eq!(page.language(), Language::Ar);
    assert_eq!(dom.text(&heading), "عربي");

    // The first toggle always changes what the visitor sees
    assert_eq!(page.on_language_toggle(), Language::En);
    assert_eq!(dom.text(&heading), "English");
    assert_eq!(store.get("lang").as_deref(), Some("en"));
}
