use crate::core::content::SECTIONS;
use crate::dom;
use crate::render;
use web_sys as web;

/// Handles to the animated nodes, resolved once after mounting.
pub struct BuiltPage {
    pub blob: web::Element,
    pub blob_surface: web::Element,
    pub blob_ripple: web::Element,
    pub blob_echo: web::Element,
    pub particles: Vec<web::Element>,
    pub section_count: usize,
}

/// Compose the whole page into `#app-root` and resolve the nodes the frame
/// loop animates. The host page supplies the root element and stylesheet.
pub fn build(document: &web::Document) -> anyhow::Result<BuiltPage> {
    let root = dom::element_by_id(document, "app-root")?;

    let mut html = String::new();
    html.push_str(&render::nav_markup());
    html.push_str(&render::blob_markup());
    html.push_str("<main class=\"chapters\">");
    for (index, section) in SECTIONS.iter().enumerate() {
        html.push_str(&render::section_markup(section, index));
    }
    html.push_str("</main>");
    html.push_str(&render::footer_markup());
    root.set_inner_html(&html);

    let particles = (0..3)
        .map(|i| dom::element_by_id(document, &format!("particle-{}", i)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(BuiltPage {
        blob: dom::element_by_id(document, "blob")?,
        blob_surface: dom::element_by_id(document, "blob-surface")?,
        blob_ripple: dom::element_by_id(document, "blob-ripple")?,
        blob_echo: dom::element_by_id(document, "blob-echo")?,
        particles,
        section_count: SECTIONS.len(),
    })
}
