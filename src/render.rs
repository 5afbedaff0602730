// Pure markup and inline-style builders.
//
// The wasm layer mounts these strings and rewrites the style ones per frame;
// nothing in this module touches the DOM, so all of it is host-testable.

use crate::core::constants::{
    DECOR_RING_STEP_DEG, NAV_LINK_LABEL, NAV_LINK_URL, PARTICLE_LABELS, SITE_TITLE,
};
use crate::core::content::{chapter_label, glyph_for_point, ContentSection, PointGlyph};
use glam::Vec2;

// ---------------- per-frame style strings ----------------

pub fn gradient_css(palette: &[&str; 3]) -> String {
    format!(
        "linear-gradient(45deg, {}, {}, {})",
        palette[0], palette[1], palette[2]
    )
}

/// CSS border-radius shorthand from 8 percentages (horizontal / vertical).
pub fn border_radius_css(radii: &[f32; 8]) -> String {
    format!(
        "{:.1}% {:.1}% {:.1}% {:.1}% / {:.1}% {:.1}% {:.1}% {:.1}%",
        radii[0], radii[1], radii[2], radii[3], radii[4], radii[5], radii[6], radii[7]
    )
}

/// Outer blob node: pointer-follow translation plus scroll-driven scale and
/// rotation.
pub fn blob_style(scale: f32, rotation_deg: f32, offset: Vec2) -> String {
    format!(
        "transform: translate({:.1}px, {:.1}px) rotate({:.1}deg) scale({:.3})",
        offset.x, offset.y, rotation_deg, scale
    )
}

/// Blob surface: the morphing gradient body.
pub fn blob_surface_style(radii: &[f32; 8], palette: &[&str; 3]) -> String {
    format!(
        "background: {}; border-radius: {}; filter: blur(2px)",
        gradient_css(palette),
        border_radius_css(radii)
    )
}

pub fn ripple_style(scale: f32, opacity: f32) -> String {
    format!("transform: scale({:.3}); opacity: {:.3}", scale, opacity)
}

pub fn echo_style(scale: f32, opacity: f32) -> String {
    format!("transform: scale({:.3}); opacity: {:.3}", scale, opacity)
}

pub fn particle_style(offset: Vec2, factor: (f32, f32)) -> String {
    format!(
        "transform: translate({:.1}px, {:.1}px)",
        offset.x * factor.0,
        offset.y * factor.1
    )
}

// ---------------- static page markup ----------------

pub fn nav_markup() -> String {
    format!(
        "<nav class=\"site-nav\">\
         <h1 class=\"site-title\">{}</h1>\
         <a class=\"nav-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\
         </nav>",
        SITE_TITLE, NAV_LINK_URL, NAV_LINK_LABEL
    )
}

/// Fixed-position blob stage. The frame loop looks the animated nodes up by
/// id, so the ids here and in `page` must stay in sync.
pub fn blob_markup() -> String {
    let mut particles = String::new();
    for (i, label) in PARTICLE_LABELS.iter().enumerate() {
        particles.push_str(&format!(
            "<div id=\"particle-{}\" class=\"blob-particle blob-particle-{}\">{}</div>",
            i, i, label
        ));
    }
    format!(
        "<div class=\"blob-stage\">\
         <div id=\"blob-echo\" class=\"blob-echo\" style=\"opacity: 0\"></div>\
         <div id=\"blob\" class=\"blob\">\
         <div id=\"blob-surface\" class=\"blob-surface\"></div>\
         <div id=\"blob-ripple\" class=\"blob-ripple\" style=\"opacity: 0\"></div>\
         <div class=\"blob-particles\">{}</div>\
         </div>\
         </div>",
        particles
    )
}

pub fn glyph_markup(glyph: PointGlyph) -> &'static str {
    match glyph {
        PointGlyph::Dot => "<div class=\"glyph glyph-dot\"><span class=\"dot\"></span></div>",
        PointGlyph::DiagonalLine => {
            "<div class=\"glyph glyph-line\"><span class=\"line\"></span></div>"
        }
        PointGlyph::StackedPlanes => {
            "<div class=\"glyph glyph-planes\"><span class=\"plane\"></span><span class=\"plane plane-offset\"></span></div>"
        }
        PointGlyph::PositiveForm => {
            "<div class=\"glyph glyph-positive\"><span class=\"disc\"></span></div>"
        }
        PointGlyph::NegativeForm => {
            "<div class=\"glyph glyph-negative\"><span class=\"frame\"><span class=\"hole\"></span></span></div>"
        }
        PointGlyph::FrontFaces => {
            "<div class=\"glyph glyph-faces\"><span class=\"face\"></span><span class=\"face face-fill\"></span></div>"
        }
        PointGlyph::CrossSection => {
            "<div class=\"glyph glyph-section\"><span class=\"circle\"><span class=\"half\"></span></span></div>"
        }
        PointGlyph::InvertedHalves => {
            "<div class=\"glyph glyph-invert\"><span class=\"half half-ink\"></span><span class=\"half\"></span></div>"
        }
        PointGlyph::TrimFrame => {
            "<div class=\"glyph glyph-trim\"><span class=\"dotted\"></span><span class=\"crop\"></span></div>"
        }
        PointGlyph::DotCluster => {
            "<div class=\"glyph glyph-cluster\"><span class=\"pip\"></span><span class=\"pip\"></span><span class=\"pip\"></span><span class=\"pip\"></span></div>"
        }
        PointGlyph::OutlinedDiamond => {
            "<div class=\"glyph glyph-diamond\"><span class=\"square square-rotated\"></span><span class=\"square\"></span></div>"
        }
        PointGlyph::ScaleContrast => {
            "<div class=\"glyph glyph-scale\"><span class=\"small\"></span><span class=\"large\"></span></div>"
        }
        PointGlyph::TypeSpecimen => "<div class=\"glyph glyph-type\">A</div>",
        PointGlyph::Rhetoric => {
            "<div class=\"glyph glyph-rhetoric\"><span class=\"base\"></span><span class=\"accent\"></span></div>"
        }
        PointGlyph::GestaltArcs => {
            "<div class=\"glyph glyph-gestalt\"><span class=\"arc arc-left\"></span><span class=\"arc arc-right\"></span></div>"
        }
        PointGlyph::ObservingEye => {
            "<div class=\"glyph glyph-eye\"><span class=\"lid\"><span class=\"pupil\"></span></span></div>"
        }
        PointGlyph::ScatteredBlocks => {
            "<div class=\"glyph glyph-scatter\"><span class=\"block\"></span><span class=\"block block-ghost\"></span></div>"
        }
        PointGlyph::AssembledFrame => {
            "<div class=\"glyph glyph-assemble\"><span class=\"inner\"></span><span class=\"outer\"></span></div>"
        }
        PointGlyph::ValueGem => {
            "<div class=\"glyph glyph-value\"><span class=\"gem\"></span></div>"
        }
    }
}

pub fn point_card_markup(point: &str) -> String {
    let glyph = glyph_for_point(point).map(glyph_markup).unwrap_or("");
    format!(
        "<div class=\"point-card\">{}<p class=\"point-text\">{}</p></div>",
        glyph, point
    )
}

pub fn section_markup(data: &ContentSection, index: usize) -> String {
    let class = if data.is_dark {
        "chapter chapter-dark"
    } else {
        "chapter"
    };

    let subtitle = data
        .subtitle
        .map(|s| format!("<p class=\"chapter-subtitle\">{}</p>", s))
        .unwrap_or_default();

    let points = if data.points.is_empty() {
        String::new()
    } else {
        let cards: String = data.points.iter().map(|p| point_card_markup(p)).collect();
        format!("<div class=\"point-grid\">{}</div>", cards)
    };

    format!(
        "<section class=\"{}\" id=\"section-{}\">\
         <div class=\"chapter-copy\">\
         <span class=\"chapter-label\">CHAPTER {}</span>\
         <h2 class=\"chapter-title\">{}</h2>\
         {}\
         <p class=\"chapter-description\">{}</p>\
         {}\
         </div>\
         <div class=\"chapter-ring\" style=\"transform: rotate({:.0}deg)\"></div>\
         </section>",
        class,
        index,
        chapter_label(index),
        data.title,
        subtitle,
        data.description,
        points,
        index as f32 * DECOR_RING_STEP_DEG
    )
}

pub fn footer_markup() -> String {
    format!(
        "<footer class=\"site-footer\">\
         <h2 class=\"footer-title\">WELCOME TO<br/>{}</h2>\
         <p class=\"footer-copy\">디자인은 단순한 감각이 아닙니다.<br/>\
         세상을 해체하고 재구성하는 당신만의 논리입니다.</p>\
         <button class=\"footer-cta\">START YOUR JOURNEY</button>\
         </footer>",
        SITE_TITLE
    )
}
