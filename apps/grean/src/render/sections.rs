//! Content sections below the hero.

use grean_core::{Section, SectionContent};
use maud::{Markup, html};

/// Render one content section in full.
pub fn section(content: &SectionContent) -> Markup {
    match content.section {
        Section::Footer => footer(content),
        _ => content_section(content),
    }
}

/// Placeholder for a section that is fetched after first paint.
///
/// The browser's native lazy loading fetches `/sections/{slug}` once the frame
/// nears the viewport. The pulsing box sits underneath and sizes the slot; the
/// loaded document covers it.
pub fn placeholder(section: Section) -> Markup {
    let class = section.placeholder_class().unwrap_or_default();
    html! {
        div id=(format!("{}-placeholder", section.anchor())) class="lazy-slot" {
            div class=(class) aria-hidden="true" {}
            iframe class="lazy-section"
                src=(format!("/sections/{}", section.slug()))
                loading="lazy"
                title=(SectionContent::for_section(section).heading) {}
        }
    }
}

fn content_section(content: &SectionContent) -> Markup {
    let class = if content.seamless {
        "relative py-20 px-6 bg-black text-white"
    } else {
        "relative py-20 px-6 bg-black text-white border-t border-[#3DD56D]/10"
    };

    html! {
        section id=(content.section.anchor()) class=(class) {
            div class="max-w-6xl mx-auto" {
                h2 class="text-3xl md:text-4xl font-bold mb-4 text-[#3DD56D]" { (content.heading) }
                @if !content.lead.is_empty() {
                    p class="text-lg text-gray-300 mb-10 max-w-3xl" { (content.lead) }
                }
                @if !content.items.is_empty() {
                    div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6" {
                        @for item in &content.items {
                            div class="rounded-xl border border-[#3DD56D]/20 bg-slate-900/40 p-6" {
                                h3 class="text-xl font-semibold mb-2" { (item.title) }
                                p class="text-gray-400" { (item.body) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn footer(content: &SectionContent) -> Markup {
    html! {
        footer id=(content.section.anchor()) class="py-10 px-6 bg-black text-gray-400 border-t border-[#3DD56D]/10" {
            div class="max-w-6xl mx-auto flex flex-col md:flex-row justify-between gap-4" {
                span class="font-bold text-white" { (content.heading) }
                span { (content.lead) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_points_at_fragment_route() {
        let html = placeholder(Section::Products).into_string();
        assert!(html.contains("<iframe"));
        assert!(html.contains(r#"src="/sections/products""#));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains("min-h-[300px]"));
    }

    #[test]
    fn footer_placeholder_is_short() {
        let html = placeholder(Section::Footer).into_string();
        assert!(html.contains("h-24"));
    }

    #[test]
    fn section_lists_items() {
        let html = section(&SectionContent::for_section(Section::Solutions)).into_string();
        assert!(html.contains(r#"id="green-solutions""#));
        assert!(html.contains("Mini-grids"));
    }

    #[test]
    fn footer_is_footer_element() {
        let html = section(&SectionContent::for_section(Section::Footer)).into_string();
        assert!(html.starts_with("<footer"));
    }
}
