//! # Render Module
//!
//! Server-side HTML for the landing page, built with `maud`.
//!
//! Everything here is a pure function of a [`HeroView`] (plus static content),
//! so the same view always renders the same markup. Animations are declared as
//! CSS keyframes in the page head; no script is emitted.

mod hero;
mod sections;

pub use hero::hero_section;
pub use sections::{placeholder, section};

use grean_core::{DecorConfig, HeroContent, HeroView, ScrollProgress, Section, SectionContent};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Keyframes and utility classes referenced by the rendered markup.
const GLOBAL_STYLE: &str = r#"
html, body { background: #000000; color: #ffffff; margin: 0; }
html { scrollbar-width: none; -ms-overflow-style: none; }
html::-webkit-scrollbar { display: none; }
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes fadeOut { from { opacity: 1; } to { opacity: 0; visibility: hidden; } }
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.5; } }
@keyframes float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-10px); } }
@keyframes logo-spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
@keyframes energy-line { 0% { stroke-dashoffset: 100; opacity: 0; } 50% { opacity: 1; } 100% { stroke-dashoffset: 0; opacity: 0; } }
@keyframes energy-pulse { 0%, 100% { opacity: 0.2; transform: scale(1); } 50% { opacity: 0.8; transform: scale(1.5); } }
.animate-pulse { animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite; }
.logo-spin { animation: logo-spin 8s linear infinite; }
.drop-shadow-glow { filter: drop-shadow(0 0 10px rgba(61, 213, 109, 0.6)); }
.energy-line { stroke-dasharray: 100; }
.energy-point { transform-origin: center; transform-box: fill-box; }
.typing-text { display: inline-block; }
.typing-text.revealed { animation: fadeIn 800ms forwards; }
#scroll-progress { position: fixed; top: 0; left: 0; height: 3px; z-index: 100; background: linear-gradient(to right, #3DD56D, #2bb757); }
@keyframes scroll-progress { from { width: 0%; } to { width: 100%; } }
@supports (animation-timeline: scroll()) {
  #scroll-progress { animation: scroll-progress linear both; animation-timeline: scroll(root block); }
}
.lazy-slot { position: relative; }
.lazy-section { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; }
"#;

/// How the five below-the-fold sections are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionMode {
    /// Full markup in the page.
    #[default]
    Inline,
    /// Placeholders pointing at `/sections/{slug}`.
    Deferred,
}

/// Standalone document for one lazily loaded section.
pub fn section_document(content: &SectionContent) -> Markup {
    layout(content.heading, section(content))
}

/// Page document around `body`.
pub fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(GLOBAL_STYLE)) }
            }
            body {
                (body)
            }
        }
    }
}

/// Thin bar across the top of the viewport.
///
/// `progress` is the server-side starting width. Browsers with scroll-driven
/// animations then track the document scroll through the `scroll-progress`
/// keyframes; the animated width overrides the inline one.
pub fn scroll_indicator(progress: ScrollProgress) -> Markup {
    html! {
        div id="scroll-progress"
            data-permille=(progress.permille)
            style=(format!("width: {}", progress.css_width())) {}
    }
}

fn navigation(content: &HeroContent) -> Markup {
    html! {
        header class="fixed top-0 left-0 right-0 z-50 flex items-center justify-between px-6 py-4" {
            a href=(format!("#{}", Section::Intro.anchor())) class="flex items-center gap-2" {
                img src=(content.logo_src) alt=(format!("{} Logo", content.brand)) width="40" height="40";
                span class="font-bold text-white" { (content.brand) }
            }
            nav {
                ul class="flex gap-6 text-sm text-gray-200" {
                    @for section in Section::ALL.iter().filter(|s| !matches!(s, Section::Intro | Section::Footer)) {
                        li {
                            a href=(format!("#{}", section.anchor())) { (SectionContent::for_section(*section).heading) }
                        }
                    }
                }
            }
        }
    }
}

/// The complete landing page for one hero frame.
pub fn page(
    view: &HeroView,
    content: &HeroContent,
    decor: &DecorConfig,
    mode: SectionMode,
) -> Markup {
    let body = html! {
        (scroll_indicator(ScrollProgress::TOP))
        (navigation(content))
        main class="relative" {
            @for section in Section::ALL {
                @if section == Section::Intro {
                    (hero_section(view, decor))
                } @else if section.is_lazy() && mode == SectionMode::Deferred {
                    (placeholder(section))
                } @else {
                    (self::section(&SectionContent::for_section(section)))
                }
            }
        }
    };
    layout(&content.brand, body)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use grean_core::Sequencer;

    fn settled_view() -> HeroView {
        let mut seq = Sequencer::default();
        seq.start(false);
        seq.external_load();
        while seq.step().is_some() {}
        HeroView::from_snapshot(&seq.snapshot(), &HeroContent::default(), seq.timing())
    }

    #[test]
    fn page_sections_in_order() {
        let html = page(
            &settled_view(),
            &HeroContent::default(),
            &DecorConfig::standard(),
            SectionMode::Inline,
        )
        .into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|s| {
                html.find(&format!(r#"id="{}""#, s.anchor()))
                    .unwrap_or(usize::MAX)
            })
            .collect();
        assert!(positions.iter().all(|p| *p != usize::MAX));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn deferred_mode_emits_placeholders() {
        let html = page(
            &settled_view(),
            &HeroContent::default(),
            &DecorConfig::standard(),
            SectionMode::Deferred,
        )
        .into_string();

        for section in Section::lazy() {
            assert!(html.contains(&format!(r#"src="/sections/{}""#, section.slug())));
        }
        assert_eq!(html.matches(r#"loading="lazy""#).count(), Section::lazy().count());
        assert!(html.contains(r#"id="green-intro""#));
        assert!(!html.contains(r#"id="green-solutions""#));
    }

    #[test]
    fn scroll_indicator_width() {
        let html = scroll_indicator(ScrollProgress { permille: 375 }).into_string();
        assert!(html.contains("width: 37.5%"));
        assert!(html.contains(r#"data-permille="375""#));
    }

    #[test]
    fn scroll_bar_follows_document_scroll() {
        let html = layout("t", scroll_indicator(ScrollProgress::TOP)).into_string();
        assert!(html.contains("animation-timeline: scroll(root block)"));
        assert!(html.contains("animation: scroll-progress linear both"));
        assert!(html.contains("width: 0%"));
    }

    #[test]
    fn section_document_is_a_full_page() {
        let html = section_document(&SectionContent::for_section(Section::About)).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="green-about""#));
        assert!(html.contains("@keyframes"));
    }

    #[test]
    fn layout_declares_keyframes() {
        let html = layout("t", html! {}).into_string();
        for name in [
            "fadeIn",
            "fadeOut",
            "energy-line",
            "energy-pulse",
            "logo-spin",
            "scroll-progress",
        ] {
            assert!(html.contains(&format!("@keyframes {}", name)));
        }
    }
}
