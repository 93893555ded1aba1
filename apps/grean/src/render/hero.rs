//! Hero section markup.
//!
//! Regions that are `None` in the [`HeroView`] are not emitted at all.

use grean_core::{
    Percent, Section,
    decor::{
        CIRCUIT_PATTERN, DecorConfig, EnergyLine, EnergyPoint, GRID_PATTERN, HEX_PATTERN,
        WAVE_PATTERN,
    },
    view::{ContactBadge, HeroText, HeroView, LoadingOverlay, OverlayState},
};
use maud::{Markup, html};

/// Render the intro section for `view`.
pub fn hero_section(view: &HeroView, decor: &DecorConfig) -> Markup {
    let main_class = if view.main_layer.interactive {
        "relative z-20 transition-opacity duration-700 opacity-100"
    } else {
        "relative z-20 transition-opacity duration-700 opacity-0 pointer-events-none"
    };

    html! {
        section id=(Section::Intro.anchor())
            class="relative h-screen w-full overflow-hidden mb-0 pb-10"
            style="background: #000000; transition: background 0.5s ease-in-out; position: relative; z-index: 1" {

            @if let Some(overlay) = &view.overlay {
                (loading_overlay(overlay, &decor.lines))
            }

            div id="hero-main" class=(main_class) {
                div id="hero-visualization"
                    style=(format!("position: absolute; inset: 0; z-index: 10; transition: opacity 0.5s ease-in-out; opacity: {}", view.visualization.opacity.css_opacity())) {
                    iframe src=(view.visualization.src)
                        title=(view.visualization.title)
                        frameborder="0"
                        width="100%"
                        height="100%"
                        style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: none; background: transparent; z-index: 2" {}
                }

                (ambient_layer("ambient-background", "absolute inset-0 z-5", view.ambient.background, "green-background-animation"))
                (ambient_layer("ambient-blobs", "absolute inset-0 z-1", view.ambient.blobs, "animated-blob-background"))

                div id="energy-overlay" class="absolute inset-0"
                    style=(format!("z-index: 20; pointer-events: none; mix-blend-mode: overlay; transition: opacity 1.2s; opacity: {}", view.ambient.energy_overlay.css_opacity())) {
                    (energy_pattern(&decor.points))
                }

                @if let Some(badge) = &view.contact_badge {
                    (contact_badge(badge))
                }

                @if let Some(text) = &view.hero_text {
                    (hero_text(text))
                }
            }
        }
    }
}

fn ambient_layer(id: &str, class: &str, opacity: Percent, inner_class: &str) -> Markup {
    html! {
        div id=(id) class=(class)
            style=(format!("opacity: {}; transition: opacity 0.5s ease-in-out", opacity.css_opacity())) {
            div class=(inner_class) {}
        }
    }
}

fn loading_overlay(overlay: &LoadingOverlay, lines: &[EnergyLine]) -> Markup {
    let (animation, pointer_events) = match overlay.state {
        OverlayState::Opaque => (String::new(), "auto"),
        OverlayState::FadingOut { duration_ms } => (
            format!("; animation: fadeOut {}ms forwards", duration_ms),
            "none",
        ),
    };
    let progress = overlay.progress.value();

    html! {
        div id="loading-overlay"
            class="absolute inset-0 z-10 bg-black/80 flex flex-col items-center justify-center overflow-hidden"
            data-state=(if overlay.intercepts_input() { "opaque" } else { "fading" })
            style=(format!("pointer-events: {}{}", pointer_events, animation)) {

            div class="absolute inset-0 z-0 opacity-40" {
                svg class="w-full h-full" xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" {
                    defs {
                        pattern id=(GRID_PATTERN.id) width=(GRID_PATTERN.width) height=(GRID_PATTERN.height) patternUnits="userSpaceOnUse" {
                            path d="M 40 0 L 0 0 0 40" fill="none" stroke="#3DD56D" stroke-width="0.8" opacity="0.5" {}
                        }
                        pattern id=(HEX_PATTERN.id) width=(HEX_PATTERN.width) height=(HEX_PATTERN.height) patternUnits="userSpaceOnUse"
                            patternTransform=(format!("rotate({})", HEX_PATTERN.rotation_deg)) {
                            polygon points="30,0 55,15 55,45 30,60 5,45 5,15" fill="none" stroke="#3DD56D" stroke-width="1" opacity="0.4" {}
                        }
                        radialGradient id="glow" cx="50%" cy="50%" r="50%" fx="50%" fy="50%" {
                            stop offset="0%" stop-color="#3DD56D" stop-opacity="0.4" {}
                            stop offset="100%" stop-color="#000000" stop-opacity="0" {}
                        }
                    }
                    rect x="0" y="0" width="100%" height="100%" fill=(format!("url(#{})", GRID_PATTERN.id)) {}
                    rect x="0" y="0" width="100%" height="100%" fill=(format!("url(#{})", HEX_PATTERN.id)) {}
                    circle cx="50%" cy="50%" r="40%" fill="url(#glow)" {}
                    g class="energy-lines" {
                        @for ray in lines {
                            line class="energy-line" x1="50%" y1="50%" x2=(ray.x2) y2=(ray.y2)
                                stroke="#3DD56D" stroke-width="1"
                                style=(format!("animation: energy-line {}ms linear {}ms infinite", ray.duration_ms, ray.delay_ms)) {}
                        }
                    }
                }
            }

            div class="relative z-10 flex flex-col items-center justify-center mb-8" {
                div class="w-24 h-24 mb-4 flex items-center justify-center" {
                    img src=(overlay.logo_src) alt=(format!("{} Logo", overlay.brand))
                        width="96" height="96" class="object-contain logo-spin";
                }
                h1 class="text-4xl md:text-5xl font-extrabold text-center drop-shadow-glow mb-2" { (overlay.brand) }
                p class="text-lg text-[#3DD56D] font-medium text-center mb-2" { (overlay.message) }
            }

            div class="relative z-10 flex flex-col items-center justify-center" {
                div class="w-48 h-2 bg-slate-800 rounded-full overflow-hidden mb-4" {
                    div id="loading-bar" class="h-full bg-gradient-to-r from-[#3DD56D] to-[#2bb757]"
                        style=(format!("width: {}%; transition: width 0.3s", progress)) {}
                }
                span id="loading-label" class="text-[#3DD56D] text-sm font-medium" {
                    "Loading... " (progress) "%"
                }
            }
        }
    }
}

fn energy_pattern(points: &[EnergyPoint]) -> Markup {
    html! {
        svg class="w-full h-full" xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMidYMid slice"
            style="filter: drop-shadow(0 0 15px rgba(61, 213, 109, 0.3))" {
            defs {
                pattern id=(CIRCUIT_PATTERN.id) x="0" y="0" width=(CIRCUIT_PATTERN.width) height=(CIRCUIT_PATTERN.height)
                    patternUnits="userSpaceOnUse" patternTransform=(format!("rotate({})", CIRCUIT_PATTERN.rotation_deg)) {
                    path d="M5,25 L20,25 M30,25 L45,25 M25,5 L25,20 M25,30 L25,45"
                        stroke="#3DD56D" stroke-width="1.2" fill="none" stroke-opacity="0.8" {}
                    circle cx="25" cy="25" r="2" fill="#3DD56D" fill-opacity="0.6" {}
                    circle cx="25" cy="25" r="1" fill="#3DD56D" fill-opacity="0.8" {}
                }
                pattern id=(WAVE_PATTERN.id) x="0" y="0" width=(WAVE_PATTERN.width) height=(WAVE_PATTERN.height)
                    patternUnits="userSpaceOnUse" {
                    path d="M0,25 Q25,10 50,25 T100,25" stroke="#3DD56D" stroke-width="1" fill="none"
                        stroke-opacity="0.6" stroke-dasharray="2,4" {}
                }
                radialGradient id="green-energy-point" cx="50%" cy="50%" r="50%" {
                    stop offset="0%" stop-color="#3DD56D" stop-opacity="0.7" {}
                    stop offset="100%" stop-color="#3DD56D" stop-opacity="0" {}
                }
            }
            rect width="100%" height="100%" fill=(format!("url(#{})", CIRCUIT_PATTERN.id)) {}
            rect width="100%" height="100%" fill=(format!("url(#{})", WAVE_PATTERN.id)) opacity="0.5" {}
            g class="energy-points" {
                @for point in points {
                    circle class="energy-point" cx=(format!("{}%", point.cx_percent)) cy=(format!("{}%", point.cy_percent))
                        r=(point.radius) fill="url(#green-energy-point)"
                        style=(format!("animation: energy-pulse {}ms ease-in-out {}ms infinite", point.duration_ms, point.delay_ms)) {}
                }
            }
        }
    }
}

fn contact_badge(badge: &ContactBadge) -> Markup {
    html! {
        div id="contact-badge"
            style=(format!("position: absolute; bottom: 10px; right: 10px; display: flex; align-items: center; gap: 10px; z-index: 40; background-color: rgba(255, 255, 255, 0.9); border-radius: 8px; padding: 8px 12px; backdrop-filter: blur(4px); box-shadow: 0 2px 10px rgba(0,0,0,0.1); border: 1px solid rgba(255, 255, 255, 0.2); pointer-events: none; opacity: 0; animation: fadeIn {}ms forwards", badge.fade_in_ms)) {
            div style="display: flex; align-items: center; gap: 6px" {
                span style="color: #2bb757; font-size: 14px; font-weight: 600; pointer-events: auto" {
                    (badge.phone)
                }
            }
            div style="width: 2px; height: 20px; background: rgba(43, 183, 87, 0.2); margin: 0 4px" {}
            img src=(badge.qr_src) alt="GREAN WORLD QR" style="width: 40px; height: 40px; object-fit: contain";
        }
    }
}

fn hero_text(text: &HeroText) -> Markup {
    let title_class = if text.title_revealed {
        "typing-text revealed"
    } else {
        "typing-text"
    };

    html! {
        div id="hero-text"
            class="relative z-30 min-h-screen flex flex-col items-center justify-center px-4 sm:px-6 lg:px-8 pointer-events-none"
            style=(format!("opacity: 0; animation: fadeIn {}ms forwards", text.fade_in_ms)) {
            div class="text-center max-w-4xl mx-auto" {
                div class="inline-flex items-center rounded-full px-4 py-1.5 text-sm font-medium mb-6 bg-[#3DD56D]/20 text-[#3DD56D] border border-[#3DD56D]/30 shadow-lg backdrop-blur-sm" {
                    span class="mr-2 opacity-70" { "✦" }
                    (text.eyebrow)
                    span class="ml-2 opacity-70" { "✦" }
                }
                h1 class="text-5xl md:text-6xl lg:text-7xl font-extrabold mb-10 leading-tight text-gray-200" {
                    span id="hero-title" class=(title_class) data-revealed=(if text.title_revealed { "true" } else { "false" }) { (text.title) }
                }
                div class="text-xl md:text-2xl text-gray-200 mb-12 max-w-2xl mx-auto" {
                    span class="typing-text font-medium tracking-wide text-[#0B5E2B]" { (text.tagline) }
                }
                div class="flex flex-col sm:flex-row gap-6 justify-center pointer-events-auto" {
                    @for (i, action) in text.actions.iter().enumerate() {
                        a href=(action.href)
                            class=(if i == 0 { "btn btn-primary rounded-full px-10 py-7 font-bold" } else { "btn btn-outline rounded-full px-10 py-7 font-bold" }) {
                            (action.label)
                        }
                    }
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
