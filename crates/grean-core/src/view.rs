//! # Hero View Model
//!
//! Maps a [`RevealSnapshot`] to the tree the hero section must render.
//!
//! Presence is modelled with `Option`: a `None` region does not exist in the
//! output at all, which is different from a region rendered at opacity 0.
//!
//! | Region | Rule |
//! |--------|------|
//! | Loading overlay | present until loading completes, then fading; never under reduced motion |
//! | Visualization | always present, opacity 0 until loading completes |
//! | Ambient layers | 0 until `external_content_loaded && loading_complete` |
//! | Contact badge, hero text | present only when `content_visible && loading_complete` |

use crate::{Percent, RevealSnapshot, RevealTiming};
use serde::{Deserialize, Serialize};

// =============================================================================
// TARGET OPACITIES
// =============================================================================

/// Target opacity of the low-intensity background animation.
pub const AMBIENT_BACKGROUND_OPACITY: Percent = Percent::new(50);

/// Target opacity of the animated blob layer.
pub const AMBIENT_BLOB_OPACITY: Percent = Percent::new(30);

/// Target opacity of the energy pattern overlay.
pub const ENERGY_OVERLAY_OPACITY: Percent = Percent::new(70);

/// Fade-in duration of the contact badge.
pub const CONTACT_FADE_IN_MS: u64 = 500;

/// Fade-in duration of the hero text block.
pub const HERO_TEXT_FADE_IN_MS: u64 = 800;

// =============================================================================
// CONTENT
// =============================================================================

/// Static copy and asset references for the hero section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub visualization_url: String,
    pub visualization_title: String,
    pub logo_src: String,
    pub qr_src: String,
    pub phone: String,
    pub brand: String,
    pub loading_message: String,
    pub eyebrow: String,
    pub tagline: String,
    pub primary_action: CallToAction,
    pub secondary_action: CallToAction,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            visualization_url: "https://my.spline.design/lightningbulb-y5xHAcgz5Y5XycvkpgJ9zO94/"
                .to_string(),
            visualization_title: "Spline Lightning Bulb".to_string(),
            logo_src: "/images/grean-logo-icon.png".to_string(),
            qr_src: "/images/qr-greanworld.png".to_string(),
            phone: "(+251) 913 330000".to_string(),
            brand: "GREAN WORLD".to_string(),
            loading_message: "Loading sustainable energy solutions...".to_string(),
            eyebrow: "Welcome to".to_string(),
            tagline: "Empowering Ethiopia's energy transition with sustainable solutions"
                .to_string(),
            primary_action: CallToAction {
                label: "Explore Solutions".to_string(),
                href: "#solutions".to_string(),
            },
            secondary_action: CallToAction {
                label: "Contact Us".to_string(),
                href: "#contact".to_string(),
            },
        }
    }
}

/// A hero button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

// =============================================================================
// VIEW REGIONS
// =============================================================================

/// Whether the loading overlay still blocks the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OverlayState {
    /// Fully opaque, intercepting input.
    Opaque,
    /// Fading out over `duration_ms`, no longer intercepting input.
    FadingOut { duration_ms: u64 },
}

/// Full-viewport loading overlay with its progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadingOverlay {
    pub progress: Percent,
    pub state: OverlayState,
    pub brand: String,
    pub message: String,
    pub logo_src: String,
}

impl LoadingOverlay {
    #[must_use]
    pub fn intercepts_input(&self) -> bool {
        matches!(self.state, OverlayState::Opaque)
    }
}

/// The layer that holds the visualization and everything above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MainLayer {
    pub opacity: Percent,
    pub interactive: bool,
}

/// The embedded third-party visualization. Always mounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visualization {
    pub src: String,
    pub title: String,
    pub opacity: Percent,
}

/// Decorative layers that fade in together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmbientLayers {
    pub background: Percent,
    pub blobs: Percent,
    pub energy_overlay: Percent,
}

/// Floating phone number and QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactBadge {
    pub phone: String,
    pub qr_src: String,
    pub fade_in_ms: u64,
}

/// Main hero copy and buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroText {
    pub eyebrow: String,
    pub title: String,
    /// The typed title label is revealed once the secondary label is visible.
    pub title_revealed: bool,
    pub tagline: String,
    pub actions: [CallToAction; 2],
    pub fade_in_ms: u64,
}

/// Everything the hero section renders for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroView {
    pub overlay: Option<LoadingOverlay>,
    pub main_layer: MainLayer,
    pub visualization: Visualization,
    pub ambient: AmbientLayers,
    pub contact_badge: Option<ContactBadge>,
    pub hero_text: Option<HeroText>,
}

impl HeroView {
    /// Build the view for `snapshot`.
    #[must_use]
    pub fn from_snapshot(
        snapshot: &RevealSnapshot,
        content: &HeroContent,
        timing: &RevealTiming,
    ) -> Self {
        let reduced = snapshot.reduced_motion_requested;

        let overlay = (!reduced).then(|| LoadingOverlay {
            progress: Percent::new(snapshot.loading_progress),
            state: if snapshot.loading_complete {
                OverlayState::FadingOut {
                    duration_ms: timing.overlay_fade_ms,
                }
            } else {
                OverlayState::Opaque
            },
            brand: content.brand.clone(),
            message: content.loading_message.clone(),
            logo_src: content.logo_src.clone(),
        });

        let shown = snapshot.loading_complete || reduced;
        let main_layer = MainLayer {
            opacity: if shown { Percent::FULL } else { Percent::ZERO },
            interactive: shown,
        };

        let visualization = Visualization {
            src: content.visualization_url.clone(),
            title: content.visualization_title.clone(),
            opacity: if snapshot.loading_complete {
                Percent::FULL
            } else {
                Percent::ZERO
            },
        };

        let ambient = if snapshot.ambient_active() {
            AmbientLayers {
                background: AMBIENT_BACKGROUND_OPACITY,
                blobs: AMBIENT_BLOB_OPACITY,
                energy_overlay: ENERGY_OVERLAY_OPACITY,
            }
        } else {
            AmbientLayers {
                background: Percent::ZERO,
                blobs: Percent::ZERO,
                energy_overlay: Percent::ZERO,
            }
        };

        let ready = snapshot.is_ready();

        let contact_badge = ready.then(|| ContactBadge {
            phone: content.phone.clone(),
            qr_src: content.qr_src.clone(),
            fade_in_ms: CONTACT_FADE_IN_MS,
        });

        let hero_text = ready.then(|| HeroText {
            eyebrow: content.eyebrow.clone(),
            title: content.brand.clone(),
            title_revealed: snapshot.secondary_label_visible,
            tagline: content.tagline.clone(),
            actions: [
                content.primary_action.clone(),
                content.secondary_action.clone(),
            ],
            fade_in_ms: HERO_TEXT_FADE_IN_MS,
        });

        Self {
            overlay,
            main_layer,
            visualization,
            ambient,
            contact_badge,
            hero_text,
        }
    }

    /// Check if the overlay is still drawn and blocking input.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.overlay
            .as_ref()
            .is_some_and(LoadingOverlay::intercepts_input)
    }
}

// =============================================================================
// TESTS
// =============================================================================
