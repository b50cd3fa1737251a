// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt construction for coloring book pages
//!
//! Maps the user's description, aspect ratio and style onto the size and
//! prompt text sent to the image provider. Unknown aspect ratios and styles
//! fall back to `square` and `classic`; this module never fails.

use serde::{Deserialize, Serialize};

/// Opening instruction establishing line-art intent
pub const LINE_ART_INSTRUCTION: &str =
    "Create a black and white line art illustration suitable for printing as a coloring book page.";

/// Closing instruction reinforcing the no-fill output
pub const CONTRAST_INSTRUCTION: &str =
    "The drawing should be crisp, high contrast, and contain no filled colors or shading.";

/// Label placed in front of the user's description
pub const DESCRIPTION_LABEL: &str = "Scene description: ";

/// Separator between prompt sections
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Output shape of the generated page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    #[default]
    Square,
    Portrait,
    Landscape,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [Self::Square, Self::Portrait, Self::Landscape];

    /// Exact, case-sensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "square" => Some(Self::Square),
            "portrait" => Some(Self::Portrait),
            "landscape" => Some(Self::Landscape),
            _ => None,
        }
    }

    /// Lookup with fallback to `square`
    pub fn from_name_or_default(name: Option<&str>) -> Self {
        name.and_then(Self::from_name).unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }

    /// Provider size string, `WIDTHxHEIGHT`
    pub fn size(&self) -> &'static str {
        match self {
            Self::Square => "1024x1024",
            Self::Portrait => "1024x1536",
            Self::Landscape => "1536x1024",
        }
    }
}

/// Line-art character of the generated page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Classic,
    Minimalist,
    Detailed,
}

impl Style {
    pub const ALL: [Style; 3] = [Self::Classic, Self::Minimalist, Self::Detailed];

    /// Exact, case-sensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::Classic),
            "minimalist" => Some(Self::Minimalist),
            "detailed" => Some(Self::Detailed),
            _ => None,
        }
    }

    /// Lookup with fallback to `classic`
    pub fn from_name_or_default(name: Option<&str>) -> Self {
        name.and_then(Self::from_name).unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Minimalist => "minimalist",
            Self::Detailed => "detailed",
        }
    }

    /// Directive sentence steering the illustration
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Classic => "Classic children's coloring book lines. Use bold, clean outlines and leave open spaces for coloring. Avoid shading and gradients.",
            Self::Minimalist => "Minimalist coloring sheet. Focus on simple geometric shapes, generous negative space, and smooth, intentional outlines.",
            Self::Detailed => "Highly detailed adult coloring page. Include intricate line work, patterns, and textures while keeping it black and white.",
        }
    }
}

/// Normalized parameters for one provider call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageParams {
    pub size: &'static str,
    pub prompt: String,
}

/// Compose the provider prompt and size for a validated description
pub fn build_image_params(description: &str, aspect_ratio: AspectRatio, style: Style) -> ImageParams {
    let scene = format!("{}{}", DESCRIPTION_LABEL, description.trim());
    let prompt = [
        LINE_ART_INSTRUCTION,
        style.directive(),
        CONTRAST_INSTRUCTION,
        scene.as_str(),
    ]
    .join(SECTION_SEPARATOR);

    ImageParams {
        size: aspect_ratio.size(),
        prompt,
    }
}
